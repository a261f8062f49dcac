use magicstub_core::EncodingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
    #[error("unknown extension: {0}")]
    UnknownExtension(String),
}
