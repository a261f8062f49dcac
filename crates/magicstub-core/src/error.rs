use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EncodingError {
    #[error("character {ch:?} at index {index} does not fit in a single byte")]
    NonByteChar { ch: char, index: usize },
    #[error("{field} length {len} does not fit in a single byte")]
    LengthOutOfRange { field: &'static str, len: usize },
}
