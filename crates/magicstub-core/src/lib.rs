#![deny(warnings)]
#![deny(clippy::all)]

pub mod bytes;
pub mod error;

pub use bytes::{build, build_all, text_bytes, ByteSpec, ByteValue};
pub use error::EncodingError;

pub type Result<T> = std::result::Result<T, EncodingError>;
