#![deny(warnings)]
#![deny(clippy::all)]

pub mod error;
pub mod factory;
pub mod headers;
pub mod signature;
pub mod table;

pub use error::FormatError;
pub use factory::{create_file, entries, extension_names, is_known_extension, lookup};
pub use headers::{
    ftyp, jpeg2000, ogg, png, riff, zip_header, JPEG2000_SIGNATURE, OGG_MAGIC, PNG_SIGNATURE,
    RIFF_MAGIC, ZIP_MAGIC,
};
pub use signature::Signature;
pub use table::{ExtensionEntry, EXTENSIONS};
