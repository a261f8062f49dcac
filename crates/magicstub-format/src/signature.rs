use magicstub_core::{build_all, text_bytes, ByteSpec};

use crate::headers;
use crate::FormatError;

/// How the bytes of one extension are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Literal(&'static [u8]),
    Text(&'static str),
    /// Concatenation of builder runs.
    Spec(&'static [ByteSpec<'static>]),
    Zip {
        file_name: &'static str,
        mime: Option<&'static str>,
    },
    Ftyp(&'static str),
    Riff(&'static [u8]),
    Ogg(&'static [u8]),
    Png(&'static str),
    Jpeg2000(&'static str),
}

impl Signature {
    pub fn render(&self) -> Result<Vec<u8>, FormatError> {
        let bytes = match *self {
            Signature::Literal(bytes) => bytes.to_vec(),
            Signature::Text(text) => text_bytes(text)?,
            Signature::Spec(specs) => build_all(specs)?,
            Signature::Zip { file_name, mime } => headers::zip_header(file_name, mime)?,
            Signature::Ftyp(brand) => headers::ftyp(brand)?,
            Signature::Riff(form_type) => headers::riff(form_type)?,
            Signature::Ogg(codec) => headers::ogg(codec)?,
            Signature::Png(chunk_type) => headers::png(chunk_type)?,
            Signature::Jpeg2000(brand) => headers::jpeg2000(brand)?,
        };
        Ok(bytes)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Signature::Literal(_) => "literal",
            Signature::Text(_) => "text",
            Signature::Spec(_) => "spec",
            Signature::Zip { .. } => "zip",
            Signature::Ftyp(_) => "ftyp",
            Signature::Riff(_) => "riff",
            Signature::Ogg(_) => "ogg",
            Signature::Png(_) => "png",
            Signature::Jpeg2000(_) => "jpeg2000",
        }
    }
}
