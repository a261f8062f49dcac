use crate::error::EncodingError;
use crate::Result;

/// Source content of a [`ByteSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteValue<'a> {
    Empty,
    /// Each character becomes its code point, which must be at most 0xFF.
    Text(&'a str),
    Int(u8),
    Bytes(&'a [u8]),
}

/// Describes how to produce one run of bytes.
///
/// `length` normalizes the content first (truncating it or padding it with
/// `fill`), then `offset` zero bytes are placed in front of the result. The
/// offset padding is always 0x00, whatever `fill` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSpec<'a> {
    value: ByteValue<'a>,
    length: Option<usize>,
    fill: u8,
    offset: Option<usize>,
}

impl<'a> ByteSpec<'a> {
    pub const fn new(value: ByteValue<'a>) -> Self {
        Self {
            value,
            length: None,
            fill: 0x00,
            offset: None,
        }
    }

    pub const fn empty() -> Self {
        Self::new(ByteValue::Empty)
    }

    pub const fn text(text: &'a str) -> Self {
        Self::new(ByteValue::Text(text))
    }

    pub const fn int(value: u8) -> Self {
        Self::new(ByteValue::Int(value))
    }

    pub const fn bytes(bytes: &'a [u8]) -> Self {
        Self::new(ByteValue::Bytes(bytes))
    }

    /// `len` bytes of 0x00.
    pub const fn zeros(len: usize) -> Self {
        Self::empty().with_length(len)
    }

    pub const fn with_length(self, length: usize) -> Self {
        Self {
            length: Some(length),
            ..self
        }
    }

    pub const fn with_fill(self, fill: u8) -> Self {
        Self { fill, ..self }
    }

    pub const fn with_offset(self, offset: usize) -> Self {
        Self {
            offset: Some(offset),
            ..self
        }
    }

    /// Number of bytes [`ByteSpec::build`] produces, when it succeeds.
    pub fn encoded_len(&self) -> usize {
        let content_len = match self.length {
            Some(length) => length,
            None => match self.value {
                ByteValue::Empty => 0,
                ByteValue::Text(text) => text.chars().count(),
                ByteValue::Int(_) => 1,
                ByteValue::Bytes(bytes) => bytes.len(),
            },
        };
        self.offset.unwrap_or(0) + content_len
    }

    pub fn build(&self) -> Result<Vec<u8>> {
        let mut content = self.content()?;

        if let Some(length) = self.length {
            content.resize(length, self.fill);
        }

        match self.offset {
            Some(offset) => {
                let mut out = Vec::with_capacity(offset + content.len());
                out.resize(offset, 0x00);
                out.extend_from_slice(&content);
                Ok(out)
            }
            None => Ok(content),
        }
    }

    fn content(&self) -> Result<Vec<u8>> {
        match self.value {
            ByteValue::Empty => Ok(Vec::new()),
            ByteValue::Text(text) => text_bytes(text),
            ByteValue::Int(value) => Ok(vec![value]),
            ByteValue::Bytes(bytes) => Ok(bytes.to_vec()),
        }
    }
}

impl<'a> From<&'a str> for ByteSpec<'a> {
    fn from(text: &'a str) -> Self {
        Self::text(text)
    }
}

pub fn build(spec: &ByteSpec<'_>) -> Result<Vec<u8>> {
    spec.build()
}

/// Builds every spec in order and concatenates the results.
pub fn build_all(specs: &[ByteSpec<'_>]) -> Result<Vec<u8>> {
    let capacity = specs.iter().map(ByteSpec::encoded_len).sum();
    let mut out = Vec::with_capacity(capacity);
    for spec in specs {
        out.extend(spec.build()?);
    }
    Ok(out)
}

/// Maps each character of `text` to a single byte.
pub fn text_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| EncodingError::NonByteChar { ch, index }))
        .collect()
}
