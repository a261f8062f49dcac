use magicstub_core::{build_all, ByteSpec, EncodingError, Result};

pub const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub const JPEG2000_SIGNATURE: [u8; 12] = [
    0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
];
pub const RIFF_MAGIC: [u8; 4] = *b"RIFF";
pub const OGG_MAGIC: [u8; 4] = *b"OggS";

/// Absolute offset of the file-name length byte in a ZIP local file header.
pub const ZIP_NAME_LEN_OFFSET: usize = 26;
/// Absolute offset of the file name in a ZIP local file header.
pub const ZIP_NAME_OFFSET: usize = 30;
pub const ZIP_MIME_LEN_OFFSET: usize = 18;
pub const ZIP_MIME_LEN_SECOND_OFFSET: usize = 22;

const OGG_PAGE_GAP: usize = 24;
const OGG_CODEC_LEN: usize = 8;
const BRAND_LEN: usize = 4;

/// ZIP local file header carrying the fields sniffers look at.
///
/// Length fields are single bytes positioned by zero padding rather than
/// little-endian integers. With a MIME type, the MIME length is written at
/// offsets 18 and 22 and the MIME string follows the file name. Names or MIME
/// types longer than 255 characters are rejected.
pub fn zip_header(file_name: &str, mime: Option<&str>) -> Result<Vec<u8>> {
    let name_len = length_byte("file name", file_name)?;

    let Some(mime) = mime else {
        return build_all(&[
            ByteSpec::bytes(&ZIP_MAGIC),
            ByteSpec::int(name_len).with_offset(ZIP_NAME_LEN_OFFSET - ZIP_MAGIC.len()),
            ByteSpec::text(file_name).with_offset(ZIP_NAME_OFFSET - ZIP_NAME_LEN_OFFSET - 1),
        ]);
    };

    let mime_len = length_byte("MIME type", mime)?;
    build_all(&[
        ByteSpec::bytes(&ZIP_MAGIC),
        ByteSpec::int(mime_len).with_offset(ZIP_MIME_LEN_OFFSET - ZIP_MAGIC.len()),
        ByteSpec::int(mime_len).with_offset(ZIP_MIME_LEN_SECOND_OFFSET - ZIP_MIME_LEN_OFFSET - 1),
        ByteSpec::int(name_len)
            .with_offset(ZIP_NAME_LEN_OFFSET - ZIP_MIME_LEN_SECOND_OFFSET - 1),
        ByteSpec::text(file_name).with_offset(ZIP_NAME_OFFSET - ZIP_NAME_LEN_OFFSET - 1),
        ByteSpec::text(mime),
    ])
}

/// ISO-BMFF `ftyp` box with a zeroed size field. An empty brand becomes four
/// spaces.
pub fn ftyp(brand: &str) -> Result<Vec<u8>> {
    build_all(&[
        ByteSpec::text("ftyp").with_offset(4),
        ByteSpec::text(brand).with_length(BRAND_LEN).with_fill(b' '),
    ])
}

pub fn riff(form_type: &[u8]) -> Result<Vec<u8>> {
    build_all(&[
        ByteSpec::bytes(&RIFF_MAGIC),
        ByteSpec::bytes(form_type).with_offset(4),
    ])
}

/// Ogg page header followed by an 8-byte codec identifier field.
pub fn ogg(codec: &[u8]) -> Result<Vec<u8>> {
    build_all(&[
        ByteSpec::bytes(&OGG_MAGIC),
        ByteSpec::zeros(OGG_PAGE_GAP),
        ByteSpec::bytes(codec).with_length(OGG_CODEC_LEN),
    ])
}

pub fn png(chunk_type: &str) -> Result<Vec<u8>> {
    build_all(&[
        ByteSpec::bytes(&PNG_SIGNATURE),
        ByteSpec::text(chunk_type).with_offset(4),
    ])
}

pub fn jpeg2000(brand: &str) -> Result<Vec<u8>> {
    build_all(&[
        ByteSpec::bytes(&JPEG2000_SIGNATURE),
        ByteSpec::text(brand)
            .with_length(BRAND_LEN)
            .with_fill(b' ')
            .with_offset(8),
    ])
}

fn length_byte(field: &'static str, text: &str) -> Result<u8> {
    let len = text.chars().count();
    u8::try_from(len).map_err(|_| EncodingError::LengthOutOfRange { field, len })
}
