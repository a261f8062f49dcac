//! Fixed-offset magic checks, one list per extension, mirroring what common
//! file-type sniffers inspect. Used as the acceptance oracle for generated
//! buffers.

#![deny(warnings)]
#![deny(clippy::all)]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicRule {
    pub offset: usize,
    pub bytes: &'static [u8],
}

impl MagicRule {
    pub fn matches(&self, buf: &[u8]) -> bool {
        buf.get(self.offset..self.offset + self.bytes.len()) == Some(self.bytes)
    }
}

const fn at(offset: usize, bytes: &'static [u8]) -> MagicRule {
    MagicRule { offset, bytes }
}

const ZIP: MagicRule = at(0, &[0x50, 0x4B, 0x03, 0x04]);
const FTYP: MagicRule = at(4, b"ftyp");
const OGG: MagicRule = at(0, b"OggS");
const RIFF: MagicRule = at(0, b"RIFF");
const PNG: MagicRule = at(0, &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
const JP2: MagicRule = at(
    0,
    &[
        0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
    ],
);
const EBML: MagicRule = at(0, &[0x1A, 0x45, 0xDF, 0xA3]);
const EBML_DOCTYPE: MagicRule = at(5, &[0x42, 0x82]);

pub static DETECTION_RULES: &[(&str, &[MagicRule])] = &[
    ("3g2", &[FTYP, at(8, b"3g2 ")]),
    ("3gp", &[FTYP, at(8, b"3gp ")]),
    ("3mf", &[ZIP, at(30, b"3D/.model")]),
    ("7z", &[at(0, &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C])]),
    ("aac", &[at(0, &[0xFF, 0xF1])]),
    ("ac3", &[at(0, &[0x0B, 0x77])]),
    ("ai", &[at(0, b"%PDF"), at(1354, b"AIPrivateData")]),
    ("aif", &[at(0, b"FORM")]),
    ("alias", &[at(0, b"book\0\0\0\0mark\0\0\0\0")]),
    ("amr", &[at(0, b"#!AMR")]),
    ("ape", &[at(0, b"MAC ")]),
    ("apng", &[PNG, at(12, b"acTL")]),
    ("ar", &[at(0, b"!<arch>"), at(7, &[0; 14])]),
    ("arrow", &[at(0, b"ARROW1\0\0")]),
    (
        "asf",
        &[at(
            0,
            &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9],
        )],
    ),
    ("avi", &[RIFF, at(8, b"AVI")]),
    ("avif", &[FTYP, at(8, b"avif")]),
    ("blend", &[at(0, b"BLENDER")]),
    ("bmp", &[at(0, b"BM")]),
    ("bpg", &[at(0, &[0x42, 0x50, 0x47, 0xFB])]),
    ("bz2", &[at(0, b"BZh")]),
    ("cab", &[at(0, b"MSCF")]),
    (
        "cfb",
        &[at(0, &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])],
    ),
    ("chm", &[at(0, b"ITSF")]),
    ("cr2", &[at(0, &[0x49, 0x49, 0x2A, 0x00]), at(8, b"CR")]),
    ("cr3", &[FTYP, at(8, b"crx ")]),
    ("crx", &[at(0, b"Cr24")]),
    ("cur", &[at(0, &[0x00, 0x00, 0x02, 0x00])]),
    ("dcm", &[at(128, b"DICM")]),
    ("deb", &[at(0, b"!<arch>"), at(8, b"debian-binary")]),
    ("dmg", &[at(0, &[0x78, 0x01])]),
    ("docx", &[ZIP, at(30, b"word/")]),
    ("dsf", &[at(0, b"DSD ")]),
    ("elf", &[at(0, b"\x7FELF")]),
    ("eot", &[at(8, &[0x00, 0x00, 0x01]), at(34, b"LP")]),
    ("eps", &[at(0, b"%!PS-Adobe-"), at(14, b" EPSF-")]),
    (
        "epub",
        &[ZIP, at(30, b"mimetype"), at(38, b"application/epub+zip")],
    ),
    ("exe", &[at(0, b"MZ")]),
    ("f4a", &[FTYP, at(8, b"F4A ")]),
    ("f4b", &[FTYP, at(8, b"F4B ")]),
    ("f4p", &[FTYP, at(8, b"F4P ")]),
    ("f4v", &[FTYP, at(8, b"F4V ")]),
    ("flac", &[at(0, b"fLaC")]),
    ("flif", &[at(0, b"FLIF")]),
    ("flv", &[at(0, b"FLV\x01")]),
    ("gif", &[at(0, b"GIF")]),
    ("glb", &[at(0, b"glTF\x02\0\0\0")]),
    ("gz", &[at(0, &[0x1F, 0x8B, 0x08])]),
    ("heic", &[FTYP, at(8, b"mif1")]),
    ("icns", &[at(0, b"icns")]),
    ("ico", &[at(0, &[0x00, 0x00, 0x01, 0x00])]),
    ("ics", &[at(0, b"BEGIN:VCALENDAR")]),
    (
        "indd",
        &[at(
            0,
            &[
                0x06, 0x06, 0xED, 0xF5, 0xD8, 0x1D, 0x46, 0xE5, 0xBD, 0x31, 0xEF, 0xE7, 0xFE,
                0x74, 0xB7, 0x1D,
            ],
        )],
    ),
    ("it", &[at(0, b"IMPM")]),
    ("jp2", &[JP2, at(20, b"jp2 ")]),
    ("jpg", &[at(0, &[0xFF, 0xD8, 0xFF])]),
    ("jpx", &[JP2, at(20, b"jpx ")]),
    ("jxl", &[at(0, &[0xFF, 0x0A])]),
    ("jxr", &[at(0, &[0x49, 0x49, 0xBC])]),
    (
        "ktx",
        &[at(
            0,
            &[
                0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
            ],
        )],
    ),
    (
        "lnk",
        &[
            at(0, &[0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x00]),
            at(12, &[0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46]),
        ],
    ),
    ("lz", &[at(0, b"LZIP")]),
    ("lzh", &[at(2, b"-lh0-")]),
    ("m4a", &[FTYP, at(8, b"M4A ")]),
    ("m4b", &[FTYP, at(8, b"M4B ")]),
    ("m4p", &[FTYP, at(8, b"M4P ")]),
    ("m4v", &[FTYP, at(8, b"M4V ")]),
    ("mid", &[at(0, b"MThd")]),
    ("mie", &[at(0, &[0x7E, 0x18, 0x04, 0x00, 0x30, 0x4D, 0x49, 0x45])]),
    ("mj2", &[JP2, at(20, b"mjp2")]),
    ("mkv", &[EBML, EBML_DOCTYPE, at(8, b"matroska")]),
    ("mobi", &[at(60, b"BOOKMOBI")]),
    ("mov", &[FTYP, at(8, b"qt  ")]),
    ("mp3", &[at(0, b"ID3")]),
    ("mp4", &[FTYP, at(8, b"    ")]),
    ("mpc", &[at(0, b"MP+")]),
    ("mpg", &[at(0, &[0x00, 0x00, 0x01, 0xBA])]),
    ("mts", &[at(0, &[0x47]), at(188, &[0x47])]),
    (
        "mxf",
        &[at(
            0,
            &[
                0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01,
                0x02,
            ],
        )],
    ),
    (
        "nef",
        &[
            at(0, &[0x49, 0x49, 0x2A, 0x00]),
            at(8, &[0x1C, 0x00, 0xFE, 0x00]),
        ],
    ),
    ("nes", &[at(0, b"NES\x1A")]),
    (
        "odp",
        &[
            ZIP,
            at(30, b"mimetype"),
            at(38, b"application/vnd.oasis.opendocument.presentation"),
        ],
    ),
    (
        "ods",
        &[
            ZIP,
            at(30, b"mimetype"),
            at(38, b"application/vnd.oasis.opendocument.spreadsheet"),
        ],
    ),
    (
        "odt",
        &[
            ZIP,
            at(30, b"mimetype"),
            at(38, b"application/vnd.oasis.opendocument.text"),
        ],
    ),
    ("oga", &[OGG, at(28, b"\x7FFLAC")]),
    ("ogg", &[OGG, at(28, b"\x01vorbis")]),
    ("ogm", &[OGG, at(28, b"\x01video")]),
    ("ogv", &[OGG, at(28, b"\x80theora")]),
    ("ogx", &[OGG, at(28, &[0; 8])]),
    ("opus", &[OGG, at(28, b"OpusHead")]),
    ("orf", &[at(0, &[0x49, 0x49, 0x52, 0x4F, 0x08, 0x00, 0x00, 0x00, 0x18])]),
    ("otf", &[at(0, b"OTTO\0")]),
    ("pcap", &[at(0, &[0xD4, 0xC3, 0xB2, 0xA1])]),
    ("pdf", &[at(0, b"%PDF")]),
    ("pgp", &[at(0, b"-----BEGIN PGP MESSAGE-----")]),
    ("png", &[PNG, at(12, b"IDAT")]),
    ("pptx", &[ZIP, at(30, b"ppt/")]),
    ("ps", &[at(0, b"%!")]),
    ("psd", &[at(0, b"8BPS")]),
    ("qcp", &[RIFF, at(8, b"QLCM")]),
    ("raf", &[at(0, b"FUJIFILMCCD-RAW")]),
    ("rar", &[at(0, b"Rar!\x1A\x07\x00")]),
    ("rpm", &[at(0, &[0xED, 0xAB, 0xEE, 0xDB])]),
    ("rtf", &[at(0, b"{\\rtf")]),
    (
        "rw2",
        &[at(
            0,
            &[
                0x49, 0x49, 0x55, 0x00, 0x18, 0x00, 0x00, 0x00, 0x88, 0xE7, 0x74, 0xD8,
            ],
        )],
    ),
    ("s3m", &[at(44, b"SCRM")]),
    ("shp", &[at(0, &[0x00, 0x00, 0x27, 0x0A])]),
    (
        "skp",
        &[
            at(0, &[0xFF, 0xFE, 0xFF, 0x0E]),
            at(4, b"S\0k\0e\0t\0c\0h\0U\0p\0 \0M\0o\0d\0e\0l\0"),
        ],
    ),
    ("spx", &[OGG, at(28, b"Speex  ")]),
    ("sqlite", &[at(0, b"SQLi")]),
    ("stl", &[at(0, b"solid ")]),
    ("swf", &[at(0, b"CWS")]),
    ("tar", &[at(100, b"000644"), at(148, b" 10060"), at(257, b"ustar")]),
    ("tif", &[at(0, &[0x49, 0x49, 0x2B])]),
    ("ttf", &[at(0, &[0x00, 0x01, 0x00, 0x00, 0x00])]),
    ("vcf", &[at(0, b"BEGIN:VCARD")]),
    ("voc", &[at(0, b"Creative Voice File")]),
    ("wasm", &[at(0, b"\0asm")]),
    ("wav", &[RIFF, at(8, b"WAVE")]),
    ("webm", &[EBML, EBML_DOCTYPE, at(8, b"webm")]),
    ("webp", &[at(8, b"WEBP")]),
    ("woff", &[at(0, b"wOFF\x00\x01\x00\x00")]),
    ("woff2", &[at(0, b"wOF2\x00\x01\x00\x00")]),
    ("wv", &[at(0, b"wvpk")]),
    ("xcf", &[at(0, b"gimp xcf ")]),
    ("xlsx", &[ZIP, at(30, b"xl/")]),
    ("xm", &[at(0, b"Extended Module:")]),
    ("xml", &[at(0, b"<?xml ")]),
    ("xpi", &[ZIP, at(30, b"META-INF/mozilla.rsa")]),
    ("xz", &[at(0, &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00])]),
    ("Z", &[at(0, &[0x1F, 0xA0])]),
    ("zip", &[ZIP]),
    ("zst", &[at(0, &[0x28, 0xB5, 0x2F, 0xFD])]),
];

pub fn rules_for(extension: &str) -> Option<&'static [MagicRule]> {
    DETECTION_RULES
        .iter()
        .find(|(name, _)| *name == extension)
        .map(|(_, rules)| *rules)
}

/// Rules for `extension` that `buf` fails, or `None` when the extension has
/// no rules.
pub fn failed_rules(extension: &str, buf: &[u8]) -> Option<Vec<MagicRule>> {
    let rules = rules_for(extension)?;
    Some(
        rules
            .iter()
            .filter(|rule| !rule.matches(buf))
            .copied()
            .collect(),
    )
}

pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
