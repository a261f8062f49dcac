use magicstub_core::ByteSpec;

use crate::signature::Signature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionEntry {
    pub name: &'static str,
    pub signature: Signature,
}

const fn entry(name: &'static str, signature: Signature) -> ExtensionEntry {
    ExtensionEntry { name, signature }
}

const fn zip(file_name: &'static str) -> Signature {
    Signature::Zip {
        file_name,
        mime: None,
    }
}

const fn zip_mime(file_name: &'static str, mime: &'static str) -> Signature {
    Signature::Zip {
        file_name,
        mime: Some(mime),
    }
}

const fn text(value: &'static str) -> Signature {
    Signature::Text(value)
}

pub static EXTENSIONS: &[ExtensionEntry] = &[
    entry("3g2", Signature::Ftyp("3g2")),
    entry("3gp", Signature::Ftyp("3gp")),
    entry("3mf", zip("3D/.model")),
    entry("7z", Signature::Literal(&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C])),
    entry("aac", Signature::Literal(&[0xFF, 0xF1])),
    entry("ac3", Signature::Literal(&[0x0B, 0x77])),
    entry(
        "ai",
        Signature::Spec(&[
            ByteSpec::text("%PDF"),
            ByteSpec::text("AIPrivateData").with_offset(1350),
        ]),
    ),
    entry("aif", text("FORM")),
    entry(
        "alias",
        Signature::Literal(&[
            0x62, 0x6F, 0x6F, 0x6B, 0x00, 0x00, 0x00, 0x00, 0x6D, 0x61, 0x72, 0x6B, 0x00, 0x00,
            0x00, 0x00,
        ]),
    ),
    entry("amr", text("#!AMR")),
    entry("ape", text("MAC ")),
    entry("apng", Signature::Png("acTL")),
    entry(
        "ar",
        Signature::Spec(&[ByteSpec::text("!<arch>").with_length(21)]),
    ),
    entry(
        "arrow",
        Signature::Literal(&[0x41, 0x52, 0x52, 0x4F, 0x57, 0x31, 0x00, 0x00]),
    ),
    entry(
        "asf",
        Signature::Literal(&[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9]),
    ),
    entry("avi", Signature::Riff(&[0x41, 0x56, 0x49])),
    entry("avif", Signature::Ftyp("avif")),
    entry("blend", text("BLENDER")),
    entry("bmp", Signature::Literal(&[0x42, 0x4D])),
    entry("bpg", Signature::Literal(&[0x42, 0x50, 0x47, 0xFB])),
    entry("bz2", Signature::Literal(&[0x42, 0x5A, 0x68])),
    entry("cab", text("MSCF")),
    entry(
        "cfb",
        Signature::Literal(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
    ),
    entry("chm", text("ITSF")),
    entry(
        "cr2",
        Signature::Spec(&[
            ByteSpec::bytes(&[0x49, 0x49, 0x2A, 0x00, 0x06]),
            ByteSpec::text("CR").with_offset(3),
        ]),
    ),
    entry("cr3", Signature::Ftyp("crx")),
    entry("crx", text("Cr24")),
    entry("cur", Signature::Literal(&[0x00, 0x00, 0x02, 0x00])),
    entry(
        "dcm",
        Signature::Spec(&[ByteSpec::bytes(&[0x44, 0x49, 0x43, 0x4D]).with_offset(128)]),
    ),
    entry(
        "deb",
        Signature::Spec(&[
            ByteSpec::text("!<arch>"),
            ByteSpec::text("debian-binary").with_offset(1),
        ]),
    ),
    entry("dmg", Signature::Literal(&[0x78, 0x01])),
    entry("docx", zip("word/.xml")),
    entry("dsf", text("DSD ")),
    entry("elf", Signature::Literal(&[0x7F, 0x45, 0x4C, 0x46])),
    entry(
        "eot",
        Signature::Spec(&[
            ByteSpec::bytes(&[0x00, 0x00, 0x01]).with_offset(8),
            ByteSpec::bytes(&[0x4C, 0x50]).with_offset(34 - 8 - 3),
        ]),
    ),
    entry(
        "eps",
        Signature::Spec(&[
            ByteSpec::bytes(&[0x25, 0x21]),
            ByteSpec::text("PS-Adobe-"),
            ByteSpec::text(" EPSF-").with_offset(3),
        ]),
    ),
    entry("epub", zip_mime("mimetype", "application/epub+zip")),
    entry("exe", Signature::Literal(&[0x4D, 0x5A])),
    entry("f4a", Signature::Ftyp("F4A")),
    entry("f4b", Signature::Ftyp("F4B")),
    entry("f4p", Signature::Ftyp("F4P")),
    entry("f4v", Signature::Ftyp("F4V")),
    entry("flac", text("fLaC")),
    entry("flif", text("FLIF")),
    entry("flv", Signature::Literal(&[0x46, 0x4C, 0x56, 0x01])),
    entry("gif", Signature::Literal(&[0x47, 0x49, 0x46])),
    entry(
        "glb",
        Signature::Literal(&[0x67, 0x6C, 0x54, 0x46, 0x02, 0x00, 0x00, 0x00]),
    ),
    entry("gz", Signature::Literal(&[0x1F, 0x8B, 0x08])),
    entry("heic", Signature::Ftyp("mif1")),
    entry("icns", text("icns")),
    entry("ico", Signature::Literal(&[0x00, 0x00, 0x01, 0x00])),
    entry("ics", text("BEGIN:VCALENDAR")),
    entry(
        "indd",
        Signature::Literal(&[
            0x06, 0x06, 0xED, 0xF5, 0xD8, 0x1D, 0x46, 0xE5, 0xBD, 0x31, 0xEF, 0xE7, 0xFE, 0x74,
            0xB7, 0x1D,
        ]),
    ),
    entry("it", text("IMPM")),
    entry("jp2", Signature::Jpeg2000("jp2")),
    entry("jpg", Signature::Literal(&[0xFF, 0xD8, 0xFF])),
    entry("jpx", Signature::Jpeg2000("jpx")),
    entry("jxl", Signature::Literal(&[0xFF, 0x0A])),
    entry("jxr", Signature::Literal(&[0x49, 0x49, 0xBC])),
    entry(
        "ktx",
        Signature::Literal(&[
            0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
        ]),
    ),
    entry(
        "lnk",
        Signature::Literal(&[
            0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
        ]),
    ),
    entry("lz", text("LZIP")),
    entry(
        "lzh",
        Signature::Spec(&[ByteSpec::text("-lh0-").with_offset(2)]),
    ),
    entry("m4a", Signature::Ftyp("M4A")),
    entry("m4b", Signature::Ftyp("M4B")),
    entry("m4p", Signature::Ftyp("M4P")),
    entry("m4v", Signature::Ftyp("M4V")),
    entry("mid", text("MThd")),
    entry(
        "mie",
        Signature::Literal(&[0x7E, 0x18, 0x04, 0x00, 0x30, 0x4D, 0x49, 0x45]),
    ),
    entry("mj2", Signature::Jpeg2000("mjp2")),
    entry(
        "mkv",
        Signature::Spec(&[
            ByteSpec::bytes(&[0x1A, 0x45, 0xDF, 0xA3, 0x8B, 0x42, 0x82, 0x88]),
            ByteSpec::text("matroska"),
        ]),
    ),
    entry(
        "mobi",
        Signature::Spec(&[
            ByteSpec::bytes(&[0x42, 0x4F, 0x4F, 0x4B, 0x4D, 0x4F, 0x42, 0x49]).with_offset(60),
        ]),
    ),
    entry("mov", Signature::Ftyp("qt")),
    entry(
        "mp3",
        Signature::Spec(&[ByteSpec::text("ID3"), ByteSpec::text("#TSSE").with_offset(5)]),
    ),
    entry("mp4", Signature::Ftyp("")),
    entry("mpc", text("MP+")),
    entry("mpg", Signature::Literal(&[0x00, 0x00, 0x01, 0xBA, 0x21])),
    entry(
        "mts",
        Signature::Spec(&[
            ByteSpec::bytes(&[0x47]),
            ByteSpec::bytes(&[0x47]).with_offset(187),
        ]),
    ),
    entry(
        "mxf",
        Signature::Literal(&[
            0x06, 0x0E, 0x2B, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0D, 0x01, 0x02, 0x01, 0x01, 0x02,
        ]),
    ),
    entry(
        "nef",
        Signature::Literal(&[
            0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00, 0x1C, 0x00, 0xFE, 0x00,
        ]),
    ),
    entry("nes", Signature::Literal(&[0x4E, 0x45, 0x53, 0x1A])),
    entry(
        "odp",
        zip_mime(
            "mimetype",
            "application/vnd.oasis.opendocument.presentation",
        ),
    ),
    entry(
        "ods",
        zip_mime("mimetype", "application/vnd.oasis.opendocument.spreadsheet"),
    ),
    entry(
        "odt",
        zip_mime("mimetype", "application/vnd.oasis.opendocument.text"),
    ),
    entry("oga", Signature::Ogg(&[0x7F, 0x46, 0x4C, 0x41, 0x43])),
    entry(
        "ogg",
        Signature::Ogg(&[0x01, 0x76, 0x6F, 0x72, 0x62, 0x69, 0x73]),
    ),
    entry("ogm", Signature::Ogg(&[0x01, 0x76, 0x69, 0x64, 0x65, 0x6F])),
    entry(
        "ogv",
        Signature::Ogg(&[0x80, 0x74, 0x68, 0x65, 0x6F, 0x72, 0x61]),
    ),
    entry("ogx", Signature::Ogg(&[])),
    entry(
        "opus",
        Signature::Ogg(&[0x4F, 0x70, 0x75, 0x73, 0x48, 0x65, 0x61, 0x64]),
    ),
    entry(
        "orf",
        Signature::Literal(&[0x49, 0x49, 0x52, 0x4F, 0x08, 0x00, 0x00, 0x00, 0x18]),
    ),
    entry("otf", Signature::Literal(&[0x4F, 0x54, 0x54, 0x4F, 0x00])),
    entry("pcap", Signature::Literal(&[0xD4, 0xC3, 0xB2, 0xA1])),
    entry("pdf", text("%PDF")),
    entry("pgp", text("-----BEGIN PGP MESSAGE-----")),
    entry("png", Signature::Png("IDAT")),
    entry("pptx", zip("ppt/.xml")),
    entry("ps", Signature::Literal(&[0x25, 0x21])),
    entry("psd", text("8BPS")),
    entry("qcp", Signature::Riff(&[0x51, 0x4C, 0x43, 0x4D])),
    entry("raf", text("FUJIFILMCCD-RAW")),
    entry(
        "rar",
        Signature::Literal(&[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00]),
    ),
    entry("rpm", Signature::Literal(&[0xED, 0xAB, 0xEE, 0xDB])),
    entry("rtf", text("{\\rtf")),
    entry(
        "rw2",
        Signature::Literal(&[
            0x49, 0x49, 0x55, 0x00, 0x18, 0x00, 0x00, 0x00, 0x88, 0xE7, 0x74, 0xD8,
        ]),
    ),
    entry(
        "s3m",
        Signature::Spec(&[ByteSpec::text("SCRM").with_offset(44)]),
    ),
    entry(
        "shp",
        Signature::Literal(&[
            0x00, 0x00, 0x27, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ]),
    ),
    entry(
        "skp",
        Signature::Literal(&[
            0xFF, 0xFE, 0xFF, 0x0E, 0x53, 0x00, 0x6B, 0x00, 0x65, 0x00, 0x74, 0x00, 0x63, 0x00,
            0x68, 0x00, 0x55, 0x00, 0x70, 0x00, 0x20, 0x00, 0x4D, 0x00, 0x6F, 0x00, 0x64, 0x00,
            0x65, 0x00, 0x6C, 0x00,
        ]),
    ),
    entry(
        "spx",
        Signature::Ogg(&[0x53, 0x70, 0x65, 0x65, 0x78, 0x20, 0x20]),
    ),
    entry("sqlite", text("SQLi")),
    entry("stl", text("solid ")),
    entry("swf", Signature::Literal(&[0x43, 0x57, 0x53])),
    entry(
        "tar",
        Signature::Spec(&[
            ByteSpec::text("x"),
            ByteSpec::text("000644").with_offset(99),
            ByteSpec::text("000765").with_offset(2),
            ByteSpec::text("000024").with_offset(2),
            ByteSpec::text("          0").with_offset(2),
            ByteSpec::text("14247674331").with_offset(1),
            ByteSpec::text(" 10060").with_offset(1),
            ByteSpec::text(" 0").with_offset(1),
            ByteSpec::text("ustar").with_offset(100),
            ByteSpec::text("00u").with_offset(1),
            ByteSpec::text("staff").with_offset(31),
            ByteSpec::text("000000").with_offset(27),
            ByteSpec::text("000000").with_offset(2),
        ]),
    ),
    entry("tif", Signature::Literal(&[0x49, 0x49, 0x2B])),
    entry("ttf", Signature::Literal(&[0x00, 0x01, 0x00, 0x00, 0x00])),
    entry("vcf", text("BEGIN:VCARD")),
    entry("voc", text("Creative Voice File")),
    entry("wasm", Signature::Literal(&[0x00, 0x61, 0x73, 0x6D])),
    entry("wav", Signature::Riff(&[0x57, 0x41, 0x56, 0x45])),
    entry(
        "webm",
        Signature::Spec(&[
            ByteSpec::bytes(&[0x1A, 0x45, 0xDF, 0xA3, 0x87, 0x42, 0x82, 0x84]),
            ByteSpec::text("webm"),
        ]),
    ),
    entry(
        "webp",
        Signature::Spec(&[ByteSpec::text("WEBP").with_offset(8)]),
    ),
    entry(
        "woff",
        Signature::Spec(&[
            ByteSpec::text("wOFF"),
            ByteSpec::bytes(&[0x00, 0x01, 0x00, 0x00]),
        ]),
    ),
    entry(
        "woff2",
        Signature::Spec(&[
            ByteSpec::text("wOF2"),
            ByteSpec::bytes(&[0x00, 0x01, 0x00, 0x00]),
        ]),
    ),
    entry("wv", text("wvpk")),
    entry("xcf", text("gimp xcf ")),
    entry("xlsx", zip("xl/.xml")),
    entry("xm", text("Extended Module:")),
    entry("xml", text("<?xml ")),
    entry("xpi", zip("META-INF/mozilla.rsa")),
    entry(
        "xz",
        Signature::Literal(&[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00]),
    ),
    entry("Z", Signature::Literal(&[0x1F, 0xA0])),
    entry("zip", Signature::Literal(&[0x50, 0x4B, 0x03, 0x04])),
    entry("zst", Signature::Literal(&[0x28, 0xB5, 0x2F, 0xFD])),
];
