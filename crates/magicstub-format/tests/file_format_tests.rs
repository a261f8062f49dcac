use file_format::FileFormat;
use magicstub_format::{create_file, entries, is_known_extension};
use magicstub_testkit::hex;

// Entries that `file-format` (default features, signatures only) names
// differently, paired with the extension it reports.
const KNOWN_DISAGREEMENTS: &[(&str, &str)] = &[
    // Container subtypes need `reader-zip`; only the local header magic is seen.
    ("3mf", "zip"),
    ("docx", "zip"),
    ("epub", "zip"),
    ("odp", "zip"),
    ("ods", "zip"),
    ("odt", "zip"),
    ("pptx", "zip"),
    ("xlsx", "zip"),
    ("xpi", "zip"),
    // DocType needs `reader-ebml`.
    ("mkv", "ebml"),
    ("webm", "ebml"),
    // Reported as the parent format.
    ("apng", "png"),
    ("ar", "a"),
    ("deb", "a"),
    ("heic", "heif"),
    ("mts", "ts"),
    ("pgp", "asc"),
    // Stub is shorter than file-format's full signature.
    ("ai", "bin"),
    ("aif", "bin"),
    ("asf", "bin"),
    ("avi", "bin"),
    ("bmp", "bin"),
    ("gif", "bin"),
    ("jp2", "bin"),
    ("jpx", "bin"),
    ("mj2", "bin"),
    ("mp3", "bin"),
    ("mp4", "bin"),
    ("pdf", "bin"),
    ("sqlite", "bin"),
    ("tif", "bin"),
    ("voc", "bin"),
    ("webp", "bin"),
];

fn expected_extension(name: &'static str) -> &'static str {
    KNOWN_DISAGREEMENTS
        .iter()
        .find(|(ours, _)| *ours == name)
        .map_or(name, |(_, theirs)| *theirs)
}

#[test]
fn file_format_detects_generated_files() {
    for entry in entries() {
        let bytes = create_file(entry.name).expect("create file");
        let detected = FileFormat::from_bytes(&bytes);
        assert_eq!(
            detected.extension(),
            expected_extension(entry.name),
            ".{} detected as {}\nbytes: {}",
            entry.name,
            detected.name(),
            hex(&bytes)
        );
    }
}

#[test]
fn known_disagreements_stay_exceptional() {
    for (ours, theirs) in KNOWN_DISAGREEMENTS {
        assert!(is_known_extension(ours), "allowlist names unknown .{ours}");
        assert_ne!(ours, theirs, ".{ours} is not a disagreement");
    }
    assert!(KNOWN_DISAGREEMENTS.len() * 4 < entries().len());
}
