use std::collections::HashSet;

use magicstub_format::{
    create_file, entries, extension_names, is_known_extension, lookup, FormatError, Signature,
};
use magicstub_testkit::{failed_rules, hex, rules_for, DETECTION_RULES};

const GOLDEN_SIGNATURES: &str = include_str!("golden/signatures.txt");

#[test]
fn every_extension_passes_detection_rules() {
    for entry in entries() {
        let bytes = create_file(entry.name).expect("create file");
        assert!(!bytes.is_empty(), ".{} is empty", entry.name);

        let failed = failed_rules(entry.name, &bytes)
            .unwrap_or_else(|| panic!("no detection rules for .{}", entry.name));
        assert!(
            failed.is_empty(),
            ".{} failed {:?}\nbytes: {}",
            entry.name,
            failed,
            hex(&bytes)
        );
    }
}

#[test]
fn detection_rules_cover_only_known_extensions() {
    for (name, _) in DETECTION_RULES {
        assert!(is_known_extension(name), "rules for unknown .{name}");
    }
    assert_eq!(DETECTION_RULES.len(), entries().len());
}

#[test]
fn extension_names_are_unique() {
    let mut seen = HashSet::new();
    for entry in entries() {
        assert!(seen.insert(entry.name), "duplicate .{}", entry.name);
    }
}

#[test]
fn extension_names_are_sorted() {
    let names = extension_names();
    assert_eq!(names.len(), entries().len());
    assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(names.first(), Some(&"3g2"));
}

#[test]
fn unknown_extension_fails() {
    let err = create_file("doesnotexist").unwrap_err();
    assert_eq!(err, FormatError::UnknownExtension("doesnotexist".to_string()));
    assert!(lookup("doesnotexist").is_none());
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(is_known_extension("Z"));
    assert!(!is_known_extension("z"));
    assert!(!is_known_extension("PNG"));
}

#[test]
fn create_file_is_deterministic() {
    for name in ["mp4", "epub", "tar", "ogg", "jp2"] {
        assert_eq!(
            create_file(name).expect("first"),
            create_file(name).expect("second")
        );
    }
}

#[test]
fn generated_lengths() {
    let cases = [
        ("mp4", 12),
        ("avi", 11),
        ("wav", 12),
        ("ogg", 36),
        ("png", 16),
        ("jp2", 24),
        ("ar", 21),
        ("dcm", 132),
        ("mts", 189),
        ("ai", 1367),
        ("tar", 343),
    ];
    for (name, len) in cases {
        assert_eq!(create_file(name).expect("create file").len(), len, ".{name}");
    }
}

#[test]
fn reference_byte_layouts() {
    assert_eq!(
        create_file("mp4").expect("mp4"),
        b"\0\0\0\0ftyp    ".to_vec()
    );
    assert_eq!(create_file("mov").expect("mov"), b"\0\0\0\0ftypqt  ".to_vec());
    assert_eq!(create_file("avi").expect("avi"), b"RIFF\0\0\0\0AVI".to_vec());
    assert_eq!(
        create_file("cr2").expect("cr2"),
        vec![0x49, 0x49, 0x2A, 0x00, 0x06, 0x00, 0x00, 0x00, b'C', b'R']
    );
    assert_eq!(create_file("lzh").expect("lzh"), b"\0\0-lh0-".to_vec());
}

#[test]
fn every_entry_matches_golden_bytes() {
    let mut pinned = HashSet::new();
    for line in GOLDEN_SIGNATURES
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
    {
        let (name, expected) = line.split_once(' ').expect("golden line");
        let bytes =
            create_file(name).unwrap_or_else(|err| panic!("golden .{name} not generated: {err}"));
        assert_eq!(hex(&bytes), expected, ".{name}");
        assert!(pinned.insert(name), "golden .{name} listed twice");
    }
    assert_eq!(pinned.len(), entries().len());
}

#[test]
fn signature_kinds_match_generators() {
    assert!(matches!(lookup("docx"), Some(Signature::Zip { mime: None, .. })));
    assert!(matches!(
        lookup("odt"),
        Some(Signature::Zip { mime: Some(_), .. })
    ));
    assert!(matches!(lookup("m4a"), Some(Signature::Ftyp("M4A"))));
    assert!(matches!(lookup("opus"), Some(Signature::Ogg(_))));
    assert!(matches!(lookup("apng"), Some(Signature::Png("acTL"))));
    assert!(matches!(lookup("mj2"), Some(Signature::Jpeg2000("mjp2"))));
    assert!(matches!(lookup("qcp"), Some(Signature::Riff(_))));
    assert_eq!(lookup("zip").map(Signature::kind), Some("literal"));
}

#[test]
fn ambiguous_prefixes_are_distinguished() {
    let pdf = create_file("pdf").expect("pdf");
    let ai = create_file("ai").expect("ai");
    assert_eq!(&ai[..4], pdf.as_slice());
    assert!(failed_rules("ai", &pdf).is_some_and(|failed| !failed.is_empty()));

    let ar = create_file("ar").expect("ar");
    assert!(failed_rules("deb", &ar).is_some_and(|failed| !failed.is_empty()));
    let deb = create_file("deb").expect("deb");
    assert!(failed_rules("ar", &deb).is_some_and(|failed| !failed.is_empty()));

    assert!(rules_for("zip").is_some());
    let zip = create_file("zip").expect("zip");
    assert!(failed_rules("docx", &zip).is_some_and(|failed| !failed.is_empty()));
}
