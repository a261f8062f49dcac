use tracing::debug;

use crate::signature::Signature;
use crate::table::{ExtensionEntry, EXTENSIONS};
use crate::FormatError;

/// Bytes of a minimal file for `extension`. Lookups are case-sensitive.
pub fn create_file(extension: &str) -> Result<Vec<u8>, FormatError> {
    let signature =
        lookup(extension).ok_or_else(|| FormatError::UnknownExtension(extension.to_string()))?;
    let bytes = signature.render()?;

    debug!(
        extension,
        kind = signature.kind(),
        len = bytes.len(),
        "rendered signature"
    );

    Ok(bytes)
}

pub fn lookup(extension: &str) -> Option<&'static Signature> {
    EXTENSIONS
        .iter()
        .find(|entry| entry.name == extension)
        .map(|entry| &entry.signature)
}

pub fn is_known_extension(extension: &str) -> bool {
    lookup(extension).is_some()
}

pub fn entries() -> &'static [ExtensionEntry] {
    EXTENSIONS
}

/// Every supported extension, sorted.
pub fn extension_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = EXTENSIONS.iter().map(|entry| entry.name).collect();
    names.sort_unstable();
    names
}
