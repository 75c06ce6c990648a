//! File system utility helpers (file probes, BOM-aware readers)
use std::fs;
use std::path::Path;

/// Returns `true` when `path` exists and is a regular file (symlinks followed).
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
}

/// Read captured test output as UTF-8 text, stripping UTF-8 BOM if present.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD instead of failing the
/// whole read.
pub fn read_output_file(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    let mut content = decode_lossy(bytes);
    if content.starts_with('\u{FEFF}') {
        content = content.trim_start_matches('\u{FEFF}').to_string();
    }
    Ok(content)
}

/// Decodes runner output that is expected to be UTF-8 but may not be.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            tracing::warn!("Invalid UTF-8 in test output, replacing undecodable bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
