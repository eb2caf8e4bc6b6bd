// crates/uidpatch-cli/src/io/blob.rs

use anyhow::Context;
use std::path::Path;

/// Extension the interactive flow advises for inputs. Anything is accepted;
/// a mismatch only earns a warning line.
pub const EXPECTED_EXT: &str = "bytes";

pub fn read(path: &str) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read {path}"))
}

pub fn write(path: &str, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))
}

/// Output path used when none is given: `<stem>_modified.<ext>` next to
/// the input; extensionless inputs get a plain `_modified` suffix.
pub fn default_output_path(input: &str) -> String {
    let p = Path::new(input);
    let stem = p
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(input);
    let name = match p.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_modified.{ext}"),
        None => format!("{stem}_modified"),
    };
    match p.parent().filter(|d| !d.as_os_str().is_empty()) {
        Some(dir) => dir.join(name).to_string_lossy().into_owned(),
        None => name,
    }
}

pub fn has_expected_ext(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(EXPECTED_EXT))
        .unwrap_or(false)
}
