// crates/uidpatch-core/src/locate.rs

use crate::error::{PatchError, Result};
use crate::varint::decode_varint;

/// Byte immediately before the field's first varint byte.
pub const START_MARKER: u8 = 0x38;
/// Byte immediately after the field's last varint byte.
pub const END_MARKER: u8 = 0x42;

/// A located field inside one buffer.
///
/// `offset` indexes the first varint byte (one past the start marker),
/// `length` is the varint's encoded size in bytes, `value` its decoded
/// integer. Valid only against the buffer it was scanned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMatch {
    pub offset: usize,
    pub length: usize,
    pub value: u64,
}

/// Acceptance policy for candidate fields.
///
/// Opaque blobs can contain incidental 0x38/0x42 bytes that happen to
/// bracket a decodable varint; the filter lets a caller skip implausibly
/// short or small candidates. A rejected candidate does not stop the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanFilter {
    /// Minimum encoded length in bytes.
    pub min_len: usize,
    /// Minimum decoded value (inclusive).
    pub min_value: u64,
}

impl Default for ScanFilter {
    fn default() -> Self {
        ScanFilter {
            min_len: 1,
            min_value: 0,
        }
    }
}

impl ScanFilter {
    /// Conservative preset: only multi-byte varints carrying a large id.
    /// Cuts false positives in marker-dense blobs at the cost of missing
    /// small legitimate values.
    pub fn strict() -> Self {
        ScanFilter {
            min_len: 3,
            min_value: 100_001,
        }
    }

    fn accepts(&self, m: &FieldMatch) -> bool {
        m.length >= self.min_len && m.value >= self.min_value
    }
}

/// Scan `buf` left to right for the first marker-delimited varint field
/// that passes `filter`.
///
/// At each 0x38 a varint decode is attempted one byte further; the
/// candidate is accepted when the decode succeeds and the byte right after
/// the varint is 0x42. Decode failures, bounds misses, and filter
/// rejections advance the scan by one byte.
pub fn find_field(buf: &[u8], filter: &ScanFilter) -> Result<FieldMatch> {
    // The last two positions cannot host marker + varint + marker.
    let scan_end = buf.len().saturating_sub(2);
    for i in 0..scan_end {
        if buf[i] != START_MARKER {
            continue;
        }
        if let Some(m) = probe(buf, i, filter) {
            return Ok(m);
        }
    }
    Err(PatchError::NotFound(format!(
        "no marker-delimited varint field in {} bytes",
        buf.len()
    )))
}

/// Probe one start-marker position. `None` means this candidate is
/// rejected and the scan should continue.
fn probe(buf: &[u8], marker_at: usize, filter: &ScanFilter) -> Option<FieldMatch> {
    let offset = marker_at + 1;
    let (value, length) = decode_varint(buf, offset).ok()?;
    match buf.get(offset + length) {
        Some(&END_MARKER) => {}
        _ => return None,
    }
    let m = FieldMatch {
        offset,
        length,
        value,
    };
    filter.accepts(&m).then_some(m)
}
