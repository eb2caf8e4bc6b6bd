// crates/uidpatch-core/src/splice.rs

use crate::error::{PatchError, Result};
use crate::locate::FieldMatch;
use crate::varint::encode_varint;

/// Rebuild `buf` with the located field replaced by the minimal encoding
/// of `new_value`.
///
/// Output = `buf[..m.offset] ++ encode(new_value) ++ buf[m.offset+m.length..]`.
/// The marker bytes sit outside the replaced span and are untouched. The
/// replacement is not fixed-width: total length moves by the encoding
/// delta, which shifts every absolute offset past the field.
///
/// Fails with `InvalidInput` for a negative value, or when the match does
/// not lie inside `buf` (a match from a different or older buffer).
pub fn replace_field(buf: &[u8], m: &FieldMatch, new_value: i64) -> Result<Vec<u8>> {
    let stale = m.length == 0
        || m.offset
            .checked_add(m.length)
            .map_or(true, |end| end > buf.len());
    if stale {
        return Err(PatchError::InvalidInput(format!(
            "match [{}, +{}) lies outside buffer of {} bytes",
            m.offset,
            m.length,
            buf.len()
        )));
    }

    let encoded = encode_varint(new_value)?;

    let mut out = Vec::with_capacity(buf.len() - m.length + encoded.len());
    out.extend_from_slice(&buf[..m.offset]);
    out.extend_from_slice(&encoded);
    out.extend_from_slice(&buf[m.offset + m.length..]);
    Ok(out)
}
