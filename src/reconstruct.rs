//! Exact integer reconstruction from resolved storage.
//!
//! Storage reads go through the host, which may sign- or zero-extend narrow
//! values, so everything is masked to its declared width. 128-bit values are
//! held as two 64-bit words and recombined here; bounded storage carries no
//! width in its type name, so its shape is discovered from the value itself.

use crate::{
    classify::Width,
    value::{HostValue, HIGH_FIELD, LOW_FIELD},
    Result,
};

const WORD_MASK: u128 = u64::MAX as u128;

/// Reads resolved storage as an exact unsigned integer.
///
/// `width` is the storage width when the type name determined it, or `None`
/// for bounded storage. With a known width ≤ 64 the read is masked to exactly
/// that many bits. A 128-bit read combines the `low`/`high` halves as
/// `(high << 64) | low`, falling back to a single masked read for alternate
/// 128-bit representations. With no width at all, the split shape is probed
/// first and otherwise the storage's own byte size selects the mask.
///
/// No sign interpretation takes place; the supported family is unsigned by
/// construction.
///
/// # Errors
///
/// [`Error::MissingField`](crate::Error::MissingField) if the split
/// representation exposes `low` but not `high`.
pub fn reconstruct<V: HostValue>(storage: &V, width: Option<Width>) -> Result<u128> {
    match width {
        Some(Width::W128) => reconstruct_split(storage, Width::W128.mask()),
        Some(width) => Ok(storage.as_unsigned() & width.mask()),
        None => {
            let bits = storage.byte_size().saturating_mul(8);
            reconstruct_split(storage, byte_size_mask(bits))
        }
    }
}

/// Combines the split 128-bit representation, or reads the storage whole with
/// `fallback_mask` when the `low`/`high` halves are absent.
fn reconstruct_split<V: HostValue>(storage: &V, fallback_mask: u128) -> Result<u128> {
    let Some(low) = storage.field(LOW_FIELD) else {
        return Ok(storage.as_unsigned() & fallback_mask);
    };
    let high = storage.field(HIGH_FIELD).ok_or(missing_field!(HIGH_FIELD))?;
    Ok(((high.as_unsigned() & WORD_MASK) << 64) | (low.as_unsigned() & WORD_MASK))
}

/// Mask selecting `bits` low bits, saturating at the full 128-bit width.
fn byte_size_mask(bits: usize) -> u128 {
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}
