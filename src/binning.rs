//! Float-quantized size classes.
//!
//! Sizes map to one of [`NUM_BINS`] bins through a custom floating-point
//! encoding: 3-bit mantissa, 5-bit exponent, 8 bits total. Bin boundaries
//! follow a piecewise-linear log curve, so within any size class the
//! worst-case relative overhead between a requested size and the class it
//! lands in stays below `1 / 2^MANTISSA_BITS` (12.5 %).
//!
//! Two encoders exist because the allocator needs opposite guarantees on its
//! two paths:
//! - [`round_up`] on lookup: every block in the selected bin is >= the
//!   requested size.
//! - [`round_down`] on insert: the bin's nominal size is <= the block, so a
//!   round-up lookup that lands in the bin never overshoots the block.

pub(crate) const MANTISSA_BITS: u32 = 3;
pub(crate) const MANTISSA_VALUE: u32 = 1 << MANTISSA_BITS;
pub(crate) const MANTISSA_MASK: u32 = MANTISSA_VALUE - 1;

/// Total number of size classes (5-bit exponent x 3-bit mantissa).
pub const NUM_BINS: usize = 256;

/// Encode `size` into the smallest bin whose nominal size is >= `size`.
///
/// Sizes below [`MANTISSA_VALUE`] are denormal and encode exactly. In the
/// normal range, any non-zero dropped low bit bumps the mantissa; mantissa
/// overflow carries into the exponent, which simply selects the next bin.
#[inline]
pub(crate) fn round_up(size: u32) -> u32 {
    if size < MANTISSA_VALUE {
        // Denorm: 0..7 encode exactly.
        return size;
    }

    // Normalized: hidden high bit is implied, not stored. Just like float.
    let highest_set_bit = 31 - size.leading_zeros();
    let mantissa_start = highest_set_bit - MANTISSA_BITS;
    let exp = mantissa_start + 1;
    let mut mantissa = (size >> mantissa_start) & MANTISSA_MASK;

    let low_bits = (1u32 << mantissa_start) - 1;
    if size & low_bits != 0 {
        mantissa += 1;
    }

    // `+` (not `|`) lets mantissa overflow carry into the exponent.
    (exp << MANTISSA_BITS) + mantissa
}

/// Encode `size` into the largest bin whose nominal size is <= `size`.
#[inline]
pub(crate) fn round_down(size: u32) -> u32 {
    if size < MANTISSA_VALUE {
        return size;
    }

    let highest_set_bit = 31 - size.leading_zeros();
    let mantissa_start = highest_set_bit - MANTISSA_BITS;
    let exp = mantissa_start + 1;
    let mantissa = (size >> mantissa_start) & MANTISSA_MASK;

    (exp << MANTISSA_BITS) | mantissa
}

/// Decode a bin index back to its nominal byte size.
///
/// Exact inverse of both encoders for bins below 240; bins 240..=255 decode
/// past the 32-bit range and drop their high bits, matching the reference
/// behavior. Such bins are never produced by [`round_down`], so they carry
/// no free blocks.
#[inline]
pub(crate) fn bin_to_size(bin: u32) -> u32 {
    let exp = bin >> MANTISSA_BITS;
    let mantissa = bin & MANTISSA_MASK;
    if exp == 0 {
        // Denorms
        mantissa
    } else {
        (mantissa | MANTISSA_VALUE) << (exp - 1)
    }
}
