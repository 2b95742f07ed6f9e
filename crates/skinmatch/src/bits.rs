//! Fixed-width bit helpers shared by every attribute space.
//!
//! Masks are `u32`, so there is no sign to extend and `count_ones` is exact
//! over the whole range.

/// An attribute set or query, one bit per attribute.
pub type Mask = u32;

/// Number of attributes a single [`Mask`] can carry.
pub const MASK_WIDTH: usize = Mask::BITS as usize;

/// Number of set bits in `mask`.
#[inline]
pub fn popcount(mask: Mask) -> u32 {
    mask.count_ones()
}

/// Flip `bit` in `mask`. Toggling a filter chip twice restores the query.
#[inline]
pub fn toggle_bit(mask: Mask, bit: Mask) -> Mask {
    mask ^ bit
}

/// True when the two masks share at least one bit.
#[inline]
pub fn has_overlap(a: Mask, b: Mask) -> bool {
    (a & b) != 0
}

/// True when every bit of `query` is also set in `entity`.
#[inline]
pub fn covers_all(entity: Mask, query: Mask) -> bool {
    (entity & query) == query
}

/// Iterate the single-bit components of `mask`, lowest bit first.
pub fn bits_of(mask: Mask) -> impl Iterator<Item = Mask> {
    let mut rest = mask;
    std::iter::from_fn(move || {
        if rest == 0 {
            return None;
        }
        let low = rest & rest.wrapping_neg();
        rest &= rest - 1;
        Some(low)
    })
}
