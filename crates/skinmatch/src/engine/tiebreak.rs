//! Ready-made tiebreak comparators.
//!
//! A tiebreak only orders entities the engine already considers equal on
//! matched bits and exact coverage. By convention the interesting end of a
//! field (most stock, highest potency, best rating) comes first.

use std::cmp::Ordering;

/// Leave full ties in catalog order.
pub fn catalog_order<T: ?Sized>() -> impl FnMut(&T, &T) -> Ordering {
    |_: &T, _: &T| Ordering::Equal
}

/// Larger keys first. Incomparable keys (NaN) sort last.
pub fn descending_by<T, K, F>(mut key: F) -> impl FnMut(&T, &T) -> Ordering
where
    T: ?Sized,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    move |a: &T, b: &T| {
        let (ka, kb) = (key(a), key(b));
        kb.partial_cmp(&ka)
            .unwrap_or_else(|| incomparable_last(&ka, &kb))
    }
}

/// Smaller keys first. Incomparable keys (NaN) sort last.
pub fn ascending_by<T, K, F>(mut key: F) -> impl FnMut(&T, &T) -> Ordering
where
    T: ?Sized,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    move |a: &T, b: &T| {
        let (ka, kb) = (key(a), key(b));
        ka.partial_cmp(&kb)
            .unwrap_or_else(|| incomparable_last(&ka, &kb))
    }
}

/// Orders a pair `partial_cmp` gave up on. A key that is not even comparable
/// with itself goes after every key that is, which keeps the order total.
fn incomparable_last<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    let a_nan = a.partial_cmp(a).is_none();
    let b_nan = b.partial_cmp(b).is_none();
    a_nan.cmp(&b_nan)
}
