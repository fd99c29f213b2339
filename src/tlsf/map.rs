//! Size-to-index mapping: the closed-form arithmetic that turns a byte size
//! into a `(fl, sl)` coordinate in the segregated free-list table, and back.
use super::{
    FL_INDEX_SHIFT, SL_INDEX_COUNT_LOG2, SMALL_BLOCK_SIZE,
};
use crate::int::fls_sizet;

/// Maps a block's actual size down to the list that holds blocks of
/// exactly that size class ("round down"). Used when filing a block that
/// already exists.
///
/// Returns `None` if `size` doesn't fit any list (too large for the
/// configured first-level range); callers are expected to have already
/// bounded `size` by `block_size_max`.
#[inline]
pub(super) fn mapping_insert(size: usize) -> Option<(usize, usize)> {
    if size < SMALL_BLOCK_SIZE {
        // Linear subdivision within the smallest first-level row.
        Some((0, size / (SMALL_BLOCK_SIZE / (1 << SL_INDEX_COUNT_LOG2))))
    } else {
        let fl = fls_sizet(size);
        let sl = (size >> (fl - SL_INDEX_COUNT_LOG2)) ^ (1 << SL_INDEX_COUNT_LOG2);
        let fl = fl.checked_sub(FL_INDEX_SHIFT - 1)?;
        Some((fl as usize, sl))
    }
}

/// Maps a requested size up to the first list guaranteed to only contain
/// blocks large enough to satisfy it ("round up"). Used when searching for
/// a block to service an allocation.
#[inline]
pub(super) fn mapping_search(size: usize) -> Option<(usize, usize)> {
    let rounded = if size >= 4 {
        let round = (1usize << (fls_sizet(size) - SL_INDEX_COUNT_LOG2)) - 1;
        size.checked_add(round)?
    } else {
        size
    };
    mapping_insert(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    /// Property-based counterpart to `search_never_undershoots_insert`
    /// below: instead of an exhaustive sweep over a bounded range, this
    /// lets `quickcheck` throw arbitrary `usize` values (including ones
    /// near `usize::MAX`) at the pair of functions.
    #[quickcheck]
    fn search_never_undershoots_insert_prop(size: usize) -> bool {
        match (mapping_search(size), mapping_insert(size)) {
            (Some(s), Some(i)) => s >= i,
            (None, _) => true,
            (Some(_), None) => false,
        }
    }

    /// `mapping_insert` must never place a larger block in an earlier
    /// (lower-capacity) list than a smaller one.
    #[quickcheck]
    fn mapping_insert_is_monotonic(a: usize, b: usize) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        match (mapping_insert(lo), mapping_insert(hi)) {
            (Some(lo_idx), Some(hi_idx)) => lo_idx <= hi_idx,
            _ => true,
        }
    }

    #[test]
    fn small_sizes_use_linear_subdivision() {
        assert_eq!(mapping_insert(0), Some((0, 0)));
        assert_eq!(mapping_insert(4), Some((0, 1)));
        assert_eq!(mapping_insert(12), Some((0, 3)));
    }

    #[test]
    fn large_sizes_climb_first_level() {
        // 16 is the smallest size routed through the `fls`-based branch.
        let (fl, sl) = mapping_insert(16).unwrap();
        assert_eq!((fl, sl), mapping_insert(16).unwrap());
        assert!(fl < 27);
        assert!(sl < 4);
    }

    #[test]
    fn search_never_undershoots_insert() {
        for n in 0usize..4096 {
            let n = n * 4;
            if let Some((fl_s, sl_s)) = mapping_search(n) {
                let (fl_i, sl_i) = mapping_insert(n).unwrap();
                assert!(
                    (fl_s, sl_s) >= (fl_i, sl_i),
                    "search({}) = {:?} should be >= insert({}) = {:?}",
                    n,
                    (fl_s, sl_s),
                    n,
                    (fl_i, sl_i)
                );
            }
        }
    }
}
