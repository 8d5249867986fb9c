//! Pagination arithmetic over the filtered list.
//!
//! The page index is plain data; an out-of-range index is a valid state that
//! yields an empty visible slice, never an error.

/// Fixed number of records shown per page.
pub const COUNTRIES_PER_PAGE: usize = 10;

/// Number of pages needed to show `total` items, `per_page` at a time.
///
/// `per_page` must be non-zero; a page that can hold nothing has no page
/// count.
pub fn page_count(total: usize, per_page: usize) -> usize {
    debug_assert!(per_page > 0, "page size must be non-zero");
    total.div_ceil(per_page)
}

/// The contiguous sub-range of `items` visible on the zero-based
/// `page_index`, clamped to the bounds of the list.
pub fn visible_slice<T>(items: &[T], page_index: usize, per_page: usize) -> &[T] {
    let last = page_index
        .saturating_add(1)
        .saturating_mul(per_page)
        .min(items.len());
    let first = page_index.saturating_mul(per_page).min(items.len());
    &items[first..last]
}

/// Convert the 1-based page number emitted by a page selector into the
/// internal zero-based index.
pub fn page_index_from_selector(page: usize) -> usize {
    page.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::{
        COUNTRIES_PER_PAGE, page_count, page_index_from_selector, visible_slice,
    };

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(25, COUNTRIES_PER_PAGE), 3);
        assert_eq!(page_count(30, COUNTRIES_PER_PAGE), 3);
        assert_eq!(page_count(0, COUNTRIES_PER_PAGE), 0);
        assert_eq!(page_count(1, COUNTRIES_PER_PAGE), 1);
    }

    #[test]
    #[should_panic(expected = "page size must be non-zero")]
    fn zero_page_size_is_a_caller_bug() {
        page_count(25, 0);
    }

    #[test]
    fn full_page_slices_run_in_tens() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(
            visible_slice(&items, 0, COUNTRIES_PER_PAGE),
            &(0..10).collect::<Vec<_>>()[..]
        );
        assert_eq!(
            visible_slice(&items, 1, COUNTRIES_PER_PAGE),
            &(10..20).collect::<Vec<_>>()[..]
        );
    }

    #[test]
    fn last_page_is_short() {
        let items: Vec<usize> = (0..25).collect();
        let slice = visible_slice(&items, 2, COUNTRIES_PER_PAGE);
        assert_eq!(slice.len(), 5);
        assert_eq!(slice, &(20..25).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let items: Vec<usize> = (0..25).collect();
        assert!(visible_slice(&items, 5, COUNTRIES_PER_PAGE).is_empty());
        assert!(visible_slice(&items, usize::MAX, COUNTRIES_PER_PAGE).is_empty());
    }

    #[test]
    fn selector_pages_are_one_based() {
        assert_eq!(page_index_from_selector(1), 0);
        assert_eq!(page_index_from_selector(3), 2);
        // A selector should never emit 0, but saturate rather than wrap.
        assert_eq!(page_index_from_selector(0), 0);
    }
}
