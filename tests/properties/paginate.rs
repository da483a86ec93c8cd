//! Property tests for pagination.

use ledgerview::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Concatenating pages 1..=total_pages rebuilds the collection.
    #[test]
    fn property_pages_reconstruct_collection(
        items in proptest::collection::vec(any::<u16>(), 0..=60),
        page_size in 1usize..=12,
    ) {
        let pages = total_pages(items.len(), page_size);
        let rebuilt: Vec<u16> = (1..=pages)
            .flat_map(|page| paginate(&items, page, page_size).iter().copied())
            .collect();
        prop_assert_eq!(rebuilt, items);
    }

    /// PROPERTY: No page is larger than the page size, and pages past the end are empty.
    #[test]
    fn property_page_bounds(
        items in proptest::collection::vec(any::<u16>(), 0..=60),
        page_size in 1usize..=12,
        page in 0usize..=20,
    ) {
        let slice = paginate(&items, page, page_size);
        prop_assert!(slice.len() <= page_size);
        if page > total_pages(items.len(), page_size) {
            prop_assert!(slice.is_empty());
        }
    }
}
