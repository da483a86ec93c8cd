//! Property tests for filtering.

use ledgerview::prelude::*;
use proptest::prelude::*;

use crate::strategies::{ids, search_text, statement};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Criteria with nothing set keep every record in source order.
    #[test]
    fn property_unrestricted_filter_is_identity(records in statement()) {
        let filtered = filter_records(&records, &FilterCriteria::new());
        let expected: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(ids(&filtered), expected);
    }

    /// PROPERTY: The filtered output is an order-preserving subsequence of the input.
    #[test]
    fn property_filter_preserves_relative_order(
        records in statement(),
        text in search_text(),
    ) {
        let filtered = filter_records(&records, &FilterCriteria::new().with_text(text));
        let positions: Vec<usize> = filtered
            .iter()
            .map(|r| records.iter().position(|s| s.id == r.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// PROPERTY: Adding a constraint never grows the result.
    #[test]
    fn property_adding_constraint_is_monotonic(
        records in statement(),
        text in search_text(),
        max in -50i32..50,
    ) {
        let base = FilterCriteria::new().with_text(text);
        let narrowed = base.clone().with_range("amount", None, Some(f64::from(max)));

        let wide = filter_records(&records, &base);
        let narrow = filter_records(&records, &narrowed);

        prop_assert!(narrow.len() <= wide.len());
        for record in &narrow {
            prop_assert!(wide.iter().any(|r| r.id == record.id));
        }
    }

    /// PROPERTY: Free-text search ignores case.
    #[test]
    fn property_text_search_ignores_case(
        records in statement(),
        text in search_text(),
    ) {
        let lower = filter_records(&records, &FilterCriteria::new().with_text(text.clone()));
        let upper = filter_records(&records, &FilterCriteria::new().with_text(text.to_uppercase()));
        prop_assert_eq!(ids(&lower), ids(&upper));
    }
}
