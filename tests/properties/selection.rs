//! Property tests for selection.

use ledgerview::prelude::*;
use proptest::prelude::*;

use crate::strategies::{search_text, statement};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Toggling select-all twice from an empty selection leaves it empty.
    #[test]
    fn property_toggle_select_all_twice_restores(
        records in statement(),
        text in search_text(),
        page_size in 1usize..=10,
        all_filtered in any::<bool>(),
    ) {
        let policy = if all_filtered {
            SelectAllPolicy::AllFiltered
        } else {
            SelectAllPolicy::CurrentPage
        };
        let mut view = ViewController::new("transactions", records)
            .with_page_size(page_size)
            .with_select_all_policy(policy);
        view.set_filter(FilterCriteria::new().with_text(text));

        view.toggle_select_all();
        let expected = match policy {
            SelectAllPolicy::CurrentPage => view.visible().len(),
            SelectAllPolicy::AllFiltered => view.total_items(),
        };
        prop_assert_eq!(view.selection().len(), expected);

        view.toggle_select_all();
        prop_assert!(view.selection().is_empty());
    }

    /// PROPERTY: Toggling the same id twice restores the selection.
    #[test]
    fn property_toggle_twice_is_identity(
        records in statement(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        prop_assume!(!records.is_empty());
        let mut view = ViewController::new("transactions", records.clone());
        for pick in &picks {
            view.toggle_select(&pick.get(&records).id);
        }
        let before = view.selection().clone();

        let id = &records[0].id;
        view.toggle_select(id);
        view.toggle_select(id);
        let mut after: Vec<&str> = view.selection().iter().collect();
        let mut expected: Vec<&str> = before.iter().collect();
        after.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(after, expected);
    }

    /// PROPERTY: Totals equal the sum of the selected amounts.
    #[test]
    fn property_totals_match_selected_records(
        records in statement(),
        page_size in 1usize..=10,
    ) {
        let mut view = ViewController::new("transactions", records).with_page_size(page_size);
        view.toggle_select_all();

        let expected: f64 = view.selected_records().iter().map(|r| r.amount).sum();
        let totals = view.selection_totals(&["amount"]);
        prop_assert_eq!(totals.count, view.selected_records().len());
        prop_assert!((totals.sum("amount") - expected).abs() < 1e-6);
    }
}
