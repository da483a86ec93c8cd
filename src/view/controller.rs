//! Per-screen view controller orchestrating filter, sort, pagination and selection

use crate::config::ViewConfig;
use crate::core::error::Result;
use crate::core::query::{PaginatedResponse, PaginationMeta, QueryParams};
use crate::core::record::Record;
use crate::view::filter::FilterCriteria;
use crate::view::paginate::{PageState, paginate};
use crate::view::selection::{SelectAllPolicy, SelectionSet, SelectionTotals, selection_totals};
use crate::view::sort::{SortDirection, SortKey};
use tracing::{debug, trace, warn};

/// State of one list screen over an in-memory collection
///
/// The controller owns the source records, the filter criteria, the sort
/// key, the page state and the selection. The filtered and sorted order is
/// re-derived when the source, the criteria or the sort change; page moves
/// only re-slice it. No operation fails.
///
/// # Example
///
/// ```rust,ignore
/// let mut view = ViewController::new("transactions", transactions).with_page_size(10);
/// view.set_filter(FilterCriteria::new().with_text("edf"));
/// view.set_sort(SortKey::asc("amount"));
/// for tx in view.visible() {
///     println!("{} {}", tx.label, tx.amount);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ViewController<R: Record> {
    name: String,
    source: Vec<R>,
    criteria: FilterCriteria,
    sort: Option<SortKey>,
    default_sort: Option<SortKey>,
    page: PageState,
    selection: SelectionSet,
    select_all: SelectAllPolicy,
    totals_fields: Vec<String>,
    /// Text fields scanned when the criteria names none
    search_fields: Vec<String>,
    /// Indices into `source` of the filtered records, in display order
    derived: Vec<usize>,
}

impl<R: Record> ViewController<R> {
    /// Create a controller with no filter, no sort and the default page size
    pub fn new(name: impl Into<String>, records: Vec<R>) -> Self {
        let mut view = Self {
            name: name.into(),
            source: records,
            criteria: FilterCriteria::default(),
            sort: None,
            default_sort: None,
            page: PageState::default(),
            selection: SelectionSet::new(),
            select_all: SelectAllPolicy::default(),
            totals_fields: Vec::new(),
            search_fields: Vec::new(),
            derived: Vec::new(),
        };
        view.rebuild();
        view
    }

    /// Create a controller from a view configuration
    pub fn from_config(config: &ViewConfig, records: Vec<R>) -> Result<Self> {
        let default_sort = config.default_sort_key()?;

        let mut view = Self::new(config.name.clone(), records)
            .with_page_size(config.page_size)
            .with_select_all_policy(config.select_all)
            .with_totals_fields(config.totals.iter().cloned());

        view.search_fields = config.search_fields.clone();
        if let Some(key) = default_sort {
            view = view.with_sort(key);
        }

        for field in &view.totals_fields {
            let numeric = view
                .source
                .iter()
                .any(|r| r.field_value(field).and_then(|v| v.as_number()).is_some());
            if !view.source.is_empty() && !numeric {
                warn!(view = %view.name, field = %field, "totals field is not numeric on any record");
            }
        }

        Ok(view)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page = PageState::new(page_size);
        self
    }

    /// Set the initial sort, also used when a query sends no sort
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.default_sort = Some(key.clone());
        self.sort = Some(key);
        self.rebuild();
        self
    }

    pub fn with_select_all_policy(mut self, policy: SelectAllPolicy) -> Self {
        self.select_all = policy;
        self
    }

    pub fn with_totals_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.totals_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    // === Accessors ===

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The whole source collection, unfiltered
    pub fn records(&self) -> &[R] {
        &self.source
    }

    /// The criteria as last set; the view's search fields are not merged in
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    pub fn select_all_policy(&self) -> SelectAllPolicy {
        self.select_all
    }

    pub fn current_page(&self) -> usize {
        self.page.page
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size
    }

    /// Number of records passing the filter
    pub fn total_items(&self) -> usize {
        self.derived.len()
    }

    pub fn total_pages(&self) -> usize {
        crate::view::paginate::total_pages(self.derived.len(), self.page.page_size)
    }

    /// Metadata for the pagination controls
    pub fn page_meta(&self) -> PaginationMeta {
        PaginationMeta::new(self.page.page, self.page.page_size, self.derived.len())
    }

    /// Every filtered record, in display order
    pub fn filtered(&self) -> Vec<&R> {
        self.derived.iter().map(|&i| &self.source[i]).collect()
    }

    /// Records of the current page, in display order
    ///
    /// Empty when the current page is past the last one.
    pub fn visible(&self) -> Vec<&R> {
        paginate(&self.derived, self.page.page, self.page.page_size)
            .iter()
            .map(|&i| &self.source[i])
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible().into_iter().map(Record::id).collect()
    }

    /// Owned copy of the current page with its metadata
    pub fn snapshot(&self) -> PaginatedResponse<R> {
        PaginatedResponse {
            data: self.visible().into_iter().cloned().collect(),
            pagination: self.page_meta(),
        }
    }

    // === State transitions ===

    /// Replace the source collection and go back to the first page
    ///
    /// The selection is kept; ids that vanished are ignored by the totals.
    pub fn set_source(&mut self, records: Vec<R>) {
        self.source = records;
        self.page.reset();
        self.rebuild();
        debug!(view = %self.name, total_items = self.total_items(), "source replaced");
    }

    /// Replace the filter criteria and go back to the first page
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page.reset();
        self.rebuild();
        debug!(view = %self.name, total_items = self.total_items(), "filter changed");
    }

    /// Replace the sort key and go back to the first page
    pub fn set_sort(&mut self, key: SortKey) {
        debug!(view = %self.name, sort = %key, "sort changed");
        self.sort = Some(key);
        self.page.reset();
        self.rebuild();
    }

    /// Drop the sort and go back to the first page; records return to source order
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.page.reset();
        self.rebuild();
        debug!(view = %self.name, "sort cleared");
    }

    /// Column header click: ascending on a new field, reversed on the same one
    pub fn toggle_sort(&mut self, field: &str) {
        let key = match &self.sort {
            Some(current) if current.field == field => {
                SortKey::new(field, current.direction.reversed())
            }
            _ => SortKey::new(field, SortDirection::Ascending),
        };
        self.set_sort(key);
    }

    /// Jump to a page; a page past the end renders empty
    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
        debug!(view = %self.name, page = self.page.page, total_pages = self.total_pages(), "page changed");
    }

    pub fn next_page(&mut self) {
        self.page.next(self.derived.len());
        debug!(view = %self.name, page = self.page.page, "next page");
    }

    pub fn prev_page(&mut self) {
        self.page.prev();
        debug!(view = %self.name, page = self.page.page, "previous page");
    }

    /// Change the page size and go back to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page = PageState::new(page_size);
        debug!(view = %self.name, page_size = self.page.page_size, "page size changed");
    }

    /// Apply filter, sort, page size and page from query parameters
    ///
    /// The query describes the full view state: a missing filter clears the
    /// criteria and a missing sort restores the default sort. Nothing is
    /// changed when the filter or the sort fails to parse.
    pub fn apply_query(&mut self, params: &QueryParams) -> Result<()> {
        let parsed = params
            .filter_criteria()
            .and_then(|criteria| Ok((criteria, params.sort_key()?)));

        let (criteria, sort) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(view = %self.name, error = %e, "rejected query");
                return Err(e);
            }
        };

        self.criteria = criteria.unwrap_or_default();
        self.sort = sort.or_else(|| self.default_sort.clone());
        if let Some(limit) = params.limit() {
            self.page = PageState::new(limit);
        }
        self.page.set_page(params.page());
        self.rebuild();

        debug!(
            view = %self.name,
            page = self.page.page,
            total_items = self.total_items(),
            "query applied"
        );
        Ok(())
    }

    // === Selection ===

    /// Select or unselect one record; returns whether it is selected now
    pub fn toggle_select(&mut self, id: &str) -> bool {
        let selected = self.selection.toggle(id);
        debug!(view = %self.name, id, selected, "selection toggled");
        selected
    }

    /// Select everything covered by the view's policy, or clear if it
    /// already is
    pub fn toggle_select_all(&mut self) {
        let candidates: Vec<&str> = match self.select_all {
            SelectAllPolicy::CurrentPage => paginate(&self.derived, self.page.page, self.page.page_size)
                .iter()
                .map(|&i| self.source[i].id())
                .collect(),
            SelectAllPolicy::AllFiltered => self.derived.iter().map(|&i| self.source[i].id()).collect(),
        };

        self.selection.toggle_all(candidates);
        debug!(view = %self.name, selected = self.selection.len(), "select all toggled");
    }

    /// Empty the selection after a bulk action or a cancel
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        debug!(view = %self.name, "selection cleared");
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Selected records still present in the source, in source order
    pub fn selected_records(&self) -> Vec<&R> {
        self.source
            .iter()
            .filter(|r| self.selection.contains(r.id()))
            .collect()
    }

    /// Sum numeric fields over the selection, ignoring stale ids
    pub fn selection_totals<S: AsRef<str>>(&self, fields: &[S]) -> SelectionTotals {
        selection_totals(&self.source, &self.selection, fields)
    }

    /// Totals over the fields named by the view configuration
    pub fn configured_totals(&self) -> SelectionTotals {
        self.selection_totals(self.totals_fields.as_slice())
    }

    fn rebuild(&mut self) {
        let scoped;
        let criteria = if self.criteria.text_fields.is_empty() && !self.search_fields.is_empty() {
            scoped = FilterCriteria {
                text_fields: self.search_fields.clone(),
                ..self.criteria.clone()
            };
            &scoped
        } else {
            &self.criteria
        };
        let source = &self.source;

        let mut derived: Vec<usize> = source
            .iter()
            .enumerate()
            .filter(|(_, r)| criteria.matches(*r))
            .map(|(i, _)| i)
            .collect();

        // stable: ties keep source order
        if let Some(key) = &self.sort {
            derived.sort_by(|&a, &b| key.compare(&source[a], &source[b]));
        }

        trace!(
            view = %self.name,
            source = source.len(),
            filtered = derived.len(),
            "derived order rebuilt"
        );
        self.derived = derived;
    }
}
