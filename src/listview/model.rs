//! Main Model struct and core functionality for the list-view component.
//!
//! This module contains the primary Model struct, its construction and
//! builder methods, collection and page operations, and the pure
//! `visible_items` derivation. Sorting and filtering behavior live in their
//! own modules as further `impl` blocks on the same type.

use super::keys::ListViewKeyMap;
use super::style::ListViewStyles;
use super::types::{FilterMatching, FilterState, Item, SortState};
use crate::{debounce, paginator};
use std::time::Duration;

/// Predicate deciding list membership for an item.
pub type FilterPredicate<I> = Box<dyn Fn(&I) -> bool + Send + Sync>;

/// Default allowed page sizes, mirroring the usual "10/25/50/100 records"
/// selector.
pub const DEFAULT_PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// A paginated, sortable, filterable list view over an in-memory
/// collection.
///
/// The model owns the view configuration (current page, page size, sort
/// key and direction, and an optional filter) and derives the visible
/// slice of a caller-supplied item collection. The derivation is pure:
/// given the same items and configuration, [`visible_items`](Self::visible_items)
/// always produces the same slice. All the bookkeeping that is easy to get
/// wrong (page clamping after the collection shrinks, sort-toggle
/// semantics, page resets on filter and page-size changes) is centralized
/// here.
///
/// # Examples
///
/// ```
/// use bubbletea_listview::listview::{Item, Model, SortValue};
/// use std::fmt::Display;
///
/// #[derive(Clone)]
/// struct Client {
///     id: u32,
///     name: String,
/// }
///
/// impl Display for Client {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.name)
///     }
/// }
///
/// impl Item for Client {
///     fn filter_value(&self) -> String {
///         self.name.clone()
///     }
///     fn sort_value(&self, key: &str) -> Option<SortValue> {
///         match key {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
/// }
///
/// let clients = vec![
///     Client { id: 1, name: "Ana".into() },
///     Client { id: 2, name: "Beto".into() },
///     Client { id: 3, name: "Caro".into() },
/// ];
///
/// let mut list = Model::new(clients, 80, 24).with_page_sizes(&[2, 10]);
/// assert_eq!(list.total_pages(), 2);
/// assert_eq!(list.visible_items().len(), 2);
///
/// list.go_to_page(2);
/// assert_eq!(list.visible_items()[0].name, "Caro");
/// ```
pub struct Model<I: Item> {
    pub(super) title: String,
    pub(super) items: Vec<I>,

    // Pagination
    pub(super) paginator: paginator::Model,
    pub(super) page_sizes: Vec<usize>,

    // Sorting
    pub(super) sort: Option<SortState>,
    pub(super) sort_keys: Vec<String>,

    // Filtering
    pub(super) filter_state: FilterState,
    pub(super) filter_predicate: Option<FilterPredicate<I>>,
    pub(super) filter_query: String,
    pub(super) pending_query: String,
    pub(super) matching: FilterMatching,
    pub(super) debounce: debounce::Model,

    // UI state
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) styles: ListViewStyles,
    pub(super) keymap: ListViewKeyMap,
    pub(super) show_status_bar: bool,
    pub(super) show_pagination: bool,
    pub(super) status_item_singular: Option<String>,
    pub(super) status_item_plural: Option<String>,
}

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Creates a new list view with the provided items and dimensions.
    ///
    /// Defaults: first allowed page size (10), page 1, no sort, no filter,
    /// status bar and pagination shown.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bubbletea_listview::listview::{Item, Model};
    /// # #[derive(Clone)]
    /// # struct Row(String);
    /// # impl std::fmt::Display for Row {
    /// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    /// #         write!(f, "{}", self.0)
    /// #     }
    /// # }
    /// # impl Item for Row {
    /// #     fn filter_value(&self) -> String { self.0.clone() }
    /// # }
    /// let list = Model::new(vec![Row("first".into())], 80, 24);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.current_page(), 1);
    /// ```
    pub fn new(items: Vec<I>, width: usize, height: usize) -> Self {
        let page_sizes: Vec<usize> = DEFAULT_PAGE_SIZES.to_vec();
        let mut pager = paginator::Model::new();
        pager.set_per_page(page_sizes[0]);
        pager.set_total_items(items.len());

        Self {
            title: "List".to_string(),
            items,
            paginator: pager,
            page_sizes,
            sort: None,
            sort_keys: vec![],
            filter_state: FilterState::Unfiltered,
            filter_predicate: None,
            filter_query: String::new(),
            pending_query: String::new(),
            matching: FilterMatching::default(),
            debounce: debounce::new(Duration::from_millis(250)),
            width,
            height,
            styles: ListViewStyles::default(),
            keymap: ListViewKeyMap::default(),
            show_status_bar: true,
            show_pagination: true,
            status_item_singular: None,
            status_item_plural: None,
        }
    }

    /// Sets the list title (builder pattern).
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the allowed page sizes and switches to the first of them
    /// (builder pattern).
    ///
    /// An empty set is ignored.
    pub fn with_page_sizes(mut self, sizes: &[usize]) -> Self {
        if !sizes.is_empty() {
            self.page_sizes = sizes.to_vec();
            self.paginator.set_per_page(self.page_sizes[0]);
            self.sync_pagination();
        }
        self
    }

    /// Sets the initial page size (builder pattern).
    ///
    /// The size must be in the allowed set; other values are ignored.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.set_page_size(size);
        self
    }

    /// Sets an initial ascending sort on the given key (builder pattern).
    pub fn with_sort_key(mut self, key: &str) -> Self {
        self.sort = Some(SortState::ascending(key));
        self
    }

    /// Sets the columns the sort keys cycle through (builder pattern).
    ///
    /// Used by the `s`/`S` key bindings; programmatic
    /// [`set_sort_key`](Self::set_sort_key) accepts any key regardless.
    pub fn with_sort_keys(mut self, keys: &[&str]) -> Self {
        self.sort_keys = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    /// Sets how filter queries are matched (builder pattern).
    pub fn with_filter_matching(mut self, matching: FilterMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Sets the quiet period for debounced filter-as-you-type
    /// (builder pattern).
    pub fn with_filter_debounce(mut self, delay: Duration) -> Self {
        self.debounce = debounce::new(delay);
        self
    }

    /// Sets custom styles (builder pattern).
    pub fn with_styles(mut self, styles: ListViewStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Shows or hides the status bar (builder pattern).
    pub fn with_status_bar(mut self, show: bool) -> Self {
        self.show_status_bar = show;
        self
    }

    /// Shows or hides the pagination strip (builder pattern).
    pub fn with_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    /// Sets custom singular and plural nouns for the status bar.
    ///
    /// If not set, the status bar uses "item" and "items".
    pub fn set_status_bar_item_name(&mut self, singular: &str, plural: &str) {
        self.status_item_singular = Some(singular.to_string());
        self.status_item_plural = Some(plural.to_string());
    }

    /// Replaces the item collection.
    ///
    /// The replacement is atomic from the view's perspective: pagination is
    /// recomputed against the new filtered count and the current page is
    /// clamped into range if the collection shrank. Sort and filter
    /// configuration are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bubbletea_listview::listview::{Item, Model};
    /// # #[derive(Clone)]
    /// # struct Row(String);
    /// # impl std::fmt::Display for Row {
    /// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    /// #         write!(f, "{}", self.0)
    /// #     }
    /// # }
    /// # impl Item for Row {
    /// #     fn filter_value(&self) -> String { self.0.clone() }
    /// # }
    /// let rows: Vec<Row> = (0..30).map(|i| Row(format!("row {i}"))).collect();
    /// let mut list = Model::new(rows, 80, 24); // 3 pages of 10
    /// list.go_to_page(3);
    ///
    /// let fewer: Vec<Row> = (0..5).map(|i| Row(format!("row {i}"))).collect();
    /// list.set_items(fewer);
    /// assert_eq!(list.total_pages(), 1);
    /// assert_eq!(list.current_page(), 1); // clamped, not dangling
    /// ```
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        self.sync_pagination();
    }

    /// Returns a reference to the full, unfiltered item collection.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Sets the page size.
    ///
    /// The size must be one of the allowed page sizes; anything else is
    /// silently ignored. A successful change returns the view to page 1.
    pub fn set_page_size(&mut self, size: usize) {
        if !self.page_sizes.contains(&size) {
            return;
        }
        self.paginator.set_per_page(size);
        self.sync_pagination();
    }

    /// Switches to the next allowed page size, wrapping around.
    pub fn cycle_page_size(&mut self) {
        if self.page_sizes.is_empty() {
            return;
        }
        let current = self.paginator.per_page;
        let next = match self.page_sizes.iter().position(|&s| s == current) {
            Some(i) => self.page_sizes[(i + 1) % self.page_sizes.len()],
            None => self.page_sizes[0],
        };
        self.set_page_size(next);
    }

    /// Jumps to the given 1-based page; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to_page(page);
    }

    /// Navigates to the next page, stopping at the last page.
    pub fn next_page(&mut self) {
        self.paginator.next_page();
    }

    /// Navigates to the previous page, stopping at page 1.
    pub fn prev_page(&mut self) {
        self.paginator.prev_page();
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.paginator.first_page();
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.paginator.last_page();
    }

    /// Returns the number of items passing the active filter.
    pub fn len(&self) -> usize {
        self.filtered_len()
    }

    /// Returns whether no items pass the active filter.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current 1-based page.
    pub fn current_page(&self) -> usize {
        self.paginator.page
    }

    /// Returns the current page size.
    pub fn page_size(&self) -> usize {
        self.paginator.per_page
    }

    /// Returns the total number of pages; at least 1, even when empty.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// Returns the active sort, if any.
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Returns the applied filter query text.
    pub fn filter_query(&self) -> &str {
        self.filter_query.as_str()
    }

    /// Returns the current filtering state.
    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    /// Returns the 1-based index range covered by the current page as
    /// `(first, last, total)`, suitable for a "showing 11–20 of 95" line.
    ///
    /// Returns `(0, 0, 0)` when nothing passes the filter.
    pub fn page_range(&self) -> (usize, usize, usize) {
        let total = self.filtered_len();
        if total == 0 {
            return (0, 0, 0);
        }
        let (start, end) = self.paginator.get_slice_bounds(total);
        (start + 1, end, total)
    }

    /// Produces the page-number strip for the current state.
    ///
    /// See [`paginator::Model::page_numbers`] for the window semantics.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<paginator::PageToken> {
        self.paginator.page_numbers(max_visible)
    }

    /// Derives the items visible on the current page.
    ///
    /// The derivation is filter → stable sort → slice, and is pure: it
    /// depends only on the items and the view configuration. If the stored
    /// page has drifted past the end of the data, the slice is taken from
    /// the last page rather than coming back empty; the stored page itself
    /// is re-clamped by every mutating operation.
    pub fn visible_items(&self) -> Vec<I> {
        let mut rows = self.filtered_items();
        self.apply_sort(&mut rows);

        let per_page = self.paginator.per_page;
        let total_pages = if rows.is_empty() {
            1
        } else {
            rows.len().div_ceil(per_page)
        };
        let page = self.paginator.page.clamp(1, total_pages);
        let start = ((page - 1) * per_page).min(rows.len());
        let end = (start + per_page).min(rows.len());
        rows.drain(..start);
        rows.truncate(end - start);
        rows
    }

    /// Recomputes pagination against the current filtered count, clamping
    /// the page if it drifted out of range.
    pub(super) fn sync_pagination(&mut self) {
        let total = self.filtered_len();
        self.paginator.set_total_items(total);
    }
}
