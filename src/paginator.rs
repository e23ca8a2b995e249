//! A paginator component for bubbletea-rs.
//!
//! This component handles pagination bookkeeping and rendering of the
//! pagination control itself. It does not render pages of content; it
//! tracks which page is current, how many pages there are, and which slice
//! of your data the current page covers.
//!
//! Pages are 1-based throughout: the first page is page 1, jumps outside
//! `[1, total_pages]` are ignored, and a shrinking collection clamps the
//! current page back into range instead of leaving it dangling.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};

/// The type of pagination to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Display pagination as Arabic numerals (e.g., "1/5").
    #[default]
    Arabic,
    /// Display pagination as dots (e.g., "● ○ ○ ○ ○").
    Dots,
}

/// One entry in a rendered page-number strip.
///
/// [`Model::page_numbers`] produces a sliding window of page numbers with
/// the first and last pages always present; `Ellipsis` marks the gap where
/// the window does not touch an edge.
///
/// # Examples
///
/// ```rust
/// use bubbletea_listview::paginator::{Model, PageToken};
///
/// let mut p = Model::new().with_per_page(10).with_total_items(100);
/// p.go_to_page(5);
/// assert_eq!(
///     p.page_numbers(5),
///     vec![
///         PageToken::Page(1),
///         PageToken::Ellipsis,
///         PageToken::Page(3),
///         PageToken::Page(4),
///         PageToken::Page(5),
///         PageToken::Page(6),
///         PageToken::Page(7),
///         PageToken::Ellipsis,
///         PageToken::Page(10),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A concrete, navigable page number.
    Page(usize),
    /// A gap between the window and the first or last page.
    Ellipsis,
}

/// Key bindings for paginator navigation.
///
/// # Examples
///
/// ```rust
/// use bubbletea_listview::paginator::PaginatorKeyMap;
/// use bubbletea_listview::key;
///
/// let custom = PaginatorKeyMap {
///     prev_page: key::new_binding(vec![
///         key::with_keys_str(&["a", "left"]),
///         key::with_help("a/←", "previous page"),
///     ]),
///     ..PaginatorKeyMap::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Key binding for navigating to the previous page.
    /// Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Key binding for navigating to the next page.
    /// Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// Key binding for jumping to the first page.
    /// Default keys: Home, 'g'
    pub first_page: key::Binding,
    /// Key binding for jumping to the last page.
    /// Default keys: End, 'G'
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// A paginator model for handling pagination state and rendering.
///
/// The model tracks the current page (1-based), items per page, and total
/// pages, and renders the pagination control in two modes:
/// - **Arabic**: page numbers (e.g., "3/10")
/// - **Dots**: one dot per page (e.g., "○ ○ ● ○ ○")
///
/// # Examples
///
/// ```rust
/// use bubbletea_listview::paginator::Model;
///
/// let mut paginator = Model::new()
///     .with_per_page(10)
///     .with_total_items(95); // 10 pages
///
/// assert_eq!(paginator.total_pages, 10);
/// assert!(paginator.on_first_page());
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 2);
///
/// let (start, end) = paginator.get_slice_bounds(95);
/// assert_eq!((start, end), (10, 20));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The type of pagination to display (Dots or Arabic).
    pub paginator_type: Type,
    /// The current page, 1-based.
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages.
    pub total_pages: usize,

    /// The character to use for the active page in Dots mode.
    pub active_dot: String,
    /// The character to use for inactive pages in Dots mode.
    pub inactive_dot: String,
    /// The format string for Arabic mode (e.g., "%d/%d").
    pub arabic_format: String,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: 1,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a new paginator with default settings: page 1, one item per
    /// page, one page total, Arabic display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total number of items and recalculates total pages
    /// (builder pattern).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_listview::paginator::Model;
    ///
    /// let paginator = Model::new()
    ///     .with_per_page(10)
    ///     .with_total_items(95); // 95/10 -> 10 pages
    /// assert_eq!(paginator.total_pages, 10);
    /// ```
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// Values less than 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the number of items per page and returns to the first page.
    ///
    /// Values less than 1 are clamped to 1. The page reset keeps the view
    /// anchored when the page geometry changes; callers that also track a
    /// total item count should call [`set_total_items`](Self::set_total_items)
    /// afterwards to recompute `total_pages`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_listview::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10).with_total_items(100);
    /// paginator.go_to_page(7);
    /// paginator.set_per_page(25);
    /// assert_eq!(paginator.per_page, 25);
    /// assert_eq!(paginator.page, 1);
    /// ```
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    /// Sets the active dot character for dots mode (builder pattern).
    pub fn with_active_dot(mut self, dot: &str) -> Self {
        self.active_dot = dot.to_string();
        self
    }

    /// Sets the inactive dot character for dots mode (builder pattern).
    pub fn with_inactive_dot(mut self, dot: &str) -> Self {
        self.inactive_dot = dot.to_string();
        self
    }

    /// Sets the total number of pages directly.
    ///
    /// The minimum is 1. If the current page ends up out of bounds it is
    /// clamped to the last page.
    pub fn set_total_pages(&mut self, pages: usize) {
        self.total_pages = pages.max(1);
        if self.page > self.total_pages {
            self.page = self.total_pages;
        }
    }

    /// Calculates and sets the total number of pages from an item count.
    ///
    /// The result is always at least 1, even for zero items. If the current
    /// page ends up past the last page because the collection shrank, it is
    /// clamped to the last page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_listview::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10);
    ///
    /// paginator.set_total_items(95);
    /// assert_eq!(paginator.total_pages, 10);
    ///
    /// paginator.go_to_page(10);
    /// paginator.set_total_items(45); // collection shrank
    /// assert_eq!(paginator.total_pages, 5);
    /// assert_eq!(paginator.page, 5); // clamped, not dangling
    ///
    /// paginator.set_total_items(0);
    /// assert_eq!(paginator.total_pages, 1);
    /// assert_eq!(paginator.page, 1);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        if items == 0 {
            self.total_pages = 1;
        } else {
            self.total_pages = items.div_ceil(self.per_page);
        }
        if self.page > self.total_pages {
            self.page = self.total_pages;
        }
    }

    /// Jumps to the given 1-based page.
    ///
    /// Out-of-range requests are ignored, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_listview::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10).with_total_items(30);
    /// paginator.go_to_page(2);
    /// assert_eq!(paginator.page, 2);
    ///
    /// paginator.go_to_page(0); // ignored
    /// paginator.go_to_page(4); // ignored
    /// assert_eq!(paginator.page, 2);
    /// ```
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages {
            self.page = page;
        }
    }

    /// Navigates to the previous page, stopping at page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Navigates to the next page, stopping at the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) {
        self.page = self.total_pages;
    }

    /// Returns true if the paginator is on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns true if the paginator is on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages
    }

    /// Calculates slice bounds for the current page.
    ///
    /// Given the total length of your data, returns `(start, end)` indices
    /// for the current page, usable directly with slice notation. Bounds
    /// are clamped to `length`, so a stale page yields a short or empty
    /// slice rather than a panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_listview::paginator::Model;
    ///
    /// let items: Vec<i32> = (1..=95).collect();
    /// let mut paginator = Model::new().with_per_page(10).with_total_items(items.len());
    ///
    /// paginator.go_to_page(10);
    /// let (start, end) = paginator.get_slice_bounds(items.len());
    /// assert_eq!((start, end), (90, 95)); // short last page
    /// let _page = &items[start..end];
    /// ```
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = ((self.page - 1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Returns the number of items on the current page.
    ///
    /// This may be less than `per_page` on the last page, and is 0 when
    /// there are no items at all.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        if total_items == 0 {
            return 0;
        }
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Produces a sliding window of page numbers centered on the current
    /// page.
    ///
    /// The window is `max_visible` pages wide and clamps at the collection
    /// boundaries rather than going out of range. Page 1 and the last page
    /// are always included; a [`PageToken::Ellipsis`] is inserted on either
    /// side whenever the window does not touch that edge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_listview::paginator::{Model, PageToken};
    ///
    /// let p = Model::new().with_per_page(10).with_total_items(100);
    /// // On page 1 the window hugs the left edge.
    /// assert_eq!(
    ///     p.page_numbers(5),
    ///     vec![
    ///         PageToken::Page(1),
    ///         PageToken::Page(2),
    ///         PageToken::Page(3),
    ///         PageToken::Page(4),
    ///         PageToken::Page(5),
    ///         PageToken::Ellipsis,
    ///         PageToken::Page(10),
    ///     ]
    /// );
    /// ```
    pub fn page_numbers(&self, max_visible: usize) -> Vec<PageToken> {
        let max_visible = max_visible.max(1);
        let total = self.total_pages;
        let current = self.page.clamp(1, total);

        let mut start = current.saturating_sub(max_visible / 2).max(1);
        let end = (start + max_visible - 1).min(total);
        if end + 1 - start < max_visible {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }

        let mut tokens = Vec::new();
        if start > 1 {
            tokens.push(PageToken::Page(1));
            if start > 2 {
                tokens.push(PageToken::Ellipsis);
            }
        }
        for page in start..=end {
            tokens.push(PageToken::Page(page));
        }
        if end < total {
            if end < total - 1 {
                tokens.push(PageToken::Ellipsis);
            }
            tokens.push(PageToken::Page(total));
        }
        tokens
    }

    /// Updates the paginator from key messages.
    ///
    /// Call this from your application's `update()` to get next/prev and
    /// first/last page navigation via the configured key bindings.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            } else if self.keymap.first_page.matches(key_msg) {
                self.first_page();
            } else if self.keymap.last_page.matches(key_msg) {
                self.last_page();
            }
        }
    }

    /// Renders the paginator as a string.
    ///
    /// The output format depends on the `paginator_type` setting:
    /// - **Arabic**: "current/total" (e.g., "3/10")
    /// - **Dots**: one dot per page with the active page highlighted
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_listview::paginator::{Model, Type};
    ///
    /// let mut paginator = Model::new().with_per_page(10).with_total_items(50);
    ///
    /// paginator.paginator_type = Type::Arabic;
    /// assert_eq!(paginator.view(), "1/5");
    ///
    /// paginator.paginator_type = Type::Dots;
    /// assert_eq!(paginator.view(), "• ○ ○ ○ ○");
    /// ```
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        let mut s = String::new();
        for i in 1..=self.total_pages {
            if i == self.page {
                s.push_str(&self.active_dot);
            } else {
                s.push_str(&self.inactive_dot);
            }
            if i < self.total_pages {
                s.push(' ');
            }
        }
        s
    }
}
