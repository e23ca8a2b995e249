//! Filter operations and state management for list views.
//!
//! Two filter mechanisms compose here:
//! - a caller-supplied **predicate** (arbitrary membership test), and
//! - a **query** matched against each item's `filter_value()`, either as a
//!   case-insensitive substring or fuzzily (skim algorithm).
//!
//! An item is visible when it passes both. Any filter change returns the
//! view to page 1: the old page number is meaningless against a new result
//! set.

use super::types::{FilterMatching, FilterState, Item};
use super::{FilterPredicate, Model};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Replaces the filter predicate.
    ///
    /// `None` means "show all" (any active query still applies). Resets
    /// the current page to 1 and recomputes pagination.
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
    /// let rows = vec![Row("Ana".into()), Row("Beto".into()), Row("Caro".into())];
    /// let mut list = Model::new(rows, 80, 24);
    ///
    /// list.set_filter(Some(Box::new(|r: &Row| r.0.starts_with('B'))));
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.current_page(), 1);
    ///
    /// list.set_filter(None);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn set_filter(&mut self, predicate: Option<FilterPredicate<I>>) {
        self.filter_predicate = predicate;
        self.after_filter_change();
    }

    /// Replaces the filter query.
    ///
    /// The query is matched against `filter_value()` per the configured
    /// [`FilterMatching`]. An empty query clears query filtering. Resets
    /// the current page to 1 and recomputes pagination.
    pub fn set_filter_query(&mut self, query: &str) {
        self.filter_query = query.to_string();
        self.after_filter_change();
    }

    /// Drops both the predicate and the query.
    pub fn clear_filter(&mut self) {
        self.filter_predicate = None;
        self.filter_query.clear();
        self.pending_query.clear();
        self.debounce.cancel();
        self.filter_state = FilterState::Unfiltered;
        self.paginator.first_page();
        self.sync_pagination();
    }

    /// Returns true if a predicate or a non-empty query is active.
    pub fn has_filter(&self) -> bool {
        self.filter_predicate.is_some() || !self.filter_query.is_empty()
    }

    fn after_filter_change(&mut self) {
        if self.filter_state != FilterState::Filtering {
            self.filter_state = if self.has_filter() {
                FilterState::FilterApplied
            } else {
                FilterState::Unfiltered
            };
        }
        self.paginator.first_page();
        self.sync_pagination();
    }

    /// Begins interactive filter entry, seeding the input with the applied
    /// query.
    pub(super) fn start_filtering(&mut self) {
        self.pending_query = self.filter_query.clone();
        self.filter_state = FilterState::Filtering;
    }

    /// Appends a character to the filter input.
    pub(super) fn push_filter_char(&mut self, c: char) {
        self.pending_query.push(c);
    }

    /// Removes the last character from the filter input.
    pub(super) fn pop_filter_char(&mut self) {
        self.pending_query.pop();
    }

    /// Accepts the filter input, applying it and leaving filter entry.
    pub(super) fn accept_filter(&mut self) {
        self.filter_query = self.pending_query.clone();
        self.debounce.cancel();
        self.filter_state = if self.has_filter() {
            FilterState::FilterApplied
        } else {
            FilterState::Unfiltered
        };
        self.paginator.first_page();
        self.sync_pagination();
    }

    /// Cancels filter entry, keeping whatever filter was already applied.
    pub(super) fn cancel_filtering(&mut self) {
        self.pending_query.clear();
        self.debounce.cancel();
        self.filter_state = if self.has_filter() {
            FilterState::FilterApplied
        } else {
            FilterState::Unfiltered
        };
    }

    /// Collects clones of the items passing the active filter, in
    /// insertion order.
    pub(super) fn filtered_items(&self) -> Vec<I> {
        let matcher = self.query_matcher();
        let needle = self.filter_query.to_lowercase();
        self.items
            .iter()
            .filter(|item| self.item_passes(item, matcher.as_ref(), &needle))
            .cloned()
            .collect()
    }

    /// Counts the items passing the active filter.
    pub(super) fn filtered_len(&self) -> usize {
        if !self.has_filter() {
            return self.items.len();
        }
        let matcher = self.query_matcher();
        let needle = self.filter_query.to_lowercase();
        self.items
            .iter()
            .filter(|item| self.item_passes(item, matcher.as_ref(), &needle))
            .count()
    }

    fn query_matcher(&self) -> Option<SkimMatcherV2> {
        (self.matching == FilterMatching::Fuzzy && !self.filter_query.is_empty())
            .then(SkimMatcherV2::default)
    }

    fn item_passes(&self, item: &I, matcher: Option<&SkimMatcherV2>, needle: &str) -> bool {
        if let Some(predicate) = &self.filter_predicate {
            if !predicate(item) {
                return false;
            }
        }
        if self.filter_query.is_empty() {
            return true;
        }
        match matcher {
            Some(matcher) => matcher
                .fuzzy_match(&item.filter_value(), &self.filter_query)
                .is_some(),
            None => item.filter_value().to_lowercase().contains(needle),
        }
    }
}
