//! Core types and traits for the list-view component.
//!
//! This module contains the fundamental vocabulary of the list view:
//! - The [`Item`] trait for displayable, filterable, sortable records
//! - [`SortValue`], [`SortDirection`], and [`SortState`] for ordering
//! - [`FilterState`] and [`FilterMatching`] for filter management
//! - The notification messages emitted when view state changes

use std::fmt::Display;

/// Trait for records that can be displayed in a list view.
///
/// Items must be displayable and cloneable. `filter_value()` supplies the
/// text searched by query filtering, and `sort_value()` maps a sort key to
/// the field value used for ordering. Identity is the caller's concern: the
/// list view never deduplicates or mutates items.
///
/// # Examples
///
/// ```
/// use bubbletea_listview::listview::{Item, SortValue};
/// use std::fmt::Display;
///
/// #[derive(Clone)]
/// struct Product {
///     id: u32,
///     name: String,
///     price: f64,
/// }
///
/// impl Display for Product {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "#{} {} (${:.2})", self.id, self.name, self.price)
///     }
/// }
///
/// impl Item for Product {
///     fn filter_value(&self) -> String {
///         self.name.clone()
///     }
///
///     fn sort_value(&self, key: &str) -> Option<SortValue> {
///         match key {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             "price" => Some(self.price.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Item: Display + Clone {
    /// Returns the text used when filtering this item by query.
    ///
    /// Return everything searchable: a name, or several fields joined with
    /// spaces.
    fn filter_value(&self) -> String;

    /// Returns the value of the named field for sorting, or `None` when
    /// the item has no such field.
    ///
    /// The default implementation knows no fields, which makes every sort
    /// key compare as absent; implement this for each sortable field.
    fn sort_value(&self, key: &str) -> Option<SortValue> {
        let _ = key;
        None
    }
}

/// A sortable field value: numeric or textual.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// A numeric field, compared numerically.
    Number(f64),
    /// A text field, compared case-sensitively.
    Text(String),
}

impl SortValue {
    /// Coerces this value to a number for mixed-type comparisons.
    ///
    /// Text that parses as a number is used as-is; anything else, NaN
    /// included, orders as `0`. This mirrors the loose-typed comparison the component
    /// is modeled on and is a deliberate, documented policy rather than an
    /// error.
    pub fn coerce_number(&self) -> f64 {
        match self {
            SortValue::Number(n) if n.is_nan() => 0.0,
            SortValue::Number(n) => *n,
            SortValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }
}

impl From<f64> for SortValue {
    fn from(n: f64) -> Self {
        SortValue::Number(n)
    }
}

impl From<f32> for SortValue {
    fn from(n: f32) -> Self {
        SortValue::Number(n as f64)
    }
}

impl From<i64> for SortValue {
    fn from(n: i64) -> Self {
        SortValue::Number(n as f64)
    }
}

impl From<i32> for SortValue {
    fn from(n: i32) -> Self {
        SortValue::Number(n as f64)
    }
}

impl From<u64> for SortValue {
    fn from(n: u64) -> Self {
        SortValue::Number(n as f64)
    }
}

impl From<u32> for SortValue {
    fn from(n: u32) -> Self {
        SortValue::Number(n as f64)
    }
}

impl From<usize> for SortValue {
    fn from(n: usize) -> Self {
        SortValue::Number(n as f64)
    }
}

impl From<&str> for SortValue {
    fn from(s: &str) -> Self {
        SortValue::Text(s.to_string())
    }
}

impl From<String> for SortValue {
    fn from(s: String) -> Self {
        SortValue::Text(s)
    }
}

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort: which field, and which way.
///
/// This is the small state machine behind "click the same column twice to
/// reverse it": selecting the key that is already active flips the
/// direction, selecting a different key starts over ascending. The
/// transition rule lives in [`SortState::advance`] so it exists in exactly
/// one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Sort key, matched against [`Item::sort_value`].
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Creates an ascending sort on the given key.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Applies the sort-selection transition rule.
    ///
    /// Selecting the currently active key flips its direction; selecting
    /// any other key (or selecting with no sort active) yields an
    /// ascending sort on that key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_listview::listview::{SortDirection, SortState};
    ///
    /// let first = SortState::advance(None, "name");
    /// assert_eq!(first.direction, SortDirection::Ascending);
    ///
    /// let flipped = SortState::advance(Some(&first), "name");
    /// assert_eq!(flipped.direction, SortDirection::Descending);
    ///
    /// let other = SortState::advance(Some(&flipped), "price");
    /// assert_eq!(other.key, "price");
    /// assert_eq!(other.direction, SortDirection::Ascending);
    /// ```
    pub fn advance(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(active) if active.key == key => SortState {
                key: key.to_string(),
                direction: active.direction.toggled(),
            },
            _ => SortState::ascending(key),
        }
    }
}

/// Represents the current filtering state of the list view.
///
/// ```text
/// Unfiltered → Filtering      (user starts filter entry)
/// Filtering → FilterApplied   (user accepts a non-empty filter)
/// Filtering → Unfiltered      (user cancels with nothing active)
/// FilterApplied → Unfiltered  (user clears the filter)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// No filtering is active; all items are shown.
    Unfiltered,
    /// The user is typing a filter query; matching updates live.
    Filtering,
    /// A filter is applied; only matching items are shown.
    FilterApplied,
}

/// How a filter query is matched against [`Item::filter_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMatching {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Fuzzy matching (skim algorithm).
    Fuzzy,
}

/// Notification: the current page changed.
///
/// Emitted by the list view's `update()` whenever key-driven navigation
/// lands on a different page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangedMsg {
    /// The new 1-based page.
    pub page: usize,
}

/// Notification: the sort key or direction changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChangedMsg {
    /// The active sort key.
    pub key: String,
    /// The active sort direction.
    pub direction: SortDirection,
}

/// Notification: the page size changed (and the view returned to page 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeChangedMsg {
    /// The new page size.
    pub size: usize,
}

/// Notification: the filter changed (and the view returned to page 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChangedMsg {
    /// The applied query text; empty when the filter was cleared.
    pub query: String,
    /// Number of items matching the new filter.
    pub match_count: usize,
}
