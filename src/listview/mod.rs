//! List-view component: pagination, sorting, and filtering over an
//! in-memory collection.
//!
//! This module exposes a generic [`Model`]`<I: Item>` that owns the view
//! configuration (current page, page size, sort key/direction, and an
//! optional filter) and derives the visible slice of a caller-supplied
//! item collection. The derivation is a pure function of the items and the
//! configuration; the component centralizes the bookkeeping that is easy to
//! get wrong:
//!
//! - the current page is clamped into `[1, total_pages]` after every
//!   mutation, never left dangling when the collection shrinks;
//! - changing the page size or the filter returns the view to page 1,
//!   while changing the sort does not;
//! - selecting the active sort key again flips the direction
//!   (the "click the column twice" rule);
//! - out-of-range page jumps and disallowed page sizes are ignored, not
//!   errors.
//!
//! ## Filtering States
//!
//! Interactive filtering has three states:
//! - `Unfiltered`: no filter active
//! - `Filtering`: the user is typing a query; application is debounced
//! - `FilterApplied`: a filter is active; only matching items are shown
//!
//! ## Change Notifications
//!
//! Key-driven state changes each emit one typed message
//! ([`PageChangedMsg`], [`SortChangedMsg`], [`PageSizeChangedMsg`],
//! [`FilterChangedMsg`]) so the embedding application can react (refetch,
//! persist preferences, update a detail pane) without polling the model.
//!
//! # Examples
//!
//! ```
//! use bubbletea_listview::listview::{Item, Model, SortValue};
//! use std::fmt::Display;
//!
//! #[derive(Clone)]
//! struct Client {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl Display for Client {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "{}", self.name)
//!     }
//! }
//!
//! impl Item for Client {
//!     fn filter_value(&self) -> String {
//!         self.name.clone()
//!     }
//!     fn sort_value(&self, key: &str) -> Option<SortValue> {
//!         match key {
//!             "id" => Some(self.id.into()),
//!             "name" => Some(self.name.as_str().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let clients = vec![
//!     Client { id: 2, name: "Beto".into() },
//!     Client { id: 1, name: "Ana".into() },
//! ];
//! let mut list = Model::new(clients, 80, 24).with_sort_key("name");
//! assert_eq!(list.visible_items()[0].name, "Ana");
//! ```

/// Key bindings for list-view navigation and interaction.
pub mod keys;

/// Visual styling for the list-view component.
pub mod style;

// Internal modules
mod filtering;
mod model;
mod rendering;
mod sorting;
mod types;

#[cfg(test)]
mod tests;

/// The main list-view component model.
pub use model::{Model, DEFAULT_PAGE_SIZES};

/// Predicate deciding list membership for an item.
pub use model::FilterPredicate;

/// Key binding configuration for the list view.
pub use keys::ListViewKeyMap;

/// Visual styling configuration for the list view.
pub use style::ListViewStyles;

/// Core traits, state types, and notification messages.
pub use types::{
    FilterChangedMsg, FilterMatching, FilterState, Item, PageChangedMsg, PageSizeChangedMsg,
    SortChangedMsg, SortDirection, SortState, SortValue,
};

use crate::debounce::DebounceMsg;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

// Notifications are delivered as commands so they flow through the runtime
// like any other message, one per state change.
impl<I: Item + Send + Sync + 'static> Model<I> {
    fn notify_page_changed(&self) -> Cmd {
        let page = self.current_page();
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(PageChangedMsg { page }) as Msg
        })
    }

    fn notify_sort_changed(&self) -> Option<Cmd> {
        let sort = self.sort_state()?.clone();
        Some(bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(SortChangedMsg {
                key: sort.key.clone(),
                direction: sort.direction,
            }) as Msg
        }))
    }

    fn notify_page_size_changed(&self) -> Cmd {
        let size = self.page_size();
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(PageSizeChangedMsg { size }) as Msg
        })
    }

    fn notify_filter_changed(&self) -> Cmd {
        let query = self.filter_query().to_string();
        let match_count = self.len();
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(FilterChangedMsg {
                query: query.clone(),
                match_count,
            }) as Msg
        })
    }

    fn update_filter_entry(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.accept_filter.matches(key_msg) {
            self.accept_filter();
            return Some(self.notify_filter_changed());
        }
        if self.keymap.cancel_filter.matches(key_msg) {
            self.cancel_filtering();
            return None;
        }
        match key_msg.key {
            KeyCode::Backspace => {
                self.pop_filter_char();
                Some(self.debounce.trigger())
            }
            KeyCode::Char(c) if !key_msg.modifiers.contains(KeyModifiers::CONTROL) => {
                self.push_filter_char(c);
                Some(self.debounce.trigger())
            }
            _ => None,
        }
    }

    fn update_navigation(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.force_quit.matches(key_msg) || self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if self.keymap.filter.matches(key_msg) {
            self.start_filtering();
            return None;
        }
        if self.keymap.clear_filter.matches(key_msg) {
            if self.has_filter() {
                self.clear_filter();
                return Some(self.notify_filter_changed());
            }
            return None;
        }
        if self.keymap.toggle_sort.matches(key_msg) {
            let key = self
                .sort_state()
                .map(|s| s.key.clone())
                .or_else(|| self.sort_keys.first().cloned())?;
            self.set_sort_key(&key);
            return self.notify_sort_changed();
        }
        if self.keymap.next_sort_key.matches(key_msg) {
            if self.sort_keys.is_empty() {
                return None;
            }
            let next = match self
                .sort_state()
                .and_then(|s| self.sort_keys.iter().position(|k| *k == s.key))
            {
                Some(i) => self.sort_keys[(i + 1) % self.sort_keys.len()].clone(),
                None => self.sort_keys[0].clone(),
            };
            self.sort = Some(SortState::ascending(next));
            return self.notify_sort_changed();
        }
        if self.keymap.cycle_page_size.matches(key_msg) {
            let before = self.page_size();
            self.cycle_page_size();
            if self.page_size() != before {
                return Some(self.notify_page_size_changed());
            }
            return None;
        }

        let before = self.current_page();
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.first_page();
        } else if self.keymap.last_page.matches(key_msg) {
            self.last_page();
        } else {
            return None;
        }
        if self.current_page() != before {
            return Some(self.notify_page_changed());
        }
        None
    }
}

impl<I: Item + Send + Sync + 'static> BubbleTeaModel for Model<I> {
    /// Initializes an empty list view with default settings.
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new(Vec::new(), 80, 24);
        (model, None)
    }

    /// Handles keyboard input and debounced filter application.
    ///
    /// While in filter entry, typed characters build the query and each
    /// keystroke re-arms the debouncer; the query is applied when the quiet
    /// period elapses, when the user accepts with Enter, or discarded on
    /// Esc. Outside filter entry, keys map 1:1 to the component's
    /// operations, and every state change emits its notification message.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(debounce_msg) = msg.downcast_ref::<DebounceMsg>() {
            if self.debounce.matches(debounce_msg) && self.filter_state == FilterState::Filtering {
                let query = self.pending_query.clone();
                self.set_filter_query(&query);
                return Some(self.notify_filter_changed());
            }
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.filter_state == FilterState::Filtering {
            self.update_filter_entry(key_msg)
        } else {
            self.update_navigation(key_msg)
        }
    }

    /// Renders the list view: header, rows, pagination strip, status line.
    fn view(&self) -> String {
        let mut sections = Vec::new();

        let header = self.view_header();
        if !header.is_empty() {
            sections.push(self.styles.title_bar.clone().render(&header));
        }

        sections.push(self.view_rows());

        if self.show_pagination && !self.is_empty() && self.total_pages() > 1 {
            sections.push(self.view_pagination());
        }

        if self.show_status_bar {
            let status = self.view_status();
            if !status.is_empty() {
                sections.push(status);
            }
        }

        sections.join("\n")
    }
}
