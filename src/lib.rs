#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-listview/")]

//! # bubbletea-listview
//!
//! A paginated, sortable, filterable list-view component for terminal
//! applications built with [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs).
//!
//! ## Overview
//!
//! bubbletea-listview centralizes the list-view bookkeeping that is easy to
//! get wrong: page clamping when the backing collection shrinks,
//! toggle-on-repeat sort semantics, page resets on filter and page-size
//! changes, and a page-number strip with ellipsis markers. The component
//! follows the Elm Architecture pattern with `init()`, `update()`, and
//! `view()` methods, and its derivation is pure: given the same items and
//! view configuration, the visible slice is always the same.
//!
//! ## Components
//!
//! | Component | Description | Use Case |
//! |-----------|-------------|----------|
//! | `ListView` | Paged, sorted, filtered list over your items | Data browsers, admin consoles |
//! | `Paginator` | Pagination state and indicator rendering | Any paged content |
//! | `Debounce` | Cancellable delayed invocation | Search-as-you-type |
//!
//! ## Quick Start
//!
//! Implement [`listview::Item`] for your record type and hand a collection
//! to the model:
//!
//! ```rust
//! use bubbletea_listview::prelude::*;
//!
//! #[derive(Clone)]
//! struct Product {
//!     name: String,
//!     price: f64,
//! }
//!
//! impl std::fmt::Display for Product {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "{} (${:.2})", self.name, self.price)
//!     }
//! }
//!
//! impl Item for Product {
//!     fn filter_value(&self) -> String {
//!         self.name.clone()
//!     }
//!     fn sort_value(&self, key: &str) -> Option<SortValue> {
//!         match key {
//!             "name" => Some(self.name.as_str().into()),
//!             "price" => Some(self.price.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let products = vec![
//!     Product { name: "Keyboard".into(), price: 49.90 },
//!     Product { name: "Mouse".into(), price: 19.90 },
//! ];
//!
//! let mut list = ListView::new(products, 80, 24)
//!     .with_title("Products")
//!     .with_sort_keys(&["name", "price"]);
//!
//! list.set_sort_key("price");
//! assert_eq!(list.visible_items()[0].name, "Mouse");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The list view implements `bubbletea_rs::Model`, so it can run as a
//! program of its own or be embedded in a larger model by forwarding
//! messages:
//!
//! ```rust
//! use bubbletea_listview::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//! # #[derive(Clone)]
//! # struct Row(String);
//! # impl std::fmt::Display for Row {
//! #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//! #         write!(f, "{}", self.0)
//! #     }
//! # }
//! # impl Item for Row {
//! #     fn filter_value(&self) -> String { self.0.clone() }
//! # }
//!
//! struct App {
//!     list: ListView<Row>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let rows = vec![Row("first".into()), Row("second".into())];
//!         (Self { list: ListView::new(rows, 80, 24) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // React to view changes before forwarding.
//!         if let Some(page) = msg.downcast_ref::<PageChangedMsg>() {
//!             let _ = page.page;
//!         }
//!         self.list.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```
//!
//! ## Key Bindings
//!
//! Components use the type-safe key binding system from the [`key`]
//! module; every keymap implements [`key::KeyMap`] for help display and
//! can be customized field by field.

pub mod debounce;
pub mod key;
pub mod listview;
pub mod paginator;

pub use debounce::{new as debounce_new, DebounceMsg, Model as Debounce};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use listview::{
    FilterChangedMsg, FilterMatching, FilterPredicate, FilterState, Item, ListViewKeyMap,
    ListViewStyles, Model as ListView, PageChangedMsg, PageSizeChangedMsg, SortChangedMsg,
    SortDirection, SortState, SortValue, DEFAULT_PAGE_SIZES,
};
pub use paginator::{Model as Paginator, PageToken, PaginatorKeyMap, Type as PaginatorType};

/// Prelude module for convenient imports.
///
/// Re-exports the types needed by most embedding applications: the
/// components, the `Item` trait, sort/filter vocabulary, the notification
/// messages, and the key binding system.
///
/// # Usage
///
/// ```rust
/// use bubbletea_listview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::debounce::{new as debounce_new, DebounceMsg, Model as Debounce};
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
        Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::listview::{
        FilterChangedMsg, FilterMatching, FilterPredicate, FilterState, Item, ListViewKeyMap,
        ListViewStyles, Model as ListView, PageChangedMsg, PageSizeChangedMsg, SortChangedMsg,
        SortDirection, SortState, SortValue, DEFAULT_PAGE_SIZES,
    };
    pub use crate::paginator::{
        Model as Paginator, PageToken, PaginatorKeyMap, Type as PaginatorType,
    };
}
