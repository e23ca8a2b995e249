//! Key bindings for list-view navigation and interaction.
//!
//! ## Navigation Keys
//!
//! - **Page Navigation**: `→/l/pgdn` (next page), `←/h/pgup` (prev page)
//! - **Jump Navigation**: `g/home` (first page), `G/end` (last page)
//!
//! ## Filtering Keys
//!
//! - **Start Filter**: `/` (enter filter entry)
//! - **Accept Filter**: `enter` (apply and leave filter entry)
//! - **Cancel Filter**: `esc` (discard filter entry)
//! - **Clear Filter**: `esc` (drop an applied filter)
//!
//! ## View Keys
//!
//! - **Sort**: `s` (sort by the active column / flip direction),
//!   `S` (move to the next sortable column)
//! - **Page Size**: `p` (cycle through the allowed page sizes)
//! - **Quit**: `q`, `ctrl+c`

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for list-view navigation, filtering, sorting, and exit.
#[derive(Debug, Clone)]
pub struct ListViewKeyMap {
    /// Go to the next page.
    pub next_page: key::Binding,
    /// Go to the previous page.
    pub prev_page: key::Binding,
    /// Jump to the first page.
    pub first_page: key::Binding,
    /// Jump to the last page.
    pub last_page: key::Binding,
    /// Enter filter entry.
    pub filter: key::Binding,
    /// Drop an applied filter.
    pub clear_filter: key::Binding,
    /// Cancel filter entry.
    pub cancel_filter: key::Binding,
    /// Accept the current filter input.
    pub accept_filter: key::Binding,
    /// Sort by the active column, flipping direction on repeat.
    pub toggle_sort: key::Binding,
    /// Advance to the next sortable column.
    pub next_sort_key: key::Binding,
    /// Cycle through the allowed page sizes.
    pub cycle_page_size: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Force quit.
    pub force_quit: key::Binding,
}

impl Default for ListViewKeyMap {
    fn default() -> Self {
        Self {
            next_page: key::Binding::new(vec![
                KeyCode::Right,
                KeyCode::Char('l'),
                KeyCode::PageDown,
            ])
            .with_help("→/l/pgdn", "next page"),
            prev_page: key::Binding::new(vec![
                KeyCode::Left,
                KeyCode::Char('h'),
                KeyCode::PageUp,
            ])
            .with_help("←/h/pgup", "prev page"),
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
            filter: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "filter"),
            clear_filter: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear filter"),
            cancel_filter: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "cancel"),
            accept_filter: key::Binding::new(vec![KeyCode::Enter])
                .with_help("enter", "apply filter"),
            toggle_sort: key::Binding::new(vec![KeyCode::Char('s')]).with_help("s", "sort"),
            next_sort_key: key::Binding::new(vec![KeyCode::Char('S')])
                .with_help("S", "sort column"),
            cycle_page_size: key::Binding::new(vec![KeyCode::Char('p')])
                .with_help("p", "page size"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: key::new_binding(vec![
                key::with_keys_str(&["ctrl+c"]),
                key::with_help("ctrl+c", "force quit"),
            ]),
        }
    }
}

impl key::KeyMap for ListViewKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.prev_page,
            &self.next_page,
            &self.filter,
            &self.toggle_sort,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            // Column 1: Page Navigation
            vec![
                &self.prev_page,
                &self.next_page,
                &self.first_page,
                &self.last_page,
                &self.cycle_page_size,
            ],
            // Column 2: Filtering and Sorting
            vec![
                &self.filter,
                &self.accept_filter,
                &self.cancel_filter,
                &self.clear_filter,
                &self.toggle_sort,
                &self.next_sort_key,
            ],
            // Column 3: Quit
            vec![&self.quit, &self.force_quit],
        ]
    }
}
