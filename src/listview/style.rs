//! Styling for the list-view component.
//!
//! Styles cover every visual element of the list view: the title bar,
//! filter prompt, rows, status line, and pagination strip. All defaults use
//! `AdaptiveColor`, which adjusts automatically to light and dark terminal
//! themes.
//!
//! # Example
//!
//! ```rust
//! use bubbletea_listview::listview::style::ListViewStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListViewStyles::default();
//! styles.title = Style::new()
//!     .background(Color::from("#7D56F4"))
//!     .foreground(Color::from("#FFFFFF"))
//!     .padding(0, 1, 0, 1);
//! ```

use lipgloss_extras::prelude::*;

/// Unicode bullet character (•) used as a divider between status elements.
pub const BULLET: &str = "•";

/// Unicode ellipsis character (…) used for truncated rows and page-number
/// gaps.
pub const ELLIPSIS: &str = "…";

/// Styling configuration for all list-view UI elements.
#[derive(Debug, Clone)]
pub struct ListViewStyles {
    /// Style for the title bar container.
    pub title_bar: Style,
    /// Style for the list title text.
    pub title: Style,
    /// Style for the filter prompt label.
    pub filter_prompt: Style,
    /// Style for the filter cursor/caret.
    pub filter_cursor: Style,
    /// Style for ordinary rows.
    pub row: Style,
    /// Style for the status bar container.
    pub status_bar: Style,
    /// Style for the status bar when the list is empty.
    pub status_empty: Style,
    /// Style for active filter text in the status bar.
    pub status_bar_active_filter: Style,
    /// Style for the "No items" message.
    pub no_items: Style,
    /// Style for the pagination area.
    pub pagination_style: Style,
    /// Style for the current page number in the page strip.
    pub active_page: Style,
    /// Style for other page numbers in the page strip.
    pub inactive_page: Style,
    /// Style for ellipsis markers in the page strip.
    pub page_gap: Style,
    /// Style for the arabic page indicator ("3/10").
    pub arabic_pagination: Style,
    /// Style for the divider dot between status elements.
    pub divider_dot: Style,
}

impl Default for ListViewStyles {
    /// Creates default adaptive styles.
    ///
    /// The palette follows the charm-style conventions used across this
    /// component family: subdued grays for secondary information, a purple
    /// title chip, and green/yellow filter prompts.
    fn default() -> Self {
        let very_subdued_color = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            filter_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            filter_cursor: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            row: Style::new().padding_left(2),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 1, 2),
            status_empty: Style::new().foreground(subdued_color.clone()),
            status_bar_active_filter: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            pagination_style: Style::new().padding_left(2),
            active_page: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#847A85",
                    Dark: "#979797",
                })
                .bold(true),
            inactive_page: Style::new().foreground(subdued_color.clone()),
            page_gap: Style::new().foreground(very_subdued_color.clone()),
            arabic_pagination: Style::new().foreground(subdued_color),
            divider_dot: Style::new()
                .foreground(very_subdued_color)
                .set_string(&format!(" {} ", BULLET)),
        }
    }
}
