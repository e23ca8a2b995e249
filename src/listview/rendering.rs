//! View rendering for the list-view component.
//!
//! Rendering composes four sections: header (title or filter input), the
//! rows of the current page, the pagination strip, and the status line.
//! Row text comes from each item's `Display` impl, truncated to the view
//! width on a display-width basis.

use super::style::ELLIPSIS;
use super::types::{FilterState, Item, SortDirection};
use super::Model;
use crate::paginator::PageToken;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

impl<I: Item + Send + Sync + 'static> Model<I> {
    /// Renders the header: the filter input while filtering, the styled
    /// title otherwise (with a match count when a filter is applied).
    pub(super) fn view_header(&self) -> String {
        if self.filter_state == FilterState::Filtering {
            let prompt = self.styles.filter_prompt.clone().render("Filter:");
            let cursor = self.styles.filter_cursor.clone().render("▌");
            return format!("{} {}{}", prompt, self.pending_query, cursor);
        }
        let mut header = self.title.clone();
        if self.filter_state == FilterState::FilterApplied {
            header.push_str(&format!(" (filtered: {})", self.len()));
        }
        self.styles.title.clone().render(&header)
    }

    /// Renders the rows of the current page, one item per line.
    pub(super) fn view_rows(&self) -> String {
        if self.is_empty() {
            return self.styles.no_items.clone().render("No items.");
        }

        // Leave room for header, pagination, and status lines.
        let max_rows = self.height.saturating_sub(3).max(1);
        let max_width = self.width.saturating_sub(4);

        self.visible_items()
            .iter()
            .take(max_rows)
            .map(|item| {
                self.styles
                    .row
                    .clone()
                    .render(&truncate(&item.to_string(), max_width))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the pagination strip: the page-number window with ellipsis
    /// markers, plus the arabic page indicator.
    pub(super) fn view_pagination(&self) -> String {
        let mut parts = Vec::new();
        for token in self.page_numbers(5) {
            let rendered = match token {
                PageToken::Page(p) if p == self.current_page() => {
                    self.styles.active_page.clone().render(&p.to_string())
                }
                PageToken::Page(p) => self.styles.inactive_page.clone().render(&p.to_string()),
                PageToken::Ellipsis => self.styles.page_gap.clone().render(ELLIPSIS),
            };
            parts.push(rendered);
        }
        let indicator = self
            .styles
            .arabic_pagination
            .clone()
            .render(&self.paginator.view());
        self.styles
            .pagination_style
            .clone()
            .render(&format!("{}  {}", parts.join(" "), indicator))
    }

    /// Renders the status line: the covered range, the item noun, and any
    /// active sort and filter.
    pub(super) fn view_status(&self) -> String {
        if self.is_empty() {
            let message = if self.has_filter() {
                "Nothing matched."
            } else {
                "No items."
            };
            let empty = self.styles.status_empty.clone().render(message);
            return self.styles.status_bar.clone().render(&empty);
        }

        let singular = self.status_item_singular.as_deref().unwrap_or("item");
        let plural = self.status_item_plural.as_deref().unwrap_or("items");
        let (first, last, total) = self.page_range();
        let noun = if total == 1 { singular } else { plural };
        let divider = self.styles.divider_dot.clone().render("");

        let mut status = format!("{}–{} of {} {}", first, last, total, noun);
        if let Some(sort) = &self.sort {
            let arrow = match sort.direction {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            };
            status.push_str(&divider);
            status.push_str(&format!("sorted by {} {}", sort.key, arrow));
        }
        if self.filter_state == FilterState::FilterApplied && !self.filter_query.is_empty() {
            status.push_str(&divider);
            status.push_str(
                &self
                    .styles
                    .status_bar_active_filter
                    .clone()
                    .render(&format!("“{}”", self.filter_query)),
            );
        }
        self.styles.status_bar.clone().render(&status)
    }
}

/// Truncates a string to the given display width, appending an ellipsis
/// when anything was cut.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate_short_string_is_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_cuts_on_display_width() {
        assert_eq!(truncate("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_handles_wide_characters() {
        // Each CJK character is two columns wide.
        let s = "数据列表视图";
        let cut = truncate(s, 7);
        assert!(cut.ends_with('…'));
        assert!(unicode_width::UnicodeWidthStr::width(cut.as_str()) <= 7);
    }
}
