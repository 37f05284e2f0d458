//! Dashboard renderers.
//!
//! # Responsibility
//! - Turn a derived `DashboardView` into output markup.
//! - Keep layout math out of renderers: they only format what the timeline
//!   engine produced.
//!
//! # Invariants
//! - User-entered text is escaped by renderers that emit markup.
//! - Empty optional fields render as an em dash placeholder.

pub mod html;
pub mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::dashboard::{DashboardView, PipelineEntry, PlannerPick, PortfolioStats};
use crate::model::record::ProjectRecord;
use crate::model::timeline::{FreeBar, GridLayout, TimelineItem};

/// Placeholder for absent values.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Message shown when no item resolves to a date.
pub const NO_TIMELINE_DATA: &str = "No valid timeline data.";

/// Message shown when no paper has a deadline.
pub const NO_DEADLINES: &str = "No upcoming deadlines.";

/// One front-end binding for the dashboard sections.
pub trait DashboardRenderer {
    fn planner(&self, pick: Option<&PlannerPick>) -> String;
    fn stats(&self, stats: &PortfolioStats) -> String;
    fn pipeline(&self, entries: &[PipelineEntry]) -> String;
    fn free_timeline(&self, items: &[TimelineItem], bars: &[FreeBar]) -> String;
    fn grid_timeline(&self, items: &[TimelineItem], grid: &GridLayout) -> String;
    fn project_list(&self, projects: &[ProjectRecord]) -> String;

    /// All sections in page order.
    fn render(&self, view: &DashboardView) -> String {
        [
            self.planner(view.planner.as_ref()),
            self.stats(&view.stats),
            self.pipeline(&view.pipeline),
            self.free_timeline(&view.items, &view.free_bars),
            self.grid_timeline(&view.items, &view.grid),
            self.project_list(&view.projects),
        ]
        .join("\n")
    }
}

/// Returns `value`, or the placeholder when it is blank.
pub fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// Escapes text for HTML element and attribute content.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, or_placeholder, PLACEHOLDER};

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn placeholder_replaces_blank_values() {
        assert_eq!(or_placeholder(""), PLACEHOLDER);
        assert_eq!(or_placeholder("  "), PLACEHOLDER);
        assert_eq!(or_placeholder("TMLR"), "TMLR");
    }
}
