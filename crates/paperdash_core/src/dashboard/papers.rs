//! Flattening project records into per-paper views and timeline items.

use crate::model::instant::parse_optional;
use crate::model::record::{PaperRecord, ProjectRecord};
use crate::model::timeline::TimelineItem;

/// A paper paired with its owning project's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperView<'a> {
    pub project: &'a str,
    pub paper: &'a PaperRecord,
}

/// Every paper of every project, in input order.
pub fn flatten_papers(projects: &[ProjectRecord]) -> Vec<PaperView<'_>> {
    projects
        .iter()
        .flat_map(|project| {
            project.papers.iter().map(move |paper| PaperView {
                project: project.name.as_str(),
                paper,
            })
        })
        .collect()
}

/// Converts one paper into layout-engine input. Unparseable dates become
/// `None`; the engine decides whether the item is placeable.
pub fn timeline_item(view: &PaperView<'_>) -> TimelineItem {
    let paper = view.paper;
    TimelineItem {
        label: paper.title.clone(),
        group_label: view.project.to_string(),
        start: parse_optional(paper.start.as_deref()),
        end: parse_optional(paper.end.as_deref()),
        fallback_instant: parse_optional(paper.deadline.as_deref()),
        status: paper.status.clone(),
    }
}

/// Timeline items for every paper, index-aligned with `flatten_papers`.
pub fn timeline_items(projects: &[ProjectRecord]) -> Vec<TimelineItem> {
    flatten_papers(projects).iter().map(timeline_item).collect()
}
