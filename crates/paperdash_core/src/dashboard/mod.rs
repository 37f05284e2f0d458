//! Dashboard view derivation.
//!
//! # Responsibility
//! - Turn project records plus a reference instant into every section the
//!   renderers draw: planner pick, stats, pipeline, both timelines and the
//!   project list.
//!
//! # Invariants
//! - Derivation is pure; the reference instant is always passed in.
//! - `items[i]` corresponds to the i-th paper of `flatten_papers`, and every
//!   layout result indexes into `items`.

pub mod papers;
pub mod planner;
pub mod stats;

pub use papers::{flatten_papers, timeline_item, timeline_items, PaperView};
pub use planner::{plan_next, PlannerPick};
pub use stats::{portfolio_stats, submission_pipeline, PipelineEntry, PortfolioStats};

use crate::model::instant::Instant;
use crate::model::record::ProjectRecord;
use crate::model::timeline::{FreeBar, GridLayout, TimelineItem};
use crate::timeline::{compute_free_layout, compute_grid_layout};

/// Everything a renderer needs for one dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub now: Instant,
    pub planner: Option<PlannerPick>,
    pub stats: PortfolioStats,
    pub pipeline: Vec<PipelineEntry>,
    pub items: Vec<TimelineItem>,
    pub free_bars: Vec<FreeBar>,
    pub grid: GridLayout,
    pub projects: Vec<ProjectRecord>,
}

/// Derives the full dashboard for `projects` as seen at `now`.
pub fn build_dashboard(
    projects: &[ProjectRecord],
    now: Instant,
    month_count: usize,
) -> DashboardView {
    let papers = flatten_papers(projects);
    let items: Vec<TimelineItem> = papers.iter().map(timeline_item).collect();
    let free_bars = compute_free_layout(&items);
    let grid = compute_grid_layout(&items, month_count, now);

    log::debug!(
        "event=dashboard_build module=dashboard status=ok projects={} papers={} placed={} months={}",
        projects.len(),
        papers.len(),
        free_bars.len(),
        grid.months.len()
    );

    DashboardView {
        now,
        planner: plan_next(&papers, now),
        stats: portfolio_stats(&papers),
        pipeline: submission_pipeline(&papers),
        items,
        free_bars,
        grid,
        projects: projects.to_vec(),
    }
}
