//! Plain-text renderer for terminals.

use super::{or_placeholder, DashboardRenderer, NO_DEADLINES, NO_TIMELINE_DATA};
use crate::dashboard::{PipelineEntry, PlannerPick, PortfolioStats};
use crate::model::record::ProjectRecord;
use crate::model::timeline::{FreeBar, GridLayout, TimelineItem};
use std::fmt::Write;

const DEFAULT_BAR_COLUMNS: usize = 40;

/// Renders sections as aligned text with ASCII bars.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Width of the free-span bar track in characters.
    pub bar_columns: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            bar_columns: DEFAULT_BAR_COLUMNS,
        }
    }
}

impl TextRenderer {
    /// Draws `[offset, offset + width)` percent onto a track of `bar_columns`.
    ///
    /// At least one cell is filled so point items stay visible.
    fn bar(&self, offset_percent: f64, width_percent: f64) -> String {
        let columns = self.bar_columns.max(1);
        let scale = columns as f64 / 100.0;
        let first = ((offset_percent * scale).floor().max(0.0) as usize).min(columns - 1);
        let filled = ((width_percent * scale).round() as usize).clamp(1, columns - first);

        let mut track = String::with_capacity(columns);
        for column in 0..columns {
            track.push(if column >= first && column < first + filled {
                '#'
            } else {
                '.'
            });
        }
        track
    }
}

impl DashboardRenderer for TextRenderer {
    fn planner(&self, pick: Option<&PlannerPick>) -> String {
        let Some(pick) = pick else {
            return format!("{NO_DEADLINES}\n");
        };
        let marker = if pick.overdue { " [OVERDUE]" } else { "" };
        format!(
            "== Work on this next{marker}\n{} ({})\n  status: {}\n  deadline: {}\n",
            pick.title,
            pick.project,
            or_placeholder(&pick.status),
            pick.deadline
        )
    }

    fn stats(&self, stats: &PortfolioStats) -> String {
        format!(
            "== Stats\ntotal={} under_review={} accepted={} completed={}\n",
            stats.total, stats.under_review, stats.accepted, stats.completed
        )
    }

    fn pipeline(&self, entries: &[PipelineEntry]) -> String {
        let mut out = String::from("== Pipeline\n");
        for entry in entries {
            let _ = writeln!(
                out,
                "{} | {} | {} | {}",
                entry.title,
                or_placeholder(&entry.journal),
                or_placeholder(&entry.submitted),
                or_placeholder(&entry.decision)
            );
        }
        out
    }

    fn free_timeline(&self, items: &[TimelineItem], bars: &[FreeBar]) -> String {
        let mut out = String::from("== Timeline\n");
        if bars.is_empty() {
            let _ = writeln!(out, "{NO_TIMELINE_DATA}");
            return out;
        }
        for bar in bars {
            if let Some(item) = items.get(bar.item_index) {
                let _ = writeln!(
                    out,
                    "{} {} ({})",
                    self.bar(bar.offset_percent, bar.width_percent),
                    item.label,
                    item.group_label
                );
            }
        }
        out
    }

    fn grid_timeline(&self, items: &[TimelineItem], grid: &GridLayout) -> String {
        let mut out = String::from("== Gantt\n");
        let header: Vec<String> = grid
            .months
            .iter()
            .map(|month| month.month_start.format("%b").to_string())
            .collect();
        let _ = writeln!(out, "{}", header.join(" "));

        if grid.rows.is_empty() {
            let _ = writeln!(out, "{NO_TIMELINE_DATA}");
            return out;
        }

        for row in &grid.rows {
            let Some(item) = items.get(row.item_index) else {
                continue;
            };
            let cells: Vec<&str> = (0..grid.months.len())
                .map(|month_index| match row.cells.get(&month_index) {
                    Some(percent) if *percent >= 100.0 => "###",
                    Some(percent) if *percent >= 50.0 => "##.",
                    Some(_) => "#..",
                    None => "...",
                })
                .collect();
            let marker = if row.stale { " (stale)" } else { "" };
            let _ = writeln!(out, "{} {}{marker}", cells.join(" "), item.label);
        }
        out
    }

    fn project_list(&self, projects: &[ProjectRecord]) -> String {
        let mut out = String::from("== Projects\n");
        for project in projects {
            let _ = writeln!(out, "{} [{}]", project.name, project.id);
            for paper in &project.papers {
                let _ = writeln!(
                    out,
                    "  - {} | {} | {} | due {} | {}%",
                    paper.title,
                    or_placeholder(&paper.status),
                    paper.priority.label(),
                    or_placeholder(paper.deadline.as_deref().unwrap_or_default()),
                    paper.progress
                );
            }
        }
        out
    }
}
