//! HTML renderer.
//!
//! Class names match the dashboard stylesheet: `card`, `overdue`, `stat`,
//! `timeline-*`, `gantt-*` and `submission <priority>`.

use super::{
    escape_html, or_placeholder, DashboardRenderer, NO_DEADLINES, NO_TIMELINE_DATA,
};
use crate::dashboard::{DashboardView, PipelineEntry, PlannerPick, PortfolioStats};
use crate::model::record::ProjectRecord;
use crate::model::timeline::{FreeBar, GridLayout, TimelineItem};
use std::fmt::Write;

const DOCUMENT_STYLE: &str = "\
body{font-family:sans-serif;margin:2rem;}
.card{border:1px solid #ccc;border-radius:6px;padding:.75rem;margin:.5rem 0;}
.card.overdue{border-color:#c0392b;}
.stat{margin-right:1.5rem;font-weight:bold;}
.timeline-row{display:flex;align-items:center;margin:.25rem 0;}
.timeline-label{width:30%;}
.timeline-bar{flex:1;background:#eee;height:12px;}
.timeline-fill{background:#2e86de;height:100%;}
.gantt td{border-left:1px solid #ddd;min-width:3rem;}
.gantt-fill{background:#2e86de;height:12px;}
.gantt-fill.stale{opacity:.4;}
.submission.high{border-left:4px solid #c0392b;}
.submission.medium{border-left:4px solid #f39c12;}
.submission.low{border-left:4px solid #27ae60;}
";

/// Renders each section as an HTML fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Standalone document with one `<section>` per dashboard container.
    pub fn document(&self, view: &DashboardView, title: &str) -> String {
        let sections = [
            ("planner", self.planner(view.planner.as_ref())),
            ("stats", self.stats(&view.stats)),
            ("pipeline", self.pipeline(&view.pipeline)),
            ("timeline", self.free_timeline(&view.items, &view.free_bars)),
            ("gantt", self.grid_timeline(&view.items, &view.grid)),
            ("projects", self.project_list(&view.projects)),
        ];

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_html(title));
        let _ = writeln!(out, "<style>\n{DOCUMENT_STYLE}</style>\n</head>\n<body>");
        let _ = writeln!(out, "<h1>{}</h1>", escape_html(title));
        for (id, body) in sections {
            let _ = writeln!(out, "<section id=\"{id}\">\n{body}</section>");
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl DashboardRenderer for HtmlRenderer {
    fn planner(&self, pick: Option<&PlannerPick>) -> String {
        let Some(pick) = pick else {
            return format!("<div class=\"card\">{NO_DEADLINES}</div>\n");
        };
        let class = if pick.overdue { "card overdue" } else { "card" };
        format!(
            "<div class=\"{class}\">\n<h2>Work on This Next</h2>\n<strong>{}</strong><br>\n\
             Project: {}<br>\nStatus: {}<br>\nDeadline: {}\n</div>\n",
            escape_html(&pick.title),
            escape_html(&pick.project),
            escape_html(or_placeholder(&pick.status)),
            escape_html(&pick.deadline),
        )
    }

    fn stats(&self, stats: &PortfolioStats) -> String {
        format!(
            "<span class=\"stat\">Total Items: {}</span>\n\
             <span class=\"stat\">Under Review: {}</span>\n\
             <span class=\"stat\">Accepted: {}</span>\n\
             <span class=\"stat\">Completed: {}</span>\n",
            stats.total, stats.under_review, stats.accepted, stats.completed
        )
    }

    fn pipeline(&self, entries: &[PipelineEntry]) -> String {
        let mut out = String::new();
        for entry in entries {
            let _ = write!(
                out,
                "<div class=\"card\">\n<strong>{}</strong><br>\nJournal: {}<br>\n\
                 Submitted: {}<br>\nDecision: {}\n</div>\n",
                escape_html(&entry.title),
                escape_html(or_placeholder(&entry.journal)),
                escape_html(or_placeholder(&entry.submitted)),
                escape_html(or_placeholder(&entry.decision)),
            );
        }
        out
    }

    fn free_timeline(&self, items: &[TimelineItem], bars: &[FreeBar]) -> String {
        if bars.is_empty() {
            return format!("<p>{NO_TIMELINE_DATA}</p>\n");
        }

        let mut out = String::new();
        for bar in bars {
            let Some(item) = items.get(bar.item_index) else {
                continue;
            };
            let _ = write!(
                out,
                "<div class=\"timeline-row\">\n<div class=\"timeline-label\">{} ({})</div>\n\
                 <div class=\"timeline-bar\"><div class=\"timeline-fill\" \
                 style=\"margin-left:{}%;width:{}%;\"></div></div>\n</div>\n",
                escape_html(&item.label),
                escape_html(&item.group_label),
                bar.offset_percent,
                bar.width_percent,
            );
        }
        out
    }

    fn grid_timeline(&self, items: &[TimelineItem], grid: &GridLayout) -> String {
        let mut out = String::from("<table class=\"gantt\">\n<tr><th></th>");
        for month in &grid.months {
            let _ = write!(out, "<th>{}</th>", month.month_start.format("%b %Y"));
        }
        out.push_str("</tr>\n");

        for row in &grid.rows {
            let Some(item) = items.get(row.item_index) else {
                continue;
            };
            let _ = write!(out, "<tr><td class=\"gantt-label\">{}</td>", escape_html(&item.label));
            let fill_class = if row.stale { "gantt-fill stale" } else { "gantt-fill" };
            for month_index in 0..grid.months.len() {
                match row.cells.get(&month_index) {
                    Some(percent) => {
                        let _ = write!(
                            out,
                            "<td><div class=\"{fill_class}\" style=\"width:{percent}%;\"></div></td>"
                        );
                    }
                    None => out.push_str("<td></td>"),
                }
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>\n");

        if grid.rows.is_empty() {
            let _ = writeln!(out, "<p>{NO_TIMELINE_DATA}</p>");
        }
        out
    }

    fn project_list(&self, projects: &[ProjectRecord]) -> String {
        let mut out = String::new();
        for project in projects {
            let _ = write!(out, "<div class=\"card\">\n<h3>{}</h3>\n", escape_html(&project.name));
            for paper in &project.papers {
                let _ = write!(
                    out,
                    "<div class=\"submission {}\">\n<strong>{}</strong><br>\nStatus: {}<br>\n\
                     Priority: {}<br>\nDeadline: {}<br>\nProgress: {}%\n</div>\n",
                    paper.priority.as_str(),
                    escape_html(&paper.title),
                    escape_html(or_placeholder(&paper.status)),
                    paper.priority.label(),
                    escape_html(or_placeholder(paper.deadline.as_deref().unwrap_or_default())),
                    paper.progress,
                );
            }
            out.push_str("</div>\n");
        }
        out
    }
}
