//! Layout-engine inputs and outputs.

use crate::model::instant::Instant;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A dated unit of work to place on a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineItem {
    /// Display title, e.g. the paper name.
    pub label: String,
    /// Owning project or category name.
    pub group_label: String,
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    /// Deadline used for both ends when `start`/`end` are incomplete.
    pub fallback_instant: Option<Instant>,
    /// Free-form status, only read by the stale annotation.
    pub status: String,
}

impl TimelineItem {
    pub fn new(label: impl Into<String>, group_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            group_label: group_label.into(),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start: Instant, end: Instant) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn with_fallback(mut self, instant: Instant) -> Self {
        self.fallback_instant = Some(instant);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Effective `(start, end)`.
    ///
    /// Both ends present wins; otherwise the fallback instant is used for
    /// both; otherwise the item is unplaceable. Inverted ranges are returned
    /// as given.
    pub fn resolve(&self) -> Option<(Instant, Instant)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => self.fallback_instant.map(|instant| (instant, instant)),
        }
    }
}

/// One calendar month, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCell {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
}

impl MonthCell {
    pub fn days(&self) -> i64 {
        (self.month_end - self.month_start).num_days() + 1
    }
}

/// Free-span placement of one resolved item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeBar {
    /// Index of the item in the input slice.
    pub item_index: usize,
    pub offset_percent: f64,
    pub width_percent: f64,
}

/// Month-grid placement of one resolved item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridRow {
    /// Index of the item in the input slice.
    pub item_index: usize,
    /// Past its end without reaching a terminal status. Styling only.
    pub stale: bool,
    /// Fill percentage keyed by month index; months without overlap are absent.
    pub cells: BTreeMap<usize, f64>,
}

/// Output of the month-grid layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    pub months: Vec<MonthCell>,
    pub rows: Vec<GridRow>,
}

impl GridLayout {
    /// Fill percentage of `(item_index, month_index)`, `None` when absent.
    pub fn cell(&self, item_index: usize, month_index: usize) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.item_index == item_index)
            .and_then(|row| row.cells.get(&month_index).copied())
    }

    pub fn populated_cells(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }
}
