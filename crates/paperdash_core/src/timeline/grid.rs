//! Month-grid (Gantt) layout.
//!
//! Overlap is measured in whole calendar days with both ends inclusive, so
//! an item covering a whole month fills exactly 100% of its cell.

use crate::model::instant::Instant;
use crate::model::timeline::{GridLayout, GridRow, MonthCell, TimelineItem};
use crate::timeline::stale::is_stale;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

/// Months shown when the caller does not choose.
pub const DEFAULT_MONTH_COUNT: usize = 12;

const MAX_PREALLOCATED_MONTHS: usize = 120;

/// `month_count` consecutive months starting with the month of `reference`.
///
/// Generation stops early only if the calendar overflows chrono's range.
pub fn month_cells(reference: NaiveDate, month_count: usize) -> Vec<MonthCell> {
    let Some(mut month_start) = reference.with_day(1) else {
        return Vec::new();
    };

    let mut months = Vec::with_capacity(month_count.min(MAX_PREALLOCATED_MONTHS));
    for _ in 0..month_count {
        let Some(next_start) = month_start.checked_add_months(Months::new(1)) else {
            break;
        };
        let Some(month_end) = next_start.pred_opt() else {
            break;
        };
        months.push(MonthCell {
            month_start,
            month_end,
        });
        month_start = next_start;
    }
    months
}

/// Lays items over `month_count` months from the month of `reference`.
///
/// `reference` doubles as "now" for the stale annotation. Unresolvable items
/// produce no row; resolved items outside the window produce a row with no
/// cells.
pub fn compute_grid_layout(
    items: &[TimelineItem],
    month_count: usize,
    reference: Instant,
) -> GridLayout {
    let months = month_cells(reference.date(), month_count);

    let rows = items
        .iter()
        .enumerate()
        .filter_map(|(item_index, item)| {
            let (start, end) = item.resolve()?;
            let cells = months
                .iter()
                .enumerate()
                .filter_map(|(month_index, month)| {
                    month_fill(month, start.date(), end.date()).map(|fill| (month_index, fill))
                })
                .collect::<BTreeMap<_, _>>();
            Some(GridRow {
                item_index,
                stale: is_stale(reference, Some(end), &item.status),
                cells,
            })
        })
        .collect();

    GridLayout { months, rows }
}

/// Percentage of `month` covered by `[start, end]`, or `None` when disjoint.
fn month_fill(month: &MonthCell, start: NaiveDate, end: NaiveDate) -> Option<f64> {
    if start > month.month_end || end < month.month_start {
        return None;
    }

    let overlap_start = start.max(month.month_start);
    let overlap_end = end.min(month.month_end);
    let overlap_days = (overlap_end - overlap_start).num_days() + 1;
    // Inverted items can pass the intersection test with an empty overlap.
    if overlap_days <= 0 {
        return None;
    }

    let percentage = overlap_days as f64 / month.days() as f64 * 100.0;
    Some(percentage.min(100.0))
}
