//! Free-span layout: bars scaled to the min/max dates of the item set.

use crate::model::instant::Instant;
use crate::model::timeline::{FreeBar, TimelineItem};

/// Point items are drawn at least this wide so they stay visible.
pub const MIN_VISIBLE_WIDTH_PERCENT: f64 = 1.0;

/// Computes offset and width percentages for every resolvable item.
///
/// Unresolvable items are skipped; `FreeBar::item_index` points back into
/// `items`. Offsets and widths are not clamped at 100, so rounding may push
/// `offset + width` fractionally past it.
///
/// When the span is not positive, point items cover the full width and
/// inverted items keep the minimum visible width.
pub fn compute_free_layout(items: &[TimelineItem]) -> Vec<FreeBar> {
    let resolved: Vec<(usize, Instant, Instant)> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| item.resolve().map(|(start, end)| (index, start, end)))
        .collect();

    let (Some(min_date), Some(max_date)) = (
        resolved.iter().map(|(_, start, _)| *start).min(),
        resolved.iter().map(|(_, _, end)| *end).max(),
    ) else {
        return Vec::new();
    };

    let total_span = (max_date - min_date).num_milliseconds();
    if total_span <= 0 {
        return resolved
            .iter()
            .map(|(item_index, start, end)| FreeBar {
                item_index: *item_index,
                offset_percent: 0.0,
                width_percent: if start > end {
                    MIN_VISIBLE_WIDTH_PERCENT
                } else {
                    100.0
                },
            })
            .collect();
    }

    let total_span = total_span as f64;
    resolved
        .iter()
        .map(|(item_index, start, end)| {
            let offset = (*start - min_date).num_milliseconds() as f64 / total_span * 100.0;
            let raw_width = (*end - *start).num_milliseconds() as f64 / total_span * 100.0;
            FreeBar {
                item_index: *item_index,
                offset_percent: offset,
                width_percent: raw_width.max(MIN_VISIBLE_WIDTH_PERCENT),
            }
        })
        .collect()
}
