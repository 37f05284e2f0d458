//! Timeline layout engine.
//!
//! # Responsibility
//! - Place dated items as horizontal bars, either proportionally across the
//!   item set's own date span (`free`) or apportioned over consecutive
//!   calendar months (`grid`).
//!
//! # Invariants
//! - Pure functions of their inputs: no clock reads, no I/O, no caching.
//! - Never fails. Unresolvable, degenerate and inverted dates are handled by
//!   policy, and an empty input yields an empty result.

pub mod free;
pub mod grid;
pub mod stale;

pub use free::{compute_free_layout, MIN_VISIBLE_WIDTH_PERCENT};
pub use grid::{compute_grid_layout, month_cells, DEFAULT_MONTH_COUNT};
pub use stale::{is_stale, is_terminal_status};
