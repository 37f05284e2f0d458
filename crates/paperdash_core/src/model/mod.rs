//! Domain model for tracked research projects.
//!
//! # Responsibility
//! - Define the persisted record shapes (`ProjectRecord`, `PaperRecord`,
//!   `SubmissionRecord`) with best-effort defaults for malformed input.
//! - Define the layout-engine value types (`TimelineItem`, `MonthCell`,
//!   `FreeBar`, `GridLayout`).
//!
//! # Invariants
//! - Deserializing a record never fails because an optional field is
//!   missing or has the wrong JSON type.
//! - Every project carries a stable `ProjectId`.

pub mod instant;
pub mod record;
pub mod timeline;
