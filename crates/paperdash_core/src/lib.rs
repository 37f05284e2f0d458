//! Core logic for the research project dashboard.
//!
//! The timeline layout engine lives in `timeline`; everything else derives
//! dashboard sections, renders them, or edits and persists project records.

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod interchange;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod store;
pub mod timeline;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_config, ConfigError, DashboardConfig};
pub use dashboard::{build_dashboard, DashboardView};
pub use interchange::{export_csv, export_json, import_csv, import_json, InterchangeError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::instant::{parse_instant, Instant};
pub use model::record::{
    Dataset, PaperRecord, Priority, ProjectId, ProjectRecord, SubmissionRecord,
};
pub use model::timeline::{FreeBar, GridLayout, GridRow, MonthCell, TimelineItem};
pub use render::{DashboardRenderer, HtmlRenderer, TextRenderer};
pub use repo::project_repo::{ProjectRepository, RepoError, RepoResult, SqliteProjectRepository};
pub use service::project_service::{ProjectService, ServiceError, ServiceResult};
pub use store::project_store::{ProjectDraft, ProjectStore, StoreError, StoreUpdate};
pub use timeline::{compute_free_layout, compute_grid_layout, is_stale, month_cells};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
