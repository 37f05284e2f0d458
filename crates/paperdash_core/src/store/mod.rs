//! In-memory admin state.
//!
//! The store is an ordinary value owned by the caller; persistence lives in
//! `repo` and orchestration in `service`.

pub mod project_store;
