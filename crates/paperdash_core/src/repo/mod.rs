//! Persistence contracts and SQLite implementations.
//!
//! # Responsibility
//! - Save and load the admin project list.
//! - Keep SQL and JSON column details inside the persistence boundary.
//!
//! # Invariants
//! - Saves replace the whole project list in one transaction.
//! - Reads reject corrupt rows with `RepoError::InvalidData` rather than
//!   silently dropping them.

pub mod project_repo;
