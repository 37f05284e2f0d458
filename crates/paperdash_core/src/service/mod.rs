//! Core use-case services.
//!
//! Keeps the CLI (and any other front end) decoupled from storage details.

pub mod project_service;
