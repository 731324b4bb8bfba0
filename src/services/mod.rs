//! Service layer for rostergen
//!
//! Business logic shared by the CLI commands and the integration tests.

pub mod roster_service;

pub use roster_service::{build_roster_document, generate_roster_data, write_document, GenerateReport};
