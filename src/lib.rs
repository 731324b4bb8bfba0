// Rostergen - Roster Parser and Sample Data Generator
// Turns a whitespace-delimited personnel roster into roster JSON

pub mod cli;
pub mod generator;
pub mod models;
pub mod parser;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{MemberRecord, RosterConfig, RosterDocument};
pub use parser::{parse_line, parse_roster, ParseFailure};
