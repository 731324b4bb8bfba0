//! Roster service - Business logic for turning a roster file into roster JSON

use crate::generator::{generate_prospective, generate_transferred};
use crate::models::{RosterConfig, RosterDocument};
use crate::parser::{parse_roster, LineDiagnostic};
use crate::{Context, Result};
use rand::Rng;
use std::path::{Path, PathBuf};

/// What a `generate_roster_data` run produced
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Where the JSON was written
    pub output_path: PathBuf,
    pub parsed: usize,
    pub transferred: usize,
    pub prospective: usize,
    /// Roster lines that were dropped
    pub diagnostics: Vec<LineDiagnostic>,
}

impl GenerateReport {
    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Build the merged document from raw roster text
///
/// Parsed members go to `coreRoster`; the two sample lists are drawn from `rng`.
pub fn build_roster_document<R: Rng>(
    content: &str,
    config: &RosterConfig,
    rng: &mut R,
) -> (RosterDocument, Vec<LineDiagnostic>) {
    let parsed = parse_roster(content, &config.header_marker);

    let document = RosterDocument {
        core_roster: parsed.members,
        transferred_members: generate_transferred(rng, config.generator.transferred_count),
        prospective_gains: generate_prospective(rng, config.generator.prospective_count),
    };

    (document, parsed.diagnostics)
}

/// Read the roster file named in `config`, build the document, and write it as JSON
///
/// Relative paths in `config` resolve against `project_root`. A missing input
/// file is an error; lines that fail to parse are only reported.
pub fn generate_roster_data<R: Rng>(
    config: &RosterConfig,
    project_root: &Path,
    rng: &mut R,
) -> Result<GenerateReport> {
    let input_path = project_root.join(&config.input);
    if !input_path.exists() {
        anyhow::bail!("{} not found", config.input.display());
    }

    // Invalid UTF-8 only spoils the lines it appears on.
    let bytes = std::fs::read(&input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let (document, diagnostics) = build_roster_document(&content, config, rng);

    let output_path = project_root.join(&config.output);
    write_document(&document, &output_path)?;

    Ok(GenerateReport {
        output_path,
        parsed: document.core_roster.len(),
        transferred: document.transferred_members.len(),
        prospective: document.prospective_gains.len(),
        diagnostics,
    })
}

/// Write a document as pretty-printed JSON, creating parent directories
pub fn write_document(document: &RosterDocument, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    Ok(())
}
