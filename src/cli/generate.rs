//! Generate command - parse the roster file and write roster JSON

use crate::models::RosterConfig;
use crate::services::roster_service::{self, GenerateReport};
use crate::Result;
use clap::Args;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Roster text file (default: roster_raw.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// JSON output file (default: roster_data.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (default: rostergen.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the sample generators, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of transferred members to generate
    #[arg(long)]
    pub transferred: Option<usize>,

    /// Number of prospective gains to generate
    #[arg(long)]
    pub prospective: Option<usize>,
}

impl GenerateArgs {
    /// Command-line flags win over config file values
    fn apply(&self, config: &mut RosterConfig) {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
        }
        if let Some(count) = self.transferred {
            config.generator.transferred_count = count;
        }
        if let Some(count) = self.prospective {
            config.generator.prospective_count = count;
        }
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let project_root = env::current_dir()?;

    println!("{}", "📋 Parsing roster...".cyan());
    let report = run_impl(&args, &project_root)?;

    for diagnostic in &report.diagnostics {
        eprintln!("{}", format!("⚠ Warning: {}", diagnostic).yellow());
    }

    println!(
        "   {} parsed, {} skipped, {} transferred, {} prospective",
        report.parsed,
        report.skipped(),
        report.transferred,
        report.prospective
    );
    println!(
        "{}",
        format!("✅ Data generated in {}", report.output_path.display()).green()
    );
    Ok(())
}

/// Internal implementation that accepts project_root for testability.
fn run_impl(args: &GenerateArgs, project_root: &Path) -> Result<GenerateReport> {
    let mut config = match &args.config {
        Some(path) => RosterConfig::load_from(&project_root.join(path))?,
        None => RosterConfig::load(project_root)?,
    };
    args.apply(&mut config);

    let mut rng = match config.generator.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    roster_service::generate_roster_data(&config, project_root, &mut rng)
}
