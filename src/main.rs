use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use rostergen::Result;
use std::io;

#[derive(Parser)]
#[command(name = "rostergen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Roster parser and sample roster data generator", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the roster file and write roster JSON with sample members
    Generate(rostergen::cli::generate::GenerateArgs),

    /// Write a default rostergen.toml in the current directory
    Init {
        /// Overwrite an existing rostergen.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Parse a single roster line and print the record
    #[command(name = "parse-line")]
    ParseLine {
        /// Roster line, quoted
        line: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => {
            rostergen::cli::generate::run(args)?;
        }

        Commands::Init { force } => {
            rostergen::cli::init::run(force)?;
        }

        Commands::ParseLine { line } => {
            rostergen::cli::parse_line::run(&line)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "rostergen", &mut io::stdout());
        }
    }

    Ok(())
}
