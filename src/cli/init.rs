//! Init command - write a default rostergen.toml

use crate::models::{RosterConfig, CONFIG_FILE_NAME};
use crate::Result;
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

pub fn run(force: bool) -> Result<()> {
    let project_root = env::current_dir()?;

    println!("{}", "🚀 Initializing rostergen...".cyan());
    let config_path = run_impl(&project_root, force)?;
    println!(
        "{}",
        format!("✅ Wrote {}", config_path.display()).green()
    );
    Ok(())
}

/// Internal implementation that accepts project_root for testability.
fn run_impl(project_root: &Path, force: bool) -> Result<PathBuf> {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            CONFIG_FILE_NAME
        );
    }

    RosterConfig::default().save(project_root)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = run_impl(temp_dir.path(), false).unwrap();

        assert_eq!(path, temp_dir.path().join(CONFIG_FILE_NAME));
        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, RosterConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "header_marker = \"LNAME\"\n").unwrap();

        assert!(run_impl(temp_dir.path(), false).is_err());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "header_marker = \"LNAME\"\n"
        );
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "header_marker = \"LNAME\"\n",
        )
        .unwrap();

        run_impl(temp_dir.path(), true).unwrap();
        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.header_marker, "lname");
    }
}
