// ============================================================================
// init.rs — `init` subcommand: write a starter icons.toml
// ============================================================================

use colored::*;
use dialoguer::Confirm;
use std::fs;
use std::path::Path;

use crate::config::IconConfig;
use crate::error::Error;

/// Writes the default configuration to `path`. An existing file is only
/// replaced when `force` is set or the user confirms.
pub fn write_default_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            return Err(anyhow::anyhow!("Initialization cancelled"));
        }
    }

    save_config(&IconConfig::default(), path)?;

    println!("{} {}", "✓ Created".green().bold(), path.display());
    println!("  Edit sizes, file names or tool commands, then run `icon-forge`.");
    Ok(())
}

pub fn save_config(config: &IconConfig, path: &Path) -> Result<(), Error> {
    let content = config.to_toml_string()?;
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
