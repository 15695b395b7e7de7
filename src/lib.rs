// ============================================================================
// lib.rs — Library API (used by the icon-forge binary)
// ============================================================================

pub mod config;
pub mod converter;
pub mod error;
pub mod generator;
pub mod init;
pub mod options;

pub use config::{IconConfig, ToolTemplate, DEFAULT_CONFIG_FILE};
pub use converter::{command_exists, SystemRunner, ToolRunner};
pub use error::{Error, Result, ToolError};
pub use generator::{generate_icons, ConversionResult, GenerateOptions, GenerateReport, SizeOutcome, Tool};
pub use options::CliOptions;

use std::path::{Path, PathBuf};

/// Resolves the configuration for one run: file or defaults, then the
/// command-line overrides, then validation.
pub fn resolve_config(
    config_path: Option<&Path>,
    dir: &Path,
    input: Option<PathBuf>,
    sizes: &[u32],
) -> Result<IconConfig> {
    let mut config = IconConfig::discover(config_path, dir)?;
    if let Some(input) = input {
        config.input_file = input;
    }
    if !sizes.is_empty() {
        config.sizes = sizes.to_vec();
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve_config(None, dir.path(), Some(PathBuf::from("logo.svg")), &[64]).unwrap();
        assert_eq!(config.input_file, PathBuf::from("logo.svg"));
        assert_eq!(config.sizes, vec![64]);
        assert_eq!(config.output_for(64), "icon64.png");
    }

    #[test]
    fn test_overrides_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_config(None, dir.path(), None, &[32, 32]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
