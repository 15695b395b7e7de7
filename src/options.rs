// ============================================================================
// options.rs — Command-line arguments (CLI)
// ============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::GenerateOptions;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Configuration file (default: icons.toml if present, else built-in defaults)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Source SVG file (overrides the configuration)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Icon size in pixels; repeat to build several (overrides the configuration)
    #[arg(short, long = "size", value_name = "PX")]
    pub sizes: Vec<u32>,

    /// Exit with status 1 when any icon could not be created
    #[arg(long)]
    pub strict: bool,

    /// Verbose output (tool command lines and failure reasons)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: only warnings and summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// If both verbose and quiet are set, quiet takes precedence
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            verbose: self.verbose && !self.quiet,
            quiet: self.quiet,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rasterize the SVG into one PNG per size (default)
    Generate(GenerateArgs),

    /// Write the default configuration to a TOML file
    Init {
        /// Output path
        #[arg(short, long, default_value = "icons.toml")]
        output: PathBuf,

        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Show whether the primary and fallback tools are installed
    Tools {
        /// Configuration file (default: icons.toml if present, else built-in defaults)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "icon-forge")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "icon-forge - Rasterize an SVG into PNG icons with inkscape or ImageMagick", long_about = None)]
pub struct CliOptions {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Used when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_generate() {
        let opts = CliOptions::parse_from(["icon-forge", "-s", "32", "-s", "64", "--strict"]);
        assert!(opts.command.is_none());
        assert_eq!(opts.generate.sizes, vec![32, 64]);
        assert!(opts.generate.strict);
    }

    #[test]
    fn test_flags_before_subcommand_are_rejected() {
        let result = CliOptions::try_parse_from(["icon-forge", "--strict", "-s", "32", "generate"]);
        assert!(result.is_err());

        let opts = CliOptions::try_parse_from(["icon-forge", "generate", "--strict", "-s", "32"]).unwrap();
        match opts.command {
            Some(Command::Generate(args)) => {
                assert!(args.strict);
                assert_eq!(args.sizes, vec![32]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        let opts = CliOptions::parse_from(["icon-forge", "generate", "-v", "-q"]);
        match opts.command {
            Some(Command::Generate(args)) => {
                let o = args.generate_options();
                assert!(o.quiet);
                assert!(!o.verbose);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_init_defaults() {
        let opts = CliOptions::parse_from(["icon-forge", "init"]);
        match opts.command {
            Some(Command::Init { output, force }) => {
                assert_eq!(output, PathBuf::from("icons.toml"));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
