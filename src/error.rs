// ============================================================================
// error.rs — Crate error types
// ============================================================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors loading, validating or saving a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid TOML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single tool invocation did not produce an icon.
///
/// These are per-attempt outcomes, not fatal errors: the generator records
/// them and moves on to the fallback tool or the next size.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("{program}: command not found")]
    NotFound { program: String },
    #[error("{program} exited with {}", describe_code(.code))]
    Exited { program: String, code: Option<i32> },
    #[error("{program} could not be started: {message}")]
    Spawn { program: String, message: String },
}

impl ToolError {
    pub fn program(&self) -> &str {
        match self {
            ToolError::NotFound { program }
            | ToolError::Exited { program, .. }
            | ToolError::Spawn { program, .. } => program,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "no status (terminated by signal)".to_string(),
    }
}
