// ============================================================================
// converter.rs — External tool invocation
// ============================================================================
//
// Runs one conversion tool and classifies the result:
//   - program not on PATH        → ToolError::NotFound
//   - program ran, exit != 0     → ToolError::Exited
//   - program could not start    → ToolError::Spawn
//
// The tool's stdout/stderr are inherited so the user sees its own messages.
// ============================================================================

use std::io;
use std::process::{Command, Stdio};

use crate::error::ToolError;

/// Runs an external program to completion. The generator only talks to tools
/// through this trait, so tests can substitute a fake.
pub trait ToolRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<(), ToolError>;
}

/// Spawns real processes via `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<(), ToolError> {
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| spawn_error(program, e))?;
        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Exited {
                program: program.to_string(),
                code: status.code(),
            })
        }
    }
}

fn spawn_error(program: &str, e: io::Error) -> ToolError {
    if e.kind() == io::ErrorKind::NotFound {
        ToolError::NotFound {
            program: program.to_string(),
        }
    } else {
        ToolError::Spawn {
            program: program.to_string(),
            message: e.to_string(),
        }
    }
}

/// True when `program --version` can be spawned at all (exit status ignored).
pub fn command_exists(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Shell-like rendering of a command line for verbose output.
pub fn format_command(program: &str, args: &[String]) -> String {
    let mut line = quote_arg(program);
    for arg in args {
        line.push(' ');
        line.push_str(&quote_arg(arg));
    }
    line
}

fn quote_arg(arg: &str) -> String {
    if !arg.is_empty() && !arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
        arg.to_string()
    } else {
        format!("{:?}", arg)
    }
}
