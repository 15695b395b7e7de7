// ============================================================================
// generator.rs — Per-size icon generation with tool fallback
// ============================================================================
//
// Sizes are processed one at a time, in configuration order. For each size:
//
//   PRIMARY_ATTEMPT ──ok──▶ SUCCESS
//         │
//       failed
//         ▼
//   FALLBACK_ATTEMPT ──ok──▶ SUCCESS
//         │
//       failed
//         ▼
//       FAILED  (warning + install hint, continue with next size)
//
// Each tool runs at most once per size. A failed size never stops the run.
// ============================================================================

use std::sync::mpsc;

use colored::*;

use crate::config::{IconConfig, ToolTemplate};
use crate::converter::{format_command, ToolRunner};
use crate::error::ToolError;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Converted { tool: Tool },
    Failed { primary: ToolError, fallback: ToolError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOutcome {
    pub size: u32,
    pub output: String,
    pub result: ConversionResult,
}

impl SizeOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.result, ConversionResult::Converted { .. })
    }
}

#[derive(Debug, Default)]
pub struct GenerateReport {
    pub outcomes: Vec<SizeOutcome>,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.converted()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit status for this run. Failed sizes only turn into a
    /// non-zero status under `strict`.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && !self.all_succeeded() {
            1
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub verbose: bool,
    pub quiet: bool,
}

// ---------------------------------------------------------------------------
// Console lines
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum Line {
    Progress,
    Success,
    Warning,
    Detail,
}

/// Prints to stdout, or forwards plain lines to `tx` when one is given.
struct Console<'a> {
    tx: Option<&'a mpsc::Sender<String>>,
    options: GenerateOptions,
}

impl Console<'_> {
    fn emit(&self, kind: Line, text: &str) {
        let shown = match kind {
            Line::Warning => true,
            Line::Progress | Line::Success => !self.options.quiet,
            Line::Detail => self.options.verbose && !self.options.quiet,
        };
        if !shown {
            return;
        }
        if let Some(tx) = self.tx {
            let _ = tx.send(text.to_string());
            return;
        }
        match kind {
            Line::Progress => println!("{}", text),
            Line::Success => println!("{}", text.green()),
            Line::Warning => println!("{}", text.yellow()),
            Line::Detail => println!("{}", text.dimmed()),
        }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generates one icon per configured size. When `output_tx` is Some, every
/// console line is sent to the channel instead of being printed.
pub fn generate_icons(
    config: &IconConfig,
    runner: &dyn ToolRunner,
    options: GenerateOptions,
    output_tx: Option<&mpsc::Sender<String>>,
) -> GenerateReport {
    let console = Console { tx: output_tx, options };
    let mut report = GenerateReport::default();
    for &size in &config.sizes {
        report.outcomes.push(convert_size(config, runner, size, &console));
    }
    report
}

fn convert_size(config: &IconConfig, runner: &dyn ToolRunner, size: u32, console: &Console) -> SizeOutcome {
    let output = config.output_for(size);
    console.emit(Line::Progress, &format!("Creating {}...", output));

    let result = match attempt(&config.primary_tool, config, &output, size, runner, console) {
        Ok(()) => ConversionResult::Converted { tool: Tool::Primary },
        Err(primary) => match attempt(&config.fallback_tool, config, &output, size, runner, console) {
            Ok(()) => ConversionResult::Converted { tool: Tool::Fallback },
            Err(fallback) => ConversionResult::Failed { primary, fallback },
        },
    };

    match &result {
        ConversionResult::Converted { .. } => {
            console.emit(Line::Success, &format!("  Success: {}", output));
        }
        ConversionResult::Failed { .. } => {
            console.emit(Line::Warning, &format!("  Warning: Could not create {}", output));
            console.emit(Line::Warning, &format!("  {}", config.install_hint()));
        }
    }

    SizeOutcome { size, output, result }
}

fn attempt(
    tool: &ToolTemplate,
    config: &IconConfig,
    output: &str,
    size: u32,
    runner: &dyn ToolRunner,
    console: &Console,
) -> Result<(), ToolError> {
    let args = tool.expand(&config.input_file, output, size);
    console.emit(Line::Detail, &format!("    Command: {}", format_command(&tool.program, &args)));
    let result = runner.run(&tool.program, &args);
    if let Err(e) = &result {
        console.emit(Line::Detail, &format!("    {}", e));
    }
    result
}
