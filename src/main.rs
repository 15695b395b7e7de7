// ============================================================================
// main.rs — icon-forge CLI entry point
// ============================================================================

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;
use colored::*;

use icon_forge::options::{Command, GenerateArgs};
use icon_forge::{command_exists, generate_icons, init, resolve_config, CliOptions, IconConfig, SystemRunner};

fn main() {
    let options = CliOptions::parse();

    match options.command {
        Some(Command::Generate(args)) => run_generate(args),
        Some(Command::Init { output, force }) => {
            if let Err(e) = init::write_default_config(&output, force) {
                eprintln!("[ERROR] {}", e);
                process::exit(1);
            }
        }
        Some(Command::Tools { config }) => run_tools(config),
        None => run_generate(options.generate),
    }
}

fn load_config_or_exit(config: Option<&Path>, input: Option<PathBuf>, sizes: &[u32]) -> IconConfig {
    match resolve_config(config, Path::new("."), input, sizes) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[ERROR] Configuration error: {}", e);
            process::exit(1);
        }
    }
}

fn run_generate(args: GenerateArgs) {
    let start_time = Instant::now();
    let options = args.generate_options();
    let config = load_config_or_exit(args.config.as_deref(), args.input.clone(), &args.sizes);

    let report = generate_icons(&config, &SystemRunner, options, None);

    // Per-size failures are reported above; the exit status stays 0 unless --strict.
    let elapsed = start_time.elapsed();
    if report.all_succeeded() {
        println!("  {} icons in {:.2?}", report.converted(), elapsed);
    } else {
        println!("  {} OK, {} failed in {:.2?}", report.converted(), report.failed(), elapsed);
    }
    let code = report.exit_code(args.strict);
    if code != 0 {
        process::exit(code);
    }
}

fn run_tools(config: Option<PathBuf>) {
    let config = load_config_or_exit(config.as_deref(), None, &[]);
    let mut any = false;
    for (role, tool) in [("primary", &config.primary_tool), ("fallback", &config.fallback_tool)] {
        let found = command_exists(&tool.program);
        any |= found;
        let status = if found { "found".green() } else { "missing".red() };
        println!("  {:<9} {:<12} {}", role, tool.program, status);
    }
    if !any {
        println!("  {}", config.install_hint().yellow());
    }
}
