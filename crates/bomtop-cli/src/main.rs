//! BOM Top-N Reporter CLI
//!
//! A command-line tool for reporting the most used parts in a BOM file.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use bomtop_core::parse_bom;
use bomtop_core::report::rank_parts_with_limit;
use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{HumanOutput, JsonOutput};

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    let exit_code = run(args);
    StdExitCode::from(u8::from(exit_code))
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the reporter with the given arguments.
fn run(args: Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let use_colors = !args.json && io::stdout().is_terminal();

    // Validate configuration
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    debug!("Validated configuration: {:?}", config);
    info!("BOM file: {}", config.bom_path.display());

    // Read the BOM file
    let content = match config.read_bom() {
        Ok(content) => content,
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    // Parse it
    let file = match parse_bom(&content) {
        Ok(file) => file,
        Err(e) => {
            let mut output = HumanOutput::new(&mut stderr, use_colors);
            let _ = output.write_error("Failed to parse BOM file");
            let _ = writeln!(stderr, "  {}", e);
            return ExitCode::ParseFailed;
        }
    };

    // Rank the parts
    let limit = config.limit_override.unwrap_or(file.limit);
    let ranked = rank_parts_with_limit(&file, limit);
    debug!("Ranked {} part(s) (limit {})", ranked.len(), limit);

    // Output the report
    if config.json_output {
        if let Err(e) = JsonOutput::from_ranked(&ranked).write(&mut stdout) {
            error!("Failed to write JSON output: {}", e);
            return ExitCode::StartupFailure;
        }
    } else {
        let mut output = HumanOutput::new(&mut stdout, use_colors);
        if let Err(e) = output.write_report(&ranked) {
            error!("Failed to write output: {}", e);
            return ExitCode::StartupFailure;
        }
    }

    ExitCode::Success
}

/// Write an error message to the writer.
fn write_error<W: Write>(writer: &mut W, message: &str, use_colors: bool) {
    if use_colors {
        let _ = writeln!(writer, "\x1b[1;31mError:\x1b[0m {}", message);
    } else {
        let _ = writeln!(writer, "Error: {}", message);
    }
}
