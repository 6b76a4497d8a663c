//! hostelplan CLI - Student hostel campus capacity and cost planner.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;
mod scenario;

use display::Format;
use scenario::InputOverrides;

#[derive(Parser)]
#[command(name = "hostelplan")]
#[command(about = "Estimate capacity, construction and operating costs of a student hostel campus", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate areas, rooms and costs from flags and an optional scenario file
    Estimate {
        /// Scenario file (JSON). Missing fields use the built-in defaults.
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        overrides: InputOverrides,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the additional considerations list from text output
        #[arg(long)]
        no_extras: bool,
    },

    /// Enter the campus parameters through interactive prompts
    Interactive {
        /// Omit the additional considerations list
        #[arg(long)]
        no_extras: bool,
    },

    /// Print the default scenario as JSON (a template for --input)
    Defaults,
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate {
            input,
            overrides,
            format,
            pretty,
            output,
            no_extras,
        } => commands::estimate::estimate(
            input.as_deref(),
            &overrides,
            format,
            pretty,
            output.as_deref(),
            !no_extras,
            cli.quiet,
        ),
        Commands::Interactive { no_extras } => commands::interactive::interactive(!no_extras),
        Commands::Defaults => commands::defaults::show_defaults(),
    }
}
