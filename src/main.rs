//! Hello formula - starter automation formula
//!
//! CLI entry point. Resolves inputs from stdin, the environment and an
//! optional defaults file, then prints the greeting to stdout.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use hello_formula::cli::{emit_all, ColorWhen, TerminalSink};
use hello_formula::greeting::{render, DefaultsConfig, GreetingInputs, PartialInputs};

/// Starter formula that prints a colorized greeting
///
/// Inputs are read from RIT_INPUT_TEXT, RIT_INPUT_BOOLEAN, RIT_INPUT_LIST
/// and RIT_INPUT_PASSWORD. Unset inputs render as empty values.
#[derive(Parser, Debug)]
#[command(name = "hello-formula", version, about)]
struct Cli {
    /// Read inputs as a JSON object from stdin (overrides the environment)
    #[arg(long)]
    stdin: bool,

    /// TOML file with fallback values for unset inputs
    #[arg(long, value_name = "PATH")]
    defaults: Option<PathBuf>,

    /// When to use terminal colors
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorWhen::Auto)]
    color: ColorWhen,

    /// Log input resolution details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Install the stderr log subscriber. `RUST_LOG` refines the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Merge input layers: stdin (when requested) over environment over defaults file.
fn resolve_inputs<R: Read>(cli: &Cli, env: PartialInputs, stdin: R) -> Result<GreetingInputs> {
    debug!(keys = ?env.set_keys(), "Inputs from environment");
    let mut merged = env;

    if cli.stdin {
        let piped = PartialInputs::from_json_reader(stdin)?;
        debug!(keys = ?piped.set_keys(), "Inputs from stdin");
        merged = piped.or(merged);
    }

    if let Some(path) = &cli.defaults {
        let defaults = DefaultsConfig::from_path(path)?.into_partial();
        debug!(keys = ?defaults.set_keys(), path = %path.display(), "Inputs from defaults file");
        merged = merged.or(defaults);
    }

    let inputs = merged.resolve();
    debug!(
        flag = inputs.flag,
        secret_empty = inputs.secret.is_empty(),
        "Resolved greeting inputs"
    );
    Ok(inputs)
}

/// Render the greeting and write it to `out`.
fn write_greeting<W: Write>(inputs: &GreetingInputs, out: W) -> Result<()> {
    let lines = render(inputs);
    let mut sink = TerminalSink::new(out);
    emit_all(&mut sink, &lines).context("Failed to write greeting")?;
    sink.into_inner().context("Failed to flush greeting")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.color.apply();

    let inputs = resolve_inputs(&cli, PartialInputs::from_env(), std::io::stdin().lock())?;
    write_greeting(&inputs, std::io::stdout().lock())
}
