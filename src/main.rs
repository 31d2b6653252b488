use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use safecode::{Code, Config, GenerateError, GenerationRequest, Validator};

mod cli;
use cli::{Cli, Commands, Format};

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only codes. `RUST_LOG` overrides the `warn` default.
/// Colour only when stderr is a terminal.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.source.chars.as_deref(), cli.source.word_list)
        .context("invalid --chars")?;
    debug!(pool = %config.pool, word_list = ?config.word_list, "Configuration resolved");

    match cli.command {
        Some(Commands::Check { codes }) => run_check(&config.validator(), &codes),
        None => {
            let request = cli
                .count
                .map_or_else(GenerationRequest::default, GenerationRequest::from_requested);
            run_generate(&config, request, cli.format)
        }
    }
}

fn run_generate(config: &Config, request: GenerationRequest, format: Format) -> Result<()> {
    let mut generator = config.generator();
    match generator.generate_request(request) {
        Ok(codes) => write_codes(&codes, format),
        // The batch is discarded: report why and print no codes.
        Err(e @ GenerateError::AttemptsExhausted { .. }) => {
            eprintln!("Error while generating random codes: {}", e);
            Ok(())
        }
    }
}

fn write_codes(codes: &[Code], format: Format) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Text => {
            for code in codes {
                writeln!(out, "{}", code)?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut out, codes).context("serialize codes")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_check(validator: &Validator, codes: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for code in codes {
        let offending = validator.offending_words(code);
        if offending.is_empty() {
            writeln!(out, "{}\tok", code)?;
        } else {
            writeln!(out, "{}\trejected: {}", code, offending.join(", "))?;
        }
    }
    Ok(())
}
