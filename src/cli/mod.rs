// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the safecode command-line interface.
//!
//! With no subcommand, prints `COUNT` codes (default 4), one per line. The
//! `check` subcommand runs existing codes through the same validator and reports
//! which banned words they contain.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "safecode",
    about = "Random short codes that never spell a forbidden word",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Number of codes to generate (values below 1 produce one code)
    #[arg(allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Output format for generated codes
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Where codes come from and what they must avoid.
#[derive(Args)]
pub struct SourceArgs {
    /// File of banned words, whitespace separated (default: built-in list)
    #[arg(long, global = true, env = "SAFECODE_WORD_LIST")]
    pub word_list: Option<PathBuf>,

    /// Characters codes may contain, replacing the default pool
    #[arg(long, global = true, env = "SAFECODE_CHARS")]
    pub chars: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check existing codes against the banned-word list
    Check {
        /// Codes to check
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One code per line
    Text,
    /// A JSON array of codes
    Json,
}
