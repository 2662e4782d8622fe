// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskdot`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdot",
    version,
    about = "Render a task dependency markup file to graphviz dot.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the markup file describing tasks, options and dependencies.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path for the generated dot file.
    ///
    /// Default: `<INPUT>.dot`.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Keep watching the input file and re-render on every change.
    #[arg(long, short = 'm')]
    pub monitor: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDOT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
