// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod watch;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::graph::{Graph, GraphOption};

/// High-level entry point used by `main.rs`.
///
/// Renders once, then keeps watching and re-rendering if `--monitor` was
/// given.
pub fn run(args: CliArgs) -> Result<()> {
    let input = PathBuf::from(&args.input);
    let output = match &args.output {
        Some(output) => PathBuf::from(output),
        None => default_output(&input),
    };

    render(&input, &output)?;

    if args.monitor {
        watch::monitor(&input, || render(&input, &output))?;
    }

    Ok(())
}

/// One full pass: parse the markup, apply derived node state, reduce, write
/// the dot file, and rewrite the input canonically when `cleanup` is enabled.
pub fn render(input: &Path, output: &Path) -> Result<()> {
    let contents = loader::read_markup(input)?;

    let mut graph = Graph::parse(&contents)?;
    graph.handle_options();
    graph.transitive_reduction();

    fs::write(output, graph.to_dot())?;
    info!(output = %output.display(), "wrote dot file");

    if graph.enabled(GraphOption::Cleanup) {
        graph.compress_representation();
        fs::write(input, graph.to_markup())?;
        info!(input = %input.display(), "rewrote canonical markup");
    }

    Ok(())
}

/// Output file name when none is given: the input path plus `.dot`.
fn default_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".dot");
    PathBuf::from(name)
}
