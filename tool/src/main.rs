//! `csr-tool` - converts a JSON adjacency list into CSR arrays.
//!
//! ```bash
//! # Print xadj and adjncy for a file
//! csr-tool graph.json
//!
//! # Read from stdin, emit JSON, and re-check the result
//! echo '[[1], null, [0]]' | csr-tool --format json --strict
//!
//! # Built-in sample graph
//! csr-tool --sample
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use adjacency_csr::{convert_adjacency, sample, CsrGraph};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "csr-tool")]
#[command(about = "Convert an adjacency list into CSR (xadj/adjncy) arrays", long_about = None)]
struct Cli {
    /// JSON adjacency list (`[[1, 2], null, [0]]`); stdin when omitted
    input: Option<PathBuf>,

    /// Convert the built-in 39-node sample graph
    #[arg(long, default_value_t = false, conflicts_with = "input")]
    sample: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Validate the produced CSR pair before printing
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Log conversion details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `xadj` and `adjncy` as two list lines
    Text,
    /// A JSON object with counts and both arrays
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    nodes: usize,
    edges: usize,
    #[serde(flatten)]
    graph: &'a CsrGraph,
}

type Adjacency = Vec<Option<Vec<i64>>>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let adjacency: Adjacency = if cli.sample {
        sample::adjacency()
            .into_iter()
            .map(|row| Some(row.into_iter().map(i64::from).collect()))
            .collect()
    } else {
        load_adjacency(cli.input.as_deref())?
    };

    let output = run(&adjacency, cli.format, cli.strict)?;
    println!("{output}");
    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn load_adjacency(path: Option<&Path>) -> Result<Adjacency> {
    let content = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read adjacency list from stdin")?;
            buf
        }
    };
    parse_adjacency(&content)
}

fn parse_adjacency(content: &str) -> Result<Adjacency> {
    serde_json::from_str(content).context("Adjacency list must be a JSON array of integer arrays or null")
}

fn run(adjacency: &[Option<Vec<i64>>], format: Format, strict: bool) -> Result<String> {
    let graph = convert_adjacency(adjacency).context("Failed to convert adjacency list")?;

    if strict {
        graph.validate().context("Converted CSR pair failed validation")?;
    }
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "converted adjacency list"
    );

    Ok(match format {
        Format::Text => graph.to_string(),
        Format::Json => serde_json::to_string(&Report {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            graph: &graph,
        })?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use adjacency_csr::CsrError;

    #[test]
    fn text_output_has_two_lines() {
        let adjacency = parse_adjacency("[[1], null, [0]]").unwrap();
        let out = run(&adjacency, Format::Text, true).unwrap();
        assert_eq!(out, "[0, 1, 1, 2]\n[1, 0]");
    }

    #[test]
    fn json_output_carries_counts() {
        let adjacency = parse_adjacency("[[1], [0]]").unwrap();
        let out = run(&adjacency, Format::Json, false).unwrap();
        assert_eq!(out, r#"{"nodes":2,"edges":2,"xadj":[0,1,2],"adjncy":[1,0]}"#);
    }

    #[test]
    fn out_of_bounds_error_is_preserved() {
        let adjacency = parse_adjacency("[[2], [0]]").unwrap();
        let err = run(&adjacency, Format::Text, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CsrError>(),
            Some(&CsrError::OutOfBoundsNeighbor {
                node: 0,
                neighbor: 2,
                node_count: 2,
            })
        );
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(parse_adjacency("[[1, \"a\"]]").is_err());
        assert!(parse_adjacency("{}").is_err());
    }

    #[test]
    fn cli_rejects_sample_with_input() {
        assert!(Cli::try_parse_from(["csr-tool", "--sample", "graph.json"]).is_err());
        let cli = Cli::try_parse_from(["csr-tool", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Format::Json);
        assert!(cli.input.is_none());
    }
}
