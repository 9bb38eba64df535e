use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::report::OutputFormat;

#[derive(Parser)]
#[command(
    name = "pkgrank",
    version,
    about = "Dependency graph centrality for compilation units"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Accumulate the whole-program graph of ROOT and rank its nodes
    Rank {
        #[command(flatten)]
        source: SourceArgs,
        /// Rank over reversed edges (consumers first)
        #[arg(long, short)]
        reverse: bool,
        /// Number of rows to print
        #[arg(long, short = 'n', default_value = "25")]
        top: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Centrality measure: pagerank, indegree or outdegree (overrides
        /// the configuration)
        #[arg(long, short, value_name = "NAME")]
        measure: Option<String>,
    },
    /// Print the whole-program graph of ROOT as `src dst` lines
    Edges {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Arguments shared by every command that reads an edge list.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Unit whose accumulated graph is the whole program
    #[arg(value_name = "ROOT")]
    pub root: String,
    /// Edge list to read (`-` for stdin)
    #[arg(long, short, value_name = "FILE", default_value = "-")]
    pub input: PathBuf,
    /// Accumulate independent units in parallel
    #[arg(long)]
    pub parallel: bool,
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging (unless LOG_LEVEL is set)
    #[arg(long, short)]
    pub verbose: bool,
}
