//! orgtree CLI
//!
//! Builds the organization hierarchy index from a registry dump and
//! answers ancestor/descendant queries against the persisted snapshot.
//!
//! Exit codes: 0 on success, 1 on build or load failure, 2 when the
//! queried identifier is not found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(version)]
#[command(about = "Organization hierarchy index: build and query")]
struct Cli {
    /// Project root holding `orgtree.toml`
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Artifact directory, relative to the root (overrides `output.dir`)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the index from a registry dump and write the snapshot
    Build {
        /// Registry dump: a JSON array of records or an `{"items": [...]}` page
        #[arg(short, long)]
        input: PathBuf,

        /// Worker threads for closure computation (0 = one per core)
        #[arg(long)]
        threads: Option<usize>,

        /// Compute closures on the calling thread only
        #[arg(long)]
        sequential: bool,

        /// Pretty-print the JSON artifacts
        #[arg(long)]
        pretty: bool,
    },

    /// Print ancestors and descendants of an id or funder alias
    Lookup { id: String },

    /// Print the ancestor list
    Ancestors { id: String },

    /// Print the descendant list
    Descendants { id: String },

    /// Print whether the id has any ancestors
    HasAncestors { id: String },

    /// Print whether the id has any descendants
    HasDescendants { id: String },

    /// Print indexed, known-without-relationships, or not-found
    Status { id: String },
}

fn main() -> ExitCode {
    orgtree_core::tracing::init_tracing();

    let cli = Cli::parse();
    match commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(1)
        }
    }
}
