//! Command handlers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use orgtree_analysis::lookup::LookupService;
use orgtree_core::config::{CliOverrides, OrgtreeConfig};
use orgtree_core::errors::{LookupError, OrgtreeErrorCode, PipelineError};
use orgtree_storage::{load_lookup, load_records, write_snapshot, OutputLayout};
use tracing::info;

use crate::{Cli, Command};

const NOT_FOUND: u8 = 2;

pub fn run(cli: Cli) -> Result<ExitCode> {
    let Cli {
        root,
        data_dir,
        command,
    } = cli;

    let mut overrides = CliOverrides {
        output_dir: data_dir.map(|d| d.display().to_string()),
        ..CliOverrides::default()
    };

    if let Command::Build {
        input,
        threads,
        sequential,
        pretty,
    } = command
    {
        overrides.threads = threads;
        overrides.parallel = sequential.then_some(false);
        overrides.pretty = pretty.then_some(true);
        build(&root, &input, &overrides).map_err(|e| anyhow!(e.diagnostic()))?;
        return Ok(ExitCode::SUCCESS);
    }

    let service = open_lookup(&root, &overrides).map_err(|e| anyhow!(e.diagnostic()))?;
    query(&service, command)
}

fn build(root: &Path, input: &Path, overrides: &CliOverrides) -> Result<(), PipelineError> {
    let config = OrgtreeConfig::load(root, Some(overrides))?;
    let records = load_records(input)?;
    let output = orgtree_analysis::build(&records, &config.build);

    let layout = OutputLayout::new(output_dir(root, &config));
    write_snapshot(&layout, &output, config.output.effective_pretty())?;

    let stats = &output.stats;
    info!(
        records = stats.records_seen,
        indexed = stats.indexed,
        aliases = stats.aliases,
        dir = %layout.dir().display(),
        "build finished"
    );
    Ok(())
}

fn open_lookup(root: &Path, overrides: &CliOverrides) -> Result<LookupService, PipelineError> {
    let config = OrgtreeConfig::load(root, Some(overrides))?;
    let layout = OutputLayout::new(output_dir(root, &config));
    Ok(load_lookup(&layout, config.lookup.effective_canonical_prefix())?)
}

fn query(service: &LookupService, command: Command) -> Result<ExitCode> {
    match command {
        Command::Lookup { id } => match service.query(&id) {
            Ok(result) => print_json(&result),
            Err(e) => Ok(not_found(&e)),
        },
        Command::Ancestors { id } => match service.ancestors_of(&id) {
            Ok(list) => print_json(&list),
            Err(e) => Ok(not_found(&e)),
        },
        Command::Descendants { id } => match service.descendants_of(&id) {
            Ok(list) => print_json(&list),
            Err(e) => Ok(not_found(&e)),
        },
        Command::HasAncestors { id } => {
            println!("{}", service.has_ancestors(&id));
            Ok(ExitCode::SUCCESS)
        }
        Command::HasDescendants { id } => {
            println!("{}", service.has_descendants(&id));
            Ok(ExitCode::SUCCESS)
        }
        Command::Status { id } => {
            println!("{}", service.status(&id));
            Ok(ExitCode::SUCCESS)
        }
        Command::Build { .. } => Err(anyhow!("build is not a query")),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<ExitCode> {
    let line = serde_json::to_string(value).context("encoding query result")?;
    println!("{line}");
    Ok(ExitCode::SUCCESS)
}

fn not_found(e: &LookupError) -> ExitCode {
    eprintln!("{}", e.diagnostic());
    ExitCode::from(NOT_FOUND)
}

/// Relative artifact directories resolve against the project root.
fn output_dir(root: &Path, config: &OrgtreeConfig) -> PathBuf {
    root.join(config.output.effective_dir())
}
