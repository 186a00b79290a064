//! CLI entry for Draco: the clap surface, startup loading of the
//! collection, and the hand-off to the interactive loop.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::command::Outcome;
use crate::internal::interpreter::{Interpreter, repl, script};
use crate::internal::prompt::StdinPrompter;
use crate::internal::storage;
use crate::utils::util;

#[derive(Parser, Debug)]
#[command(
    about = "Draco: an interactive manager for a collection of dragons",
    version
)]
struct Cli {
    /// Collection file to load and save (default: $DRACO_FILE, then dragons.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Script to execute before reading interactive input
    #[arg(short, long)]
    script: Option<String>,
}

/// Parses the command line and runs the interpreter until exit.
/// - `args`: parse from the process arguments if `None`, otherwise from the given args
pub fn parse(args: Option<&[&str]>) -> anyhow::Result<()> {
    let cli = match args {
        Some(args) => Cli::try_parse_from(args)?,
        None => Cli::parse(),
    };
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let file = util::collection_file(cli.file);
    let collection = storage::load(&file)
        .with_context(|| format!("cannot load the collection from '{}'", file.display()))?;
    tracing::info!(file = %file.display(), records = collection.len(), "collection ready");

    let mut interp = Interpreter::new(collection, Box::new(StdinPrompter));

    if let Some(filename) = cli.script.as_deref() {
        match script::run(&mut interp, filename) {
            Ok(Outcome::Exit) => return Ok(()),
            Ok(Outcome::Continue) => {}
            Err(e) => eprintln!("{e}"),
        }
    }

    repl::run(&mut interp)?;
    Ok(())
}

/// this test is to verify that the CLI can be built without panicking
#[test]
fn verify_cli() {
    use clap::CommandFactory;

    Cli::command().debug_assert()
}
