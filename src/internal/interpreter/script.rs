//! Executes command lines from a script file.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;

/// Runs every line of `filename` through the interpreter's dispatch path,
/// exactly as if the lines were typed interactively.
///
/// The path is resolved against the process's current working directory,
/// never against the directory of an enclosing script. A missing file is a
/// recoverable error of this invocation only; outer script levels continue.
/// Scripts may invoke `execute_script` themselves. There is deliberately
/// no cycle guard, so a self-referencing script recurses until the process
/// exhausts its stack.
pub fn run(interp: &mut Interpreter, filename: &str) -> Result<Outcome, CommandError> {
    let path = std::env::current_dir()?.join(filename);
    let file = File::open(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CommandError::ScriptNotFound(filename.to_string())
        } else {
            CommandError::Input(e)
        }
    })?;

    tracing::debug!(path = %path.display(), "executing script");
    for line in BufReader::new(file).lines() {
        let line = line?;
        if interp.dispatch(&line) == Outcome::Exit {
            return Ok(Outcome::Exit);
        }
    }
    Ok(Outcome::Continue)
}
