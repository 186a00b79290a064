//! The interactive loop: stdin lines through the dispatch path.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::command::Outcome;
use crate::internal::interpreter::Interpreter;

/// Reads one line at a time from standard input, dispatching each, until
/// the exit handler asks to stop or the input stream ends.
///
/// End of stream is a graceful stop without the save confirmation; every
/// dispatch failure has already been reported and recovered inside
/// [`Interpreter::dispatch`], so the loop itself has no error state.
pub fn run(interp: &mut Interpreter) -> io::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            tracing::debug!("stdin closed, leaving the interactive loop");
            break;
        }
        if interp.dispatch(&line) == Outcome::Exit {
            break;
        }
    }
    Ok(())
}
