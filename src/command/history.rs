//! Prints the most recent command names.

use crate::command::{CommandError, Outcome};
use crate::internal::history::VISIBLE_ENTRIES;
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, _args: &[String]) -> Result<Outcome, CommandError> {
    // `history` itself was recorded before this handler ran, so it shows
    // up in its own output.
    let recent = interp.history().recent();
    println!("Last {VISIBLE_ENTRIES} commands (without arguments):");
    for name in recent {
        println!("  {name}");
    }
    Ok(Outcome::Continue)
}
