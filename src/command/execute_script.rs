//! Runs commands from a file through the regular dispatch path.

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::{Interpreter, script};

pub fn execute(interp: &mut Interpreter, args: &[String]) -> Result<Outcome, CommandError> {
    script::run(interp, &args[0])
}
