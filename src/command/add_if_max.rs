//! Adds the dragon only if its age exceeds the current maximum.

use crate::command::{self, CommandError, Outcome, add};
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, args: &[String]) -> Result<Outcome, CommandError> {
    let age = command::parse_age(&args[1])?;
    let max = interp.collection().max_age().unwrap_or(0);
    if age > max {
        add::execute(interp, args)
    } else {
        println!("An older dragon is already in the collection");
        Ok(Outcome::Continue)
    }
}
