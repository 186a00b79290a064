//! Adds the dragon only if its age is below the current minimum.

use crate::command::{self, CommandError, Outcome, add};
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, args: &[String]) -> Result<Outcome, CommandError> {
    let age = command::parse_age(&args[1])?;
    let min = interp.collection().min_age().unwrap_or(i64::MAX);
    if age < min {
        add::execute(interp, args)
    } else {
        println!("A younger dragon is already in the collection");
        Ok(Outcome::Continue)
    }
}
