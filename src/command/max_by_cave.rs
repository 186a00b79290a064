//! Prints the record with the deepest cave.

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, _args: &[String]) -> Result<Outcome, CommandError> {
    match interp.collection().max_by_cave() {
        Some(dragon) => {
            println!("Dragon with the deepest cave:");
            println!("{dragon}");
        }
        None => println!("The collection is empty"),
    }
    Ok(Outcome::Continue)
}
