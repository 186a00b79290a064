//! Empties the collection.

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, _args: &[String]) -> Result<Outcome, CommandError> {
    interp.collection_mut().clear();
    if interp.collection().is_empty() {
        println!("Collection cleared");
    } else {
        eprintln!("Something went wrong, try again");
    }
    Ok(Outcome::Continue)
}
