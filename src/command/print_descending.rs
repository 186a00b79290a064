//! Prints the records sorted by natural order, oldest first.

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, _args: &[String]) -> Result<Outcome, CommandError> {
    let dragons = interp.collection().sorted_descending();
    if dragons.is_empty() {
        println!("The collection is empty");
    }
    for dragon in &dragons {
        println!("{dragon}");
    }
    Ok(Outcome::Continue)
}
