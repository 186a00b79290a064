//! Prints every record, in insertion order.

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, _args: &[String]) -> Result<Outcome, CommandError> {
    let dragons = interp.collection().list();
    if dragons.is_empty() {
        println!("The collection is empty");
    }
    for dragon in dragons {
        println!("{dragon}");
    }
    Ok(Outcome::Continue)
}
