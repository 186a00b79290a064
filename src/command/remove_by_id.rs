//! Removes one record by id.

use crate::command::{self, CommandError, Outcome};
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, args: &[String]) -> Result<Outcome, CommandError> {
    let id = command::parse_id(&args[0])?;
    if !interp.collection_mut().remove_by_id(id) {
        return Err(CommandError::IdNotFound(id));
    }
    println!("Dragon {id} removed from the collection");
    Ok(Outcome::Continue)
}
