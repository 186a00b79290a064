//! Persists the collection to its backing file.

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;
use crate::internal::storage;

pub fn execute(interp: &mut Interpreter, _args: &[String]) -> Result<Outcome, CommandError> {
    let collection = interp.collection();
    storage::save(collection.output_file(), collection)?;
    println!(
        "Collection saved to '{}'",
        collection.output_file().display()
    );
    Ok(Outcome::Continue)
}
