//! Prints collection metadata.

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, _args: &[String]) -> Result<Outcome, CommandError> {
    let collection = interp.collection();
    println!("Collection information:");
    println!("  type: in-memory list of dragons");
    println!(
        "  created: {}",
        collection.created().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  records: {}", collection.len());
    println!("  file: {}", collection.output_file().display());
    Ok(Outcome::Continue)
}
