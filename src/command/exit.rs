//! Terminates the loop, offering to save the collection first.

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;
use crate::internal::storage;

pub fn execute(interp: &mut Interpreter, _args: &[String]) -> Result<Outcome, CommandError> {
    // A failed read (for example a closed input stream) counts as "no".
    let answer = interp
        .prompter()
        .ask("Save the collection before exiting? [y/n] ")
        .unwrap_or_default();

    if answer.eq_ignore_ascii_case("y") {
        let collection = interp.collection();
        match storage::save(collection.output_file(), collection) {
            Ok(()) => println!(
                "Collection saved to '{}'",
                collection.output_file().display()
            ),
            // the process still terminates after reporting
            Err(e) => eprintln!("{e}"),
        }
    }
    Ok(Outcome::Exit)
}
