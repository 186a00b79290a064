//! Adds one dragon: positional name/age/wingspan, remaining fields from
//! the interactive prompts.

use crate::command::{self, CommandError, Outcome};
use crate::internal::interpreter::Interpreter;
use crate::internal::model::Dragon;
use crate::internal::prompt;

pub fn execute(interp: &mut Interpreter, args: &[String]) -> Result<Outcome, CommandError> {
    let name = command::parse_name(&args[0])?;
    let age = command::parse_age(&args[1])?;
    let wingspan = command::parse_wingspan(&args[2])?;

    let prompter = interp.prompter();
    let coordinates = prompt::coordinates(prompter)?;
    let color = prompt::color(prompter)?;
    let character = prompt::character(prompter)?;
    let cave = prompt::cave(prompter)?;

    let id = interp.collection_mut().add(Dragon {
        id: 0, // assigned by the collection
        name: name.clone(),
        coordinates,
        age,
        wingspan,
        color,
        character,
        cave,
    });
    println!("Dragon '{name}' added with id {id}");
    Ok(Outcome::Continue)
}
