//! Re-enters every field of the record with the given id.

use crate::command::{self, CommandError, Outcome};
use crate::internal::interpreter::Interpreter;
use crate::internal::prompt;

pub fn execute(interp: &mut Interpreter, args: &[String]) -> Result<Outcome, CommandError> {
    let id = command::parse_id(&args[0])?;
    if !interp.collection().contains(id) {
        // an absent id is a silent no-op: nothing is prompted, nothing changes
        return Ok(Outcome::Continue);
    }

    println!("Enter the new dragon fields:");
    let prompter = interp.prompter();
    let name = command::parse_name(&prompt::line(prompter, "Name: ")?)?;
    let age = prompt::integer(prompter, "Age: ")?;
    if age <= 0 {
        return Err(CommandError::InvalidArgument(
            "the age must be positive".to_string(),
        ));
    }
    let wingspan = prompt::integer(prompter, "Wingspan: ")?;
    if wingspan <= 0 {
        return Err(CommandError::InvalidArgument(
            "the wingspan must be positive".to_string(),
        ));
    }
    let coordinates = prompt::coordinates(prompter)?;
    let color = prompt::color(prompter)?;
    let character = prompt::character(prompter)?;
    let cave = prompt::cave(prompter)?;

    if let Some(dragon) = interp.collection_mut().get_mut(id) {
        dragon.name = name;
        dragon.age = age;
        dragon.wingspan = wingspan;
        dragon.coordinates = coordinates;
        dragon.color = color;
        dragon.character = character;
        dragon.cave = cave;
    }
    println!("Dragon {id} updated");
    Ok(Outcome::Continue)
}
