//! Shared test utilities and module list for the command integration suite.

use std::path::Path;

use draco::internal::collection::DragonCollection;
use draco::internal::interpreter::Interpreter;
use draco::internal::model::{Color, Coordinates, Dragon, DragonCave, DragonCharacter};
use draco::utils::test::ScriptedPrompter;

mod add_test;
mod save_test;
mod update_test;

/// Interpreter over an empty collection bound to `file`, answering prompts
/// from the given script.
fn interpreter_with<I, S>(file: impl AsRef<Path>, answers: I) -> Interpreter
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Interpreter::new(
        DragonCollection::new(file.as_ref()),
        Box::new(ScriptedPrompter::new(answers)),
    )
}

/// Interpreter with no scripted answers: any prompt fails the command.
fn interpreter() -> Interpreter {
    interpreter_with("dragons.json", Vec::<String>::new())
}

/// Prompt answers for one dragon: x, y, color, character, cave depth.
fn field_answers() -> Vec<String> {
    ["1.5", "-2", "red", "wise", "40.5"]
        .map(String::from)
        .to_vec()
}

/// A ready-made record for tests that bypass the add command.
fn sample_dragon(name: &str, age: i64, depth: f64) -> Dragon {
    Dragon {
        id: 0,
        name: name.to_string(),
        coordinates: Coordinates { x: 0.0, y: 0.0 },
        age,
        wingspan: 10,
        color: Color::Green,
        character: DragonCharacter::Cunning,
        cave: DragonCave { depth },
    }
}
