//! Lists every registered command with its usage and description.

use colored::Colorize;

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;

pub fn execute(interp: &mut Interpreter, _args: &[String]) -> Result<Outcome, CommandError> {
    println!("Available commands:");
    for spec in interp.registry().iter() {
        let mut left = spec.name.to_string();
        if !spec.usage.is_empty() {
            left.push(' ');
            left.push_str(spec.usage);
        }
        if spec.aliases.is_empty() {
            println!("  {} - {}", left.green(), spec.description);
        } else {
            println!(
                "  {} (alias: {}) - {}",
                left.green(),
                spec.aliases.join(", "),
                spec.description
            );
        }
    }
    Ok(Outcome::Continue)
}
