//! The command registry: name → command metadata and handler.

use crate::command::{CommandError, Outcome};
use crate::internal::interpreter::Interpreter;

/// Handler invoked with the interpreter and the positional arguments.
pub type Handler = fn(&mut Interpreter, &[String]) -> Result<Outcome, CommandError>;

/// Metadata and handler for one command.
///
/// `arg_count` is exact: the handler receives precisely that many
/// positional arguments, validated before invocation. There are no
/// variadic commands.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arg_count: usize,
    pub usage: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

/// Registration-ordered command table.
///
/// Populated once at startup from an explicit table of literal specs and
/// read-only afterwards; there is no runtime registration. Duplicate names
/// or aliases are a programming error in that table, so `register` panics
/// on them rather than returning a runtime error.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: CommandSpec) {
        for known in &self.commands {
            assert!(
                !known.matches(spec.name),
                "duplicate command name '{}' in the registry",
                spec.name
            );
            for alias in spec.aliases {
                assert!(
                    !known.matches(alias),
                    "duplicate command alias '{alias}' in the registry"
                );
            }
        }
        self.commands.push(spec);
    }

    /// Finds a command by primary name or alias.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.matches(name))
    }

    /// All commands, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl CommandSpec {
    fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}
