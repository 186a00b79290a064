//! User commands of the interpreter, one module per command, plus the
//! explicit registry table and shared argument parsing.

pub mod add;
pub mod add_if_max;
pub mod add_if_min;
pub mod clear;
pub mod execute_script;
pub mod exit;
pub mod help;
pub mod history;
pub mod info;
pub mod max_by_cave;
pub mod print_ascending;
pub mod print_descending;
pub mod remove_by_id;
pub mod save;
pub mod show;
pub mod update;

pub use crate::internal::errors::CommandError;

use crate::internal::interpreter::registry::CommandSpec;

/// What the loop driving the interpreter should do after a dispatch.
///
/// Only the exit handler returns [`Outcome::Exit`]; every other command,
/// and every recovered failure, continues the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// The full command table, in the order `help` lists it.
///
/// Each entry is a literal spec: the registry is built from this table
/// once at startup and nothing registers commands at runtime.
pub fn builtin_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "help",
            aliases: &[],
            arg_count: 0,
            usage: "",
            description: "list the available commands",
            handler: help::execute,
        },
        CommandSpec {
            name: "info",
            aliases: &[],
            arg_count: 0,
            usage: "",
            description: "print information about the collection",
            handler: info::execute,
        },
        CommandSpec {
            name: "show",
            aliases: &[],
            arg_count: 0,
            usage: "",
            description: "print every dragon in the collection",
            handler: show::execute,
        },
        CommandSpec {
            name: "add",
            aliases: &[],
            arg_count: 3,
            usage: "{name age wingspan}",
            description: "add a dragon to the collection",
            handler: add::execute,
        },
        CommandSpec {
            name: "update",
            aliases: &[],
            arg_count: 1,
            usage: "{id}",
            description: "re-enter the fields of the dragon with the given id",
            handler: update::execute,
        },
        CommandSpec {
            name: "remove_by_id",
            aliases: &[],
            arg_count: 1,
            usage: "{id}",
            description: "remove the dragon with the given id",
            handler: remove_by_id::execute,
        },
        CommandSpec {
            name: "clear",
            aliases: &[],
            arg_count: 0,
            usage: "",
            description: "remove every dragon from the collection",
            handler: clear::execute,
        },
        CommandSpec {
            name: "save",
            aliases: &[],
            arg_count: 0,
            usage: "",
            description: "save the collection to its file",
            handler: save::execute,
        },
        CommandSpec {
            name: "execute_script",
            aliases: &[],
            arg_count: 1,
            usage: "{filename}",
            description: "read and execute a script from the given file",
            handler: execute_script::execute,
        },
        CommandSpec {
            name: "exit",
            aliases: &["quit"],
            arg_count: 0,
            usage: "",
            description: "exit, optionally saving the collection",
            handler: exit::execute,
        },
        CommandSpec {
            name: "add_if_max",
            aliases: &[],
            arg_count: 3,
            usage: "{name age wingspan}",
            description: "add the dragon only if it is older than every dragon in the collection",
            handler: add_if_max::execute,
        },
        CommandSpec {
            name: "add_if_min",
            aliases: &[],
            arg_count: 3,
            usage: "{name age wingspan}",
            description: "add the dragon only if it is younger than every dragon in the collection",
            handler: add_if_min::execute,
        },
        CommandSpec {
            name: "history",
            aliases: &[],
            arg_count: 0,
            usage: "",
            description: "print the last 11 command names",
            handler: history::execute,
        },
        CommandSpec {
            name: "max_by_cave",
            aliases: &[],
            arg_count: 0,
            usage: "",
            description: "print the dragon with the deepest cave",
            handler: max_by_cave::execute,
        },
        CommandSpec {
            name: "print_ascending",
            aliases: &[],
            arg_count: 0,
            usage: "",
            description: "print the dragons from youngest to oldest",
            handler: print_ascending::execute,
        },
        CommandSpec {
            name: "print_descending",
            aliases: &[],
            arg_count: 0,
            usage: "",
            description: "print the dragons from oldest to youngest",
            handler: print_descending::execute,
        },
    ]
}

/// Parses a record id.
pub fn parse_id(raw: &str) -> Result<u64, CommandError> {
    raw.parse::<u64>()
        .map_err(|_| CommandError::InvalidArgument(format!("'{raw}' is not a valid id")))
}

/// Validates a dragon name and capitalizes its first letter.
pub fn parse_name(raw: &str) -> Result<String, CommandError> {
    let raw = raw.trim();
    let mut chars = raw.chars();
    match chars.next() {
        None => Err(CommandError::InvalidArgument(
            "the name cannot be empty".to_string(),
        )),
        Some(first) => Ok(first.to_uppercase().chain(chars).collect()),
    }
}

/// Parses an age, which must be a positive integer.
pub fn parse_age(raw: &str) -> Result<i64, CommandError> {
    let age = raw
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArgument(format!("'{raw}' is not a valid age")))?;
    if age <= 0 {
        return Err(CommandError::InvalidArgument(
            "the age must be positive".to_string(),
        ));
    }
    Ok(age)
}

/// Parses a wingspan, which must be a positive integer.
pub fn parse_wingspan(raw: &str) -> Result<i64, CommandError> {
    let wingspan = raw
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArgument(format!("'{raw}' is not a valid wingspan")))?;
    if wingspan <= 0 {
        return Err(CommandError::InvalidArgument(
            "the wingspan must be positive".to_string(),
        ));
    }
    Ok(wingspan)
}
