//! The command interpreter: registry, history, collection, and the
//! dispatch path shared by the interactive loop and the script runner.

pub mod registry;
pub mod repl;
pub mod script;
pub mod tokenizer;

use crate::command::{self, CommandError, Outcome};
use crate::internal::collection::DragonCollection;
use crate::internal::history::History;
use crate::internal::prompt::Prompter;
use registry::CommandRegistry;

/// One interpreter instance owns all mutable interpreter state.
///
/// Nothing here is process-global: tests construct as many independent
/// interpreters as they need. The registry is populated in [`Interpreter::new`]
/// and never changes afterwards.
pub struct Interpreter {
    registry: CommandRegistry,
    history: History,
    collection: DragonCollection,
    prompter: Box<dyn Prompter>,
}

impl Interpreter {
    pub fn new(collection: DragonCollection, prompter: Box<dyn Prompter>) -> Self {
        let mut registry = CommandRegistry::new();
        for spec in command::builtin_commands() {
            registry.register(spec);
        }
        Self {
            registry,
            history: History::new(),
            collection,
            prompter,
        }
    }

    /// Runs one raw input line through tokenize → history → lookup → arity
    /// check → handler, reporting every failure as a single line.
    ///
    /// No failure escapes this method: the caller only learns whether to
    /// keep reading input ([`Outcome::Continue`]) or stop ([`Outcome::Exit`]).
    pub fn dispatch(&mut self, raw_line: &str) -> Outcome {
        match self.try_dispatch(raw_line) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("{err}");
                Outcome::Continue
            }
        }
    }

    fn try_dispatch(&mut self, raw_line: &str) -> Result<Outcome, CommandError> {
        let tokens = tokenizer::smart_split(raw_line);
        let Some((name, args)) = tokens.split_first() else {
            return Err(CommandError::EmptyInput);
        };

        // History mirrors what the user attempted, not what succeeded:
        // the name is recorded before lookup and arity validation.
        self.history.record(name);

        let spec = *self
            .registry
            .lookup(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.clone()))?;

        if args.len() != spec.arg_count {
            return Err(CommandError::ArityMismatch {
                name: spec.name,
                required: spec.arg_count,
                got: args.len(),
            });
        }

        tracing::debug!(command = spec.name, args = args.len(), "dispatching");
        (spec.handler)(self, args)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn collection(&self) -> &DragonCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut DragonCollection {
        &mut self.collection
    }

    pub fn prompter(&mut self) -> &mut dyn Prompter {
        self.prompter.as_mut()
    }
}
