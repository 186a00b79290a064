//! Interactive prompts for the non-positional dragon fields.
//!
//! Prompting goes through the [`Prompter`] trait so tests can script the
//! answers. The stdin implementation is the interactive input source for
//! both the REPL and scripted runs: commands replayed from a file still
//! take their field values from the terminal, exactly like typed ones.

use std::io::{self, Write};

use crate::internal::model::{Color, Coordinates, DragonCave, DragonCharacter};

/// Source of interactive answers.
pub trait Prompter {
    /// Shows `message` and reads one trimmed answer line.
    fn ask(&mut self, message: &str) -> io::Result<String>;
}

/// Prompter over the process's standard input.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        print!("{message}");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Asks for a free-form line.
pub fn line(prompter: &mut dyn Prompter, message: &str) -> io::Result<String> {
    prompter.ask(message)
}

/// Asks until the answer parses as a number.
pub fn number(prompter: &mut dyn Prompter, message: &str) -> io::Result<f64> {
    loop {
        let answer = prompter.ask(message)?;
        match answer.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Expected a number, got '{answer}'. Try again"),
        }
    }
}

/// Asks until the answer parses as an integer.
pub fn integer(prompter: &mut dyn Prompter, message: &str) -> io::Result<i64> {
    loop {
        let answer = prompter.ask(message)?;
        match answer.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Expected an integer, got '{answer}'. Try again"),
        }
    }
}

pub fn coordinates(prompter: &mut dyn Prompter) -> io::Result<Coordinates> {
    let x = number(prompter, "Coordinate x: ")?;
    let y = number(prompter, "Coordinate y: ")?;
    Ok(Coordinates { x, y })
}

pub fn color(prompter: &mut dyn Prompter) -> io::Result<Color> {
    let options = Color::ALL.map(|c| c.to_string()).join(", ");
    loop {
        let answer = prompter.ask(&format!("Color ({options}): "))?;
        match answer.parse::<Color>() {
            Ok(value) => return Ok(value),
            Err(e) => println!("{e}. Try again"),
        }
    }
}

pub fn character(prompter: &mut dyn Prompter) -> io::Result<DragonCharacter> {
    let options = DragonCharacter::ALL.map(|c| c.to_string()).join(", ");
    loop {
        let answer = prompter.ask(&format!("Character ({options}): "))?;
        match answer.parse::<DragonCharacter>() {
            Ok(value) => return Ok(value),
            Err(e) => println!("{e}. Try again"),
        }
    }
}

pub fn cave(prompter: &mut dyn Prompter) -> io::Result<DragonCave> {
    let depth = number(prompter, "Cave depth: ")?;
    Ok(DragonCave { depth })
}
