//! # Prompting
//!
//! Line-oriented input over any `BufRead`/`Write` pair. Parsing is
//! delegated to `warehouse_core::validation`; this module only owns the
//! ask-again loop.
//!
//! ```text
//! integer("Choose menu: ")
//!      │
//!      ▼
//! print prompt, flush, read one line ◄───────────────┐
//!      │                                            │
//!      ├── EOF ─────────► ConsoleError::InputClosed │
//!      │                                            │
//!      ├── parse error ─► print message ────────────┘
//!      │
//!      └── Ok(value)
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::debug;
use warehouse_core::validation::{self, ValidationResult};
use warehouse_core::Money;

use crate::error::{ConsoleError, ConsoleResult};

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Asks for free text. Any line is accepted, including an empty one.
    pub fn text(&mut self, prompt: &str) -> ConsoleResult<String> {
        self.ask(prompt).map(|line| line.trim().to_string())
    }

    /// Asks for a whole number until one is given.
    pub fn integer(&mut self, prompt: &str, field: &str) -> ConsoleResult<i64> {
        self.until_valid(prompt, |line| validation::parse_integer(field, line))
    }

    /// Asks for a non-negative whole number until one is given.
    pub fn quantity(&mut self, prompt: &str, field: &str) -> ConsoleResult<u64> {
        self.until_valid(prompt, |line| validation::parse_quantity(field, line))
    }

    /// Asks for a unit price until a valid one is given.
    pub fn price(&mut self, prompt: &str) -> ConsoleResult<Money> {
        self.until_valid(prompt, validation::parse_price)
    }

    fn until_valid<T, F>(&mut self, prompt: &str, parse: F) -> ConsoleResult<T>
    where
        F: Fn(&str) -> ValidationResult<T>,
    {
        loop {
            let line = self.ask(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%err, "re-prompting");
                    self.say(format_args!("{err}. Try again."))?;
                }
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line)
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
