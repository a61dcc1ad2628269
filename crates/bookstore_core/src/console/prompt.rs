//! Blocking request/validate/retry loops over line input.
//!
//! # Invariants
//! - Every `ask` either returns a value accepted by its parser or an I/O error.
//! - A rejected line prints guidance and re-prompts; it never escapes as an error.
//! - A line that is not valid UTF-8 is a rejected line like any other.
//! - End of input is reported as `io::ErrorKind::UnexpectedEof`.

use super::fields::{
    parse_author, parse_book_id, parse_quantity, parse_title, parse_updated_author,
    parse_updated_quantity, parse_updated_title, FieldError,
};
use crate::model::book::{BookId, FieldUpdate};
use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented prompt driver over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of user-facing text.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Writes `prompt` and reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` when the line is not valid UTF-8; its bytes are
    /// consumed, so the next read starts on the following line.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a line",
            ));
        }
        while matches!(raw.last(), Some(b'\n' | b'\r')) {
            raw.pop();
        }

        match String::from_utf8(raw) {
            Ok(line) => Ok(Some(line)),
            Err(_) => {
                debug!("event=input_rejected module=console reason=not_utf8");
                Ok(None)
            }
        }
    }

    /// Re-prompts until `parse` accepts a line.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, FieldError>,
    ) -> io::Result<T> {
        loop {
            let parsed = match self.read_line(prompt)? {
                Some(line) => parse(&line),
                None => Err(FieldError::NotText),
            };
            match parsed {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!("event=input_rejected module=console reason={err}");
                    self.say(format_args!("Error: {err}. Please try again."))?;
                }
            }
        }
    }

    pub fn book_id(&mut self, prompt: &str) -> io::Result<BookId> {
        self.ask(prompt, parse_book_id)
    }

    pub fn title(&mut self) -> io::Result<String> {
        self.ask("Enter a book title: ", parse_title)
    }

    pub fn author(&mut self) -> io::Result<String> {
        self.ask("Enter an author name: ", parse_author)
    }

    pub fn quantity(&mut self) -> io::Result<i64> {
        self.ask("Enter book quantity: ", parse_quantity)
    }

    pub fn updated_title(&mut self) -> io::Result<FieldUpdate<String>> {
        let update = self.ask(
            "Type in new title or press 'Enter' to make no changes to book title: ",
            parse_updated_title,
        )?;
        self.note_unchanged(&update, "title")?;
        Ok(update)
    }

    pub fn updated_author(&mut self) -> io::Result<FieldUpdate<String>> {
        let update = self.ask(
            "Type in new author or press 'Enter' to make no changes to author name: ",
            parse_updated_author,
        )?;
        self.note_unchanged(&update, "author")?;
        Ok(update)
    }

    pub fn updated_quantity(&mut self) -> io::Result<FieldUpdate<i64>> {
        let update = self.ask(
            "Type in new quantity or press 'Enter' to make no changes to book quantity: ",
            parse_updated_quantity,
        )?;
        self.note_unchanged(&update, "quantity")?;
        Ok(update)
    }

    fn note_unchanged<T>(&mut self, update: &FieldUpdate<T>, field: &str) -> io::Result<()> {
        if update.is_set() {
            return Ok(());
        }
        self.say(format_args!(
            "You have pressed 'Enter' to make no changes to {field}."
        ))
    }
}
