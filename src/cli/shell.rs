//! Interactive shell over the catalog services.
//!
//! Each input line is split with shell quoting rules and parsed as a
//! [`ShellCommand`]. Catalog errors are printed and the shell keeps going;
//! only I/O failures on the output end it.

use std::io::{self, BufRead, Write};

use clap::Parser;
use serde::Serialize;

use crate::{
    error::AppResult,
    models::{
        enums::Category,
        item::{Catalogued, Item},
        item_form::ItemFields,
        rental::Rental,
        stats::CatalogStats,
    },
    services::Services,
};

use super::render::{self, OutputFormat};
use super::{ShellCommand, ShellLine};

/// Whether the shell should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The command failed and its error was printed; the shell keeps reading
    Failed,
    Quit,
}

pub struct Shell<W: Write> {
    services: Services,
    out: W,
    format: OutputFormat,
    prompt: Option<String>,
}

impl<W: Write> Shell<W> {
    pub fn new(services: Services, out: W, format: OutputFormat) -> Self {
        Self {
            services,
            out,
            format,
            prompt: None,
        }
    }

    /// Print `prompt` before reading each line
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Read and execute lines until end of input or `quit`
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
            }
            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            if self.execute_line(&line)? == Flow::Quit {
                break;
            }
        }
        self.out.flush()
    }

    /// Parse and execute one input line
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(self.out, "Помилка: {}", e)?;
                return Ok(Flow::Failed);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        match ShellLine::try_parse_from(words) {
            Ok(parsed) => self.execute(parsed.command),
            Err(e) => {
                // clap renders help and usage errors itself
                write!(self.out, "{}", e)?;
                if e.use_stderr() {
                    Ok(Flow::Failed)
                } else {
                    Ok(Flow::Continue)
                }
            }
        }
    }

    /// Execute a parsed command, reporting catalog errors to the output.
    /// A failed command yields [`Flow::Failed`].
    pub fn execute(&mut self, command: ShellCommand) -> io::Result<Flow> {
        if command == ShellCommand::Quit {
            return Ok(Flow::Quit);
        }
        tracing::debug!("Shell command: {:?}", command);

        match self.perform(command) {
            Ok(outcome) => {
                self.show(outcome)?;
                Ok(Flow::Continue)
            }
            Err(err) => {
                tracing::debug!("Command failed: {}", err);
                render::write_error(&mut self.out, &err, self.format)?;
                Ok(Flow::Failed)
            }
        }
    }

    fn perform(&self, command: ShellCommand) -> AppResult<Outcome> {
        let services = &self.services;
        let outcome = match command {
            ShellCommand::List { category } => {
                Outcome::Items(services.catalog.filter(category.unwrap_or(Category::All))?)
            }
            ShellCommand::Search { query } => Outcome::Items(services.catalog.search(&query.join(" "))?),
            ShellCommand::Show { id } => Outcome::Item(services.catalog.get_item(&id)?),
            ShellCommand::Add { kind, id, title, year, field1, field2 } => {
                let fields = ItemFields::new(title, year, field1, field2);
                let item = services.catalog.add_item(kind, &id, &fields)?;
                Outcome::Done {
                    message: format!("Додано: {} \"{}\"", item.id(), item.title()),
                    payload: Payload::Item(item),
                }
            }
            ShellCommand::Edit { id, title, year, field1, field2 } => {
                let fields = ItemFields::new(title, year, field1, field2);
                let item = services.catalog.edit_item(&id, &fields)?;
                Outcome::Done {
                    message: format!("Оновлено: {} \"{}\"", item.id(), item.title()),
                    payload: Payload::Item(item),
                }
            }
            ShellCommand::Remove { id } => {
                services.catalog.remove_item(&id)?;
                let id = id.trim().to_string();
                Outcome::Done {
                    message: format!("Видалено: {}", id),
                    payload: Payload::Removed { removed: id },
                }
            }
            ShellCommand::Rent { id, user } => {
                let item = services.rentals.rent(&id, &user.join(" "))?;
                Outcome::Done {
                    message: format!("Орендовано: {} → {}", item.id(), item.rented_by().unwrap_or_default()),
                    payload: Payload::Item(item),
                }
            }
            ShellCommand::Return { id } => {
                let rental = services.rentals.return_item(&id)?;
                let id = id.trim().to_string();
                Outcome::Done {
                    message: format!("Повернуто: {} (орендував {})", id, rental.rented_by),
                    payload: Payload::Returned { returned: id, rental },
                }
            }
            ShellCommand::Stats => Outcome::Stats(services.stats.statistics()?),
            ShellCommand::Quit => Outcome::Nothing,
        };
        Ok(outcome)
    }

    fn show(&mut self, outcome: Outcome) -> io::Result<()> {
        let out = &mut self.out;
        match outcome {
            Outcome::Items(items) => render::write_items(out, &items, self.format),
            Outcome::Item(item) => render::write_item(out, &item, self.format),
            Outcome::Stats(stats) => render::write_stats(out, &stats, self.format),
            Outcome::Done { message, payload } => render::write_message(out, &message, &payload, self.format),
            Outcome::Nothing => Ok(()),
        }
    }
}

/// Result of a successful command, before rendering
enum Outcome {
    Items(Vec<Item>),
    Item(Item),
    Stats(CatalogStats),
    Done { message: String, payload: Payload },
    Nothing,
}

/// JSON body printed for mutating commands
#[derive(Serialize)]
#[serde(untagged)]
enum Payload {
    Item(Item),
    Removed { removed: String },
    Returned { returned: String, rental: Rental },
}
