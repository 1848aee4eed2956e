//! The read-eval-print loop driving a [`Catalog`].

use std::io::{BufRead, Write};

use stockroom_catalog::Catalog;
use stockroom_core::{DomainError, ItemId};

use crate::command::{ShellCommand, USAGE};
use crate::error::{ShellError, ShellResult};
use crate::render;

/// How a session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit` was entered.
    Exit,
    /// Input ran out.
    EndOfInput,
}

/// Console session over a borrowed catalog.
///
/// The catalog is injected so callers (and tests) keep ownership of it.
pub struct Session<'a> {
    catalog: &'a mut Catalog,
    currency: String,
    prompt: bool,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a mut Catalog, currency: impl Into<String>) -> Self {
        Self {
            catalog,
            currency: currency.into(),
            prompt: false,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Process lines until `exit` or end of input.
    ///
    /// Malformed lines (including bytes that are not UTF-8) are reported on
    /// `output` and skipped; only I/O and domain failures end the session early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> ShellResult<SessionEnd> {
        let mut buf = Vec::new();
        loop {
            if self.prompt {
                write!(output, "> ")?;
                output.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("end of input");
                return Ok(SessionEnd::EndOfInput);
            }

            let parsed = match core::str::from_utf8(&buf) {
                Ok(line) => ShellCommand::parse_line(line),
                Err(_) => Err(ShellError::parse("input is not valid UTF-8")),
            };

            let command = match parsed {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) if err.is_recoverable() => {
                    let line = String::from_utf8_lossy(&buf);
                    tracing::debug!(line = %line.trim_end(), "rejected input: {err}");
                    writeln!(output, "error: {err}")?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            if self.dispatch(command, output)? == Some(SessionEnd::Exit) {
                return Ok(SessionEnd::Exit);
            }
        }
    }

    fn dispatch<W: Write>(
        &mut self,
        command: ShellCommand,
        output: &mut W,
    ) -> ShellResult<Option<SessionEnd>> {
        match command {
            ShellCommand::Add(new_item) => {
                let id = self.catalog.insert_item(new_item);
                render::item_added(output, id)?;
            }
            ShellCommand::Update { id, quantity } => {
                // Negative ids were never assigned, so they are simply not found.
                let Ok(raw) = u64::try_from(id) else {
                    render::not_found(output, id)?;
                    return Ok(None);
                };
                match self.catalog.update_quantity(ItemId::new(raw), quantity) {
                    Ok(update) => render::stock_updated(output, &update)?,
                    Err(DomainError::ItemNotFound(id)) => render::not_found(output, id)?,
                    Err(other) => return Err(ShellError::from(other)),
                }
            }
            ShellCommand::List { json: false } => render::catalog_table(output, self.catalog)?,
            ShellCommand::List { json: true } => render::catalog_json(output, self.catalog)?,
            ShellCommand::Total => {
                render::total_value(output, &self.currency, self.catalog.total_value())?
            }
            ShellCommand::Help => writeln!(output, "{USAGE}")?,
            ShellCommand::Exit => {
                writeln!(output, "Exiting.")?;
                return Ok(Some(SessionEnd::Exit));
            }
        }
        Ok(None)
    }
}
