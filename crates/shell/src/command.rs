//! Line parsing for shell commands.

use stockroom_catalog::NewItem;

use crate::error::{ShellError, ShellResult};

/// One parsed input line. Each variant maps to a single catalog operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(NewItem),
    /// `id` stays signed: a negative id is a lookup that can never match.
    Update { id: i64, quantity: i64 },
    List { json: bool },
    Total,
    Help,
    Exit,
}

pub const USAGE: &str = "\
commands:
  add <name> <category> <unit_cost> <quantity>   (1)
  update <id> <quantity>                         (2)
  list [--json]                                  (3)
  total                                          (4)
  exit                                           (5)
  help";

impl ShellCommand {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> ShellResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" | "1" => {
                let [name, category, unit_cost, quantity] = expect_args::<4>("add", &args)?;
                ShellCommand::Add(NewItem::new(
                    name,
                    category,
                    number("unit cost", unit_cost)?,
                    number("quantity", quantity)?,
                ))
            }
            "update" | "2" => {
                let [id, quantity] = expect_args::<2>("update", &args)?;
                ShellCommand::Update {
                    id: number("item id", id)?,
                    quantity: number("quantity", quantity)?,
                }
            }
            "list" | "display" | "3" => match args.as_slice() {
                [] => ShellCommand::List { json: false },
                ["--json"] => ShellCommand::List { json: true },
                _ => return Err(ShellError::parse("usage: list [--json]")),
            },
            "total" | "4" => {
                expect_args::<0>("total", &args)?;
                ShellCommand::Total
            }
            "exit" | "quit" | "5" => ShellCommand::Exit,
            "help" | "?" => ShellCommand::Help,
            other => return Err(ShellError::parse(format!("unknown command {other:?}; try help"))),
        };

        Ok(Some(command))
    }
}

fn expect_args<'a, const N: usize>(verb: &str, args: &[&'a str]) -> ShellResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| {
        ShellError::parse(format!(
            "{verb} expects {N} argument(s), got {}; try help",
            args.len()
        ))
    })
}

fn number(field: &str, raw: &str) -> ShellResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ShellError::parse(format!("{field} must be a whole number, got {raw:?}")))
}
