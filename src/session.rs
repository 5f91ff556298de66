use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::command::Command;
use crate::config::{Config, DisplayFormat};
use crate::list::{ItemList, ListError};

const MENU_HEADER: &str = "================ Main Menu ================";
const MENU_FOOTER: &str = "-------------------------------------------";
const MENU_SECTIONS: [(&str, &[Command]); 3] = [
    (
        "Add new item to inventory:",
        &[Command::AddFront, Command::AddBack],
    ),
    (
        "Remove item from inventory:",
        &[
            Command::RemoveFront,
            Command::RemoveBack,
            Command::RemoveByName,
        ],
    ),
    ("Other:", &[Command::Display, Command::Exit]),
];

/// A single unit of work for the session, carrying the item name for commands which need one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Request {
    AddFront(String),
    AddBack(String),
    RemoveFront,
    RemoveBack,
    RemoveByName(String),
    Display,
    Exit,
}

impl Request {
    /// Builds the request for `command`. Commands which don't operate on an item name ignore
    /// `item`.
    #[must_use]
    pub fn new(command: Command, item: String) -> Self {
        match command {
            Command::AddFront => Self::AddFront(item),
            Command::AddBack => Self::AddBack(item),
            Command::RemoveFront => Self::RemoveFront,
            Command::RemoveBack => Self::RemoveBack,
            Command::RemoveByName => Self::RemoveByName(item),
            Command::Display => Self::Display,
            Command::Exit => Self::Exit,
        }
    }
}

/// Result of handling a single `Request`
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Added,
    Removed(String),
    EmptyList,
    NotFound(String),
    Listing(Vec<String>),
    Exit,
}

impl From<Result<String, ListError>> for Outcome {
    fn from(res: Result<String, ListError>) -> Self {
        match res {
            Ok(name) => Outcome::Removed(name),
            Err(ListError::EmptyList) => Outcome::EmptyList,
            Err(ListError::NotFound(name)) => Outcome::NotFound(name),
        }
    }
}

/// An interactive inventory session. Owns the item list for the session's whole lifetime.
#[derive(Debug, Default)]
pub struct Session {
    config: Config,
    items: ItemList,
}

impl Session {
    /// Creates a session whose inventory holds the config's initial items, in order.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let items: ItemList = config.items.iter().cloned().collect();
        Self { config, items }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    /// Applies `request` to the inventory.
    pub fn handle(&mut self, request: Request) -> Outcome {
        match request {
            Request::AddFront(name) => {
                self.items.insert_front(name);
                Outcome::Added
            }
            Request::AddBack(name) => {
                self.items.insert_back(name);
                Outcome::Added
            }
            Request::RemoveFront => self.items.remove_front().into(),
            Request::RemoveBack => self.items.remove_back().into(),
            Request::RemoveByName(name) => self.items.remove_by_name(&name).into(),
            Request::Display => Outcome::Listing(self.items.to_vec()),
            Request::Exit => Outcome::Exit,
        }
    }

    /// Runs the interactive menu loop until the user picks the exit option or `input` is
    /// exhausted.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
        loop {
            write_menu(&mut output)?;
            let Some(command) = read_command(&mut input, &mut output)? else {
                break;
            };
            let item = if let Some(prompt) = command.item_prompt() {
                write!(output, "\n{prompt}")?;
                output.flush()?;
                let Some(item) = read_line(&mut input)? else {
                    break;
                };
                item
            } else {
                String::new()
            };

            let outcome = self.handle(Request::new(command, item));
            if outcome == Outcome::Exit {
                break;
            }
            self.write_outcome(&outcome, &mut output)?;

            if self.config.pause {
                write!(output, "Press Enter to return to main menu.")?;
                output.flush()?;
                let eof = read_line(&mut input)?.is_none();
                write!(output, "\n\n")?;
                if eof {
                    break;
                }
            }
        }
        output.flush().context("Flushing session output")?;
        Ok(())
    }

    /// Writes the user-facing message for `outcome`.
    pub fn write_outcome(&self, outcome: &Outcome, mut output: impl Write) -> Result<()> {
        match outcome {
            Outcome::Added => write!(output, "\nItem added.\n\n")?,
            Outcome::Removed(_) => write!(output, "\nItem removed.\n\n")?,
            Outcome::EmptyList => {
                write!(output, "\nItem cannot be removed from an empty list.\n\n")?;
            }
            Outcome::NotFound(_) => write!(
                output,
                "\nItem was not found in list and could not be removed.\n\n"
            )?,
            Outcome::Listing(items) => {
                writeln!(output, "\nCurrent inventory:")?;
                match self.config.format {
                    DisplayFormat::Text => {
                        for it in items {
                            writeln!(output, "  {it}")?;
                        }
                    }
                    DisplayFormat::Json => {
                        writeln!(output, "{}", serde_json::to_string_pretty(items)?)?;
                    }
                }
                writeln!(output)?;
            }
            Outcome::Exit => {}
        }
        Ok(())
    }
}

fn write_menu(mut output: impl Write) -> Result<()> {
    writeln!(output, "{MENU_HEADER}\n")?;
    for (title, commands) in MENU_SECTIONS {
        writeln!(output, "{title}")?;
        for c in commands {
            writeln!(output, "  {c}")?;
        }
    }
    writeln!(output, "\n{MENU_FOOTER}")?;
    Ok(())
}

/// Prompts for a menu choice until a valid one is entered.
///
/// Returns `None` if the input ends before a valid choice is read.
fn read_command(mut input: impl BufRead, mut output: impl Write) -> Result<Option<Command>> {
    writeln!(output, "What would you like to do?")?;
    write!(
        output,
        "Please enter an option from {}-{}: ",
        Command::MIN,
        Command::MAX
    )?;
    output.flush()?;
    while let Some(line) = read_line(&mut input)? {
        if let Ok(c) = line.parse::<Command>() {
            return Ok(Some(c));
        }
        write!(output, "    Invalid choice, try again: ")?;
        output.flush()?;
    }
    Ok(None)
}

/// Reads one line from `input` and strips the line terminator.
///
/// Everything else, including surrounding whitespace, is returned verbatim. Returns `None` at
/// end of input.
fn read_line(mut input: impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input
        .read_line(&mut line)
        .context("Reading from session input")?
        == 0
    {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

#[cfg(test)]
mod session_tests;
