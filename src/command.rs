use std::str::FromStr;
use thiserror::Error;

/// Menu commands understood by the inventory session, keyed by their menu code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Command {
    AddFront,
    AddBack,
    RemoveFront,
    RemoveBack,
    RemoveByName,
    Display,
    Exit,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseCommandError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("option {0} is out of range, expected {min}-{max}", min = Command::MIN, max = Command::MAX)]
    OutOfRange(i64),
}

impl Command {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// All commands in menu order
    pub const ALL: [Command; 7] = [
        Command::AddFront,
        Command::AddBack,
        Command::RemoveFront,
        Command::RemoveBack,
        Command::RemoveByName,
        Command::Display,
        Command::Exit,
    ];

    /// Returns the menu code of the command
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::AddFront => 1,
            Self::AddBack => 2,
            Self::RemoveFront => 3,
            Self::RemoveBack => 4,
            Self::RemoveByName => 5,
            Self::Display => 6,
            Self::Exit => 7,
        }
    }

    /// Whether the command operates on an item name which must be read from the user
    #[must_use]
    pub fn needs_item_name(self) -> bool {
        matches!(self, Self::AddFront | Self::AddBack | Self::RemoveByName)
    }

    /// Prompt shown before reading the item name, if the command needs one
    #[must_use]
    pub fn item_prompt(self) -> Option<&'static str> {
        match self {
            Self::AddFront | Self::AddBack => Some("Enter the item you'd like to add: "),
            Self::RemoveByName => Some("Enter the item you'd like to remove: "),
            _ => None,
        }
    }

    /// Menu label for the command
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AddFront => "Add item to beginning of list",
            Self::AddBack => "Add item to end of list",
            Self::RemoveFront => "Remove item from beginning of list",
            Self::RemoveBack => "Remove item from end of list",
            Self::RemoveByName => "Remove item by name",
            Self::Display => "See current inventory",
            Self::Exit => "Exit program",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) {}", self.code(), self.label())
    }
}

impl TryFrom<u8> for Command {
    type Error = ParseCommandError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(ParseCommandError::OutOfRange(i64::from(code)))
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parses a menu choice as typed by the user. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let code: i64 = s
            .parse()
            .map_err(|_| ParseCommandError::NotANumber(s.to_string()))?;
        let code = u8::try_from(code).map_err(|_| ParseCommandError::OutOfRange(code))?;
        Self::try_from(code)
    }
}
