//! Editor command parsing
//!
//! Turns a line typed at the interactive editor prompt into a `Command`.
//! A bare number shows that record; everything else is a menu word or its
//! first letter.

use crate::error::{Result, TextDbError};

/// A parsed editor command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the record at a key
    Show { key: usize },

    /// Append a new record
    New,

    /// Replace the body of a record
    Edit,

    /// Delete a record (after confirmation)
    Delete,

    /// Move a record to another position
    Move,

    /// Save to the backing file
    Save,

    /// Print the menu
    Help,

    /// Leave the editor
    Quit,
}

impl Command {
    /// Parse one line of editor input
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if let Ok(key) = input.parse::<usize>() {
            return Ok(Command::Show { key });
        }

        match input.to_lowercase().as_str() {
            "n" | "new" => Ok(Command::New),
            "e" | "edit" => Ok(Command::Edit),
            "d" | "delete" => Ok(Command::Delete),
            "m" | "move" => Ok(Command::Move),
            "s" | "save" => Ok(Command::Save),
            "h" | "help" | "menu" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(TextDbError::InvalidInput(format!(
                "'{}' is not a valid number or command",
                input
            ))),
        }
    }
}

/// Menu text listing every command
pub const MENU: &str = "\
Enter an item number to show its text, or choose one of:

  [n]ew     add a new item at the end
  [e]dit    change the text of an item
  [d]elete  remove an item
  [m]ove    move an item to a new position
  [s]ave    write all changes to disk
  [h]elp    show this menu
  [q]uit    leave the editor";

/// Parse a 1-based position and check it against `1..=max`
pub fn parse_position(input: &str, max: usize) -> Result<usize> {
    let input = input.trim();
    let key = input
        .parse::<usize>()
        .map_err(|_| TextDbError::InvalidInput(format!("'{}' is not a number", input)))?;

    if !(1..=max).contains(&key) {
        return Err(TextDbError::OutOfRange { key, min: 1, max });
    }
    Ok(key)
}

/// Parse a yes/no answer; None when the answer is neither
pub fn parse_confirmation(input: &str) -> Option<bool> {
    let answer = input.trim().to_lowercase();
    if answer.starts_with('y') {
        Some(true)
    } else if answer.starts_with('n') {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_mentions_every_command() {
        for word in ["new", "edit", "delete", "move", "save", "help", "quit"] {
            assert!(MENU.contains(word), "menu is missing {}", word);
        }
    }
}
