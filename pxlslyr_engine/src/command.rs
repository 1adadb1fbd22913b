//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly::Variantly;

use crate::direction::Direction;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Cast,
    Help,
    Look,
    Go(Direction),
    Quest,
    Quit,
    Status,
    Unknown(String),
}

/// Words recognized by [`parse_command`], used for tab completion.
pub const COMMAND_TERMS: &[&str] = &[
    "cast", "down", "east", "exit", "flow", "go", "help", "left", "look", "map", "move", "north", "quest", "quit",
    "right", "south", "status", "up", "west",
];

/// Parses an input string and returns the matching `Command`.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["look" | "map"] => Command::Look,
        ["status" | "stats" | "hp"] => Command::Status,
        ["cast" | "characters" | "who"] => Command::Cast,
        ["quest" | "flow" | "goals"] => Command::Quest,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit" | "q"] => Command::Quit,
        ["go" | "move" | "walk", dir] | [dir] => match dir.parse::<Direction>() {
            Ok(direction) => Command::Go(direction),
            Err(_) => Command::Unknown(input.trim().to_string()),
        },
        _ => Command::Unknown(input.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_and_prefixed_directions() {
        assert_eq!(parse_command("w"), Command::Go(Direction::Up));
        assert_eq!(parse_command("go west\n"), Command::Go(Direction::Left));
        assert_eq!(parse_command("MOVE South"), Command::Go(Direction::Down));
        assert_eq!(parse_command("right"), Command::Go(Direction::Right));
    }

    #[test]
    fn system_commands() {
        assert!(parse_command("look").is_look());
        assert!(parse_command("?").is_help());
        assert!(parse_command("exit").is_quit());
        assert!(parse_command("flow").is_quest());
        assert!(parse_command("who").is_cast());
        assert!(parse_command("hp").is_status());
    }

    #[test]
    fn vi_keys_move() {
        assert_eq!(parse_command("l"), Command::Go(Direction::Right));
        assert_eq!(parse_command("k"), Command::Go(Direction::Up));
    }

    #[test]
    fn unknown_input_is_preserved() {
        assert_eq!(parse_command("  dance wildly "), Command::Unknown("dance wildly".into()));
        assert_eq!(parse_command("go nowhere"), Command::Unknown("go nowhere".into()));
    }
}
