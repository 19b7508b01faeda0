//! Command module
//!
//! Describes possible commands used during gameplay and the line parser
//! that produces them. Each input line is split into a verb and a single
//! remainder argument; the remainder is never tokenized further, so
//! multi-word item names ("small potion") work without quoting.

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Attack(String),
    Drop(String),
    Empty,
    Go(String),
    Help,
    Inventory,
    Load,
    Look,
    Quit,
    Save,
    Take(String),
    Talk(String),
    Unknown,
    Use(String),
}

/// Parses an input line and returns the corresponding `Command`.
///
/// Verbs are matched case-insensitively; unrecognized verbs map to
/// `Unknown` and a blank line maps to `Empty`.
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let (verb, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };
    match verb.to_lowercase().as_str() {
        "help" => Command::Help,
        "look" => Command::Look,
        "go" => Command::Go(arg.to_string()),
        "take" => Command::Take(arg.to_string()),
        "drop" => Command::Drop(arg.to_string()),
        "inventory" => Command::Inventory,
        "use" => Command::Use(arg.to_string()),
        "talk" => Command::Talk(arg.to_string()),
        "attack" => Command::Attack(arg.to_string()),
        "save" => Command::Save,
        "load" => Command::Load,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_match_case_insensitively() {
        assert_eq!(parse_command("LOOK"), Command::Look);
        assert_eq!(parse_command("Go north"), Command::Go("north".into()));
    }

    #[test]
    fn remainder_is_a_single_untokenized_argument() {
        assert_eq!(parse_command("use small potion"), Command::Use("small potion".into()));
        assert_eq!(parse_command("talk Old Butler"), Command::Talk("Old Butler".into()));
    }

    #[test]
    fn missing_argument_yields_empty_string() {
        assert_eq!(parse_command("go"), Command::Go(String::new()));
        assert_eq!(parse_command("take   "), Command::Take(String::new()));
    }

    #[test]
    fn quit_and_exit_are_synonyms() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(parse_command("dance wildly"), Command::Unknown);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_command("  take  coin  "), Command::Take("coin".into()));
    }
}
