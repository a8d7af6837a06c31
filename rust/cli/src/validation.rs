//! Parsing of interactive `play` input.

/// What a line typed during `play` asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayInput {
    /// Zero-based board position.
    Pick(usize),
    Restart,
    Quit,
    /// Unusable input, with a message for the player.
    Invalid(String),
}

/// Parses a line of player input against a board of `board_len` cards.
///
/// Positions are entered 1-based. `r`/`restart` and `q`/`quit` are accepted
/// in any case.
///
/// ```rust
/// # use maketen_cli::validation::{parse_play_input, PlayInput};
/// assert_eq!(parse_play_input("3", 12), PlayInput::Pick(2));
/// assert_eq!(parse_play_input("Q", 12), PlayInput::Quit);
/// assert!(matches!(parse_play_input("13", 12), PlayInput::Invalid(_)));
/// ```
pub fn parse_play_input(input: &str, board_len: usize) -> PlayInput {
    let s = input.trim().to_ascii_lowercase();
    match s.as_str() {
        "" => return PlayInput::Invalid("Enter a card number".to_string()),
        "q" | "quit" => return PlayInput::Quit,
        "r" | "restart" => return PlayInput::Restart,
        _ => {}
    }
    match s.parse::<usize>() {
        Ok(n) if (1..=board_len).contains(&n) => PlayInput::Pick(n - 1),
        Ok(n) => PlayInput::Invalid(format!(
            "Card {} is off the board; choose 1-{}",
            n, board_len
        )),
        Err(_) => PlayInput::Invalid(format!(
            "Unrecognized input '{}'; enter 1-{}, r to restart or q to quit",
            input.trim(),
            board_len
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse_play_input("1", 12), PlayInput::Pick(0));
        assert_eq!(parse_play_input(" 12 ", 12), PlayInput::Pick(11));
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        for s in ["0", "13", "99"] {
            match parse_play_input(s, 12) {
                PlayInput::Invalid(msg) => assert!(msg.contains("1-12"), "{}", msg),
                other => panic!("expected invalid for {}, got {:?}", s, other),
            }
        }
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse_play_input("R", 12), PlayInput::Restart);
        assert_eq!(parse_play_input("restart", 12), PlayInput::Restart);
        assert_eq!(parse_play_input("QUIT", 12), PlayInput::Quit);
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(matches!(parse_play_input("", 12), PlayInput::Invalid(_)));
        assert!(matches!(parse_play_input("-1", 12), PlayInput::Invalid(_)));
        assert!(matches!(parse_play_input("two", 12), PlayInput::Invalid(_)));
    }
}
