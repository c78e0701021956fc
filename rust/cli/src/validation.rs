//! Input parsing for the interactive and stateless commands.

use hexgames_engine::coord::Coord;
use hexgames_engine::engine::Input;

/// Outcome of parsing one line typed during `play`.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Input(Input),
    /// Print the current state as JSON
    State,
    /// Redraw the board
    Board,
    Quit,
    Invalid(String),
}

/// Parses a line typed during `play`.
///
/// Accepts (case-insensitive):
/// - `x,y,z` or `x y z` → click that cell
/// - `pass`, `p` or `skip` → decline the optional follow-up
/// - `state`, `board`
/// - `q` or `quit`
///
/// # Examples
///
/// ```rust
/// use hexgames_cli::validation::{parse_play_input, ParseResult};
/// use hexgames_engine::coord::Coord;
/// use hexgames_engine::engine::Input;
///
/// assert_eq!(
///     parse_play_input("-4 2 2"),
///     ParseResult::Input(Input::Click(Coord::new(-4, 2, 2)))
/// );
/// assert_eq!(parse_play_input("skip"), ParseResult::Input(Input::Pass));
/// match parse_play_input("1,1,1") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("1,1,1")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match input.as_str() {
        "q" | "quit" => ParseResult::Quit,
        "state" => ParseResult::State,
        "board" => ParseResult::Board,
        _ => match parse_input(&input) {
            Ok(parsed) => ParseResult::Input(parsed),
            Err(msg) => ParseResult::Invalid(msg),
        },
    }
}

/// Parses a single game input: a cell or `pass`.
pub fn parse_input(input: &str) -> Result<Input, String> {
    let input = input.trim();
    if ["pass", "p", "skip"]
        .iter()
        .any(|word| input.eq_ignore_ascii_case(word))
    {
        return Ok(Input::Pass);
    }
    let canonical = if input.contains(',') {
        input.to_string()
    } else {
        input.split_whitespace().collect::<Vec<_>>().join(",")
    };
    canonical.parse::<Coord>().map(Input::Click).map_err(|_| {
        format!(
            "Unrecognized input '{}'. Valid inputs: x,y,z (with x+y+z=0), pass, state, board, q",
            input
        )
    })
}
