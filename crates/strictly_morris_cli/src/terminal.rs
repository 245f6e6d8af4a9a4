//! Line-oriented terminal play.
//!
//! Each line of input is one click: a cell as `row col`, an index `0`-`8`
//! or a label such as `top-left`. `restart` starts over, `quit` or end of
//! input stops.

use std::io::{BufRead, Write};
use strictly_morris::{Difficulty, Game, GameState, Occupant, Player, Position};
use tracing::{debug, instrument};

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Click(Position),
    Restart,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Input::Quit),
        "r" | "restart" | "new" => Some(Input::Restart),
        "h" | "help" | "?" => Some(Input::Help),
        other => Position::from_label_or_number(other).ok().map(Input::Click),
    }
}

const HELP: &str = "Enter a cell as 'row col' (0-2), an index 0-8 or a name like 'top-left'.\n\
                    'restart' starts a new game, 'quit' leaves.";

/// Runs the game until the input ends or the player quits.
#[instrument(skip_all, fields(mode = %game.state().mode(), %difficulty))]
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    difficulty: Difficulty,
    input: R,
    output: &mut W,
) -> std::io::Result<()> {
    writeln!(output, "{HELP}")?;
    render(&game.state(), output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_input(&line) {
            Some(Input::Quit) => break,
            Some(Input::Help) => writeln!(output, "{HELP}")?,
            Some(Input::Restart) => {
                let state = game.restart();
                render(&state, output)?;
            }
            Some(Input::Click(at)) => {
                let before = game.state();
                let after = game.submit(at, difficulty);
                if after == before {
                    debug!(position = %at, "Input had no effect");
                    writeln!(output, "Nothing to do at {at}.")?;
                }
                render(&after, output)?;
            }
            None => writeln!(output, "Unrecognized input '{}'. Type 'help'.", line.trim())?,
        }
    }

    writeln!(output, "Bye.")?;
    Ok(())
}

/// Prints the board with coordinates, the selection in brackets, then the
/// instruction line.
fn render<W: Write>(state: &GameState, output: &mut W) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "    0  1  2")?;
    for row in 0..3 {
        write!(output, "{row} ")?;
        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            let mark = match state.board().get(pos) {
                Occupant::Empty => '.',
                Occupant::Occupied(Player::A) => 'A',
                Occupant::Occupied(Player::B) => 'B',
            };
            if state.selected() == Some(pos) {
                write!(output, "[{mark}]")?;
            } else {
                write!(output, " {mark} ")?;
            }
        }
        writeln!(output)?;
    }
    writeln!(output, "{}", state.instruction())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_morris::GameMode;

    fn play(mode: GameMode, script: &str) -> (Game, String) {
        let mut game = Game::seeded(mode, 3);
        let mut out = Vec::new();
        run(&mut game, Difficulty::Hard, script.as_bytes(), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("quit"), Some(Input::Quit));
        assert_eq!(parse_input(" RESTART "), Some(Input::Restart));
        assert_eq!(parse_input("1 2"), Some(Input::Click(Position::MiddleRight)));
        assert_eq!(parse_input("4"), Some(Input::Click(Position::Center)));
        assert_eq!(parse_input("top-left"), Some(Input::Click(Position::TopLeft)));
        assert_eq!(parse_input("3 3"), None);
        assert_eq!(parse_input("banana"), None);
    }

    #[test]
    fn test_two_player_script_wins() {
        let (game, out) = play(GameMode::TwoPlayer, "0 0\n1 0\n0 1\n1 1\n0 2\n");
        assert_eq!(game.state().winner(), Some(Player::A));
        assert!(out.contains("Player A wins"));
        assert!(out.ends_with("Bye.\n"));
    }

    #[test]
    fn test_rejected_click_is_reported() {
        let (game, out) = play(GameMode::TwoPlayer, "4\n4\n");
        assert_eq!(game.state().board().piece_count(), 1);
        assert!(out.contains("Nothing to do at Center (1, 1)."));
    }

    #[test]
    fn test_selection_is_bracketed() {
        // A B A
        // B A B
        // . . .
        let (game, out) = play(GameMode::TwoPlayer, "0\n1\n2\n3\n4\n5\n4\n");
        assert_eq!(game.state().selected(), Some(Position::Center));
        assert!(out.contains("1  B [A] B "));
        assert!(out.contains("Player A, move the selected piece"));
    }

    #[test]
    fn test_restart_and_quit() {
        let (game, out) = play(GameMode::OnePlayer, "4\nrestart\nquit\n4\n");
        assert_eq!(game.state().board().piece_count(), 0);
        assert!(!out.contains("Unrecognized"));
    }

    #[test]
    fn test_unrecognized_input() {
        let (_, out) = play(GameMode::OnePlayer, "banana\n");
        assert!(out.contains("Unrecognized input 'banana'. Type 'help'."));
    }
}
