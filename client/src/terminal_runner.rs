use std::io::{self, BufRead, Write};
use common::games::tictactoe::{BOARD_SIZE, FirstPlayerMode, GameError, TicTacToeGameState};
use common::log;

use crate::board_view::{render_board, status_message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Place(usize),
    Restart(FirstPlayerMode),
    Quit,
}

/// Cells are typed as 1-9 and turned into board indices 0-8.
pub fn parse_command(line: &str) -> Result<PlayerCommand, String> {
    let input = line.trim().to_ascii_lowercase();
    match input.as_str() {
        "q" | "quit" => Ok(PlayerCommand::Quit),
        "h" => Ok(PlayerCommand::Restart(FirstPlayerMode::Human)),
        "c" => Ok(PlayerCommand::Restart(FirstPlayerMode::Computer)),
        "" => Err("Enter a cell number (1-9), h, c or q".to_string()),
        _ => match input.parse::<usize>() {
            Ok(cell) if (1..=BOARD_SIZE).contains(&cell) => Ok(PlayerCommand::Place(cell - 1)),
            _ => Err(format!("'{}' is not a cell number between 1 and 9", line.trim())),
        },
    }
}

/// Drives one session from line-based input: human mark, computer reply,
/// outcome, repeat. Ends on `q` or end of input.
pub struct TerminalRunner<R: BufRead, W: Write> {
    input: R,
    output: W,
    highlight_winner: bool,
}

impl<R: BufRead, W: Write> TerminalRunner<R, W> {
    pub fn new(input: R, output: W, highlight_winner: bool) -> Self {
        Self {
            input,
            output,
            highlight_winner,
        }
    }

    pub fn run(&mut self, state: &mut TicTacToeGameState) -> io::Result<()> {
        self.draw(state)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(());
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };

            match command {
                PlayerCommand::Quit => {
                    log!("Player quit");
                    return Ok(());
                }
                PlayerCommand::Restart(mode) => {
                    state.restart(mode);
                    self.draw(state)?;
                }
                PlayerCommand::Place(index) => match state.place_human_mark(index) {
                    Ok(_) => self.draw(state)?,
                    Err(GameError::CellOccupied { index }) => {
                        writeln!(self.output, "Cell {} is already taken", index + 1)?
                    }
                    Err(e) => writeln!(self.output, "{}", e)?,
                },
            }
        }
    }

    fn draw(&mut self, state: &TicTacToeGameState) -> io::Result<()> {
        let status = state.status();
        let highlight = if self.highlight_winner {
            state.winning_line()
        } else {
            None
        };

        writeln!(self.output)?;
        writeln!(self.output, "{}", render_board(state.board(), highlight.as_ref()))?;
        writeln!(self.output, "{}", status_message(status))?;
        if status.is_over() {
            writeln!(
                self.output,
                "Press h to start a new game yourself, c to let the computer start, q to quit."
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::{GameStatus, Player};

    fn run_script(script: &str, mode: FirstPlayerMode, seed: u64) -> (TicTacToeGameState, String) {
        let mut state = TicTacToeGameState::new(mode, SessionRng::new(seed));
        let mut output = Vec::new();
        let mut runner = TerminalRunner::new(script.as_bytes(), &mut output, true);
        runner.run(&mut state).unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("5\n"), Ok(PlayerCommand::Place(4)));
        assert_eq!(parse_command(" 1 "), Ok(PlayerCommand::Place(0)));
        assert_eq!(parse_command("9"), Ok(PlayerCommand::Place(8)));
        assert_eq!(parse_command("Q"), Ok(PlayerCommand::Quit));
        assert_eq!(
            parse_command("h"),
            Ok(PlayerCommand::Restart(FirstPlayerMode::Human))
        );
        assert_eq!(
            parse_command("c"),
            Ok(PlayerCommand::Restart(FirstPlayerMode::Computer))
        );
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("x").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn test_move_then_quit() {
        let (state, output) = run_script("5\nq\n", FirstPlayerMode::Human, 1);
        assert_eq!(state.board().cell(4), Some(Player::Human));
        assert_eq!(state.board().mark_count(), 2);
        assert!(output.contains(" 4 | X | 6 "));
        assert!(output.contains("Your move."));
    }

    #[test]
    fn test_invalid_input_does_not_touch_board() {
        let (state, output) = run_script("abc\n0\n\nq\n", FirstPlayerMode::Human, 1);
        assert!(state.board().is_blank());
        assert!(output.contains("'abc' is not a cell number"));
        assert!(output.contains("'0' is not a cell number"));
    }

    #[test]
    fn test_occupied_cell_is_reported() {
        let (state, output) = run_script("5\n5\nq\n", FirstPlayerMode::Human, 1);
        assert_eq!(state.board().mark_count(), 2);
        assert!(output.contains("Cell 5 is already taken"));
    }

    #[test]
    fn test_end_of_input_stops_runner() {
        let (state, _) = run_script("1\n", FirstPlayerMode::Human, 1);
        assert_eq!(state.board().mark_count(), 2);
    }

    #[test]
    fn test_game_plays_to_the_end() {
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";
        let (state, output) = run_script(script, FirstPlayerMode::Human, 1);
        assert!(state.status().is_over());
        assert_ne!(state.status(), GameStatus::HumanWon);
        assert!(output.contains("Press h to start a new game"));
        assert!(!output.contains("You win!"));
    }

    #[test]
    fn test_restart_with_computer_first() {
        let (state, output) = run_script("5\nc\nq\n", FirstPlayerMode::Human, 1);
        assert_eq!(state.first_player(), Player::Computer);
        assert_eq!(state.board().mark_count(), 1);
        assert_eq!(state.current_player(), Player::Human);
        assert!(output.matches("Your move.").count() >= 3);
    }
}
