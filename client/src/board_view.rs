use common::games::tictactoe::{BOARD_SIDE, Board, GameStatus, Position, WinningLine};

/// Draws the grid. Empty cells show the 1-9 number the player types to claim
/// them; cells of `highlight` are wrapped in brackets.
pub fn render_board(board: &Board, highlight: Option<&WinningLine>) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIDE);
    for y in 0..BOARD_SIDE {
        let cells: Vec<String> = (0..BOARD_SIDE)
            .map(|x| {
                let index = Position::new(x, y).to_index();
                let symbol = match board.cell(index) {
                    Some(player) => player.symbol(),
                    None => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                };
                if highlight.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

pub fn status_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "Your move.",
        GameStatus::Tie => "It's a tie.",
        GameStatus::ComputerWon => "The computer wins.",
        GameStatus::HumanWon => "You win!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Player;

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let rendered = render_board(&Board::new(), None);
        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_marks_replace_numbers() {
        let mut board = Board::new();
        board.apply_move(Player::Human, 0);
        board.apply_move(Player::Computer, 4);
        let rendered = render_board(&board, None);
        assert!(rendered.starts_with(" X | 2 | 3 "));
        assert!(rendered.contains(" 4 | O | 6 "));
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let mut board = Board::new();
        for index in [2, 4, 6] {
            board.apply_move(Player::Computer, index);
        }
        board.apply_move(Player::Human, 0);
        board.apply_move(Player::Human, 1);
        let line = board.winning_line().unwrap();
        let rendered = render_board(&board, Some(&line));
        assert!(rendered.contains(" X | X |[O]"));
        assert!(rendered.contains(" 4 |[O]| 6 "));
        assert!(rendered.contains("[O]| 8 | 9 "));
    }

    #[test]
    fn test_status_messages_differ() {
        let messages = [
            status_message(GameStatus::InProgress),
            status_message(GameStatus::Tie),
            status_message(GameStatus::ComputerWon),
            status_message(GameStatus::HumanWon),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
