use super::types::{BOARD_SIZE, GameStatus, Player, WinningLine};
use super::win_detector::{check_win_with_line, is_line_win};

/// The 3x3 grid, cells indexed 0..9 in row-major order.
///
/// `Board` is a plain value: copying it gives an independent board, which is
/// how the search explores positions without touching the live game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Player>; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn reset(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Panics if `index` is out of range. The caller must only target empty cells.
    pub fn apply_move(&mut self, player: Player, index: usize) {
        debug_assert!(
            self.cells[index].is_none(),
            "cell {} is already marked",
            index
        );
        self.cells[index] = Some(player);
    }

    pub fn copy(&self) -> Board {
        *self
    }

    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Option<Player>; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        index < BOARD_SIZE && self.cells[index].is_none()
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.is_none().then_some(idx))
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.mark_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    pub fn is_line_win(&self, player: Player) -> bool {
        is_line_win(&self.cells, player)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn winner(&self) -> GameStatus {
        if self.is_line_win(Player::Human) {
            GameStatus::HumanWon
        } else if self.is_line_win(Player::Computer) {
            GameStatus::ComputerWon
        } else if self.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::InProgress
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a board from a row-major picture: `X` human, `O` computer, anything else empty.
    pub(crate) fn board_from(picture: &str) -> Board {
        let mut cells = [None; BOARD_SIZE];
        for (idx, ch) in picture.chars().filter(|c| !c.is_whitespace()).enumerate() {
            cells[idx] = match ch {
                'X' => Some(Player::Human),
                'O' => Some(Player::Computer),
                _ => None,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_reset_empties_every_cell() {
        let mut board = board_from("XO. .X. ..O");
        board.reset();
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_ascending_and_restartable() {
        let board = board_from("X.O .X. O..");
        let first: Vec<usize> = board.empty_cells().collect();
        let second: Vec<usize> = board.empty_cells().collect();
        assert_eq!(first, vec![1, 3, 5, 7, 8]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_move_marks_single_cell() {
        let mut board = Board::new();
        board.apply_move(Player::Computer, 4);
        assert_eq!(board.cell(4), Some(Player::Computer));
        assert_eq!(board.mark_count(), 1);
        assert!(!board.is_empty_at(4));
        assert!(board.is_empty_at(0));
    }

    #[test]
    #[should_panic]
    fn test_apply_move_out_of_range_panics() {
        let mut board = Board::new();
        board.apply_move(Player::Human, 9);
    }

    #[test]
    fn test_copy_is_independent() {
        let board = board_from("X.. ... ...");
        let mut copy = board.copy();
        copy.apply_move(Player::Computer, 8);
        assert_eq!(board.cell(8), None);
        assert_eq!(copy.cell(8), Some(Player::Computer));
    }

    #[test]
    fn test_winner_human_diagonal() {
        let board = board_from("XOX OXO X..");
        assert_eq!(board.winner(), GameStatus::HumanWon);
    }

    #[test]
    fn test_winner_computer_column() {
        let board = board_from("XO. XO. .O.");
        assert_eq!(board.winner(), GameStatus::ComputerWon);
    }

    #[test]
    fn test_winner_full_board_tie() {
        let board = board_from("XOX OXO OXO");
        assert_eq!(board.winner(), GameStatus::Tie);
    }

    #[test]
    fn test_winner_in_progress() {
        let board = board_from("XO. ... ...");
        assert_eq!(board.winner(), GameStatus::InProgress);
        assert_eq!(Board::new().winner(), GameStatus::InProgress);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        let board = board_from("XOX OXO OXX");
        assert!(board.is_full());
        assert_eq!(board.winner(), GameStatus::HumanWon);
    }
}
