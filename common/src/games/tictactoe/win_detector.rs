use super::types::{Player, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

pub fn is_line_win(cells: &[Option<Player>], player: Player) -> bool {
    find_line(cells, player).is_some()
}

/// Human lines are looked up before Computer lines. A board where both players
/// own a line is not reachable in a legal game.
pub fn check_win_with_line(cells: &[Option<Player>]) -> Option<WinningLine> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find_map(|player| find_line(cells, player).map(|line| WinningLine::new(player, line)))
}

fn find_line(cells: &[Option<Player>], player: Player) -> Option<[usize; 3]> {
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&idx| cells[idx] == Some(player)))
        .copied()
}
