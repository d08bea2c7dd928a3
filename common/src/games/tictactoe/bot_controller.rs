use crate::games::SessionRng;
use super::board::Board;
use super::types::{BOARD_SIZE, Player};

/// Score of a win found at depth zero. Every ply deeper moves the score one
/// step towards zero, so faster wins and slower losses rank higher.
const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<usize>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Picks the computer's next cell.
///
/// An untouched board gets a random opening cell from `rng`; any other board
/// is searched to the end of the game. Returns `None` when no cell is free.
pub fn select_computer_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    if board.is_full() {
        return None;
    }

    if board.is_blank() {
        return Some(rng.pick_index(BOARD_SIZE));
    }

    calculate_minimax_move(board)
}

pub fn calculate_minimax_move(board: &Board) -> Option<usize> {
    search(0, Player::Computer, board).best_move
}

pub fn evaluate(depth: i32, board: &Board) -> i32 {
    if board.is_line_win(Player::Human) {
        depth - WIN_SCORE
    } else if board.is_line_win(Player::Computer) {
        WIN_SCORE - depth
    } else {
        0
    }
}

/// Full-depth minimax. The computer maximises, the human minimises; on equal
/// scores the lowest cell index is kept.
pub fn search(depth: i32, to_move: Player, board: &Board) -> SearchResult {
    let score = evaluate(depth, board);
    if score != 0 {
        return SearchResult::leaf(score);
    }

    let depth = depth + 1;
    let mut best: Option<(usize, i32)> = None;

    for idx in board.empty_cells() {
        let mut next = board.copy();
        next.apply_move(to_move, idx);
        let child_score = search(depth, to_move.opponent(), &next).score;

        let improves = match (best, to_move) {
            (None, _) => true,
            (Some((_, best_score)), Player::Computer) => child_score > best_score,
            (Some((_, best_score)), Player::Human) => child_score < best_score,
        };
        if improves {
            best = Some((idx, child_score));
        }
    }

    match (best, to_move) {
        (None, _) => SearchResult::leaf(0),
        (Some((idx, score)), Player::Computer) => SearchResult {
            score,
            best_move: Some(idx),
        },
        (Some((_, score)), Player::Human) => SearchResult::leaf(score),
    }
}
