use thiserror::Error;

use super::types::Player;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("position {index} is outside the board")]
    OutOfBounds { index: usize },

    #[error("position {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("game is already over")]
    GameOver,

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("no valid moves available")]
    NoMovesAvailable,
}
