use clap::ValueEnum;
use common::games::tictactoe::FirstPlayerMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayer> for FirstPlayerMode {
    fn from(value: FirstPlayer) -> Self {
        match value {
            FirstPlayer::Human => FirstPlayerMode::Human,
            FirstPlayer::Computer => FirstPlayerMode::Computer,
            FirstPlayer::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    /// Fixed seed for the opening move and random starter; fresh each run when unset.
    pub seed: Option<u64>,
    pub highlight_winner: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Human,
            seed: None,
            highlight_winner: true,
        }
    }
}
