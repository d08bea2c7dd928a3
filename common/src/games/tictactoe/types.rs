use std::fmt;

pub const BOARD_SIZE: usize = 9;
pub const BOARD_SIDE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
    Tie,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::HumanWon => Some(Player::Human),
            GameStatus::ComputerWon => Some(Player::Computer),
            GameStatus::InProgress | GameStatus::Tie => None,
        }
    }
}

/// Who places the first mark of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstPlayerMode {
    Human,
    Computer,
    Random,
}

/// A completed line of three and the player owning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [usize; 3]) -> Self {
        Self { player, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            x: index % BOARD_SIDE,
            y: index / BOARD_SIDE,
        }
    }

    pub fn to_index(&self) -> usize {
        self.y * BOARD_SIDE + self.x
    }
}
