use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::select_computer_move;
use super::error::GameError;
use super::types::{BOARD_SIZE, FirstPlayerMode, GameStatus, Player, Position, WinningLine};

/// One human-versus-computer game. Owns the live board; the presentation layer
/// only reads it and submits moves through this type.
pub struct TicTacToeGameState {
    board: Board,
    rng: SessionRng,
    first_player: Player,
    current_player: Player,
    last_move: Option<(Player, usize)>,
}

impl TicTacToeGameState {
    pub fn new(first_player_mode: FirstPlayerMode, rng: SessionRng) -> Self {
        let mut state = Self {
            board: Board::new(),
            rng,
            first_player: Player::Human,
            current_player: Player::Human,
            last_move: None,
        };
        log!("New game, seed {}", state.rng.seed());
        state.start(first_player_mode);
        state
    }

    pub fn restart(&mut self, first_player_mode: FirstPlayerMode) {
        self.board.reset();
        self.last_move = None;
        log!("Game restarted");
        self.start(first_player_mode);
    }

    fn start(&mut self, first_player_mode: FirstPlayerMode) {
        self.first_player = match first_player_mode {
            FirstPlayerMode::Human => Player::Human,
            FirstPlayerMode::Computer => Player::Computer,
            FirstPlayerMode::Random => {
                if self.rng.random_bool() {
                    Player::Human
                } else {
                    Player::Computer
                }
            }
        };
        self.current_player = self.first_player;
        log!("{} moves first", self.first_player);

        if self.first_player == Player::Computer
            && let Err(e) = self.play_computer_move()
        {
            log!("Computer could not open: {}", e);
        }
    }

    /// Applies the human's mark and, if the game goes on, the computer's reply.
    pub fn place_human_mark(&mut self, index: usize) -> Result<GameStatus, GameError> {
        self.check_move_allowed(Player::Human)?;

        if index >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { index });
        }
        if !self.board.is_empty_at(index) {
            return Err(GameError::CellOccupied { index });
        }

        self.apply(Player::Human, index);

        if !self.status().is_over() {
            self.play_computer_move()?;
        }

        Ok(self.status())
    }

    pub fn play_computer_move(&mut self) -> Result<usize, GameError> {
        self.check_move_allowed(Player::Computer)?;

        let index =
            select_computer_move(&self.board, &mut self.rng).ok_or(GameError::NoMovesAvailable)?;
        let position = Position::from_index(index);
        log!("Computer plays cell {} ({}, {})", index, position.x, position.y);
        self.apply(Player::Computer, index);
        Ok(index)
    }

    fn check_move_allowed(&self, player: Player) -> Result<(), GameError> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player != player {
            return Err(GameError::NotYourTurn { player });
        }
        Ok(())
    }

    fn apply(&mut self, player: Player, index: usize) {
        self.board.apply_move(player, index);
        self.last_move = Some((player, index));

        let status = self.status();
        if !status.is_over() {
            self.current_player = player.opponent();
            return;
        }
        match status.winner() {
            Some(winner) => log!("Game over: {} wins", winner),
            None => log!("Game over: tie"),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.board.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn last_move(&self) -> Option<(Player, usize)> {
        self.last_move
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
