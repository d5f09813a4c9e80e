//! A match between a human and the computer, each with their own board.
//!
//! Players take turns firing at the opponent's board. A shot that finds a vessel earns
//! another shot; a miss hands the turn over. The first player to sink the opponent's
//! whole fleet wins.

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use thiserror::Error;

use crate::board::{random_board, Board, Coordinate, GenerateError, ShotError, ShotOutcome};

/// Player ID. Each player owns one board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl Distribution<Player> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        if rng.gen() {
            Player::Human
        } else {
            Player::Computer
        }
    }
}

/// Reason why a turn could not be played.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TurnError {
    /// The game already has a winner.
    #[error("the game is already over")]
    AlreadyOver,

    /// The target board refused the shot.
    #[error(transparent)]
    Shot(#[from] ShotError),
}

/// Handles gameplay.
#[derive(Debug)]
pub struct Game {
    /// Board owned by the human player.
    human: Board,

    /// Board owned by the computer.
    computer: Board,

    /// Player whose turn it is.
    current: Player,
}

impl Game {
    /// Start a game on the given boards, with `first` to shoot first.
    pub fn new(human: Board, computer: Board, first: Player) -> Self {
        Self {
            human,
            computer,
            current: first,
        }
    }

    /// Start a game on two freshly generated boards of the given size.
    pub fn random<R: Rng>(rng: &mut R, size: usize, first: Player) -> Result<Self, GenerateError> {
        let human = random_board(rng, size)?;
        let computer = random_board(rng, size)?;
        Ok(Self::new(human, computer, first))
    }

    /// Get the player whose turn it currently is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Get the board owned by the given player.
    pub fn board(&self, player: Player) -> &Board {
        match player {
            Player::Human => &self.human,
            Player::Computer => &self.computer,
        }
    }

    fn board_mut(&mut self, player: Player) -> &mut Board {
        match player {
            Player::Human => &mut self.human,
            Player::Computer => &mut self.computer,
        }
    }

    /// Get the status of the game. Returns `None` while the game is in progress,
    /// otherwise the winner.
    pub fn winner(&self) -> Option<Player> {
        [self.current, self.current.opponent()]
            .iter()
            .copied()
            .find(|player| self.board(player.opponent()).defeated())
    }

    /// Fire at the current player's opponent. The turn passes to the opponent on a miss.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, TurnError> {
        if self.winner().is_some() {
            return Err(TurnError::AlreadyOver);
        }
        let target = self.current.opponent();
        let outcome = self.board_mut(target).fire(coord)?;
        if !outcome.is_hit() {
            self.current = target;
        }
        Ok(outcome)
    }
}
