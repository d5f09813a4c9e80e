//! Random fleet placement.
//!
//! A board is filled by rejection sampling: each vessel of the fleet is dropped at
//! random until it lands somewhere legal. All vessels of one board share a single budget
//! of attempts. When the budget runs out the half-filled board is thrown away and a
//! fresh one is started; earlier vessels are never moved.

use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Board, BoardError, Coordinate},
    ships::Vessel,
};

/// Random placements tried on one board before it is discarded.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Discarded boards after which generation gives up.
pub const BOARD_RESTARTS: usize = 1000;

/// Error returned when a random board cannot be generated.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The requested board cannot be built at all.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Every board attempted ran out of placement attempts.
    #[error("could not place the fleet after {0} boards")]
    Exhausted(usize),
}

/// Build a board of the given size with its whole fleet placed at random. The returned
/// board has been [`reset`][Board::reset] and is ready for play.
pub fn random_board<R: Rng>(rng: &mut R, size: usize) -> Result<Board, GenerateError> {
    for restart in 0..BOARD_RESTARTS {
        match try_fill(rng, size)? {
            Some(mut board) => {
                debug!(
                    "placed {} vessels on a {}x{} board after {} restarts",
                    board.vessels().len(),
                    size,
                    size,
                    restart
                );
                board.reset();
                return Ok(board);
            }
            None => debug!("discarding board {} after {} attempts", restart, PLACEMENT_ATTEMPTS),
        }
    }
    Err(GenerateError::Exhausted(BOARD_RESTARTS))
}

/// Make one attempt at filling a fresh board. Returns `None` if the placement budget
/// ran out first.
fn try_fill<R: Rng>(rng: &mut R, size: usize) -> Result<Option<Board>, BoardError> {
    let mut board = Board::new(size)?;
    let mut attempts = 0;
    for decks in board.fleet_composition() {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_ATTEMPTS {
                return Ok(None);
            }
            // The bow may land one past the last row or column; such vessels are
            // rejected by the board like any other bad placement.
            let bow = Coordinate::new(rng.gen_range(0, size + 1), rng.gen_range(0, size + 1));
            match board.place(Vessel::new(bow, decks, rng.gen())) {
                Ok(()) => break,
                Err(err) => trace!("{}: {:?}", err, err.vessel()),
            }
        }
    }
    Ok(Some(board))
}
