//! Types that make up the game board.

use std::collections::HashSet;

use crate::ships::Vessel;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{BoardError, CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    grid::Mark,
    render::{column_index, column_label, MAX_SIZE},
    setup::{random_board, GenerateError, BOARD_RESTARTS, PLACEMENT_ATTEMPTS},
};

mod coordinate;
mod errors;
pub mod fleet;
mod grid;
mod render;
pub mod setup;

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 10;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a vessel that still has undamaged decks.
    Hit,
    /// The shot hit the last undamaged deck of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shot found a vessel.
    pub fn is_hit(self) -> bool {
        self != ShotOutcome::Miss
    }
}

/// Represents a single player's board: the fleet and their side of the ocean.
#[derive(Debug)]
pub struct Board {
    /// Side length of the board.
    size: usize,

    /// Marks left by shots.
    grid: Grid,

    /// Vessels in the order they were placed.
    vessels: Vec<Vessel>,

    /// Cells closed to placement, or to shots once play has started.
    blocked: HashSet<Coordinate>,

    /// Number of vessels sunk so far.
    sunk: usize,
}

impl Board {
    /// Create an empty board with the given side length. Fails if the board is wider
    /// than there are column labels.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size > MAX_SIZE {
            return Err(BoardError::VeryWide {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(Self {
            size,
            grid: Grid::new(size),
            vessels: Vec::new(),
            blocked: HashSet::new(),
            sunk: 0,
        })
    }

    /// Side length of this board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Vessels on this board, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Get the mark at the given coordinate. Returns `None` if it is out of bounds.
    pub fn mark(&self, coord: Coordinate) -> Option<Mark> {
        self.grid.get(&coord)
    }

    /// Whether the given cell is closed to placement or to further shots.
    pub fn is_blocked(&self, coord: Coordinate) -> bool {
        self.blocked.contains(&coord)
    }

    /// Check if the given [`Coordinate`] lies on this board.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Vessel lengths this board's fleet is made of, longest first.
    pub fn fleet_composition(&self) -> Vec<usize> {
        fleet::composition(self.size)
    }

    /// Returns true once as many vessels are sunk as the fleet for this size holds.
    pub fn defeated(&self) -> bool {
        self.sunk == self.fleet_composition().len()
    }

    /// Attempts to place the vessel. Every deck must be on the board and outside the
    /// cells and dead zones of vessels already placed; otherwise the vessel is handed
    /// back in the error and the board is left untouched.
    pub fn place(&mut self, vessel: Vessel) -> Result<(), PlaceError> {
        for coord in vessel.coords() {
            if !self.in_bounds(coord) {
                return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, vessel));
            }
            if self.blocked.contains(&coord) {
                return Err(PlaceError::new(CannotPlaceReason::Blocked, vessel));
            }
        }
        let hull: Vec<Coordinate> = vessel.coords().collect();
        self.blocked.extend(hull.iter().copied());
        self.vessels.push(vessel);
        self.enclose(&hull, None);
        Ok(())
    }

    /// Block every in-bounds cell around `hull` that is not blocked yet, optionally
    /// leaving `mark` in the newly blocked cells.
    fn enclose(&mut self, hull: &[Coordinate], mark: Option<Mark>) {
        for coord in hull.iter().flat_map(|deck| deck.surroundings()) {
            if self.in_bounds(coord) && self.blocked.insert(coord) {
                if let Some(mark) = mark {
                    self.grid[coord] = mark;
                }
            }
        }
    }

    /// Fire a shot at this board, returning the outcome or the reason the shot was
    /// refused.
    ///
    /// Sinking a vessel also closes the water around it: those cells are marked and
    /// further shots at them are refused.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.in_bounds(coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        if !self.blocked.insert(coord) {
            return Err(ShotError::new(CannotShootReason::AlreadyFired, coord));
        }
        let target = self.vessels.iter().position(|vessel| vessel.is_hit(&coord));
        Ok(match target {
            None => {
                self.grid[coord] = Mark::Miss;
                ShotOutcome::Miss
            }
            Some(idx) => {
                self.grid[coord] = Mark::Hit;
                if self.vessels[idx].take_hit() {
                    self.sunk += 1;
                    let hull: Vec<Coordinate> = self.vessels[idx].coords().collect();
                    self.enclose(&hull, Some(Mark::Sunk));
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
        })
    }

    /// Forget every blocked cell. Called once the fleet is placed, so that the dead zones
    /// that kept vessels apart do not stop shots.
    pub fn reset(&mut self) {
        self.blocked.clear();
    }

    /// Render this board as lines of text. With `visible` unset the outlines of vessels
    /// still afloat are left out, as the opponent sees the board; sunk vessels are always
    /// drawn.
    pub fn render(&self, visible: bool) -> Vec<String> {
        render::render(self, visible)
    }
}
