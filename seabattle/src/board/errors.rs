//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Vessel};

/// Error returned when a board cannot be constructed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BoardError {
    /// There are not enough column labels for a board this wide.
    #[error("a board of size {size} is too wide; {max} columns is the maximum")]
    VeryWide { size: usize, max: usize },
}

/// Reason why a vessel could not be placed where requested.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more decks would fall outside the board.
    #[error("the vessel does not fit on the board")]
    OutOfBounds,
    /// One or more decks would overlap another vessel or its surrounding dead zone.
    #[error("the vessel overlaps or touches another vessel")]
    Blocked,
}

/// Error caused when attempting to place a vessel in an invalid position. Hands the
/// rejected vessel back to the caller.
#[derive(Error)]
#[error("could not place vessel: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    vessel: Vessel,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    pub(super) fn new(reason: CannotPlaceReason, vessel: Vessel) -> Self {
        Self { reason, vessel }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the vessel that was rejected.
    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    /// Extract the rejected vessel from this error.
    pub fn into_vessel(self) -> Vessel {
        self.vessel
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("that cell is off the board")]
    OutOfBounds,

    /// A shot has already been fired at that cell, or it lies in the dead water around a
    /// sunk vessel.
    #[error("that cell has already been fired upon")]
    AlreadyFired,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not fire at {coord:?}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
