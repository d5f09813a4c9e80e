//! The grid of per-cell marks left by shots.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::board::Coordinate;

/// What a cell shows after the shooting so far.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mark {
    /// Nothing has happened here.
    Empty,
    /// A shot hit a deck in this cell.
    Hit,
    /// A shot landed in open water.
    Miss,
    /// Dead water around a sunk vessel.
    Sunk,
}

impl Default for Mark {
    fn default() -> Self {
        Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Mark::Empty => "",
            Mark::Hit => "X",
            Mark::Miss => "•",
            Mark::Sunk => "·",
        })
    }
}

/// Square grid of [`Mark`]s.
#[derive(Debug)]
pub(super) struct Grid {
    /// Side length of the grid.
    size: usize,
    /// Cells in row-major order.
    cells: Box<[Mark]>,
}

impl Grid {
    pub(super) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::default(); size * size].into_boxed_slice(),
        }
    }

    /// Linear index of `coord`, or `None` if it is off the grid.
    fn linearize(&self, coord: &Coordinate) -> Option<usize> {
        if coord.row < self.size && coord.col < self.size {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Get the mark at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<Mark> {
        self.linearize(coord).map(|i| self.cells[i])
    }

    /// Get a mutable reference to the mark at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut Mark> {
        match self.linearize(coord) {
            Some(i) => self.cells.get_mut(i),
            None => None,
        }
    }

    /// Iterate the rows of the grid, top to bottom.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        // `chunks` rejects a zero chunk size.
        self.cells.chunks(self.size.max(1))
    }
}

impl Index<Coordinate> for Grid {
    type Output = Mark;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        let i = self.linearize(&coord).expect("coordinate out of bounds");
        &self.cells[i]
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(&coord).expect("coordinate out of bounds")
    }
}
