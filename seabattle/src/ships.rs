// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Straight-line vessels and the edge flags used to draw them.
use enumflags2::BitFlags;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

/// One side of a grid cell. A deck's [`BitFlags<Edge>`] selects which sides of its cell
/// are part of the vessel's outline.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Edge {
    /// Border above the cell.
    Top = 0b0001,
    /// Divider right of the cell.
    Right = 0b0010,
    /// Border below the cell.
    Bottom = 0b0100,
    /// Divider left of the cell.
    Left = 0b1000,
}

/// Direction a vessel extends from its bow.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Decks run left to right, column increasing.
    Horizontal,
    /// Decks run top to bottom, row increasing.
    Vertical,
}

impl Orientation {
    /// Coordinate of the deck `index` cells behind `bow`.
    fn step(self, bow: Coordinate, index: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(bow.row, bow.col + index),
            Orientation::Vertical => Coordinate::new(bow.row + index, bow.col),
        }
    }

    /// Edges drawn along the run of every deck.
    fn sides(self) -> BitFlags<Edge> {
        match self {
            Orientation::Horizontal => Edge::Top | Edge::Bottom,
            Orientation::Vertical => Edge::Left | Edge::Right,
        }
    }

    /// Edge closing off the bow.
    fn bow_cap(self) -> Edge {
        match self {
            Orientation::Horizontal => Edge::Left,
            Orientation::Vertical => Edge::Top,
        }
    }

    /// Edge closing off the stern.
    fn stern_cap(self) -> Edge {
        match self {
            Orientation::Horizontal => Edge::Right,
            Orientation::Vertical => Edge::Bottom,
        }
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A single deck of a vessel: where it sits and which sides of its cell belong to the
/// vessel's outline.
#[derive(Debug, Copy, Clone)]
pub struct Deck {
    coord: Coordinate,
    edges: BitFlags<Edge>,
}

impl Deck {
    /// The grid coordinate of this deck.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Sides of the cell drawn as the vessel's outline.
    pub fn edges(&self) -> BitFlags<Edge> {
        self.edges
    }
}

/// A straight vessel of one or more decks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    bow: Coordinate,
    decks: usize,
    orientation: Orientation,
    resist: usize,
}

impl Vessel {
    /// Construct an undamaged vessel. Panics if `decks` is 0.
    pub fn new(bow: Coordinate, decks: usize, orientation: Orientation) -> Self {
        assert!(decks > 0);
        Self {
            bow,
            decks,
            orientation,
            resist: decks,
        }
    }

    /// Coordinate of the first deck.
    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    /// Length of this vessel.
    pub fn decks(&self) -> usize {
        self.decks
    }

    /// Direction the vessel extends from its bow.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of decks not yet hit.
    pub fn resist(&self) -> usize {
        self.resist
    }

    /// Whether every deck has been hit.
    pub fn sunk(&self) -> bool {
        self.resist == 0
    }

    /// Get an iterator over the decks of this vessel, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Deck> {
        let Self {
            bow,
            decks,
            orientation,
            ..
        } = *self;
        (0..decks).map(move |index| {
            let mut edges = orientation.sides();
            if index == 0 {
                edges.insert(orientation.bow_cap());
            }
            if index == decks - 1 {
                edges.insert(orientation.stern_cap());
            }
            Deck {
                coord: orientation.step(bow, index),
                edges,
            }
        })
    }

    /// Get an iterator over the coordinates this vessel occupies, bow first.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        self.cells().map(|deck| deck.coord())
    }

    /// Returns true if a shot at `coord` lands on this vessel.
    pub fn is_hit(&self, coord: &Coordinate) -> bool {
        self.coords().any(|deck| deck == *coord)
    }

    /// Record a hit on one deck. Returns true if this hit sank the vessel.
    pub(crate) fn take_hit(&mut self) -> bool {
        match self.resist {
            0 => false,
            resist => {
                self.resist = resist - 1;
                self.resist == 0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masks(vessel: &Vessel) -> Vec<u8> {
        vessel.cells().map(|deck| deck.edges().bits()).collect()
    }

    #[test]
    fn horizontal_decks_run_along_columns() {
        let vessel = Vessel::new(Coordinate::new(2, 3), 4, Orientation::Horizontal);
        let coords: Vec<_> = vessel.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(2, 3),
                Coordinate::new(2, 4),
                Coordinate::new(2, 5),
                Coordinate::new(2, 6),
            ]
        );
        assert_eq!(masks(&vessel), vec![13, 5, 5, 7]);
        assert_eq!(vessel.orientation(), Orientation::Horizontal);
    }

    #[test]
    fn vertical_decks_run_along_rows() {
        let vessel = Vessel::new(Coordinate::new(1, 1), 3, Orientation::Vertical);
        let coords: Vec<_> = vessel.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(2, 1),
                Coordinate::new(3, 1),
            ]
        );
        assert_eq!(masks(&vessel), vec![11, 10, 14]);
        assert_eq!(vessel.orientation(), Orientation::Vertical);
    }

    #[test]
    fn single_deck_gets_both_caps() {
        for &orientation in &[Orientation::Horizontal, Orientation::Vertical] {
            let vessel = Vessel::new(Coordinate::new(0, 0), 1, orientation);
            assert_eq!(masks(&vessel), vec![15]);
        }
    }

    #[test]
    fn is_hit_ignores_neighbors() {
        let vessel = Vessel::new(Coordinate::new(5, 5), 2, Orientation::Vertical);
        assert!(vessel.is_hit(&Coordinate::new(5, 5)));
        assert!(vessel.is_hit(&Coordinate::new(6, 5)));
        assert!(!vessel.is_hit(&Coordinate::new(7, 5)));
        assert!(!vessel.is_hit(&Coordinate::new(5, 6)));
    }

    #[test]
    fn take_hit_reports_only_the_sinking_hit() {
        let mut vessel = Vessel::new(Coordinate::new(0, 0), 2, Orientation::Horizontal);
        assert!(!vessel.take_hit());
        assert_eq!(vessel.resist(), 1);
        assert!(vessel.take_hit());
        assert!(vessel.sunk());
        assert!(!vessel.take_hit());
        assert_eq!(vessel.resist(), 0);
    }

    #[test]
    #[should_panic]
    fn zero_decks_rejected() {
        Vessel::new(Coordinate::new(0, 0), 0, Orientation::Horizontal);
    }
}
