/// The coordinates of a cell on the [`Board`][crate::board::Board]. Both axes are
/// zero-based; row 0 is the top of the grid and column 0 its left edge.
///
/// Identity is the position alone. Rendering information about a ship's deck travels
/// next to the coordinate in a [`Deck`][crate::ships::Deck], never inside it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift this coordinate by the given signed offsets. Returns `None` if either axis
    /// would drop below zero.
    pub fn offset(self, rows: isize, cols: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(rows)?,
            col: self.col.checked_add_signed(cols)?,
        })
    }

    /// Iterate the 3x3 block centred on this coordinate, the coordinate itself included.
    /// Positions left of column 0 or above row 0 are skipped; the upper bounds are left to
    /// the caller.
    pub fn surroundings(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1)
            .flat_map(|rows| (-1..=1).map(move |cols| (rows, cols)))
            .filter_map(move |(rows, cols)| self.offset(rows, cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surroundings_of_interior_cell() {
        let around: Vec<_> = Coordinate::new(4, 7).surroundings().collect();
        assert_eq!(around.len(), 9);
        assert!(around.contains(&Coordinate::new(3, 6)));
        assert!(around.contains(&Coordinate::new(4, 7)));
        assert!(around.contains(&Coordinate::new(5, 8)));
    }

    #[test]
    fn surroundings_clip_at_origin() {
        let around: Vec<_> = Coordinate::new(0, 0).surroundings().collect();
        assert_eq!(
            around,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
    }
}
