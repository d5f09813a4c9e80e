//! Text rendering of a [`Board`] as a bordered grid.
//!
//! Every row of the board takes two lines: a border line of `+` corners with a three
//! character segment above each cell, and a cell line with a one character divider
//! between cells. Vessel outlines are drawn into those segments and dividers according to
//! each deck's [`Edge`] flags.

use std::borrow::Cow;

use crate::{
    board::{Board, Coordinate},
    ships::{Edge, Vessel},
};

/// Column labels, one per column. The width of a board is limited by this alphabet.
const COLUMN_LABELS: [char; 28] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ж', 'з', 'и', 'к', 'л', 'м', 'н', 'о', 'п', 'р', 'с', 'т',
    'у', 'ф', 'х', 'ц', 'ш', 'щ', 'ы', 'э', 'ю', 'я',
];

/// Widest board that can be labelled.
pub const MAX_SIZE: usize = COLUMN_LABELS.len();

/// Label of the given column, if there is one.
pub fn column_label(col: usize) -> Option<char> {
    COLUMN_LABELS.get(col).copied()
}

/// Column for the given label, if it is one.
pub fn column_index(label: char) -> Option<usize> {
    COLUMN_LABELS.iter().position(|&l| l == label)
}

/// How a vessel's outline is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Pen {
    /// Afloat and hidden from the viewer.
    Hidden,
    /// Afloat and shown to its owner.
    Afloat,
    /// Sunk; shown to everyone.
    Sunk,
}

impl Pen {
    fn for_vessel(vessel: &Vessel, visible: bool) -> Self {
        if vessel.sunk() {
            Pen::Sunk
        } else if visible {
            Pen::Afloat
        } else {
            Pen::Hidden
        }
    }

    /// Segment above or below a cell.
    fn horizontal(self) -> &'static str {
        match self {
            Pen::Hidden => SEGMENT,
            Pen::Afloat => "---",
            Pen::Sunk => " ~ ",
        }
    }

    /// Divider left or right of a cell.
    fn vertical(self) -> &'static str {
        match self {
            Pen::Hidden => DIVIDER,
            Pen::Afloat => "|",
            Pen::Sunk => ":",
        }
    }
}

const SEGMENT: &str = "   ";
const DIVIDER: &str = " ";
const CORNER: &str = "+";

pub(super) fn render(board: &Board, visible: bool) -> Vec<String> {
    let size = board.size();

    let mut frame: Vec<Vec<Cow<'static, str>>> = Vec::with_capacity(2 * size + 1);
    for (i, row) in board.grid.rows().enumerate() {
        frame.push(border_line(size));
        let mut line = Vec::with_capacity(2 * size + 2);
        line.push(Cow::Owned(format!("{:^3}", i + 1)));
        line.push(Cow::Borrowed(DIVIDER));
        for mark in row {
            line.push(Cow::Owned(format!("{:^3}", mark)));
            line.push(Cow::Borrowed(DIVIDER));
        }
        frame.push(line);
    }
    frame.push(border_line(size));

    for vessel in board.vessels() {
        let pen = Pen::for_vessel(vessel, visible);
        for deck in vessel.cells() {
            let Coordinate { row, col } = deck.coord();
            let edges = deck.edges();
            if edges.contains(Edge::Top) {
                frame[row * 2][col * 2 + 2] = Cow::Borrowed(pen.horizontal());
            }
            if edges.contains(Edge::Right) {
                frame[row * 2 + 1][col * 2 + 3] = Cow::Borrowed(pen.vertical());
            }
            if edges.contains(Edge::Bottom) {
                frame[row * 2 + 2][col * 2 + 2] = Cow::Borrowed(pen.horizontal());
            }
            if edges.contains(Edge::Left) {
                frame[row * 2 + 1][col * 2 + 1] = Cow::Borrowed(pen.vertical());
            }
        }
    }

    let mut lines = Vec::with_capacity(frame.len() + 1);
    lines.push(legend(size));
    lines.extend(frame.iter().map(|pieces| pieces.concat()));
    lines
}

/// Line of column labels, aligned over the cells.
fn legend(size: usize) -> String {
    let labels: Vec<String> = COLUMN_LABELS[..size]
        .iter()
        .map(|label| format!("{:^3}", label))
        .collect();
    format!("{:4}{}", "", labels.join(DIVIDER))
}

fn border_line(size: usize) -> Vec<Cow<'static, str>> {
    (0..=size)
        .flat_map(|_| vec![Cow::Borrowed(SEGMENT), Cow::Borrowed(CORNER)])
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        board::{Board, Coordinate, ShotOutcome},
        ships::{Orientation, Vessel},
    };

    fn board_with_cruiser() -> Board {
        let mut board = Board::new(5).unwrap();
        board
            .place(Vessel::new(
                Coordinate::new(1, 1),
                3,
                Orientation::Horizontal,
            ))
            .unwrap();
        board.reset();
        board
    }

    #[test]
    fn empty_board_layout() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            board.render(true),
            vec![
                "     а   б   в ",
                "   +   +   +   +",
                " 1              ",
                "   +   +   +   +",
                " 2              ",
                "   +   +   +   +",
                " 3              ",
                "   +   +   +   +",
            ]
        );
    }

    #[test]
    fn owner_sees_outline() {
        let lines = board_with_cruiser().render(true);
        assert_eq!(lines[3], "   +   +---+---+---+   +");
        assert_eq!(lines[4], " 2     |           |    ");
        assert_eq!(lines[5], "   +   +---+---+---+   +");
        assert!(lines.iter().all(|line| !line.contains('X')));
    }

    #[test]
    fn opponent_sees_nothing_afloat() {
        let empty = Board::new(5).unwrap().render(false);
        assert_eq!(board_with_cruiser().render(false), empty);
    }

    #[test]
    fn hits_shown_but_outline_stays_hidden() {
        let mut board = board_with_cruiser();
        assert_eq!(board.fire(Coordinate::new(1, 2)), Ok(ShotOutcome::Hit));
        let lines = board.render(false);
        assert_eq!(lines[4], " 2           X          ");
        assert!(lines.iter().all(|line| !line.contains('-') && !line.contains('|')));
    }

    #[test]
    fn sunk_vessel_shown_to_everyone() {
        let mut board = board_with_cruiser();
        for col in 1..=3 {
            board.fire(Coordinate::new(1, col)).unwrap();
        }
        let hidden = board.render(false);
        assert_eq!(hidden, board.render(true));
        assert_eq!(hidden[2], " 1   ·   ·   ·   ·   ·  ");
        assert_eq!(hidden[3], "   +   + ~ + ~ + ~ +   +");
        assert_eq!(hidden[4], " 2   · : X   X   X : ·  ");
        assert_eq!(hidden[5], "   +   + ~ + ~ + ~ +   +");
        assert_eq!(hidden[6], " 3   ·   ·   ·   ·   ·  ");
    }

    #[test]
    fn column_labels_round_trip() {
        assert_eq!(super::column_label(0), Some('а'));
        assert_eq!(super::column_label(27), Some('я'));
        assert_eq!(super::column_label(28), None);
        assert_eq!(super::column_index('в'), Some(2));
        assert_eq!(super::column_index('z'), None);
    }
}
