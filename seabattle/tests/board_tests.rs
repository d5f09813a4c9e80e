use rand::{rngs::StdRng, SeedableRng};
use seabattle::{
    board::{Board, BoardError, Coordinate, Mark, ShotOutcome, MAX_SIZE},
    ships::{Orientation, Vessel},
};

#[test]
fn widest_board_accepted() {
    let board = Board::new(28).unwrap();
    assert_eq!(board.size(), MAX_SIZE);
    assert_eq!(board.render(true)[0].chars().filter(|c| c.is_alphabetic()).count(), 28);
    assert_eq!(
        Board::new(29).unwrap_err(),
        BoardError::VeryWide { size: 29, max: 28 }
    );
}

#[test]
fn legend_and_row_labels() {
    let lines = Board::new(12).unwrap().render(false);
    assert_eq!(lines.len(), 2 * 12 + 2);
    assert!(lines[0].starts_with("     а   б   в"));
    assert!(lines[2].starts_with(" 1  "));
    assert!(lines[20].starts_with("10  "));
    assert!(lines[24].starts_with("12  "));
}

#[test]
fn hidden_board_only_shows_shots() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut board = seabattle::board::random_board(&mut rng, 10).unwrap();
    let blank = Board::new(10).unwrap().render(false);
    assert_eq!(board.render(false), blank);
    assert_ne!(board.render(true), blank);

    let bow = board.vessels()[0].bow();
    assert!(board.fire(bow).unwrap().is_hit());
    assert_eq!(board.mark(bow), Some(Mark::Hit));
    assert_ne!(board.render(false), blank);
}

#[test]
fn sunk_vessel_renders_the_same_for_both_sides() {
    let mut board = Board::new(6).unwrap();
    board
        .place(Vessel::new(Coordinate::new(2, 4), 3, Orientation::Vertical))
        .unwrap();
    board.reset();
    let before_owner = board.render(true);
    let before_opponent = board.render(false);
    assert_ne!(before_owner, before_opponent);
    assert!(before_owner.iter().any(|line| line.contains('|')));
    assert!(before_owner.iter().all(|line| !line.contains('X')));

    assert_eq!(board.fire(Coordinate::new(2, 4)), Ok(ShotOutcome::Hit));
    assert_eq!(board.fire(Coordinate::new(3, 4)), Ok(ShotOutcome::Hit));
    assert_eq!(board.fire(Coordinate::new(4, 4)), Ok(ShotOutcome::Sunk));

    let owner = board.render(true);
    assert_eq!(owner, board.render(false));
    assert!(owner.iter().any(|line| line.contains(" ~ ")));
    assert!(owner.iter().any(|line| line.contains(':')));
    assert!(owner.iter().any(|line| line.contains('·')));
    assert!(owner.iter().all(|line| !line.contains('|') && !line.contains("---")));
}
