//! Fleet sizing for a board.

/// Total number of decks a fleet on a board of the given size carries: one deck for every
/// five cells, rounded down. This is the density of the classic 10x10 game, where 20
/// decks share 100 cells.
pub fn deck_budget(size: usize) -> usize {
    size * size / 5
}

/// Vessel lengths for a board of the given size, longest first.
///
/// The deck budget is handed out in rounds: round `n` adds one vessel of each length
/// `1..=n`, the last vessel trimmed to whatever budget is left. On a 10x10 board this
/// yields the classic fleet of one 4-decker, two 3-deckers, three 2-deckers and four
/// single-deckers.
pub fn composition(size: usize) -> Vec<usize> {
    let mut remaining = deck_budget(size);
    let mut sizes = Vec::new();
    let mut round = 1;
    while remaining > 0 {
        for decks in 1..=round {
            let decks = decks.min(remaining);
            sizes.push(decks);
            remaining -= decks;
            if remaining == 0 {
                break;
            }
        }
        round += 1;
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_fleet() {
        assert_eq!(composition(10), vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1]);
    }

    #[test]
    fn tiny_boards_have_no_fleet() {
        assert!(composition(0).is_empty());
        assert!(composition(1).is_empty());
        assert!(composition(2).is_empty());
        assert_eq!(composition(3), vec![1]);
    }

    #[test]
    fn last_vessel_trimmed_to_budget() {
        // 5 decks: round 1 gives 1, round 2 gives 1 and 2, round 3 only has 1 left.
        assert_eq!(composition(5), vec![2, 1, 1, 1]);
        // 3 decks: the round-2 two-decker is cut down to a single deck.
        assert_eq!(composition(4), vec![1, 1, 1]);
    }

    #[test]
    fn widest_board() {
        let fleet = composition(28);
        assert_eq!(fleet.iter().sum::<usize>(), 156);
        assert_eq!(fleet[0], 8);
    }
}
