use battleship_arena::{Board, Rotation, ShipId};
use proptest::prelude::*;

fn rotation() -> impl Strategy<Value = Rotation> {
    prop_oneof![Just(Rotation::Horizontal), Just(Rotation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_ship_blocks_overlaps(
        x in 0..10i32,
        y in 0..10i32,
        len in 1..=5usize,
        rot in rotation(),
    ) {
        let mut board = Board::new(10, 10);
        let fits = match rot {
            Rotation::Horizontal => x as usize + len <= 10,
            Rotation::Vertical => y as usize + len <= 10,
        };
        prop_assert_eq!(board.is_valid_placement(x, y, rot, len), fits);
        if !fits {
            return Ok(());
        }

        board.place_ship(x as usize, y as usize, len, rot, ShipId::first());
        // the same placement, and any one-tile placement on its cells, now collides
        prop_assert!(!board.is_valid_placement(x, y, rot, len));
        let (dx, dy) = match rot {
            Rotation::Horizontal => (1, 0),
            Rotation::Vertical => (0, 1),
        };
        for i in 0..len as i32 {
            prop_assert!(!board.is_valid_placement(x + dx * i, y + dy * i, Rotation::Horizontal, 1));
        }
        // sliding one tile off the grid is always rejected
        prop_assert!(!board.is_valid_placement(-1, y, Rotation::Horizontal, len));
        prop_assert!(!board.is_valid_placement(x, -1, Rotation::Vertical, len));
    }

    #[test]
    fn hit_and_miss_are_exclusive(
        shots in proptest::collection::vec((0..8usize, 0..8usize), 0..40),
    ) {
        let mut board = Board::new(8, 8);
        board.place_ship(1, 1, 4, Rotation::Horizontal, ShipId::first());
        board.place_ship(6, 2, 3, Rotation::Vertical, ShipId::first().next());
        for (x, y) in shots {
            let _ = board.receive_shot(x, y);
        }
        for row in board.rows() {
            for tile in row {
                prop_assert!(!(tile.is_hit() && tile.is_miss()));
                if !tile.is_ship() {
                    prop_assert!(!tile.is_hit());
                }
            }
        }
    }
}
