// Placement and targeting helpers shared by the built-in strategies.

use alloc::vec::Vec;
use rand::Rng;

use crate::player::{Placement, PlacementCheck};
use crate::tile::Rotation;

const RANDOM_ATTEMPTS: usize = 100;

/// Pick a random placement that `is_valid` accepts.
///
/// Tries random origins first, then falls back to scanning every origin in
/// row-major order. If nothing fits, the returned placement is invalid and
/// the engine will reject it.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    width: usize,
    height: usize,
    length: usize,
    is_valid: &PlacementCheck<'_>,
) -> Placement {
    for _ in 0..RANDOM_ATTEMPTS {
        let rotation = if rng.random() {
            Rotation::Horizontal
        } else {
            Rotation::Vertical
        };
        let (max_x, max_y) = match rotation {
            Rotation::Horizontal => (width.checked_sub(length), height.checked_sub(1)),
            Rotation::Vertical => (width.checked_sub(1), height.checked_sub(length)),
        };
        let (Some(max_x), Some(max_y)) = (max_x, max_y) else {
            continue;
        };
        let x = rng.random_range(0..=max_x) as i32;
        let y = rng.random_range(0..=max_y) as i32;
        if is_valid(x, y, rotation, length) {
            return Placement::new(x, y, rotation);
        }
    }
    first_valid_placement(width, height, length, is_valid)
        .unwrap_or(Placement::new(0, 0, Rotation::Horizontal))
}

/// First placement accepted by `is_valid`, scanning origins row by row.
pub fn first_valid_placement(
    width: usize,
    height: usize,
    length: usize,
    is_valid: &PlacementCheck<'_>,
) -> Option<Placement> {
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            for rotation in [Rotation::Horizontal, Rotation::Vertical] {
                if is_valid(x, y, rotation, length) {
                    return Some(Placement::new(x, y, rotation));
                }
            }
        }
    }
    None
}

/// Every coordinate of the board in row-major order.
pub fn all_moves(width: usize, height: usize) -> Vec<(i32, i32)> {
    (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| (x, y)))
        .collect()
}

/// Orthogonal neighbours of `(x, y)` that lie on the board.
pub fn neighbours(x: i32, y: i32, width: usize, height: usize) -> impl Iterator<Item = (i32, i32)> {
    [(x, y - 1), (x + 1, y), (x, y + 1), (x - 1, y)]
        .into_iter()
        .filter(move |&(nx, ny)| nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height)
}
