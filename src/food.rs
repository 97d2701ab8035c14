use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::config::FOOD_PLACEMENT_MAX_ATTEMPTS;
use crate::error::{GameError, Result};
use crate::snake::Position;

/// Source of uniform random indices used for food placement.
///
/// Every [`rand::Rng`] is a source; tests can plug in scripted sequences.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `0..upper`. `upper` is never zero.
    fn next_below(&mut self, upper: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Picks a random free cell for food, never on the outer border ring.
///
/// Samples the interior `[1, size - 2]` on both axes up to
/// [`FOOD_PLACEMENT_MAX_ATTEMPTS`] times. If every sample lands on an
/// occupied cell, picks uniformly among the remaining free interior cells,
/// and fails with [`GameError::BoardFull`] when there are none.
pub fn place<S: RandomSource + ?Sized>(
    rng: &mut S,
    size: u16,
    occupied: &HashSet<Position>,
) -> Result<Position> {
    let interior = usize::from(size.saturating_sub(2));
    if interior == 0 {
        return Err(GameError::BoardFull { size });
    }

    for _ in 0..FOOD_PLACEMENT_MAX_ATTEMPTS {
        let candidate = Position {
            x: interior_coordinate(rng, interior),
            y: interior_coordinate(rng, interior),
        };
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
    }

    debug!("food sampling exhausted after {FOOD_PLACEMENT_MAX_ATTEMPTS} attempts, scanning free cells");

    let free: Vec<Position> = interior_cells(size)
        .filter(|position| !occupied.contains(position))
        .collect();
    if free.is_empty() {
        return Err(GameError::BoardFull { size });
    }

    Ok(free[rng.next_below(free.len())])
}

fn interior_coordinate<S: RandomSource + ?Sized>(rng: &mut S, interior: usize) -> i32 {
    // interior <= u16::MAX, so the cast is lossless.
    rng.next_below(interior) as i32 + 1
}

fn interior_cells(size: u16) -> impl Iterator<Item = Position> {
    let last = i32::from(size) - 2;
    (1..=last).flat_map(move |y| (1..=last).map(move |x| Position { x, y }))
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::error::GameError;
    use crate::snake::Position;

    use super::{RandomSource, place};

    /// Replays a fixed list of values, then keeps returning zero.
    struct Scripted(VecDeque<usize>);

    impl RandomSource for Scripted {
        fn next_below(&mut self, upper: usize) -> usize {
            self.0.pop_front().unwrap_or(0) % upper
        }
    }

    #[test]
    fn food_never_overlaps_snake_or_border() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: HashSet<_> = [
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(3, 1),
        ]
        .into_iter()
        .collect();

        for _ in 0..200 {
            let food = place(&mut rng, 6, &occupied).expect("interior has free cells");
            assert!(!occupied.contains(&food));
            assert!((1..=4).contains(&food.x), "{food:?}");
            assert!((1..=4).contains(&food.y), "{food:?}");
        }
    }

    #[test]
    fn scripted_source_retries_until_free() {
        // First sample (0, 0) -> (1, 1) is taken, second (2, 1) -> (3, 2) is free.
        let mut rng = Scripted(VecDeque::from(vec![0, 0, 2, 1]));
        let occupied: HashSet<_> = [Position::new(1, 1)].into_iter().collect();

        let food = place(&mut rng, 5, &occupied).expect("free cell exists");

        assert_eq!(food, Position::new(3, 2));
    }

    #[test]
    fn exhausted_sampling_falls_back_to_last_free_cell() {
        // An always-zero source keeps hitting (1, 1); only (3, 3) is free.
        let mut rng = Scripted(VecDeque::new());
        let occupied: HashSet<_> = (1..=3)
            .flat_map(|y| (1..=3).map(move |x| Position::new(x, y)))
            .filter(|position| *position != Position::new(3, 3))
            .collect();

        let food = place(&mut rng, 5, &occupied).expect("one free cell remains");

        assert_eq!(food, Position::new(3, 3));
    }

    #[test]
    fn saturated_interior_reports_board_full() {
        let mut rng = StdRng::seed_from_u64(1);
        let occupied: HashSet<_> = (1..=3)
            .flat_map(|y| (1..=3).map(move |x| Position::new(x, y)))
            .collect();

        let result = place(&mut rng, 5, &occupied);

        assert!(matches!(result, Err(GameError::BoardFull { size: 5 })));
    }

    #[test]
    fn board_without_interior_is_full() {
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            place(&mut rng, 2, &HashSet::new()),
            Err(GameError::BoardFull { size: 2 })
        ));
    }
}
