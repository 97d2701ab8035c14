use std::time::Duration;

/// Tick interval in milliseconds for each difficulty level, level 1 first.
pub const DIFFICULTY_INTERVALS_MS: [u64; 5] = [1000, 500, 100, 50, 3];

/// Difficulty level used when nothing else is configured.
pub const DEFAULT_DIFFICULTY: u8 = 3;

/// A validated difficulty level (1-based index into the interval table).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Lowest accepted level.
    pub const MIN: u8 = 1;
    /// Highest accepted level.
    pub const MAX: u8 = DIFFICULTY_INTERVALS_MS.len() as u8;

    /// Returns the difficulty for `level`, or `None` when it is out of range.
    #[must_use]
    pub fn from_level(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    #[must_use]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Time between two ticks at this level.
    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_millis(DIFFICULTY_INTERVALS_MS[usize::from(self.0 - 1)])
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(DEFAULT_DIFFICULTY)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{DEFAULT_DIFFICULTY, Difficulty};

    #[test]
    fn levels_outside_the_table_are_rejected() {
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(6), None);
        assert!(Difficulty::from_level(1).is_some());
        assert!(Difficulty::from_level(5).is_some());
    }

    #[test]
    fn intervals_shrink_as_level_rises() {
        let intervals: Vec<_> = (1..=5)
            .filter_map(Difficulty::from_level)
            .map(Difficulty::interval)
            .collect();

        assert_eq!(intervals[0], Duration::from_millis(1000));
        assert_eq!(intervals[4], Duration::from_millis(3));
        assert!(intervals.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn default_level_runs_at_one_hundred_ms() {
        let difficulty = Difficulty::default();

        assert_eq!(difficulty.level(), DEFAULT_DIFFICULTY);
        assert_eq!(difficulty.interval(), Duration::from_millis(100));
    }
}
