use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;

/// Identifies a driver in the input files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub i64);

/// Identifies a route in the input files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub i64);

impl Display for DriverId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for RouteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An experience level, always within `1..=4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExperienceLevel(u8);

impl ExperienceLevel {
    pub const MIN: ExperienceLevel = ExperienceLevel(1);
    pub const MAX: ExperienceLevel = ExperienceLevel(4);

    /// Returns `None` if `level` is outside `1..=4`.
    pub fn new(level: i64) -> Option<ExperienceLevel> {
        u8::try_from(level)
            .ok()
            .filter(|level| (Self::MIN.0..=Self::MAX.0).contains(level))
            .map(ExperienceLevel)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All levels, highest first.
    pub fn descending() -> impl Iterator<Item = ExperienceLevel> {
        (Self::MIN.0..=Self::MAX.0).rev().map(ExperienceLevel)
    }

    /// The levels strictly above `self`, lowest first.
    pub fn above(self) -> impl Iterator<Item = ExperienceLevel> {
        (self.0 + 1..=Self::MAX.0).map(ExperienceLevel)
    }
}

impl Display for ExperienceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ExperienceLevel;

    #[test]
    fn only_levels_one_to_four_are_valid() {
        assert!(ExperienceLevel::new(0).is_none());
        assert!(ExperienceLevel::new(5).is_none());
        assert!(ExperienceLevel::new(-1).is_none());
        assert_eq!(ExperienceLevel::new(3).map(ExperienceLevel::get), Some(3));
    }

    #[test]
    fn descending_starts_at_the_highest_level() {
        let levels = ExperienceLevel::descending()
            .map(ExperienceLevel::get)
            .collect::<Vec<_>>();
        assert_eq!(levels, vec![4, 3, 2, 1]);
    }

    #[test]
    fn no_levels_above_the_maximum() {
        assert_eq!(ExperienceLevel::MAX.above().count(), 0);

        let above_two = ExperienceLevel::new(2)
            .unwrap()
            .above()
            .map(ExperienceLevel::get)
            .collect::<Vec<_>>();
        assert_eq!(above_two, vec![3, 4]);
    }
}
