use std::fmt;

use crate::core::error::RecipeError;

/// A whole-minute duration, used for prep and cook times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Minutes(u32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    pub fn new(minutes: u32) -> Self {
        Minutes(minutes)
    }

    pub fn total(&self) -> u32 {
        self.0
    }

    pub fn hours(&self) -> u32 {
        self.0 / 60
    }

    /// Minutes past the last full hour.
    pub fn minutes(&self) -> u32 {
        self.0 % 60
    }
}

impl TryFrom<i64> for Minutes {
    type Error = RecipeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Minutes)
            .map_err(|_| RecipeError::validation(format!("{} is not a valid number of minutes", value)))
    }
}

impl From<Minutes> for i64 {
    fn from(minutes: Minutes) -> Self {
        minutes.0 as i64
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours(), self.minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_minutes() {
        assert_eq!(Minutes::default(), Minutes::ZERO);
        assert_eq!(Minutes::ZERO.to_string(), "0h 0m");
    }

    #[test]
    fn ninety_minutes_is_an_hour_and_a_half() {
        let m = Minutes::new(90);
        assert_eq!(m.hours(), 1);
        assert_eq!(m.minutes(), 30);
        assert_eq!(m.to_string(), "1h 30m");
    }

    #[test]
    fn longer_than_a_day_is_kept() {
        let m = Minutes::try_from(1500).unwrap();
        assert_eq!(m.total(), 1500);
        assert_eq!(m.to_string(), "25h 0m");
    }

    #[test]
    fn negative_is_rejected() {
        let err = Minutes::try_from(-5).unwrap_err();
        assert!(matches!(err, RecipeError::Validation(_)));
    }
}
