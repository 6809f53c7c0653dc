//! Quantity selector value.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The quantity chosen in an add-to-cart control.
///
/// Always within [`Quantity::MIN`]`..=`[`Quantity::MAX`]; every constructor
/// and adjustment clamps rather than failing. This is presentation state
/// only. The cart itself accepts any integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i32")]
pub struct Quantity(i32);

impl Quantity {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    /// Clamp an arbitrary value into range.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // In range after the clamp above.
        Self(i32::try_from(clamped).unwrap_or(Self::MIN))
    }

    /// Shift by `delta`, clamping at both ends.
    #[must_use]
    pub fn adjust(self, delta: i32) -> Self {
        Self::new(i64::from(self.0) + i64::from(delta))
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn can_decrement(self) -> bool {
        self.0 > Self::MIN
    }

    #[must_use]
    pub const fn can_increment(self) -> bool {
        self.0 < Self::MAX
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Quantity> for i32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_eq!(Quantity::new(0).get(), 1);
        assert_eq!(Quantity::new(-50).get(), 1);
        assert_eq!(Quantity::new(7).get(), 7);
        assert_eq!(Quantity::new(11).get(), 10);
        assert_eq!(Quantity::new(i64::MAX).get(), 10);
    }

    #[test]
    fn test_adjust_stops_at_bounds() {
        let q = Quantity::default();
        assert_eq!(q.adjust(-1).get(), 1);
        assert_eq!(q.adjust(1).get(), 2);
        assert_eq!(Quantity::new(10).adjust(1).get(), 10);
        assert_eq!(Quantity::new(10).adjust(-3).get(), 7);
    }

    #[test]
    fn test_selector_bounds() {
        assert!(!Quantity::new(1).can_decrement());
        assert!(Quantity::new(1).can_increment());
        assert!(Quantity::new(10).can_decrement());
        assert!(!Quantity::new(10).can_increment());
    }
}
