//! Capped resource tracks (HP, mana).
//!
//! A track holds a current value between zero and a maximum that the rules
//! recompute from primary stats.

use serde::{Deserialize, Serialize};

/// A named resource clamped between zero and `max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Display name of the track.
    pub name: String,
    /// Current value.
    pub current: f64,
    /// Maximum value.
    pub max: f64,
}

impl Track {
    /// Create a new track starting at its maximum value.
    pub fn new(name: impl Into<String>, max: f64) -> Self {
        let max = max.max(0.0);
        Self {
            name: name.into(),
            current: max,
            max,
        }
    }

    /// Add up to `amount`, stopping at the maximum. Returns what was actually added.
    pub fn restore(&mut self, amount: f64) -> f64 {
        let before = self.current;
        self.current = (self.current + amount.max(0.0)).min(self.max).max(before);
        self.current - before
    }

    /// Remove `amount`, flooring at zero. Returns the new value.
    pub fn drain(&mut self, amount: f64) -> f64 {
        self.current = (self.current - amount.max(0.0)).max(0.0);
        self.current
    }

    /// Change the maximum. The current value is clamped down, never raised.
    pub fn set_max(&mut self, max: f64) {
        self.max = max.max(0.0);
        if self.current > self.max {
            self.current = self.max;
        }
    }

    /// Fill the track to its maximum.
    pub fn refill(&mut self) {
        self.current = self.max;
    }

    /// Returns true if the track is at zero.
    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    /// Returns true if the track is at its maximum value.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.1}/{:.1}", self.name, self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_max() {
        let t = Track::new("HP", 20.0);
        assert!((t.current - 20.0).abs() < f64::EPSILON);
        assert!(t.is_full());
        assert!(!t.is_empty());
    }

    #[test]
    fn restore_clamps_to_max() {
        let mut t = Track::new("HP", 20.0);
        t.drain(5.0);
        let added = t.restore(50.0);
        assert!((added - 5.0).abs() < f64::EPSILON);
        assert!(t.is_full());
    }

    #[test]
    fn drain_floors_at_zero() {
        let mut t = Track::new("HP", 10.0);
        assert!((t.drain(25.0)).abs() < f64::EPSILON);
        assert!(t.is_empty());
    }

    #[test]
    fn set_max_clamps_down_only() {
        let mut t = Track::new("Mana", 100.0);
        t.set_max(60.0);
        assert!((t.current - 60.0).abs() < f64::EPSILON);

        t.drain(30.0);
        t.set_max(200.0);
        assert!((t.current - 30.0).abs() < f64::EPSILON);
        assert!((t.max - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn restore_over_max_never_lowers() {
        let mut t = Track {
            name: "HP".to_string(),
            current: 30.0,
            max: 20.0,
        };
        assert!(t.restore(5.0).abs() < f64::EPSILON);
        assert!((t.current - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display() {
        let t = Track::new("HP", 81.8);
        assert_eq!(t.to_string(), "HP: 81.8/81.8");
    }
}
