//! Derived-attribute rules.
//!
//! A [`Rules`] value carries every constant the engine uses: the health and
//! mana growth curves, the spell-slot divisor, the soul economy, and the
//! ring limit. [`Rules::default`] is the standard Ashen preset.

use ash_core::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::MechResult;

/// The most rings a character can ever wear.
pub const MAX_RINGS: usize = 4;

/// A linear growth law that bends downward past a threshold.
///
/// Up to `threshold` the result is `growth * stat`; above it the penalty
/// `diminishing * (stat - threshold)^2` is subtracted. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Capacity gained per stat point.
    pub growth: f64,
    /// Stat value where diminishing returns begin.
    pub threshold: u32,
    /// Quadratic penalty factor past the threshold.
    pub diminishing: f64,
}

impl Curve {
    /// Build a curve.
    pub fn new(growth: f64, threshold: u32, diminishing: f64) -> Self {
        Self {
            growth,
            threshold,
            diminishing,
        }
    }

    /// Evaluate the curve at `stat`.
    pub fn apply(&self, stat: u32) -> f64 {
        let linear = self.growth * f64::from(stat);
        if stat <= self.threshold {
            return linear;
        }
        let over = f64::from(stat - self.threshold);
        (linear - self.diminishing * over * over).max(0.0)
    }
}

/// The complete set of tunable constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Vigor to maximum HP.
    pub hp: Curve,
    /// Attunement to maximum mana.
    pub mana: Curve,
    /// Attunement points per spell slot.
    pub slot_divisor: u32,
    /// Soul cost of a character's first level-up.
    pub base_soul_cost: u64,
    /// Soul cost growth per level, in thousandths (1100 is x1.1).
    pub soul_growth_permille: u64,
    /// Maximum number of rings worn at once.
    pub ring_limit: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            hp: Curve::new(2.0, 40, 0.2),
            mana: Curve::new(25.0, 40, 0.2),
            slot_divisor: 5,
            base_soul_cost: 500,
            soul_growth_permille: 1100,
            ring_limit: 4,
        }
    }
}

impl Rules {
    /// Maximum HP for a vigor score.
    pub fn max_hp(&self, vigor: u32) -> f64 {
        self.hp.apply(vigor)
    }

    /// Maximum mana for an attunement score.
    pub fn max_mana(&self, attunement: u32) -> f64 {
        self.mana.apply(attunement)
    }

    /// Total spell slots for an attunement score.
    pub fn spell_slots(&self, attunement: u32) -> u32 {
        attunement.checked_div(self.slot_divisor).unwrap_or(0)
    }

    /// The soul cost following `cost`, rounded down.
    pub fn next_soul_cost(&self, cost: u64) -> u64 {
        cost.saturating_mul(self.soul_growth_permille) / 1000
    }

    /// Set the ring limit, which must be between 1 and [`MAX_RINGS`].
    pub fn with_ring_limit(mut self, limit: usize) -> MechResult<Self> {
        self.ring_limit = limit;
        self.validate()?;
        Ok(self)
    }

    /// Set the starting soul cost, which must be positive.
    pub fn with_base_soul_cost(mut self, cost: u64) -> MechResult<Self> {
        self.base_soul_cost = cost;
        self.validate()?;
        Ok(self)
    }

    /// Check the ring limit and soul economy are usable.
    pub fn validate(&self) -> MechResult<()> {
        if !(1..=MAX_RINGS).contains(&self.ring_limit) {
            return Err(CoreError::InvalidAmount(format!(
                "ring limit {} (expected 1-{MAX_RINGS})",
                self.ring_limit
            ))
            .into());
        }
        if self.base_soul_cost == 0 {
            return Err(CoreError::InvalidAmount("base soul cost must be positive".to_string()).into());
        }
        if self.soul_growth_permille < 1000 {
            return Err(CoreError::InvalidAmount(format!(
                "soul growth {} (expected at least 1000)",
                self.soul_growth_permille
            ))
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::error::MechError;

    #[test]
    fn hp_past_threshold() {
        let rules = Rules::default();
        assert!((rules.max_hp(41) - 81.8).abs() < 1e-9);
        assert!((rules.max_hp(50) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn mana_uses_its_own_growth() {
        let rules = Rules::default();
        assert!((rules.max_mana(10) - 250.0).abs() < f64::EPSILON);
        assert!((rules.max_mana(42) - 1049.2).abs() < 1e-9);
    }

    #[test]
    fn curve_never_negative() {
        let rules = Rules::default();
        assert!(rules.max_hp(200) >= 0.0);
    }

    #[test]
    fn spell_slots_floor_divide() {
        let rules = Rules::default();
        assert_eq!(rules.spell_slots(4), 0);
        assert_eq!(rules.spell_slots(5), 1);
        assert_eq!(rules.spell_slots(14), 2);
    }

    #[test]
    fn zero_divisor_yields_no_slots() {
        let rules = Rules {
            slot_divisor: 0,
            ..Rules::default()
        };
        assert_eq!(rules.spell_slots(30), 0);
    }

    #[test]
    fn soul_cost_grows_by_a_tenth() {
        let rules = Rules::default();
        assert_eq!(rules.next_soul_cost(500), 550);
        assert_eq!(rules.next_soul_cost(550), 605);
        assert_eq!(rules.next_soul_cost(605), 665);
    }

    #[test]
    fn builder_methods() {
        let rules = Rules::default()
            .with_ring_limit(2)
            .unwrap()
            .with_base_soul_cost(100)
            .unwrap();
        assert_eq!(rules.ring_limit, 2);
        assert_eq!(rules.base_soul_cost, 100);
    }

    #[test]
    fn ring_limit_stays_within_four() {
        assert!(Rules::default().validate().is_ok());
        assert!(Rules::default().with_ring_limit(MAX_RINGS).is_ok());
        for limit in [0, 5, 10] {
            assert!(matches!(
                Rules::default().with_ring_limit(limit),
                Err(MechError::Core(CoreError::InvalidAmount(_)))
            ));
        }
    }

    #[test]
    fn soul_cost_must_grow_from_a_positive_base() {
        assert!(matches!(
            Rules::default().with_base_soul_cost(0),
            Err(MechError::Core(CoreError::InvalidAmount(_)))
        ));
        let shrinking = Rules {
            soul_growth_permille: 900,
            ..Rules::default()
        };
        assert!(shrinking.validate().is_err());
    }

    proptest! {
        #[test]
        fn hp_is_linear_up_to_threshold(v in 0u32..=40) {
            let rules = Rules::default();
            prop_assert!((rules.max_hp(v) - 2.0 * f64::from(v)).abs() < f64::EPSILON);
        }

        #[test]
        fn soul_cost_never_decreases(cost in 0u64..1_000_000_000) {
            let rules = Rules::default();
            prop_assert!(rules.next_soul_cost(cost) >= cost);
        }
    }
}
