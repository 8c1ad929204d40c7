//! Damage resolution shared by characters and mobs.
//!
//! Nothing here rolls dice: the caller supplies the damage amount and the
//! engine reports whether the target went down.

pub mod resource;

pub use resource::FlaskDrink;

use ash_core::Mob;

use crate::sheet::Character;

/// What a hit did to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// The target is still standing.
    Wounded {
        /// HP left.
        remaining: f64,
    },
    /// HP reached zero.
    Died,
}

impl DamageOutcome {
    /// Returns true if the target died.
    pub fn is_death(&self) -> bool {
        matches!(self, Self::Died)
    }
}

/// Anything that can take a hit.
pub trait Combatant {
    /// Display name.
    fn label(&self) -> &str;

    /// Subtract `amount` HP and report the result.
    fn apply_damage(&mut self, amount: u32) -> DamageOutcome;
}

impl Combatant for Character {
    fn label(&self) -> &str {
        &self.name
    }

    fn apply_damage(&mut self, amount: u32) -> DamageOutcome {
        let remaining = self.hp.drain(f64::from(amount));
        let outcome = if self.hp.is_empty() {
            DamageOutcome::Died
        } else {
            DamageOutcome::Wounded { remaining }
        };
        tracing::debug!(character = %self.name, amount, ?outcome, "took damage");
        outcome
    }
}

impl Combatant for Mob {
    fn label(&self) -> &str {
        &self.name
    }

    fn apply_damage(&mut self, amount: u32) -> DamageOutcome {
        let outcome = if self.take_damage(amount) {
            DamageOutcome::Died
        } else {
            DamageOutcome::Wounded {
                remaining: f64::from(self.hp),
            }
        };
        tracing::debug!(mob = %self.name, amount, ?outcome, "took damage");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ash_core::Attributes;

    use crate::rules::Rules;

    #[test]
    fn character_damage_and_death() {
        let mut c = Character::new("Siegmeyer", Attributes::new(15, 8, 16, 10, 8, 8), 1, &Rules::default());
        assert_eq!(
            c.apply_damage(12),
            DamageOutcome::Wounded { remaining: 18.0 }
        );
        assert!(c.apply_damage(18).is_death());
        assert!(c.is_dead());
        assert!(c.hp().current.abs() < f64::EPSILON);
    }

    #[test]
    fn overkill_floors_at_zero() {
        let mut c = Character::new("Lautrec", Attributes::new(5, 8, 10, 10, 8, 8), 1, &Rules::default());
        assert!(c.apply_damage(1000).is_death());
        assert!(c.hp().current.abs() < f64::EPSILON);
    }

    #[test]
    fn mob_damage_through_trait() {
        let mut mob = Mob::new("Capra Demon", 30, 15);
        let target: &mut dyn Combatant = &mut mob;
        assert_eq!(target.label(), "Capra Demon");
        assert_eq!(
            target.apply_damage(10),
            DamageOutcome::Wounded { remaining: 20.0 }
        );
        assert_eq!(target.apply_damage(20), DamageOutcome::Died);
    }
}
