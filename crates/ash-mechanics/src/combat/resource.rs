//! Resource consumption: flasks, bonfire rest, and mana.

use ash_core::{CoreError, FlaskType, ItemKind};

use crate::error::{MechError, MechResult};
use crate::sheet::Character;

/// The result of drinking from a flask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlaskDrink {
    /// Which track the flask refills.
    pub flask_type: FlaskType,
    /// Amount actually restored after clamping to the cap.
    pub restored: f64,
    /// Charges left in the flask.
    pub charges: u32,
}

fn wrong_kind(name: &str, expected: &'static str) -> MechError {
    MechError::Core(CoreError::WrongKind {
        name: name.to_string(),
        expected,
    })
}

impl Character {
    /// Drink one charge of the named flask.
    ///
    /// An empty flask restores nothing and is not an error.
    pub fn drink_flask(&mut self, name: &str) -> MechResult<FlaskDrink> {
        let item = self.inventory.get_mut(name)?;
        let ItemKind::Flask(flask) = &mut item.kind else {
            return Err(wrong_kind(name, "flask"));
        };
        let amount = flask.drink();
        let (flask_type, charges) = (flask.flask_type, flask.charges);

        let restored = match flask_type {
            FlaskType::Health => self.hp.restore(amount),
            FlaskType::Mana => self.mana.restore(amount),
        };
        tracing::debug!(character = %self.name, flask = name, restored, charges, "drank flask");
        Ok(FlaskDrink {
            flask_type,
            restored,
            charges,
        })
    }

    /// Add one charge to the named flask and refill it. Returns the new maximum.
    pub fn upgrade_flask(&mut self, name: &str) -> MechResult<u32> {
        let item = self.inventory.get_mut(name)?;
        let ItemKind::Flask(flask) = &mut item.kind else {
            return Err(wrong_kind(name, "flask"));
        };
        flask.upgrade();
        Ok(flask.max_charges)
    }

    /// Rest at a bonfire: HP and mana to full, every flask refilled.
    /// Returns the number of flasks refilled.
    pub fn rest_at_bonfire(&mut self) -> usize {
        self.hp.refill();
        self.mana.refill();
        let mut refilled = 0;
        for flask in self.inventory.flasks_mut() {
            flask.refill();
            refilled += 1;
        }
        tracing::debug!(character = %self.name, refilled, "rested at bonfire");
        refilled
    }

    /// Spend mana. Returns false, changing nothing, if there is not enough.
    ///
    /// Negative and non-finite amounts are rejected.
    pub fn spend_mana(&mut self, amount: f64) -> MechResult<bool> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::InvalidAmount(format!("cannot spend {amount} mana")).into());
        }
        if amount > self.mana.current {
            return Ok(false);
        }
        self.mana.drain(amount);
        Ok(true)
    }

    /// Cast an equipped spell, paying its mana cost.
    ///
    /// Returns false when mana is short; the spell must be equipped.
    pub fn cast_spell(&mut self, name: &str) -> MechResult<bool> {
        let item = self.inventory.get(name)?;
        let ItemKind::Spell(spell) = item.kind else {
            return Err(wrong_kind(name, "spell"));
        };
        if !spell.is_equipped() {
            return Err(MechError::NotEquipped(name.to_string()));
        }
        let cast = self.spend_mana(f64::from(spell.mana_cost))?;
        tracing::debug!(character = %self.name, spell = name, cast, "cast spell");
        Ok(cast)
    }
}
