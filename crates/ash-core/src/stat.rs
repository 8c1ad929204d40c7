use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the six primary stats of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Drives maximum HP.
    Vigor,
    /// Drives maximum mana and spell slots.
    Attunement,
    /// Physical might.
    Strength,
    /// Agility and finesse.
    Dexterity,
    /// Sorcery aptitude.
    Intelligence,
    /// Miracle aptitude.
    Faith,
}

impl Stat {
    /// All stats in sheet order.
    pub const ALL: [Stat; 6] = [
        Stat::Vigor,
        Stat::Attunement,
        Stat::Strength,
        Stat::Dexterity,
        Stat::Intelligence,
        Stat::Faith,
    ];

    /// Short uppercase label used in requirement summaries.
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Vigor => "VIG",
            Self::Attunement => "ATT",
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Intelligence => "INT",
            Self::Faith => "FTH",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vigor => write!(f, "vigor"),
            Self::Attunement => write!(f, "attunement"),
            Self::Strength => write!(f, "strength"),
            Self::Dexterity => write!(f, "dexterity"),
            Self::Intelligence => write!(f, "intelligence"),
            Self::Faith => write!(f, "faith"),
        }
    }
}

impl FromStr for Stat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vigor" | "vig" => Ok(Self::Vigor),
            "attunement" | "att" => Ok(Self::Attunement),
            "strength" | "str" => Ok(Self::Strength),
            "dexterity" | "dex" => Ok(Self::Dexterity),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "faith" | "fth" => Ok(Self::Faith),
            other => Err(CoreError::UnknownStat(other.to_string())),
        }
    }
}

/// A value for each primary stat.
///
/// Used both for a character's current stats and for the bonus block a ring
/// grants while worn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Vigor score.
    pub vigor: u32,
    /// Attunement score.
    pub attunement: u32,
    /// Strength score.
    pub strength: u32,
    /// Dexterity score.
    pub dexterity: u32,
    /// Intelligence score.
    pub intelligence: u32,
    /// Faith score.
    pub faith: u32,
}

impl Attributes {
    /// Build a stat block in sheet order.
    pub fn new(
        vigor: u32,
        attunement: u32,
        strength: u32,
        dexterity: u32,
        intelligence: u32,
        faith: u32,
    ) -> Self {
        Self {
            vigor,
            attunement,
            strength,
            dexterity,
            intelligence,
            faith,
        }
    }

    /// Read one stat.
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Vigor => self.vigor,
            Stat::Attunement => self.attunement,
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Faith => self.faith,
        }
    }

    /// Borrow one stat mutably.
    pub fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Vigor => &mut self.vigor,
            Stat::Attunement => &mut self.attunement,
            Stat::Strength => &mut self.strength,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Faith => &mut self.faith,
        }
    }

    /// Add every stat of `bonus` to this block.
    pub fn add(&mut self, bonus: &Attributes) {
        for stat in Stat::ALL {
            let value = self.get_mut(stat);
            *value = value.saturating_add(bonus.get(stat));
        }
    }

    /// Subtract every stat of `bonus`, flooring each at zero.
    pub fn subtract_floored(&mut self, bonus: &Attributes) {
        for stat in Stat::ALL {
            let value = self.get_mut(stat);
            *value = value.saturating_sub(bonus.get(stat));
        }
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Stat::ALL
            .iter()
            .filter(|&&s| self.get(s) > 0)
            .map(|&s| format!("+{} {}", self.get(s), s.abbrev()))
            .collect();
        if parts.is_empty() {
            write!(f, "no bonuses")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

/// Minimum stats needed to wield a weapon or wear armor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    /// Required strength.
    pub strength: u32,
    /// Required dexterity.
    pub dexterity: u32,
    /// Required intelligence.
    pub intelligence: u32,
    /// Required faith.
    pub faith: u32,
}

impl Requirements {
    /// Stats checked by a requirement block, in check order.
    pub const CHECKED: [Stat; 4] = [
        Stat::Strength,
        Stat::Dexterity,
        Stat::Intelligence,
        Stat::Faith,
    ];

    /// Build a requirement block.
    pub fn new(strength: u32, dexterity: u32, intelligence: u32, faith: u32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            faith,
        }
    }

    /// The requirement for one stat (zero for vigor and attunement).
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Faith => self.faith,
            Stat::Vigor | Stat::Attunement => 0,
        }
    }

    /// The first stat `attributes` falls short on, with the required value.
    pub fn first_unmet(&self, attributes: &Attributes) -> Option<(Stat, u32)> {
        Self::CHECKED
            .iter()
            .find(|&&stat| attributes.get(stat) < self.get(stat))
            .map(|&stat| (stat, self.get(stat)))
    }
}

impl fmt::Display for Requirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Self::CHECKED
            .iter()
            .filter(|&&s| self.get(s) > 0)
            .map(|&s| format!("{} {}", s.abbrev(), self.get(s)))
            .collect();
        if parts.is_empty() {
            write!(f, "no requirements")
        } else {
            write!(f, "requires {}", parts.join(", "))
        }
    }
}
