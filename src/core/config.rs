//! Shield configuration
//!
//! Which armor types grant a shield and with what AHP parameters. An armor
//! type is eligible exactly when it has an entry in `armor_shields`.
//!
//! Loaded from TOML:
//!
//! ```toml
//! is_enabled = true
//! debug = false
//!
//! [armor_shields.combat]
//! amount = 40.0
//! limit = 40.0
//! decay = -2.0
//! efficacy = 0.7
//! sustain = 15.0
//! persistent = true
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::error::{Result, ShieldError};
use crate::entity::ArmorType;

/// AHP parameters granted by one armor type
///
/// Field defaults match the stat module's own defaults for a new process,
/// so only `amount` has to be written out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredShield {
    /// Starting pool size
    pub amount: f32,

    /// Ceiling the pool can regenerate to
    #[serde(default = "default_limit")]
    pub limit: f32,

    /// Pool lost per second once sustain runs out
    ///
    /// Negative values regenerate the pool up to `limit` instead.
    #[serde(default = "default_decay")]
    pub decay: f32,

    /// Fraction of incoming damage the pool absorbs (0.0 to 1.0)
    #[serde(default = "default_efficacy")]
    pub efficacy: f32,

    /// Seconds the pool holds before decay starts
    ///
    /// Re-applied on every hit the wearer takes.
    #[serde(default)]
    pub sustain: f32,

    /// Keep the process alive when the pool reaches zero
    #[serde(default)]
    pub persistent: bool,
}

fn default_limit() -> f32 {
    75.0
}

fn default_decay() -> f32 {
    1.2
}

fn default_efficacy() -> f32 {
    0.7
}

impl ConfiguredShield {
    /// Shield with stat-module defaults for everything but `amount`
    pub fn with_amount(amount: f32) -> Self {
        Self {
            amount,
            limit: default_limit(),
            decay: default_decay(),
            efficacy: default_efficacy(),
            sustain: 0.0,
            persistent: false,
        }
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        // NaN slips through every comparison below
        let fields = [
            ("amount", self.amount),
            ("limit", self.limit),
            ("decay", self.decay),
            ("efficacy", self.efficacy),
            ("sustain", self.sustain),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} ({}) must be a finite number", name, value));
        }

        if self.amount < 0.0 || self.limit < 0.0 || self.sustain < 0.0 {
            return Err(format!(
                "amount ({}), limit ({}) and sustain ({}) must be non-negative",
                self.amount, self.limit, self.sustain
            ));
        }

        if self.amount > self.limit {
            return Err(format!(
                "amount ({}) should be <= limit ({})",
                self.amount, self.limit
            ));
        }

        if !(0.0..=1.0).contains(&self.efficacy) {
            return Err(format!("efficacy ({}) must be within 0.0..=1.0", self.efficacy));
        }

        Ok(())
    }
}

/// Plugin-level settings handed over by the host
#[derive(Debug, Clone, PartialEq)]
pub struct ShieldSettings {
    /// When false, inventory and damage events are ignored
    pub is_enabled: bool,
    /// Raise default log verbosity
    pub debug: bool,
    pub armor_shields: AHashMap<ArmorType, ConfiguredShield>,
}

impl Default for ShieldSettings {
    fn default() -> Self {
        let mut armor_shields = AHashMap::new();

        // Heavier armor: bigger pool, longer hold before regen
        armor_shields.insert(
            ArmorType::Light,
            ConfiguredShield {
                amount: 20.0,
                limit: 20.0,
                decay: -2.0,
                efficacy: 0.7,
                sustain: 10.0,
                persistent: true,
            },
        );
        armor_shields.insert(
            ArmorType::Combat,
            ConfiguredShield {
                amount: 40.0,
                limit: 40.0,
                decay: -2.0,
                efficacy: 0.7,
                sustain: 15.0,
                persistent: true,
            },
        );
        armor_shields.insert(
            ArmorType::Heavy,
            ConfiguredShield {
                amount: 60.0,
                limit: 60.0,
                decay: -2.0,
                efficacy: 0.7,
                sustain: 20.0,
                persistent: true,
            },
        );

        Self {
            is_enabled: true,
            debug: false,
            armor_shields,
        }
    }
}

impl ShieldSettings {
    /// Settings with no armor configured
    pub fn empty() -> Self {
        Self {
            is_enabled: true,
            debug: false,
            armor_shields: AHashMap::new(),
        }
    }

    pub fn with_shield(mut self, armor: ArmorType, shield: ConfiguredShield) -> Self {
        self.armor_shields.insert(armor, shield);
        self
    }

    pub fn shield_for(&self, armor: ArmorType) -> Option<&ConfiguredShield> {
        self.armor_shields.get(&armor)
    }

    /// Validate every configured shield
    pub fn validate(&self) -> Result<()> {
        for armor in ArmorType::ALL {
            if let Some(shield) = self.armor_shields.get(&armor) {
                shield
                    .validate()
                    .map_err(|e| ShieldError::InvalidConfig(format!("{}: {}", armor, e)))?;
            }
        }
        Ok(())
    }

    /// Load settings from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse settings from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let raw: TomlSettings = toml::from_str(content)?;

        let mut armor_shields = AHashMap::new();
        for (key, shield) in raw.armor_shields {
            let armor: ArmorType = key.parse().map_err(ShieldError::InvalidConfig)?;
            armor_shields.insert(armor, shield);
        }

        let settings = Self {
            is_enabled: raw.is_enabled,
            debug: raw.debug,
            armor_shields,
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// TOML representation of the settings file
#[derive(Debug, Deserialize)]
struct TomlSettings {
    #[serde(default = "default_enabled")]
    is_enabled: bool,
    #[serde(default)]
    debug: bool,
    #[serde(default)]
    armor_shields: BTreeMap<String, ConfiguredShield>,
}

fn default_enabled() -> bool {
    true
}
