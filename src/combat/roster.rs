//! The monster roster: one fixed configuration per variant
//!
//! Variants differ only in numbers and in their [`TurnPolicy`] tag; the
//! decision ladder itself lives in [`crate::combat::enemy`]. Numeric values
//! are opaque balance data, not tuned here.

use serde::{Deserialize, Serialize};

use crate::combat::enemy::{Enemy, TurnPolicy};
use crate::core::error::Result;
use crate::core::types::{Size, Vec2};

/// Immutable skill definition as it appears in a variant table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSpec {
    pub name: String,
    pub magnitude: u32,
    pub cooldown: u32,
    pub cost: u32,
}

impl SkillSpec {
    pub fn new(name: impl Into<String>, magnitude: u32, cooldown: u32, cost: u32) -> Self {
        Self {
            name: name.into(),
            magnitude,
            cooldown,
            cost,
        }
    }
}

/// Complete stat/skill configuration for one variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub name: String,
    pub infect_rate: f32,
    pub attack_stat: f32,
    pub sp: u32,
    pub max_hp: u32,
    /// Baseline stored attack damage; `basic_attack` overwrites it
    pub attack_dmg: u32,
    /// Slot 0 is the preferred skill
    pub skills: [SkillSpec; 2],
    pub policy: TurnPolicy,
}

/// The seven monster variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    RevivedSoldier,
    Orc,
    Rat,
    ForgottenFaithful,
    Ghoul,
    Carrion,
    Harbinger,
}

impl EnemyKind {
    /// All variants, weakest to final boss
    pub fn all() -> &'static [EnemyKind] {
        &[
            EnemyKind::Rat,
            EnemyKind::ForgottenFaithful,
            EnemyKind::RevivedSoldier,
            EnemyKind::Ghoul,
            EnemyKind::Orc,
            EnemyKind::Carrion,
            EnemyKind::Harbinger,
        ]
    }

    /// The variant's fixed configuration table
    pub fn config(&self) -> EnemyConfig {
        match self {
            EnemyKind::RevivedSoldier => EnemyConfig {
                name: "Revived Soldier".to_string(),
                infect_rate: 0.5,
                attack_stat: 0.8,
                sp: 100,
                max_hp: 150,
                attack_dmg: 10,
                skills: [
                    SkillSpec::new("Big Slash", 20, 3, 10),
                    SkillSpec::new("Shield Bash", 10, 2, 5),
                ],
                policy: TurnPolicy::Standard,
            },
            EnemyKind::Orc => EnemyConfig {
                name: "Orc".to_string(),
                infect_rate: 0.5,
                attack_stat: 1.0,
                sp: 150,
                max_hp: 200,
                attack_dmg: 10,
                skills: [
                    SkillSpec::new("Bonk", 15, 2, 20),
                    SkillSpec::new("Big Bonk", 40, 5, 40),
                ],
                policy: TurnPolicy::Standard,
            },
            EnemyKind::Rat => EnemyConfig {
                name: "Rat".to_string(),
                infect_rate: 0.8,
                attack_stat: 0.5,
                sp: 90,
                max_hp: 80,
                attack_dmg: 10,
                skills: [
                    SkillSpec::new("Malicious Mandible", 10, 1, 5),
                    SkillSpec::new("Long Live The Rat King", 50, 10, 20),
                ],
                policy: TurnPolicy::DesperationHeal {
                    hp_ratio: 0.4,
                    heal_amount: 50,
                },
            },
            EnemyKind::ForgottenFaithful => EnemyConfig {
                name: "Forgotten Faithful".to_string(),
                infect_rate: 0.3,
                attack_stat: 0.3,
                sp: 50,
                max_hp: 100,
                attack_dmg: 10,
                skills: [
                    SkillSpec::new("Divine Retribution", 50, 8, 0),
                    SkillSpec::new("Smite", 20, 1, 0),
                ],
                policy: TurnPolicy::Standard,
            },
            EnemyKind::Ghoul => EnemyConfig {
                name: "Ghoul".to_string(),
                infect_rate: 0.4,
                attack_stat: 0.9,
                sp: 100,
                max_hp: 150,
                attack_dmg: 10,
                skills: [
                    SkillSpec::new("Claw Strike", 30, 2, 20),
                    SkillSpec::new("Devilish Rage", 50, 4, 40),
                ],
                policy: TurnPolicy::Standard,
            },
            EnemyKind::Carrion => EnemyConfig {
                name: "The Carrion".to_string(),
                infect_rate: -11.0,
                attack_stat: 1.5,
                sp: 1000,
                max_hp: 300,
                attack_dmg: 20,
                skills: [
                    SkillSpec::new("Homicidal Writhe", 100, 10, 100),
                    SkillSpec::new("Chimeric Rage", 50, 4, 60),
                ],
                policy: TurnPolicy::Standard,
            },
            EnemyKind::Harbinger => EnemyConfig {
                name: "The Harbinger Of the Unwanted".to_string(),
                infect_rate: -20.0,
                attack_stat: 2.0,
                sp: 1000,
                max_hp: 350,
                attack_dmg: 20,
                skills: [
                    SkillSpec::new("Vengeance Of Glorious Heroes", 150, 20, 100),
                    SkillSpec::new("Sorrow Of The Survivors", 50, 2, 60),
                ],
                policy: TurnPolicy::RandomWhenBothReady,
            },
        }
    }

    /// Spawn a combat-ready enemy of this kind at the given geometry.
    pub fn spawn(&self, pos: Vec2, size: Size) -> Result<Enemy> {
        Enemy::from_config(self.config(), pos, size)
    }
}
