//! Skill definitions and cooldown tracking
//!
//! A skill is immutable configuration plus one mutable counter: the rounds
//! remaining before it can fire again. Invoking a skill does NOT spend
//! resources - the owning enemy deducts skill points and calls
//! [`Skill::trigger`], keeping the economy in one place.

use serde::{Deserialize, Serialize};

use crate::core::error::{HollowError, Result};

/// A named combat action with a cost, cooldown period, and magnitude
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    name: String,
    /// Damage or heal amount; the resolver decides which based on the skill
    magnitude: u32,
    /// Rounds between uses
    cooldown_period: u32,
    /// Skill points consumed per use
    cost: u32,
    /// Rounds until usable again; 0 means ready
    cooldown_remaining: u32,
}

/// Descriptor handed to the combat resolver when a skill fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillUse {
    pub name: String,
    pub magnitude: u32,
}

impl Skill {
    /// Build a skill, ready to fire (no initial cooldown).
    ///
    /// Numeric fields are unsigned so negative configuration is
    /// unrepresentable; the constructor stays as the seam where any further
    /// configuration rule is rejected fail-fast.
    pub fn new(name: impl Into<String>, magnitude: u32, cooldown_period: u32, cost: u32) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HollowError::InvalidSkill {
                name,
                reason: "name must not be empty".to_string(),
            });
        }
        Ok(Self {
            name,
            magnitude,
            cooldown_period,
            cost,
            cooldown_remaining: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    pub fn cooldown_period(&self) -> u32 {
        self.cooldown_period
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Rounds until this skill is off cooldown; 0 means ready now
    pub fn turns_until_ready(&self) -> u32 {
        self.cooldown_remaining
    }

    /// Usable iff off cooldown AND the actor holds STRICTLY more skill
    /// points than the cost. `actor_sp == cost` is not enough.
    pub fn is_usable(&self, actor_sp: u32) -> bool {
        self.cooldown_remaining == 0 && actor_sp > self.cost
    }

    /// Produce the action descriptor. Pure read; does not touch the
    /// cooldown or anyone's skill points.
    pub fn invoke(&self) -> SkillUse {
        SkillUse {
            name: self.name.clone(),
            magnitude: self.magnitude,
        }
    }

    /// Start the cooldown after a use.
    pub fn trigger(&mut self) {
        self.cooldown_remaining = self.cooldown_period;
    }

    /// Per-round cooldown tick, floored at 0.
    pub fn advance(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }
}
