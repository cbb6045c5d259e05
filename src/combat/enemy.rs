//! Enemy state and the per-round turn decision
//!
//! The decision is greedy and priority-ordered: slot 0 beats slot 1
//! whenever both are ready, so whoever assembles a config is setting the
//! preference order by picking the slots. Policies override narrow pieces
//! of that ladder; the data-driven [`TurnPolicy`] tag replaces a subclass
//! per monster.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::action::TurnAction;
use crate::combat::roster::EnemyConfig;
use crate::combat::skill::Skill;
use crate::core::error::{HollowError, Result};
use crate::core::types::{Size, Vec2};

/// Per-variant override of the default decision ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TurnPolicy {
    /// Slot 0, slot 1, guard-if-about-ready, basic attack
    Standard,
    /// Slot 1 additionally requires `hp <= hp_ratio * max_hp` and
    /// self-heals `heal_amount` (clamped to max) when it fires
    DesperationHeal { hp_ratio: f32, heal_amount: u32 },
    /// 50/50 between the slots when both are simultaneously usable
    RandomWhenBothReady,
}

/// One combatant on the enemy side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    name: String,
    /// Rendering geometry; opaque to combat math
    pub pos: Vec2,
    pub size: Size,

    current_hp: u32,
    max_hp: u32,
    sp: u32,
    attack_stat: f32,
    /// Last computed basic-attack damage
    attack_dmg: u32,
    /// Opaque resistance/susceptibility stat; never read by the core
    infect_rate: f32,

    skills: [Skill; 2],
    policy: TurnPolicy,
}

impl Enemy {
    /// Build an enemy from a variant config, validating it fail-fast.
    pub fn from_config(config: EnemyConfig, pos: Vec2, size: Size) -> Result<Self> {
        if config.max_hp == 0 {
            return Err(HollowError::InvalidConfig {
                name: config.name,
                reason: "max_hp must be positive".to_string(),
            });
        }
        if !config.attack_stat.is_finite() || config.attack_stat < 0.0 {
            return Err(HollowError::InvalidConfig {
                name: config.name,
                reason: format!("attack_stat {} must be finite and non-negative", config.attack_stat),
            });
        }
        if let TurnPolicy::DesperationHeal { hp_ratio, .. } = config.policy {
            if !hp_ratio.is_finite() || hp_ratio <= 0.0 || hp_ratio > 1.0 {
                return Err(HollowError::InvalidConfig {
                    name: config.name,
                    reason: format!("desperation hp_ratio {hp_ratio} must lie in (0, 1]"),
                });
            }
        }

        let [first, second] = config.skills;
        Ok(Self {
            name: config.name,
            pos,
            size,
            current_hp: config.max_hp,
            max_hp: config.max_hp,
            sp: config.sp,
            attack_stat: config.attack_stat,
            attack_dmg: config.attack_dmg,
            infect_rate: config.infect_rate,
            skills: [
                Skill::new(first.name, first.magnitude, first.cooldown, first.cost)?,
                Skill::new(second.name, second.magnitude, second.cooldown, second.cost)?,
            ],
            policy: config.policy,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn sp(&self) -> u32 {
        self.sp
    }

    pub fn attack_dmg(&self) -> u32 {
        self.attack_dmg
    }

    pub fn skills(&self) -> &[Skill; 2] {
        &self.skills
    }

    pub fn policy(&self) -> TurnPolicy {
        self.policy
    }

    pub fn infect_resist(&self) -> f32 {
        self.infect_rate
    }

    /// Defeated once hp reaches 0. The value is not consumed; the host
    /// removes defeated enemies from active combat.
    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Reduce hp, saturating at 0. Reaching 0 emits one defeat event.
    pub fn take_damage(&mut self, amount: u32) {
        let was_standing = self.current_hp > 0;
        self.current_hp = self.current_hp.saturating_sub(amount);
        if was_standing && self.current_hp == 0 {
            tracing::info!("{} has been defeated", self.name);
        }
    }

    /// Restore hp, saturating at max. The inner add saturates too, so an
    /// arbitrarily large amount cannot wrap past the clamp.
    pub fn heal(&mut self, amount: u32) {
        self.current_hp = self.max_hp.min(self.current_hp.saturating_add(amount));
    }

    /// Recompute and store the basic-attack damage.
    pub fn basic_attack(&mut self) -> u32 {
        self.attack_dmg = (10.0 * self.attack_stat).round() as u32;
        self.attack_dmg
    }

    /// Per-round cooldown tick for both skills. Orchestrator contract:
    /// call once per combat round, before the enemy acts. Without this no
    /// used skill ever becomes usable again.
    pub fn advance_round(&mut self) {
        for skill in &mut self.skills {
            skill.advance();
        }
    }

    /// Decide and commit this round's action. Spends sp and starts the
    /// chosen skill's cooldown; the returned action is for the external
    /// resolver to apply.
    pub fn take_turn(&mut self, rng: &mut impl Rng) -> TurnAction {
        let action = match self.policy {
            TurnPolicy::Standard => self.standard_turn(),
            TurnPolicy::DesperationHeal {
                hp_ratio,
                heal_amount,
            } => self.desperation_turn(hp_ratio, heal_amount),
            TurnPolicy::RandomWhenBothReady => self.random_turn(rng),
        };
        tracing::debug!(name = %self.name, sp = self.sp, ?action, "turn decided");
        action
    }

    fn standard_turn(&mut self) -> TurnAction {
        if self.skills[0].is_usable(self.sp) {
            self.use_slot(0)
        } else if self.skills[1].is_usable(self.sp) {
            self.use_slot(1)
        } else {
            self.guard_or_attack()
        }
    }

    fn desperation_turn(&mut self, hp_ratio: f32, heal_amount: u32) -> TurnAction {
        if self.skills[0].is_usable(self.sp) {
            return self.use_slot(0);
        }
        let threshold = (self.max_hp as f32 * hp_ratio) as u32;
        if self.current_hp <= threshold && self.skills[1].is_usable(self.sp) {
            // The heal lands before the skill result is reported, with the
            // same clamp as `heal`.
            let action = self.use_slot(1);
            self.current_hp = self.max_hp.min(self.current_hp.saturating_add(heal_amount));
            return action;
        }
        self.guard_or_attack()
    }

    fn random_turn(&mut self, rng: &mut impl Rng) -> TurnAction {
        let first = self.skills[0].is_usable(self.sp);
        let second = self.skills[1].is_usable(self.sp);
        match (first, second) {
            (true, true) => self.use_slot(rng.gen_range(0..2)),
            (true, false) => self.use_slot(0),
            (false, true) => self.use_slot(1),
            (false, false) => self.guard_or_attack(),
        }
    }

    /// Fire the skill in `slot`: spend sp, start its cooldown, report the
    /// use. Callers must have checked `is_usable`, which guarantees the
    /// deduction cannot underflow.
    fn use_slot(&mut self, slot: usize) -> TurnAction {
        self.sp -= self.skills[slot].cost();
        self.skills[slot].trigger();
        TurnAction::UseSkill(self.skills[slot].invoke())
    }

    /// Tail of every policy: guard when a skill is one tick from ready so
    /// the turn isn't wasted on a weak basic attack, otherwise the
    /// always-available basic attack.
    fn guard_or_attack(&mut self) -> TurnAction {
        if self.skills[0].turns_until_ready() == 1 || self.skills[1].turns_until_ready() == 1 {
            TurnAction::Guard
        } else {
            TurnAction::BasicAttack(self.basic_attack())
        }
    }
}
