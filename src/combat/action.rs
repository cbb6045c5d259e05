//! The normalized output of a turn decision
//!
//! Every branch of every policy funnels into this one tagged type so the
//! combat resolver never has to guess what shape came back.

use serde::{Deserialize, Serialize};

use crate::combat::skill::SkillUse;

/// What an enemy chose to do with its turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// A skill fired; the resolver applies its magnitude
    UseSkill(SkillUse),
    /// Plain attack for the given damage
    BasicAttack(u32),
    /// Defensive no-damage action, taken to preserve a skill about to
    /// come off cooldown
    Guard,
}

impl TurnAction {
    pub fn is_guard(&self) -> bool {
        matches!(self, TurnAction::Guard)
    }
}
