//! Enemy combat: skills, resources, and the per-round turn decision
//!
//! The orchestrating game loop owns sequencing. Per combat round it must:
//! 1. call [`Enemy::advance_round`] on every living enemy (cooldown tick),
//! 2. call [`Enemy::take_turn`] on the acting enemy,
//! 3. resolve the returned [`TurnAction`] against the opposing side.
//!
//! Skill points are only ever spent here; any regeneration rule belongs to
//! the host.

pub mod action;
pub mod enemy;
pub mod roster;
pub mod skill;

pub use action::TurnAction;
pub use enemy::{Enemy, TurnPolicy};
pub use roster::{EnemyConfig, EnemyKind, SkillSpec};
pub use skill::{Skill, SkillUse};
