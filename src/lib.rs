//! Ashen Hollow - combat decision core for a turn-based RPG
//!
//! The crate owns the enemy side of combat: skill definitions with a
//! cooldown/skill-point economy, a roster of monster variants, and the
//! per-round turn decision policy. A small retained-mode UI layer
//! (typewriter text box, buttons) rides along for dialogue and menus.
//!
//! The game loop, rendering backend, and input dispatch live outside this
//! crate. Hosts drive combat by calling [`combat::Enemy::advance_round`]
//! once per round and [`combat::Enemy::take_turn`] on the acting enemy,
//! then resolve the returned [`combat::TurnAction`] themselves.

pub mod combat;
pub mod core;
pub mod ui;
