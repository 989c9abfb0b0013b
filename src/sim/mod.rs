//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame at a fixed rate
//! - Seeded RNG only
//! - No rendering, audio backend or platform dependencies

pub mod collision;
pub mod movement;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Aabb, player_touches_ball};
pub use movement::{ScriptedAction, Steering};
pub use state::{
    Ball, Controller, Goal, GoalSide, MatchPhase, MatchState, MatchSummary, Outcome, Player,
    Score, Team,
};
pub use tick::{TickInput, restart, tick};
