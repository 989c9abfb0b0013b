//! Soccer Duel - A top-down arcade soccer match against a scripted opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, ball physics, goals, match flow)
//! - `audio`: Fire-and-forget sound cues
//! - `hud`: Score/timer/prompt text derived from match state
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Runtime configuration

pub mod audio;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{Cue, CueRecorder, CueSink, SilentAudio};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Pitch dimensions (screen units, origin top-left, y down)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Simulation rate; one tick per frame
    pub const FRAME_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / FRAME_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Match length in seconds
    pub const MATCH_DURATION_SECS: u32 = 90;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const HOME_START: (f32, f32) = (100.0, SCREEN_HEIGHT / 2.0);
    pub const AWAY_START: (f32, f32) = (SCREEN_WIDTH - 100.0, SCREEN_HEIGHT / 2.0);

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-tick velocity multiplier
    pub const BALL_FRICTION: f32 = 0.98;
    /// Velocity multiplier on the crossing axis when the ball hits a wall
    pub const WALL_BOUNCE: f32 = -0.8;

    /// Kicks only connect when the kicker is closer than this
    pub const KICK_RANGE: f32 = 50.0;
    /// Power of the automatic kick on player/ball contact
    pub const CONTACT_KICK_POWER: f32 = 8.0;
    /// Power of the scripted opponent's deliberate kick
    pub const SCRIPTED_KICK_POWER: f32 = 6.0;
    /// Power of the human kick key
    pub const HUMAN_KICK_POWER: f32 = 10.0;

    /// Scripted opponent stops chasing inside this distance
    pub const CHASE_THRESHOLD: f32 = 20.0;
    /// Per-tick chance the scripted opponent tries a kick when close
    pub const SCRIPTED_KICK_CHANCE: f32 = 0.1;

    /// Goal mouth size; goals sit flush with the side lines
    pub const GOAL_WIDTH: f32 = 20.0;
    pub const GOAL_HEIGHT: f32 = 100.0;
}

/// Centre of the pitch
#[inline]
pub fn pitch_center() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH / 2.0, consts::SCREEN_HEIGHT / 2.0)
}

/// Pitch extent as a vector (width, height)
#[inline]
pub fn pitch_size() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT)
}

/// Clamp a coordinate so a body of `radius` stays inside `[0, bound]`
#[inline]
pub fn clamp_axis(value: f32, radius: f32, bound: f32) -> f32 {
    value.max(radius).min(bound - radius)
}
