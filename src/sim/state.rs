//! Match state and core simulation types
//!
//! Everything the controller mutates during a match lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::pitch_center;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Clock running, simulation active
    Playing,
    /// Clock frozen by the pause toggle
    Paused,
    /// Time expired, waiting for restart
    GameOver,
}

/// Which side a player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    /// Player 1, attacks the right goal
    Home,
    /// Player 2, attacks the left goal
    Away,
}

/// Who drives a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Keyboard input
    Human,
    /// Greedy chase heuristic
    Scripted,
}

/// A player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub team: Team,
    pub controller: Controller,
}

impl Player {
    pub fn new(team: Team, controller: Controller) -> Self {
        Self {
            pos: Self::start_pos(team),
            speed: PLAYER_SPEED,
            radius: PLAYER_RADIUS,
            team,
            controller,
        }
    }

    /// Kick-off position for a team
    pub fn start_pos(team: Team) -> Vec2 {
        match team {
            Team::Home => Vec2::new(HOME_START.0, HOME_START.1),
            Team::Away => Vec2::new(AWAY_START.0, AWAY_START.1),
        }
    }

    pub fn reset(&mut self) {
        self.pos = Self::start_pos(self.team);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub friction: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: pitch_center(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            friction: BALL_FRICTION,
        }
    }
}

impl Ball {
    /// Back to the centre spot, at rest
    pub fn reset(&mut self) {
        self.pos = pitch_center();
        self.vel = Vec2::ZERO;
    }
}

/// Which side line a goal sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalSide {
    Left,
    Right,
}

impl GoalSide {
    /// Team credited when the ball enters this goal
    pub fn scorer(self) -> Team {
        match self {
            GoalSide::Left => Team::Away,
            GoalSide::Right => Team::Home,
        }
    }
}

/// A goal mouth (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub side: GoalSide,
}

impl Goal {
    pub fn new(side: GoalSide) -> Self {
        let x = match side {
            GoalSide::Left => 0.0,
            GoalSide::Right => SCREEN_WIDTH - GOAL_WIDTH,
        };
        Self {
            x,
            y: SCREEN_HEIGHT / 2.0 - GOAL_HEIGHT / 2.0,
            width: GOAL_WIDTH,
            height: GOAL_HEIGHT,
            side,
        }
    }
}

/// Running score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn credit(&mut self, team: Team) {
        match team {
            Team::Home => self.home += 1,
            Team::Away => self.away += 1,
        }
    }

    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.home.cmp(&self.away) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Result of a finished (or in-progress) match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// Serializable end-of-match record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub seed: u64,
    pub score: Score,
    pub outcome: Outcome,
    pub elapsed_secs: f32,
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Scripted opponent's dice
    pub rng: Pcg32,
    pub score: Score,
    /// Ticks simulated since kick-off or last restart
    pub elapsed_ticks: u32,
    /// Ticks after which the match ends
    pub duration_ticks: u32,
    pub phase: MatchPhase,
    pub home: Player,
    pub away: Player,
    pub ball: Ball,
    /// Left and right goals
    pub goals: [Goal; 2],
}

impl MatchState {
    /// New match with the default duration
    pub fn new(seed: u64) -> Self {
        Self::with_duration(seed, MATCH_DURATION_SECS)
    }

    pub fn with_duration(seed: u64, duration_secs: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: Score::default(),
            elapsed_ticks: 0,
            duration_ticks: duration_secs.saturating_mul(FRAME_RATE),
            phase: MatchPhase::Playing,
            home: Player::new(Team::Home, Controller::Human),
            away: Player::new(Team::Away, Controller::Scripted),
            ball: Ball::default(),
            goals: [Goal::new(GoalSide::Left), Goal::new(GoalSide::Right)],
        }
    }

    /// Seconds on the clock, clamped to the match duration
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_ticks.min(self.duration_ticks) as f32 / FRAME_RATE as f32
    }

    pub fn duration_secs(&self) -> f32 {
        self.duration_ticks as f32 / FRAME_RATE as f32
    }

    /// Seconds left, never negative
    pub fn remaining_secs(&self) -> f32 {
        (self.duration_secs() - self.elapsed_secs()).max(0.0)
    }

    pub fn player(&self, team: Team) -> &Player {
        match team {
            Team::Home => &self.home,
            Team::Away => &self.away,
        }
    }

    /// Winner by score; equal scores are a draw
    pub fn winner(&self) -> Outcome {
        self.score.outcome()
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            seed: self.seed,
            score: self.score,
            outcome: self.winner(),
            elapsed_secs: self.elapsed_secs(),
        }
    }

    /// Full reset to kick-off. The RNG keeps its stream.
    pub fn reset_match(&mut self) {
        self.score = Score::default();
        self.elapsed_ticks = 0;
        self.phase = MatchPhase::Playing;
        self.ball.reset();
        self.home.reset();
        self.away.reset();
    }
}
