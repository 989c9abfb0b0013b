//! Player movement: keyboard steering and the scripted chase heuristic

use glam::Vec2;
use rand::Rng;

use super::state::Player;
use crate::clamp_axis;
use crate::consts::*;
use crate::pitch_size;

/// Held direction keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// What the scripted heuristic decided this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedAction {
    /// Stepped toward the ball
    Chase,
    /// Close enough and rolled a kick
    AttemptKick,
    /// Close enough but held position
    Hold,
}

impl Player {
    /// Apply held keys. Each key is an independent step; each axis clamps
    /// separately so the player never leaves the pitch.
    pub fn steer(&mut self, keys: Steering, bounds: Vec2) {
        if keys.up {
            self.pos.y = (self.pos.y - self.speed).max(self.radius);
        }
        if keys.down {
            self.pos.y = (self.pos.y + self.speed).min(bounds.y - self.radius);
        }
        if keys.left {
            self.pos.x = (self.pos.x - self.speed).max(self.radius);
        }
        if keys.right {
            self.pos.x = (self.pos.x + self.speed).min(bounds.x - self.radius);
        }
    }

    /// One step toward `target` on each axis by the sign of the delta
    pub fn step_toward(&mut self, target: Vec2, bounds: Vec2) {
        let delta = target - self.pos;
        if delta.x != 0.0 {
            let next = self.pos.x + self.speed * delta.x.signum();
            self.pos.x = clamp_axis(next, self.radius, bounds.x);
        }
        if delta.y != 0.0 {
            let next = self.pos.y + self.speed * delta.y.signum();
            self.pos.y = clamp_axis(next, self.radius, bounds.y);
        }
    }

    /// Greedy chase heuristic
    ///
    /// Far from the ball: step toward it. Within [`CHASE_THRESHOLD`]: stay
    /// put and roll for a kick attempt. The RNG is only consulted when close.
    pub fn scripted_move<R: Rng>(&mut self, ball_pos: Vec2, rng: &mut R) -> ScriptedAction {
        if self.pos.distance(ball_pos) > CHASE_THRESHOLD {
            self.step_toward(ball_pos, pitch_size());
            ScriptedAction::Chase
        } else if rng.random::<f32>() < SCRIPTED_KICK_CHANCE {
            ScriptedAction::AttemptKick
        } else {
            ScriptedAction::Hold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Controller, Team};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn player_at(x: f32, y: f32) -> Player {
        let mut p = Player::new(Team::Away, Controller::Scripted);
        p.pos = Vec2::new(x, y);
        p
    }

    #[test]
    fn test_steer_each_key_independent() {
        let mut p = player_at(100.0, 100.0);
        p.steer(Steering { up: true, right: true, ..Default::default() }, pitch_size());
        assert_eq!(p.pos, Vec2::new(105.0, 95.0));

        // Opposite keys cancel out
        p.steer(Steering { up: true, down: true, left: true, right: true }, pitch_size());
        assert_eq!(p.pos, Vec2::new(105.0, 95.0));
    }

    #[test]
    fn test_steer_clamps_to_pitch() {
        let mut p = player_at(17.0, 583.0);
        p.steer(Steering { left: true, down: true, ..Default::default() }, pitch_size());
        assert_eq!(p.pos, Vec2::new(PLAYER_RADIUS, SCREEN_HEIGHT - PLAYER_RADIUS));
    }

    #[test]
    fn test_chase_steps_each_axis() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut p = player_at(700.0, 300.0);
        let action = p.scripted_move(Vec2::new(400.0, 200.0), &mut rng);
        assert_eq!(action, ScriptedAction::Chase);
        assert_eq!(p.pos, Vec2::new(695.0, 295.0));
    }

    #[test]
    fn test_chase_tie_axis_holds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut p = player_at(700.0, 300.0);
        p.scripted_move(Vec2::new(400.0, 300.0), &mut rng);
        assert_eq!(p.pos, Vec2::new(695.0, 300.0));
    }

    #[test]
    fn test_close_never_moves_and_sometimes_kicks() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut p = player_at(400.0, 300.0);
        let ball = Vec2::new(410.0, 310.0);
        let mut kicks = 0;
        for _ in 0..1000 {
            match p.scripted_move(ball, &mut rng) {
                ScriptedAction::AttemptKick => kicks += 1,
                ScriptedAction::Hold => {}
                ScriptedAction::Chase => panic!("should not chase inside threshold"),
            }
        }
        assert_eq!(p.pos, Vec2::new(400.0, 300.0));
        // 10% nominal rate
        assert!(kicks > 50 && kicks < 150, "kicks = {kicks}");
    }

    #[test]
    fn test_threshold_is_inclusive_for_holding() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut p = player_at(400.0, 300.0);
        let action = p.scripted_move(Vec2::new(420.0, 300.0), &mut rng);
        assert_ne!(action, ScriptedAction::Chase);
    }
}
