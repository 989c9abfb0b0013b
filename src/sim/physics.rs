//! Ball physics: integration, friction, wall bounce and kicks

use glam::Vec2;

use super::state::Ball;
use crate::consts::*;
use crate::pitch_size;

impl Ball {
    /// Advance one tick inside a `bounds`-sized pitch
    ///
    /// Moves by the current velocity, applies friction, then bounces off any
    /// wall the ball is touching. A bounce damps and flips only the crossing
    /// axis, and pins the ball inside the pitch.
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        self.vel *= self.friction;

        if self.pos.x <= self.radius || self.pos.x >= bounds.x - self.radius {
            self.vel.x *= WALL_BOUNCE;
            self.pos.x = crate::clamp_axis(self.pos.x, self.radius, bounds.x);
        }
        if self.pos.y <= self.radius || self.pos.y >= bounds.y - self.radius {
            self.vel.y *= WALL_BOUNCE;
            self.pos.y = crate::clamp_axis(self.pos.y, self.radius, bounds.y);
        }
    }

    /// Step on the standard pitch
    pub fn step_on_pitch(&mut self) {
        self.step(pitch_size());
    }

    /// Kick the ball away from `from` with the given power
    ///
    /// The impulse adds to the current velocity. Returns false (and leaves
    /// the ball untouched) when the kicker is out of range or exactly on the
    /// ball centre.
    pub fn kick(&mut self, from: Vec2, power: f32) -> bool {
        let delta = self.pos - from;
        let distance = delta.length();
        if distance >= KICK_RANGE || distance <= 0.0 {
            return false;
        }
        self.vel += delta / distance * power;
        true
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
