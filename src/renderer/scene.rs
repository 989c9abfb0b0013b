//! Turns a match snapshot into one triangle list
//!
//! Draw order: pitch, markings, goals, players, ball, then the dimming
//! overlay when the clock is stopped.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{MatchPhase, MatchState, Team};
use crate::{pitch_center, pitch_size};

const LINE_WIDTH: f32 = 3.0;
const CENTER_CIRCLE_RADIUS: f32 = 50.0;
const CIRCLE_SEGMENTS: u32 = 32;

/// Build the full frame for a match state
pub fn build(state: &MatchState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(1024);
    let size = pitch_size();
    let center = pitch_center();

    vertices.extend(shapes::rect(Vec2::ZERO, size, colors::PITCH));

    // Halfway line and centre circle
    vertices.extend(shapes::line(
        Vec2::new(center.x, 0.0),
        Vec2::new(center.x, size.y),
        LINE_WIDTH,
        colors::LINES,
    ));
    vertices.extend(shapes::ring(
        center,
        CENTER_CIRCLE_RADIUS - LINE_WIDTH,
        CENTER_CIRCLE_RADIUS,
        colors::LINES,
        CIRCLE_SEGMENTS * 2,
    ));

    for goal in &state.goals {
        vertices.extend(shapes::rect_outline(
            Vec2::new(goal.x, goal.y),
            Vec2::new(goal.width, goal.height),
            LINE_WIDTH,
            colors::LINES,
        ));
    }

    for player in [&state.home, &state.away] {
        let color = match player.team {
            Team::Home => colors::HOME,
            Team::Away => colors::AWAY,
        };
        vertices.extend(shapes::circle(player.pos, player.radius, color, CIRCLE_SEGMENTS));
    }

    vertices.extend(shapes::circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        CIRCLE_SEGMENTS,
    ));

    if state.phase != MatchPhase::Playing {
        vertices.extend(shapes::rect(Vec2::ZERO, size, colors::SHADE));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_contains_players_and_ball() {
        let state = MatchState::new(1);
        let v = build(&state);
        assert!(v.iter().any(|v| v.color == colors::HOME));
        assert!(v.iter().any(|v| v.color == colors::AWAY));
        // Ball centre vertex is emitted
        assert!(v.iter().any(|v| v.position == [400.0, 300.0] && v.color == colors::BALL));
        assert_eq!(v.len() % 3, 0);
    }

    #[test]
    fn test_shade_only_when_stopped() {
        let mut state = MatchState::new(1);
        assert!(!build(&state).iter().any(|v| v.color == colors::SHADE));
        state.phase = MatchPhase::GameOver;
        assert!(build(&state).iter().any(|v| v.color == colors::SHADE));
    }

    #[test]
    fn test_scene_stays_on_pitch() {
        let state = MatchState::new(1);
        for v in build(&state) {
            assert!(v.position[0] >= -1.0 && v.position[0] <= 801.0);
            assert!(v.position[1] >= -1.0 && v.position[1] <= 601.0);
        }
    }
}
