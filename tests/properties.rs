//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use soccer_duel::SilentAudio;
use soccer_duel::consts::*;
use soccer_duel::sim::{Ball, MatchPhase, MatchState, Steering, TickInput, tick};

fn steering() -> impl Strategy<Value = Steering> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(up, down, left, right)| Steering {
            up,
            down,
            left,
            right,
        },
    )
}

fn in_bounds(pos: Vec2, radius: f32) -> bool {
    pos.x >= radius
        && pos.x <= SCREEN_WIDTH - radius
        && pos.y >= radius
        && pos.y <= SCREEN_HEIGHT - radius
}

proptest! {
    /// Property: players never leave the pitch, whatever the keys do
    #[test]
    fn prop_players_stay_on_pitch(
        seed in any::<u64>(),
        inputs in prop::collection::vec((steering(), any::<bool>()), 1..400)
    ) {
        let mut state = MatchState::new(seed);
        for (steering, kick) in inputs {
            let input = TickInput { steering, kick, ..Default::default() };
            tick(&mut state, &input, &mut SilentAudio);
            prop_assert!(in_bounds(state.home.pos, state.home.radius), "home at {:?}", state.home.pos);
            prop_assert!(in_bounds(state.away.pos, state.away.radius), "away at {:?}", state.away.pos);
            prop_assert!(in_bounds(state.ball.pos, state.ball.radius), "ball at {:?}", state.ball.pos);
        }
    }

    /// Property: friction alone decays speed geometrically
    #[test]
    fn prop_friction_decay(
        vx in -3.0f32..3.0,
        vy in -3.0f32..3.0,
        frames in 1u32..40
    ) {
        // Low speeds from the centre never reach a wall in 40 frames
        let mut ball = Ball { vel: Vec2::new(vx, vy), ..Default::default() };
        let initial = ball.speed();
        for _ in 0..frames {
            ball.step_on_pitch();
        }
        let expected = initial * BALL_FRICTION.powi(frames as i32);
        prop_assert!((ball.speed() - expected).abs() <= 1e-4 * initial.max(1.0));
    }

    /// Property: kicks connect iff the kicker is strictly inside range
    #[test]
    fn prop_kick_range(
        angle in 0.0f32..std::f32::consts::TAU,
        distance in 0.5f32..120.0,
        power in 1.0f32..12.0
    ) {
        let mut ball = Ball::default();
        let from = ball.pos - Vec2::from_angle(angle) * distance;
        let actual = ball.pos.distance(from);
        let kicked = ball.kick(from, power);
        prop_assert_eq!(kicked, actual < KICK_RANGE);
        if kicked {
            prop_assert!((ball.speed() - power).abs() < 1e-3);
        } else {
            prop_assert_eq!(ball.vel, Vec2::ZERO);
        }
    }

    /// Property: the clock never passes full time and scores never drop
    #[test]
    fn prop_clock_and_score_monotonic(seed in any::<u64>(), duration in 1u32..4) {
        let mut state = MatchState::with_duration(seed, duration);
        let input = TickInput { autopilot: true, ..Default::default() };
        let (mut home, mut away, mut ticks) = (0, 0, 0);
        while state.phase == MatchPhase::Playing {
            tick(&mut state, &input, &mut SilentAudio);
            prop_assert!(state.elapsed_ticks >= ticks);
            prop_assert!(state.score.home >= home && state.score.away >= away);
            ticks = state.elapsed_ticks;
            home = state.score.home;
            away = state.score.away;
        }
        prop_assert_eq!(state.elapsed_secs(), duration as f32);
    }
}
