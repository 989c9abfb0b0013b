//! Fixed timestep match tick
//!
//! One call advances the match by one frame. Deterministic given the seed
//! and the input sequence.

use super::collision::player_touches_ball;
use super::movement::{ScriptedAction, Steering};
use super::state::{MatchPhase, MatchState, Team};
use crate::audio::{Cue, CueSink};
use crate::consts::*;
use crate::pitch_size;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction keys for the home player
    pub steering: Steering,
    /// Kick key (one-shot)
    pub kick: bool,
    /// Restart key (one-shot, only honoured after the final whistle)
    pub restart: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Drive the home player with the chase heuristic too
    pub autopilot: bool,
}

impl TickInput {
    /// Clear one-shot inputs after they have been processed
    pub fn clear_one_shots(&mut self) {
        self.kick = false;
        self.restart = false;
        self.pause = false;
    }

    /// Window lost focus: drop held keys (their keyup goes elsewhere) and
    /// ask for a pause if the match is running
    pub fn release_on_focus_loss(&mut self, phase: MatchPhase) {
        self.steering = Steering::default();
        if phase == MatchPhase::Playing {
            self.pause = true;
        }
    }
}

/// Restart after the final whistle. Returns false (and changes nothing) in
/// any other phase.
pub fn restart(state: &mut MatchState) -> bool {
    if state.phase != MatchPhase::GameOver {
        return false;
    }
    state.reset_match();
    log::info!("Match restarted");
    true
}

/// Advance the match by one frame
pub fn tick(state: &mut MatchState, input: &TickInput, audio: &mut dyn CueSink) {
    if input.pause {
        match state.phase {
            MatchPhase::Playing => {
                state.phase = MatchPhase::Paused;
                return;
            }
            MatchPhase::Paused => state.phase = MatchPhase::Playing,
            MatchPhase::GameOver => {}
        }
    }

    if input.restart && restart(state) {
        return;
    }

    if state.phase != MatchPhase::Playing {
        return;
    }

    state.elapsed_ticks += 1;
    if state.elapsed_ticks >= state.duration_ticks {
        state.elapsed_ticks = state.duration_ticks;
        state.phase = MatchPhase::GameOver;
        log::info!(
            "Full time: {} - {} ({:?})",
            state.score.home,
            state.score.away,
            state.winner()
        );
        return;
    }

    let bounds = pitch_size();

    if input.kick && state.ball.kick(state.home.pos, HUMAN_KICK_POWER) {
        log::debug!("Home kick at {:?}", state.home.pos);
        audio.play(Cue::Kick);
    }

    if input.autopilot {
        run_scripted(state, Team::Home, audio);
    } else {
        state.home.steer(input.steering, bounds);
    }

    run_scripted(state, Team::Away, audio);

    state.ball.step(bounds);

    for team in [Team::Home, Team::Away] {
        let player = state.player(team);
        if player_touches_ball(player, &state.ball) {
            let from = player.pos;
            if state.ball.kick(from, CONTACT_KICK_POWER) {
                audio.play(Cue::Kick);
            }
        }
    }

    check_goals(state, audio);
}

/// Evaluate the chase heuristic for one player, exactly once
fn run_scripted(state: &mut MatchState, team: Team, audio: &mut dyn CueSink) {
    let ball_pos = state.ball.pos;
    let player = match team {
        Team::Home => &mut state.home,
        Team::Away => &mut state.away,
    };

    if player.scripted_move(ball_pos, &mut state.rng) == ScriptedAction::AttemptKick {
        let from = player.pos;
        if state.ball.kick(from, SCRIPTED_KICK_POWER) {
            log::debug!("{:?} scripted kick", team);
            audio.play(Cue::Kick);
        }
    }
}

/// Credit a goal if the ball is in either mouth, then re-centre the ball
fn check_goals(state: &mut MatchState, audio: &mut dyn CueSink) {
    let Some(goal) = state.goals.iter().find(|g| g.check_goal(&state.ball)) else {
        return;
    };
    let scorer = goal.side.scorer();

    state.score.credit(scorer);
    audio.play(Cue::Goal);
    state.ball.reset();
    log::info!(
        "Goal for {:?}! {} - {}",
        scorer,
        state.score.home,
        state.score.away
    );
}
