//! HUD text
//!
//! Pure formatting of what the overlay shows; the platform layer decides
//! where it goes (DOM elements on the web, log lines natively).

use crate::sim::{MatchPhase, MatchState, Outcome};

pub const CONTROLS_HINT: &str = "WASD: move, Space: kick, P: pause, Esc: quit";
pub const PAUSED_HINT: &str = "Paused - press P to resume";
pub const RESTART_PROMPT: &str = "Press R to restart";

/// Everything the overlay needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    /// "home - away"
    pub score: String,
    /// Countdown line
    pub time_left: String,
    /// Bottom hint line (controls or pause notice); empty after full time
    pub hint: String,
    /// Winner line, only after full time
    pub winner: Option<String>,
    /// Restart prompt, only after full time
    pub restart: Option<String>,
}

impl HudText {
    pub fn from_state(state: &MatchState) -> Self {
        let (hint, winner, restart) = match state.phase {
            MatchPhase::Playing => (CONTROLS_HINT.to_string(), None, None),
            MatchPhase::Paused => (PAUSED_HINT.to_string(), None, None),
            MatchPhase::GameOver => (
                String::new(),
                Some(winner_text(state.winner()).to_string()),
                Some(RESTART_PROMPT.to_string()),
            ),
        };

        Self {
            score: format!("{} - {}", state.score.home, state.score.away),
            time_left: format!("Time left: {}s", remaining_whole_secs(state)),
            hint,
            winner,
            restart,
        }
    }
}

/// Remaining seconds, floored
pub fn remaining_whole_secs(state: &MatchState) -> u32 {
    state.remaining_secs().floor() as u32
}

pub fn winner_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::HomeWin => "Player 1 wins!",
        Outcome::AwayWin => "Player 2 (CPU) wins!",
        Outcome::Draw => "Draw!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_hud() {
        let state = MatchState::new(1);
        let hud = HudText::from_state(&state);
        assert_eq!(hud.score, "0 - 0");
        assert_eq!(hud.time_left, "Time left: 90s");
        assert_eq!(hud.hint, CONTROLS_HINT);
        assert!(hud.winner.is_none());
        assert!(hud.restart.is_none());
    }

    #[test]
    fn test_countdown_floors() {
        let mut state = MatchState::new(1);
        // 0.5s elapsed -> 89.5 left -> shows 89
        state.elapsed_ticks = 30;
        assert_eq!(remaining_whole_secs(&state), 89);
        state.elapsed_ticks = 5399;
        assert_eq!(remaining_whole_secs(&state), 0);
        state.elapsed_ticks = 9000;
        assert_eq!(remaining_whole_secs(&state), 0);
    }

    #[test]
    fn test_paused_hint() {
        let mut state = MatchState::new(1);
        state.phase = MatchPhase::Paused;
        assert_eq!(HudText::from_state(&state).hint, PAUSED_HINT);
    }

    #[test]
    fn test_game_over_hud() {
        let mut state = MatchState::new(1);
        state.phase = MatchPhase::GameOver;
        state.score.away = 2;
        let hud = HudText::from_state(&state);
        assert_eq!(hud.score, "0 - 2");
        assert_eq!(hud.winner.as_deref(), Some("Player 2 (CPU) wins!"));
        assert_eq!(hud.restart.as_deref(), Some(RESTART_PROMPT));
        assert!(hud.hint.is_empty());
    }

    #[test]
    fn test_winner_text() {
        assert_eq!(winner_text(Outcome::HomeWin), "Player 1 wins!");
        assert_eq!(winner_text(Outcome::Draw), "Draw!");
    }
}
