//! Per-tick output for the rendering and UI collaborators

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::PAUSED_LABEL;
use crate::sim::{GameState, RoundPhase, RoundState};

/// Text labels shown over the scene
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudText {
    pub score: String,
    pub timer: String,
    /// Empty while Running, paused label while Paused, end title once Ended
    pub status: String,
    pub end_label: String,
    pub end_score: String,
}

impl HudText {
    pub fn for_round(round: &RoundState, end_message: &str) -> Self {
        let score = format!("Score: {}", round.score);
        let timer = round.whole_seconds().to_string();

        match round.phase {
            RoundPhase::Idle => Self {
                timer,
                ..Default::default()
            },
            RoundPhase::Running => Self {
                score,
                timer,
                ..Default::default()
            },
            RoundPhase::Paused => Self {
                score,
                timer,
                status: PAUSED_LABEL.to_string(),
                ..Default::default()
            },
            RoundPhase::Ended => Self {
                status: end_message.to_string(),
                end_label: "Your Score: ".to_string(),
                end_score: round.score.to_string(),
                ..Default::default()
            },
        }
    }
}

/// Everything the renderer needs after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// One transform per body, index 0 is body id 1
    pub bodies: Vec<Vec3>,
    pub collector: Vec3,
    /// Unsimulated fraction of a physics step, for render-side interpolation
    pub alpha: f32,
    pub hud: HudText,
    pub confetti: bool,
    pub phase: RoundPhase,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            bodies: state.bodies.iter().map(|b| b.pos).collect(),
            collector: state.collector.pos,
            alpha: state.physics.alpha(),
            hud: HudText::for_round(&state.round, &state.config.end_message),
            confetti: state.round.confetti(),
            phase: state.round.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_in(phase: RoundPhase, remaining: f32, score: u32) -> RoundState {
        let mut round = RoundState::new(40.0);
        round.phase = phase;
        round.remaining = remaining;
        round.score = score;
        round
    }

    #[test]
    fn test_idle_clears_score() {
        let hud = HudText::for_round(&RoundState::new(40.0), "Good Job!");
        assert_eq!(hud.score, "");
        assert_eq!(hud.timer, "40");
        assert_eq!(hud.status, "");
    }

    #[test]
    fn test_running_text() {
        let hud = HudText::for_round(&round_in(RoundPhase::Running, 12.7, 23), "Good Job!");
        assert_eq!(hud.score, "Score: 23");
        assert_eq!(hud.timer, "12");
        assert_eq!(hud.status, "");
        assert_eq!(hud.end_score, "");
    }

    #[test]
    fn test_paused_label() {
        let hud = HudText::for_round(&round_in(RoundPhase::Paused, 30.0, 8), "Good Job!");
        assert_eq!(hud.status, "- PAUSED -");
        assert_eq!(hud.score, "Score: 8");
    }

    #[test]
    fn test_end_text() {
        let hud = HudText::for_round(&round_in(RoundPhase::Ended, 0.0, 41), "Good Job!");
        assert_eq!(hud.status, "Good Job!");
        assert_eq!(hud.end_label, "Your Score: ");
        assert_eq!(hud.end_score, "41");
        assert_eq!(hud.score, "");
        assert_eq!(hud.timer, "");
    }

    #[test]
    fn test_frame_has_every_body() {
        let state = GameState::new(crate::GameConfig::default());
        let frame = Frame::capture(&state);
        assert_eq!(frame.bodies.len(), 10);
        assert!(frame.bodies.iter().all(|p| p.z == -0.1));
        assert!(!frame.confetti);
        assert_eq!(frame.alpha, 0.0);
    }
}
