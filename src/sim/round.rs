//! Round phase machine and countdown
//!
//! | From    | Condition                | To      |
//! |---------|--------------------------|---------|
//! | any     | start signal de-asserted | Idle    |
//! | Idle    | start signal asserted    | Running |
//! | Running | pause toggled            | Paused  |
//! | Paused  | pause toggled            | Running |
//! | Running | remaining time hits 0    | Ended   |
//!
//! Leaving a round for Idle is always a full reset. Ended only goes back to
//! Running through Idle.

use serde::{Deserialize, Serialize};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Start signal not asserted; timer full, score zero
    #[default]
    Idle,
    /// Countdown running, bodies falling
    Running,
    /// Round begun but suspended; nothing moves
    Paused,
    /// Time ran out
    Ended,
}

/// A phase change applied during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: RoundPhase,
    pub to: RoundPhase,
}

/// Timer, score and phase for the current round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// Seconds left, never negative
    pub remaining: f32,
    pub score: u32,
    pub phase: RoundPhase,
    pub time_limit: f32,
}

impl RoundState {
    pub fn new(time_limit: f32) -> Self {
        Self {
            remaining: time_limit,
            score: 0,
            phase: RoundPhase::Idle,
            time_limit,
        }
    }

    /// Back to `{time_limit, 0, Idle}`
    pub fn reset(&mut self) {
        self.remaining = self.time_limit;
        self.score = 0;
        self.phase = RoundPhase::Idle;
    }

    /// Apply the sampled control inputs at tick start
    pub fn apply_controls(&mut self, start: bool, pause: bool) -> Option<Transition> {
        let from = self.phase;

        if !start {
            self.reset();
            return (from != RoundPhase::Idle).then_some(Transition {
                from,
                to: RoundPhase::Idle,
            });
        }

        let to = match (from, pause) {
            (RoundPhase::Idle, _) => RoundPhase::Running,
            (RoundPhase::Running, true) => RoundPhase::Paused,
            (RoundPhase::Paused, true) => RoundPhase::Running,
            (phase, _) => phase,
        };

        if to == from {
            return None;
        }
        self.phase = to;
        Some(Transition { from, to })
    }

    /// Run the countdown by `dt`, floored at zero.
    ///
    /// Only counts while Running. Returns the Running -> Ended transition on the
    /// tick the timer reaches zero.
    pub fn countdown(&mut self, dt: f32) -> Option<Transition> {
        if self.phase != RoundPhase::Running {
            return None;
        }

        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        if self.remaining > 0.0 {
            return None;
        }

        self.phase = RoundPhase::Ended;
        Some(Transition {
            from: RoundPhase::Running,
            to: RoundPhase::Ended,
        })
    }

    /// Gameplay (physics, catches, spawning) runs only here
    #[inline]
    pub fn is_live(&self) -> bool {
        self.phase == RoundPhase::Running && self.remaining > 0.0
    }

    /// Celebration asserted for as long as the round stays Ended
    #[inline]
    pub fn confetti(&self) -> bool {
        self.phase == RoundPhase::Ended
    }

    /// Whole seconds left, rounded down
    pub fn whole_seconds(&self) -> u32 {
        self.remaining.floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> RoundState {
        let mut round = RoundState::new(40.0);
        round.apply_controls(true, false);
        round
    }

    #[test]
    fn test_start_from_idle() {
        let mut round = RoundState::new(40.0);
        let t = round.apply_controls(true, false);
        assert_eq!(
            t,
            Some(Transition {
                from: RoundPhase::Idle,
                to: RoundPhase::Running
            })
        );
        assert_eq!(round.phase, RoundPhase::Running);
    }

    #[test]
    fn test_idle_stays_idle_without_signal() {
        let mut round = RoundState::new(40.0);
        assert_eq!(round.apply_controls(false, false), None);
        assert_eq!(round.phase, RoundPhase::Idle);
    }

    #[test]
    fn test_countdown_floors_at_zero() {
        let mut round = running();
        assert_eq!(round.countdown(39.5), None);
        assert_eq!(round.whole_seconds(), 0);
        let t = round.countdown(2.0);
        assert_eq!(t.map(|t| t.to), Some(RoundPhase::Ended));
        assert_eq!(round.remaining, 0.0);
        assert!(round.confetti());
    }

    #[test]
    fn test_pause_toggle() {
        let mut round = running();
        round.apply_controls(true, true);
        assert_eq!(round.phase, RoundPhase::Paused);
        assert_eq!(round.countdown(5.0), None);
        assert_eq!(round.remaining, 40.0);
        round.apply_controls(true, true);
        assert_eq!(round.phase, RoundPhase::Running);
    }

    #[test]
    fn test_ended_ignores_pause_and_start() {
        let mut round = running();
        round.countdown(40.0);
        assert_eq!(round.apply_controls(true, true), None);
        assert_eq!(round.apply_controls(true, false), None);
        assert_eq!(round.phase, RoundPhase::Ended);
    }

    #[test]
    fn test_release_is_full_reset_from_any_phase() {
        for pause_first in [false, true] {
            let mut round = running();
            round.score = 17;
            round.countdown(12.3);
            if pause_first {
                round.apply_controls(true, true);
            }
            let t = round.apply_controls(false, false);
            assert_eq!(t.map(|t| t.to), Some(RoundPhase::Idle));
            assert_eq!(round.remaining, 40.0);
            assert_eq!(round.score, 0);
            assert_eq!(round.phase, RoundPhase::Idle);
        }

        let mut round = running();
        round.countdown(40.0);
        round.apply_controls(false, false);
        assert_eq!(round.phase, RoundPhase::Idle);
        assert!(!round.confetti());
    }
}
