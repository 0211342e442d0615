//! Wall-clock driver
//!
//! The host calls `Session::tick` on its own cadence with a monotonic timestamp.
//! The session turns consecutive timestamps into `dt` and runs one simulation tick.

use crate::hud::Frame;
use crate::settings::GameConfig;
use crate::sim::{GameState, TickInput, TickReport, tick};

/// One play session on one device
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    last_time_ms: Option<f64>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            last_time_ms: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance to `timestamp_ms`.
    ///
    /// The first call only records the timestamp and follows the tracked
    /// collector position. A timestamp earlier than the
    /// previous one counts as zero elapsed time.
    pub fn tick(&mut self, timestamp_ms: f64, input: &TickInput) -> (Frame, TickReport) {
        let report = match self.last_time_ms {
            Some(last) => {
                let dt = ((timestamp_ms - last) / 1000.0) as f32;
                tick(&mut self.state, input, dt)
            }
            None => {
                if let Some(tracked) = input.tracked {
                    self.state.collector.track(tracked);
                }
                log::debug!("First tick at {}ms, waiting for a delta", timestamp_ms);
                TickReport::default()
            }
        };
        self.last_time_ms = Some(timestamp_ms);

        (Frame::capture(&self.state), report)
    }

    /// Advance by an explicit delta, bypassing the clock
    pub fn step(&mut self, dt: f32, input: &TickInput) -> (Frame, TickReport) {
        let report = tick(&mut self.state, input, dt);
        (Frame::capture(&self.state), report)
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RoundPhase;
    use glam::Vec2;

    fn start() -> TickInput {
        TickInput {
            start: true,
            tracked: Some(Vec2::new(0.0, 1.0)),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_tick_only_records_time() {
        let mut session = Session::new(GameConfig::default());
        let (frame, report) = session.tick(123_456.0, &start());
        assert_eq!(report, TickReport::default());
        assert_eq!(frame.phase, RoundPhase::Idle);
        assert_eq!(session.state().round.remaining, 40.0);
    }

    #[test]
    fn test_first_tick_follows_tracking() {
        let mut session = Session::new(GameConfig::default());
        let input = TickInput {
            start: true,
            tracked: Some(Vec2::new(0.04, -0.12)),
            ..Default::default()
        };
        let (frame, _) = session.tick(0.0, &input);
        assert_eq!(frame.collector, glam::Vec3::new(-0.04, -0.12, -0.1));
        assert_eq!(frame.phase, RoundPhase::Idle);
    }

    #[test]
    fn test_step_with_explicit_delta() {
        let mut session = Session::new(GameConfig::default());
        let (frame, report) = session.step(0.03, &start());
        assert_eq!(frame.phase, RoundPhase::Running);
        assert_eq!(report.substeps, 1);
        // 0.03s = one 1/60s step plus 0.8 of another
        assert!((frame.alpha - 0.8).abs() < 1e-3);
        assert!((session.state().round.remaining - 39.97).abs() < 1e-4);

        let (frame, _) = session.step(0.0, &start());
        assert!((frame.alpha - 0.8).abs() < 1e-3);
    }

    #[test]
    fn test_delta_from_timestamps() {
        let mut session = Session::new(GameConfig::default());
        session.tick(1_000.0, &start());
        session.tick(1_500.0, &start());
        let remaining = session.state().round.remaining;
        assert!((remaining - 39.5).abs() < 1e-4);
    }

    #[test]
    fn test_clock_going_backwards_is_zero_dt() {
        let mut session = Session::new(GameConfig::default());
        session.tick(5_000.0, &start());
        session.tick(6_000.0, &start());
        session.tick(4_000.0, &start());
        assert!((session.state().round.remaining - 39.0).abs() < 1e-4);
    }

    #[test]
    fn test_scenario_ends_at_forty_seconds() {
        let mut session = Session::new(GameConfig::default());
        session.tick(0.0, &start());

        for second in 1..=39 {
            let (frame, _) = session.tick(second as f64 * 1000.0, &start());
            assert_eq!(frame.phase, RoundPhase::Running, "t={second}");
            assert!(!frame.confetti);
        }

        let (frame, _) = session.tick(40_000.0, &start());
        assert_eq!(frame.phase, RoundPhase::Ended);
        assert!(frame.confetti);
        assert_eq!(frame.hud.timer, "");

        let (frame, _) = session.tick(41_000.0, &start());
        assert!(frame.confetti);

        let (frame, _) = session.tick(42_000.0, &TickInput::default());
        assert!(!frame.confetti);
        assert_eq!(frame.phase, RoundPhase::Idle);
        assert_eq!(session.state().round.remaining, 40.0);
        assert_eq!(session.state().round.score, 0);
    }
}
