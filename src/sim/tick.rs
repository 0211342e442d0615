//! Per-tick simulation pipeline
//!
//! Order within a tick is fixed: controls, integration, catches and misses (by id),
//! spawn release, countdown. A body recycled this tick is already at the queue tail
//! when the spawner runs.

use glam::Vec2;

use super::collision::{Bounds, Contact, detect};
use super::round::{RoundPhase, Transition};
use super::scoring::award;
use super::state::{BodyId, GameState};

/// Inputs sampled once at tick start
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Round start signal (held, not edge-triggered)
    pub start: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Tracked collector position in screen space; `None` keeps the last one
    pub tracked: Option<Vec2>,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Phase changes, in the order they happened
    pub transitions: Vec<Transition>,
    /// Fixed physics steps taken
    pub substeps: u32,
    /// Caught bodies and the points each earned (0 once time is up)
    pub caught: Vec<(BodyId, u32)>,
    /// Bodies that left the play area
    pub missed: Vec<BodyId>,
    /// Body released from the spawn queue
    pub released: Option<BodyId>,
}

impl TickReport {
    /// Bodies moved back to the queue this tick
    pub fn recycled(&self) -> usize {
        self.caught.len() + self.missed.len()
    }
}

/// Advance the game state by one host tick of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickReport {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let mut report = TickReport::default();

    if let Some(tracked) = input.tracked {
        state.collector.track(tracked);
    }

    if let Some(transition) = state.round.apply_controls(input.start, input.pause) {
        on_transition(state, transition);
        report.transitions.push(transition);
    }

    if !state.round.is_live() {
        return report;
    }

    report.substeps = state.physics.advance(state.bodies.as_mut_slice(), dt);

    recycle_contacts(state, &mut report);

    if let Some(id) = state.spawn.advance(dt) {
        release(state, id);
        report.released = Some(id);
    }

    if let Some(transition) = state.round.countdown(dt) {
        on_transition(state, transition);
        report.transitions.push(transition);
    }

    report
}

/// Catches first, then misses, each body in id order
fn recycle_contacts(state: &mut GameState, report: &mut TickReport) {
    let bounds = Bounds {
        lower: state.config.lower_bound,
        horizontal: state.config.horizontal_bound,
    };
    let holding = state.config.holding_position;
    let z = state.config.plane_z;

    for body in state.bodies.iter_mut() {
        let Some(contact) = detect(body, &state.collector, &bounds) else {
            continue;
        };

        body.park(holding, z);
        state.spawn.push(body.id);

        match contact {
            Contact::Catch => {
                let points = award(&mut state.round, &state.scores, body.id).unwrap_or(0);
                log::debug!(
                    "Caught body {} for {} (score {})",
                    body.id,
                    points,
                    state.round.score
                );
                report.caught.push((body.id, points));
            }
            Contact::Miss => {
                log::trace!("Body {} missed", body.id);
                report.missed.push(body.id);
            }
        }
    }
}

/// Drop a queued body from the top at a random x
fn release(state: &mut GameState, id: BodyId) {
    let x = state.rng.symmetric(state.config.spawn_half_range);
    let height = state.config.drop_height;
    let z = state.config.plane_z;

    if let Some(body) = state.bodies.get_mut(id) {
        body.release(x, height, z);
        log::debug!("Released body {} at x={:.3}", id, x);
    }
}

fn on_transition(state: &mut GameState, transition: Transition) {
    match transition.to {
        RoundPhase::Running if transition.from == RoundPhase::Idle => {
            log::info!("Round started ({}s)", state.round.time_limit);
        }
        RoundPhase::Idle => {
            let recalled = state.recall_active();
            state.spawn.reset_wait();
            state.physics.reset();
            log::info!(
                "Round reset from {:?} ({} bodies recalled)",
                transition.from,
                recalled
            );
        }
        RoundPhase::Ended => {
            state.recall_active();
            log::info!("Round ended, final score {}", state.round.score);
        }
        RoundPhase::Paused => log::info!("Round paused"),
        RoundPhase::Running => log::info!("Round resumed"),
    }
}
