//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed physics sub-step only
//! - Seeded RNG only
//! - Stable iteration order (by body id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Bounds, Contact, detect, out_of_bounds, overlaps};
pub use physics::Integrator;
pub use rng::SimRng;
pub use round::{RoundPhase, RoundState, Transition};
pub use scoring::{ScoreTable, award};
pub use spawn::SpawnQueue;
pub use state::{BodyId, BodyPool, BodyState, Collector, FallingBody, GameState};
pub use tick::{TickInput, TickReport, tick};
