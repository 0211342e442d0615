//! Game state and core simulation types
//!
//! The body pool is allocated once and recycled in place for the whole session;
//! bodies move between the pool's Active set and the spawn queue, never in or out
//! of existence.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::physics::Integrator;
use super::rng::SimRng;
use super::round::RoundState;
use super::scoring::ScoreTable;
use super::spawn::SpawnQueue;
use crate::settings::GameConfig;

/// Stable body identity, 1..=N
pub type BodyId = u32;

/// Whether a body is being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyState {
    /// Falling and visible, eligible to be caught or missed
    Active,
    /// Parked off-screen, waiting in (or about to enter) the spawn queue
    Recycling,
}

/// A falling stone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingBody {
    pub id: BodyId,
    pub pos: Vec3,
    pub vel: Vec3,
    /// Render/physics shape only; bodies never touch each other
    pub radius: f32,
    pub points: u32,
    pub state: BodyState,
}

impl FallingBody {
    pub fn new(id: BodyId, radius: f32, points: u32) -> Self {
        Self {
            id,
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            radius,
            points,
            state: BodyState::Recycling,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == BodyState::Active
    }

    /// Move off-screen and stop simulating
    pub fn park(&mut self, holding: Vec2, z: f32) {
        self.pos = holding.extend(z);
        self.vel = Vec3::ZERO;
        self.state = BodyState::Recycling;
    }

    /// Drop from `height` at horizontal position `x`, at rest
    pub fn release(&mut self, x: f32, height: f32, z: f32) {
        self.pos = Vec3::new(x, height, z);
        self.vel = Vec3::ZERO;
        self.state = BodyState::Active;
    }
}

/// The player-controlled basket (kinematic, driven by tracking)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collector {
    pub pos: Vec3,
    /// Catch box half-extents (x, y)
    pub hitbox: Vec2,
    /// Render half-size
    pub half_size: Vec3,
}

impl Collector {
    pub fn new(hitbox: Vec2, half_size: Vec3, z: f32) -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, z),
            hitbox,
            half_size,
        }
    }

    /// Follow the tracked screen-space position; x is mirrored
    pub fn track(&mut self, tracked: Vec2) {
        self.pos.x = -tracked.x;
        self.pos.y = tracked.y;
    }
}

/// Fixed-size pool of falling bodies, indexed by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPool {
    bodies: Vec<FallingBody>,
}

impl BodyPool {
    pub fn new(config: &GameConfig, scores: &ScoreTable) -> Self {
        let bodies = (1..=config.num_bodies as BodyId)
            .map(|id| {
                let mut body = FallingBody::new(id, config.body_radius, scores.points(id));
                body.park(config.holding_position, config.plane_z);
                body
            })
            .collect();
        Self { bodies }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&FallingBody> {
        let idx = (id as usize).checked_sub(1)?;
        self.bodies.get(idx)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut FallingBody> {
        let idx = (id as usize).checked_sub(1)?;
        self.bodies.get_mut(idx)
    }

    /// All bodies in id order
    pub fn iter(&self) -> impl Iterator<Item = &FallingBody> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FallingBody> {
        self.bodies.iter_mut()
    }

    pub fn as_mut_slice(&mut self) -> &mut [FallingBody] {
        &mut self.bodies
    }

    pub fn active_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_active()).count()
    }
}

/// Complete simulation state, owned by the driver and handed to every system
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub scores: ScoreTable,
    pub bodies: BodyPool,
    pub collector: Collector,
    pub spawn: SpawnQueue,
    pub physics: Integrator,
    pub round: RoundState,
    pub rng: SimRng,
}

impl GameState {
    /// Build a session: all bodies parked, queued in shuffled order, round Idle
    pub fn new(config: GameConfig) -> Self {
        let mut rng = SimRng::new(config.seed);
        let scores = ScoreTable::new(&config);
        let bodies = BodyPool::new(&config, &scores);

        let mut order: Vec<BodyId> = bodies.iter().map(|b| b.id).collect();
        rng.shuffle(&mut order);
        log::debug!("Initial spawn order: {:?}", order);

        Self {
            scores,
            bodies,
            collector: Collector::new(
                config.hitbox,
                config.collector_half_size,
                config.plane_z,
            ),
            spawn: SpawnQueue::new(order, config.spawn_interval),
            physics: Integrator::new(&config),
            round: RoundState::new(config.time_limit),
            rng,
            config,
        }
    }

    /// Park every Active body and append it to the queue (id order)
    pub fn recall_active(&mut self) -> usize {
        let mut recalled = 0;
        for body in self.bodies.iter_mut().filter(|b| b.is_active()) {
            body.park(self.config.holding_position, self.config.plane_z);
            self.spawn.push(body.id);
            recalled += 1;
        }
        recalled
    }

    /// Ids currently Active, in id order
    pub fn active_ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.bodies.iter().filter(|b| b.is_active()).map(|b| b.id)
    }
}
