//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! A Wander evaluation needs `&mut` access to the agent it steers and `&mut`
//! access to that agent's RNG at the same time.  Keeping RNGs in a separate
//! `AgentRngs` struct lets the tick loop hand out both borrows without
//! fighting the borrow checker:
//!
//! ```ignore
//! let rng = sim.rngs.get_mut(id);
//! let mut agent = sim.agents.agent_mut(id)?;
//! let output = behavior.calculate_steering(&ctx, &mut agent, rng, debug);
//! ```

use steer_core::geom::delta_angle_degrees;
use steer_core::{AgentId, AgentRng, Vec2};

use crate::{SteeringActor, SteeringAgent};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&mut AgentStore` borrows.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematic state ───────────────────────────────────────────────────
    pub position: Vec<Vec2>,

    /// Heading in degrees, kept in `(-180, 180]`.
    pub rotation: Vec<f32>,

    /// Velocity produced by the host locomotion model on the last tick.
    pub velocity: Vec<Vec2>,

    // ── Limits ────────────────────────────────────────────────────────────
    pub max_linear_speed: Vec<f32>,

    /// Degrees per second.
    pub max_angular_speed: Vec<f32>,

    // ── Per-tick host input ───────────────────────────────────────────────
    /// Movement input accumulated by the integration step this tick.
    /// Consumed and cleared by the locomotion model.
    pub movement_input: Vec<Vec2>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `true` if `agent` indexes a stored agent.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Mutable handle implementing [`SteeringAgent`] and [`SteeringActor`].
    ///
    /// Returns `None` if `agent` is out of range.
    pub fn agent_mut(&mut self, agent: AgentId) -> Option<AgentMut<'_>> {
        if self.contains(agent) {
            Some(AgentMut { store: self, id: agent })
        } else {
            None
        }
    }

    // ── Package-private constructors used by AgentStoreBuilder ────────────

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            count:             0,
            position:          Vec::with_capacity(capacity),
            rotation:          Vec::with_capacity(capacity),
            velocity:          Vec::with_capacity(capacity),
            max_linear_speed:  Vec::with_capacity(capacity),
            max_angular_speed: Vec::with_capacity(capacity),
            movement_input:    Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(
        &mut self,
        position:          Vec2,
        rotation:          f32,
        max_linear_speed:  f32,
        max_angular_speed: f32,
    ) -> AgentId {
        let id = AgentId(self.count as u32);
        self.position.push(position);
        self.rotation.push(delta_angle_degrees(0.0, rotation));
        self.velocity.push(Vec2::ZERO);
        self.max_linear_speed.push(max_linear_speed);
        self.max_angular_speed.push(max_angular_speed);
        self.movement_input.push(Vec2::ZERO);
        self.count += 1;
        id
    }
}

// ── AgentMut ──────────────────────────────────────────────────────────────────

/// A borrowed view of one agent inside an [`AgentStore`].
///
/// This is what the simulation hands to behaviors and to the integration
/// step.  It is only ever constructed for in-range ids, so the accessors
/// index without further checks.
pub struct AgentMut<'a> {
    store: &'a mut AgentStore,
    id:    AgentId,
}

impl AgentMut<'_> {
    #[inline]
    fn i(&self) -> usize {
        self.id.index()
    }

    /// Movement input accumulated so far this tick.
    #[inline]
    pub fn movement_input(&self) -> Vec2 {
        self.store.movement_input[self.i()]
    }
}

impl SteeringAgent for AgentMut<'_> {
    #[inline]
    fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    fn position(&self) -> Vec2 {
        self.store.position[self.i()]
    }

    #[inline]
    fn rotation(&self) -> f32 {
        self.store.rotation[self.i()]
    }

    #[inline]
    fn linear_velocity(&self) -> Vec2 {
        self.store.velocity[self.i()]
    }

    #[inline]
    fn max_linear_speed(&self) -> f32 {
        self.store.max_linear_speed[self.i()]
    }

    #[inline]
    fn set_max_linear_speed(&mut self, speed: f32) {
        let i = self.i();
        self.store.max_linear_speed[i] = speed;
    }

    #[inline]
    fn max_angular_speed(&self) -> f32 {
        self.store.max_angular_speed[self.i()]
    }
}

impl SteeringActor for AgentMut<'_> {
    #[inline]
    fn add_movement_input(&mut self, input: Vec2) {
        let i = self.i();
        self.store.movement_input[i] += input;
    }

    fn set_rotation(&mut self, degrees: f32) {
        let i = self.i();
        self.store.rotation[i] = delta_angle_degrees(0.0, degrees);
    }
}
