//! Abstract boundary to the world server
//!
//! The decision core never speaks the wire protocol itself; it depends on
//! these contracts. Commands are fire-and-forget: the scheduler does not
//! await confirmation before starting the next cycle.

use crate::core::error::Result;
use crate::core::types::{CreatureId, Vec2};
use crate::world::objects::{Inventory, Leaflet, WorldObject};
use async_trait::async_trait;

/// World state provider, action emitter and lifecycle control in one
/// object-safe trait.
///
/// Fetches may fail or time out; "nothing this tick" surfaces as
/// [`AgentError::NoDataAvailable`](crate::core::error::AgentError) and the
/// scheduler treats it as a skipped cycle.
#[async_trait]
pub trait WorldClient: Send + Sync {
    /// Everything currently visible to the creature, including its own record
    async fn fetch_creature_state(&self, creature: &CreatureId) -> Result<Vec<WorldObject>>;

    /// Contents of a sack/container
    async fn fetch_inventory(&self, container: &str) -> Result<Inventory>;

    /// Drive the creature toward a target position
    async fn send_move(&self, creature: &CreatureId, right_speed: f32, left_speed: f32, target: Vec2) -> Result<()>;

    /// Turn in place with the given wheel speeds and angular velocity
    async fn send_rotate(&self, creature: &CreatureId, right_speed: f32, left_speed: f32, angular: f32) -> Result<()>;

    /// Put a named item into the sack
    async fn send_sack_it(&self, creature: &CreatureId, item: &str) -> Result<()>;

    /// Consume a named item
    async fn send_eat_it(&self, creature: &CreatureId, item: &str) -> Result<()>;

    /// Halt all movement
    async fn send_stop(&self, creature: &CreatureId) -> Result<()>;

    /// Begin the creature's actuators in the world
    async fn start_creature(&self, creature: &CreatureId) -> Result<()>;

    /// Remove the creature from the world
    async fn terminate_creature(&self, creature: &CreatureId) -> Result<()>;
}

/// Read-only per-cycle observer of leaflet and sack state.
///
/// The scheduler pushes a snapshot each cycle for display purposes and
/// never blocks on or reads back from the sink.
pub trait LeafletMonitor: Send + Sync {
    fn observe(&self, leaflets: &[Leaflet], inventory: Option<&Inventory>);
}

/// Monitor that discards every snapshot
pub struct NullMonitor;

impl LeafletMonitor for NullMonitor {
    fn observe(&self, _leaflets: &[Leaflet], _inventory: Option<&Inventory>) {}
}
