//! Perception normalization - raw world snapshots to derived facts
//!
//! Turns the list of visible objects into the handful of facts the
//! preference cascade consumes: collision state, wall-ahead flag, the
//! distance-sorted item list and leaflet completion. Pure and
//! deterministic; the same snapshot always yields the same facts.

use crate::core::config::AgentConfig;
use crate::core::error::{AgentError, Result};
use crate::world::objects::{ObjectCategory, WorldObject};

/// Facts derived from one world snapshot
///
/// Rebuilt from scratch every cycle and replaced, never mutated.
#[derive(Debug, Clone)]
pub struct NormalizedFacts {
    /// The observer's own collision flag
    pub has_collided: bool,
    /// A brick within wall detection range
    pub wall_ahead: bool,
    /// Non-creature, non-brick objects within consideration range,
    /// nearest first
    pub sorted_items: Vec<WorldObject>,
    /// Every required leaflet present and satisfied
    pub leaflets_all_satisfied: bool,
}

/// Locate the observer's own creature record in a snapshot
pub fn creature_record(objects: &[WorldObject]) -> Result<&WorldObject> {
    objects
        .iter()
        .find(|o| o.category == ObjectCategory::Creature)
        .ok_or(AgentError::MissingCreatureRecord)
}

/// Normalize one world snapshot into [`NormalizedFacts`]
pub fn normalize(objects: &[WorldObject], config: &AgentConfig) -> Result<NormalizedFacts> {
    let creature = creature_record(objects)?;

    let wall_ahead = objects
        .iter()
        .any(|o| o.category == ObjectCategory::Brick && o.distance <= config.wall_detect_range);

    let mut sorted_items: Vec<WorldObject> = objects
        .iter()
        .filter(|o| o.category.is_item() && o.distance <= config.item_consider_range)
        .cloned()
        .collect();
    sorted_items.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let satisfied_count = creature.leaflets.iter().filter(|l| l.situation).count();
    let leaflets_all_satisfied = satisfied_count == config.required_leaflet_count
        && creature.leaflets.len() == config.required_leaflet_count;

    Ok(NormalizedFacts {
        has_collided: creature.collided,
        wall_ahead,
        sorted_items,
        leaflets_all_satisfied,
    })
}
