//! Preference selection - the priority cascade over normalized facts
//!
//! Evaluates a fixed priority order and produces at most one target plus
//! the boolean decision flags feeding the activation encoder. First
//! matching branch wins:
//!
//! 1. collision recovery overrides everything: grab the nearest item;
//! 2. nothing in range, or a wall ahead: empty decision, the action
//!    selector falls through to the default rotate;
//! 3. otherwise target the nearest item, sack/eat it when within reach,
//!    or re-target toward leaflet-relevant jewels when farther out.
//!
//! The decision is cycle-local: returned by value and threaded into the
//! emitter for this cycle only, never persisted.

use crate::core::config::AgentConfig;
use crate::mind::perception::NormalizedFacts;
use crate::world::objects::{Leaflet, WorldObject};

/// Outcome of the preference cascade for one cycle
///
/// At most one of `sack_it`, `eat_it`, `approach` is set. `stop_creature`
/// is set only when every leaflet is satisfied, and `ahead` marks the
/// explicit wall-avoidance fallback of the far-candidate branch.
#[derive(Debug, Clone, Default)]
pub struct Decision {
    /// The world object chosen as this cycle's focus, if any
    pub target: Option<WorldObject>,
    /// Wall-avoidance fallback: rotate away
    pub ahead: bool,
    /// Move toward the target
    pub approach: bool,
    /// Put the target into the sack
    pub sack_it: bool,
    /// Consume the target
    pub eat_it: bool,
    /// Mission complete: halt
    pub stop_creature: bool,
}

impl Decision {
    /// Empty decision: no target, no flags. Nothing fires and the action
    /// selector emits the default rotate.
    pub fn none() -> Self {
        Self::default()
    }

    fn collect(target: WorldObject) -> Self {
        let is_jewel = target.is_jewel();
        Self {
            sack_it: is_jewel,
            eat_it: !is_jewel,
            target: Some(target),
            ..Self::default()
        }
    }
}

/// Run the priority cascade over one cycle's facts
pub fn select_preference(
    facts: &NormalizedFacts,
    fuel: f32,
    leaflets: &[Leaflet],
    config: &AgentConfig,
) -> Decision {
    // Branch 1: collision recovery. Sack or eat whatever is closest.
    if facts.has_collided {
        return match facts.sorted_items.first() {
            Some(nearest) => Decision::collect(nearest.clone()),
            None => Decision::none(),
        };
    }

    // Branch 2: nothing to chase, or a wall in the way.
    if facts.sorted_items.is_empty() || facts.wall_ahead {
        return Decision::none();
    }

    // Branch 3: nearest item is the candidate.
    let mut candidate = facts.sorted_items[0].clone();

    // The walled arm is unreachable here (branch 2 already excluded
    // wall_ahead), but the source reads the flag at this point and the
    // behavior is preserved as written.
    let sack_distance = if facts.wall_ahead {
        config.sack_distance_walled
    } else {
        config.sack_distance_clear
    };

    if candidate.distance < sack_distance {
        return Decision::collect(candidate);
    }

    // Far candidate: find the nearest jewel still owed to a leaflet.
    // Later leaflet lines overwrite earlier matches.
    let mut preference_jewel = candidate.clone();
    for leaflet in leaflets {
        for item in leaflet.items.iter().filter(|i| !i.is_complete()) {
            if let Some(jewel) = facts
                .sorted_items
                .iter()
                .find(|o| o.is_jewel() && o.color == item.item_key)
            {
                preference_jewel = jewel.clone();
            }
        }
    }

    if facts.leaflets_all_satisfied {
        // Mission complete: stop, regardless of what remains in view.
        return Decision {
            stop_creature: true,
            ..Decision::default()
        };
    }

    if candidate.distance >= preference_jewel.distance {
        candidate = preference_jewel;
    }

    if fuel > config.fuel_reserve && candidate.is_jewel() {
        Decision {
            approach: true,
            target: Some(candidate),
            ..Decision::default()
        }
    } else if !candidate.is_jewel() && candidate.distance < config.approach_distance {
        Decision {
            approach: true,
            target: Some(candidate),
            ..Decision::default()
        }
    } else {
        Decision {
            ahead: true,
            ..Decision::default()
        }
    }
}
