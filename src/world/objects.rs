//! World object snapshots and leaflet state
//!
//! Everything here is an immutable per-cycle copy of server state. The
//! source of truth lives in the world server; the decision core only ever
//! reads these snapshots and discards them at the end of the cycle.

use crate::core::types::Vec2;
use serde::{Deserialize, Serialize};

/// Category of a world object as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectCategory {
    /// A creature, including the observer itself
    Creature,
    /// A wall segment
    Brick,
    /// A collectible jewel, identified by color
    Jewel,
    /// Edible fuel source
    Food,
}

impl ObjectCategory {
    /// Categories that never enter the sorted item list
    pub fn is_item(&self) -> bool {
        !matches!(self, ObjectCategory::Creature | ObjectCategory::Brick)
    }
}

/// Snapshot of one object visible to the creature this cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldObject {
    pub name: String,
    pub category: ObjectCategory,
    pub position: Vec2,
    /// Distance from the observing creature, precomputed by the server
    pub distance: f32,
    /// Material color; doubles as the jewel key for leaflet matching
    pub color: String,
    /// Collision flag, meaningful only on the observer's own record
    pub collided: bool,
    /// Fuel level, creature records only
    pub fuel: Option<f32>,
    /// Pitch in degrees, creature records only
    pub pitch: Option<f32>,
    /// Leaflets attached to this creature, empty for everything else
    pub leaflets: Vec<Leaflet>,
}

impl WorldObject {
    /// A non-creature object at a given distance
    pub fn item(name: impl Into<String>, category: ObjectCategory, position: Vec2, distance: f32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            position,
            distance,
            color: color.into(),
            collided: false,
            fuel: None,
            pitch: None,
            leaflets: Vec::new(),
        }
    }

    /// The observer's own creature record
    pub fn creature(name: impl Into<String>, fuel: f32, collided: bool, leaflets: Vec<Leaflet>) -> Self {
        Self {
            name: name.into(),
            category: ObjectCategory::Creature,
            position: Vec2::default(),
            distance: 0.0,
            color: String::new(),
            collided,
            fuel: Some(fuel),
            pitch: Some(0.0),
            leaflets,
        }
    }

    pub fn is_jewel(&self) -> bool {
        self.category == ObjectCategory::Jewel
    }
}

/// One required item line of a leaflet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeafletItem {
    /// Jewel color this line asks for
    pub item_key: String,
    /// How many have been delivered so far
    pub collected: u32,
    /// How many the leaflet requires in total
    pub total: u32,
}

impl LeafletItem {
    pub fn new(item_key: impl Into<String>, collected: u32, total: u32) -> Self {
        Self {
            item_key: item_key.into(),
            collected,
            total,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.collected >= self.total
    }
}

/// A quest descriptor: collect the listed jewels for a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaflet {
    pub id: u64,
    pub payment: u32,
    /// Satisfied flag reported by the server ("situation")
    pub situation: bool,
    pub items: Vec<LeafletItem>,
}

impl Leaflet {
    pub fn new(id: u64, payment: u32, situation: bool, items: Vec<LeafletItem>) -> Self {
        Self {
            id,
            payment,
            situation,
            items,
        }
    }
}

/// Per-material contents of the creature's sack, fetched once per cycle
/// for the visualization sink
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// (color, count) pairs for collected jewels
    pub jewels: Vec<(String, u32)>,
    /// Total food items carried
    pub food: u32,
}
