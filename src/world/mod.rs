pub mod client;
pub mod objects;
pub mod scripted;

pub use client::{LeafletMonitor, NullMonitor, WorldClient};
pub use objects::{Inventory, Leaflet, LeafletItem, ObjectCategory, WorldObject};
