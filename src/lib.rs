//! Rule-based cognitive agent for the WS3D world server
//!
//! Each cognitive cycle samples the world, normalizes what the creature
//! sees, runs a fixed priority cascade to pick a target, encodes the
//! outcome as binary activations, and lets a fixed rule set choose exactly
//! one action to emit back to the world. Rules are hand-authored and never
//! refined at runtime.

pub mod agent;
pub mod core;
pub mod mind;
pub mod rules;
pub mod world;
