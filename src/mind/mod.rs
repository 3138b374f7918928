//! The decision core: perceive, prefer, encode

pub mod activation;
pub mod perception;
pub mod preference;

pub use activation::{encode, Activation, ActivationVector, Dimension};
pub use perception::{creature_record, normalize, NormalizedFacts};
pub use preference::{select_preference, Decision};
