pub mod action_rules;

pub use action_rules::{ActionRule, CreatureAction, RuleSet};
