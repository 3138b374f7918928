//! Fixed action rules and the selection policy
//!
//! One rule per action, each gated on a single sensory dimension. A rule's
//! support is 1.0 when its dimension sits at maximum activation, 0.0
//! otherwise. No rule refinement or weight learning ever happens: the set
//! is built once at startup, validated, and immutable thereafter.

use crate::core::error::{AgentError, Result};
use crate::mind::activation::{ActivationVector, Dimension};

/// Every action the creature can take
///
/// The discriminant order defines the tie-break: when more than one rule
/// fires (an invariant violation upstream), the lowest identifier wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CreatureAction {
    DoNothing,
    RotateClockwise,
    GoToItem,
    SackItem,
    EatItem,
    StopCreature,
}

/// A fixed rule: one action gated on one dimension
#[derive(Debug, Clone, Copy)]
pub struct ActionRule {
    pub action: CreatureAction,
    pub dimension: Dimension,
}

impl ActionRule {
    /// Eligibility of this rule under the current activations
    pub fn support(&self, activations: &ActivationVector) -> f32 {
        if activations.is_max(self.dimension) {
            1.0
        } else {
            0.0
        }
    }
}

/// The fixed rule set, validated at startup
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ActionRule>,
}

impl RuleSet {
    /// The five standard rules of the creature agent
    pub fn standard() -> Self {
        Self {
            rules: vec![
                ActionRule { action: CreatureAction::RotateClockwise, dimension: Dimension::WallAhead },
                ActionRule { action: CreatureAction::GoToItem, dimension: Dimension::ApproachItem },
                ActionRule { action: CreatureAction::SackItem, dimension: Dimension::SackItem },
                ActionRule { action: CreatureAction::EatItem, dimension: Dimension::EatItem },
                ActionRule { action: CreatureAction::StopCreature, dimension: Dimension::StopCreature },
            ],
        }
    }

    /// Build a custom rule set, rejecting malformed configurations
    pub fn new(rules: Vec<ActionRule>) -> Result<Self> {
        let set = Self { rules };
        set.validate()?;
        Ok(set)
    }

    /// A malformed rule set is fatal at startup, never a runtime surprise
    pub fn validate(&self) -> Result<()> {
        if self.rules.is_empty() {
            return Err(AgentError::InvalidConfiguration("empty rule set".into()));
        }

        for (i, rule) in self.rules.iter().enumerate() {
            for other in &self.rules[i + 1..] {
                if rule.dimension == other.dimension {
                    return Err(AgentError::InvalidConfiguration(format!(
                        "dimension {:?} gates more than one rule",
                        rule.dimension
                    )));
                }
                if rule.action == other.action {
                    return Err(AgentError::InvalidConfiguration(format!(
                        "action {:?} appears in more than one rule",
                        rule.action
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn rules(&self) -> &[ActionRule] {
        &self.rules
    }

    /// Pick the single action to execute this cycle.
    ///
    /// Exactly one rule with support 1.0 fires. Zero firing rules fall
    /// through to the default rotate. Multiple firing rules cannot happen
    /// while the preference cascade holds its mutual-exclusion invariant,
    /// but the lowest action identifier wins deterministically if they
    /// ever do.
    pub fn select_action(&self, activations: &ActivationVector) -> CreatureAction {
        self.rules
            .iter()
            .filter(|rule| rule.support(activations) >= 1.0)
            .map(|rule| rule.action)
            .min()
            .unwrap_or(CreatureAction::RotateClockwise)
    }
}
