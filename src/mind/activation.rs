//! Activation encoding - decision flags to sensory dimension levels
//!
//! Pure mapping with no state and no failure modes. Each named sensory
//! dimension is driven to maximum activation exactly when its decision
//! flag is set.

use crate::mind::preference::Decision;

/// Named sensory dimensions of the visual sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    WallAhead,
    ApproachItem,
    SackItem,
    EatItem,
    StopCreature,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::WallAhead,
        Dimension::ApproachItem,
        Dimension::SackItem,
        Dimension::EatItem,
        Dimension::StopCreature,
    ];

    fn index(self) -> usize {
        match self {
            Dimension::WallAhead => 0,
            Dimension::ApproachItem => 1,
            Dimension::SackItem => 2,
            Dimension::EatItem => 3,
            Dimension::StopCreature => 4,
        }
    }
}

/// Binary activation level of one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Min,
    Max,
}

impl From<bool> for Activation {
    fn from(flag: bool) -> Self {
        if flag {
            Activation::Max
        } else {
            Activation::Min
        }
    }
}

/// Activation level per dimension for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationVector {
    levels: [Activation; 5],
}

impl ActivationVector {
    pub fn get(&self, dimension: Dimension) -> Activation {
        self.levels[dimension.index()]
    }

    pub fn is_max(&self, dimension: Dimension) -> bool {
        self.get(dimension) == Activation::Max
    }

    /// Dimensions currently at maximum activation
    pub fn max_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL.into_iter().filter(|d| self.is_max(*d)).collect()
    }
}

/// Encode a decision into its activation vector
pub fn encode(decision: &Decision) -> ActivationVector {
    ActivationVector {
        levels: [
            decision.ahead.into(),
            decision.approach.into(),
            decision.sack_it.into(),
            decision.eat_it.into(),
            decision.stop_creature.into(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_decision_encodes_all_min() {
        let vector = encode(&Decision::none());
        for dim in Dimension::ALL {
            assert_eq!(vector.get(dim), Activation::Min);
        }
        assert!(vector.max_dimensions().is_empty());
    }

    #[test]
    fn test_each_flag_drives_its_dimension() {
        let flags_to_dim = [
            (Decision { ahead: true, ..Decision::none() }, Dimension::WallAhead),
            (Decision { approach: true, ..Decision::none() }, Dimension::ApproachItem),
            (Decision { sack_it: true, ..Decision::none() }, Dimension::SackItem),
            (Decision { eat_it: true, ..Decision::none() }, Dimension::EatItem),
            (Decision { stop_creature: true, ..Decision::none() }, Dimension::StopCreature),
        ];
        for (decision, expected) in flags_to_dim {
            let vector = encode(&decision);
            assert_eq!(vector.max_dimensions(), vec![expected]);
        }
    }

    #[test]
    fn test_round_trip_recovers_flag_set() {
        let decision = Decision {
            sack_it: true,
            ahead: false,
            ..Decision::none()
        };
        let vector = encode(&decision);
        assert!(vector.is_max(Dimension::SackItem));
        assert!(!vector.is_max(Dimension::WallAhead));
        assert!(!vector.is_max(Dimension::EatItem));
        assert!(!vector.is_max(Dimension::ApproachItem));
        assert!(!vector.is_max(Dimension::StopCreature));
    }
}
