use std::fmt;

/// The three-way label the classifier predicts: how aware the subject is,
/// on the 0 / 5 / 10 scale.
///
/// The model's training order differs from numeric order: class index 0 is
/// level 0, index 1 is level 10, index 2 is level 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AwarenessLevel {
    Unaware,
    Partial,
    Aware,
}

impl AwarenessLevel {
    pub const ALL: [AwarenessLevel; 3] = [
        AwarenessLevel::Unaware,
        AwarenessLevel::Partial,
        AwarenessLevel::Aware,
    ];

    /// Map a model class index to its level; `None` for indices the model
    /// cannot produce.
    pub fn from_class_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(AwarenessLevel::Unaware),
            1 => Some(AwarenessLevel::Aware),
            2 => Some(AwarenessLevel::Partial),
            _ => None,
        }
    }

    /// The numeric label: 0, 5 or 10.
    pub fn value(self) -> u8 {
        match self {
            AwarenessLevel::Unaware => 0,
            AwarenessLevel::Partial => 5,
            AwarenessLevel::Aware => 10,
        }
    }

    /// Stable position in [`AwarenessLevel::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            AwarenessLevel::Unaware => 0,
            AwarenessLevel::Partial => 1,
            AwarenessLevel::Aware => 2,
        }
    }
}

impl fmt::Display for AwarenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
