use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar season bucket derived from the observation month.
///
/// Codes follow the fixed mapping used throughout the pipeline:
/// winter 0 (Dec-Feb), spring 1 (Mar-May), summer 2 (Jun-Aug),
/// fall 3 (Sep-Nov).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Numeric category code used by the one-hot encoder ordering.
    pub fn code(self) -> u8 {
        match self {
            Season::Winter => 0,
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        };
        write!(f, "{name}")
    }
}
