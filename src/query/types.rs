//! Query types

use serde::{Deserialize, Serialize};

/// Direction for closure traversal
///
/// For `is_a`, ascending walks toward more general terms and descending
/// toward more specific ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow triples backwards: from an object to its subjects
    #[default]
    Descend,
    /// Follow triples forwards: from a subject to its objects
    Ascend,
}
