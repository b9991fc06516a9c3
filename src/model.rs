use std::collections::BTreeMap;

use serde::Deserialize;

/// One schedulable offering as served by the directory endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// The full activity set keyed by name. Replaced wholesale on every load,
/// never mutated in place; the server is the source of truth.
pub type ActivityDirectory = BTreeMap<String, Activity>;

impl Activity {
    /// Remaining capacity. Clamped at zero so an overfull roster never
    /// renders as negative spots.
    pub fn spots_left(&self) -> u32 {
        // The result never exceeds max_participants, so the cast is lossless.
        (self.max_participants as usize).saturating_sub(self.participants.len()) as u32
    }
}
