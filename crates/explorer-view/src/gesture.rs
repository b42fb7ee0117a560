use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a drag carries from the node it started on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub source_id: Uuid,
}

impl DragPayload {
    /// Complete the drag by dropping on `target_id`
    pub fn onto(self, target_id: Uuid) -> DragMessage {
        DragMessage {
            source_id: self.source_id,
            target_id,
        }
    }
}

/// A finished drag and drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragMessage {
    pub source_id: Uuid,
    pub target_id: Uuid,
}
