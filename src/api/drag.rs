use anyhow::anyhow;
use explorer_view::gesture::DragPayload;
use uuid::Uuid;
use wasm_bindgen::{prelude::wasm_bindgen, JsError};
use web_sys::{DataTransfer, DragEvent};

use super::{parse_id, report, to_js_error, FileExplorer};

/// The data transfer key the dragged node id is stored under
pub const DRAG_DATA_KEY: &str = "fileId";

#[wasm_bindgen]
impl FileExplorer {
    /// Store the dragged node on the event, on dragstart
    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&self, event: &DragEvent, id: &str) -> Result<(), JsError> {
        self.write_drag(event, id).map_err(to_js_error)
    }

    /// Cancel dragover so the node accepts drops
    #[wasm_bindgen(js_name = dragOver)]
    pub fn drag_over(&self, event: &DragEvent) {
        event.prevent_default();
    }

    /// Move the dragged node into `target_id`, on drop.
    /// ### Returns
    /// - `true` If the node was moved
    /// - `false` If the target is not a folder or the move would nest a folder in itself
    /// - `false` If the event carries no dragged node, e.g. a file dragged in from the desktop
    #[wasm_bindgen(js_name = drop)]
    pub fn handle_drop(&mut self, event: &DragEvent, target_id: &str) -> Result<bool, JsError> {
        event.prevent_default();
        let target = parse_id(target_id).map_err(to_js_error)?;
        let Some(payload) = dragged(event) else {
            log::debug!("drop ignored: no dragged node on the event");
            return Ok(false);
        };
        Ok(report("drop", self.explorer.handle_drop(payload.onto(target))))
    }
}

impl FileExplorer {
    fn write_drag(&self, event: &DragEvent, id: &str) -> anyhow::Result<()> {
        let id = parse_id(id)?;
        let payload = self
            .explorer
            .drag_start(id)
            .ok_or_else(|| anyhow!("No node to drag: {}", id))?;
        data_transfer(event)?
            .set_data(DRAG_DATA_KEY, &payload.source_id.to_string())
            .map_err(|e| anyhow!("Failed to set drag data: {:?}", e))
    }
}

/// The node being dragged, if the drag started in the explorer
fn dragged(event: &DragEvent) -> Option<DragPayload> {
    let data = event.data_transfer()?.get_data(DRAG_DATA_KEY).ok()?;
    payload_from_data(&data)
}

/// Read the drag data written by `dragStart`.
/// Anything else, including no data at all, is not ours.
pub(crate) fn payload_from_data(data: &str) -> Option<DragPayload> {
    Uuid::parse_str(data)
        .ok()
        .map(|source_id| DragPayload { source_id })
}

fn data_transfer(event: &DragEvent) -> anyhow::Result<DataTransfer> {
    event
        .data_transfer()
        .ok_or_else(|| anyhow!("Drag event carries no data transfer"))
}
