use wasm_bindgen::{prelude::wasm_bindgen, JsError};

use super::{parse_id, report, to_js_error, FileExplorer};

// Rename mode. The page switches a node to an input while it is being edited.
#[wasm_bindgen]
impl FileExplorer {
    #[wasm_bindgen(js_name = beginEdit)]
    pub fn begin_edit(&mut self, id: &str) -> Result<(), JsError> {
        let id = parse_id(id).map_err(to_js_error)?;
        self.explorer
            .begin_edit(id)
            .map_err(|e| to_js_error(e.into()))
    }

    #[wasm_bindgen(js_name = setEditName)]
    pub fn set_edit_name(&mut self, id: &str, name: String) -> Result<(), JsError> {
        let id = parse_id(id).map_err(to_js_error)?;
        self.explorer
            .set_edit_name(id, name)
            .map_err(|e| to_js_error(e.into()))
    }

    /// The current input value of a node in rename mode
    #[wasm_bindgen(js_name = editName)]
    pub fn edit_name(&self, id: &str) -> Option<String> {
        let id = parse_id(id).ok()?;
        self.explorer.edit_name(id).map(str::to_owned)
    }

    /// Rename to the input value, on blur or enter
    #[wasm_bindgen(js_name = commitEdit)]
    pub fn commit_edit(&mut self, id: &str) -> Result<bool, JsError> {
        let id = parse_id(id).map_err(to_js_error)?;
        let outcome = self
            .explorer
            .commit_edit(id)
            .map_err(|e| to_js_error(e.into()))?;
        Ok(report("rename", outcome))
    }

    #[wasm_bindgen(js_name = cancelEdit)]
    pub fn cancel_edit(&mut self, id: &str) -> Result<(), JsError> {
        let id = parse_id(id).map_err(to_js_error)?;
        self.explorer
            .cancel_edit(id)
            .map_err(|e| to_js_error(e.into()))
    }

    #[wasm_bindgen(js_name = isEditing)]
    pub fn is_editing(&self, id: &str) -> bool {
        parse_id(id).is_ok_and(|id| self.explorer.is_editing(id))
    }
}
