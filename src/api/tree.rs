use wasm_bindgen::{prelude::wasm_bindgen, JsError};

use super::{parse_id, parse_kind, report, to_js_error, FileExplorer};

#[wasm_bindgen]
impl FileExplorer {
    /// Set the name for the next `create`
    #[wasm_bindgen(js_name = setDraftName)]
    pub fn set_draft_name(&mut self, name: String) {
        self.explorer.set_draft_name(name);
    }

    /// The pending name for `create`
    #[wasm_bindgen(js_name = draftName)]
    pub fn draft_name(&self) -> String {
        self.explorer.draft_name().to_owned()
    }

    /// Create a `file` or `folder` from the draft name, inside the open folder
    /// ### Returns
    /// - `true` If the node was created
    /// - `false` If the draft name is empty
    pub fn create(&mut self, kind: &str) -> Result<bool, JsError> {
        let kind = parse_kind(kind).map_err(to_js_error)?;
        Ok(report("create", self.explorer.create(kind)))
    }

    /// Create a `file` or `folder` under `parent`, or at the root if no parent is given
    #[wasm_bindgen(js_name = createAt)]
    pub fn create_at(
        &mut self,
        parent: Option<String>,
        name: &str,
        kind: &str,
    ) -> Result<bool, JsError> {
        let kind = parse_kind(kind).map_err(to_js_error)?;
        let parent = parent
            .as_deref()
            .map(parse_id)
            .transpose()
            .map_err(to_js_error)?;
        Ok(report("create", self.explorer.create_at(parent, name, kind)))
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<bool, JsError> {
        let id = parse_id(id).map_err(to_js_error)?;
        Ok(report("rename", self.explorer.rename(id, name)))
    }

    /// Delete a node and everything inside it
    pub fn delete(&mut self, id: &str) -> Result<bool, JsError> {
        let id = parse_id(id).map_err(to_js_error)?;
        Ok(report("delete", self.explorer.delete(id)))
    }

    /// Move a node into a folder
    #[wasm_bindgen(js_name = moveNode)]
    pub fn move_node(&mut self, id: &str, target: &str) -> Result<bool, JsError> {
        let id = parse_id(id).map_err(to_js_error)?;
        let target = parse_id(target).map_err(to_js_error)?;
        Ok(report("move", self.explorer.move_node(id, target)))
    }
}
