use wasm_bindgen::{prelude::wasm_bindgen, JsError};

use super::{parse_id, report, to_js_error, FileExplorer};

#[wasm_bindgen]
impl FileExplorer {
    /// Open a folder, on double click
    #[wasm_bindgen(js_name = openFolder)]
    pub fn open_folder(&mut self, id: &str) -> Result<bool, JsError> {
        let id = parse_id(id).map_err(to_js_error)?;
        Ok(report("open folder", self.explorer.open_folder(id)))
    }

    /// Return to the root
    pub fn back(&mut self) {
        self.explorer.back();
    }

    #[wasm_bindgen(js_name = setSearchTerm)]
    pub fn set_search_term(&mut self, term: &str) {
        self.explorer.set_search_term(term);
    }

    #[wasm_bindgen(js_name = searchTerm)]
    pub fn search_term(&self) -> String {
        self.explorer.search_term().to_owned()
    }
}
