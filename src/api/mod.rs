//! The explorer is exposed to the page as a single handle.
//! Every method takes plain js values, ids are passed as strings.
//! Rendering stays on the js side, it reads `visible()` and `location()` after each call.
pub mod drag;
pub mod edit;
pub mod navigation;
pub mod tree;

use anyhow::{bail, Context};
use explorer_tree::{Kind, Outcome, Tree};
use explorer_view::Explorer;
use serde::Serialize;
use uuid::Uuid;
use wasm_bindgen::{prelude::wasm_bindgen, JsError, JsValue};

use crate::config::Config;

/// The explorer handle owned by the page
#[wasm_bindgen]
pub struct FileExplorer {
    explorer: Explorer,
}

#[wasm_bindgen]
impl FileExplorer {
    /// Create the explorer.
    /// `config` may be `undefined` for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FileExplorer, JsError> {
        let config = Config::from_js(config).map_err(to_js_error)?;
        Ok(Self::with_config(&config))
    }

    /// The nodes to render, in order
    pub fn visible(&self) -> Result<JsValue, JsError> {
        to_js(self.explorer.visible())
    }

    /// The current folder, if any, and whether to show the back button
    pub fn location(&self) -> Result<JsValue, JsError> {
        to_js(&self.explorer.location())
    }

    /// Whether anything changed since the last call
    #[wasm_bindgen(js_name = takeUpdated)]
    pub fn take_updated(&mut self) -> bool {
        self.explorer.take_updated()
    }

    /// Save the whole tree as json
    pub fn snapshot(&self) -> Result<String, JsError> {
        self.explorer
            .tree()
            .to_json()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace the whole tree with a json snapshot
    pub fn restore(&mut self, json: &str) -> Result<(), JsError> {
        let tree = Tree::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        self.explorer.load(tree);
        Ok(())
    }
}

impl FileExplorer {
    /// Create the explorer from an already parsed config
    pub fn with_config(config: &Config) -> Self {
        log::set_max_level(config.level_filter());
        let tree = config.initial_tree();
        log::info!("Starting explorer with {} nodes", tree.len());
        Self {
            explorer: Explorer::new(tree),
        }
    }

    /// The view controller behind the handle
    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }
}

/// Parse a node id coming from the page
pub(crate) fn parse_id(id: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(id).with_context(|| format!("Invalid node id: {}", id))
}

/// Parse a node kind coming from the page
pub(crate) fn parse_kind(kind: &str) -> anyhow::Result<Kind> {
    match kind {
        "file" => Ok(Kind::File),
        "folder" => Ok(Kind::Folder),
        _ => bail!("Invalid node kind: {}", kind),
    }
}

/// Log why an operation was dropped.
/// The page only learns whether it applied.
pub(crate) fn report(operation: &str, outcome: Outcome) -> bool {
    if let Some(error) = outcome.error() {
        log::debug!("{} ignored: {}", operation, error);
    }
    outcome.is_applied()
}

pub(crate) fn to_js_error(error: anyhow::Error) -> JsError {
    log::warn!("{:#}", error);
    JsError::new(&format!("{:#}", error))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}
