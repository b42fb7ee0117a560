use std::str::FromStr;

use anyhow::{anyhow, Context};
use explorer_tree::Tree;
use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// The explorer configuration, passed in by the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Start with the default folders and files
    pub seed: bool,
    /// Start with this tree instead. Takes precedence over `seed`.
    pub initial_tree: Option<Tree>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            seed: true,
            initial_tree: None,
        }
    }
}

impl Config {
    /// Read the config from a json string
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        explorer_tree::util::from_json(json).context("Invalid explorer config")
    }

    /// Read the config from a js object.
    /// `undefined` and `null` give the default config.
    pub fn from_js(value: JsValue) -> anyhow::Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| anyhow!("Invalid explorer config: {}", e))
    }

    /// The log level filter.
    /// Unknown levels fall back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or_else(|_| {
            log::warn!("Unknown log level `{}`, using info", self.log_level);
            LevelFilter::Info
        })
    }

    /// The tree the session starts with
    pub fn initial_tree(&self) -> Tree {
        match &self.initial_tree {
            Some(tree) => tree.clone(),
            None if self.seed => Tree::default_seed(),
            None => Tree::new(),
        }
    }
}
