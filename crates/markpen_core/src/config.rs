//! Engine configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};

use crate::MarkpenError;
use crate::annotate::DEFAULT_MARKER_LIMIT;
use crate::report::DEFAULT_CONTEXT_WIDTH;
use crate::session::DEFAULT_DEBOUNCE_MS;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration for rendering and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkpenConfig {
    /// Context characters on each side of a span in the report.
    #[serde(default = "default_context_width")]
    pub context_width: usize,

    /// Maximum ids listed in one marker group.
    #[serde(default = "default_marker_limit")]
    pub marker_limit: usize,

    /// Debounce delay for re-rendering after edits.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_context_width() -> usize {
    DEFAULT_CONTEXT_WIDTH
}

fn default_marker_limit() -> usize {
    DEFAULT_MARKER_LIMIT
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl MarkpenConfig {
    /// Config file names, in discovery order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".markpen.jsonc", ".markpen.json"];

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            context_width: DEFAULT_CONTEXT_WIDTH,
            marker_limit: DEFAULT_MARKER_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MarkpenError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| MarkpenError::config(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parses configuration from JSON (comments allowed) with schema validation.
    pub fn from_json(json: &str) -> Result<Self, MarkpenError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| MarkpenError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(MarkpenError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| MarkpenError::config(format!("Invalid config: {}", e)))
    }

    /// The debounce delay as a duration.
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Finds a config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}

impl Default for MarkpenConfig {
    fn default() -> Self {
        Self::new()
    }
}
