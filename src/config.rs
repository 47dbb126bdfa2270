//! Game configuration
//!
//! Read once at startup from JSON. On the web the JSON is the text of a
//! `<script type="application/json" id="breakout-config">` element; natively
//! it comes from a file.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Brick grid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: usize,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 5,
            width: 75.0,
            height: 20.0,
            padding: 10.0,
            offset_top: 30.0,
            offset_left: 30.0,
        }
    }
}

impl BrickLayout {
    /// Largest grid a config may ask for
    pub const MAX_BRICKS: usize = 4096;

    /// Total number of bricks in the grid (saturates instead of overflowing)
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-left corner of the brick at (column, row)
    pub fn cell_origin(&self, column: usize, row: usize) -> (f32, f32) {
        (
            column as f32 * (self.width + self.padding) + self.offset_left,
            row as f32 * (self.height + self.padding) + self.offset_top,
        )
    }

    /// Reject grids too large to build
    pub fn check_size(&self) -> Result<(), String> {
        match self.rows.checked_mul(self.columns) {
            Some(n) if n <= Self::MAX_BRICKS => Ok(()),
            Some(n) => Err(format!("{} bricks exceeds the limit of {}", n, Self::MAX_BRICKS)),
            None => Err(format!("{}x{} brick grid overflows", self.columns, self.rows)),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Id of the canvas element to draw into
    pub canvas_id: String,
    /// Tick period in milliseconds
    pub tick_interval_ms: u32,
    /// Fill color for ball, paddle and bricks
    pub fill_color: String,
    /// Console log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
    pub bricks: BrickLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_id: "myCanvas2".to_string(),
            tick_interval_ms: TICK_INTERVAL_MS,
            fill_color: "#0095DD".to_string(),
            log_level: "info".to_string(),
            bricks: BrickLayout::default(),
        }
    }
}

impl GameConfig {
    /// Id of the page element holding the JSON config
    pub const CONFIG_ELEMENT_ID: &'static str = "breakout-config";

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a JSON config, falling back to defaults on error or on a brick
    /// grid larger than [`BrickLayout::MAX_BRICKS`]
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => match config.bricks.check_size() {
                Ok(()) => {
                    log::info!("Loaded config ({} bricks)", config.bricks.len());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid brick layout ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Invalid config ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Log level parsed from `log_level` (defaults to Info)
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load config from the page's config element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(document: &web_sys::Document) -> Self {
        let json = document
            .get_element_by_id(Self::CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match json {
            Some(json) => Self::from_json_or_default(&json),
            None => {
                log::info!("No #{} element, using default config", Self::CONFIG_ELEMENT_ID);
                Self::default()
            }
        }
    }

    /// Load config from an optional JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("No config file given, using default config");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
