//! Engine configuration.
//!
//! Window size, starting camera, world seed, colour policy, and an optional
//! scripted session. Loaded from and saved to a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strata_common::{ConfigError, StrataResult};
use strata_view::{MAX_ZOOM, MIN_ZOOM};
use strata_world::ColourPolicy;
use tracing::{info, warn};

/// Configuration file name.
const CONFIG_FILE: &str = "strata.toml";

/// Largest accepted window dimension in pixels.
pub(crate) const MAX_WINDOW_DIMENSION: u32 = 8192;

/// Engine configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Window Settings ===
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,

    // === World Settings ===
    /// World seed
    pub world_seed: i64,
    /// Ignore `world_seed` and draw one at startup
    pub random_seed: bool,
    /// Height-to-colour mapping
    pub colour_policy: ColourPolicy,

    // === Camera Settings ===
    /// Starting zoom (1-1024)
    pub initial_zoom: f64,
    /// Starting center X in world units
    pub center_x: f64,
    /// Starting center Y in world units
    pub center_y: f64,

    // === Debug Settings ===
    /// Show debug overlay on start
    pub show_debug_overlay: bool,

    // === Session Settings ===
    /// Input events replayed after startup, e.g. `"pan 100 0"`
    pub script: Vec<String>,
    /// Where to write the final frame as PNG
    pub output_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,

            world_seed: 0,
            random_seed: false,
            colour_policy: ColourPolicy::Simple,

            initial_zoom: MIN_ZOOM,
            center_x: 0.0,
            center_y: 0.0,

            show_debug_overlay: false,

            script: Vec::new(),
            output_path: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default file location.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("{e}");
                Self::default()
            },
        }
    }

    /// Reads and parses a config file, failing on any error.
    pub fn read(path: &Path) -> StrataResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> StrataResult<()> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map_or_else(|| PathBuf::from(CONFIG_FILE), |dir| dir.join("strata").join(CONFIG_FILE))
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.window_width = self.window_width.clamp(1, MAX_WINDOW_DIMENSION);
        self.window_height = self.window_height.clamp(1, MAX_WINDOW_DIMENSION);

        self.initial_zoom = if self.initial_zoom.is_nan() {
            MIN_ZOOM
        } else {
            self.initial_zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        };

        if !self.center_x.is_finite() {
            self.center_x = 0.0;
        }
        if !self.center_y.is_finite() {
            self.center_y = 0.0;
        }
    }
}
