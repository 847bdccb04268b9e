//! Runtime settings.
//!
//! Settings are layered: built-in defaults, then an optional settings file,
//! then `TAMPAMUSLIM_*` environment variables. Command-line flags are
//! applied on top by the binary.
//!
//! ```toml
//! breakpoint = 1024
//! cell_width = 8
//! theme = "auto"
//! venues = "venues.toml"
//! ```

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::viewport::{DEFAULT_BREAKPOINT, DEFAULT_CELL_WIDTH};

/// Theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick based on the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Drawer breakpoint in logical pixels.
    pub breakpoint: u32,
    /// Logical pixels per terminal column.
    pub cell_width: u16,
    /// Venue file replacing the built-in directory.
    #[serde(default)]
    pub venues: Option<PathBuf>,
    #[serde(default)]
    pub theme: ThemeChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            cell_width: DEFAULT_CELL_WIDTH,
            venues: None,
            theme: ThemeChoice::Auto,
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layers(path, Environment::with_prefix("TAMPAMUSLIM"))
    }

    fn load_layers(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("breakpoint", i64::from(DEFAULT_BREAKPOINT))?
            .set_default("cell_width", i64::from(DEFAULT_CELL_WIDTH))?
            .set_default("theme", "auto")?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        if settings.cell_width == 0 {
            return Err(ConfigError::Message("cell_width must be at least 1".into()));
        }

        Ok(settings)
    }
}
