//! Navigation tuning with TOML preset support.
//!
//! Every manipulator's tweakable parameters plus the key bindings are
//! consolidated here. Options serialize to/from TOML so embedders can ship
//! navigation presets alongside their view settings.

mod fly;
mod follow;
mod keybindings;
mod orbit;
mod ortho;

use std::path::Path;

pub use fly::FlyOptions;
pub use follow::FollowOptions;
pub use keybindings::KeyBindings;
pub use orbit::OrbitOptions;
pub use ortho::OrthoOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[orbit]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit-arcball parameters.
    pub orbit: OrbitOptions,
    /// First-person fly parameters.
    pub fly: FlyOptions,
    /// Orthographic pan/zoom parameters.
    pub ortho: OrthoOptions,
    /// Follow-camera parameters.
    pub follow: FollowOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)
    }
}
