//! Scene configuration.
//!
//! All fields default to the stock geometry and timing, and every struct is
//! `#[serde(default)]`, so a partial JSON object only overrides the fields it
//! names.

use serde::{Deserialize, Serialize};

use crate::animation::TransitionConfig;
use crate::error::{LayoutError, Result};
use crate::layout::{Arrangement, LayoutConfig, ScatterConfig};

/// Top-level configuration for a [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Geometry of the four arrangements.
    pub layout: LayoutConfig,
    /// Default duration and easing.
    pub transition: TransitionConfig,
    /// Starting cloud for newly loaded items.
    pub scatter: ScatterConfig,
    /// Arrangement requested right after each load; None leaves items scattered.
    pub initial_arrangement: Option<Arrangement>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            transition: TransitionConfig::default(),
            scatter: ScatterConfig::default(),
            initial_arrangement: Some(Arrangement::Table),
        }
    }
}

impl SceneConfig {
    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.transition.validate()?;
        self.scatter.validate()
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LayoutError::ConfigDecode(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
