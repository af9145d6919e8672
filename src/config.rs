//! Collision Core Configuration
//!
//! [`CollisionConfig`] holds the tunables of the collision pass and the
//! projectile pool. Every field has a default matching the shipped game, and
//! a JSON file may override any subset of them:
//!
//! ```json
//! { "max_objects_per_node": 8, "debug_collision_overlay": true }
//! ```
//!
//! Loading is the only fallible operation in the crate; the per-frame pass
//! itself never returns errors.

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::fixed::{Fixed, to_fixed};
use crate::core::rect::BoundingBox;
use crate::pool::projectile::PROJECTILE_SIZE;

/// Largest whole-pixel coordinate a Q16.16 position can hold.
const MAX_PIXEL_COORD: i64 = 32_767;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its accepted range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Tunables for the spatial index, projectile pool and debug overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Play field width in pixels
    pub field_width: i32,
    /// Play field height in pixels
    pub field_height: i32,
    /// Extra pixels around the field before a projectile counts as gone
    pub offscreen_margin: i32,
    /// Objects a quadtree node holds before splitting
    pub max_objects_per_node: usize,
    /// Maximum quadtree depth (root is level 0)
    pub max_levels: u32,
    /// Projectiles created up front
    pub initial_pool_size: usize,
    /// Projectile lifetime in seconds
    pub projectile_ttl_secs: f64,
    /// Expose quadtree regions and pool counters for a debug overlay
    pub debug_collision_overlay: bool,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            field_width: 1280,
            field_height: 720,
            offscreen_margin: 200,
            max_objects_per_node: 15,
            max_levels: 6,
            initial_pool_size: 300,
            projectile_ttl_secs: 3.0,
            debug_collision_overlay: false,
        }
    }
}

impl CollisionConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the core cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(ConfigError::Invalid {
                field: "field_width/field_height",
                reason: "play field must have positive area",
            });
        }
        if self.offscreen_margin < 0 {
            return Err(ConfigError::Invalid {
                field: "offscreen_margin",
                reason: "must not be negative",
            });
        }
        // Live projectiles reach one box width past the extended field
        let reach = self.offscreen_margin as i64 + PROJECTILE_SIZE as i64;
        let widest = self.field_width.max(self.field_height) as i64;
        if widest + reach > MAX_PIXEL_COORD || reach > MAX_PIXEL_COORD + 1 {
            return Err(ConfigError::Invalid {
                field: "field_width/field_height/offscreen_margin",
                reason: "extended field exceeds the fixed-point coordinate range",
            });
        }
        if self.max_objects_per_node == 0 {
            return Err(ConfigError::Invalid {
                field: "max_objects_per_node",
                reason: "must be at least 1",
            });
        }
        // Q16.16 tops out just under 32768
        if !(self.projectile_ttl_secs > 0.0 && self.projectile_ttl_secs < 32_000.0) {
            return Err(ConfigError::Invalid {
                field: "projectile_ttl_secs",
                reason: "must be a positive number of seconds",
            });
        }
        Ok(())
    }

    /// The play field, which is also the quadtree root.
    pub fn field(&self) -> BoundingBox {
        BoundingBox::new(0, 0, self.field_width, self.field_height)
    }

    /// The play field grown by the off-screen margin.
    pub fn extended_field(&self) -> BoundingBox {
        self.field().expanded(self.offscreen_margin)
    }

    /// Projectile lifetime in fixed-point seconds.
    pub fn projectile_ttl(&self) -> Fixed {
        to_fixed(self.projectile_ttl_secs)
    }
}
