//! # Ramp Parameters
//!
//! The raw, deserializable [`RampConfig`] and the validated, immutable
//! [`RampParameters`] that every builder consumes.
//!
//! ```text
//! RampConfig (defaults / JSON / CLI flags) → validate() → RampParameters
//! ```

use config::constants::{
    DEFAULT_BACK_HEIGHT, DEFAULT_CHANNEL_COUNT, DEFAULT_CHANNEL_WIDTH, DEFAULT_FRONT_HEIGHT,
    DEFAULT_RAMP_LENGTH, DEFAULT_TRAY_LENGTH, DEFAULT_WALL_HEIGHT, DEFAULT_WALL_THICKNESS,
};
use serde::{Deserialize, Serialize};

use crate::assembler::MAX_CHANNEL_COUNT;
use crate::error::ValidationError;

/// Unvalidated ramp dimensions.
///
/// All lengths share one unit (millimetres in the reference design).
/// Fields missing from a JSON document fall back to the defaults.
///
/// # Example
///
/// ```rust
/// use ramp_mesh::RampConfig;
///
/// let config: RampConfig = serde_json::from_str(r#"{ "channel_count": 5 }"#).unwrap();
/// assert_eq!(config.channel_count, 5);
/// assert_eq!(config.channel_width, 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RampConfig {
    /// Number of channels; there are `channel_count - 1` dividers.
    pub channel_count: u32,
    /// Inner width of each channel.
    pub channel_width: f64,
    /// Thickness of outer walls, dividers and the back wall.
    pub wall_thickness: f64,
    /// Length of the sloped section.
    pub ramp_length: f64,
    /// Length of the flat tray section.
    pub tray_length: f64,
    /// Floor height at the exits (y = 0).
    pub front_height: f64,
    /// Floor height at the tray.
    pub back_height: f64,
    /// Wall height above the floor.
    pub wall_height: f64,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            channel_count: DEFAULT_CHANNEL_COUNT,
            channel_width: DEFAULT_CHANNEL_WIDTH,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            ramp_length: DEFAULT_RAMP_LENGTH,
            tray_length: DEFAULT_TRAY_LENGTH,
            front_height: DEFAULT_FRONT_HEIGHT,
            back_height: DEFAULT_BACK_HEIGHT,
            wall_height: DEFAULT_WALL_HEIGHT,
        }
    }
}

impl RampConfig {
    /// Validates the dimensions and freezes them into [`RampParameters`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the channel count is zero or its
    /// triangle count does not fit the 32-bit STL count field, a dimension is non-positive or non-finite, the floor slopes the
    /// wrong way, or the back wall does not fit in the tray.
    pub fn validate(&self) -> Result<RampParameters, ValidationError> {
        if self.channel_count < 1 {
            return Err(ValidationError::InvalidChannelCount(self.channel_count));
        }
        if self.channel_count > MAX_CHANNEL_COUNT {
            return Err(ValidationError::TooManyChannels {
                count: self.channel_count,
                max: MAX_CHANNEL_COUNT,
            });
        }

        for (name, value) in self.dimensions() {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteDimension { name, value });
            }
            if value <= 0.0 {
                return Err(ValidationError::NonPositiveDimension { name, value });
            }
        }

        if self.front_height > self.back_height {
            return Err(ValidationError::InvertedSlope {
                front_height: self.front_height,
                back_height: self.back_height,
            });
        }
        if self.wall_thickness > self.tray_length {
            return Err(ValidationError::WallExceedsTray {
                wall_thickness: self.wall_thickness,
                tray_length: self.tray_length,
            });
        }

        let params = RampParameters { config: *self };
        for (name, value) in [
            ("total_width", params.total_width()),
            ("total_depth", params.total_depth()),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ValidationError::DegenerateExtent { name, value });
            }
        }

        Ok(params)
    }

    fn dimensions(&self) -> [(&'static str, f64); 7] {
        [
            ("channel_width", self.channel_width),
            ("wall_thickness", self.wall_thickness),
            ("ramp_length", self.ramp_length),
            ("tray_length", self.tray_length),
            ("front_height", self.front_height),
            ("back_height", self.back_height),
            ("wall_height", self.wall_height),
        ]
    }
}

/// Validated, immutable ramp dimensions.
///
/// Only obtainable through [`RampConfig::validate`], so every builder can
/// assume positive, finite inputs.
///
/// # Example
///
/// ```rust
/// use ramp_mesh::RampParameters;
///
/// let params = RampParameters::reference();
/// assert_eq!(params.total_width(), 226.0);
/// assert_eq!(params.total_depth(), 160.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampParameters {
    config: RampConfig,
}

impl RampParameters {
    /// The reference weekly ramp built from the default dimensions.
    pub fn reference() -> Self {
        Self {
            config: RampConfig::default(),
        }
    }

    /// Returns the dimensions this set was validated from.
    #[inline]
    pub fn config(&self) -> &RampConfig {
        &self.config
    }

    #[inline]
    pub fn channel_count(&self) -> u32 {
        self.config.channel_count
    }

    #[inline]
    pub fn channel_width(&self) -> f64 {
        self.config.channel_width
    }

    #[inline]
    pub fn wall_thickness(&self) -> f64 {
        self.config.wall_thickness
    }

    #[inline]
    pub fn ramp_length(&self) -> f64 {
        self.config.ramp_length
    }

    #[inline]
    pub fn tray_length(&self) -> f64 {
        self.config.tray_length
    }

    #[inline]
    pub fn front_height(&self) -> f64 {
        self.config.front_height
    }

    #[inline]
    pub fn back_height(&self) -> f64 {
        self.config.back_height
    }

    #[inline]
    pub fn wall_height(&self) -> f64 {
        self.config.wall_height
    }

    /// `channels * channel_width + (channels + 1) * wall_thickness`.
    pub fn total_width(&self) -> f64 {
        let channels = f64::from(self.config.channel_count);
        channels * self.config.channel_width + (channels + 1.0) * self.config.wall_thickness
    }

    /// `ramp_length + tray_length`.
    pub fn total_depth(&self) -> f64 {
        self.config.ramp_length + self.config.tray_length
    }

    /// Highest point of the solid: the top of the tray walls.
    pub fn total_height(&self) -> f64 {
        self.config.back_height + self.config.wall_height
    }

    /// Number of internal dividers between channels.
    #[inline]
    pub fn divider_count(&self) -> u32 {
        self.config.channel_count - 1
    }

    /// Left edge of each internal divider, in increasing x.
    pub fn divider_positions(&self) -> impl Iterator<Item = f64> + '_ {
        let pitch = self.config.wall_thickness + self.config.channel_width;
        (1..=self.divider_count()).map(move |i| f64::from(i) * pitch)
    }

    /// Floor height at depth `y` along the ramp, clamped to the tray height
    /// beyond `ramp_length`. Exact at both ends of the slope.
    pub fn floor_height_at(&self, y: f64) -> f64 {
        if y >= self.config.ramp_length {
            return self.config.back_height;
        }
        let t = (y / self.config.ramp_length).max(0.0);
        self.config.front_height + (self.config.back_height - self.config.front_height) * t
    }
}

impl TryFrom<RampConfig> for RampParameters {
    type Error = ValidationError;

    fn try_from(config: RampConfig) -> Result<Self, Self::Error> {
        config.validate()
    }
}

impl From<RampParameters> for RampConfig {
    fn from(params: RampParameters) -> Self {
        params.config
    }
}
