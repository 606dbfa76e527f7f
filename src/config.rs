// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Renderer configuration.
//!
//! [`RenderConfig`] holds the tunable constants of the pictogram renderer: the
//! confidence threshold, the head and limb radii, the smoothing window and the
//! draw styles.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PictogramError, Result};
use crate::smoother::{DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};
use crate::visualizer::Color;

/// How a pose is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Smoothed, tapered pictogram figure.
    #[default]
    StickFigure,
    /// One dot per keypoint, colored by side.
    Keypoints,
    /// Straight lines between adjacent keypoints.
    Skeleton,
}

impl DrawMode {
    /// Short name used on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StickFigure => "stick",
            Self::Keypoints => "keypoints",
            Self::Skeleton => "skeleton",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DrawMode {
    type Err = PictogramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "stick" | "stick_figure" | "pictogram" => Ok(Self::StickFigure),
            "keypoints" | "points" => Ok(Self::Keypoints),
            "skeleton" | "lines" => Ok(Self::Skeleton),
            _ => Err(PictogramError::ConfigError(format!(
                "unknown draw mode '{s}' (expected stick, keypoints or skeleton)"
            ))),
        }
    }
}

/// Configuration for the pictogram renderer.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use pictogram::RenderConfig;
///
/// let config = RenderConfig::new()
///     .with_score_threshold(0.4)
///     .with_face_radius(40.0)
///     .with_window_size(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Keypoints must score strictly above this value to be drawn (0.0 to 1.0).
    pub score_threshold: f32,
    /// Radius of the head circle in pixels.
    pub face_radius: f32,
    /// Factor applied to the radius at each joint level, from the head down to the wrists and ankles.
    pub radius_falloff: f32,
    /// Number of recent poses averaged together.
    pub window_size: usize,
    /// Fill color of the figure.
    pub fill_color: Color,
    /// Dot radius of the keypoint draw mode.
    pub keypoint_radius: f32,
    /// Stroke width of the keypoint and skeleton draw modes.
    pub line_width: f32,
    /// Active draw mode.
    pub mode: DrawMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.5,
            face_radius: 30.0,
            radius_falloff: 0.75,
            window_size: DEFAULT_WINDOW_SIZE,
            fill_color: Color::PICTOGRAM,
            keypoint_radius: 4.0,
            line_width: 2.0,
            mode: DrawMode::StickFigure,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails [`Self::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the confidence threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Minimum exclusive score (0.0 to 1.0).
    #[must_use]
    pub const fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Set the head radius. Limb radii are derived from it.
    #[must_use]
    pub const fn with_face_radius(mut self, radius: f32) -> Self {
        self.face_radius = radius;
        self
    }

    /// Set the per-joint radius falloff.
    #[must_use]
    pub const fn with_radius_falloff(mut self, falloff: f32) -> Self {
        self.radius_falloff = falloff;
        self
    }

    /// Set the smoothing window size.
    #[must_use]
    pub const fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Set the figure fill color.
    #[must_use]
    pub const fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the dot radius of the keypoint mode.
    #[must_use]
    pub const fn with_keypoint_radius(mut self, radius: f32) -> Self {
        self.keypoint_radius = radius;
        self
    }

    /// Set the stroke width of the legacy modes.
    #[must_use]
    pub const fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Set the draw mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: DrawMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(PictogramError::ConfigError(format!(
                "score_threshold must be within [0, 1], got {}",
                self.score_threshold
            )));
        }
        if !(self.face_radius > 0.0) {
            return Err(PictogramError::ConfigError(format!(
                "face_radius must be positive, got {}",
                self.face_radius
            )));
        }
        if !(self.radius_falloff > 0.0 && self.radius_falloff <= 1.0) {
            return Err(PictogramError::ConfigError(format!(
                "radius_falloff must be within (0, 1], got {}",
                self.radius_falloff
            )));
        }
        if !(1..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(PictogramError::ConfigError(format!(
                "window_size must be within [1, {MAX_WINDOW_SIZE}], got {}",
                self.window_size
            )));
        }
        if self.keypoint_radius < 0.0 || self.line_width < 0.0 {
            return Err(PictogramError::ConfigError(
                "keypoint_radius and line_width must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
