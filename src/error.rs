// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the pictogram renderer.

use std::fmt;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, PictogramError>;

/// Main error type for the pictogram renderer.
#[derive(Debug)]
pub enum PictogramError {
    /// The smoothing window was averaged before any pose was added.
    EmptyWindow,
    /// A pose was added whose keypoint count differs from the poses already in the window.
    ShapeMismatch {
        /// Keypoint count of the most recent pose in the window.
        expected: usize,
        /// Keypoint count of the rejected pose.
        found: usize,
    },
    /// A topology index points past the end of the pose.
    MissingKeypoint {
        /// Requested keypoint index.
        index: usize,
        /// Number of keypoints in the pose.
        len: usize,
    },
    /// Invalid configuration provided.
    ConfigError(String),
    /// Error parsing a pose sequence.
    ParseError(String),
    /// Error encoding or writing images.
    ImageError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
    /// Visualizer error.
    VisualizerError(String),
}

impl fmt::Display for PictogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWindow => write!(f, "Smoothing window is empty: no pose added yet"),
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "Shape mismatch: expected {expected} keypoints, found {found}"
            ),
            Self::MissingKeypoint { index, len } => write!(
                f,
                "Missing keypoint: index {index} out of range for pose with {len} keypoints"
            ),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::VisualizerError(msg) => write!(f, "Visualizer error: {msg}"),
        }
    }
}

impl std::error::Error for PictogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PictogramError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for PictogramError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

impl From<serde_json::Error> for PictogramError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
