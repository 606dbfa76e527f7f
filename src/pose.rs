// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose data types.
//!
//! A [`Pose`] is one frame of keypoints for a single subject. Keypoint order is
//! fixed by the [`Topology`](crate::topology::Topology) in use, so consumers index
//! positionally rather than looking up names.

use serde::{Deserialize, Serialize};

/// A 2D point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `distance` along the direction `angle` (radians).
    #[must_use]
    pub fn offset(self, angle: f32, distance: f32) -> Self {
        Self {
            x: distance.mul_add(angle.cos(), self.x),
            y: distance.mul_add(angle.sin(), self.y),
        }
    }
}

/// One detected anatomical landmark.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Keypoint {
    /// Landmark identifier such as `"nose"` or `"left_shoulder"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Horizontal coordinate in pixels.
    pub x: f32,
    /// Vertical coordinate in pixels.
    pub y: f32,
    /// Detection confidence in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl Keypoint {
    /// Create an unnamed keypoint with a score.
    #[must_use]
    pub const fn new(x: f32, y: f32, score: f32) -> Self {
        Self {
            name: None,
            x,
            y,
            score: Some(score),
        }
    }

    /// Create a named keypoint with a score.
    #[must_use]
    pub fn named(name: impl Into<String>, x: f32, y: f32, score: f32) -> Self {
        Self {
            name: Some(name.into()),
            x,
            y,
            score: Some(score),
        }
    }

    /// Confidence used for gating. A missing score counts as fully confident.
    #[must_use]
    pub fn confidence(&self) -> f32 {
        self.score.unwrap_or(1.0)
    }

    /// Whether the confidence is strictly above `threshold`.
    #[must_use]
    pub fn is_reliable(&self, threshold: f32) -> bool {
        self.confidence() > threshold
    }

    /// Position of this keypoint.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One full set of keypoints for one subject at one instant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Keypoints in topology order.
    pub keypoints: Vec<Keypoint>,
    /// Overall pose score reported by the model, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl Pose {
    /// Create a pose from keypoints.
    #[must_use]
    pub const fn new(keypoints: Vec<Keypoint>) -> Self {
        Self {
            keypoints,
            score: None,
        }
    }

    /// Number of keypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    /// Check if the pose has no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }
}

impl From<Vec<Keypoint>> for Pose {
    fn from(keypoints: Vec<Keypoint>) -> Self {
        Self::new(keypoints)
    }
}
