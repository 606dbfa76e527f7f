// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Keypoint topology.
//!
//! The renderer walks limbs by position in the pose, so the mapping from joints
//! to indices has to match the upstream model's output layout. [`Topology::coco`]
//! describes the 17-keypoint COCO layout emitted by PoseNet, MoveNet and YOLO pose
//! models.

use serde::{Deserialize, Serialize};

use crate::error::{PictogramError, Result};

/// COCO keypoint names in model output order.
pub const COCO_KEYPOINT_NAMES: [&str; 17] = [
    "nose",
    "left_eye",
    "right_eye",
    "left_ear",
    "right_ear",
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
];

/// Landmarks averaged into the head position.
pub const FACE_KEYPOINT_NAMES: [&str; 5] = ["nose", "left_eye", "right_eye", "left_ear", "right_ear"];

/// COCO root index of the arm chains (left/right shoulder).
pub const SHOULDER_ROOT: usize = 5;

/// COCO root index of the leg chains (left/right hip).
pub const HIP_ROOT: usize = 11;

/// A three-level limb chain. Each level holds the index pair of the two body
/// sides; which one ends up drawn on the left is decided per frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimbChain {
    /// Chain label, e.g. `"arms"`.
    pub name: String,
    /// Proximal joint pair (shoulders or hips).
    pub root: (usize, usize),
    /// Middle joint pair (elbows or knees).
    pub mid: (usize, usize),
    /// Distal joint pair (wrists or ankles).
    pub end: (usize, usize),
}

impl LimbChain {
    /// Build a chain from a root index using the interleaved COCO layout:
    /// `(i, i+1)`, `(i+2, i+3)`, `(i+4, i+5)`.
    #[must_use]
    pub fn from_root(name: impl Into<String>, root: usize) -> Self {
        Self {
            name: name.into(),
            root: (root, root + 1),
            mid: (root + 2, root + 3),
            end: (root + 4, root + 5),
        }
    }

    /// Joint pairs from proximal to distal.
    #[must_use]
    pub const fn levels(&self) -> [(usize, usize); 3] {
        [self.root, self.mid, self.end]
    }

    /// Largest index referenced by this chain.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.levels()
            .iter()
            .map(|&(a, b)| a.max(b))
            .max()
            .unwrap_or(0)
    }
}

/// Named mapping of joints to pose indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Keypoint names in index order.
    pub keypoint_names: Vec<String>,
    /// Names of the landmarks that make up the face.
    pub face_names: Vec<String>,
    /// Limb chains drawn as tapered sticks.
    pub limbs: Vec<LimbChain>,
}

impl Default for Topology {
    fn default() -> Self {
        Self::coco()
    }
}

impl Topology {
    /// The 17-keypoint COCO layout with arms rooted at the shoulders and legs at the hips.
    #[must_use]
    pub fn coco() -> Self {
        Self {
            keypoint_names: COCO_KEYPOINT_NAMES.iter().map(ToString::to_string).collect(),
            face_names: FACE_KEYPOINT_NAMES.iter().map(ToString::to_string).collect(),
            limbs: vec![
                LimbChain::from_root("arms", SHOULDER_ROOT),
                LimbChain::from_root("legs", HIP_ROOT),
            ],
        }
    }

    /// Number of keypoints a pose must carry for this topology.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoint_names.len()
    }

    /// Check if the topology names no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoint_names.is_empty()
    }

    /// Index of a named keypoint.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.keypoint_names.iter().position(|n| n == name)
    }

    /// Whether `name` is one of the face landmarks.
    #[must_use]
    pub fn is_face(&self, name: &str) -> bool {
        self.face_names.iter().any(|n| n == name)
    }

    /// Largest index referenced by any limb chain.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.limbs.iter().map(LimbChain::max_index).max().unwrap_or(0)
    }

    /// Ensure a pose of `len` keypoints covers every limb index.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::MissingKeypoint`] naming the first index past the end.
    pub fn check_len(&self, len: usize) -> Result<()> {
        for chain in &self.limbs {
            for (a, b) in chain.levels() {
                for index in [a, b] {
                    if index >= len {
                        return Err(PictogramError::MissingKeypoint { index, len });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coco_chains() {
        let topology = Topology::coco();
        assert_eq!(topology.len(), 17);
        assert_eq!(topology.limbs[0].levels(), [(5, 6), (7, 8), (9, 10)]);
        assert_eq!(topology.limbs[1].levels(), [(11, 12), (13, 14), (15, 16)]);
        assert_eq!(topology.max_index(), 16);
    }

    #[test]
    fn test_chain_names_match_indices() {
        let topology = Topology::coco();
        let arms = &topology.limbs[0];
        assert_eq!(topology.index_of("left_shoulder"), Some(arms.root.0));
        assert_eq!(topology.index_of("right_wrist"), Some(arms.end.1));
        assert_eq!(topology.index_of("tail"), None);
    }

    #[test]
    fn test_face_names() {
        let topology = Topology::coco();
        assert!(topology.is_face("nose"));
        assert!(topology.is_face("right_ear"));
        assert!(!topology.is_face("left_shoulder"));
    }

    #[test]
    fn test_check_len() {
        let topology = Topology::coco();
        assert!(topology.check_len(17).is_ok());
        match topology.check_len(12) {
            Err(PictogramError::MissingKeypoint { index, len }) => {
                assert_eq!(index, 12);
                assert_eq!(len, 12);
            }
            other => panic!("expected MissingKeypoint, got {other:?}"),
        }
    }
}
