// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Temporal keypoint smoothing.
//!
//! [`KeypointSmoother`] keeps the last N poses and averages them per keypoint index.
//! Averaging in coordinate space is enough here: the window spans a handful of
//! frames and the goal is to remove visible jitter, not to estimate positions
//! precisely.

use std::collections::VecDeque;

use crate::error::{PictogramError, Result};
use crate::pose::Keypoint;

/// Default number of poses kept in the window.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Largest window a [`RenderConfig`](crate::RenderConfig) accepts.
pub const MAX_WINDOW_SIZE: usize = 1024;

/// Fixed-size FIFO window of recent poses.
#[derive(Debug, Clone)]
pub struct KeypointSmoother {
    window: VecDeque<Vec<Keypoint>>,
    capacity: usize,
}

impl Default for KeypointSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl KeypointSmoother {
    /// Create an empty smoother holding at most `capacity` poses.
    ///
    /// A capacity of zero is raised to one so the latest pose is always kept.
    /// Storage is reserved up to [`MAX_WINDOW_SIZE`] and grows on demand beyond it.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity.min(MAX_WINDOW_SIZE) + 1),
            capacity,
        }
    }

    /// Append a pose, evicting the oldest one when the window is full.
    ///
    /// No shape validation is performed; see [`Self::try_add`].
    pub fn add(&mut self, pose: Vec<Keypoint>) {
        self.window.push_back(pose);
        if self.window.len() > self.capacity {
            self.window.pop_front();
        }
    }

    /// Append a pose only if it has as many keypoints as the most recent one.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::ShapeMismatch`] and leaves the window untouched
    /// when the keypoint count differs.
    pub fn try_add(&mut self, pose: Vec<Keypoint>) -> Result<()> {
        if let Some(latest) = self.window.back() {
            if latest.len() != pose.len() {
                return Err(PictogramError::ShapeMismatch {
                    expected: latest.len(),
                    found: pose.len(),
                });
            }
        }
        self.add(pose);
        Ok(())
    }

    /// Per-index mean of the poses in the window.
    ///
    /// The result has the length of the most recent pose. Each index averages
    /// over the poses that have an entry there, and keeps the name from the most
    /// recent pose. Once any entry at an index carries a score, the averaged score
    /// is the mean confidence with unscored entries counting as 1.0; an index where
    /// no entry has a score stays unscored.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::EmptyWindow`] before the first [`Self::add`].
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Result<Vec<Keypoint>> {
        let latest = self.window.back().ok_or(PictogramError::EmptyWindow)?;

        let averaged = latest
            .iter()
            .enumerate()
            .map(|(idx, newest)| {
                let mut sum_x = 0.0;
                let mut sum_y = 0.0;
                let mut count = 0usize;
                let mut sum_conf = 0.0;
                let mut any_scored = false;

                for kp in self.window.iter().filter_map(|pose| pose.get(idx)) {
                    sum_x += kp.x;
                    sum_y += kp.y;
                    sum_conf += kp.confidence();
                    any_scored |= kp.score.is_some();
                    count += 1;
                }

                // count >= 1: the newest pose always has this index
                let n = count as f32;
                Keypoint {
                    name: newest.name.clone(),
                    x: sum_x / n,
                    y: sum_y / n,
                    score: any_scored.then(|| sum_conf / n),
                }
            })
            .collect();

        Ok(averaged)
    }

    /// Whether at least one pose has been added.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.window.is_empty()
    }

    /// Number of poses currently in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Maximum number of poses kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every pose from the window.
    pub fn clear(&mut self) {
        self.window.clear();
    }
}
