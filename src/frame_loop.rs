// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-frame driver.
//!
//! [`FrameLoop`] wraps a renderer for a live session. A frame that fails to draw
//! is reported and skipped; the next frame brings fresh keypoints, so nothing is
//! retried and the session never stops on a drawing error. Clearing the surface
//! before each tick is left to the caller.

use crate::error::PictogramError;
use crate::pose::Pose;
use crate::renderer::StickFigureRenderer;
use crate::surface::DrawingSurface;
use crate::{verbose, warn};

/// Result of a single frame.
#[derive(Debug)]
pub enum FrameOutcome {
    /// The pose was drawn.
    Drawn,
    /// The model reported no person (or a pose without keypoints).
    NoPose,
    /// Drawing failed; nothing more is drawn this frame.
    Skipped(PictogramError),
}

impl FrameOutcome {
    /// Whether the pose was drawn.
    #[must_use]
    pub const fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn)
    }
}

/// Frame counters for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Frames where a pose was drawn.
    pub drawn: usize,
    /// Frames dropped because of a drawing error.
    pub skipped: usize,
    /// Frames without a detected pose.
    pub empty: usize,
}

impl FrameStats {
    /// Total frames processed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.drawn + self.skipped + self.empty
    }
}

/// Drives a renderer one frame at a time.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    renderer: StickFigureRenderer,
    stats: FrameStats,
    failure_streak: usize,
}

impl FrameLoop {
    /// Wrap a renderer.
    #[must_use]
    pub const fn new(renderer: StickFigureRenderer) -> Self {
        Self {
            renderer,
            stats: FrameStats {
                drawn: 0,
                skipped: 0,
                empty: 0,
            },
            failure_streak: 0,
        }
    }

    /// Draw one frame.
    ///
    /// `pose` is the model's detection for this frame, `None` when nobody was found.
    pub fn tick<S: DrawingSurface + ?Sized>(&mut self, pose: Option<&Pose>, surface: &mut S) -> FrameOutcome {
        let index = self.stats.total();

        let outcome = match pose {
            None => FrameOutcome::NoPose,
            Some(p) if p.is_empty() => FrameOutcome::NoPose,
            Some(p) => match self.renderer.draw_result(p, surface) {
                Ok(()) => FrameOutcome::Drawn,
                Err(e) => FrameOutcome::Skipped(e),
            },
        };

        match &outcome {
            FrameOutcome::Drawn => {
                self.stats.drawn += 1;
                self.end_failure_streak(index);
            }
            FrameOutcome::NoPose => {
                self.stats.empty += 1;
                verbose!("frame {index}: no pose");
            }
            FrameOutcome::Skipped(e) => {
                self.stats.skipped += 1;
                self.failure_streak += 1;
                // Only the first failure of a streak is worth a warning
                if self.failure_streak == 1 {
                    warn!("frame {index}: skipped ({e})");
                } else {
                    verbose!("frame {index}: skipped ({e})");
                }
            }
        }

        outcome
    }

    fn end_failure_streak(&mut self, index: usize) {
        if self.failure_streak > 1 {
            verbose!(
                "frame {index}: drawing again after {} skipped frames",
                self.failure_streak
            );
        }
        self.failure_streak = 0;
    }

    /// Counters so far.
    #[must_use]
    pub const fn stats(&self) -> FrameStats {
        self.stats
    }

    /// The wrapped renderer.
    #[must_use]
    pub const fn renderer(&self) -> &StickFigureRenderer {
        &self.renderer
    }

    /// Unwrap the renderer.
    #[must_use]
    pub fn into_renderer(self) -> StickFigureRenderer {
        self.renderer
    }
}
