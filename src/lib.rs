// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Pictogram
//!
//! Renders 2D pose keypoints as a smoothed, pictogram-style stick figure: a round
//! head and four tapered limbs, drawn only where the pose model is confident.
//!
//! The pose model, camera and recording pipeline stay outside the crate. Feed one
//! [`Pose`] per frame into a [`StickFigureRenderer`] (or a [`FrameLoop`] for a live
//! session) together with any [`DrawingSurface`].
//!
//! ## Quick Start
//!
//! ```rust
//! use pictogram::{ImageSurface, Keypoint, Pose, RenderConfig, StickFigureRenderer};
//! use pictogram::visualizer::Color;
//!
//! let mut renderer = StickFigureRenderer::new(RenderConfig::default());
//! let mut surface = ImageSurface::new(640, 480);
//!
//! // 17 COCO keypoints from the pose model
//! let pose = Pose::new(vec![Keypoint::new(320.0, 240.0, 0.9); 17]);
//!
//! surface.clear(Color::WHITE);
//! renderer.draw_result(&pose, &mut surface)?;
//! # Ok::<(), pictogram::PictogramError>(())
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Render a recorded pose sequence to PNG frames under runs/render/render<N>
//! pictogram render --poses poses.jsonl --save
//!
//! # Preview in a window with a lower threshold and a shorter smoothing window
//! pictogram render -p poses.json --conf 0.3 --window 3 --show
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`renderer`] | [`StickFigureRenderer`] and the draw modes |
//! | [`smoother`] | [`KeypointSmoother`] rolling-window average |
//! | [`geometry`] | Face center, left/right split, tapered stick outline |
//! | [`surface`] | [`DrawingSurface`] trait, raster and recording surfaces |
//! | [`topology`] | [`Topology`] joint-to-index mapping |
//! | [`frame_loop`] | [`FrameLoop`] per-frame driver |
//! | [`config`] | [`RenderConfig`] builder |
//! | [`io`] | Pose sequence reader and PNG frame writer |
//! | [`error`] | Error types ([`PictogramError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `visualize` | Preview window (default) |

// Modules
pub mod cli;
pub mod config;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod io;
pub mod pose;
pub mod renderer;
pub mod smoother;
pub mod surface;
pub mod topology;
pub mod visualizer;

// Re-export main types for convenience
pub use config::{DrawMode, RenderConfig};
pub use error::{PictogramError, Result};
pub use frame_loop::{FrameLoop, FrameOutcome, FrameStats};
pub use pose::{Keypoint, Point, Pose};
pub use renderer::{Side, StickFigureRenderer};
pub use smoother::KeypointSmoother;
pub use surface::{DrawCommand, DrawingSurface, ImageSurface, RecordingSurface};
pub use topology::{LimbChain, Topology};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "pictogram");
    }
}
