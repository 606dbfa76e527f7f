// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Colors, COCO skeleton tables and the preview window.

/// Color definitions.
pub mod color;

/// COCO skeleton tables for the legacy draw modes.
pub mod skeleton;

#[cfg(feature = "visualize")]
pub mod viewer;

pub use color::Color;

#[cfg(feature = "visualize")]
pub use viewer::Viewer;
