// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! I/O utilities: reading recorded pose sequences and saving rendered frames.
//!
//! Pose sequences are either one JSON array of frames or JSON Lines with one frame
//! per line. A frame is `null` when nobody was detected, a bare keypoint array, or
//! an object shaped like a pose-detection result:
//!
//! ```json
//! {"score": 0.93, "keypoints": [{"name": "nose", "x": 251.2, "y": 120.9, "score": 0.98}]}
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PictogramError, Result};
use crate::pose::{Keypoint, Pose};
use crate::surface::ImageSurface;

/// One frame as stored on disk.
#[derive(Deserialize)]
#[serde(untagged)]
enum FrameRecord {
    Pose(Pose),
    Keypoints(Vec<Keypoint>),
}

impl From<FrameRecord> for Pose {
    fn from(record: FrameRecord) -> Self {
        match record {
            FrameRecord::Pose(pose) => pose,
            FrameRecord::Keypoints(keypoints) => Self::new(keypoints),
        }
    }
}

/// Parse a pose sequence. `None` entries are frames without a detection.
///
/// The whole document is first read as one array of frames; if that fails each
/// non-empty line is read as one frame.
///
/// # Errors
///
/// Returns [`PictogramError::ParseError`] naming the offending line.
pub fn parse_poses(text: &str) -> Result<Vec<Option<Pose>>> {
    if let Ok(frames) = serde_json::from_str::<Vec<Option<FrameRecord>>>(text) {
        return Ok(frames.into_iter().map(|f| f.map(Pose::from)).collect());
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Option<FrameRecord>>(line)
                .map(|f| f.map(Pose::from))
                .map_err(|e| PictogramError::ParseError(format!("line {}: {e}", i + 1)))
        })
        .collect()
}

/// Read a pose sequence from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_poses(path: impl AsRef<Path>) -> Result<Vec<Option<Pose>>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        PictogramError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {e}", path.display()),
        ))
    })?;
    parse_poses(&text)
}

/// Find the next available run directory (`render`, `render2`, `render3`, ...).
#[must_use]
pub fn find_next_run_dir(base: impl AsRef<Path>, prefix: &str) -> PathBuf {
    let base = base.as_ref();

    let first = base.join(prefix);
    if !first.exists() {
        return first;
    }

    (2..)
        .map(|i| base.join(format!("{prefix}{i}")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

/// Saves rendered frames as numbered PNG files.
#[derive(Debug)]
pub struct FrameWriter {
    dir: PathBuf,
    written: usize,
}

impl FrameWriter {
    /// Create the output directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            PictogramError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to create directory {}: {e}", dir.display()),
            ))
        })?;
        Ok(Self { dir, written: 0 })
    }

    /// Save the next frame and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written.
    pub fn write(&mut self, surface: &ImageSurface) -> Result<PathBuf> {
        let path = self.dir.join(format!("frame_{:05}.png", self.written));
        surface.save(&path)?;
        self.written += 1;
        Ok(path)
    }

    /// Output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of frames saved.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }
}
