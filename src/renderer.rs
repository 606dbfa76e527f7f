// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pictogram stick-figure renderer.
//!
//! Each call to [`StickFigureRenderer::draw_result`] pushes the pose into the
//! renderer's smoothing window and draws the averaged pose as a head circle plus
//! four tapered limbs. Limb segments whose endpoints are not confidently detected
//! are skipped rather than guessed.
//!
//! # Example
//!
//! ```rust
//! use pictogram::{Keypoint, Pose, RecordingSurface, RenderConfig, StickFigureRenderer};
//!
//! let mut renderer = StickFigureRenderer::new(RenderConfig::default());
//! let pose = Pose::new(vec![Keypoint::named("nose", 100.0, 50.0, 0.9); 17]);
//! let mut surface = RecordingSurface::new();
//! renderer.draw_result(&pose, &mut surface).unwrap();
//! assert!(!surface.commands().is_empty());
//! ```

use crate::config::{DrawMode, RenderConfig};
use crate::error::Result;
use crate::geometry::{face_center, joint_radii, split_left_right, stick_outline};
use crate::pose::{Keypoint, Pose};
use crate::smoother::KeypointSmoother;
use crate::surface::DrawingSurface;
use crate::topology::Topology;
use crate::visualizer::Color;
use crate::visualizer::skeleton::{LEFT_KEYPOINTS, MIDDLE_KEYPOINTS, RIGHT_KEYPOINTS, SKELETON};

/// Screen side of a limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Smaller x.
    Left,
    /// Larger x.
    Right,
}

/// Renders poses as pictogram stick figures.
///
/// Owns its smoothing window, so each independent drawing surface should get its
/// own renderer.
#[derive(Debug, Clone)]
pub struct StickFigureRenderer {
    config: RenderConfig,
    topology: Topology,
    smoother: KeypointSmoother,
}

impl StickFigureRenderer {
    /// Create a renderer for the COCO keypoint layout.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self::with_topology(config, Topology::coco())
    }

    /// Create a renderer for a custom keypoint layout.
    #[must_use]
    pub fn with_topology(config: RenderConfig, topology: Topology) -> Self {
        let smoother = KeypointSmoother::new(config.window_size);
        Self {
            config,
            topology,
            smoother,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Keypoint layout in use.
    #[must_use]
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Smoothing window state.
    #[must_use]
    pub const fn smoother(&self) -> &KeypointSmoother {
        &self.smoother
    }

    /// Forget all smoothing history.
    pub fn reset(&mut self) {
        self.smoother.clear();
    }

    /// Draw one detected pose with the configured mode.
    ///
    /// A pose without keypoints draws nothing and leaves the window untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::MissingKeypoint`](crate::PictogramError::MissingKeypoint)
    /// when the pose is shorter than the topology requires.
    pub fn draw_result<S: DrawingSurface + ?Sized>(&mut self, pose: &Pose, surface: &mut S) -> Result<()> {
        if pose.is_empty() {
            return Ok(());
        }
        match self.config.mode {
            DrawMode::StickFigure => self.draw_stick_figure(&pose.keypoints, surface),
            DrawMode::Keypoints => {
                self.draw_keypoints(&pose.keypoints, surface);
                Ok(())
            }
            DrawMode::Skeleton => {
                self.draw_skeleton(&pose.keypoints, surface);
                Ok(())
            }
        }
    }

    /// Smooth `keypoints` into the window and draw the averaged figure.
    ///
    /// # Errors
    ///
    /// Returns an error when the averaged pose is shorter than the topology requires.
    pub fn draw_stick_figure<S: DrawingSurface + ?Sized>(
        &mut self,
        keypoints: &[Keypoint],
        surface: &mut S,
    ) -> Result<()> {
        self.smoother.add(keypoints.to_vec());
        let averaged = self.smoother.average()?;
        self.render_averaged(&averaged, surface)
    }

    /// Draw an already-smoothed keypoint set without touching the window.
    ///
    /// Output depends only on `keypoints` and the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::MissingKeypoint`](crate::PictogramError::MissingKeypoint)
    /// before drawing anything when a limb index is out of range.
    pub fn render_averaged<S: DrawingSurface + ?Sized>(&self, keypoints: &[Keypoint], surface: &mut S) -> Result<()> {
        self.topology.check_len(keypoints.len())?;

        let threshold = self.config.score_threshold;
        let face_radius = self.config.face_radius;
        let radii = joint_radii(face_radius, self.config.radius_falloff);

        surface.set_fill_color(self.config.fill_color);

        if let Some(center) = face_center(keypoints, &self.topology.face_names, threshold) {
            surface.fill_circle(center, face_radius);
        }

        for chain in &self.topology.limbs {
            // Every joint level picks its own left/right from its own x values
            let levels = chain
                .levels()
                .map(|(a, b)| split_left_right(&keypoints[a], &keypoints[b]));

            for side in [Side::Left, Side::Right] {
                let joints = levels.map(|(left, right)| match side {
                    Side::Left => left,
                    Side::Right => right,
                });

                for seg in 0..2 {
                    let (from, to) = (joints[seg], joints[seg + 1]);
                    if from.is_reliable(threshold) && to.is_reliable(threshold) {
                        draw_stick(surface, from, radii[seg], to, radii[seg + 1]);
                    }
                }
            }
        }

        Ok(())
    }

    /// Draw each COCO keypoint as a dot: center line white, left green, right orange.
    ///
    /// Unsmoothed. Keypoints at or above the threshold are drawn.
    pub fn draw_keypoints<S: DrawingSurface + ?Sized>(&self, keypoints: &[Keypoint], surface: &mut S) {
        surface.set_stroke_color(Color::WHITE);
        surface.set_line_width(self.config.line_width);

        let groups: [(Color, &[usize]); 3] = [
            (Color::WHITE, &MIDDLE_KEYPOINTS),
            (Color::GREEN, &LEFT_KEYPOINTS),
            (Color::ORANGE, &RIGHT_KEYPOINTS),
        ];
        for (color, indices) in groups {
            surface.set_fill_color(color);
            for kp in indices.iter().filter_map(|&i| keypoints.get(i)) {
                if kp.confidence() >= self.config.score_threshold {
                    surface.fill_circle(kp.point(), self.config.keypoint_radius);
                    surface.stroke_circle(kp.point(), self.config.keypoint_radius);
                }
            }
        }
    }

    /// Draw straight white lines between adjacent COCO keypoints, leaving out the head.
    ///
    /// Unsmoothed. Both endpoints must be at or above the threshold.
    pub fn draw_skeleton<S: DrawingSurface + ?Sized>(&self, keypoints: &[Keypoint], surface: &mut S) {
        surface.set_fill_color(Color::WHITE);
        surface.set_stroke_color(Color::WHITE);
        surface.set_line_width(self.config.line_width);

        let is_head = |kp: &Keypoint| kp.name.as_deref().is_some_and(|n| self.topology.is_face(n));

        for [i, j] in SKELETON {
            let (Some(a), Some(b)) = (keypoints.get(i), keypoints.get(j)) else {
                continue;
            };
            if is_head(a) || is_head(b) {
                continue;
            }
            let threshold = self.config.score_threshold;
            if a.confidence() >= threshold && b.confidence() >= threshold {
                surface.stroke_line(a.point(), b.point());
            }
        }
    }
}

/// Round caps at both joints joined by a tapered body.
fn draw_stick<S: DrawingSurface + ?Sized>(surface: &mut S, from: &Keypoint, r1: f32, to: &Keypoint, r2: f32) {
    surface.fill_circle(from.point(), r1);
    surface.fill_circle(to.point(), r2);
    surface.fill_polygon(&stick_outline(from.point(), r1, to.point(), r2));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PictogramError;
    use crate::pose::Point;
    use crate::surface::{DrawCommand, RecordingSurface};
    use crate::topology::{COCO_KEYPOINT_NAMES, LimbChain};

    const POSITIONS: [(f32, f32); 17] = [
        (100.0, 50.0),
        (95.0, 45.0),
        (105.0, 45.0),
        (90.0, 50.0),
        (110.0, 50.0),
        (80.0, 100.0),
        (120.0, 100.0),
        (70.0, 140.0),
        (130.0, 140.0),
        (65.0, 180.0),
        (135.0, 180.0),
        (90.0, 200.0),
        (110.0, 200.0),
        (88.0, 260.0),
        (112.0, 260.0),
        (86.0, 320.0),
        (114.0, 320.0),
    ];

    fn standing_pose(score: f32) -> Pose {
        Pose::new(
            COCO_KEYPOINT_NAMES
                .iter()
                .zip(POSITIONS)
                .map(|(name, (x, y))| Keypoint::named(*name, x, y, score))
                .collect(),
        )
    }

    /// One chain over six unnamed keypoints: (0, 1), (2, 3), (4, 5).
    fn single_limb_renderer() -> StickFigureRenderer {
        let topology = Topology {
            keypoint_names: Vec::new(),
            face_names: Vec::new(),
            limbs: vec![LimbChain::from_root("arm", 0)],
        };
        StickFigureRenderer::with_topology(RenderConfig::default().with_window_size(1), topology)
    }

    fn limb_pose(scores: [f32; 6]) -> Pose {
        // Index 0/2/4 sit left of 1/3/5
        let xs = [0.0, 100.0, 0.0, 100.0, 0.0, 100.0];
        let ys = [0.0, 0.0, 50.0, 50.0, 100.0, 100.0];
        Pose::new((0..6).map(|i| Keypoint::new(xs[i], ys[i], scores[i])).collect())
    }

    #[test]
    fn test_full_figure() {
        let mut renderer = StickFigureRenderer::new(RenderConfig::default());
        let mut surface = RecordingSurface::new();
        renderer.draw_result(&standing_pose(0.9), &mut surface).unwrap();

        let commands = surface.commands();
        assert_eq!(commands[0], DrawCommand::SetFillColor(Color::PICTOGRAM));
        // head + 8 sticks of (2 circles + 1 polygon)
        assert_eq!(commands.len(), 2 + 8 * 3);
        assert_eq!(surface.polygons().len(), 8);

        let (head, radius) = surface.circles()[0];
        assert!((radius - 30.0).abs() < 1e-5);
        assert!((head.x - 100.0).abs() < 1e-4);
        assert!((head.y - 48.0).abs() < 1e-4);
    }

    #[test]
    fn test_stick_radii_taper() {
        let mut renderer = StickFigureRenderer::new(RenderConfig::default());
        let mut surface = RecordingSurface::new();
        renderer.draw_result(&standing_pose(0.9), &mut surface).unwrap();

        // First stick: left shoulder -> left elbow, then left elbow -> left wrist
        let circles = surface.circles();
        assert_eq!(circles[1], (Point::new(80.0, 100.0), 22.5));
        assert_eq!(circles[2], (Point::new(70.0, 140.0), 16.875));
        assert_eq!(circles[3], (Point::new(70.0, 140.0), 16.875));
        assert_eq!(circles[4], (Point::new(65.0, 180.0), 12.656_25));
    }

    #[test]
    fn test_low_confidence_segment_skipped() {
        let mut renderer = single_limb_renderer();
        let mut surface = RecordingSurface::new();
        // Left root 0.3, left mid 0.9: left upper segment skipped
        renderer
            .draw_result(&limb_pose([0.3, 0.9, 0.9, 0.9, 0.9, 0.9]), &mut surface)
            .unwrap();
        assert_eq!(surface.polygons().len(), 3);
        assert_eq!(surface.circles()[0].0, Point::new(0.0, 50.0));
    }

    #[test]
    fn test_reliable_segment_drawn() {
        let mut renderer = single_limb_renderer();
        let mut surface = RecordingSurface::new();
        renderer
            .draw_result(&limb_pose([0.6, 0.9, 0.9, 0.9, 0.9, 0.9]), &mut surface)
            .unwrap();
        assert_eq!(surface.polygons().len(), 4);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut renderer = single_limb_renderer();
        let mut surface = RecordingSurface::new();
        renderer
            .draw_result(&limb_pose([0.5, 0.5, 0.5, 0.5, 0.5, 0.5]), &mut surface)
            .unwrap();
        assert!(surface.polygons().is_empty());
        assert!(surface.circles().is_empty());
    }

    #[test]
    fn test_unscored_keypoints_are_drawn() {
        let mut renderer = single_limb_renderer();
        let mut surface = RecordingSurface::new();
        let mut pose = limb_pose([0.0; 6]);
        for kp in &mut pose.keypoints {
            kp.score = None;
        }
        renderer.draw_result(&pose, &mut surface).unwrap();
        assert_eq!(surface.polygons().len(), 4);
    }

    #[test]
    fn test_sides_split_per_joint_level() {
        let mut renderer = single_limb_renderer();
        let mut surface = RecordingSurface::new();
        // The middle pair is crossed over: index 3 is now left of index 2
        let mut pose = limb_pose([0.9; 6]);
        pose.keypoints[2].x = 100.0;
        pose.keypoints[3].x = 0.0;
        renderer.draw_result(&pose, &mut surface).unwrap();

        // Left chain goes 0 -> 3 -> 4, all at x = 0
        let circles = surface.circles();
        assert_eq!(circles[0].0, Point::new(0.0, 0.0));
        assert_eq!(circles[1].0, Point::new(0.0, 50.0));
        assert_eq!(circles[3].0, Point::new(0.0, 100.0));
    }

    #[test]
    fn test_no_face_no_head() {
        let mut renderer = StickFigureRenderer::new(RenderConfig::default());
        let mut surface = RecordingSurface::new();
        let mut pose = standing_pose(0.9);
        for kp in &mut pose.keypoints[..5] {
            kp.score = Some(0.1);
        }
        renderer.draw_result(&pose, &mut surface).unwrap();
        assert_eq!(surface.circles().len(), 16);
    }

    #[test]
    fn test_short_pose_fails_before_drawing() {
        let mut renderer = StickFigureRenderer::new(RenderConfig::default());
        let mut surface = RecordingSurface::new();
        let mut pose = standing_pose(0.9);
        pose.keypoints.truncate(10);

        let err = renderer.draw_result(&pose, &mut surface).unwrap_err();
        assert!(matches!(err, PictogramError::MissingKeypoint { index: 10, len: 10 }));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_empty_pose_is_noop() {
        let mut renderer = StickFigureRenderer::new(RenderConfig::default());
        let mut surface = RecordingSurface::new();
        renderer.draw_result(&Pose::default(), &mut surface).unwrap();
        assert!(surface.commands().is_empty());
        assert!(!renderer.smoother().is_ready());
    }

    #[test]
    fn test_drawing_is_idempotent_for_steady_window() {
        let mut renderer = StickFigureRenderer::new(RenderConfig::default().with_window_size(3));
        let pose = standing_pose(0.8);
        for _ in 0..3 {
            renderer.draw_result(&pose, &mut RecordingSurface::new()).unwrap();
        }

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        renderer.draw_result(&pose, &mut first).unwrap();
        renderer.draw_result(&pose, &mut second).unwrap();
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn test_smoothing_lags_movement() {
        let mut renderer = StickFigureRenderer::new(RenderConfig::default().with_window_size(2));
        renderer
            .draw_result(&standing_pose(0.9), &mut RecordingSurface::new())
            .unwrap();

        let mut moved = standing_pose(0.9);
        for kp in &mut moved.keypoints {
            kp.x += 10.0;
        }
        let mut surface = RecordingSurface::new();
        renderer.draw_result(&moved, &mut surface).unwrap();

        // Head is halfway between the two frames
        let (head, _) = surface.circles()[0];
        assert!((head.x - 105.0).abs() < 1e-4);
    }

    #[test]
    fn test_keypoint_mode() {
        let config = RenderConfig::default().with_mode(DrawMode::Keypoints);
        let mut renderer = StickFigureRenderer::new(config);
        let mut surface = RecordingSurface::new();
        let mut pose = standing_pose(0.9);
        pose.keypoints[7].score = Some(0.1);
        renderer.draw_result(&pose, &mut surface).unwrap();

        assert_eq!(surface.circles().len(), 16);
        assert!(surface.circles().iter().all(|(_, r)| (*r - 4.0).abs() < 1e-5));
        assert!(!renderer.smoother().is_ready());
    }

    #[test]
    fn test_skeleton_mode_skips_head() {
        let config = RenderConfig::default().with_mode(DrawMode::Skeleton);
        let mut renderer = StickFigureRenderer::new(config);
        let mut surface = RecordingSurface::new();
        renderer.draw_result(&standing_pose(0.9), &mut surface).unwrap();

        let lines = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count();
        // 16 pairs minus the 4 face pairs
        assert_eq!(lines, 12);
    }
}
