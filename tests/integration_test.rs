// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the pictogram renderer

use pictogram::io::parse_poses;
use pictogram::topology::COCO_KEYPOINT_NAMES;
use pictogram::visualizer::Color;
use pictogram::{
    FrameLoop, FrameOutcome, ImageSurface, Keypoint, KeypointSmoother, PictogramError, Pose, RecordingSurface,
    RenderConfig, StickFigureRenderer,
};

fn t_pose(offset_x: f32) -> Pose {
    let positions = [
        (200.0, 60.0),
        (192.0, 52.0),
        (208.0, 52.0),
        (184.0, 58.0),
        (216.0, 58.0),
        (160.0, 120.0),
        (240.0, 120.0),
        (110.0, 120.0),
        (290.0, 120.0),
        (60.0, 120.0),
        (340.0, 120.0),
        (175.0, 230.0),
        (225.0, 230.0),
        (170.0, 310.0),
        (230.0, 310.0),
        (165.0, 390.0),
        (235.0, 390.0),
    ];
    Pose::new(
        COCO_KEYPOINT_NAMES
            .iter()
            .zip(positions)
            .map(|(name, (x, y))| Keypoint::named(*name, x + offset_x, y, 0.95))
            .collect(),
    )
}

#[test]
fn test_config_creation() {
    let config = RenderConfig::default();
    assert!((config.score_threshold - 0.5).abs() < f32::EPSILON);
    assert!((config.face_radius - 30.0).abs() < f32::EPSILON);
    assert_eq!(config.window_size, 5);
}

#[test]
fn test_smoother_window_reflects_latest_poses() {
    let mut smoother = KeypointSmoother::new(5);
    assert!(matches!(smoother.average(), Err(PictogramError::EmptyWindow)));

    for i in 0..8 {
        smoother.add(t_pose(i as f32 * 10.0).keypoints);
    }
    assert_eq!(smoother.len(), 5);

    // Offsets 30..=70 remain, mean offset 50
    let avg = smoother.average().unwrap();
    assert_eq!(avg.len(), 17);
    assert!((avg[0].x - 250.0).abs() < 1e-3);
    assert!((avg[0].y - 60.0).abs() < 1e-3);
}

#[test]
fn test_render_to_image() {
    let mut renderer = StickFigureRenderer::new(RenderConfig::default());
    let mut surface = ImageSurface::new(400, 420);
    surface.clear(Color::WHITE);
    renderer.draw_result(&t_pose(0.0), &mut surface).unwrap();

    let image = surface.image();
    let navy = Color::PICTOGRAM.to_rgba();
    // Head center, mid upper arm and mid shin are filled
    assert_eq!(*image.get_pixel(200, 56), navy);
    assert_eq!(*image.get_pixel(135, 120), navy);
    assert_eq!(*image.get_pixel(168, 350), navy);
    // Between the legs stays background
    assert_eq!(*image.get_pixel(200, 380), Color::WHITE.to_rgba());
}

#[test]
fn test_frame_loop_over_parsed_sequence() {
    let frame = serde_json::to_string(&t_pose(0.0)).unwrap();
    let short = r#"[{"x": 1.0, "y": 1.0, "score": 0.9}, {"x": 2.0, "y": 2.0, "score": 0.9}]"#;
    let text = format!("{frame}\nnull\n{short}\n{frame}\n");

    let frames = parse_poses(&text).unwrap();
    assert_eq!(frames.len(), 4);

    let mut frame_loop = FrameLoop::new(StickFigureRenderer::new(RenderConfig::default()));
    let mut surface = RecordingSurface::new();
    let outcomes: Vec<FrameOutcome> = frames
        .iter()
        .map(|pose| {
            surface.clear();
            frame_loop.tick(pose.as_ref(), &mut surface)
        })
        .collect();

    assert!(outcomes[0].is_drawn());
    assert!(matches!(outcomes[1], FrameOutcome::NoPose));
    assert!(matches!(
        outcomes[2],
        FrameOutcome::Skipped(PictogramError::MissingKeypoint { .. })
    ));
    assert!(outcomes[3].is_drawn());
    assert_eq!(frames[0].as_ref(), Some(&t_pose(0.0)));

    let stats = frame_loop.stats();
    assert_eq!((stats.drawn, stats.skipped, stats.empty), (2, 1, 1));
}
