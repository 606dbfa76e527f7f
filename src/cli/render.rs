// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;
#[cfg(feature = "visualize")]
use std::time::Duration;
use std::time::Instant;

use crate::cli::args::RenderArgs;
use crate::cli::logging::{self, Level};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::frame_loop::{FrameLoop, FrameStats};
use crate::io::{FrameWriter, find_next_run_dir, read_poses};
use crate::renderer::StickFigureRenderer;
use crate::surface::ImageSurface;
#[cfg(feature = "visualize")]
use crate::visualizer::Viewer;
use crate::visualizer::Color;
use crate::{VERSION, error, info, section, success, verbose, warn};

/// Build the renderer configuration from an optional config file and flag overrides.
///
/// # Errors
///
/// Returns an error if the config file is invalid or an override is out of range.
pub fn build_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)?,
        None => RenderConfig::default(),
    };

    if let Some(conf) = args.conf {
        config = config.with_score_threshold(conf);
    }
    if let Some(radius) = args.radius {
        config = config.with_face_radius(radius);
    }
    if let Some(falloff) = args.falloff {
        config = config.with_radius_falloff(falloff);
    }
    if let Some(window) = args.window {
        config = config.with_window_size(window);
    }
    if let Some(mode) = &args.mode {
        config = config.with_mode(mode.parse()?);
    }
    if let Some(color) = &args.color {
        config = config.with_fill_color(Color::from_hex(color)?);
    }

    config.validate()?;
    Ok(config)
}

/// Render a pose sequence into pictogram frames.
#[allow(
    clippy::too_many_lines,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn run_render(args: &RenderArgs) {
    if args.quiet {
        logging::set_level(Level::Quiet);
    } else {
        logging::set_verbose(args.verbose);
    }

    let config = match build_config(args) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let background = match Color::from_hex(&args.background) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let frames = match read_poses(&args.poses) {
        Ok(f) => f,
        Err(e) => {
            error!("Error loading poses: {e}");
            process::exit(1);
        }
    };

    if frames.is_empty() {
        warn!("No frames found in {}", args.poses.display());
        return;
    }

    info!("Pictogram {VERSION} 🚀 {}x{} {}", args.width, args.height, config.mode);
    verbose!(
        "conf={} radius={} falloff={} window={} color={}",
        config.score_threshold,
        config.face_radius,
        config.radius_falloff,
        config.window_size,
        config.fill_color
    );

    let mut writer = if args.save {
        let dir = find_next_run_dir(args.output.join("render"), "render");
        match FrameWriter::new(dir) {
            Ok(w) => Some(w),
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        }
    } else {
        None
    };

    #[cfg(feature = "visualize")]
    let mut viewer = if args.show {
        match Viewer::new("Pictogram", args.width as usize, args.height as usize) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    } else {
        None
    };

    #[cfg(not(feature = "visualize"))]
    if args.show {
        warn!("--show requires the 'visualize' feature. Compile with --features visualize to enable it.");
    }

    section!("Rendering {} from {}", plural(frames.len(), "frame"), args.poses.display());

    let mut surface = ImageSurface::new(args.width, args.height);
    let mut frame_loop = FrameLoop::new(StickFigureRenderer::new(config));
    let total = frames.len();
    let mut total_ms = 0.0;

    for (i, pose) in frames.iter().enumerate() {
        if args.transparent {
            surface.clear_transparent();
        } else {
            surface.clear(background);
        }

        let start = Instant::now();
        let outcome = frame_loop.tick(pose.as_ref(), &mut surface);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        total_ms += elapsed_ms;

        if outcome.is_drawn() {
            verbose!("frame {}/{}: {elapsed_ms:.2}ms", i + 1, total);
        }

        if let Some(w) = writer.as_mut() {
            if let Err(e) = w.write(&surface) {
                error!("Failed to save frame {i}: {e}");
                process::exit(1);
            }
        }

        #[cfg(feature = "visualize")]
        if let Some(v) = viewer.as_mut() {
            let open = v
                .update(surface.image(), background.to_u32())
                .and_then(|open| {
                    let budget = Duration::from_secs_f32(1.0 / args.fps.max(1.0));
                    let remaining = budget.saturating_sub(start.elapsed());
                    if open { v.wait(remaining) } else { Ok(false) }
                });
            match open {
                Ok(true) => {}
                Ok(false) => {
                    verbose!("Viewer closed, stopping at frame {}", i + 1);
                    break;
                }
                Err(e) => {
                    warn!("{e}");
                    viewer = None;
                }
            }
        }
    }

    let stats = frame_loop.stats();
    info!("{}", format_summary(&stats));
    verbose!("Speed: {:.2}ms render per frame", total_ms / stats.total().max(1) as f64);

    if let Some(w) = &writer {
        success!(
            "Saved {} to {}",
            plural(w.written(), "frame"),
            w.dir().display()
        );
    }
}

/// Summary line like "120 frames: 117 drawn, 1 skipped, 2 without pose".
fn format_summary(stats: &FrameStats) -> String {
    format!(
        "{}: {} drawn, {} skipped, {} without pose",
        plural(stats.total(), "frame"),
        stats.drawn,
        stats.skipped,
        stats.empty
    )
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
