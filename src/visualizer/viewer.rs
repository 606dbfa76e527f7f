// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Preview window for rendered frames.

use std::time::{Duration, Instant};

use image::RgbaImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{PictogramError, Result};

/// A simple frame viewer using minifb.
pub struct Viewer {
    window: Window,
    width: usize,
    height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::VisualizerError`] if the window cannot be opened.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| PictogramError::VisualizerError(format!("Failed to create window: {e}")))?;

        // ~60 fps
        window.set_target_fps(60);

        Ok(Self {
            window,
            width,
            height,
            buffer: vec![0; width * height],
        })
    }

    /// Whether the user has closed the window or pressed Escape / Q.
    #[must_use]
    pub fn should_close(&self) -> bool {
        !self.window.is_open() || self.window.is_key_down(Key::Escape) || self.window.is_key_down(Key::Q)
    }

    /// Show a frame. Transparent pixels are composited over `background`.
    ///
    /// Returns `Ok(false)` once the user has asked to close the window.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::VisualizerError`] if the window update fails.
    pub fn update(&mut self, frame: &RgbaImage, background: u32) -> Result<bool> {
        if self.should_close() {
            return Ok(false);
        }

        let (width, height) = (frame.width() as usize, frame.height() as usize);
        if self.buffer.len() != width * height {
            self.buffer.resize(width * height, 0);
        }
        self.width = width;
        self.height = height;

        for (dst, px) in self.buffer.iter_mut().zip(frame.pixels()) {
            let [r, g, b, a] = px.0;
            *dst = blend(u32::from(r), u32::from(g), u32::from(b), u32::from(a), background);
        }

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| PictogramError::VisualizerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }

    /// Keep the window responsive for `duration`.
    ///
    /// Returns `Ok(false)` if the user closed the window meanwhile.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::VisualizerError`] if the window update fails.
    pub fn wait(&mut self, duration: Duration) -> Result<bool> {
        let start = Instant::now();
        while start.elapsed() < duration {
            if self.should_close() {
                return Ok(false);
            }
            self.window
                .update_with_buffer(&self.buffer, self.width, self.height)
                .map_err(|e| PictogramError::VisualizerError(format!("Failed to update window: {e}")))?;
        }
        Ok(true)
    }
}

/// Alpha-blend an RGBA pixel over a `0x00RRGGBB` background.
fn blend(r: u32, g: u32, b: u32, a: u32, background: u32) -> u32 {
    let (br, bg, bb) = ((background >> 16) & 0xff, (background >> 8) & 0xff, background & 0xff);
    let mix = |fg: u32, bgc: u32| (fg * a + bgc * (255 - a)) / 255;
    (mix(r, br) << 16) | (mix(g, bg) << 8) | mix(b, bb)
}
