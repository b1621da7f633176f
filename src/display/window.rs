//! Windowed display backend built on macroquad.
//!
//! Cells land in a CPU-side [`Image`] one pixel each; `present` uploads
//! the image to a texture, stretches it over the window, and sleeps off
//! whatever remains of the frame budget.

use std::thread;
use std::time::{Duration, Instant};

use macroquad::prelude::*;
use tracing::debug;

use super::DisplayService;
use crate::config::{ALIVE_COLOR, DEAD_COLOR};
use crate::error::{Error, Result};

/// Pixel canvas plus the GPU texture it is streamed through
struct Canvas {
    image: Image,
    texture: Texture2D,
}

/// Display backend that renders the grid into the application window,
/// one pixel per cell, capped at a fixed frame rate.
pub struct WindowDisplay {
    fps: u32,
    canvas: Option<Canvas>,
    last_present: Instant,
    fullscreen: bool,
}

impl WindowDisplay {
    /// Create a display pacing itself at `fps` frames per second.
    /// No window resources are touched until `init`.
    pub fn new(fps: u32) -> Self {
        Self {
            fps,
            canvas: None,
            last_present: Instant::now(),
            fullscreen: false,
        }
    }

    /// Sleep off the unused part of the frame budget, then start timing
    /// the next frame.
    fn pace(&mut self) {
        let leftover = remainder(frame_budget(self.fps), self.last_present.elapsed());
        if !leftover.is_zero() {
            thread::sleep(leftover);
        }
        self.last_present = Instant::now();
    }
}

impl DisplayService for WindowDisplay {
    fn init(&mut self, width: usize, height: usize) -> Result<()> {
        if width == 0
            || height == 0
            || width > u16::MAX as usize
            || height > u16::MAX as usize
        {
            return Err(Error::DisplayInit {
                reason: format!("unsupported canvas size {width}x{height}"),
            });
        }

        // Route window close requests through poll instead of killing
        // the process.
        prevent_quit();

        let image = Image::gen_image_color(width as u16, height as u16, DEAD_COLOR);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);

        self.canvas = Some(Canvas { image, texture });
        self.last_present = Instant::now();
        debug!(width, height, fps = self.fps, "display initialized");
        Ok(())
    }

    fn poll(&mut self) -> bool {
        if self.canvas.is_none() {
            return false;
        }

        if is_key_pressed(KeyCode::F11) {
            self.fullscreen = !self.fullscreen;
            set_fullscreen(self.fullscreen);
        }

        !(is_key_pressed(KeyCode::Escape) || is_quit_requested())
    }

    fn set_pixel(&mut self, x: usize, y: usize, alive: bool) {
        let Some(canvas) = &mut self.canvas else {
            return;
        };
        if x >= canvas.image.width() || y >= canvas.image.height() {
            return;
        }
        let color = if alive { ALIVE_COLOR } else { DEAD_COLOR };
        canvas.image.set_pixel(x as u32, y as u32, color);
    }

    async fn present(&mut self) -> Result<()> {
        let Some(canvas) = &self.canvas else {
            return Ok(());
        };

        canvas.texture.update(&canvas.image);

        clear_background(DEAD_COLOR);
        draw_texture_ex(
            &canvas.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
        next_frame().await;

        self.pace();
        Ok(())
    }

    fn teardown(&mut self) {
        if self.canvas.take().is_some() {
            debug!("display torn down");
        }
    }
}

/// Duration one frame may occupy at the target rate
fn frame_budget(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

/// Portion of the budget left after a frame that took `elapsed`
fn remainder(budget: Duration, elapsed: Duration) -> Duration {
    budget.saturating_sub(elapsed)
}
