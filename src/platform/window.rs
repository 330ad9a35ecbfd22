//! Native window backed by minifb

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use super::input::{FrameInput, translate_keys};
use crate::renderer::Framebuffer;
use crate::settings::Settings;

/// Game window: keyboard source, frame limiter and presentation surface
pub struct GameWindow {
    window: Window,
}

impl GameWindow {
    /// Open a fixed-size window paced to the configured frame rate
    pub fn open(settings: &Settings, width: usize, height: usize) -> Result<Self, minifb::Error> {
        let mut window = Window::new(&settings.window_title, width, height, WindowOptions::default())?;
        window.set_target_fps(settings.fps());
        log::info!("Opened {}x{} window at {} fps", width, height, settings.fps());
        Ok(Self { window })
    }

    /// False once the user closed the window
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Key presses and releases reported since the last presented frame
    pub fn poll_input(&self) -> FrameInput {
        let pressed: Vec<Key> = self.window.get_keys_pressed(KeyRepeat::No);
        let released: Vec<Key> = self.window.get_keys_released();
        translate_keys(&pressed, &released)
    }

    /// Show the frame; blocks as needed to hold the target frame rate
    pub fn present(&mut self, frame: &Framebuffer) -> Result<(), minifb::Error> {
        self.window
            .update_with_buffer(frame.pixels(), frame.width(), frame.height())
    }
}
