//! Software rendering module
//!
//! The render pass draws into any `Canvas`; the window presents a
//! `Framebuffer` of packed pixels.

pub mod canvas;
pub mod font;
pub mod scene;

pub use canvas::{Canvas, Color, Framebuffer, colors};
pub use font::HudFont;
pub use scene::render;
