//! Platform abstraction layer
//!
//! Native desktop glue:
//! - Keyboard translation into simulation input events
//! - Window creation, frame pacing and presentation (minifb)

pub mod input;
pub mod window;

pub use input::{FrameInput, translate_keys};
pub use window::GameWindow;
