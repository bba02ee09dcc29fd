//! Rendering module
//!
//! The simulation snapshot is turned into a flat list of draw commands that
//! any backend with rectangles, circles and text can execute.

pub mod colors;
pub mod frame;
pub mod shapes;

pub use frame::{DrawCommand, build_frame, game_over_message};
pub use shapes::{Quad, RoundedRectParts, rounded_rect_parts};
