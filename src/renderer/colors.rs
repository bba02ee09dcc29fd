//! Colors for game elements (RGBA, 0.0 - 1.0)

use crate::sim::BlockColor;

pub type Rgba = [f32; 4];

const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub const BACKGROUND: Rgba = rgb(255, 250, 240); // Floral white
pub const PLAYER: Rgba = rgb(255, 182, 193);
pub const LEVEL_TEXT: Rgba = rgb(64, 64, 64); // Dark gray
pub const BANNER_SHADE: Rgba = [0.0, 0.0, 0.0, 0.45];
pub const BANNER_TEXT: Rgba = rgb(255, 255, 255);

pub const BLOCK_PINK: Rgba = rgb(255, 204, 204);
pub const BLOCK_GREEN: Rgba = rgb(204, 255, 204);
pub const BLOCK_BLUE: Rgba = rgb(204, 204, 255);
pub const BLOCK_YELLOW: Rgba = rgb(252, 240, 167);
pub const BLOCK_PURPLE: Rgba = rgb(255, 204, 255);

pub fn block(color: BlockColor) -> Rgba {
    match color {
        BlockColor::Pink => BLOCK_PINK,
        BlockColor::Green => BLOCK_GREEN,
        BlockColor::Blue => BLOCK_BLUE,
        BlockColor::Yellow => BLOCK_YELLOW,
        BlockColor::Purple => BLOCK_PURPLE,
    }
}
