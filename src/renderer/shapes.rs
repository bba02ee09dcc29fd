//! Shape decomposition for backends that only draw rects and circles

use glam::Vec2;

use crate::sim::Rect;

/// Float rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub min: Vec2,
    pub size: Vec2,
}

impl Quad {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

impl From<Rect> for Quad {
    fn from(rect: Rect) -> Self {
        Self {
            min: rect.min.as_vec2(),
            size: rect.size.as_vec2(),
        }
    }
}

/// A rounded rectangle as a cross of two quads plus four corner discs
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectParts {
    /// Full width, inset vertically by the radius
    pub horizontal: Quad,
    /// Full height, inset horizontally by the radius
    pub vertical: Quad,
    /// Corner disc centres: top-left, top-right, bottom-left, bottom-right
    pub corners: [Vec2; 4],
    pub radius: f32,
}

/// Split `quad` into primitives. The radius is clamped to half the shorter side.
pub fn rounded_rect_parts(quad: Quad, radius: f32) -> RoundedRectParts {
    let r = radius.clamp(0.0, quad.size.x.min(quad.size.y) / 2.0);
    let Vec2 { x, y } = quad.min;
    let Vec2 { x: w, y: h } = quad.size;

    RoundedRectParts {
        horizontal: Quad::new(x, y + r, w, h - 2.0 * r),
        vertical: Quad::new(x + r, y, w - 2.0 * r, h),
        corners: [
            Vec2::new(x + r, y + r),
            Vec2::new(x + w - r, y + r),
            Vec2::new(x + r, y + h - r),
            Vec2::new(x + w - r, y + h - r),
        ],
        radius: r,
    }
}
