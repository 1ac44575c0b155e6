//! Ladder regions: vertical climb lanes supplied by the map provider.
//!
//! A ladder is a vertical line at `x` spanning `top..=bottom` (Y grows
//! downward, so `top <= bottom`). The grab area is the rectangle
//! `[x - tolerance, x + tolerance] × [top, bottom]`.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LadderRegion {
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
}

impl LadderRegion {
    /// Endpoints may come in either order.
    pub fn new(x: f32, y1: f32, y2: f32) -> Self {
        LadderRegion { x, top: y1.min(y2), bottom: y1.max(y2) }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.top.is_finite() && self.bottom.is_finite()
    }

    /// Is `p` inside the grab rectangle?
    pub fn contains(&self, p: Vec2, tolerance: f32) -> bool {
        (p.x - self.x).abs() <= tolerance && p.y >= self.top && p.y <= self.bottom
    }

    /// Is there ladder above `y` to climb into?
    pub fn extends_above(&self, y: f32) -> bool { y > self.top }

    /// Is there ladder below `y` to climb into?
    pub fn extends_below(&self, y: f32) -> bool { y < self.bottom }
}
