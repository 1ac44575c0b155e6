//! Footholds: directed ground segments.
//!
//! A foothold is a line segment in simulation coordinates (Y grows downward)
//! with optional links to the footholds sharing its left and right endpoints.
//!
//! ## Normalization
//!
//! Records arrive from the map provider in any direction. On construction the
//! endpoints are ordered so that `x1 <= x2`; when they are swapped the links are
//! swapped too, so `previous_id` always names the left neighbor and `next_id`
//! the right neighbor.
//!
//! ## Walls
//!
//! A segment with `x1 == x2` is a wall. Walls have no slope and no ground
//! height; they never support an entity but they do block horizontal motion.

use glam::Vec2;

use crate::error::FootholdError;

pub type FootholdId = u32;

/// Unvalidated foothold as handed in by the map provider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FootholdRecord {
    pub id: FootholdId,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub previous_id: Option<FootholdId>,
    pub next_id: Option<FootholdId>,
    pub layer: i32,
    pub one_way: bool,
}

impl FootholdRecord {
    pub fn new(id: FootholdId, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        FootholdRecord {
            id, x1, y1, x2, y2,
            previous_id: None,
            next_id: None,
            layer: 0,
            one_way: false,
        }
    }

    pub fn with_links(mut self, previous_id: Option<FootholdId>, next_id: Option<FootholdId>) -> Self {
        self.previous_id = previous_id;
        self.next_id = next_id;
        self
    }

    /// Links in the archive encoding, where `0` means "no neighbor".
    pub fn with_legacy_links(self, previous_id: u32, next_id: u32) -> Self {
        let link = |id: u32| (id != 0).then_some(id);
        self.with_links(link(previous_id), link(next_id))
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn one_way(mut self) -> Self {
        self.one_way = true;
        self
    }
}

/// Validated, normalized foothold. Immutable for the lifetime of its map.
#[derive(Clone, Debug, PartialEq)]
pub struct Foothold {
    id: FootholdId,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    previous_id: Option<FootholdId>,
    next_id: Option<FootholdId>,
    layer: i32,
    one_way: bool,
}

impl TryFrom<FootholdRecord> for Foothold {
    type Error = FootholdError;

    fn try_from(rec: FootholdRecord) -> Result<Self, Self::Error> {
        let id = rec.id;
        if ![rec.x1, rec.y1, rec.x2, rec.y2].iter().all(|c| c.is_finite()) {
            return Err(FootholdError::NonFinite { id });
        }
        if rec.x1 == rec.x2 && rec.y1 == rec.y2 {
            return Err(FootholdError::ZeroLength { id });
        }

        let fh = if rec.x1 <= rec.x2 {
            Foothold {
                id,
                x1: rec.x1, y1: rec.y1, x2: rec.x2, y2: rec.y2,
                previous_id: rec.previous_id,
                next_id: rec.next_id,
                layer: rec.layer,
                one_way: rec.one_way,
            }
        } else {
            Foothold {
                id,
                x1: rec.x2, y1: rec.y2, x2: rec.x1, y2: rec.y1,
                previous_id: rec.next_id,
                next_id: rec.previous_id,
                layer: rec.layer,
                one_way: rec.one_way,
            }
        };
        Ok(fh)
    }
}

impl Foothold {
    pub fn id(&self) -> FootholdId { self.id }
    pub fn x1(&self) -> f32 { self.x1 }
    pub fn y1(&self) -> f32 { self.y1 }
    pub fn x2(&self) -> f32 { self.x2 }
    pub fn y2(&self) -> f32 { self.y2 }
    pub fn previous_id(&self) -> Option<FootholdId> { self.previous_id }
    pub fn next_id(&self) -> Option<FootholdId> { self.next_id }
    pub fn layer(&self) -> i32 { self.layer }
    pub fn is_one_way(&self) -> bool { self.one_way }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// dy/dx, or `None` for a wall.
    pub fn slope(&self) -> Option<f32> {
        if self.is_wall() { return None; }
        Some((self.y2 - self.y1) / (self.x2 - self.x1))
    }

    /// Does the closed x-range `[x1, x2]` contain `x`?
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.x1 && x <= self.x2
    }

    /// Ground height at `x`: `y1 + (x - x1) * slope`.
    /// `None` outside the x-range and for walls.
    pub fn y_at(&self, x: f32) -> Option<f32> {
        if !self.spans_x(x) { return None; }
        let slope = self.slope()?;
        Some(self.y1 + (x - self.x1) * slope)
    }

    /// Surface height at `x` clamped into the x-range. Walls report their top.
    pub fn y_at_clamped(&self, x: f32) -> f32 {
        match self.slope() {
            Some(slope) => self.y1 + (x.clamp(self.x1, self.x2) - self.x1) * slope,
            None => self.top(),
        }
    }

    /// Smallest y (highest point on screen).
    pub fn top(&self) -> f32 { self.y1.min(self.y2) }

    /// Largest y (lowest point on screen).
    pub fn bottom(&self) -> f32 { self.y1.max(self.y2) }

    /// `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x1, self.top(), self.x2, self.bottom())
    }

    pub fn intersects_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> bool {
        self.x2 >= min_x && self.x1 <= max_x && self.bottom() >= min_y && self.top() <= max_y
    }

    pub fn links(&self) -> impl Iterator<Item = FootholdId> {
        self.previous_id.into_iter().chain(self.next_id)
    }

    /// Are the two footholds neighbors, in either direction?
    pub fn is_linked_to(&self, other: &Foothold) -> bool {
        self.previous_id == Some(other.id)
            || self.next_id == Some(other.id)
            || other.previous_id == Some(self.id)
            || other.next_id == Some(self.id)
    }

    /// Closest point on the segment to `p`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let a = Vec2::new(self.x1, self.y1);
        let ab = Vec2::new(self.x2, self.y2) - a;
        let t = ((p - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
        a + ab * t
    }
}
