//! Simulation ⇄ presentation coordinate conversion.
//!
//! Simulation units are legacy pixels with Y growing downward.
//! Presentation units are 1/100 of a pixel-unit with Y growing upward.
//!
//!   presentation.x =  simulation.x / 100
//!   presentation.y = -simulation.y / 100
//!
//! Velocities convert with the same formulas (distance over the same time).

use glam::Vec2;

pub const PIXELS_PER_UNIT: f32 = 100.0;

#[inline]
pub fn to_presentation(v: Vec2) -> Vec2 {
    Vec2::new(v.x / PIXELS_PER_UNIT, -v.y / PIXELS_PER_UNIT)
}

#[inline]
pub fn to_simulation(v: Vec2) -> Vec2 {
    Vec2::new(v.x * PIXELS_PER_UNIT, -v.y * PIXELS_PER_UNIT)
}

#[inline]
pub fn x_to_presentation(x: f32) -> f32 { x / PIXELS_PER_UNIT }

#[inline]
pub fn y_to_presentation(y: f32) -> f32 { -y / PIXELS_PER_UNIT }

#[inline]
pub fn x_to_simulation(x: f32) -> f32 { x * PIXELS_PER_UNIT }

#[inline]
pub fn y_to_simulation(y: f32) -> f32 { -y * PIXELS_PER_UNIT }

/// Unsigned lengths only scale; there is no axis to flip.
#[inline]
pub fn distance_to_presentation(d: f32) -> f32 { d / PIXELS_PER_UNIT }

#[inline]
pub fn distance_to_simulation(d: f32) -> f32 { d * PIXELS_PER_UNIT }
