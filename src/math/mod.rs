mod matrix;
mod plane;
mod triangle;
mod vector;

pub use matrix::*;
pub use plane::*;
pub use triangle::*;
pub use vector::*;

use std::f32;

pub const TAU: f32 = f32::consts::PI * 2.0;

/// Wrap an angle in radians into `[0, TAU)`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}
