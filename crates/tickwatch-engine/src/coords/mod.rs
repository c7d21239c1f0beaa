//! Coordinate types in logical pixels.

mod vec2;

pub use vec2::Vec2;
