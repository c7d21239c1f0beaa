//! Paint primitives handed to the host for window and panel backgrounds.

mod color;

pub use color::{Color, ColorParseError};
