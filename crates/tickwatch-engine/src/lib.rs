//! tickwatch engine crate.
//!
//! Host-side primitives shared by the widget core and whatever hosts it:
//! logging, frame timing, colors, and font measurement.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod text;
pub mod time;
