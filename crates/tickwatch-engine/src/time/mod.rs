//! Time subsystem.
//!
//! Hosts that only see frame timestamps use a `FrameClock` to turn them into
//! the per-tick deltas the widget core consumes.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
