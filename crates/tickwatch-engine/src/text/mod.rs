//! Font registration and natural text measurement.

mod font_system;

pub use font_system::{FamilyMeasure, FontLoadError, FontSystem, TextMeasure};
