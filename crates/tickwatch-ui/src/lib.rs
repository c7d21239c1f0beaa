//! tickwatch UI — the clock and stopwatch widget core.
//!
//! The widget is host-agnostic: a GUI framework forwards ticks, size changes
//! and button presses to a [`ClockWidget`], which answers by assigning
//! properties on the host's [`ClockView`](view::ClockView).
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tickwatch_ui::prelude::*;
//!
//! let Launched { mut widget, fonts, font_family } = Application::new()
//!     .font("Roboto", regular_bytes, Some(bold_bytes))
//!     .launch(&mut my_view);
//!
//! // In the host's frame callback:
//! widget.tick(frame.dt, &mut my_view);
//!
//! // When the clock label is reallocated:
//! let measure = fonts.family("Roboto").unwrap();
//! widget.size_changed(Vec2::new(w, h), &measure, &mut my_view);
//! ```

pub mod app;
pub mod clock;
pub mod config;
pub mod event;
pub mod layout;
pub mod stopwatch;
pub mod view;
pub mod widget;

pub use app::{Application, Launched};
pub use widget::ClockWidget;

/// Everything a host needs — import this in the integration layer.
pub mod prelude {
    pub use crate::app::{Application, Launched};
    pub use crate::clock::{SystemClock, TimeDisplay, WallClock};
    pub use crate::config::WidgetConfig;
    pub use crate::event::HostEvent;
    pub use crate::layout::{
        Calibration, ControlsGeometry, LayoutOutcome, LayoutState, Rescale,
        ResponsiveLayoutAdapter, ScaleAxis,
    };
    pub use crate::stopwatch::{MalformedStopwatchText, Readout, StopwatchController};
    pub use crate::view::{ClockView, ViewState};
    pub use crate::widget::ClockWidget;

    // Re-export the engine primitives hosts touch.
    pub use tickwatch_engine::coords::Vec2;
    pub use tickwatch_engine::paint::Color;
    pub use tickwatch_engine::text::{FamilyMeasure, FontSystem, TextMeasure};
}
