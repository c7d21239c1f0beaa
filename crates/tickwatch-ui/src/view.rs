use tickwatch_engine::paint::Color;

use crate::layout::ControlsGeometry;

/// Render targets the host paints.
///
/// Every method is a plain property assignment; the widget never reads back
/// from the view. Text values are markup (see `tickwatch_markup`).
pub trait ClockView {
    fn set_clock_text(&mut self, markup: &str);
    fn set_stopwatch_text(&mut self, markup: &str);
    fn set_start_label(&mut self, label: &str);
    fn set_clock_font_size(&mut self, size: f32);
    fn set_stopwatch_font_size(&mut self, size: f32);
    fn set_controls_geometry(&mut self, geometry: ControlsGeometry);

    // Startup configuration. Hosts that manage these themselves can ignore them.
    fn set_window_background(&mut self, _color: Color) {}
    fn set_controls_background(&mut self, _color: Color) {}
    fn set_font_family(&mut self, _name: &str) {}
}

/// A view that just remembers the last value of every property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub clock_text: String,
    pub stopwatch_text: String,
    pub start_label: String,
    pub clock_font_size: f32,
    pub stopwatch_font_size: f32,
    pub controls: ControlsGeometry,
    pub window_background: Option<Color>,
    pub controls_background: Option<Color>,
    pub font_family: Option<String>,
}

impl ClockView for ViewState {
    fn set_clock_text(&mut self, markup: &str) {
        self.clock_text = markup.to_string();
    }

    fn set_stopwatch_text(&mut self, markup: &str) {
        self.stopwatch_text = markup.to_string();
    }

    fn set_start_label(&mut self, label: &str) {
        self.start_label = label.to_string();
    }

    fn set_clock_font_size(&mut self, size: f32) {
        self.clock_font_size = size;
    }

    fn set_stopwatch_font_size(&mut self, size: f32) {
        self.stopwatch_font_size = size;
    }

    fn set_controls_geometry(&mut self, geometry: ControlsGeometry) {
        self.controls = geometry;
    }

    fn set_window_background(&mut self, color: Color) {
        self.window_background = Some(color);
    }

    fn set_controls_background(&mut self, color: Color) {
        self.controls_background = Some(color);
    }

    fn set_font_family(&mut self, name: &str) {
        self.font_family = Some(name.to_string());
    }
}
