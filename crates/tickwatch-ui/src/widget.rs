use tickwatch_engine::coords::Vec2;
use tickwatch_engine::text::TextMeasure;

use crate::clock::{SystemClock, TimeDisplay, WallClock};
use crate::config::WidgetConfig;
use crate::event::HostEvent;
use crate::layout::{LayoutOutcome, ResponsiveLayoutAdapter};
use crate::stopwatch::StopwatchController;
use crate::view::ClockView;

/// The clock + stopwatch widget.
///
/// Owns all widget state and reacts to host callbacks by assigning
/// properties on a [`ClockView`]. Hosts keep one `ClockWidget` per window and
/// call into it from their event loop; nothing here is shared or global.
///
/// # Example
/// ```rust
/// use tickwatch_ui::prelude::*;
///
/// let mut view = ViewState::default();
/// let mut widget = ClockWidget::new(WidgetConfig::default());
/// widget.attach(&mut view);
/// widget.start_stop_pressed(&mut view);
/// widget.tick(1.5, &mut view);
/// assert_eq!(view.start_label, "Stop");
/// assert_eq!(view.stopwatch_text, "00:01.[size=49]50[/size]");
/// ```
pub struct ClockWidget {
    wall_clock: Box<dyn WallClock>,
    stopwatch: StopwatchController,
    layout: ResponsiveLayoutAdapter,
    font_size: f32,
    /// Last clock markup handed to the view; measured for calibration.
    clock_text: String,
}

impl ClockWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            wall_clock: Box::new(SystemClock),
            stopwatch: StopwatchController::new(&config),
            layout: ResponsiveLayoutAdapter::new(&config),
            font_size: config.initial_font_size,
            clock_text: String::new(),
        }
    }

    /// Replaces the time source.
    pub fn with_wall_clock(mut self, clock: impl WallClock + 'static) -> Self {
        self.wall_clock = Box::new(clock);
        self
    }

    pub(crate) fn set_wall_clock(&mut self, clock: Box<dyn WallClock>) {
        self.wall_clock = clock;
    }

    /// Current font size of both displays.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn stopwatch(&self) -> &StopwatchController {
        &self.stopwatch
    }

    pub fn layout(&self) -> &ResponsiveLayoutAdapter {
        &self.layout
    }

    /// Pushes the full initial state to a freshly created view.
    pub fn attach(&mut self, view: &mut dyn ClockView) {
        self.refresh_clock(view);
        view.set_clock_font_size(self.font_size);
        view.set_stopwatch_font_size(self.font_size);
        view.set_stopwatch_text(&self.stopwatch.text(self.font_size));
        view.set_start_label(self.stopwatch.label());
    }

    /// Per-frame update: the clock always, the stopwatch while running.
    pub fn tick(&mut self, dt: f64, view: &mut dyn ClockView) {
        self.refresh_clock(view);
        if let Some(text) = self.stopwatch.on_tick(dt, self.font_size) {
            view.set_stopwatch_text(&text);
        }
    }

    pub fn start_stop_pressed(&mut self, view: &mut dyn ClockView) {
        let label = self.stopwatch.on_toggle();
        view.set_start_label(label);
    }

    pub fn reset_pressed(&mut self, view: &mut dyn ClockView) {
        let text = self.stopwatch.on_reset(self.font_size);
        view.set_start_label(self.stopwatch.label());
        view.set_stopwatch_text(&text);
    }

    /// The clock display's box changed to `allocated`.
    ///
    /// The first usable call calibrates against the natural size of the
    /// current clock text and changes nothing visible; later calls rescale
    /// both displays and the control strip.
    pub fn size_changed(
        &mut self,
        allocated: Vec2,
        measure: &dyn TextMeasure,
        view: &mut dyn ClockView,
    ) -> LayoutOutcome {
        if self.clock_text.is_empty() {
            self.clock_text = TimeDisplay::render_now(self.wall_clock.as_ref());
        }
        let (text, font_size) = (&self.clock_text, self.font_size);
        let outcome = self
            .layout
            .on_size_changed(allocated, font_size, || measure.measure(text, font_size));

        if let LayoutOutcome::Rescaled(rescale) = outcome {
            self.font_size = rescale.font_size;
            view.set_clock_font_size(rescale.font_size);
            view.set_stopwatch_font_size(rescale.font_size);
            view.set_stopwatch_text(&self.stopwatch.rescale(rescale.font_size));
            view.set_controls_geometry(rescale.controls);
        }
        outcome
    }

    /// Dispatches a host event to the matching callback.
    pub fn handle(&mut self, event: HostEvent, measure: &dyn TextMeasure, view: &mut dyn ClockView) {
        match event {
            HostEvent::Tick { dt }                => self.tick(dt, view),
            HostEvent::SizeChanged { allocated } => { self.size_changed(allocated, measure, view); }
            HostEvent::StartStopPressed           => self.start_stop_pressed(view),
            HostEvent::ResetPressed               => self.reset_pressed(view),
        }
    }

    fn refresh_clock(&mut self, view: &mut dyn ClockView) {
        self.clock_text = TimeDisplay::render_now(self.wall_clock.as_ref());
        view.set_clock_text(&self.clock_text);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::NaiveTime;

    use super::*;
    use crate::layout::{ControlsGeometry, LayoutState};
    use crate::view::ViewState;

    /// Every char is `0.5 * size` wide, every line `size` tall.
    struct HalfWidth {
        calls: Cell<u32>,
    }

    impl HalfWidth {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl TextMeasure for HalfWidth {
        fn measure(&self, markup: &str, font_size: f32) -> Vec2 {
            self.calls.set(self.calls.get() + 1);
            let plain = tickwatch_markup::parse_str(markup).unwrap().plain_text();
            Vec2::new(plain.chars().count() as f32 * font_size * 0.5, font_size)
        }
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn widget() -> (ClockWidget, ViewState) {
        let mut view = ViewState::default();
        let mut w = ClockWidget::new(WidgetConfig::default()).with_wall_clock(noon);
        w.attach(&mut view);
        (w, view)
    }

    #[test]
    fn attach_renders_initial_state() {
        let (_, view) = widget();
        assert_eq!(view.clock_text, "[b]12[/b]:00:00");
        assert_eq!(view.stopwatch_text, "00:00.[size=49]00[/size]");
        assert_eq!(view.start_label, "Start");
        assert_eq!(view.clock_font_size, 70.0);
        assert_eq!(view.stopwatch_font_size, 70.0);
    }

    #[test]
    fn tick_while_stopped_only_touches_clock() {
        let (mut w, mut view) = widget();
        view.stopwatch_text = "sentinel".to_string();
        w.tick(0.5, &mut view);
        assert_eq!(view.stopwatch_text, "sentinel");
        assert_eq!(view.clock_text, "[b]12[/b]:00:00");
    }

    #[test]
    fn run_stop_reset_cycle() {
        let (mut w, mut view) = widget();
        w.start_stop_pressed(&mut view);
        assert_eq!(view.start_label, "Stop");
        w.tick(65.0, &mut view);
        w.tick(0.256, &mut view);
        assert_eq!(view.stopwatch_text, "01:05.[size=49]25[/size]");

        w.start_stop_pressed(&mut view);
        assert_eq!(view.start_label, "Start");
        w.tick(10.0, &mut view);
        assert_eq!(view.stopwatch_text, "01:05.[size=49]25[/size]");

        w.reset_pressed(&mut view);
        assert_eq!(view.stopwatch_text, "00:00.[size=49]00[/size]");
        assert_eq!(view.start_label, "Start");
        assert!(!w.stopwatch().is_running());
    }

    #[test]
    fn reset_while_running_stops() {
        let (mut w, mut view) = widget();
        w.start_stop_pressed(&mut view);
        w.tick(3.0, &mut view);
        w.reset_pressed(&mut view);
        w.tick(3.0, &mut view);
        assert_eq!(view.stopwatch_text, "00:00.[size=49]00[/size]");
        assert_eq!(w.stopwatch().elapsed(), 0.0);
    }

    #[test]
    fn first_size_change_calibrates_without_visible_change() {
        let (mut w, mut view) = widget();
        let before = view.clone();
        let measure = HalfWidth::new();
        let out = w.size_changed(Vec2::new(800.0, 200.0), &measure, &mut view);

        // "12:00:00" at 70px: 8 * 35 = 280 wide, 70 tall.
        match out {
            LayoutOutcome::Calibrated(c) => {
                assert_eq!(c.font_to_texture_ratio, 1.0);
                assert_eq!(c.texture_aspect_ratio, 4.0);
            }
            other => panic!("expected calibration, got {other:?}"),
        }
        assert_eq!(view, before);
        assert_eq!(measure.calls.get(), 1);
    }

    #[test]
    fn later_size_changes_rescale_everything() {
        let (mut w, mut view) = widget();
        let measure = HalfWidth::new();
        w.size_changed(Vec2::new(800.0, 200.0), &measure, &mut view);
        w.start_stop_pressed(&mut view);
        w.tick(65.256, &mut view);

        // aspect 2.0 < 4.0 -> width branch: 400 * 0.8 / 4 = 80
        let out = w.size_changed(Vec2::new(400.0, 200.0), &measure, &mut view);
        assert!(matches!(out, LayoutOutcome::Rescaled(_)));
        assert_eq!(measure.calls.get(), 1);
        assert!((view.clock_font_size - 80.0).abs() < 1e-4);
        assert_eq!(view.stopwatch_font_size, view.clock_font_size);
        assert_eq!(view.stopwatch_text, "01:05.[size=48]25[/size]");
        assert_eq!(view.controls, ControlsGeometry { height: 80, padding: 12, spacing: 12 });

        // Next running tick returns to the 70% span at the new size.
        w.tick(0.0, &mut view);
        assert_eq!(view.stopwatch_text, "01:05.[size=56]25[/size]");
    }

    #[test]
    fn calibration_survives_many_resizes() {
        let (mut w, mut view) = widget();
        let measure = HalfWidth::new();
        w.size_changed(Vec2::new(800.0, 200.0), &measure, &mut view);
        let first = w.layout().calibration().unwrap();
        for i in 1..20 {
            let size = Vec2::new(100.0 * i as f32, 37.0 * i as f32);
            w.size_changed(size, &measure, &mut view);
        }
        let last = w.layout().calibration().unwrap();
        assert_eq!(first.font_to_texture_ratio.to_bits(), last.font_to_texture_ratio.to_bits());
        assert_eq!(first.texture_aspect_ratio.to_bits(), last.texture_aspect_ratio.to_bits());
        assert!(matches!(w.layout().state(), LayoutState::Calibrated(_)));
        assert_eq!(measure.calls.get(), 1);
    }

    #[test]
    fn handle_dispatches_events() {
        let (mut w, mut view) = widget();
        let measure = HalfWidth::new();
        w.handle(HostEvent::StartStopPressed, &measure, &mut view);
        w.handle(HostEvent::Tick { dt: 2.5 }, &measure, &mut view);
        assert_eq!(view.stopwatch_text, "00:02.[size=49]50[/size]");
        w.handle(HostEvent::SizeChanged { allocated: Vec2::new(800.0, 200.0) }, &measure, &mut view);
        assert!(w.layout().calibration().is_some());
        w.handle(HostEvent::ResetPressed, &measure, &mut view);
        assert_eq!(view.start_label, "Start");
    }
}
