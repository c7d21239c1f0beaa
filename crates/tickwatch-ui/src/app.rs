use tickwatch_engine::paint::Color;
use tickwatch_engine::text::{FamilyMeasure, FontSystem};

use crate::clock::WallClock;
use crate::config::WidgetConfig;
use crate::view::ClockView;
use crate::widget::ClockWidget;

// ── FontSource ────────────────────────────────────────────────────────────

/// Raw font bytes for one family: a regular face and an optional bold face.
struct FontSource {
    name: String,
    regular: Vec<u8>,
    bold: Option<Vec<u8>>,
}

// ── Application ───────────────────────────────────────────────────────────

/// Startup configuration for a clock widget.
///
/// Follows a builder pattern: register the font family, pick colors, then
/// [`launch`](Self::launch) against the host's view.
///
/// ```rust,ignore
/// let launched = Application::new()
///     .font("Roboto", include_bytes!("Roboto-Thin.ttf").to_vec(), Some(bold))
///     .background(Color::from_hex("#ff6666")?)
///     .launch(&mut view);
/// ```
pub struct Application {
    font: Option<FontSource>,
    background: Color,
    controls_background: Color,
    config: WidgetConfig,
    wall_clock: Option<Box<dyn WallClock>>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            font: None,
            background: Color::from_srgb_u8(0xff, 0x66, 0x66, 0xff),
            controls_background: Color::from_srgb_u8(0xe6, 0xe6, 0xe6, 0xff),
            config: WidgetConfig::default(),
            wall_clock: None,
        }
    }

    /// Register the display font family under `name`.
    ///
    /// Bold runs (the clock's hour) use `bold` when given, the regular face
    /// otherwise.
    pub fn font(mut self, name: impl Into<String>, regular: Vec<u8>, bold: Option<Vec<u8>>) -> Self {
        self.font = Some(FontSource { name: name.into(), regular, bold });
        self
    }

    /// Window background color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Background of the start/reset control strip.
    pub fn controls_background(mut self, color: Color) -> Self {
        self.controls_background = color;
        self
    }

    pub fn config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the system clock, e.g. for a frozen demo display.
    pub fn wall_clock(mut self, clock: impl WallClock + 'static) -> Self {
        self.wall_clock = Some(Box::new(clock));
        self
    }

    /// Registers fonts, applies startup properties to `view`, and returns the
    /// attached widget.
    ///
    /// A font family that fails to load is logged and skipped; the host then
    /// has to measure text itself.
    pub fn launch(self, view: &mut dyn ClockView) -> Launched {
        let mut fonts = FontSystem::new();
        let mut font_family = None;

        if let Some(src) = self.font {
            match fonts.register_family(&src.name, &src.regular, src.bold.as_deref()) {
                Ok(()) => font_family = Some(src.name),
                Err(e) => log::warn!("failed to load font '{}': {e}", src.name),
            }
        }

        view.set_window_background(self.background);
        view.set_controls_background(self.controls_background);
        if let Some(name) = &font_family {
            view.set_font_family(name);
        }

        let mut widget = ClockWidget::new(self.config);
        if let Some(clock) = self.wall_clock {
            widget.set_wall_clock(clock);
        }
        widget.attach(view);

        log::info!(
            "clock widget launched (font family: {}, background {})",
            font_family.as_deref().unwrap_or("<host default>"),
            self.background
        );

        Launched { widget, fonts, font_family }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── Launched ──────────────────────────────────────────────────────────────

/// A launched widget plus the fonts registered for it.
pub struct Launched {
    pub widget: ClockWidget,
    pub fonts: FontSystem,
    /// Name of the registered family, if it loaded.
    pub font_family: Option<String>,
}

impl Launched {
    /// Text measurer for the registered family.
    pub fn measure(&self) -> Option<FamilyMeasure<'_>> {
        self.font_family.as_deref().and_then(|name| self.fonts.family(name))
    }
}
