//! Headless host for the clock widget.
//!
//! Plays a short scripted session (resize, start, run, stop, reset) against
//! a [`ClockWidget`] in real time and logs what a window would be showing.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use tickwatch_engine::logging::{init_logging, LoggingConfig};
use tickwatch_engine::time::FrameClock;
use tickwatch_ui::prelude::*;

const FONT_FAMILY: &str = "Roboto";
const BACKGROUND: &str = "#ff6666";
const FRAME: Duration = Duration::from_millis(16);
/// How often the running display is logged.
const REPORT_EVERY: f64 = 0.5;

/// One scripted host action.
enum Step {
    Resize(f32, f32),
    Press(HostEvent),
    Run(Duration),
}

const SCRIPT: &[Step] = &[
    Step::Resize(820.0, 300.0),
    Step::Resize(820.0, 300.0),
    Step::Press(HostEvent::StartStopPressed),
    Step::Run(Duration::from_millis(2_200)),
    Step::Resize(400.0, 300.0),
    Step::Run(Duration::from_millis(600)),
    Step::Press(HostEvent::StartStopPressed),
    Step::Run(Duration::from_millis(300)),
    Step::Press(HostEvent::ResetPressed),
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let background = Color::from_hex(BACKGROUND).context("invalid window background")?;
    let mut app = Application::new().background(background);
    match load_fonts() {
        (Some(regular), bold) => app = app.font(FONT_FAMILY, regular, bold),
        (None, _) => log::warn!("no system font found; using nominal text metrics"),
    }

    let mut view = ConsoleView::default();
    let Launched { mut widget, fonts, font_family } = app.launch(&mut view);

    let family = font_family.as_deref().and_then(|name| fonts.family(name));
    let measure: &dyn TextMeasure = match &family {
        Some(m) => m,
        None => &NominalMeasure,
    };

    for step in SCRIPT {
        match step {
            Step::Resize(w, h) => {
                let allocated = Vec2::new(*w, *h);
                log::info!("resize to {w}x{h}");
                widget.handle(HostEvent::SizeChanged { allocated }, measure, &mut view);
            }
            Step::Press(event) => widget.handle(*event, measure, &mut view),
            Step::Run(duration) => run_for(&mut widget, measure, &mut view, *duration),
        }
    }

    log::info!(
        "final: clock {} | stopwatch {} [{}]",
        plain(&view.state.clock_text),
        plain(&view.state.stopwatch_text),
        view.state.start_label
    );
    Ok(())
}

/// Ticks the widget every frame for `duration` of wall time.
fn run_for(widget: &mut ClockWidget, measure: &dyn TextMeasure, view: &mut ConsoleView, duration: Duration) {
    let mut clock = FrameClock::new();
    let mut since_report = 0.0;
    let mut total = Duration::ZERO;

    while total < duration {
        thread::sleep(FRAME);
        let ft = clock.tick();
        total += Duration::from_secs_f64(ft.dt);
        since_report += ft.dt;

        widget.handle(HostEvent::Tick { dt: ft.dt }, measure, view);

        if since_report >= REPORT_EVERY {
            since_report = 0.0;
            log::info!(
                "frame {:>4}: clock {} | stopwatch {}",
                ft.frame_index,
                plain(&view.state.clock_text),
                plain(&view.state.stopwatch_text)
            );
        }
    }
}

fn plain(markup: &str) -> String {
    tickwatch_markup::parse_str(markup)
        .map(|m| m.plain_text())
        .unwrap_or_else(|_| markup.to_string())
}

fn load_fonts() -> (Option<Vec<u8>>, Option<Vec<u8>>) {
    fn read_first(paths: &[&str]) -> Option<Vec<u8>> {
        paths.iter().find_map(|p| std::fs::read(p).ok())
    }
    let regular = read_first(&[
        "/usr/share/fonts/truetype/roboto/unhinted/RobotoTTF/Roboto-Thin.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    ]);
    let bold = read_first(&[
        "/usr/share/fonts/truetype/roboto/unhinted/RobotoTTF/Roboto-Medium.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    ]);
    (regular, bold)
}

// ── NominalMeasure ────────────────────────────────────────────────────────

/// Fixed metrics for when no font could be loaded: each char is `0.6 * size`
/// wide and each line `1.2 * size` tall.
struct NominalMeasure;

impl TextMeasure for NominalMeasure {
    fn measure(&self, markup: &str, font_size: f32) -> Vec2 {
        let Ok(parsed) = tickwatch_markup::parse_str(markup) else {
            return Vec2::new(markup.chars().count() as f32, 1.2) * font_size;
        };
        parsed.runs.iter().fold(Vec2::zero(), |acc, run| {
            let size = run.size_or(font_size);
            let width = run.text.chars().count() as f32 * size * 0.6;
            Vec2::new(acc.x + width, acc.y.max(size * 1.2))
        })
    }
}

// ── ConsoleView ───────────────────────────────────────────────────────────

/// Records view properties and logs the ones a user would notice changing.
#[derive(Default)]
struct ConsoleView {
    state: ViewState,
}

impl ClockView for ConsoleView {
    fn set_clock_text(&mut self, markup: &str) {
        if self.state.clock_text != markup {
            log::trace!("clock text {markup:?}");
        }
        self.state.set_clock_text(markup);
    }

    fn set_stopwatch_text(&mut self, markup: &str) {
        log::trace!("stopwatch text {markup:?}");
        self.state.set_stopwatch_text(markup);
    }

    fn set_start_label(&mut self, label: &str) {
        log::info!("start button reads {label:?}");
        self.state.set_start_label(label);
    }

    fn set_clock_font_size(&mut self, size: f32) {
        log::info!("clock font size {size:.1}");
        self.state.set_clock_font_size(size);
    }

    fn set_stopwatch_font_size(&mut self, size: f32) {
        log::info!("stopwatch font size {size:.1}");
        self.state.set_stopwatch_font_size(size);
    }

    fn set_controls_geometry(&mut self, geometry: ControlsGeometry) {
        log::info!(
            "controls height {} padding {} spacing {}",
            geometry.height, geometry.padding, geometry.spacing
        );
        self.state.set_controls_geometry(geometry);
    }

    fn set_window_background(&mut self, color: Color) {
        log::info!("window background {color}");
        self.state.set_window_background(color);
    }

    fn set_controls_background(&mut self, color: Color) {
        log::info!("controls background {color}");
        self.state.set_controls_background(color);
    }

    fn set_font_family(&mut self, name: &str) {
        log::info!("font family {name}");
        self.state.set_font_family(name);
    }
}
