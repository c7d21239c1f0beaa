use std::fmt;
use std::str::FromStr;

use tickwatch_markup::MarkupWriter;

use crate::config::WidgetConfig;

/// Stopwatch markup that does not decode into a [`Readout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedStopwatchText(pub String);

impl fmt::Display for MalformedStopwatchText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed stopwatch text: {}", self.0)
    }
}

impl std::error::Error for MalformedStopwatchText {}

// ── Readout ───────────────────────────────────────────────────────────────

/// Elapsed time split into the displayed fields.
///
/// Every field is a floor, so `65.256` s reads `01:05.25`, never `.26`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Readout {
    pub minutes: u64,
    pub seconds: u8,
    pub hundredths: u8,
}

impl Readout {
    pub const ZERO: Readout = Readout { minutes: 0, seconds: 0, hundredths: 0 };

    pub fn from_elapsed(elapsed: f64) -> Self {
        let e = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
        Self {
            minutes: (e / 60.0).floor() as u64,
            seconds: (e % 60.0).floor() as u8,
            hundredths: ((e * 100.0) % 100.0).floor() as u8,
        }
    }

    /// `MM:SS.[size=N]hh[/size]` with the hundredths span at `hundredths_size` px.
    pub fn to_markup(&self, hundredths_size: u32) -> String {
        MarkupWriter::new()
            .text(&format!("{:02}:{:02}.", self.minutes, self.seconds))
            .sized(hundredths_size, &format!("{:02}", self.hundredths))
            .finish()
    }
}

impl FromStr for Readout {
    type Err = MalformedStopwatchText;

    /// Accepts `MM:SS.hh` with the hundredths optionally wrapped in a
    /// `[size=N]` span.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |why: &str| MalformedStopwatchText(format!("{s:?}: {why}"));

        let markup = tickwatch_markup::parse_str(s).map_err(|e| malformed(&e.to_string()))?;
        if markup.runs.iter().any(|r| r.bold) {
            return Err(malformed("unexpected bold span"));
        }
        let plain = markup.plain_text();

        let (minutes, rest) = plain.split_once(':').ok_or_else(|| malformed("missing ':'"))?;
        let (seconds, hundredths) = rest.split_once('.').ok_or_else(|| malformed("missing '.'"))?;

        let minutes = digits::<u64>(minutes).ok_or_else(|| malformed("bad minutes"))?;
        let seconds = digits::<u8>(seconds)
            .filter(|s| *s < 60)
            .ok_or_else(|| malformed("bad seconds"))?;
        let hundredths = digits::<u8>(hundredths)
            .filter(|h| *h < 100)
            .ok_or_else(|| malformed("bad hundredths"))?;

        Ok(Self { minutes, seconds, hundredths })
    }
}

fn digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Pixel size of the hundredths span. Truncates like an integer cast.
#[inline]
fn span_size(font_size: f32, ratio: f32) -> u32 {
    (font_size * ratio).max(0.0) as u32
}

// ── StopwatchController ───────────────────────────────────────────────────

/// Owns stopwatch state: running flag, accumulated seconds, and the readout
/// currently on screen.
#[derive(Debug, Clone)]
pub struct StopwatchController {
    running: bool,
    elapsed: f64,
    shown: Readout,
    hundredths_ratio: f32,
    rescale_ratio: f32,
    start_label: String,
    stop_label: String,
}

impl StopwatchController {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            running: false,
            elapsed: 0.0,
            shown: Readout::ZERO,
            hundredths_ratio: config.hundredths_ratio,
            rescale_ratio: config.rescale_hundredths_ratio,
            start_label: config.start_label.clone(),
            stop_label: config.stop_label.clone(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Accumulated seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// The readout last handed to the view.
    #[inline]
    pub fn readout(&self) -> Readout {
        self.shown
    }

    /// Label naming the next available action.
    pub fn label(&self) -> &str {
        if self.running { &self.stop_label } else { &self.start_label }
    }

    /// Accumulates `dt` while running and returns the new text.
    ///
    /// Returns `None` when stopped: the view keeps what it last showed.
    /// Negative or non-finite deltas are ignored so the value never decreases.
    pub fn on_tick(&mut self, dt: f64, font_size: f32) -> Option<String> {
        if !self.running {
            return None;
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.shown = Readout::from_elapsed(self.elapsed);
        Some(self.shown.to_markup(span_size(font_size, self.hundredths_ratio)))
    }

    /// Flips the running flag and returns the new button label.
    pub fn on_toggle(&mut self) -> &str {
        self.running = !self.running;
        log::debug!("stopwatch {} at {:.2}s", if self.running { "started" } else { "stopped" }, self.elapsed);
        self.label()
    }

    /// Stops and zeroes the stopwatch; returns the zero text.
    pub fn on_reset(&mut self, font_size: f32) -> String {
        self.running = false;
        self.elapsed = 0.0;
        self.shown = Readout::ZERO;
        self.shown.to_markup(span_size(font_size, self.hundredths_ratio))
    }

    /// Re-emits the shown readout for a new font size after a relayout.
    pub fn rescale(&self, font_size: f32) -> String {
        self.shown.to_markup(span_size(font_size, self.rescale_ratio))
    }

    /// Text for the current readout at the regular hundredths ratio.
    pub fn text(&self, font_size: f32) -> String {
        self.shown.to_markup(span_size(font_size, self.hundredths_ratio))
    }
}
