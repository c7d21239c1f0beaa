use std::collections::HashMap;
use std::fmt;

use tickwatch_markup::{Markup, Run};

use crate::coords::Vec2;

/// Line height used when a font carries no horizontal line metrics.
const FALLBACK_LINE_HEIGHT: f32 = 1.2;

/// Error returned by [`FontSystem::register_family`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Natural (unscaled) text measurement.
///
/// `measure` returns the `(width, height)` box that `markup` occupies at the
/// base `font_size`, honouring `[b]` and `[size=N]` runs. This is what the
/// widget core calibrates against.
pub trait TextMeasure {
    fn measure(&self, markup: &str, font_size: f32) -> Vec2;
}

struct Family {
    regular: fontdue::Font,
    bold: Option<fontdue::Font>,
}

impl Family {
    fn face(&self, bold: bool) -> &fontdue::Font {
        match (&self.bold, bold) {
            (Some(b), true) => b,
            _ => &self.regular,
        }
    }
}

/// Owns font families registered under logical names.
///
/// Fonts are immutable after registration. Registering a name twice replaces
/// the earlier family.
pub struct FontSystem {
    families: HashMap<String, Family>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { families: HashMap::new() }
    }

    /// Parses a regular face and an optional bold face and stores them under
    /// `name`. Without a bold face, bold runs fall back to the regular one.
    pub fn register_family(
        &mut self,
        name: &str,
        regular: &[u8],
        bold: Option<&[u8]>,
    ) -> Result<(), FontLoadError> {
        let regular = parse_face(name, "regular", regular)?;
        let bold = bold.map(|bytes| parse_face(name, "bold", bytes)).transpose()?;
        self.families.insert(name.to_string(), Family { regular, bold });
        log::debug!("registered font family '{name}'");
        Ok(())
    }

    pub fn has_family(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    /// Measurer bound to the family registered under `name`.
    pub fn family(&self, name: &str) -> Option<FamilyMeasure<'_>> {
        self.families.get(name).map(|family| FamilyMeasure { family })
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_face(family: &str, weight: &str, bytes: &[u8]) -> Result<fontdue::Font, FontLoadError> {
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map_err(|e| FontLoadError(format!("{family} ({weight}): {e}")))
}

/// [`TextMeasure`] backed by one registered family.
pub struct FamilyMeasure<'a> {
    family: &'a Family,
}

impl FamilyMeasure<'_> {
    fn measure_run(&self, run: &Run, base: f32) -> Vec2 {
        let font = self.family.face(run.bold);
        let size = run.size_or(base);

        // Pen advance, not bitmap extent, so trailing glyph bearings count
        // the same way they do when the run is laid out next to another.
        let width: f32 = run
            .text
            .chars()
            .map(|ch| font.metrics(ch, size).advance_width)
            .sum();
        let height = font
            .horizontal_line_metrics(size)
            .map(|m| m.new_line_size)
            .unwrap_or(size * FALLBACK_LINE_HEIGHT);
        Vec2::new(width, height)
    }
}

impl TextMeasure for FamilyMeasure<'_> {
    fn measure(&self, markup: &str, font_size: f32) -> Vec2 {
        let parsed = tickwatch_markup::parse_str(markup).unwrap_or_else(|e| {
            log::debug!("measuring {markup:?} as plain text: {e}");
            Markup {
                runs: vec![Run { text: markup.to_string(), bold: false, size: None }],
            }
        });

        parsed.runs.iter().fold(Vec2::zero(), |acc, run| {
            let run_size = self.measure_run(run, font_size);
            Vec2::new(acc.x + run_size.x, acc.y.max(run_size.y))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_bytes() {
        let mut fonts = FontSystem::new();
        let err = fonts.register_family("Roboto", b"not a font", None).unwrap_err();
        assert!(err.to_string().contains("Roboto (regular)"));
        assert!(!fonts.has_family("Roboto"));
    }

    #[test]
    fn unknown_family_has_no_measure() {
        let fonts = FontSystem::new();
        assert!(fonts.family("Roboto").is_none());
    }
}
