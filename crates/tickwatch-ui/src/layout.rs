use tickwatch_engine::coords::Vec2;

use crate::config::WidgetConfig;

/// Ratios captured from the natural clock text on the first size change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Font size per pixel of natural text height.
    pub font_to_texture_ratio: f32,
    /// Natural text width over height.
    pub texture_aspect_ratio: f32,
}

impl Calibration {
    /// `None` when `natural` has no usable height.
    pub fn from_measurement(font_size: f32, natural: Vec2) -> Option<Self> {
        let aspect = natural.aspect()?;
        let ratio = font_size / natural.y;
        (ratio.is_finite() && ratio > 0.0 && aspect > 0.0).then_some(Self {
            font_to_texture_ratio: ratio,
            texture_aspect_ratio: aspect,
        })
    }
}

/// Geometry of the start/reset control strip, in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlsGeometry {
    pub height: u32,
    pub padding: u32,
    pub spacing: u32,
}

/// Which side of the allocated box limited the font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAxis {
    /// The box is narrower than the text's aspect; width bounds the text.
    Width,
    /// Height bounds the text.
    Height,
}

/// Result of a relayout in the calibrated state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rescale {
    pub axis: ScaleAxis,
    /// Natural-text height the font is scaled to.
    pub new_ratio: f32,
    pub font_size: f32,
    pub controls: ControlsGeometry,
}

/// What a size-changed event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutOutcome {
    /// First usable event: ratios captured, nothing visible changed.
    Calibrated(Calibration),
    Rescaled(Rescale),
    /// Degenerate size or measurement; state untouched.
    Ignored,
}

/// Calibration state. Moves from `Uncalibrated` to `Calibrated` exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutState {
    Uncalibrated,
    Calibrated(Calibration),
}

/// Rescales fonts and the control strip in proportion to the display box.
#[derive(Debug, Clone)]
pub struct ResponsiveLayoutAdapter {
    state: LayoutState,
    fill_ratio: f32,
    controls_height_ratio: f32,
    controls_spacing_ratio: f32,
}

impl ResponsiveLayoutAdapter {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            state: LayoutState::Uncalibrated,
            fill_ratio: config.fill_ratio,
            controls_height_ratio: config.controls_height_ratio,
            controls_spacing_ratio: config.controls_spacing_ratio,
        }
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn calibration(&self) -> Option<Calibration> {
        match self.state {
            LayoutState::Calibrated(c) => Some(c),
            LayoutState::Uncalibrated => None,
        }
    }

    /// Handles a size change of the clock display.
    ///
    /// `natural` measures the clock text at `font_size` and is only called
    /// while uncalibrated.
    pub fn on_size_changed(
        &mut self,
        allocated: Vec2,
        font_size: f32,
        natural: impl FnOnce() -> Vec2,
    ) -> LayoutOutcome {
        match self.state {
            LayoutState::Uncalibrated => {
                let measured = natural();
                let Some(calibration) = Calibration::from_measurement(font_size, measured) else {
                    log::warn!("cannot calibrate from natural text size {measured:?}; waiting for next size change");
                    return LayoutOutcome::Ignored;
                };
                log::debug!(
                    "calibrated: font/texture {:.4}, aspect {:.4}",
                    calibration.font_to_texture_ratio,
                    calibration.texture_aspect_ratio
                );
                self.state = LayoutState::Calibrated(calibration);
                LayoutOutcome::Calibrated(calibration)
            }
            LayoutState::Calibrated(calibration) => match self.rescale(calibration, allocated) {
                Some(rescale) => LayoutOutcome::Rescaled(rescale),
                None => {
                    log::warn!("ignoring degenerate display size {allocated:?}");
                    LayoutOutcome::Ignored
                }
            },
        }
    }

    fn rescale(&self, calibration: Calibration, allocated: Vec2) -> Option<Rescale> {
        let aspect = allocated.aspect()?;
        if allocated.x <= 0.0 {
            return None;
        }

        let (axis, new_ratio) = if aspect < calibration.texture_aspect_ratio {
            (ScaleAxis::Width, allocated.x * self.fill_ratio / calibration.texture_aspect_ratio)
        } else {
            (ScaleAxis::Height, allocated.y * self.fill_ratio)
        };
        let font_size = calibration.font_to_texture_ratio * new_ratio;

        let height = (allocated.y * self.controls_height_ratio) as u32;
        let gap = (height as f32 * self.controls_spacing_ratio) as u32;
        let controls = ControlsGeometry { height, padding: gap, spacing: gap };

        log::debug!("rescale {allocated:?}: {axis:?} axis, font {font_size:.2}, controls {controls:?}");
        Some(Rescale { axis, new_ratio, font_size, controls })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> ResponsiveLayoutAdapter {
        ResponsiveLayoutAdapter::new(&WidgetConfig::default())
    }

    /// Adapter calibrated with font 30 over natural 60x40 (ratio 0.75, aspect 1.5).
    fn calibrated() -> ResponsiveLayoutAdapter {
        let mut a = adapter();
        a.on_size_changed(Vec2::new(800.0, 600.0), 30.0, || Vec2::new(60.0, 40.0));
        a
    }

    fn rescaled(outcome: LayoutOutcome) -> Rescale {
        match outcome {
            LayoutOutcome::Rescaled(r) => r,
            other => panic!("expected a rescale, got {other:?}"),
        }
    }

    #[test]
    fn first_event_only_calibrates() {
        let mut a = adapter();
        let out = a.on_size_changed(Vec2::new(800.0, 600.0), 30.0, || Vec2::new(60.0, 40.0));
        let expected = Calibration { font_to_texture_ratio: 0.75, texture_aspect_ratio: 1.5 };
        assert_eq!(out, LayoutOutcome::Calibrated(expected));
        assert_eq!(a.state(), &LayoutState::Calibrated(expected));
    }

    #[test]
    fn later_events_never_measure_or_recalibrate() {
        let mut a = calibrated();
        let before = a.calibration().unwrap();
        for size in [(100.0, 100.0), (300.0, 100.0), (1920.0, 1080.0)] {
            a.on_size_changed(Vec2::new(size.0, size.1), 99.0, || panic!("measured after calibration"));
            let after = a.calibration().unwrap();
            assert_eq!(after.font_to_texture_ratio.to_bits(), before.font_to_texture_ratio.to_bits());
            assert_eq!(after.texture_aspect_ratio.to_bits(), before.texture_aspect_ratio.to_bits());
        }
    }

    #[test]
    fn narrow_box_uses_width_branch() {
        let mut a = calibrated();
        let r = rescaled(a.on_size_changed(Vec2::new(100.0, 100.0), 30.0, Vec2::zero));
        assert_eq!(r.axis, ScaleAxis::Width);
        assert!((r.new_ratio - 80.0 / 1.5).abs() < 1e-4);
        assert!((r.font_size - 0.75 * 80.0 / 1.5).abs() < 1e-4);
    }

    #[test]
    fn wide_box_uses_height_branch() {
        let mut a = calibrated();
        let r = rescaled(a.on_size_changed(Vec2::new(300.0, 100.0), 30.0, Vec2::zero));
        assert_eq!(r.axis, ScaleAxis::Height);
        assert!((r.new_ratio - 80.0).abs() < 1e-4);
        assert!((r.font_size - 60.0).abs() < 1e-4);
    }

    #[test]
    fn exact_aspect_uses_height_branch() {
        let mut a = calibrated();
        let r = rescaled(a.on_size_changed(Vec2::new(150.0, 100.0), 30.0, Vec2::zero));
        assert_eq!(r.axis, ScaleAxis::Height);
    }

    #[test]
    fn controls_geometry_truncates() {
        let mut a = calibrated();
        let r = rescaled(a.on_size_changed(Vec2::new(300.0, 257.0), 30.0, Vec2::zero));
        // 257 * 0.4 = 102.8 -> 102; 102 * 0.15 = 15.3 -> 15
        assert_eq!(r.controls, ControlsGeometry { height: 102, padding: 15, spacing: 15 });
    }

    #[test]
    fn degenerate_measurement_stays_uncalibrated() {
        let mut a = adapter();
        let out = a.on_size_changed(Vec2::new(800.0, 600.0), 30.0, || Vec2::new(60.0, 0.0));
        assert_eq!(out, LayoutOutcome::Ignored);
        assert_eq!(a.state(), &LayoutState::Uncalibrated);
        // The next event gets another chance.
        let out = a.on_size_changed(Vec2::new(800.0, 600.0), 30.0, || Vec2::new(60.0, 40.0));
        assert!(matches!(out, LayoutOutcome::Calibrated(_)));
    }

    #[test]
    fn degenerate_box_is_ignored() {
        let mut a = calibrated();
        assert_eq!(a.on_size_changed(Vec2::new(100.0, 0.0), 30.0, Vec2::zero), LayoutOutcome::Ignored);
        assert_eq!(a.on_size_changed(Vec2::new(0.0, 100.0), 30.0, Vec2::zero), LayoutOutcome::Ignored);
        assert!(a.calibration().is_some());
    }
}
