/// Tunables for the clock widget.
///
/// The defaults reproduce the stock look: hundredths at 70% of the display
/// font, shrinking to 60% after a relayout, text filling 80% of its box, and
/// a control strip 40% as tall as the clock with 15% padding and spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Font size of both displays before the first relayout.
    pub initial_font_size: f32,
    /// Hundredths span size relative to the font, used on tick and reset.
    pub hundredths_ratio: f32,
    /// Hundredths span size relative to the font, used on relayout.
    pub rescale_hundredths_ratio: f32,
    /// Share of the allocated box the clock text may fill.
    pub fill_ratio: f32,
    /// Control strip height relative to the clock display height.
    pub controls_height_ratio: f32,
    /// Padding and spacing relative to the control strip height.
    pub controls_spacing_ratio: f32,
    pub start_label: String,
    pub stop_label: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            initial_font_size: 70.0,
            hundredths_ratio: 0.7,
            rescale_hundredths_ratio: 0.6,
            fill_ratio: 0.8,
            controls_height_ratio: 0.4,
            controls_spacing_ratio: 0.15,
            start_label: "Start".to_string(),
            stop_label: "Stop".to_string(),
        }
    }
}
