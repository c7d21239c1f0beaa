/// A contiguous piece of text sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    /// Explicit pixel size, or `None` to inherit the widget's font size.
    pub size: Option<u32>,
}

impl Run {
    /// Effective size in pixels given the widget's base font size.
    #[inline]
    pub fn size_or(&self, base: f32) -> f32 {
        self.size.map(|s| s as f32).unwrap_or(base)
    }
}

/// Parsed markup: styled runs in reading order.
///
/// Adjacent runs never share a style; the parser merges them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Markup {
    pub runs: Vec<Run>,
}

impl Markup {
    /// Concatenated text with all tags removed.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// The first run carrying an explicit size, if any.
    pub fn first_sized(&self) -> Option<&Run> {
        self.runs.iter().find(|r| r.size.is_some())
    }
}
