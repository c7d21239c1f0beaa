use std::fmt::Write as _;

/// Incremental markup builder.
///
/// Literal text is escaped so it can never be mistaken for a tag.
///
/// ```rust
/// use tickwatch_markup::MarkupWriter;
///
/// let s = MarkupWriter::new().bold("09").text(":41").finish();
/// assert_eq!(s, "[b]09[/b]:41");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkupWriter {
    out: String,
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn text(mut self, s: &str) -> Self {
        push_escaped(&mut self.out, s);
        self
    }

    pub fn bold(mut self, s: &str) -> Self {
        self.out.push_str("[b]");
        push_escaped(&mut self.out, s);
        self.out.push_str("[/b]");
        self
    }

    pub fn sized(mut self, size: u32, s: &str) -> Self {
        let _ = write!(self.out, "[size={size}]");
        push_escaped(&mut self.out, s);
        self.out.push_str("[/size]");
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '[' => out.push_str("&bl;"),
            ']' => out.push_str("&br;"),
            c   => out.push(c),
        }
    }
}
