use std::fmt;

/// A lex or parse error in inline markup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupError {
    pub message: String,
    /// Byte offset into the source where the error was detected.
    pub offset: usize,
}

impl MarkupError {
    pub(crate) fn new(msg: impl Into<String>, offset: usize) -> Self {
        Self { message: msg.into(), offset }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "markup error at byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for MarkupError {}
