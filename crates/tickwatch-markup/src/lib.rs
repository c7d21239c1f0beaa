//! Lexer, parser, and writer for the inline text markup used by tickwatch
//! display strings.
//!
//! The format is a small bracket-tag language:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `[b]…[/b]` | bold face |
//! | `[size=N]…[/size]` | explicit pixel size `N` |
//! | `&bl;` `&br;` `&amp;` | literal `[` `]` `&` |
//!
//! # Quick start
//!
//! ```rust
//! use tickwatch_markup::parse_str;
//!
//! let markup = parse_str("01:05.[size=49]25[/size]").unwrap();
//! assert_eq!(markup.plain_text(), "01:05.25");
//! assert_eq!(markup.first_sized().unwrap().size, Some(49));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod writer;

pub use ast::{Markup, Run};
pub use error::MarkupError;
pub use parser::parse_str;
pub use writer::MarkupWriter;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> Markup { parse_str(src).unwrap() }
    fn err(src: &str) -> MarkupError { parse_str(src).unwrap_err() }

    #[test] fn empty_input() { assert!(ok("").runs.is_empty()); }
    #[test] fn plain_text_single_run() {
        let m = ok("00:00:00");
        assert_eq!(m.runs.len(), 1);
        assert!(!m.runs[0].bold);
        assert_eq!(m.runs[0].size, None);
    }
    #[test] fn clock_markup() {
        let m = ok("[b]23[/b]:59:59");
        assert_eq!(m.runs.len(), 2);
        assert_eq!(m.runs[0], Run { text: "23".into(), bold: true, size: None });
        assert_eq!(m.runs[1].text, ":59:59");
        assert_eq!(m.plain_text(), "23:59:59");
    }
    #[test] fn stopwatch_markup() {
        let m = ok("01:05.[size=49]25[/size]");
        assert_eq!(m.runs.len(), 2);
        assert_eq!(m.runs[1].size, Some(49));
        assert_eq!(m.runs[1].size_or(70.0), 49.0);
        assert_eq!(m.runs[0].size_or(70.0), 70.0);
    }
    #[test] fn nested_tags_inherit() {
        let m = ok("[b]a[size=10]b[/size][/b]");
        assert_eq!(m.runs[0], Run { text: "a".into(), bold: true, size: None });
        assert_eq!(m.runs[1], Run { text: "b".into(), bold: true, size: Some(10) });
    }
    #[test] fn innermost_size_wins() {
        let m = ok("[size=10][size=20]x[/size][/size]");
        assert_eq!(m.runs[0].size, Some(20));
    }
    #[test] fn same_style_runs_merge() {
        let m = ok("[b]a[/b][b]b[/b]");
        assert_eq!(m.runs.len(), 1);
        assert_eq!(m.runs[0].text, "ab");
    }
    #[test] fn unknown_bracket_is_literal() {
        let m = ok("[i]x");
        assert_eq!(m.plain_text(), "[i]x");
    }
    #[test] fn lone_bracket_is_literal() { assert_eq!(ok("a[b").plain_text(), "a[b"); }
    #[test] fn entities_decode() { assert_eq!(ok("&bl;b&br; &amp;").plain_text(), "[b] &"); }

    #[test] fn err_unclosed_bold() {
        let e = err("[b]12:00");
        assert_eq!(e.offset, 0);
    }
    #[test] fn err_mismatched_close() { err("[b]x[/size]"); }
    #[test] fn err_stray_close() {
        let e = err("x[/b]");
        assert_eq!(e.offset, 1);
    }
    #[test] fn err_bad_size_value() { err("[size=big]x[/size]"); }
    #[test] fn err_negative_size() { err("[size=-3]x[/size]"); }

    #[test]
    fn writer_output_parses_back() {
        let s = MarkupWriter::new().text("00:00.").sized(49, "00").finish();
        assert_eq!(s, "00:00.[size=49]00[/size]");
        assert_eq!(ok(&s).plain_text(), "00:00.00");
    }

    #[test]
    fn writer_escapes_brackets() {
        let s = MarkupWriter::new().text("[b]").finish();
        assert_eq!(s, "&bl;b&br;");
        assert!(!ok(&s).runs[0].bold);
    }
}
