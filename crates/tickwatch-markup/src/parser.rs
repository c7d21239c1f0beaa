use crate::ast::{Markup, Run};
use crate::error::MarkupError;
use crate::lexer::{Lexer, Tag, TagKind, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
    /// Open tags, innermost last, with the offset where each was opened.
    stack: Vec<(Tag, usize)>,
    runs: Vec<Run>,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0, stack: Vec::new(), runs: Vec::new() }
    }

    fn advance(&mut self) -> TokenWithPos {
        let tok = self.tokens.get(self.pos).cloned().unwrap_or(TokenWithPos {
            token: Token::Eof,
            offset: self.tokens.last().map(|t| t.offset).unwrap_or(0),
        });
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn bold(&self) -> bool {
        self.stack.iter().any(|(t, _)| *t == Tag::Bold)
    }

    /// Innermost size wins, matching how nested `[size]` tags render.
    fn size(&self) -> Option<u32> {
        self.stack.iter().rev().find_map(|(t, _)| match t {
            Tag::Size(s) => Some(*s),
            Tag::Bold    => None,
        })
    }

    fn push_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        let (bold, size) = (self.bold(), self.size());
        match self.runs.last_mut() {
            Some(last) if last.bold == bold && last.size == size => last.text.push_str(&text),
            _ => self.runs.push(Run { text, bold, size }),
        }
    }

    fn close(&mut self, kind: TagKind, offset: usize) -> Result<(), MarkupError> {
        match self.stack.last() {
            Some((open, _)) if open.kind() == kind => {
                self.stack.pop();
                Ok(())
            }
            Some((open, _)) => Err(MarkupError::new(
                format!("closing {} while {} is open", close_name(kind), open_name(*open)),
                offset,
            )),
            None => Err(MarkupError::new(
                format!("closing {} without a matching open tag", close_name(kind)),
                offset,
            )),
        }
    }

    pub fn parse_markup(mut self) -> Result<Markup, MarkupError> {
        loop {
            let TokenWithPos { token, offset } = self.advance();
            match token {
                Token::Text(s)     => self.push_text(s),
                Token::Open(tag)   => self.stack.push((tag, offset)),
                Token::Close(kind) => self.close(kind, offset)?,
                Token::Eof         => break,
            }
        }

        if let Some((open, offset)) = self.stack.last() {
            return Err(MarkupError::new(format!("unclosed {}", open_name(*open)), *offset));
        }

        Ok(Markup { runs: self.runs })
    }
}

fn open_name(tag: Tag) -> String {
    match tag {
        Tag::Bold    => "[b]".to_string(),
        Tag::Size(s) => format!("[size={s}]"),
    }
}

fn close_name(kind: TagKind) -> &'static str {
    match kind {
        TagKind::Bold => "[/b]",
        TagKind::Size => "[/size]",
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a markup string into styled runs.
pub fn parse_str(src: &str) -> Result<Markup, MarkupError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_markup()
}
