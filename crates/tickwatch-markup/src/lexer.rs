use crate::error::MarkupError;

// ── Token ─────────────────────────────────────────────────────────────────

/// Style carried by an opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `[b]`
    Bold,
    /// `[size=N]`, `N` in pixels.
    Size(u32),
}

/// Tag family, used by closing tags which carry no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Bold,
    Size,
}

impl Tag {
    pub fn kind(self) -> TagKind {
        match self {
            Tag::Bold    => TagKind::Bold,
            Tag::Size(_) => TagKind::Size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Literal text with entities already decoded.
    Text(String),
    Open(Tag),
    Close(TagKind),
    // Sentinel
    Eof,
}

/// A token plus the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub offset: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

/// Splits markup into text runs and tags.
///
/// A `[` that does not begin a recognised tag is kept as literal text, so
/// plain strings with brackets pass through untouched. The entities `&bl;`,
/// `&br;` and `&amp;` decode to `[`, `]` and `&`.
pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, MarkupError> {
        let mut tokens = Vec::new();
        loop {
            let offset = self.pos;
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, offset });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn next_token(&mut self) -> Result<Token, MarkupError> {
        if self.pos >= self.src.len() {
            return Ok(Token::Eof);
        }
        if let Some(tag) = self.lex_tag()? {
            return Ok(tag);
        }
        Ok(Token::Text(self.lex_text()))
    }

    /// Tries to read a tag at the current position. Returns `None` (without
    /// consuming) when the input there is not a tag.
    fn lex_tag(&mut self) -> Result<Option<Token>, MarkupError> {
        let rest = self.rest();
        if !rest.starts_with('[') {
            return Ok(None);
        }
        let Some(end) = rest.find(']') else {
            return Ok(None);
        };
        let body = &rest[1..end];

        let token = match body {
            "b"     => Token::Open(Tag::Bold),
            "/b"    => Token::Close(TagKind::Bold),
            "/size" => Token::Close(TagKind::Size),
            _ => match body.strip_prefix("size=") {
                Some(value) => {
                    let size = value.parse::<u32>().map_err(|_| {
                        MarkupError::new(format!("invalid size value {:?}", value), self.pos)
                    })?;
                    Token::Open(Tag::Size(size))
                }
                None => return Ok(None),
            },
        };

        self.pos += end + 1;
        Ok(Some(token))
    }

    /// Reads literal text up to the next tag start.
    fn lex_text(&mut self) -> String {
        let mut out = String::new();
        // Always consume at least one char so a non-tag `[` makes progress.
        let mut first = true;
        while let Some(ch) = self.rest().chars().next() {
            if ch == '[' && !first && self.looks_like_tag() {
                break;
            }
            first = false;

            if ch == '&' {
                if let Some((decoded, len)) = decode_entity(self.rest()) {
                    out.push(decoded);
                    self.pos += len;
                    continue;
                }
            }
            out.push(ch);
            self.pos += ch.len_utf8();
        }
        out
    }

    fn looks_like_tag(&self) -> bool {
        let rest = self.rest();
        let Some(end) = rest.find(']') else {
            return false;
        };
        let body = &rest[1..end];
        matches!(body, "b" | "/b" | "/size") || body.starts_with("size=")
    }
}

fn decode_entity(s: &str) -> Option<(char, usize)> {
    const ENTITIES: &[(&str, char)] = &[("&bl;", '['), ("&br;", ']'), ("&amp;", '&')];
    ENTITIES
        .iter()
        .find(|(name, _)| s.starts_with(name))
        .map(|(name, ch)| (*ch, name.len()))
}
