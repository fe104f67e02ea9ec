use crate::elements::{is_raw_text_element, is_void_element};
use crate::token::{Span, Token, TokenKind};

/// Scanner state. Each state consumes one unit of input and picks the next.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// Running text up to the next recognizable tag or comment.
    Text,
    /// A tag construct whose closing `>` sits at `end`.
    Tag { end: usize },
    /// A comment whose terminating `-->` ends just before `end`.
    Comment { end: usize },
    /// The body of a raw-text element, up to `</name`.
    RawText(String),
}

/// Markup scanner.
///
/// Walks the source left to right as a small state machine over byte
/// offsets. All delimiters it looks for are ASCII, so every offset it
/// slices at is a char boundary.
///
/// The scanner never fails: a `<` that does not begin a complete tag or
/// comment is kept as text, and unbalanced nesting is the printer's concern.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    state: State,
    tokens: Vec<Token>,
    // Line/column bookkeeping. Tokens are emitted in source order, so the
    // cursor only ever moves forward.
    cursor: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            state: State::Text,
            tokens: Vec::new(),
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens();
        scanner.tokens
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            let state = std::mem::replace(&mut self.state, State::Text);
            self.state = match state {
                State::Text => self.scan_text(),
                State::Tag { end } => self.scan_tag(end),
                State::Comment { end } => self.scan_comment(end),
                State::RawText(name) => self.scan_raw_text(&name),
            };
        }

        log::trace!(
            target: "markview.lexer",
            "scanned {} bytes into {} tokens",
            self.source.len(),
            self.tokens.len()
        );
    }

    // --- States ---

    /// Consume text until a comment or tag begins, or input runs out.
    fn scan_text(&mut self) -> State {
        let start = self.pos;
        let mut search_from = self.pos;

        while let Some(found) = self.source[search_from..].find('<') {
            let lt = search_from + found;
            if let Some(end) = self.comment_end(lt) {
                self.emit_text(start, lt);
                self.pos = lt;
                return State::Comment { end };
            }
            if let Some(end) = self.tag_end(lt) {
                self.emit_text(start, lt);
                self.pos = lt;
                return State::Tag { end };
            }
            // Stray `<`, keep it as text.
            search_from = lt + 1;
        }

        self.emit_text(start, self.source.len());
        self.pos = self.source.len();
        State::Text
    }

    /// Emit the tag spanning `pos..=end`.
    fn scan_tag(&mut self, end: usize) -> State {
        let start = self.pos;
        let raw = &self.source[start..=end];

        let closing = raw.starts_with("</");
        let name_start = if closing { 2 } else { 1 };
        let name: String = raw[name_start..]
            .chars()
            .take_while(|&c| is_name_char(c))
            .collect::<String>()
            .to_ascii_lowercase();
        let self_closing = raw.ends_with("/>") || is_void_element(&name);

        let next = if !closing && !self_closing && is_raw_text_element(&name) {
            State::RawText(name.clone())
        } else {
            State::Text
        };

        let kind = TokenKind::Tag {
            name,
            closing,
            self_closing,
        };
        self.emit(kind, start, end + 1);
        self.pos = end + 1;
        next
    }

    /// Emit the comment spanning `pos..end`.
    fn scan_comment(&mut self, end: usize) -> State {
        self.emit(TokenKind::Comment, self.pos, end);
        self.pos = end;
        State::Text
    }

    /// Emit everything up to `</name` as a single text run.
    fn scan_raw_text(&mut self, name: &str) -> State {
        let start = self.pos;
        let end = match self.raw_text_end(name) {
            Some(end) => end,
            None => {
                log::debug!(
                    target: "markview.lexer",
                    "unterminated <{name}> at byte {start}, treating the rest as its body"
                );
                self.source.len()
            }
        };

        self.emit_text(start, end);
        self.pos = end;
        State::Text
    }

    // --- Lookahead ---

    /// If a complete `<!-- ... -->` starts at `lt`, the offset just past it.
    fn comment_end(&self, lt: usize) -> Option<usize> {
        let rest = &self.source[lt..];
        if !rest.starts_with("<!--") {
            return None;
        }
        rest[4..].find("-->").map(|i| lt + 4 + i + 3)
    }

    /// If a tag construct starts at `lt`, the offset of its closing `>`.
    ///
    /// A tag is `<` or `</` followed by an ASCII letter, up to the next `>`.
    fn tag_end(&self, lt: usize) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let name_at = if bytes.get(lt + 1) == Some(&b'/') {
            lt + 2
        } else {
            lt + 1
        };
        if !bytes.get(name_at).is_some_and(u8::is_ascii_alphabetic) {
            return None;
        }
        self.source[name_at..].find('>').map(|i| name_at + i)
    }

    /// Offset of the `</name` that closes the current raw-text element.
    fn raw_text_end(&self, name: &str) -> Option<usize> {
        let rest = &self.source[self.pos..];
        // ASCII lower-casing keeps byte offsets intact.
        let lowered = rest.to_ascii_lowercase();
        let needle = format!("</{name}");

        let mut from = 0;
        while let Some(i) = lowered[from..].find(&needle) {
            let at = from + i;
            let after = lowered[at + needle.len()..].chars().next();
            if !after.is_some_and(is_name_char) {
                return Some(self.pos + at);
            }
            from = at + needle.len();
        }
        None
    }

    // --- Helpers ---

    /// Emit the trimmed text in `start..end`, or nothing if it is blank.
    fn emit_text(&mut self, start: usize, end: usize) {
        let run = &self.source[start..end];
        let trimmed = run.trim();
        if trimmed.is_empty() {
            return;
        }
        let leading = run.len() - run.trim_start().len();
        let text_start = start + leading;
        let text_end = text_start + trimmed.len();
        self.emit(TokenKind::Text, text_start, text_end);
    }

    fn emit(&mut self, kind: TokenKind, start: usize, end: usize) {
        let (line, column) = self.locate(start);
        let span = Span::new(start, end, line, column);
        let raw = &self.source[start..end];
        self.tokens.push(Token::new(kind, raw, span));
    }

    /// Line and column of `offset`, advancing the bookkeeping cursor.
    fn locate(&mut self, offset: usize) -> (usize, usize) {
        for c in self.source[self.cursor..offset].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.cursor = offset;
        (self.line, self.column)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}
