/// A region of source text. `start`/`end` are byte offsets; `line` and
/// `column` (1-based, in chars) locate `start` for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token classification for markup source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `<name ...>`, `</name>`, or `<name ... />`.
    ///
    /// `name` is lower-cased. `self_closing` is set when the source ends in
    /// `/>` or the element is void, whether or not the slash was written.
    Tag {
        name: String,
        closing: bool,
        self_closing: bool,
    },
    /// A trimmed run of text between tags. Never empty.
    Text,
    /// `<!-- ... -->`, kept whole.
    Comment,
}

/// A token produced by the markup scanner.
///
/// `raw` is the exact source text for tags and comments, and the trimmed
/// content for text. `span` always covers `raw` in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            raw: raw.into(),
            span,
        }
    }

    /// The lower-cased element name, if this is a tag.
    pub fn tag_name(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Tag { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_closing_tag(&self) -> bool {
        matches!(self.kind, TokenKind::Tag { closing: true, .. })
    }

    pub fn is_self_closing_tag(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Tag {
                self_closing: true,
                ..
            }
        )
    }
}
