//! Markview Lexer
//!
//! Splits an HTML-like markup string into a flat stream of tag, text, and
//! comment tokens. The scanner is best-effort: it never fails, and anything
//! it cannot recognize as markup passes through as text.
//!
//! # Example
//!
//! ```
//! use markview_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("<p>Hi</p>");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].kind, TokenKind::Text);
//! ```

pub mod elements;
pub mod scanner;
pub mod token;

pub use elements::{
    is_inline_element, is_preserve_content_element, is_raw_text_element, is_void_element,
    INLINE_ELEMENTS, PRESERVE_CONTENT_ELEMENTS, RAW_TEXT_ELEMENTS, VOID_ELEMENTS,
};
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

/// Tokenize markup. Shorthand for [`Scanner::tokenize`].
pub fn tokenize(markup: &str) -> Vec<Token> {
    Scanner::tokenize(markup)
}
