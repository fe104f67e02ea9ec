//! Indenting printer.
//!
//! Walks the token stream and emits one line per token, tracking how deep
//! the open block elements nest. Inline and self-closing tags never open a
//! level, while every closing tag steps one level out; text inside
//! preserve-content elements is emitted verbatim.

use markview_lexer::{
    is_inline_element, is_preserve_content_element, is_void_element, Token, TokenKind,
};

use crate::options::FormatOptions;

/// Nesting counters. Both saturate at zero, so surplus closing tags can
/// never drive them negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintState {
    pub indent_level: usize,
    pub preserve_depth: usize,
}

/// Print tokens with the default options.
pub fn print(tokens: &[Token]) -> String {
    print_with(tokens, &FormatOptions::default())
}

/// Print tokens as indented markup.
pub fn print_with(tokens: &[Token], options: &FormatOptions) -> String {
    let mut printer = Printer::new(options);
    for token in tokens {
        printer.push(token);
    }
    printer.finish()
}

/// Incremental printer. Feed tokens in source order with [`Printer::push`].
pub struct Printer {
    unit: String,
    state: PrintState,
    out: String,
}

impl Printer {
    pub fn new(options: &FormatOptions) -> Self {
        Self {
            unit: options.indent.unit(),
            state: PrintState::default(),
            out: String::new(),
        }
    }

    pub fn state(&self) -> PrintState {
        self.state
    }

    pub fn push(&mut self, token: &Token) {
        match &token.kind {
            TokenKind::Comment => self.line(&token.raw),
            TokenKind::Text => {
                if self.state.preserve_depth > 0 {
                    self.out.push_str(&token.raw);
                    self.out.push('\n');
                } else {
                    self.line(&token.raw);
                }
            }
            TokenKind::Tag {
                name,
                closing: true,
                ..
            } => {
                if is_preserve_content_element(name) {
                    self.state.preserve_depth = self.state.preserve_depth.saturating_sub(1);
                }
                if self.state.indent_level == 0 {
                    log::trace!(
                        target: "markview.printer",
                        "unmatched </{name}> at line {}, column {}",
                        token.span.line,
                        token.span.column
                    );
                }
                self.state.indent_level = self.state.indent_level.saturating_sub(1);
                self.line(&token.raw);
            }
            TokenKind::Tag {
                name,
                self_closing,
                ..
            } => {
                self.line(&token.raw);
                if !*self_closing {
                    if opens_level(name) {
                        self.state.indent_level += 1;
                    }
                    if is_preserve_content_element(name) {
                        self.state.preserve_depth += 1;
                    }
                }
            }
        }
    }

    /// The printed markup, without leading or trailing whitespace.
    pub fn finish(self) -> String {
        if self.state.indent_level > 0 {
            log::trace!(
                target: "markview.printer",
                "{} element(s) left open at end of input",
                self.state.indent_level
            );
        }
        self.out.trim().to_string()
    }

    fn line(&mut self, content: &str) {
        for _ in 0..self.state.indent_level {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(content);
        self.out.push('\n');
    }
}

/// Whether an open, non-self-closing tag of this element starts a new
/// indent level.
fn opens_level(name: &str) -> bool {
    !is_inline_element(name) && !is_void_element(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::IndentStyle;
    use markview_lexer::Scanner;
    use pretty_assertions::assert_eq;

    /// Helper: tokenize and print with default options.
    fn fmt(source: &str) -> String {
        print(&Scanner::tokenize(source))
    }

    /// Helper: push every token and return the final counters.
    fn state_after(source: &str) -> PrintState {
        let options = FormatOptions::default();
        let mut printer = Printer::new(&options);
        for token in Scanner::tokenize(source) {
            printer.push(&token);
        }
        printer.state()
    }

    // =========================================================================
    // Basics
    // =========================================================================

    #[test]
    fn test_empty() {
        assert_eq!(fmt(""), "");
        assert_eq!(fmt("   \n  "), "");
    }

    #[test]
    fn test_text_only() {
        assert_eq!(fmt("  hello  "), "hello");
    }

    #[test]
    fn test_nested_blocks() {
        assert_eq!(
            fmt("<div><ul><li>Item</li></ul></div>"),
            "<div>\n  <ul>\n    <li>\n      Item\n    </li>\n  </ul>\n</div>"
        );
    }

    #[test]
    fn test_line_break_scenario() {
        assert_eq!(
            fmt("<div><p>Hi<br>there</p></div>"),
            "<div>\n  <p>\n    Hi\n    <br>\n    there\n  </p>\n</div>"
        );
    }

    #[test]
    fn test_existing_indentation_replaced() {
        assert_eq!(
            fmt("<div>\n        <p>x</p>\n</div>"),
            "<div>\n  <p>\n    x\n  </p>\n</div>"
        );
    }

    #[test]
    fn test_unknown_elements_are_blocks() {
        assert_eq!(
            fmt("<x-card><x-body>b</x-body></x-card>"),
            "<x-card>\n  <x-body>\n    b\n  </x-body>\n</x-card>"
        );
    }

    #[test]
    fn test_tag_raw_text_kept() {
        assert_eq!(
            fmt("<DIV id=\"A\"><IMG SRC=x></DIV>"),
            "<DIV id=\"A\">\n  <IMG SRC=x>\n</DIV>"
        );
    }

    // =========================================================================
    // Inline, void, self-closing
    // =========================================================================

    #[test]
    fn test_inline_does_not_indent() {
        assert_eq!(
            fmt("<div><p>Hello <b>big</b></p></div>"),
            "<div>\n  <p>\n    Hello\n    <b>\n    big\n  </b>\n</p>\n</div>"
        );
    }

    #[test]
    fn test_inline_closing_tag_steps_out() {
        assert_eq!(
            fmt("<div><p>a<b>x</b>c</p></div>"),
            "<div>\n  <p>\n    a\n    <b>\n    x\n  </b>\n  c\n</p>\n</div>"
        );
        assert_eq!(state_after("<div><p>a<b>x</b>").indent_level, 1);
    }

    #[test]
    fn test_self_closing_does_not_indent() {
        assert_eq!(
            fmt("<div><widget/><hr/></div>"),
            "<div>\n  <widget/>\n  <hr/>\n</div>"
        );
    }

    #[test]
    fn test_closing_void_tag_steps_out() {
        assert_eq!(fmt("<div></br>x</div>"), "<div>\n</br>\nx\n</div>");
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[test]
    fn test_comment_at_current_level() {
        assert_eq!(
            fmt("<div><!-- note --><p>x</p></div>"),
            "<div>\n  <!-- note -->\n  <p>\n    x\n  </p>\n</div>"
        );
    }

    #[test]
    fn test_comment_does_not_change_level() {
        assert_eq!(
            state_after("<div><!-- <p> -->"),
            PrintState {
                indent_level: 1,
                preserve_depth: 0,
            }
        );
    }

    // =========================================================================
    // Preserve-content elements
    // =========================================================================

    #[test]
    fn test_script_body_verbatim() {
        let source = "<body><script>\n  if (a < b) {\n      go();\n  }\n</script></body>";
        assert_eq!(
            fmt(source),
            "<body>\n  <script>\nif (a < b) {\n      go();\n  }\n  </script>\n</body>"
        );
    }

    #[test]
    fn test_pre_text_not_reindented() {
        assert_eq!(
            fmt("<div><pre>a\n   b</pre></div>"),
            "<div>\n  <pre>\na\n   b\n  </pre>\n</div>"
        );
    }

    #[test]
    fn test_nested_preserve_depth() {
        let state = state_after("<pre><pre>");
        assert_eq!(state.preserve_depth, 2);
        let state = state_after("<pre><pre></pre>");
        assert_eq!(state.preserve_depth, 1);
    }

    #[test]
    fn test_self_closed_script_does_not_preserve() {
        assert_eq!(state_after("<script src=\"a.js\"/>").preserve_depth, 0);
        assert_eq!(
            fmt("<div><script src=\"a.js\"/>x</div>"),
            "<div>\n  <script src=\"a.js\"/>\n  x\n</div>"
        );
    }

    // =========================================================================
    // Malformed input
    // =========================================================================

    #[test]
    fn test_surplus_closing_tags_clamp_at_zero() {
        assert_eq!(state_after("</div></div></pre>"), PrintState::default());
        assert_eq!(fmt("</div></div><p>x</p>"), "</div>\n</div>\n<p>\n  x\n</p>");
    }

    #[test]
    fn test_unclosed_elements() {
        assert_eq!(fmt("<div><p>x"), "<div>\n  <p>\n    x");
        assert_eq!(state_after("<div><p>x").indent_level, 2);
    }

    #[test]
    fn test_mismatched_nesting() {
        assert_eq!(
            fmt("<div><p>a</div></p>b"),
            "<div>\n  <p>\n    a\n  </div>\n</p>\nb"
        );
    }

    // =========================================================================
    // Options
    // =========================================================================

    #[test]
    fn test_four_space_indent() {
        let options = FormatOptions::with_indent(IndentStyle::Spaces(4));
        let out = print_with(&Scanner::tokenize("<div><p>x</p></div>"), &options);
        assert_eq!(out, "<div>\n    <p>\n        x\n    </p>\n</div>");
    }

    #[test]
    fn test_tab_indent() {
        let options = FormatOptions::with_indent(IndentStyle::Tabs);
        let out = print_with(&Scanner::tokenize("<div><p>x</p></div>"), &options);
        assert_eq!(out, "<div>\n\t<p>\n\t\tx\n\t</p>\n</div>");
    }
}
