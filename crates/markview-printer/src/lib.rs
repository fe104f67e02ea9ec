//! Markview Printer
//!
//! Re-renders HTML-like markup with canonical indentation. Tokenizing and
//! printing are both total: any input string produces output, and
//! formatting already-formatted markup leaves it unchanged.
//!
//! ```text
//! markup → Scanner::tokenize() → [Token] → print() → formatted markup
//! ```

pub mod options;
pub mod printer;

pub use options::{FormatOptions, IndentStyle};
pub use printer::{print, print_with, PrintState, Printer};

use markview_lexer::Scanner;

/// Invalid formatting option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("Indent width must be between 1 and 8, got {0}")]
    IndentWidth(u64),
    #[error("Unknown indent style '{0}' (expected a width or 'tab')")]
    UnknownIndent(String),
}

/// Reformat markup with the default options.
pub fn format(markup: &str) -> String {
    format_with(markup, &FormatOptions::default())
}

/// Reformat markup.
pub fn format_with(markup: &str, options: &FormatOptions) -> String {
    let tokens = Scanner::tokenize(markup);
    let out = print_with(&tokens, options);
    log::debug!(
        target: "markview.printer",
        "formatted {} tokens ({} bytes in, {} bytes out)",
        tokens.len(),
        markup.len(),
        out.len()
    );
    out
}

/// A formatter bound to one set of options.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn format(&self, markup: &str) -> String {
        format_with(markup, &self.options)
    }

    /// Whether `markup` is already in the form [`Formatter::format`] produces.
    pub fn is_formatted(&self, markup: &str) -> bool {
        self.format(markup) == markup
    }
}
