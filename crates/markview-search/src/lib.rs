//! Markview Search
//!
//! Case-insensitive substring search over a text, plus a cursor that walks
//! the results cyclically and reports where the active match sits.
//!
//! # Example
//!
//! ```
//! use markview_search::{search, Navigator};
//!
//! let matches = search("Hello WORLD", "world");
//! assert_eq!((matches[0].start, matches[0].end), (6, 11));
//!
//! let mut nav = Navigator::new("a\nb\na");
//! nav.set_query("A");
//! assert_eq!(nav.active_line(), Some(0));
//! nav.next();
//! assert_eq!(nav.active_line(), Some(2));
//! ```

pub mod index;
pub mod lines;
pub mod navigator;

pub use index::search;
pub use lines::{offset_to_line, offset_to_position};
pub use navigator::{MatchStatus, Navigator, SearchState};

/// A hit in the searched text: the half-open byte range `start..end`.
///
/// Both ends fall on char boundaries of the subject, and `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty match {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text within `subject`.
    pub fn slice<'s>(&self, subject: &'s str) -> &'s str {
        &subject[self.start..self.end]
    }
}
