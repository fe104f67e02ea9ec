//! Cyclic cursor over search results.

use std::fmt;

use crate::index::search;
use crate::lines::offset_to_line;
use crate::Match;

/// The current query, its matches, and which match is active.
///
/// `active_index` is only meaningful while `matches` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub matches: Vec<Match>,
    pub active_index: usize,
}

/// Search result summary for a panel's match counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Nothing to search for.
    NoQuery,
    NoResults,
    /// `position` is 1-based.
    Active { position: usize, total: usize },
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::NoQuery => Ok(()),
            MatchStatus::NoResults => f.write_str("No results"),
            MatchStatus::Active { position, total } => write!(f, "{position} of {total}"),
        }
    }
}

/// Walks the matches of a query within one subject text.
///
/// Changing the subject or the query re-runs the search and clamps the
/// active index into the new result set instead of resetting it, so the
/// user keeps their place while typing.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    subject: String,
    state: SearchState,
}

impl Navigator {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            state: SearchState::default(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn matches(&self) -> &[Match] {
        &self.state.matches
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
        self.refresh();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.refresh();
    }

    /// Advance to the following match, wrapping to the first.
    pub fn next(&mut self) -> Option<Match> {
        let len = self.state.matches.len();
        if len == 0 {
            return None;
        }
        self.state.active_index = (self.state.active_index + 1) % len;
        self.trace_move("next");
        self.active()
    }

    /// Step back to the preceding match, wrapping to the last.
    pub fn previous(&mut self) -> Option<Match> {
        let len = self.state.matches.len();
        if len == 0 {
            return None;
        }
        self.state.active_index = (self.state.active_index + len - 1) % len;
        self.trace_move("previous");
        self.active()
    }

    /// Drop the query and its matches.
    pub fn reset(&mut self) {
        self.state = SearchState::default();
    }

    pub fn active(&self) -> Option<Match> {
        self.state.matches.get(self.state.active_index).copied()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active().map(|_| self.state.active_index)
    }

    /// Zero-based line of the active match's start, for scrolling.
    pub fn active_line(&self) -> Option<usize> {
        self.active().map(|m| offset_to_line(&self.subject, m.start))
    }

    pub fn status(&self) -> MatchStatus {
        if self.state.query.trim().is_empty() {
            return MatchStatus::NoQuery;
        }
        match self.active_index() {
            Some(index) => MatchStatus::Active {
                position: index + 1,
                total: self.state.matches.len(),
            },
            None => MatchStatus::NoResults,
        }
    }

    fn refresh(&mut self) {
        self.state.matches = search(&self.subject, &self.state.query);
        self.state.active_index = match self.state.matches.len() {
            0 => 0,
            len => self.state.active_index.min(len - 1),
        };
    }

    fn trace_move(&self, direction: &str) {
        log::trace!(
            target: "markview.search",
            "{direction}: match {} of {}",
            self.state.active_index + 1,
            self.state.matches.len()
        );
    }
}
