//! Markview Panel
//!
//! The session behind a markup code-view panel: it holds the markup as
//! received and its formatted form, runs searches over whichever one is on
//! screen, and drives a [`Viewport`] to highlight and scroll to the active
//! match. Rendering stays behind the trait, so sessions run headless in tests.

pub mod viewport;

pub use markview_printer::{FormatOptions, Formatter, IndentStyle};
pub use markview_search::{Match, MatchStatus, Navigator};
pub use viewport::{NullViewport, Viewport};

/// Which form of the markup the panel displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// The markup exactly as received.
    Raw,
    #[default]
    Formatted,
}

/// One open panel.
pub struct PanelSession<V> {
    raw: String,
    formatted: String,
    mode: ViewMode,
    navigator: Navigator,
    viewport: V,
}

impl<V: Viewport> PanelSession<V> {
    /// Open a panel on `markup`, formatted with the default options.
    pub fn open(markup: impl Into<String>, viewport: V) -> Self {
        Self::with_formatter(markup, &Formatter::default(), viewport)
    }

    pub fn with_formatter(markup: impl Into<String>, formatter: &Formatter, viewport: V) -> Self {
        let raw = markup.into();
        let formatted = formatter.format(&raw);
        let mode = ViewMode::default();
        let navigator = Navigator::new(select(mode, &raw, &formatted));
        Self {
            raw,
            formatted,
            mode,
            navigator,
            viewport,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch between raw and formatted text. The current query is re-run
    /// against the newly displayed text.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        log::debug!(target: "markview.panel", "view mode {:?} -> {mode:?}", self.mode);
        self.mode = mode;
        self.navigator.set_subject(select(mode, &self.raw, &self.formatted));
        self.sync_viewport();
    }

    /// The text on screen. This is also what a copy action should place on
    /// the clipboard.
    pub fn displayed_text(&self) -> &str {
        select(self.mode, &self.raw, &self.formatted)
    }

    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    pub fn formatted_text(&self) -> &str {
        &self.formatted
    }

    /// Search the displayed text, e.g. on every keystroke in the search box.
    pub fn search(&mut self, query: &str) -> MatchStatus {
        self.navigator.set_query(query);
        self.sync_viewport();
        self.navigator.status()
    }

    pub fn next(&mut self) -> Option<Match> {
        let active = self.navigator.next();
        self.sync_viewport();
        active
    }

    pub fn previous(&mut self) -> Option<Match> {
        let active = self.navigator.previous();
        self.sync_viewport();
        active
    }

    /// Close the search box.
    pub fn clear_search(&mut self) {
        self.navigator.reset();
        self.viewport.clear_highlight();
    }

    pub fn status(&self) -> MatchStatus {
        self.navigator.status()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn into_viewport(self) -> V {
        self.viewport
    }

    /// Show the active match, or clear the highlight when there is none.
    fn sync_viewport(&mut self) {
        let text = select(self.mode, &self.raw, &self.formatted);
        match (self.navigator.active(), self.navigator.active_line()) {
            (Some(active), Some(line)) => {
                self.viewport.highlight(text, active);
                self.viewport.scroll_to_line(line);
            }
            _ => self.viewport.clear_highlight(),
        }
    }
}

fn select<'a>(mode: ViewMode, raw: &'a str, formatted: &'a str) -> &'a str {
    match mode {
        ViewMode::Raw => raw,
        ViewMode::Formatted => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default, PartialEq)]
    struct Recorder {
        highlighted: Option<String>,
        line: Option<usize>,
        clears: usize,
    }

    impl Viewport for Recorder {
        fn highlight(&mut self, text: &str, active: Match) {
            self.highlighted = Some(active.slice(text).to_string());
        }

        fn clear_highlight(&mut self) {
            self.highlighted = None;
            self.clears += 1;
        }

        fn scroll_to_line(&mut self, line: usize) {
            self.line = Some(line);
        }
    }

    const MARKUP: &str = "<div><p>Hi<br>there</p></div>";

    #[test]
    fn test_opens_formatted() {
        let session = PanelSession::open(MARKUP, Recorder::default());
        assert_eq!(session.view_mode(), ViewMode::Formatted);
        assert_eq!(
            session.displayed_text(),
            "<div>\n  <p>\n    Hi\n    <br>\n    there\n  </p>\n</div>"
        );
        assert_eq!(session.raw_text(), MARKUP);
    }

    #[test]
    fn test_search_highlights_and_scrolls() {
        let mut session = PanelSession::open(MARKUP, Recorder::default());
        let status = session.search("THERE");
        assert_eq!(status.to_string(), "1 of 1");
        assert_eq!(session.viewport().highlighted.as_deref(), Some("there"));
        assert_eq!(session.viewport().line, Some(4));
    }

    #[test]
    fn test_next_moves_viewport() {
        let mut session = PanelSession::open(MARKUP, Recorder::default());
        session.search("p>");
        assert_eq!(session.viewport().line, Some(1));
        session.next();
        assert_eq!(session.viewport().line, Some(5));
        session.next();
        assert_eq!(session.viewport().line, Some(1));
        session.previous();
        assert_eq!(session.viewport().line, Some(5));
    }

    #[test]
    fn test_no_results_clears_highlight() {
        let mut session = PanelSession::open(MARKUP, Recorder::default());
        session.search("hi");
        assert!(session.viewport().highlighted.is_some());
        assert_eq!(session.search("hiq"), MatchStatus::NoResults);
        assert_eq!(session.viewport().highlighted, None);
        assert_eq!(session.next(), None);
    }

    #[test]
    fn test_raw_mode_searches_raw_text() {
        let mut session = PanelSession::open(MARKUP, Recorder::default());
        session.set_view_mode(ViewMode::Raw);
        session.search("there");
        assert_eq!(session.navigator().active(), Some(Match::new(14, 19)));
        assert_eq!(session.viewport().line, Some(0));
    }

    #[test]
    fn test_mode_switch_reruns_query() {
        let mut session = PanelSession::open(MARKUP, Recorder::default());
        session.search("there");
        assert_eq!(session.viewport().line, Some(4));
        session.set_view_mode(ViewMode::Raw);
        assert_eq!(session.displayed_text(), MARKUP);
        assert_eq!(session.viewport().line, Some(0));
        assert_eq!(session.viewport().highlighted.as_deref(), Some("there"));
    }

    #[test]
    fn test_clear_search() {
        let mut session = PanelSession::open(MARKUP, Recorder::default());
        session.search("div");
        session.clear_search();
        assert_eq!(session.status(), MatchStatus::NoQuery);
        let viewport = session.into_viewport();
        assert_eq!(viewport.highlighted, None);
        assert_eq!(viewport.clears, 1);
    }

    #[test]
    fn test_custom_formatter() {
        let formatter = Formatter::new(FormatOptions::with_indent(IndentStyle::Tabs));
        let session =
            PanelSession::with_formatter("<ul><li>a</li></ul>", &formatter, NullViewport);
        assert_eq!(session.formatted_text(), "<ul>\n\t<li>\n\t\ta\n\t</li>\n</ul>");
    }
}
