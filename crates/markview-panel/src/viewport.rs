//! The rendering surface a panel session drives.

use markview_search::Match;

/// Selection and scrolling primitives of the text view.
pub trait Viewport {
    /// Select `active` within `text`, the text currently displayed.
    fn highlight(&mut self, text: &str, active: Match);

    fn clear_highlight(&mut self);

    /// Bring the zero-based `line` into view.
    fn scroll_to_line(&mut self, line: usize);
}

/// A viewport that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullViewport;

impl Viewport for NullViewport {
    fn highlight(&mut self, _text: &str, _active: Match) {}

    fn clear_highlight(&mut self) {}

    fn scroll_to_line(&mut self, _line: usize) {}
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn highlight(&mut self, text: &str, active: Match) {
        (**self).highlight(text, active);
    }

    fn clear_highlight(&mut self) {
        (**self).clear_highlight();
    }

    fn scroll_to_line(&mut self, line: usize) {
        (**self).scroll_to_line(line);
    }
}
