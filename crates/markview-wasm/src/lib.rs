//! WASM bindings for markview.
//!
//! Exposes the formatter, the search index, and a panel session to
//! JavaScript via wasm-bindgen. All offsets crossing into JavaScript are in
//! UTF-16 code units.

pub mod utf16;

use markview_panel::{Formatter, Match, PanelSession, ViewMode, Viewport};
use markview_printer::FormatOptions;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::utf16::{from_utf16, to_js_match, to_utf16};

/// Reformat markup.
///
/// `options` is optional: `{ indent: 2 | 4 | "tab" }`.
/// Throws a JS error if the options object is invalid.
#[wasm_bindgen]
pub fn format(markup: &str, options: JsValue) -> Result<String, JsError> {
    let options = parse_options(options)?;
    Ok(markview_printer::format_with(markup, &options))
}

/// Find every case-insensitive occurrence of `query`.
///
/// Returns an array of `{ start, end }` objects.
#[wasm_bindgen]
pub fn search(subject: &str, query: &str) -> Result<JsValue, JsError> {
    let matches: Vec<_> = markview_search::search(subject, query)
        .into_iter()
        .map(|m| to_js_match(subject, m))
        .collect();
    serde_wasm_bindgen::to_value(&matches).map_err(|e| JsError::new(&e.to_string()))
}

/// Zero-based line index of a UTF-16 offset.
#[wasm_bindgen(js_name = offsetToLine)]
pub fn offset_to_line(subject: &str, offset: usize) -> usize {
    markview_search::offset_to_line(subject, from_utf16(subject, offset))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_options(options: JsValue) -> Result<FormatOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(FormatOptions::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_view_mode(mode: &str) -> Result<ViewMode, JsError> {
    match mode {
        "raw" => Ok(ViewMode::Raw),
        "formatted" => Ok(ViewMode::Formatted),
        other => Err(JsError::new(&format!(
            "Unknown view mode '{other}' (expected 'raw' or 'formatted')"
        ))),
    }
}

// =========================================================================
// Panel session
// =========================================================================

/// A JS object with `highlight(start, end)`, `clearHighlight()`, and
/// `scrollToLine(line)` methods.
struct JsViewport {
    target: JsValue,
}

impl JsViewport {
    fn call(&self, method: &str, args: &[JsValue]) {
        let function = js_sys::Reflect::get(&self.target, &JsValue::from_str(method))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
        let Some(function) = function else {
            log::warn!(target: "markview.wasm", "viewport has no {method}() method");
            return;
        };
        let args: js_sys::Array = args.iter().collect();
        if let Err(e) = function.apply(&self.target, &args) {
            log::warn!(target: "markview.wasm", "viewport {method}() threw: {e:?}");
        }
    }
}

impl Viewport for JsViewport {
    fn highlight(&mut self, text: &str, active: Match) {
        let js = to_js_match(text, active);
        self.call("highlight", &[js.start.into(), js.end.into()]);
    }

    fn clear_highlight(&mut self) {
        self.call("clearHighlight", &[]);
    }

    fn scroll_to_line(&mut self, line: usize) {
        self.call("scrollToLine", &[line.into()]);
    }
}

/// A markup panel: formatted/raw text plus search navigation that drives
/// the given viewport object.
#[wasm_bindgen]
pub struct MarkupPanel {
    session: PanelSession<JsViewport>,
}

#[wasm_bindgen]
impl MarkupPanel {
    #[wasm_bindgen(constructor)]
    pub fn new(markup: &str, viewport: JsValue, options: JsValue) -> Result<MarkupPanel, JsError> {
        let formatter = Formatter::new(parse_options(options)?);
        let viewport = JsViewport { target: viewport };
        Ok(MarkupPanel {
            session: PanelSession::with_formatter(markup, &formatter, viewport),
        })
    }

    /// The text on screen, also the clipboard payload.
    #[wasm_bindgen(getter, js_name = displayedText)]
    pub fn displayed_text(&self) -> String {
        self.session.displayed_text().to_string()
    }

    #[wasm_bindgen(getter, js_name = viewMode)]
    pub fn view_mode(&self) -> String {
        match self.session.view_mode() {
            ViewMode::Raw => "raw".into(),
            ViewMode::Formatted => "formatted".into(),
        }
    }

    #[wasm_bindgen(js_name = setViewMode)]
    pub fn set_view_mode(&mut self, mode: &str) -> Result<(), JsError> {
        self.session.set_view_mode(parse_view_mode(mode)?);
        Ok(())
    }

    /// Run `query` and return the match counter text ("2 of 5",
    /// "No results", or "" for an empty query).
    pub fn search(&mut self, query: &str) -> String {
        self.session.search(query).to_string()
    }

    /// Advance to the next match; returns its `{ start, end }` or `null`.
    pub fn next(&mut self) -> Result<JsValue, JsError> {
        let active = self.session.next();
        self.match_to_js(active)
    }

    pub fn previous(&mut self) -> Result<JsValue, JsError> {
        let active = self.session.previous();
        self.match_to_js(active)
    }

    #[wasm_bindgen(js_name = clearSearch)]
    pub fn clear_search(&mut self) {
        self.session.clear_search();
    }

    /// The match counter text.
    pub fn status(&self) -> String {
        self.session.status().to_string()
    }

    /// Zero-based line of the active match, or `undefined`.
    #[wasm_bindgen(js_name = activeLine)]
    pub fn active_line(&self) -> Option<usize> {
        self.session.navigator().active_line()
    }

    /// UTF-16 offset of the active match start, or `undefined`.
    #[wasm_bindgen(js_name = activeStart)]
    pub fn active_start(&self) -> Option<usize> {
        let text = self.session.displayed_text();
        self.session
            .navigator()
            .active()
            .map(|m| to_utf16(text, m.start))
    }

    fn match_to_js(&self, active: Option<Match>) -> Result<JsValue, JsError> {
        match active {
            Some(m) => {
                let js = to_js_match(self.session.displayed_text(), m);
                serde_wasm_bindgen::to_value(&js).map_err(|e| JsError::new(&e.to_string()))
            }
            None => Ok(JsValue::NULL),
        }
    }
}
