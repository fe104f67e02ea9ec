//! Element classification tables.
//!
//! All lookups expect lower-case names; the scanner normalizes tag names
//! before they get here.

/// HTML5 void elements (never have children or a closing tag).
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements that flow with running text and do not open an indent level.
pub const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "del", "dfn", "em", "font", "i",
    "ins", "kbd", "label", "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup",
    "time", "u", "var",
];

/// Elements whose text payload is emitted verbatim, never re-indented.
pub const PRESERVE_CONTENT_ELEMENTS: &[&str] = &["pre", "script", "style", "textarea"];

/// Elements whose body is scanned as a single run of text up to the matching
/// close tag, so a `<` inside a script is not mistaken for markup.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea"];

/// Check if a tag name is an HTML5 void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

pub fn is_inline_element(tag: &str) -> bool {
    INLINE_ELEMENTS.contains(&tag)
}

pub fn is_preserve_content_element(tag: &str) -> bool {
    PRESERVE_CONTENT_ELEMENTS.contains(&tag)
}

pub fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}
