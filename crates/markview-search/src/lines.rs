//! Offset → line/column conversion for scrolling a viewport to a match.

use memchr::{memchr_iter, memrchr};

/// Zero-based line index of `offset`: the number of `\n` before it.
///
/// Offsets past the end clamp to the end of `subject`.
pub fn offset_to_line(subject: &str, offset: usize) -> usize {
    let end = offset.min(subject.len());
    memchr_iter(b'\n', &subject.as_bytes()[..end]).count()
}

/// Zero-based `(line, column)` of `offset`, with the column counted in chars.
///
/// An offset inside a multi-byte char is floored to that char's start.
pub fn offset_to_position(subject: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(subject.len());
    while !subject.is_char_boundary(end) {
        end -= 1;
    }
    let before = &subject.as_bytes()[..end];
    let line_start = memrchr(b'\n', before).map_or(0, |i| i + 1);
    let column = subject[line_start..end].chars().count();
    (offset_to_line(subject, end), column)
}
