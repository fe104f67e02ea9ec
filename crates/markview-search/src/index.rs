//! Match finding.

use crate::Match;

/// Find every case-insensitive occurrence of `query` in `subject`.
///
/// Returns nothing for an empty subject or a blank query. Matches are in
/// ascending order of `start`, and offsets refer to the original subject.
///
/// After each hit the scan resumes one character past the hit's *start*,
/// not its end, so occurrences may overlap: `"aaa"` in `"aaaa"` yields two
/// matches, at 0 and 1.
pub fn search(subject: &str, query: &str) -> Vec<Match> {
    if subject.is_empty() || query.trim().is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let matches: Vec<Match> = subject
        .char_indices()
        .filter_map(|(start, _)| {
            match_len_at(&subject[start..], &needle).map(|len| Match::new(start, start + len))
        })
        .collect();

    log::debug!(
        target: "markview.search",
        "query {query:?}: {} match(es) in {} bytes",
        matches.len(),
        subject.len()
    );
    matches
}

/// If `haystack` starts with `needle` (compared in lower case, one source
/// char at a time), the byte length of the matched prefix.
///
/// A source char whose lower-case form is several chars must match all of
/// them, so a hit never ends inside a char.
fn match_len_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (i, c) in haystack.char_indices() {
        for lower in c.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(i + c.len_utf8());
        }
    }
    None
}
