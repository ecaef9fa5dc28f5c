//! Splits display text around the matches of the last successful query.

/// A run of display text; `emphasized` runs are matches of the search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// Segments `text` on every case-insensitive occurrence of `search_text`.
///
/// Matching is literal and non-overlapping, scanning left to right. Segments
/// carry the original casing of `text`, so joining them reproduces `text`
/// exactly. An empty `text` yields no segments; an empty `search_text` yields
/// the whole text as one plain segment.
pub fn highlight(text: &str, search_text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    if search_text.is_empty() {
        return vec![Segment::plain(text)];
    }

    let needle: Vec<char> = search_text.chars().collect();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        match match_len_at(&text[cursor..], &needle) {
            Some(len) => {
                if plain_start < cursor {
                    segments.push(Segment::plain(&text[plain_start..cursor]));
                }
                segments.push(Segment::emphasized(&text[cursor..cursor + len]));
                cursor += len;
                plain_start = cursor;
            }
            None => {
                cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }
    segments
}

/// Byte length of the prefix of `haystack` matching `needle`, if any.
fn match_len_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut chars = haystack.char_indices();
    let mut end = 0;
    for &expected in needle {
        let (idx, actual) = chars.next()?;
        if !same_ignoring_case(actual, expected) {
            return None;
        }
        end = idx + actual.len_utf8();
    }
    Some(end)
}

fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
