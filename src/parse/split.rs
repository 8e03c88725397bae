/// Collapse whitespace runs to single spaces and trim both ends.
pub(crate) fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove one leading `(` and one trailing `)` if both are present.
///
/// Only the first and last characters are inspected; the interior is not
/// checked for balance.
pub(crate) fn strip_outer_parens(text: &str) -> Option<&str> {
    text.strip_prefix('(')?.strip_suffix(')')
}

/// Split `text` at every occurrence of `keyword` outside parentheses.
///
/// Parenthesis depth only moves on tokens that are exactly `(` or `)`, so
/// `( a = 1 OR b = 2 )` groups while `(a = 1 OR b = 2)` does not. Always
/// returns at least one segment; empty segments are kept.
pub(crate) fn split_top_level(text: &str, keyword: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut depth: i64 = 0;

    for token in text.split_whitespace() {
        match token {
            "(" => depth += 1,
            ")" => depth -= 1,
            _ => {}
        }

        if depth == 0 && token == keyword {
            segments.push(current.join(" "));
            current.clear();
        } else {
            current.push(token);
        }
    }

    segments.push(current.join(" "));
    segments
}
