//! Title normalization for duplicate detection.
//!
//! Scraped and No-Intro style names carry annotations that differ between
//! releases of the same game:
//! ```text
//! Foo (USA) (Rev 1)
//! Foo v1.1
//! Foo (Europe) (En,Fr,De)
//! ```
//! All of these normalize to `Foo`.

/// Strip `(...)` groups and trailing `vN` / `vN.N` version markers, then
/// collapse whitespace.
///
/// A marker counts when it starts a word or follows punctuation
/// (`Foo-v2` -> `Foo-`). Whitespace runs inside the title collapse to one
/// space on purpose, so `Foo (USA) Bar` and `Foo Bar` are the same title.
///
/// The result is a fixed point: normalizing it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use gamelist_lib::title::normalize_title;
///
/// assert_eq!(normalize_title("Foo (USA)"), "Foo");
/// assert_eq!(normalize_title("Foo v2"), "Foo");
/// assert_eq!(normalize_title("Foo (Japan) V1.1 (Beta)"), "Foo");
/// ```
pub fn normalize_title(title: &str) -> String {
    let stripped = strip_parenthetical(title);
    let mut words: Vec<&str> = stripped.split_whitespace().collect();
    while let Some(last) = words.pop() {
        match strip_version_suffix(last) {
            Some("") => {}
            Some(rest) => words.push(rest),
            None => {
                words.push(last);
                break;
            }
        }
    }
    words.join(" ")
}

/// `word` without a trailing version marker that starts it or follows a
/// non-alphanumeric character. `None` when there is no such marker.
fn strip_version_suffix(word: &str) -> Option<&str> {
    word.char_indices()
        .map(|(i, _)| i)
        .filter(|&i| {
            word[..i]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric())
        })
        .find(|&i| is_version_marker(&word[i..]))
        .map(|i| &word[..i])
}

/// Remove balanced `(...)` groups, including nested ones. An opening
/// parenthesis with no matching close is kept as text.
fn strip_parenthetical(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut rest = title;

    while let Some(open) = rest.find('(') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match matching_close(after_open) {
            Some(close) => rest = &after_open[close + 1..],
            None => {
                out.push('(');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Byte offset of the `)` closing a group whose `(` was just consumed.
fn matching_close(s: &str) -> Option<usize> {
    let mut depth = 1u32;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// `v2`, `V10` and `v1.1` count; `v`, `v1.`, `v1.2.3` and `Vol2` do not.
fn is_version_marker(word: &str) -> bool {
    let Some(rest) = word.strip_prefix(['v', 'V']) else {
        return false;
    };
    let (major, minor) = match rest.split_once('.') {
        Some((major, minor)) => (major, Some(minor)),
        None => (rest, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(major) && minor.is_none_or(all_digits)
}

#[cfg(test)]
#[path = "tests/title_tests.rs"]
mod tests;
