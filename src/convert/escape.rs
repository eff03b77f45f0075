//! Escaping from fish literal text into zsh `_arguments` specs.

/// `?` is a glob in fish option names and special inside zsh specs.
pub(crate) fn escape_common(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '?' => out.push_str("\\?"),
            _ => out.push(ch),
        }
    }
    out
}

/// Short names may also be `-#`.
pub(crate) fn escape_short(name: &str) -> String {
    let common = escape_common(name);
    let mut out = String::with_capacity(common.len());
    for ch in common.chars() {
        match ch {
            '#' => out.push_str("\\#"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn escape_old(name: &str) -> String {
    escape_common(name)
}

/// Turn a fish `-d` text into the bracketed description of a zsh spec.
///
/// Order matters: apostrophes are re-opened first, whitespace is collapsed
/// next and the `[`/`]` qualifier markers are escaped last.
pub(crate) fn escape_description(text: &str) -> String {
    // fish `\'` becomes `'"'"'`: close the quote, emit a quoted apostrophe, reopen.
    let requoted = text.replace("\\'", "'\"'\"'");

    let collapsed = requoted.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut out = String::with_capacity(collapsed.len());
    for ch in collapsed.chars() {
        match ch {
            '[' => out.push_str("\\["),
            ']' => out.push_str("\\]"),
            _ => out.push(ch),
        }
    }
    out
}
