// src/pin_name.rs

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Field separator used inside source pin names.
const SOURCE_SEPARATOR: char = '\\';
/// Replacement separator in the schematic library.
const TARGET_SEPARATOR: char = '/';
/// Appended after a character to draw an overline over it.
const OVERLINE_MARKER: char = '\\';

// A run of name characters with an active-low marker (`!`, `~`, `*`, `'`)
// before it, after it, or both.
static ACTIVE_LOW_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[!~*']([\w-]+)[!~*']?|([\w-]+)[!~*']").expect("active-low pattern is valid")
});

/// Produces display text for a pin name.
///
/// The source separator is always rewritten. With `convert_overlines`,
/// marker-delimited runs lose their markers and every alphanumeric
/// character in them gets an overline.
pub fn normalize_pin_name(raw: Option<&str>, convert_overlines: bool) -> String {
    let name = raw
        .unwrap_or_default()
        .replace(SOURCE_SEPARATOR, &TARGET_SEPARATOR.to_string());
    if !convert_overlines {
        return name;
    }

    ACTIVE_LOW_RUN
        .replace_all(&name, |caps: &Captures| {
            let run = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            overline(run)
        })
        .into_owned()
}

fn overline(run: &str) -> String {
    let mut out = String::with_capacity(run.len() * 2);
    for c in run.chars() {
        out.push(c);
        if c.is_alphanumeric() {
            out.push(OVERLINE_MARKER);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_marker() {
        assert_eq!(normalize_pin_name(Some("RST*"), true), "R\\S\\T\\");
        assert_eq!(normalize_pin_name(Some("CS'"), true), "C\\S\\");
    }

    #[test]
    fn prefix_marker_keeps_underscore_plain() {
        assert_eq!(normalize_pin_name(Some("~WR_EN"), true), "W\\R\\_E\\N\\");
    }

    #[test]
    fn separator_rewritten() {
        assert_eq!(normalize_pin_name(Some("A\\B"), false), "A/B");
        assert_eq!(normalize_pin_name(None, true), "");
    }
}
