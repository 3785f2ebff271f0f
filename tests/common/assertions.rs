//! Domain-specific assertion macros for hostlens harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* formatting rule was broken and for *what* input.

/// Assert that a raw timestamp renders to `expected` through the core formatter.
///
/// ```rust
/// assert_formats_to!("2024-03-15T12:30:45Z", "15.03.2024, 12:30:45");
/// ```
#[macro_export]
macro_rules! assert_formats_to {
    ($raw:expr, $expected:expr) => {{
        let raw: &str = $raw;
        let expected: &str = $expected;
        let actual = hostlens_core::format_timestamp(Some(raw));
        if actual != expected {
            panic!(
                "assert_formats_to! failed:\n  input:    {:?}\n  expected: {:?}\n  actual:   {:?}",
                raw, expected, actual
            );
        }
    }};
}

/// Assert that an unparseable timestamp comes back byte-for-byte unchanged.
#[macro_export]
macro_rules! assert_echoed {
    ($raw:expr) => {{
        let raw: &str = $raw;
        let actual = hostlens_core::format_timestamp(Some(raw));
        if actual != raw {
            panic!(
                "assert_echoed! failed: unparseable input was altered\n  input:  {:?}\n  output: {:?}",
                raw, actual
            );
        }
    }};
}

/// Assert that no rendered line ends in whitespace.
#[macro_export]
macro_rules! assert_no_trailing_whitespace {
    ($text:expr) => {{
        let text: &str = &$text;
        for (i, line) in text.lines().enumerate() {
            if line.ends_with(char::is_whitespace) {
                panic!(
                    "assert_no_trailing_whitespace! failed on line {}: {:?}\n--- full output ---\n{}",
                    i + 1,
                    line,
                    text
                );
            }
        }
    }};
}

/// Assert that two rendered blocks are equal, with a line diff on failure.
pub fn assert_rendered_eq(actual: &str, expected: &str) {
    pretty_assertions::assert_eq!(actual, expected);
}
