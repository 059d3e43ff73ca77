//! Lexical removal of marker-prefixed utility tokens.
//!
//! A token is removed together with the single space in front of it:
//! `" dark:text-white"` disappears from `class="text-sm dark:text-white"`.
//! The token runs until the next whitespace character or `"`, so a token at
//! the end of a quoted attribute never eats the closing quote.
//!
//! Matching is purely textual. Occurrences inside comments, string literals
//! or prose are removed as well.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Marker prefix of dark-mode utility tokens.
pub const DEFAULT_PREFIX: &str = "dark:";

static DARK_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#" dark:[^\s"]+"#).unwrap());

/// Removes every space-led token that starts with a marker prefix.
#[derive(Debug, Clone)]
pub struct TokenStripper {
    prefix: String,
    pattern: Regex,
}

impl TokenStripper {
    /// Build a stripper for an arbitrary marker prefix.
    ///
    /// The prefix is matched literally; regex metacharacters in it carry no
    /// special meaning.
    pub fn new(prefix: &str) -> Result<Self> {
        if prefix.is_empty() {
            return Err(Error::EmptyPrefix);
        }
        if prefix == DEFAULT_PREFIX {
            return Ok(Self::dark());
        }
        let pattern = Regex::new(&token_pattern(prefix))?;
        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    /// Stripper for the `dark:` prefix.
    pub fn dark() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            pattern: DARK_TOKEN_PATTERN.clone(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Remove all marker tokens. Borrows the input when nothing matched.
    pub fn strip<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.strip_with_count(content).0
    }

    /// Like [`strip`](Self::strip), also returning how many tokens went away.
    pub fn strip_with_count<'a>(&self, content: &'a str) -> (Cow<'a, str>, usize) {
        remove_matches(&self.pattern, content)
    }
}

impl Default for TokenStripper {
    fn default() -> Self {
        Self::dark()
    }
}

fn token_pattern(prefix: &str) -> String {
    format!(r#" {}[^\s"]+"#, regex::escape(prefix))
}

fn remove_matches<'a>(pattern: &Regex, content: &'a str) -> (Cow<'a, str>, usize) {
    let mut removed = 0;
    let mut last_end = 0;
    let mut stripped = String::new();

    for found in pattern.find_iter(content) {
        if removed == 0 {
            stripped.reserve(content.len());
        }
        stripped.push_str(&content[last_end..found.start()]);
        last_end = found.end();
        removed += 1;
    }

    if removed == 0 {
        return (Cow::Borrowed(content), 0);
    }
    stripped.push_str(&content[last_end..]);
    (Cow::Owned(stripped), removed)
}

/// Strip `dark:` tokens from `content`.
///
/// This is the one-call entry point for library users; it shares the
/// compiled default pattern instead of building a [`TokenStripper`].
///
/// ```
/// use darkstrip_core::strip_dark_tokens;
///
/// let html = r#"<div class="text-sm dark:text-white bg-white">"#;
/// assert_eq!(strip_dark_tokens(html), r#"<div class="text-sm bg-white">"#);
/// ```
pub fn strip_dark_tokens(content: &str) -> Cow<'_, str> {
    remove_matches(&DARK_TOKEN_PATTERN, content).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::token_list(
        r#"class="text-sm dark:text-white bg-white dark:bg-slate-800""#,
        r#"class="text-sm bg-white""#
    )]
    #[case::mid_list(
        "p-4 dark:foo-bar rounded shadow",
        "p-4 rounded shadow"
    )]
    #[case::variant_chain(
        r#"className="hover:bg-gray-100 dark:hover:bg-gray-800""#,
        r#"className="hover:bg-gray-100""#
    )]
    #[case::arbitrary_value(
        r#"className="m-2 dark:bg-[#0f172a]""#,
        r#"className="m-2""#
    )]
    #[case::consecutive(
        "a dark:b dark:c dark:d e",
        "a e"
    )]
    #[case::across_lines(
        "<div className=\"p-2 dark:p-3\">\n  <span className=\"x dark:y\" />\n</div>",
        "<div className=\"p-2\">\n  <span className=\"x\" />\n</div>"
    )]
    #[case::inside_comment(
        "// toggles dark:bg-black here",
        "// toggles here"
    )]
    fn test_strips_marker_tokens(#[case] input: &str, #[case] expected: &str) {
        let stripper = TokenStripper::dark();
        assert_eq!(strip_dark_tokens(input), expected);
        assert_eq!(stripper.strip(input), expected);
        assert_eq!(stripper.strip_with_count(input).0, expected);
    }

    #[rstest]
    #[case::no_leading_space(r#"className="dark:bg-black p-2""#)]
    #[case::tab_before_marker("p-2\tdark:bg-black")]
    #[case::newline_before_marker("p-2\ndark:bg-black")]
    #[case::bare_prefix(r#"class="p-2 dark:""#)]
    #[case::bare_prefix_then_space("p-2 dark: p-4")]
    #[case::different_case("p-2 Dark:bg-black")]
    #[case::empty("")]
    fn test_leaves_non_matching_input_untouched(#[case] input: &str) {
        let stripped = strip_dark_tokens(input);
        assert!(matches!(stripped, Cow::Borrowed(_)));
        assert_eq!(stripped, input);
        assert!(matches!(TokenStripper::dark().strip(input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_does_not_overmatch_past_quote() {
        let input = r#"<p className="text-lg dark:text-gray-300">Hello dark:mode here</p>"#;
        assert_eq!(
            strip_dark_tokens(input),
            r#"<p className="text-lg">Hello here</p>"#
        );
    }

    #[test]
    fn test_token_runs_through_markup_punctuation() {
        assert_eq!(strip_dark_tokens("<b>x dark:y</b>\n"), "<b>x\n");
    }

    #[test]
    fn test_token_ends_at_other_whitespace() {
        assert_eq!(strip_dark_tokens("a dark:b\tc"), "a\tc");
        assert_eq!(strip_dark_tokens("a dark:b\r\nc"), "a\r\nc");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let input = r#"class="a dark:b c dark:d" data-x=" dark:e""#;
        let once = strip_dark_tokens(input).into_owned();
        let twice = strip_dark_tokens(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_with_count() {
        let stripper = TokenStripper::dark();
        let (stripped, removed) =
            stripper.strip_with_count(r#"class="text-sm dark:text-white bg-white dark:bg-slate-800""#);
        assert_eq!(stripped, r#"class="text-sm bg-white""#);
        assert_eq!(removed, 2);

        let (untouched, removed) = stripper.strip_with_count("bg-white");
        assert!(matches!(untouched, Cow::Borrowed("bg-white")));
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_custom_prefix_is_literal() {
        let stripper = TokenStripper::new("print:").unwrap();
        assert_eq!(stripper.prefix(), "print:");
        assert_eq!(stripper.strip("block print:hidden dark:x"), "block dark:x");

        let dotted = TokenStripper::new("a.b").unwrap();
        assert_eq!(dotted.strip("x a.b-1 axb-2"), "x axb-2");
    }

    #[test]
    fn test_default_prefix_reuses_shared_pattern() {
        let stripper = TokenStripper::new(DEFAULT_PREFIX).unwrap();
        assert_eq!(stripper.prefix(), DEFAULT_PREFIX);
        assert_eq!(stripper.strip("a dark:b"), "a");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(matches!(TokenStripper::new(""), Err(Error::EmptyPrefix)));
    }
}
