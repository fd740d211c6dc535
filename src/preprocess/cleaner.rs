//! Text cleaning
//!
//! Strips social-media noise (mentions, hashtags, retweet markers, URLs)
//! and everything that is not a lowercase letter or whitespace.

use regex::Regex;
use std::sync::LazyLock;

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[A-Za-z0-9_]+").unwrap());
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static NON_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\s]").unwrap());
static LEADING_RT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(rt\s+)+").unwrap());

/// Clean a raw text value.
///
/// Lowercases, removes `@mention`, `#hashtag` and `http(s)://` tokens,
/// drops every character outside `[a-z]` and whitespace, trims, and strips
/// a leading retweet marker. Total over strings: never fails, empty input
/// yields empty output. Idempotent: `clean(clean(t)) == clean(t)`.
pub fn clean(text: &str) -> String {
    let text = text.to_lowercase();
    let text = MENTION_RE.replace_all(&text, "");
    let text = HASHTAG_RE.replace_all(&text, "");
    let text = URL_RE.replace_all(&text, "");
    let text = NON_LETTER_RE.replace_all(&text, "");
    // Leading-RT removal runs last, on the trimmed string, so the output
    // can never itself start with another `rt ` marker.
    let text = text.trim();
    LEADING_RT_RE.replace(text, "").into_owned()
}
