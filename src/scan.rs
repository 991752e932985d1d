//! Low-level scanning primitives and extraction helpers.
//!
//!     All positions in this module are zero-based character indices into the
//!     full input string, never byte offsets. The pipeline scenarios include
//!     multi-byte hashtags, so cursor arithmetic has to count characters; the
//!     helpers convert to byte offsets internally where the regex engine needs
//!     them.
//!
//!     The three extraction helpers are public so custom recognizers can reuse
//!     the built-in extraction grammar. Each returns `Some(match record)` on
//!     success and `None` when no valid body follows; none of them panic on
//!     absence of a match or on out-of-range positions.

use once_cell::sync::Lazy;
use regex::Regex;

/// Body characters of an asset ticker, immediately after the `$` sigil.
/// Uppercase only, so ordinary `$`-prefixed prose is not swallowed.
static ASSET_BODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[A-Z0-9]+").unwrap());

/// Body characters of a URL, immediately after the scheme prefix.
static LINK_BODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A[a-zA-Z0-9\-._?=&%#/]+").unwrap());

/// Body characters of a hashtag: ASCII alphanumerics plus Han ideographs,
/// CJK-compatibility ideographs and the Kana blocks, so multi-script tags
/// work in multilingual rooms.
static HASH_TAG_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[a-zA-Z0-9\u{4e00}-\u{9fa5}\u{3300}-\u{33ff}ぁ-ゔゞァ-・ヽヾ゛゜ー]+").unwrap()
});

/// A successful asset-ticker extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMatch {
    /// Ticker symbol without the sigil, e.g. `BTC`.
    pub symbol: String,
    /// Display label including the sigil, e.g. `$BTC`.
    pub label: String,
    /// Character position immediately after the consumed span.
    pub pos: usize,
}

/// A successful link extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// Full URL including the scheme prefix.
    pub url: String,
    /// Character position immediately after the consumed span.
    pub pos: usize,
}

/// A successful hashtag extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashTagMatch {
    /// Tag text without the sigil.
    pub hash_tag: String,
    /// Display label including the sigil, e.g. `#Family`.
    pub label: String,
    /// Character position immediately after the consumed span.
    pub pos: usize,
}

/// Scan for a literal `prefix` starting at character position `pos`.
///
/// Returns the position immediately after the prefix on success, `None` when
/// the prefix is absent or `pos` is out of range. Pure and non-consuming.
pub fn scan_prefix(input: &str, pos: usize, prefix: &str) -> Option<usize> {
    let mut chars = input.chars().skip(pos);
    let mut next = pos;
    for expected in prefix.chars() {
        match chars.next() {
            Some(ch) if ch == expected => next += 1,
            _ => return None,
        }
    }
    Some(next)
}

/// Convert a character position to the byte offset the regex engine needs.
///
/// `pos` equal to the character count maps to `input.len()`; anything past
/// that is out of range.
fn byte_offset(input: &str, pos: usize) -> Option<usize> {
    let mut count = 0;
    for (offset, _) in input.char_indices() {
        if count == pos {
            return Some(offset);
        }
        count += 1;
    }
    if count == pos {
        Some(input.len())
    } else {
        None
    }
}

/// Try to extract an asset ticker whose `$` sigil sits at `pos`.
///
/// Consumes one or more `[A-Z0-9]` characters after the sigil; lowercase does
/// not match. Returns `None` when no valid character follows.
pub fn parse_asset_token(input: &str, pos: usize) -> Option<AssetMatch> {
    let body_start = byte_offset(input, pos + 1)?;
    let body = ASSET_BODY.find(&input[body_start..])?;
    let symbol = body.as_str().to_string();

    Some(AssetMatch {
        label: format!("${}", symbol),
        pos: pos + 1 + symbol.chars().count(),
        symbol,
    })
}

/// Try to extract a link whose scheme `prefix` sits at `pos`.
///
/// Consumes the prefix and then zero or more URL-body characters. A trailing
/// `.` is treated as sentence punctuation: it is stripped from the URL and
/// left unconsumed. Returns `None` only when the prefix itself is absent.
pub fn parse_link_token(input: &str, pos: usize, prefix: &str) -> Option<LinkMatch> {
    scan_prefix(input, pos, prefix)?;

    let body_start = byte_offset(input, pos + prefix.chars().count())?;
    let body = LINK_BODY
        .find(&input[body_start..])
        .map(|m| m.as_str())
        .unwrap_or("");

    let mut url = format!("{}{}", prefix, body);
    if url.ends_with('.') {
        url.pop();
    }

    Some(LinkMatch {
        pos: pos + url.chars().count(),
        url,
    })
}

/// Try to extract a hashtag whose `#` sigil sits at `pos`.
///
/// Consumes one or more hashtag-body characters after the sigil. Returns
/// `None` when no valid character follows.
pub fn parse_hash_tag_token(input: &str, pos: usize) -> Option<HashTagMatch> {
    let body_start = byte_offset(input, pos + 1)?;
    let body = HASH_TAG_BODY.find(&input[body_start..])?;
    let hash_tag = body.as_str().to_string();

    Some(HashTagMatch {
        label: format!("#{}", hash_tag),
        pos: pos + 1 + hash_tag.chars().count(),
        hash_tag,
    })
}
