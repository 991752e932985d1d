//! # tokmark
//!
//! A single-pass tokenizer and markup renderer for rich social text.
//!
//! The engine scans free-form user text left-to-right, recognizes embedded
//! semantic tokens (asset tickers like `$BTC`, hashtags, URLs and
//! caller-supplied patterns such as `@mentions`) and re-serializes the text
//! into a markup string where recognized spans are wrapped in caller-styled
//! tags. Everything else passes through verbatim; `\n` is normalized to a
//! line-break tag.
//!
//! ## Usage
//!
//!     let parser = tokmark::TextParser::new();
//!     let markup = parser.parse("1 $BTC, see https://pando.im").unwrap();
//!
//! Custom recognizers implement [`Recognizer`] and are appended through
//! [`TextParser::builder`]; the extraction helpers in [`scan`] are public so
//! extensions can reuse the built-in grammar.

pub mod parser;
pub mod recognizer;
pub mod scan;
pub mod style;
pub mod token;

pub use parser::{TextParser, TextParserBuilder, LINE_BREAK_TAG};
pub use recognizer::{MatchOutcome, Recognizer, RenderError, LINK_PREFIXES};
pub use scan::{
    parse_asset_token, parse_hash_tag_token, parse_link_token, scan_prefix, AssetMatch,
    HashTagMatch, LinkMatch,
};
pub use style::{StyleConfig, StyleOverrides};
pub use token::Token;
