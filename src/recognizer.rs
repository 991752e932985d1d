//! The recognizer trait and the built-in recognizers.
//!
//! This module provides the pluggable recognition system for the scanner.
//! Each recognizer pairs a match procedure with a render procedure for one
//! token kind and is registered with the `TextParser` at construction time.
//!
//! Matching is a tri-state affair: a recognizer first checks for its trigger
//! prefix at the current position. Absent prefix means the recognizer is not
//! applicable and the next one in the chain is consulted. Present prefix with
//! a failed extraction means the recognizer owns the position anyway: the
//! engine emits the trigger character literally and advances by one, and no
//! later recognizer gets a chance. This "first prefix owner wins" rule is the
//! tie-break between overlapping recognizers.

use crate::scan;
use crate::style::StyleConfig;
use crate::token::{Token, KIND_ASSET, KIND_HASH_TAG, KIND_LINK};
use std::fmt;

/// Link scheme prefixes, tried in this order.
pub const LINK_PREFIXES: [&str; 2] = ["https://", "http://"];

/// Error that can occur while rendering a token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A token kind appeared in the sequence with no registered recognizer.
    /// This is an internal invariant violation (a recognizer that can match
    /// but not render), so it fails loudly instead of dropping content.
    UnrenderableKind(String),
    /// A recognizer was handed a token of the right kind tag but the wrong
    /// payload shape.
    TokenShape { kind: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnrenderableKind(kind) => {
                write!(f, "no recognizer registered for token kind '{kind}'")
            }
            RenderError::TokenShape { kind } => {
                write!(f, "recognizer for kind '{kind}' received a mismatched token shape")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Outcome of consulting one recognizer at one cursor position.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// The recognizer's trigger prefix is absent; consult the next one.
    NotApplicable,
    /// The trigger prefix is present but extraction failed; the engine emits
    /// the current character literally and advances by one. Later recognizers
    /// are not consulted.
    Fallback,
    /// Extraction succeeded. `pos` is the character position immediately
    /// after the consumed span and must be greater than the position the
    /// match started at; zero-width tokens are disallowed.
    Token { token: Token, pos: usize },
}

/// A registered recognition rule: one token kind, one match procedure, one
/// render procedure.
///
/// Implementations must be pure with respect to the parser: `matches` never
/// consumes input on failure, and `render` is a function of the token alone.
/// Recognizers are shared across concurrent `parse` calls, hence the
/// `Send + Sync` bound.
pub trait Recognizer: Send + Sync {
    /// The kind tag of tokens this recognizer produces and renders.
    fn kind(&self) -> &str;

    /// Attempt a match starting exactly at character position `pos`.
    fn matches(&self, input: &str, pos: usize) -> MatchOutcome;

    /// Render a token previously produced by this recognizer.
    fn render(&self, token: &Token) -> Result<String, RenderError>;
}

/// Built-in recognizer for one link scheme prefix.
///
/// One instance is registered per entry of [`LINK_PREFIXES`]. Once the prefix
/// matches, extraction cannot fail: the body may be empty, in which case the
/// URL equals the prefix.
pub struct LinkRecognizer {
    prefix: &'static str,
    class: String,
}

impl LinkRecognizer {
    pub fn new(prefix: &'static str, styles: &StyleConfig) -> Self {
        LinkRecognizer {
            prefix,
            class: styles.link_class.clone(),
        }
    }
}

impl Recognizer for LinkRecognizer {
    fn kind(&self) -> &str {
        KIND_LINK
    }

    fn matches(&self, input: &str, pos: usize) -> MatchOutcome {
        if scan::scan_prefix(input, pos, self.prefix).is_none() {
            return MatchOutcome::NotApplicable;
        }

        match scan::parse_link_token(input, pos, self.prefix) {
            Some(link) => MatchOutcome::Token {
                token: Token::Link { url: link.url },
                pos: link.pos,
            },
            None => MatchOutcome::Fallback,
        }
    }

    fn render(&self, token: &Token) -> Result<String, RenderError> {
        match token {
            Token::Link { url } => Ok(format!(
                r#"<a class="{}" href="{}" target="_blank">{}</a>"#,
                self.class, url, url
            )),
            _ => Err(RenderError::TokenShape {
                kind: KIND_LINK.to_string(),
            }),
        }
    }
}

/// Built-in recognizer for `$TICKER` asset mentions.
pub struct AssetRecognizer {
    class: String,
}

impl AssetRecognizer {
    pub fn new(styles: &StyleConfig) -> Self {
        AssetRecognizer {
            class: styles.asset_class.clone(),
        }
    }
}

impl Recognizer for AssetRecognizer {
    fn kind(&self) -> &str {
        KIND_ASSET
    }

    fn matches(&self, input: &str, pos: usize) -> MatchOutcome {
        if scan::scan_prefix(input, pos, "$").is_none() {
            return MatchOutcome::NotApplicable;
        }

        match scan::parse_asset_token(input, pos) {
            Some(asset) => MatchOutcome::Token {
                token: Token::Asset {
                    symbol: asset.symbol,
                    label: asset.label,
                },
                pos: asset.pos,
            },
            None => MatchOutcome::Fallback,
        }
    }

    fn render(&self, token: &Token) -> Result<String, RenderError> {
        match token {
            Token::Asset { symbol, label } => Ok(format!(
                r#"<span class="{}" data-symbol="{}">{}</span>"#,
                self.class, symbol, label
            )),
            _ => Err(RenderError::TokenShape {
                kind: KIND_ASSET.to_string(),
            }),
        }
    }
}

/// Built-in recognizer for `#hashtag` mentions.
pub struct HashTagRecognizer {
    class: String,
}

impl HashTagRecognizer {
    pub fn new(styles: &StyleConfig) -> Self {
        HashTagRecognizer {
            class: styles.hash_tag_class.clone(),
        }
    }
}

impl Recognizer for HashTagRecognizer {
    fn kind(&self) -> &str {
        KIND_HASH_TAG
    }

    fn matches(&self, input: &str, pos: usize) -> MatchOutcome {
        if scan::scan_prefix(input, pos, "#").is_none() {
            return MatchOutcome::NotApplicable;
        }

        match scan::parse_hash_tag_token(input, pos) {
            Some(tag) => MatchOutcome::Token {
                token: Token::HashTag {
                    hash_tag: tag.hash_tag,
                    label: tag.label,
                },
                pos: tag.pos,
            },
            None => MatchOutcome::Fallback,
        }
    }

    fn render(&self, token: &Token) -> Result<String, RenderError> {
        match token {
            Token::HashTag { hash_tag, label } => Ok(format!(
                r#"<span class="{}" data-hash-tag="{}">{}</span>"#,
                self.class, hash_tag, label
            )),
            _ => Err(RenderError::TokenShape {
                kind: KIND_HASH_TAG.to_string(),
            }),
        }
    }
}
