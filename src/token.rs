//! Token types shared across the scanning and rendering passes.
//!
//!     A token is the smallest classified unit produced by scanning. The scanner
//!     walks the input once and appends exactly one token per handled span, so the
//!     token sequence covers every input character: multi-character spans become a
//!     single recognized token, everything else becomes one token per character.
//!
//! Token Layers
//!
//!     Structural Tokens:
//!         Character and Tag. Character carries one literal input character and is
//!         emitted verbatim by the renderer. Tag carries a literal markup fragment
//!         produced by whitespace normalization (currently only the line-break tag
//!         for `\n`). Neither is routed through a recognizer when rendering.
//!
//!     Recognized Tokens:
//!         Link, Asset, HashTag and Custom. These are produced by recognizers and
//!         routed back to the recognizer of the same kind during rendering. Custom
//!         tokens carry a caller-chosen kind string and an open JSON payload so
//!         caller-defined recognizers can shape their tokens freely.

/// The atomic unit of the intermediate representation between scanning and
/// rendering.
///
/// Tokens are immutable once produced and own their payload. The sequence they
/// form is append-only during scanning and local to one `tokenize` call.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "t", content = "v", rename_all = "camelCase")]
pub enum Token {
    /// A single literal input character, emitted verbatim.
    Character(char),
    /// A literal markup fragment from whitespace normalization, e.g. `<br/>`.
    Tag(String),
    /// A recognized URL, including its scheme prefix.
    Link { url: String },
    /// A recognized asset ticker, e.g. `$BTC`.
    Asset { symbol: String, label: String },
    /// A recognized hashtag, e.g. `#Family`.
    HashTag { hash_tag: String, label: String },
    /// A caller-defined token produced by a custom recognizer.
    Custom {
        kind: String,
        payload: serde_json::Value,
    },
}

/// Routing tag for the built-in character kind.
pub const KIND_CHARACTER: &str = "character";
/// Routing tag for the structural markup kind.
pub const KIND_TAG: &str = "tag";
/// Routing tag for link tokens.
pub const KIND_LINK: &str = "link";
/// Routing tag for asset ticker tokens.
pub const KIND_ASSET: &str = "asset";
/// Routing tag for hashtag tokens.
pub const KIND_HASH_TAG: &str = "hashTag";

impl Token {
    /// The kind tag used to route this token to its recognizer when rendering.
    ///
    /// Structural kinds (`character`, `tag`) are never routed; every other kind
    /// must correspond to a registered recognizer.
    pub fn kind(&self) -> &str {
        match self {
            Token::Character(_) => KIND_CHARACTER,
            Token::Tag(_) => KIND_TAG,
            Token::Link { .. } => KIND_LINK,
            Token::Asset { .. } => KIND_ASSET,
            Token::HashTag { .. } => KIND_HASH_TAG,
            Token::Custom { kind, .. } => kind,
        }
    }

    /// Whether this token is structural (emitted literally, not routed).
    pub fn is_structural(&self) -> bool {
        matches!(self, Token::Character(_) | Token::Tag(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Character(ch) => write!(f, "{}", ch),
            Token::Tag(markup) => write!(f, "{}", markup),
            Token::Link { url } => write!(f, "{}", url),
            Token::Asset { label, .. } => write!(f, "{}", label),
            Token::HashTag { label, .. } => write!(f, "{}", label),
            Token::Custom { kind, .. } => write!(f, "<{}>", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_routing() {
        assert_eq!(Token::Character('a').kind(), "character");
        assert_eq!(Token::Tag("<br/>".to_string()).kind(), "tag");
        assert_eq!(
            Token::Link {
                url: "https://pando.im".to_string()
            }
            .kind(),
            "link"
        );
        assert_eq!(
            Token::Asset {
                symbol: "BTC".to_string(),
                label: "$BTC".to_string()
            }
            .kind(),
            "asset"
        );
        assert_eq!(
            Token::HashTag {
                hash_tag: "Family".to_string(),
                label: "#Family".to_string()
            }
            .kind(),
            "hashTag"
        );
        assert_eq!(
            Token::Custom {
                kind: "user".to_string(),
                payload: serde_json::json!({ "username": "john" })
            }
            .kind(),
            "user"
        );
    }

    #[test]
    fn test_structural_tokens() {
        assert!(Token::Character(' ').is_structural());
        assert!(Token::Tag("<br/>".to_string()).is_structural());
        assert!(!Token::Link {
            url: "https://pando.im".to_string()
        }
        .is_structural());
    }

    #[test]
    fn test_token_serde_round_trip() {
        let token = Token::Asset {
            symbol: "BTC".to_string(),
            label: "$BTC".to_string(),
        };
        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", Token::Character('x')), "x");
        assert_eq!(format!("{}", Token::Tag("<br/>".to_string())), "<br/>");
        assert_eq!(
            format!(
                "{}",
                Token::HashTag {
                    hash_tag: "Family".to_string(),
                    label: "#Family".to_string()
                }
            ),
            "#Family"
        );
    }
}
