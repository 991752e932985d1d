//! The scan/render engine.
//!
//!     The engine walks the input once, position by position, consulting the
//!     recognizer chain in registration order at each position. Exactly one
//!     emission (a recognized token, a fallback character, or a structural
//!     default) advances the cursor per iteration; a position is never
//!     re-checked after it has been handled. The completed token sequence is
//!     then rendered back into a markup string by routing each recognized
//!     token to the recognizer of its kind.
//!
//!     The chain is finalized at construction through the builder and never
//!     mutated afterwards, so one `TextParser` may serve any number of
//!     concurrent `parse` calls: the only mutable state of a parse is the
//!     call-local token sequence.

use crate::recognizer::{
    AssetRecognizer, HashTagRecognizer, LinkRecognizer, MatchOutcome, Recognizer, RenderError,
    LINK_PREFIXES,
};
use crate::style::{StyleConfig, StyleOverrides};
use crate::token::Token;

/// Markup emitted for a literal `\n` in the input.
pub const LINE_BREAK_TAG: &str = "<br/>";

/// The tokenizer/renderer engine.
///
/// Construct with [`TextParser::new`] for the built-in chain and default
/// styles, or through [`TextParser::builder`] to add style overrides and
/// custom recognizers.
pub struct TextParser {
    recognizers: Vec<Box<dyn Recognizer>>,
}

/// Builder for [`TextParser`].
///
/// Built-in recognizers are registered first (link recognizers in prefix-list
/// order, then asset, then hashtag), followed by caller recognizers in the
/// order they were added. Registration order is the tie-break between
/// overlapping recognizers, so it is part of the contract.
#[derive(Default)]
pub struct TextParserBuilder {
    overrides: StyleOverrides,
    extras: Vec<Box<dyn Recognizer>>,
}

impl TextParserBuilder {
    /// Set the class-name overrides merged into the built-in styles.
    pub fn styles(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Append one caller-supplied recognizer after the built-ins.
    pub fn recognizer(mut self, recognizer: Box<dyn Recognizer>) -> Self {
        self.extras.push(recognizer);
        self
    }

    /// Finalize the recognizer chain and produce the engine.
    pub fn build(self) -> TextParser {
        let styles = StyleConfig::merged(&self.overrides);

        let mut recognizers: Vec<Box<dyn Recognizer>> = Vec::new();
        for prefix in LINK_PREFIXES {
            recognizers.push(Box::new(LinkRecognizer::new(prefix, &styles)));
        }
        recognizers.push(Box::new(AssetRecognizer::new(&styles)));
        recognizers.push(Box::new(HashTagRecognizer::new(&styles)));
        recognizers.extend(self.extras);

        TextParser { recognizers }
    }
}

impl TextParser {
    /// An engine with the built-in recognizers and default styles.
    pub fn new() -> Self {
        TextParser::builder().build()
    }

    pub fn builder() -> TextParserBuilder {
        TextParserBuilder::default()
    }

    /// Scan `input` into its token sequence.
    ///
    /// Never fails for arbitrary text: malformed or ambiguous spans degrade
    /// to literal character tokens. A custom recognizer that produces a
    /// zero-width token panics here, since that is a caller-integration bug
    /// the engine does not shield against.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let chars: Vec<char> = input.chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        'scan: while pos < chars.len() {
            for recognizer in &self.recognizers {
                match recognizer.matches(input, pos) {
                    MatchOutcome::NotApplicable => continue,
                    MatchOutcome::Fallback => {
                        // the trigger character is emitted literally; the
                        // recognizer still owns the position
                        tokens.push(Token::Character(chars[pos]));
                        pos += 1;
                        continue 'scan;
                    }
                    MatchOutcome::Token { token, pos: next } => {
                        assert!(
                            next > pos,
                            "recognizer for kind '{}' produced a zero-width token at position {}",
                            token.kind(),
                            pos
                        );
                        tokens.push(token);
                        pos = next;
                        continue 'scan;
                    }
                }
            }

            // structural defaults: line break, then literal character
            // (spaces included)
            let ch = chars[pos];
            if ch == '\n' {
                tokens.push(Token::Tag(LINE_BREAK_TAG.to_string()));
            } else {
                tokens.push(Token::Character(ch));
            }
            pos += 1;
        }

        tokens
    }

    /// Render a token sequence into the output markup string.
    ///
    /// Structural tokens emit their value literally; every other token is
    /// routed to the first recognizer registered for its kind. A kind with no
    /// recognizer is an invariant violation and fails loudly rather than
    /// dropping content.
    pub fn render(&self, tokens: &[Token]) -> Result<String, RenderError> {
        let mut out = String::new();

        for token in tokens {
            match token {
                Token::Character(ch) => out.push(*ch),
                Token::Tag(markup) => out.push_str(markup),
                recognized => {
                    let recognizer = self
                        .recognizers
                        .iter()
                        .find(|r| r.kind() == recognized.kind())
                        .ok_or_else(|| {
                            RenderError::UnrenderableKind(recognized.kind().to_string())
                        })?;
                    out.push_str(&recognizer.render(recognized)?);
                }
            }
        }

        Ok(out)
    }

    /// Run the full scan+render pipeline.
    pub fn parse(&self, input: &str) -> Result<String, RenderError> {
        let tokens = self.tokenize(input);
        self.render(&tokens)
    }
}

impl Default for TextParser {
    fn default() -> Self {
        TextParser::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextParser>();
    }

    #[test]
    fn test_plain_text_is_identity() {
        let parser = TextParser::new();
        assert_eq!(parser.parse("just some words").unwrap(), "just some words");
    }

    #[test]
    fn test_newline_becomes_line_break_tag() {
        let parser = TextParser::new();
        assert_eq!(parser.parse("a\nb").unwrap(), "a<br/>b");
    }

    #[test]
    fn test_sigil_without_body_falls_back_to_literal() {
        let parser = TextParser::new();
        assert_eq!(parser.parse("costs 5 $ today").unwrap(), "costs 5 $ today");
        assert_eq!(parser.parse("# not a tag").unwrap(), "# not a tag");
        assert_eq!(parser.parse("$btc").unwrap(), "$btc");
    }

    #[test]
    fn test_tokenize_accounts_for_every_character() {
        let parser = TextParser::new();
        let input = "I have 1 $BTC for my #Family.\nvisit https://pando.im";
        let tokens = parser.tokenize(input);

        let consumed: usize = tokens
            .iter()
            .map(|t| match t {
                Token::Character(_) | Token::Tag(_) => 1,
                Token::Asset { label, .. } => label.chars().count(),
                Token::HashTag { label, .. } => label.chars().count(),
                Token::Link { url } => url.chars().count(),
                Token::Custom { .. } => 0,
            })
            .sum();
        assert_eq!(consumed, input.chars().count());
    }

    #[test]
    fn test_render_unknown_kind_fails_loudly() {
        let parser = TextParser::new();
        let tokens = vec![Token::Custom {
            kind: "user".to_string(),
            payload: serde_json::json!({}),
        }];
        assert_eq!(
            parser.render(&tokens).unwrap_err(),
            RenderError::UnrenderableKind("user".to_string())
        );
    }

    #[test]
    #[should_panic(expected = "zero-width token")]
    fn test_zero_width_custom_token_panics() {
        struct ZeroWidth;
        impl Recognizer for ZeroWidth {
            fn kind(&self) -> &str {
                "zero"
            }
            fn matches(&self, _input: &str, pos: usize) -> MatchOutcome {
                MatchOutcome::Token {
                    token: Token::Custom {
                        kind: "zero".to_string(),
                        payload: serde_json::Value::Null,
                    },
                    pos,
                }
            }
            fn render(&self, _token: &Token) -> Result<String, RenderError> {
                Ok(String::new())
            }
        }

        let parser = TextParser::builder().recognizer(Box::new(ZeroWidth)).build();
        parser.tokenize("x");
    }
}
