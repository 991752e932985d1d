//! Property-based tests for the scan/render pipeline.
//!
//! These ensure the scanner accounts for every input character (nothing is
//! dropped or duplicated), never fails on arbitrary text, and leaves
//! pattern-free text untouched.

use proptest::prelude::*;
use tokmark::{TextParser, Token};

/// How many cursor positions a token consumed during scanning.
fn consumed_chars(token: &Token) -> usize {
    match token {
        Token::Character(_) | Token::Tag(_) => 1,
        Token::Asset { label, .. } => label.chars().count(),
        Token::HashTag { label, .. } => label.chars().count(),
        Token::Link { url } => url.chars().count(),
        // the built-in chain produces no custom tokens
        Token::Custom { .. } => 0,
    }
}

proptest! {
    #[test]
    fn parse_never_fails_on_arbitrary_text(input in any::<String>()) {
        let parser = TextParser::new();
        prop_assert!(parser.parse(&input).is_ok());
    }

    #[test]
    fn every_character_is_accounted_for(input in any::<String>()) {
        let parser = TextParser::new();
        let tokens = parser.tokenize(&input);

        let consumed: usize = tokens.iter().map(consumed_chars).sum();
        prop_assert_eq!(consumed, input.chars().count());
    }

    /// Same accounting over inputs dense with recognizable material.
    #[test]
    fn every_character_is_accounted_for_in_token_dense_text(
        input in r"(\$[A-Z0-9]{1,4}|\$[a-z]{1,3}|#[A-Za-z]{1,6}|#做空|https://[a-z]{1,5}\.im|https://|[ a-z.\n]{0,5}){0,12}"
    ) {
        let parser = TextParser::new();
        let tokens = parser.tokenize(&input);

        let consumed: usize = tokens.iter().map(consumed_chars).sum();
        prop_assert_eq!(consumed, input.chars().count());
    }

    /// Text with no sigils, no link prefixes and no newlines renders
    /// identically to the input.
    #[test]
    fn pattern_free_text_is_identity(input in "[a-gi-z 0-9,.!?]{0,64}") {
        let parser = TextParser::new();
        prop_assert_eq!(parser.parse(&input).unwrap(), input);
    }

    /// The cursor is monotone: token order in the stream follows input order,
    /// which shows up as rendered output never being shorter than the input
    /// minus stripped characters. Weak but cheap sanity over arbitrary text.
    #[test]
    fn rendered_output_contains_no_fewer_characters_than_input(input in "[a-z $#\n]{0,64}") {
        let parser = TextParser::new();
        let markup = parser.parse(&input).unwrap();
        prop_assert!(markup.chars().count() >= input.chars().count());
    }
}
