//! Property-based tests for the gxl lexer.

use gxl_lex::{tokenize, Lexer, LexResult, Token, TokenCategory, TokenKind};
use proptest::prelude::*;

const WORDS: [(&str, TokenKind); 9] = [
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
    ("not", TokenKind::BoolNot),
    ("and", TokenKind::BoolAnd),
    ("or", TokenKind::BoolOr),
    ("if", TokenKind::KwIf),
    ("then", TokenKind::KwThen),
    ("else", TokenKind::KwElse),
];

const FRAGMENTS: [&str; 24] = [
    "value", "x1", "a_b", "0", "42", "3.25", "^", "*", "/", "%", "+", "-", ">", ">=", "<=", "==",
    "!==", "&", "->", "=>", "??", "(", ")", "?.",
];

#[test]
fn test_property_deterministic() {
    proptest!(|(input in "\\PC{0,64}")| {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    });
}

#[test]
fn test_property_never_panics() {
    proptest!(|(input in any::<String>())| {
        let _ = tokenize(&input);
    });
}

#[test]
fn test_property_iterator_matches_tokenize() {
    proptest!(|(input in "[a-z0-9 .+\\-=<>!?()\\[\\],#\"\\n]{0,40}")| {
        let lazy: LexResult<Vec<Token>> = Lexer::new(&input).collect();
        prop_assert_eq!(lazy, tokenize(&input));
    });
}

#[test]
fn test_property_words_split_into_keywords_and_identifiers() {
    proptest!(|(input in "[a-zA-Z][a-zA-Z0-9_]{0,20}")| {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);

        let lower = input.to_ascii_lowercase();
        match WORDS.iter().find(|(word, _)| *word == lower) {
            Some((word, kind)) => {
                prop_assert_eq!(tokens[0].kind, *kind);
                prop_assert_eq!(tokens[0].text.as_str(), *word);
            },
            None => {
                prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
                prop_assert_eq!(&tokens[0].text, &input);
            },
        }
    });
}

#[test]
fn test_property_integer_round_trip() {
    proptest!(|(n in any::<u64>())| {
        let source = n.to_string();
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Long);
        prop_assert_eq!(tokens[0].text.parse::<u64>().unwrap(), n);
    });
}

#[test]
fn test_property_decimal_round_trip() {
    proptest!(|(input in "[0-9]{1,9}\\.[0-9]{1,9}")| {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Double);
        prop_assert_eq!(&tokens[0].text, &input);
    });
}

#[test]
fn test_property_plain_string_content() {
    proptest!(|(input in "[^\"\\\\]{0,50}")| {
        let source = format!("\"{}\"", input);
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(&tokens[0].text, &input);
    });
}

#[test]
fn test_property_visible_texts_round_trip() {
    let fragments = prop::collection::vec(prop::sample::select(FRAGMENTS.to_vec()), 0..30);
    proptest!(|(parts in fragments, comment in "[ -~]{0,20}")| {
        let source = format!("{} #{}", parts.join(" "), comment);
        let tokens = tokenize(&source).unwrap();

        let joined: String = tokens
            .iter()
            .filter(|token| token.is_visible())
            .map(|token| token.text.as_str())
            .collect();
        prop_assert_eq!(joined, parts.concat());

        let last = tokens.last().unwrap();
        prop_assert_eq!(last.category, TokenCategory::Invisible);
        prop_assert_eq!(&last.text, &comment);
    });
}

#[test]
fn test_property_positions_point_at_source() {
    proptest!(|(parts in prop::collection::vec("[a-z]{1,6}|[0-9]{1,4}", 1..12), gaps in prop::collection::vec("[ \\n\\t]{1,3}", 12))| {
        let mut source = String::new();
        for (part, gap) in parts.iter().zip(gaps.iter()) {
            source.push_str(part);
            source.push_str(gap);
        }

        let lines: Vec<&str> = source.split('\n').collect();
        for token in tokenize(&source).unwrap() {
            let line = lines[token.row as usize];
            let rest: String = line.chars().skip(token.col as usize).collect();
            prop_assert!(rest.to_ascii_lowercase().starts_with(&token.text));
            prop_assert_eq!(token.span.source_text(&source).map(str::to_ascii_lowercase), Some(token.text.clone()));
        }
    });
}
