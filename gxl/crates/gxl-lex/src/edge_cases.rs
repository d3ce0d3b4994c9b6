//! Edge case tests for gxl-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_with_config, LexError, LexerConfig, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all("  \n\t \n ").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].text, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1", name));
        assert_eq!(t[0].text, name);
        assert_eq!(t[1].col, 10001);
    }

    #[test]
    fn test_edge_literals() {
        assert_eq!(kinds("true false null"), vec![TokenKind::True, TokenKind::False, TokenKind::Null]);
    }

    #[test]
    fn test_edge_literal_prefix() {
        let t = lex_all("trueish");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_word_followed_by_symbol() {
        assert_eq!(kinds("not(x)")[0], TokenKind::BoolNot);
        assert_eq!(kinds("null.x")[0], TokenKind::Null);
    }

    #[test]
    fn test_edge_all_operators() {
        let t = kinds("^ * / % + - > >= < <= == != === !== & => -> = ??");
        assert_eq!(
            t,
            vec![
                TokenKind::Exponent,
                TokenKind::Multiplication,
                TokenKind::Division,
                TokenKind::Modulo,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::GreaterThan,
                TokenKind::GreaterThanOrEqual,
                TokenKind::LessThan,
                TokenKind::LessThanOrEqual,
                TokenKind::ValueEquals,
                TokenKind::ValueNotEquals,
                TokenKind::ValueEqualsExact,
                TokenKind::ValueNotEqualsExact,
                TokenKind::Concatenate,
                TokenKind::Arrow,
                TokenKind::ThinArrow,
                TokenKind::Assign,
                TokenKind::NullCoalesce,
            ]
        );
    }

    #[test]
    fn test_edge_all_symbols() {
        let t = kinds("( ?( ) , . ?. [ ?[ ]");
        assert_eq!(
            t,
            vec![
                TokenKind::ParenthesisOpen,
                TokenKind::OptionalParenthesisOpen,
                TokenKind::ParenthesisClose,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::OptionalDot,
                TokenKind::BracketOpen,
                TokenKind::OptionalBracketOpen,
                TokenKind::BracketClose,
            ]
        );
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = kinds("((()))");
        assert_eq!(t.iter().filter(|k| **k == TokenKind::ParenthesisOpen).count(), 3);
    }

    #[test]
    fn test_edge_negative_number() {
        assert_eq!(kinds("-1"), vec![TokenKind::Minus, TokenKind::Long]);
        assert_eq!(kinds("-.5"), vec![TokenKind::Minus, TokenKind::Double]);
    }

    #[test]
    fn test_edge_adjacent_operators() {
        assert_eq!(kinds("a=-b")[1], TokenKind::Assign);
        assert_eq!(kinds("a=-b")[2], TokenKind::Minus);
        assert_eq!(kinds("a<-b")[1], TokenKind::LessThan);
        assert_eq!(kinds("a<-b")[2], TokenKind::Minus);
    }

    #[test]
    fn test_edge_double_then_dot() {
        let t = lex_all("1.5.x");
        assert_eq!(t[0].kind, TokenKind::Double);
        assert_eq!(t[0].text, "1.5");
        assert_eq!(t[1].kind, TokenKind::Dot);
    }

    #[test]
    fn test_edge_two_decimal_points() {
        assert!(matches!(
            tokenize("1.2.3"),
            Err(LexError::UnrecognizedCharacter { row: 0, col: 0, character: '1', .. })
        ));
    }

    #[test]
    fn test_edge_trailing_dot() {
        assert_eq!(kinds("1."), vec![TokenKind::Long, TokenKind::Dot]);
        assert_eq!(kinds("1. "), vec![TokenKind::Long, TokenKind::Dot]);
    }

    #[test]
    fn test_edge_space_before_fraction() {
        let t = lex_all("123 .5");
        assert_eq!(t[0].kind, TokenKind::Long);
        assert_eq!(t[1].kind, TokenKind::Double);
        assert_eq!(t[1].text, "0.5");
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(kinds("3px"), vec![TokenKind::Long, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_number_then_keyword() {
        assert_eq!(kinds("1and 2"), vec![TokenKind::Long, TokenKind::BoolAnd, TokenKind::Long]);
    }

    #[test]
    fn test_edge_number_then_unterminated_string() {
        let err = tokenize("1\"abc").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_edge_number_then_string() {
        assert_eq!(kinds("1\"a\""), vec![TokenKind::Long, TokenKind::String]);
    }

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!(t[0].kind, TokenKind::String);
        assert_eq!(t[0].text, "");
    }

    #[test]
    fn test_edge_string_with_hash() {
        let t = lex_all("\"#not a comment\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].text, "#not a comment");
    }

    #[test]
    fn test_edge_multiline_string_moves_rows() {
        let t = lex_all("\"a\nb\" c");
        assert_eq!(t[0].text, "a\nb");
        assert_eq!((t[1].row, t[1].col), (1, 3));
    }

    #[test]
    fn test_edge_unterminated_string_position() {
        let err = tokenize("a &\n  \"open").unwrap_err();
        assert_eq!((err.row(), err.col()), (1, 2));
        assert_eq!(err.raw_text(), "a &\n  \"open");
    }

    #[test]
    fn test_edge_comment_only() {
        let t = lex_all("# just a comment");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Comment);
        assert!(!t[0].is_visible());
    }

    #[test]
    fn test_edge_number_then_comment() {
        assert_eq!(kinds("12#x"), vec![TokenKind::Long, TokenKind::Comment]);
    }

    #[test]
    fn test_edge_carriage_return_needs_config() {
        assert!(tokenize("a\r\nb").is_err());

        let config = LexerConfig::with_whitespace([' ', '\t', '\r']);
        let t = tokenize_with_config("a\r\nb", &config).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!((t[1].row, t[1].col), (1, 0));
    }

    #[test]
    fn test_edge_tab_is_whitespace() {
        assert_eq!(kinds("a\t+\tb").len(), 3);
    }

    #[test]
    fn test_edge_non_ascii_is_unrecognized() {
        let err = tokenize("été").unwrap_err();
        assert!(matches!(err, LexError::UnrecognizedCharacter { character: 'é', .. }));
    }

    #[test]
    fn test_edge_non_ascii_inside_string() {
        assert_eq!(lex_all("\"héllo 😀\"")[0].text, "héllo 😀");
    }

    #[test]
    fn test_edge_span_covers_source() {
        let source = "  TRUE  \"a\\\"b\"";
        let t = lex_all(source);
        assert_eq!(t[0].span.source_text(source), Some("TRUE"));
        assert_eq!(t[1].span.source_text(source), Some("\"a\\\"b\""));
    }

    #[test]
    fn test_edge_lone_question_mark() {
        assert!(matches!(
            tokenize("a ? b"),
            Err(LexError::UnrecognizedCharacter { character: '?', col: 2, .. })
        ));
    }

    #[test]
    fn test_edge_bang_alone() {
        assert!(tokenize("!a").is_err());
    }
}
