// tests/lexer_tests.rs

use subset_query::lexer::{LexError, Rule, Token, TokenKind, Tokenizer};

fn tokens(input: &str) -> Vec<(TokenKind, String)> {
    let mut tokenizer = Tokenizer::for_subset(input).unwrap();
    let mut out = Vec::new();
    while let Some(token) = tokenizer.next_token().unwrap() {
        out.push((token.kind, token.text));
    }
    out
}

fn field(name: &str) -> (TokenKind, String) {
    (TokenKind::FieldName, name.to_string())
}

fn reserved(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

// ============================================================================
// Single Tokens
// ============================================================================

#[test]
fn test_reserved_tokens() {
    let test_cases = vec![
        (",", TokenKind::Join),
        (".", TokenKind::PathSeparator),
        ("=", TokenKind::Assignment),
    ];

    for (input, expected) in test_cases {
        let mut tokenizer = Tokenizer::for_subset(input).unwrap();
        let token = tokenizer.next_token().unwrap().unwrap();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.text, input);
        assert_eq!(tokenizer.next_token().unwrap(), None);
    }
}

#[test]
fn test_field_name_is_greedy() {
    assert_eq!(tokens("user_id-42"), vec![field("user_id-42")]);
    assert_eq!(tokens("a:b/c[0]"), vec![field("a:b/c[0]")]);
}

#[test]
fn test_empty_input() {
    let mut tokenizer = Tokenizer::for_subset("").unwrap();
    assert!(!tokenizer.has_more_tokens());
    assert_eq!(tokenizer.next_token().unwrap(), None);
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn test_subset_spec_tokens() {
    assert_eq!(
        tokens("user.address.city=town"),
        vec![
            field("user"),
            reserved(TokenKind::PathSeparator, "."),
            field("address"),
            reserved(TokenKind::PathSeparator, "."),
            field("city"),
            reserved(TokenKind::Assignment, "="),
            field("town"),
        ]
    );
}

#[test]
fn test_joined_specs() {
    assert_eq!(
        tokens("a=b,c=d"),
        vec![
            field("a"),
            reserved(TokenKind::Assignment, "="),
            field("b"),
            reserved(TokenKind::Join, ","),
            field("c"),
            reserved(TokenKind::Assignment, "="),
            field("d"),
        ]
    );
}

#[test]
fn test_back_to_back_reserved() {
    assert_eq!(
        tokens("a..b"),
        vec![
            field("a"),
            reserved(TokenKind::PathSeparator, "."),
            reserved(TokenKind::PathSeparator, "."),
            field("b"),
        ]
    );
}

#[test]
fn test_escaped_name_stays_one_token() {
    assert_eq!(tokens("a%5C%2Cb"), vec![field("a%5C%2Cb")]);
    assert_eq!(tokens("first%20name"), vec![field("first%20name")]);
    assert_eq!(tokens("x%5C%3Dy"), vec![field("x%5C%3Dy")]);
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn test_leading_whitespace_is_skipped() {
    assert_eq!(
        tokens("  a = b"),
        vec![field("a "), reserved(TokenKind::Assignment, "="), field("b")]
    );
}

#[test]
fn test_inner_whitespace_is_kept() {
    assert_eq!(tokens("first name"), vec![field("first name")]);
}

#[test]
fn test_whitespace_only() {
    let mut tokenizer = Tokenizer::for_subset(" \t\n ").unwrap();
    assert!(tokenizer.has_more_tokens());
    assert_eq!(tokenizer.next_token().unwrap(), None);
    assert_eq!(tokenizer.cursor(), 4);
    assert!(!tokenizer.has_more_tokens());
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_token_positions() {
    let mut tokenizer = Tokenizer::for_subset("  a = b").unwrap();
    let expected = vec![
        Token {
            kind: TokenKind::FieldName,
            text: "a ".to_string(),
            position: 2,
        },
        Token {
            kind: TokenKind::Assignment,
            text: "=".to_string(),
            position: 4,
        },
        Token {
            kind: TokenKind::FieldName,
            text: "b".to_string(),
            position: 6,
        },
    ];

    for token in expected {
        assert_eq!(tokenizer.next_token().unwrap(), Some(token));
    }
    assert_eq!(tokenizer.next_token().unwrap(), None);
}

#[test]
fn test_cursor_advances_past_token() {
    let mut tokenizer = Tokenizer::for_subset("ab.c").unwrap();
    tokenizer.next_token().unwrap();
    assert_eq!(tokenizer.cursor(), 2);
    tokenizer.next_token().unwrap();
    assert_eq!(tokenizer.cursor(), 3);
    assert!(tokenizer.has_more_tokens());
    tokenizer.next_token().unwrap();
    assert!(!tokenizer.has_more_tokens());
}

#[test]
fn test_positions_are_byte_offsets() {
    let mut tokenizer = Tokenizer::for_subset("ünïcode=x").unwrap();
    let name = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(name.text, "ünïcode");
    assert_eq!(name.position, 0);

    let assignment = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(assignment.kind, TokenKind::Assignment);
    assert_eq!(assignment.position, 9);
}

// ============================================================================
// Custom Rules
// ============================================================================

#[test]
fn test_no_rule_matches() {
    let rules = vec![Rule::new("[a-z]+", TokenKind::FieldName).unwrap()];
    let mut tokenizer = Tokenizer::new("ab12", TokenKind::Skip, rules);

    let first = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(first.text, "ab");

    assert_eq!(
        tokenizer.next_token(),
        Err(LexError::NoMatch {
            position: 2,
            remaining: "12".to_string(),
        })
    );
}

#[test]
fn test_rule_order_decides() {
    let rules = vec![
        Rule::new("ab", TokenKind::Join).unwrap(),
        Rule::new("[a-z]+", TokenKind::FieldName).unwrap(),
    ];
    let mut tokenizer = Tokenizer::new("abc", TokenKind::Skip, rules);

    assert_eq!(tokenizer.next_token().unwrap().unwrap().kind, TokenKind::Join);
    let rest = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(rest.kind, TokenKind::FieldName);
    assert_eq!(rest.text, "c");
}

#[test]
fn test_empty_matches_are_ignored() {
    let rules = vec![
        Rule::new("[0-9]*", TokenKind::Join).unwrap(),
        Rule::new("[a-z]+", TokenKind::FieldName).unwrap(),
    ];
    let mut tokenizer = Tokenizer::new("abc", TokenKind::Skip, rules);
    assert_eq!(
        tokenizer.next_token().unwrap().unwrap().kind,
        TokenKind::FieldName
    );
}

#[test]
fn test_invalid_pattern() {
    assert!(matches!(
        Rule::new("[a-", TokenKind::FieldName),
        Err(LexError::InvalidPattern { .. })
    ));
}
