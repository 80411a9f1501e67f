//! Rule-driven tokenizer.
//!
//! The tokenizer is configured with an ordered list of [`Rule`]s, each a regular
//! expression anchored at the cursor. At every step the first rule producing a
//! non-empty match wins, and tokens of the configured skip kind are dropped
//! before they reach the caller.

use std::fmt;

use regex::Regex;

/// The kinds of token the subset language is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Whitespace, discarded by the tokenizer
    Skip,
    /// `,` between two subset specifications
    Join,
    /// `.` between two path segments
    PathSeparator,
    /// `=` before the output alias
    Assignment,
    /// Any run of characters up to the next reserved character
    FieldName,
}

impl TokenKind {
    /// Reserved kinds are the single-character structural tokens.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Join | TokenKind::PathSeparator | TokenKind::Assignment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Skip => "Skip",
            TokenKind::Join => "Join",
            TokenKind::PathSeparator => "PathSeparator",
            TokenKind::Assignment => "Assignment",
            TokenKind::FieldName => "FieldName",
        };
        f.write_str(name)
    }
}

/// A single token together with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

/// Errors produced while scanning input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    /// None of the rules matched the remaining input
    #[error("Unexpected input at position {position}: no rule matches {remaining:?}")]
    NoMatch { position: usize, remaining: String },

    /// A rule pattern failed to compile
    #[error("Invalid token pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// A scanning rule: tokens of `kind` are whatever `pattern` matches at the cursor.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    kind: TokenKind,
}

impl Rule {
    /// Compiles `pattern`, anchoring it at the cursor if it is not already.
    pub fn new(pattern: &str, kind: TokenKind) -> Result<Self, LexError> {
        let anchored = if pattern.starts_with('^') {
            pattern.to_string()
        } else {
            format!("^(?:{})", pattern)
        };

        let pattern = Regex::new(&anchored).map_err(|e| LexError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(Rule { pattern, kind })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// The rule table of the subset language, in priority order.
pub fn subset_rules() -> Result<Vec<Rule>, LexError> {
    [
        (r"^\s+", TokenKind::Skip),
        (r"^,", TokenKind::Join),
        (r"^\.", TokenKind::PathSeparator),
        (r"^=", TokenKind::Assignment),
        (r"^[^.,=]*", TokenKind::FieldName),
    ]
    .into_iter()
    .map(|(pattern, kind)| Rule::new(pattern, kind))
    .collect()
}

pub struct Tokenizer {
    input: String,
    cursor: usize,
    skip: TokenKind,
    rules: Vec<Rule>,
}

impl Tokenizer {
    pub fn new(input: &str, skip: TokenKind, rules: Vec<Rule>) -> Self {
        Tokenizer {
            input: input.to_string(),
            cursor: 0,
            skip,
            rules,
        }
    }

    /// A tokenizer over `input` using [`subset_rules`].
    pub fn for_subset(input: &str) -> Result<Self, LexError> {
        Ok(Tokenizer::new(input, TokenKind::Skip, subset_rules()?))
    }

    /// Byte offset of the first unconsumed character.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.input.len()
    }

    /// Returns the next non-skipped token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        while self.has_more_tokens() {
            let remaining = &self.input[self.cursor..];

            let matched = self.rules.iter().find_map(|rule| {
                rule.pattern
                    .find(remaining)
                    .filter(|m| m.start() == 0 && !m.is_empty())
                    .map(|m| (rule.kind, m.as_str().to_string()))
            });

            let Some((kind, text)) = matched else {
                return Err(LexError::NoMatch {
                    position: self.cursor,
                    remaining: remaining.to_string(),
                });
            };

            let position = self.cursor;
            self.cursor += text.len();

            if kind == self.skip {
                log::trace!("skipped {} bytes at {}", text.len(), position);
                continue;
            }

            log::trace!("token {} {:?} at {}", kind, text, position);
            return Ok(Some(Token {
                kind,
                text,
                position,
            }));
        }

        Ok(None)
    }
}
