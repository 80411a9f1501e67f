use crate::{
    ast::{Selection, SubsetSpec},
    escape,
    lexer::{LexError, Token, TokenKind, Tokenizer},
};

/// Grammar violations and scanning failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A token of the wrong kind where `expected` was required
    #[error("Unexpected token {found} at position {position}, expected {expected}")]
    UnexpectedTokenType {
        position: usize,
        found: TokenKind,
        expected: TokenKind,
    },

    /// The input ended where a token of kind `expected` was required
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedInputEnd { expected: TokenKind },

    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Recursive-descent parser with a single token of lookahead.
///
/// ```text
/// expression := subset_spec ( ',' expression )?
/// subset_spec := FieldName '=' FieldName
///              | FieldName '.' subset_spec
/// ```
///
/// A parser lives for exactly one query; [`Parser::parse`] consumes it.
pub struct Parser {
    tokenizer: Tokenizer,
    lookahead: Option<Token>,
}

impl Parser {
    pub fn new(mut tokenizer: Tokenizer) -> Result<Self, ParseError> {
        let lookahead = tokenizer.next_token()?;
        Ok(Parser {
            tokenizer,
            lookahead,
        })
    }

    /// A parser over the raw query text, escapes included.
    pub fn for_query(query: &str) -> Result<Self, ParseError> {
        Parser::new(Tokenizer::for_subset(query)?)
    }

    /// Parses the whole input. Every token must be consumed.
    pub fn parse(mut self) -> Result<Selection, ParseError> {
        let mut specs = Vec::new();
        self.expression(&mut specs)?;
        Ok(Selection { specs })
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.as_ref().is_some_and(|t| t.kind == kind)
    }

    /// Consumes the lookahead if it has kind `expected`.
    fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let Some(token) = self.lookahead.take() else {
            return Err(ParseError::UnexpectedInputEnd { expected });
        };

        if token.kind != expected {
            let err = ParseError::UnexpectedTokenType {
                position: self.tokenizer.cursor(),
                found: token.kind,
                expected,
            };
            self.lookahead = Some(token);
            return Err(err);
        }

        self.lookahead = self.tokenizer.next_token()?;
        Ok(token)
    }

    fn expression(&mut self, specs: &mut Vec<SubsetSpec>) -> Result<(), ParseError> {
        loop {
            specs.push(self.subset_spec()?);

            match &self.lookahead {
                None => return Ok(()),
                Some(token) if token.kind == TokenKind::Join => {
                    self.eat(TokenKind::Join)?;
                }
                Some(token) => {
                    return Err(ParseError::UnexpectedTokenType {
                        position: self.tokenizer.cursor(),
                        found: token.kind,
                        expected: TokenKind::Join,
                    });
                }
            }
        }
    }

    fn subset_spec(&mut self) -> Result<SubsetSpec, ParseError> {
        let mut path = vec![self.field_name()?];

        loop {
            if self.check(TokenKind::PathSeparator) {
                self.eat(TokenKind::PathSeparator)?;
                path.push(self.field_name()?);
            } else if self.check(TokenKind::Assignment) {
                self.eat(TokenKind::Assignment)?;
                let alias = self.field_name()?;
                return Ok(SubsetSpec { path, alias });
            } else {
                return Err(ParseError::UnexpectedInputEnd {
                    expected: TokenKind::Assignment,
                });
            }
        }
    }

    /// A field name runs up to the next reserved character, so two reserved
    /// tokens in a row enclose the empty name. Nothing is consumed in that case.
    fn field_name(&mut self) -> Result<String, ParseError> {
        match &self.lookahead {
            Some(token) if token.kind.is_reserved() => Ok(String::new()),
            _ => {
                let token = self.eat(TokenKind::FieldName)?;
                Ok(escape::decode(&token.text))
            }
        }
    }
}
