use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Maps a token to its infix operator, if it has one.
///
/// # Example
/// ```
/// use brio::{ast::InfixOperator,
///            interpreter::{lexer::Token, parser::expression::infix_operator}};
///
/// assert_eq!(infix_operator(&Token::Plus), Some(InfixOperator::Add));
/// assert_eq!(infix_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Asterisk => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Eq => Some(InfixOperator::Eq),
        Token::NotEq => Some(InfixOperator::NotEq),
        Token::Lt => Some(InfixOperator::Lt),
        Token::Gt => Some(InfixOperator::Gt),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses the expression form that can begin at the current token.
    ///
    /// This is the prefix half of the Pratt dispatch. Tokens that cannot
    /// start an expression produce a `NoPrefixParse` error.
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let token = self.cur.clone();
        match token {
            Token::Ident(name) => Ok(Expr::Identifier { name }),
            Token::Int(literal) => {
                literal.parse::<i64>()
                       .map(|value| Expr::IntegerLiteral { value })
                       .map_err(|_| ParseError::InvalidInteger { literal })
            },
            Token::Str(value) => Ok(Expr::StringLiteral { value }),
            Token::True => Ok(Expr::BooleanLiteral { value: true }),
            Token::False => Ok(Expr::BooleanLiteral { value: false }),
            Token::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_operator(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped(),
            Token::If => self.parse_if(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => {
                let elements = self.parse_expression_list(&Token::RBracket)?;
                Ok(Expr::ArrayLiteral { elements })
            },
            Token::LBrace => self.parse_hash_literal(),
            other => Err(ParseError::NoPrefixParse { token: other.to_string() }),
        }
    }

    /// Parses the infix continuation for the current token, folding `left`
    /// into a larger expression.
    ///
    /// Covers the binary operators plus the call `(` and index `[`
    /// parselets. The expression loop only lands here for tokens with an
    /// infix precedence, so the fallback arm returns `left` untouched.
    pub(crate) fn parse_infix(&mut self, left: Expr) -> ParseResult<Expr> {
        if let Some(op) = infix_operator(&self.cur) {
            let precedence = Precedence::of(&self.cur);
            self.advance();
            let right = self.parse_expression(precedence)?;
            return Ok(Expr::Infix { left: Box::new(left),
                                    op,
                                    right: Box::new(right) });
        }

        match self.cur {
            Token::LParen => {
                let arguments = self.parse_expression_list(&Token::RParen)?;
                Ok(Expr::Call { function: Box::new(left),
                                arguments })
            },
            Token::LBracket => {
                self.advance();
                let index = self.parse_expression(Precedence::Lowest)?;
                self.expect_peek(&Token::RBracket)?;
                Ok(Expr::Index { left:  Box::new(left),
                                 index: Box::new(index), })
            },
            _ => Ok(left),
        }
    }

    /// Parses `!` or `-` applied to the expression that follows, recursing
    /// at prefix precedence so `-a * b` parses as `((-a) * b)`.
    fn parse_prefix_operator(&mut self, op: PrefixOperator) -> ParseResult<Expr> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expr::Prefix { op,
                          right: Box::new(right) })
    }

    /// Parses a parenthesized expression, expecting the matching `)`.
    fn parse_grouped(&mut self) -> ParseResult<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        Ok(expr)
    }

    /// Parses `if (<condition>) { <consequence> }` with an optional
    /// `else { <alternative> }`.
    fn parse_if(&mut self) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        self.expect_peek(&Token::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek == Token::Else {
            self.advance();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative })
    }

    /// Parses `fn (<params>) { <body> }`. The parameter list may be empty.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_parameters()?;

        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses a comma-separated identifier list up to the closing `)`.
    /// The cursor must be on the opening `(`.
    fn parse_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek == Token::RParen {
            self.advance();
            return Ok(parameters);
        }

        loop {
            let name = match &self.peek {
                Token::Ident(name) => name.clone(),
                other => {
                    return Err(ParseError::UnexpectedToken { expected: "IDENT".to_owned(),
                                                             found:    other.to_string(), });
                },
            };
            self.advance();
            parameters.push(name);

            if self.peek == Token::Comma {
                self.advance();
            } else {
                break;
            }
        }

        self.expect_peek(&Token::RParen)?;
        Ok(parameters)
    }

    /// Parses a comma-separated expression list up to `terminator`.
    ///
    /// Used for array literals (`]`) and call arguments (`)`). The cursor
    /// must be on the opening delimiter; a trailing comma is a parse error.
    fn parse_expression_list(&mut self, terminator: &Token) -> ParseResult<Vec<Expr>> {
        let mut elements = Vec::new();

        if self.peek.same_kind(terminator) {
            self.advance();
            return Ok(elements);
        }

        self.advance();
        elements.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek == Token::Comma {
            self.advance();
            self.advance();
            elements.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(terminator)?;
        Ok(elements)
    }

    /// Parses `{<key>: <value>, ...}` up to the closing `}`. Keys and values
    /// are arbitrary expressions; pairs keep their source order.
    fn parse_hash_literal(&mut self) -> ParseResult<Expr> {
        let mut pairs = Vec::new();

        while self.peek != Token::RBrace {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(&Token::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if self.peek != Token::RBrace {
                self.expect_peek(&Token::Comma)?;
            }
        }

        self.expect_peek(&Token::RBrace)?;
        Ok(Expr::HashLiteral { pairs })
    }
}
