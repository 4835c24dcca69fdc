use crate::{
    ast::{Block, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return`,
    /// - an expression used as a statement.
    ///
    /// The statement's trailing `;` is consumed when present; it is
    /// optional for all three forms.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <name> = <value>;`, leaving the cursor on the statement's
    /// last token.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let name = match &self.peek {
            Token::Ident(name) => name.clone(),
            other => {
                return Err(ParseError::UnexpectedToken { expected: "IDENT".to_owned(),
                                                         found:    other.to_string(), });
            },
        };
        self.advance();

        self.expect_peek(&Token::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }

        Ok(Statement::Let { name, value })
    }

    /// Parses `return <value>;`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }

        Ok(Statement::Return { value })
    }

    /// Parses a bare expression in statement position.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }

        Ok(Statement::Expression { expr })
    }

    /// Parses a braced statement sequence.
    ///
    /// The cursor must be on the opening `{`; on return it sits on the
    /// closing `}` (or on end of input for an unclosed block).
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();

        self.advance();
        while self.cur != Token::RBrace && self.cur != Token::Eof {
            statements.push(self.parse_statement()?);
            self.advance();
        }

        Ok(Block { statements })
    }
}
