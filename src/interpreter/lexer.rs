use logos::Logos;

/// Raw token classes recognized by the generated scanner.
///
/// This enum only drives the logos state machine. The public [`Token`]
/// catalog is produced by [`Lexer::next_token`], which attaches literal text
/// where a token carries some and supplies the `Eof` and `Illegal` kinds the
/// machine itself never emits.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding or function names such as `x` or `square`.
    /// Digits are not identifier characters, so `foo1` scans as `foo`, `1`.
    #[regex(r"[A-Za-z_]+")]
    Ident,
    /// Integer literal tokens, such as `42`. The text is kept as-is; the
    /// parser performs the numeric conversion so it can report overflow.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens. There are no escape sequences; the literal runs
    /// from `"` to the next `"`. A string missing its closing quote consumes
    /// the rest of the input (second pattern).
    #[regex(r#""[^"]*""#)]
    #[regex(r#""[^"]*"#)]
    Str,
}

/// A lexical token together with its literal payload where one exists.
///
/// The catalog is closed: identifiers, integers, strings, and illegal input
/// carry their source text; operators, delimiters, and keywords are bare
/// kinds. `Eof` is emitted indefinitely once the source is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A character the scanner does not recognize.
    Illegal(String),
    /// End of input.
    Eof,
    /// An identifier such as `x` or `square`.
    Ident(String),
    /// An integer literal, kept as source text.
    Int(String),
    /// A string literal without its surrounding quotes.
    Str(String),
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl Token {
    /// Returns the canonical source text of the token.
    ///
    /// Concatenating the literals of a token stream (with separators)
    /// recovers the source modulo whitespace. `Eof` has no text.
    ///
    /// # Example
    /// ```
    /// use brio::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Function.literal(), "fn");
    /// assert_eq!(Token::Ident("x".to_owned()).literal(), "x");
    /// ```
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::Illegal(text) | Self::Ident(text) | Self::Int(text) | Self::Str(text) => text,
            Self::Eof => "",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
        }
    }

    /// Returns the diagnostic name of the token's kind, as used in parser
    /// error messages: literal-carrying kinds by their class name,
    /// punctuation as itself, keywords in caps.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        }
    }

    /// Tests whether two tokens are of the same kind, ignoring literal
    /// payloads. `Ident("x")` and `Ident("y")` are the same kind.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind_name())
    }
}

/// A single-pass scanner over a source string.
///
/// `Lexer` wraps the generated [`RawToken`] machine and exposes the token
/// stream one token at a time. After the source is exhausted, every further
/// call yields [`Token::Eof`].
///
/// # Example
/// ```
/// use brio::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let x = 5;");
///
/// assert_eq!(lexer.next_token(), Token::Let);
/// assert_eq!(lexer.next_token(), Token::Ident("x".to_owned()));
/// assert_eq!(lexer.next_token(), Token::Assign);
/// assert_eq!(lexer.next_token(), Token::Int("5".to_owned()));
/// assert_eq!(lexer.next_token(), Token::Semicolon);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    /// Creates a scanner over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: RawToken::lexer(source) }
    }

    /// Produces the next token.
    ///
    /// Unrecognized characters become [`Token::Illegal`] carrying the
    /// offending text; the end of input becomes [`Token::Eof`], repeatedly.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(raw)) => self.cook(raw),
            Some(Err(())) => Token::Illegal(self.inner.slice().to_owned()),
            None => Token::Eof,
        }
    }

    /// Attaches literal text to the raw token class the machine matched.
    fn cook(&self, raw: RawToken) -> Token {
        match raw {
            RawToken::Ident => Token::Ident(self.inner.slice().to_owned()),
            RawToken::Int => Token::Int(self.inner.slice().to_owned()),
            RawToken::Str => Token::Str(strip_quotes(self.inner.slice())),
            RawToken::Eq => Token::Eq,
            RawToken::NotEq => Token::NotEq,
            RawToken::Assign => Token::Assign,
            RawToken::Plus => Token::Plus,
            RawToken::Minus => Token::Minus,
            RawToken::Bang => Token::Bang,
            RawToken::Asterisk => Token::Asterisk,
            RawToken::Slash => Token::Slash,
            RawToken::Lt => Token::Lt,
            RawToken::Gt => Token::Gt,
            RawToken::Comma => Token::Comma,
            RawToken::Semicolon => Token::Semicolon,
            RawToken::Colon => Token::Colon,
            RawToken::LParen => Token::LParen,
            RawToken::RParen => Token::RParen,
            RawToken::LBrace => Token::LBrace,
            RawToken::RBrace => Token::RBrace,
            RawToken::LBracket => Token::LBracket,
            RawToken::RBracket => Token::RBracket,
            RawToken::Function => Token::Function,
            RawToken::Let => Token::Let,
            RawToken::True => Token::True,
            RawToken::False => Token::False,
            RawToken::If => Token::If,
            RawToken::Else => Token::Else,
            RawToken::Return => Token::Return,
        }
    }
}

/// Removes the delimiting quotes from a string slice. The closing quote is
/// absent when the literal ran to end of input.
fn strip_quotes(slice: &str) -> String {
    let body = &slice[1..];
    body.strip_suffix('"').unwrap_or(body).to_owned()
}
