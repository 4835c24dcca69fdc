use std::fmt;

/// The root of an abstract syntax tree: an ordered sequence of statements.
///
/// A `Program` is produced by the parser and walked by the evaluator. Its
/// `Display` implementation reassembles a canonical rendition of the source,
/// with parentheses made explicit around every prefix and infix expression
/// so that operator precedence can be read off (and round-tripped) directly.
///
/// # Example
/// ```
/// use brio::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
/// let (program, errors) = parser.parse_program();
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// A braced sequence of statements, as found in `if` branches and function
/// bodies. Blocks do not open a new scope; only function calls do.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements of the block, in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <value>;`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expr,
    },
    /// An early return: `return <value>;`.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// A bare expression in statement position.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// An abstract syntax tree node representing an expression.
///
/// `Expr` covers every expression form of the language: literals,
/// identifiers, operator applications, conditionals, function literals,
/// calls, and the composite array/hash literals with indexing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// The referenced name.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
    },
    /// A string literal.
    StringLiteral {
        /// The literal text, without quotes.
        value: String,
    },
    /// A boolean literal, `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A prefix operator application, `!x` or `-x`.
    Prefix {
        /// The prefix operator.
        op:    PrefixOperator,
        /// The operand.
        right: Box<Expr>,
    },
    /// An infix operator application, `a + b` and friends.
    Infix {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A conditional expression with an optional alternative branch.
    If {
        /// The condition expression.
        condition:   Box<Expr>,
        /// The branch taken when the condition is truthy.
        consequence: Block,
        /// The branch taken otherwise, if present.
        alternative: Option<Block>,
    },
    /// A function literal: `fn(a, b) { ... }`. Evaluation turns this into a
    /// closure over the environment current at the literal.
    FunctionLiteral {
        /// Parameter names, by position. Duplicates are syntactically
        /// accepted; the last binding wins at call time.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
    },
    /// A call expression: `<callee>(<args>)`.
    Call {
        /// The expression producing the callee.
        function:  Box<Expr>,
        /// The argument expressions, in call order.
        arguments: Vec<Expr>,
    },
    /// An array literal: `[e1, e2, ...]`.
    ArrayLiteral {
        /// The element expressions, in source order.
        elements: Vec<Expr>,
    },
    /// An index expression: `<left>[<index>]`.
    Index {
        /// The indexed expression.
        left:  Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
    },
    /// A hash literal: `{k1: v1, k2: v2}`. Pairs keep their source order;
    /// evaluation re-keys them into a map.
    HashLiteral {
        /// The key/value expression pairs, in source order.
        pairs: Vec<(Expr, Expr)>,
    },
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`), defined via truthiness for every value.
    Not,
    /// Arithmetic negation (`-x`), defined for integers.
    Negate,
}

/// An infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Eq, Gt, Lt, Mul, NotEq, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Eq => "==",
            NotEq => "!=",
            Lt => "<",
            Gt => ">",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::StringLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => write!(f, "{value}"),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{function}({})", arguments.join(", "))
            },
            Self::ArrayLiteral { elements } => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                let pairs: Vec<String> = pairs.iter()
                                              .map(|(key, value)| format!("{key}: {value}"))
                                              .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
        }
    }
}
