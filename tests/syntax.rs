use brio::{
    ast::{Expr, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::Parser,
    },
};

fn tokens(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token();
        if token == Token::Eof {
            break;
        }
        out.push(token);
    }
    out
}

fn parse_ok(source: &str) -> Program {
    let (program, errors) = Parser::new(Lexer::new(source)).parse_program();
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:?}");
    program
}

fn parse_errors(source: &str) -> (Program, Vec<ParseError>) {
    Parser::new(Lexer::new(source)).parse_program()
}

fn ident(name: &str) -> Token {
    Token::Ident(name.to_owned())
}

fn int(literal: &str) -> Token {
    Token::Int(literal.to_owned())
}

#[test]
fn scans_the_full_token_catalog() {
    let source = "let five = 5;
        let add = fn(x, y) { x + y };
        !-/*5;
        5 < 10 > 5;
        if (5 == 10) { return true; } else { return false; }
        5 != 10;
        \"foobar\" \"foo bar\"
        [1, 2];
        {\"foo\": \"bar\"}";

    let expected = vec![Token::Let,
                        ident("five"),
                        Token::Assign,
                        int("5"),
                        Token::Semicolon,
                        Token::Let,
                        ident("add"),
                        Token::Assign,
                        Token::Function,
                        Token::LParen,
                        ident("x"),
                        Token::Comma,
                        ident("y"),
                        Token::RParen,
                        Token::LBrace,
                        ident("x"),
                        Token::Plus,
                        ident("y"),
                        Token::RBrace,
                        Token::Semicolon,
                        Token::Bang,
                        Token::Minus,
                        Token::Slash,
                        Token::Asterisk,
                        int("5"),
                        Token::Semicolon,
                        int("5"),
                        Token::Lt,
                        int("10"),
                        Token::Gt,
                        int("5"),
                        Token::Semicolon,
                        Token::If,
                        Token::LParen,
                        int("5"),
                        Token::Eq,
                        int("10"),
                        Token::RParen,
                        Token::LBrace,
                        Token::Return,
                        Token::True,
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Else,
                        Token::LBrace,
                        Token::Return,
                        Token::False,
                        Token::Semicolon,
                        Token::RBrace,
                        int("5"),
                        Token::NotEq,
                        int("10"),
                        Token::Semicolon,
                        Token::Str("foobar".to_owned()),
                        Token::Str("foo bar".to_owned()),
                        Token::LBracket,
                        int("1"),
                        Token::Comma,
                        int("2"),
                        Token::RBracket,
                        Token::Semicolon,
                        Token::LBrace,
                        Token::Str("foo".to_owned()),
                        Token::Colon,
                        Token::Str("bar".to_owned()),
                        Token::RBrace,];

    assert_eq!(tokens(source), expected);
}

#[test]
fn identifiers_do_not_include_digits() {
    assert_eq!(tokens("foo1"), vec![ident("foo"), int("1")]);
}

#[test]
fn keywords_are_longest_match() {
    assert_eq!(tokens("lettuce fns"), vec![ident("lettuce"), ident("fns")]);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_eq!(tokens("\"abc"), vec![Token::Str("abc".to_owned())]);
    assert_eq!(tokens("let x = \"abc; more"),
               vec![Token::Let, ident("x"), Token::Assign, Token::Str("abc; more".to_owned())]);
}

#[test]
fn unrecognized_characters_are_illegal_tokens() {
    assert_eq!(tokens("let @"), vec![Token::Let, Token::Illegal("@".to_owned())]);
}

#[test]
fn eof_repeats_forever() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token(), int("1"));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn token_literals_recover_the_source() {
    let source = "let add = fn(x) { x + 1 };";
    let scanned = tokens(source);
    let rejoined: Vec<String> = scanned.iter().map(|t| t.literal().to_owned()).collect();
    assert_eq!(tokens(&rejoined.join(" ")), scanned);
}

#[test]
fn operator_precedence_strings() {
    let fixtures = [("-a * b", "((-a) * b)"),
                    ("!-a", "(!(-a))"),
                    ("a + b + c", "((a + b) + c)"),
                    ("a + b - c", "((a + b) - c)"),
                    ("a * b * c", "((a * b) * c)"),
                    ("a * b / c", "((a * b) / c)"),
                    ("a + b / c", "(a + (b / c))"),
                    ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                    ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                    ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                    ("a == b < c", "(a == (b < c))"),
                    ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                    ("true", "true"),
                    ("3 > 5 == false", "((3 > 5) == false)"),
                    ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                    ("(5 + 5) * 2", "((5 + 5) * 2)"),
                    ("2 / (5 + 5)", "(2 / (5 + 5))"),
                    ("-(5 + 5)", "(-(5 + 5))"),
                    ("!(true == true)", "(!(true == true))"),
                    ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                    ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                    ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                    ("add(a * b[2], b[1], 2 * [1, 2][1])",
                     "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),];

    for (source, expected) in fixtures {
        assert_eq!(parse_ok(source).to_string(), expected, "source: {source}");
    }
}

#[test]
fn statements_print_canonically() {
    assert_eq!(parse_ok("let x = 1 + 2;").to_string(), "let x = (1 + 2);");
    assert_eq!(parse_ok("return 2 * 3;").to_string(), "return (2 * 3);");
    assert_eq!(parse_ok("let s = \"hi\";").to_string(), "let s = hi;");
}

#[test]
fn printing_operator_expressions_round_trips() {
    // String and hash literals print their text raw, so they do not reparse;
    // the property holds for operator, call, and index expressions.
    for source in ["let x = 1 + 2 * 3;",
                   "-a * b",
                   "a + add(b * c) + d",
                   "[1, 2][0]",
                   "add(1, 2 * 3, 4 + 5)",] {
        let first = parse_ok(source);
        let reparsed = parse_ok(&first.to_string());
        assert_eq!(first, reparsed, "source: {source}");
    }
}

#[test]
fn if_expression_structure() {
    let program = parse_ok("if (x < y) { x } else { y }");
    assert_eq!(program.statements.len(), 1);

    let Statement::Expression { expr: Expr::If { condition,
                                                 consequence,
                                                 alternative, }, } = &program.statements[0]
    else {
        panic!("expected an if expression, got {:?}", program.statements[0]);
    };

    assert_eq!(condition.to_string(), "(x < y)");
    assert_eq!(consequence.statements.len(), 1);
    assert_eq!(alternative.as_ref().map(|alt| alt.statements.len()), Some(1));
}

#[test]
fn function_literal_parameters() {
    let fixtures = [("fn() {};", Vec::new()),
                    ("fn(x) {};", vec!["x"]),
                    ("fn(x, y, z) {};", vec!["x", "y", "z"]),];

    for (source, expected) in fixtures {
        let program = parse_ok(source);
        let Statement::Expression { expr: Expr::FunctionLiteral { parameters, .. } } =
            &program.statements[0]
        else {
            panic!("expected a function literal, got {:?}", program.statements[0]);
        };
        assert_eq!(parameters, &expected, "source: {source}");
    }
}

#[test]
fn hash_literal_preserves_insertion_order() {
    let program = parse_ok("{\"one\": 1, \"two\": 2, \"three\": 3}");
    let Statement::Expression { expr: Expr::HashLiteral { pairs } } = &program.statements[0]
    else {
        panic!("expected a hash literal, got {:?}", program.statements[0]);
    };

    let keys: Vec<String> = pairs.iter().map(|(key, _)| key.to_string()).collect();
    assert_eq!(keys, vec!["one", "two", "three"]);
}

#[test]
fn empty_containers_parse() {
    assert_eq!(parse_ok("[]").to_string(), "[]");
    assert_eq!(parse_ok("{}").to_string(), "{}");
    assert_eq!(parse_ok("fn() {}()").to_string(), "fn() ()");
}

#[test]
fn parser_collects_errors_and_recovers() {
    let (program, errors) = parse_errors("let x 5; let y = 8;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "expected next token to be =, got INT");
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].to_string(), "let y = 8;");
}

#[test]
fn parser_reports_every_broken_statement() {
    let (program, errors) = parse_errors("let = 5; let 8;");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].to_string(), "expected next token to be IDENT, got =");
    assert_eq!(errors[1].to_string(), "expected next token to be IDENT, got INT");
    assert!(program.statements.is_empty());
}

#[test]
fn tokens_without_a_prefix_rule_are_reported() {
    let (_, errors) = parse_errors("+");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "no prefix parse function for + found");
}

#[test]
fn integer_literal_overflow_is_a_parse_error() {
    let (_, errors) = parse_errors("9999999999999999999999");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(),
               "could not parse '9999999999999999999999' as integer");
}

#[test]
fn trailing_comma_in_arrays_is_rejected() {
    let (_, errors) = parse_errors("[1, 2,]");
    assert!(!errors.is_empty());
}
