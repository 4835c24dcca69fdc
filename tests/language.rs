use std::fs;

use brio::{
    error::{Error, RuntimeError},
    evaluate,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

fn eval_value(source: &str) -> Value {
    evaluate(source).unwrap_or_else(|e| panic!("Script failed: {e}\n{source}"))
}

fn eval_runtime_error(source: &str) -> RuntimeError {
    match evaluate(source) {
        Err(Error::Runtime(error)) => error,
        Ok(value) => panic!("Script produced {value} but was expected to fail:\n{source}"),
        Err(other) => panic!("Script failed in the parser instead: {other}\n{source}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_eq!(eval_value("5 + 5 * 2"), Value::Integer(15));
    assert_eq!(eval_value("(2 + 2) * 2"), Value::Integer(8));
    assert_eq!(eval_value("-5 + 10"), Value::Integer(5));
    assert_eq!(eval_value("50 / 2 * 2 + 10 - 5"), Value::Integer(55));
    assert_eq!(eval_value("20 + 2 * -10"), Value::Integer(0));
}

#[test]
fn integer_arithmetic_wraps() {
    assert_eq!(eval_value("9223372036854775807 + 1"), Value::Integer(i64::MIN));
    assert_eq!(eval_value("0 - 9223372036854775807 - 1"), Value::Integer(i64::MIN));
}

#[test]
fn comparison_operators() {
    assert_eq!(eval_value("1 < 2"), Value::Boolean(true));
    assert_eq!(eval_value("1 > 2"), Value::Boolean(false));
    assert_eq!(eval_value("1 == 1"), Value::Boolean(true));
    assert_eq!(eval_value("1 != 1"), Value::Boolean(false));
    assert_eq!(eval_value("true == true"), Value::Boolean(true));
    assert_eq!(eval_value("true != false"), Value::Boolean(true));
    assert_eq!(eval_value("(1 < 2) == true"), Value::Boolean(true));
}

#[test]
fn conditional_selects_branch() {
    let source = "let a = 5; let b = a > 3; let c = a * 99; if (b) { 10 } else { 1 };";
    assert_eq!(eval_value(source), Value::Integer(10));

    assert_eq!(eval_value("if (1 > 2) { 10 } else { 20 }"), Value::Integer(20));
    assert_eq!(eval_value("if (1 < 2) { 10 }"), Value::Integer(10));
}

#[test]
fn conditional_without_alternative_is_null() {
    assert_eq!(eval_value("if (false) { 10 }"), Value::Null);
}

#[test]
fn truthiness_is_closed_under_double_negation() {
    assert_eq!(eval_value("!!5"), Value::Boolean(true));
    assert_eq!(eval_value("!!0"), Value::Boolean(true));
    assert_eq!(eval_value("!!\"\""), Value::Boolean(true));
    assert_eq!(eval_value("!!true"), Value::Boolean(true));
    assert_eq!(eval_value("!!false"), Value::Boolean(false));
    assert_eq!(eval_value("!!if (false) { 1 }"), Value::Boolean(false));
}

#[test]
fn early_return_ends_the_program() {
    assert_eq!(eval_value("9; return 2 * 5; 9;"), Value::Integer(10));
}

#[test]
fn nested_blocks_do_not_unwrap_return() {
    let source = "
        let f = fn(x) {
            if (x > 1) {
                if (x > 1) {
                    return 10;
                }
                return 1;
            }
            0;
        };
        f(5);
    ";
    assert_eq!(eval_value(source), Value::Integer(10));
}

#[test]
fn let_binds_and_rebinds() {
    assert_eq!(eval_value("let a = 5; a;"), Value::Integer(5));
    assert_eq!(eval_value("let a = 5; let b = a; let a = a + 1; a + b;"), Value::Integer(11));
}

#[test]
fn recursive_factorial() {
    let source = "let fact = fn(n) { if (n < 2) { 1 } else { n * fact(n - 1) } }; fact(5);";
    assert_eq!(eval_value(source), Value::Integer(120));
}

#[test]
fn closures_capture_their_defining_environment() {
    let source = "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);";
    assert_eq!(eval_value(source), Value::Integer(5));
}

#[test]
fn functions_are_first_class_values() {
    let source = "let apply = fn(f, x) { f(x) }; apply(fn(n) { n * 2 }, 21);";
    assert_eq!(eval_value(source), Value::Integer(42));
}

#[test]
fn missing_call_arguments_stay_unbound() {
    assert_eq!(eval_value("let f = fn(a, b) { a }; f(1);"), Value::Integer(1));
    assert_eq!(eval_runtime_error("let f = fn(a, b) { b }; f(1);"),
               RuntimeError::IdentifierNotFound { name: "b".to_owned() });
    // Extra arguments are dropped.
    assert_eq!(eval_value("let f = fn(a) { a }; f(1, 2, 3);"), Value::Integer(1));
}

#[test]
fn duplicate_parameters_bind_last_argument() {
    assert_eq!(eval_value("let f = fn(a, a) { a }; f(1, 2);"), Value::Integer(2));
}

#[test]
fn string_concatenation() {
    let value = eval_value("\"Hello\" + \" \" + \"World!\"");
    assert_eq!(value, Value::from("Hello World!"));
    assert_eq!(value.to_string(), "Hello World!");
}

#[test]
fn string_comparison_is_an_unknown_operator() {
    let error = eval_runtime_error("\"a\" < \"b\"");
    assert_eq!(error.to_string(), "unknown operator: STRING < STRING");
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(eval_value("[1, 2, 3][0]"), Value::Integer(1));
    assert_eq!(eval_value("[1, 2, 3][1 + 1]"), Value::Integer(3));
    assert_eq!(eval_value("let i = 0; [10][i];"), Value::Integer(10));
    assert_eq!(eval_value("let a = [1, 2 * 2, 3 + 3]; a[2];"), Value::Integer(6));
}

#[test]
fn array_index_out_of_range_is_null() {
    assert_eq!(eval_value("[1, 2, 3][3]"), Value::Null);
    assert_eq!(eval_value("[1, 2, 3][0 - 1]"), Value::Null);
}

#[test]
fn push_returns_a_new_array() {
    assert_eq!(eval_value("let arr = [1, 2, 3]; push(arr, 4);"),
               Value::from(vec![Value::Integer(1),
                                Value::Integer(2),
                                Value::Integer(3),
                                Value::Integer(4)]));
    // The input array is untouched.
    assert_eq!(eval_value("let arr = [1, 2, 3]; let grown = push(arr, 4); arr;"),
               Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
}

#[test]
fn hash_literal_lookup() {
    let source = "let two = \"two\";
        {\"one\": 10 - 9, two: 1 + 1, \"three\": 6 / 2, 4: 4, true: 5, false: 6}[two]";
    assert_eq!(eval_value(source), Value::Integer(2));

    assert_eq!(eval_value("{4: 4}[4]"), Value::Integer(4));
    assert_eq!(eval_value("{true: 5}[true]"), Value::Integer(5));
}

#[test]
fn hash_keys_compare_by_content() {
    assert_eq!(eval_value("let k = \"ke\" + \"y\"; {\"key\": 7}[k]"), Value::Integer(7));
}

#[test]
fn hash_missing_key_is_null() {
    assert_eq!(eval_value("{\"one\": 1}[\"two\"]"), Value::Null);
}

#[test]
fn hash_duplicate_keys_keep_the_last_value() {
    assert_eq!(eval_value("{\"a\": 1, \"a\": 2}[\"a\"]"), Value::Integer(2));
}

#[test]
fn builtin_len() {
    assert_eq!(eval_value("len(\"\")"), Value::Integer(0));
    assert_eq!(eval_value("len(\"four\")"), Value::Integer(4));
    assert_eq!(eval_value("len([1, 2, 3])"), Value::Integer(3));

    let error = eval_runtime_error("len(1)");
    assert_eq!(error.to_string(), "argument to `len` not supported, got INTEGER");
}

#[test]
fn builtin_first_last_rest() {
    assert_eq!(eval_value("first([1, 2, 3])"), Value::Integer(1));
    assert_eq!(eval_value("first([])"), Value::Null);
    assert_eq!(eval_value("last([1, 2, 3])"), Value::Integer(3));
    assert_eq!(eval_value("last([])"), Value::Null);
    assert_eq!(eval_value("rest([1, 2, 3])"),
               Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_eq!(eval_value("rest(rest([1, 2]))"), Value::from(Vec::<Value>::new()));
    assert_eq!(eval_value("rest([])"), Value::Null);
}

#[test]
fn builtin_arity_is_checked() {
    let error = eval_runtime_error("len(\"a\", \"b\")");
    assert_eq!(error.to_string(), "wrong number of arguments. got=2, want=1");
    assert_eq!(error, RuntimeError::WrongArgumentCount { got: 2, want: 1 });
}

#[test]
fn builtin_puts_returns_null() {
    assert_eq!(eval_value("puts(\"hello\", 42)"), Value::Null);
    assert_eq!(eval_value("puts()"), Value::Null);
}

#[test]
fn builtins_can_be_shadowed_by_bindings() {
    assert_eq!(eval_value("let len = 5; len"), Value::Integer(5));
}

#[test]
fn every_builtin_is_resolvable_by_name() {
    for name in brio::interpreter::evaluator::builtin::BUILTIN_FUNCTIONS {
        let value = eval_value(name);
        assert_eq!(value.to_string(), "builtin function", "builtin {name}");
    }
}

#[test]
fn type_mismatch_aborts_evaluation() {
    let error = eval_runtime_error("5 + true;");
    assert_eq!(error.to_string(), "type mismatch: INTEGER + BOOLEAN");

    // The statements after the failure never run.
    let error = eval_runtime_error("5 + true; let ok = 1; ok;");
    assert_eq!(error.to_string(), "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn unknown_operator_errors() {
    assert_eq!(eval_runtime_error("-true").to_string(), "unknown operator: -BOOLEAN");
    assert_eq!(eval_runtime_error("true + false;").to_string(),
               "unknown operator: BOOLEAN + BOOLEAN");
    assert_eq!(eval_runtime_error("if (10 > 1) { true + false; }").to_string(),
               "unknown operator: BOOLEAN + BOOLEAN");
}

#[test]
fn identifier_not_found() {
    assert_eq!(eval_runtime_error("foobar").to_string(), "identifier not found: foobar");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(eval_runtime_error("5 / 0"), RuntimeError::DivisionByZero);
    assert_eq!(eval_runtime_error("let x = 1; x / (x - x)").to_string(), "division by zero");
}

#[test]
fn unusable_hash_keys_are_rejected() {
    assert_eq!(eval_runtime_error("{\"name\": \"brio\"}[fn(x) { x }];").to_string(),
               "unusable as hash key: FUNCTION");
    assert_eq!(eval_runtime_error("{[1]: 2}").to_string(), "unusable as hash key: ARRAY");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_eq!(eval_runtime_error("let x = 5; x(1);").to_string(), "not a function: INTEGER");
}

#[test]
fn indexing_a_non_collection_is_an_error() {
    assert_eq!(eval_runtime_error("5[0]").to_string(), "index operator not supported: INTEGER");
}

#[test]
fn runtime_errors_display_in_inspection_form() {
    let error = evaluate("5 + true;").unwrap_err();
    assert_eq!(error.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn parse_failure_refuses_evaluation() {
    match evaluate("let = 5;") {
        Err(Error::Parse(errors)) => assert!(!errors.is_empty()),
        other => panic!("expected a parse failure, got {other:?}"),
    }
}

#[test]
fn function_values_inspect_with_their_body() {
    assert_eq!(eval_value("fn(x) { x + 2 }").to_string(), "fn(x) {\n(x + 2)\n}");
    assert_eq!(eval_value("len").to_string(), "builtin function");
}

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path()
                                                   .extension()
                                                   .is_some_and(|ext| ext == "brio")
                                              })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match evaluate(&source) {
            Ok(value) => {
                assert_eq!(value.to_string(), expected.trim(), "script {path:?}");
            },
            Err(e) => panic!("Script {path:?} failed:\n{e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
