use calcd::{
    error::{EvaluationError, ParseError, RuntimeError},
    evaluate,
    interpreter::parser::core::MAX_NESTING_DEPTH,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-12,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_syntax(src: &str) -> ParseError {
    match evaluate(src) {
        Err(EvaluationError::Syntax(e)) => e,
        other => panic!("{src:?} should be a syntax error, got {other:?}"),
    }
}

fn assert_runtime(src: &str) -> RuntimeError {
    match evaluate(src) {
        Err(EvaluationError::Runtime(e)) => e,
        other => panic!("{src:?} should be a runtime error, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 1", 2.0);
    assert_value("7 - 9", -2.0);
    assert_value("6 * 7", 42.0);
    assert_value("10 / 4", 2.5);
    assert_value("0.1 + 0.2", 0.3);
}

#[test]
fn decimal_point_shapes() {
    assert_value(".5 + 1", 1.5);
    assert_value("2. * .25", 0.5);
    assert_syntax("1.2.3");
    assert_syntax(". + 1");
}

#[test]
fn precedence_and_parentheses() {
    assert_value("(1 + 1) * 2", 4.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
    assert_value("2 * (3 + 4) * 5", 70.0);
    assert_value("((2))", 2.0);
    assert_value("(1 + (2 * (3 + (4 * (5 + 6)))))", 95.0);
}

#[test]
fn left_associativity() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("8 - (3 - 2)", 7.0);
}

#[test]
fn whitespace_insensitivity() {
    let compact = evaluate("1+1").unwrap();
    let spaced = evaluate(" 1 + 1 ").unwrap();
    let tabbed = evaluate("\t1\n+\r\n1").unwrap();
    assert_eq!(compact, spaced);
    assert_eq!(compact, tabbed);
}

#[test]
fn repeated_calls_agree() {
    for src in ["1 + 2 * 3", "1 + a", "1 / 0", "(1 + 2"] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}

#[test]
fn invalid_character_is_syntax_error() {
    assert_eq!(assert_syntax("1 + a"),
               ParseError::InvalidCharacter { character: 'a',
                                              offset:    4, });
    assert_syntax("2 ^ 3");
    assert_syntax("1,5 + 1");
}

#[test]
fn unmatched_parentheses_are_syntax_errors() {
    assert_eq!(assert_syntax("(1 + 2"), ParseError::ExpectedClosingParen { offset: 0 });
    assert!(matches!(assert_syntax("1 + 1)"),
                     ParseError::UnexpectedTrailingTokens { offset: 5, .. }));
    assert_syntax(")(");
}

#[test]
fn missing_operands_are_syntax_errors() {
    assert_eq!(assert_syntax("1 +"), ParseError::UnexpectedEndOfInput { offset: 3 });
    assert_syntax("");
    assert_syntax("* 2");
    assert_syntax("1 + + 2");
    assert_syntax("()");
}

#[test]
fn huge_literal_is_syntax_error() {
    let literal = "9".repeat(400);
    assert_eq!(assert_syntax(&format!("1 + {literal}")),
               ParseError::LiteralTooLarge { offset: 4 });
}

#[test]
fn nesting_limit_is_syntax_error() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(MAX_NESTING_DEPTH), 1.0);
    assert_eq!(assert_syntax(&nested(MAX_NESTING_DEPTH + 1)),
               ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                            offset: MAX_NESTING_DEPTH, });
}

#[test]
fn unary_minus_is_not_supported() {
    assert_syntax("-1");
    assert_syntax("2 * -3");
}

#[test]
fn division_by_zero_is_runtime_error() {
    assert_eq!(assert_runtime("1 / 0"), RuntimeError::DivisionByZero { offset: 2 });
    assert_runtime("5 / (3 - 3)");
    assert_runtime("0 / 0.0");
}

#[test]
fn overflow_is_runtime_error() {
    let big = format!("1{}", "0".repeat(300));
    assert!(matches!(assert_runtime(&format!("{big} * {big}")),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn syntax_errors_take_precedence_over_runtime_errors() {
    assert!(matches!(assert_syntax("1 / 0 +"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_syntax("1 / 0 x"), ParseError::InvalidCharacter { .. }));
}

#[test]
fn error_offsets_and_messages() {
    let err = evaluate("12 + (3 * 4").unwrap_err();
    assert_eq!(err.offset(), 5);
    assert_eq!(err.to_string(), "Error at offset 5: Parenthesis is never closed.");

    let err = evaluate("1 / 0").unwrap_err();
    assert_eq!(err.to_string(), "Error at offset 2: Division by zero.");
}

#[test]
fn concurrent_callers_do_not_interfere() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || {
                                        let src = format!("{i} * (2 + 3)");
                                        evaluate(&src).unwrap()
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = f64::from(u32::try_from(i).unwrap()) * 5.0;
        assert_eq!(handle.join().unwrap(), expected);
    }
}
