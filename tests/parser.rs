use pretty_assertions::assert_eq;
use safecalc::{
    MAX_DEPTH_LIMIT, Number,
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    parse, parse_with_limit,
};

fn rendered(src: &str) -> String {
    parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
              .to_string()
}

#[test]
fn builds_tree_with_columns() {
    let tree = parse("1 + 2 * 3").unwrap();
    let expected = Expr::binary(Expr::literal(1, 1),
                                BinaryOperator::Add,
                                Expr::binary(Expr::literal(2, 5),
                                             BinaryOperator::Mul,
                                             Expr::literal(3, 9),
                                             7),
                                3);
    assert_eq!(tree, expected);
}

#[test]
fn negation_wraps_exponent() {
    let tree = parse("-2 ** 2").unwrap();
    let expected = Expr::unary(UnaryOperator::Negate,
                               Expr::binary(Expr::literal(2, 2),
                                            BinaryOperator::Pow,
                                            Expr::literal(2, 7),
                                            4),
                               1);
    assert_eq!(tree, expected);
}

#[test]
fn literal_kinds() {
    assert_eq!(parse("42").unwrap(), Expr::literal(Number::Integer(42), 1));
    assert_eq!(parse("4.0").unwrap(), Expr::literal(Number::Real(4.0), 1));
    assert_eq!(parse("4e0").unwrap(), Expr::literal(Number::Real(4.0), 1));
    assert_eq!(parse("  .5").unwrap(), Expr::literal(Number::Real(0.5), 3));
}

#[test]
fn associativity_and_precedence() {
    assert_eq!(rendered("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(rendered("8 / 4 / 2"), "((8 / 4) / 2)");
    assert_eq!(rendered("8 // 4 % 3 * 2"), "(((8 // 4) % 3) * 2)");
    assert_eq!(rendered("2 ** 3 ** 2"), "(2 ** (3 ** 2))");
    assert_eq!(rendered("2 ** -1"), "(2 ** (-1))");
    assert_eq!(rendered("(-2) ** 2"), "((-2) ** 2)");
    assert_eq!(rendered("+3 * -4"), "((+3) * (-4))");
    assert_eq!(rendered("1 + 2 * 3 ** 2"), "(1 + (2 * (3 ** 2)))");
    assert_eq!(rendered("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(rendered("1.5 + 2"), "(1.5 + 2)");
}

#[test]
fn reports_errors_with_columns() {
    assert_eq!(parse(""), Err(ParseError::EmptyExpression));
    assert_eq!(parse(" \t\n"), Err(ParseError::EmptyExpression));
    assert_eq!(parse("1 +"), Err(ParseError::UnexpectedEndOfInput { column: 4 }));
    assert_eq!(parse("(1 + 2"), Err(ParseError::ExpectedClosingParen { column: 1 }));
    assert_eq!(parse("1 + 2)"), Err(ParseError::UnmatchedClosingParen { column: 6 }));
    assert_eq!(parse("1 2"),
               Err(ParseError::UnexpectedTrailingTokens { token:  "2".to_string(),
                                                          column: 3, }));
    assert_eq!(parse("1 + * 2"),
               Err(ParseError::UnexpectedToken { token:  "*".to_string(),
                                                 column: 5, }));
    assert_eq!(parse("(1 2)"),
               Err(ParseError::UnexpectedToken { token:  "2".to_string(),
                                                 column: 4, }));
    assert_eq!(parse("2 + é"),
               Err(ParseError::UnexpectedCharacter { character: 'é',
                                                     column:    5, }));
    assert_eq!(parse("é + y"),
               Err(ParseError::UnexpectedCharacter { character: 'é',
                                                     column:    1, }));
    assert_eq!(parse("1 + 99999999999999999999"),
               Err(ParseError::LiteralTooLarge { literal: "99999999999999999999".to_string(),
                                                 column:  5, }));
}

#[test]
fn unexpected_tokens_are_quoted_as_written() {
    assert_eq!(parse("1 .5"),
               Err(ParseError::UnexpectedTrailingTokens { token:  ".5".to_string(),
                                                          column: 3, }));
    assert_eq!(parse("2 1e3"),
               Err(ParseError::UnexpectedTrailingTokens { token:  "1e3".to_string(),
                                                          column: 3, }));
    assert_eq!(parse("(1 2.50)"),
               Err(ParseError::UnexpectedToken { token:  "2.50".to_string(),
                                                 column: 4, }));
    assert_eq!(parse("3 * // 2"),
               Err(ParseError::UnexpectedToken { token:  "//".to_string(),
                                                 column: 5, }));
}

#[test]
fn integer_literals_reject_leading_zeros() {
    assert_eq!(parse("007"),
               Err(ParseError::LeadingZeros { literal: "007".to_string(),
                                              column:  1, }));
    assert_eq!(parse("1 + 01"),
               Err(ParseError::LeadingZeros { literal: "01".to_string(),
                                              column:  5, }));
    assert_eq!(parse("0").unwrap(), Expr::literal(0, 1));
    assert_eq!(parse("000").unwrap(), Expr::literal(0, 1));
    assert_eq!(parse("00.5").unwrap(), Expr::literal(0.5, 1));
    assert_eq!(parse("0e3").unwrap(), Expr::literal(0.0, 1));
}

#[test]
fn error_messages_are_readable() {
    let err = parse("1 + x").unwrap_err();
    assert_eq!(err.to_string(), "Error at column 5: Unexpected character 'x'.");

    let err = parse("007").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at column 1: Leading zeros in integer literal 007 are not permitted.");

    let err = parse("(1 + 2").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at column 1: Expected closing parenthesis ')' but none found.");
}

#[test]
fn nesting_limit_on_parentheses() {
    let nested = format!("{}1{}", "(".repeat(10), ")".repeat(10));
    assert!(parse_with_limit(&nested, 10).is_ok());
    assert_eq!(parse_with_limit(&nested, 9),
               Err(ParseError::NestingTooDeep { max_depth: 9,
                                                column:    10, }));
}

#[test]
fn nesting_limit_on_signs() {
    let signs = format!("{}1", "-".repeat(50));
    assert!(parse_with_limit(&signs, 51).is_ok());
    assert!(matches!(parse_with_limit(&signs, 40),
                     Err(ParseError::NestingTooDeep { max_depth: 40, .. })));
}

#[test]
fn nesting_limit_on_operator_chains() {
    let chain = vec!["1"; 30].join(" + ");
    assert!(parse_with_limit(&chain, 30).is_ok());
    assert!(matches!(parse_with_limit(&chain, 29),
                     Err(ParseError::NestingTooDeep { max_depth: 29, .. })));
}

#[test]
fn adversarial_nesting_fails_cleanly() {
    let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert!(matches!(parse(&deep), Err(ParseError::NestingTooDeep { .. })));

    let long_chain = vec!["1"; 100_000].join("+");
    assert!(matches!(parse(&long_chain), Err(ParseError::NestingTooDeep { .. })));

    let towers = vec!["2"; 100_000].join("**");
    assert!(matches!(parse(&towers), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn nesting_limit_is_capped() {
    let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert!(parse_with_limit(&nested(MAX_DEPTH_LIMIT), usize::MAX).is_ok());
    assert_eq!(parse_with_limit(&nested(MAX_DEPTH_LIMIT + 1), usize::MAX),
               Err(ParseError::NestingTooDeep { max_depth: MAX_DEPTH_LIMIT,
                                                column:    MAX_DEPTH_LIMIT + 1, }));
}
