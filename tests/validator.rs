use pretty_assertions::assert_eq;
use safecalc::{
    AllowList, ErrorKind, EvalError, EvalOptions, MAX_DEPTH_LIMIT, Number,
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{RuntimeError, ValidationError},
    evaluate_tree, evaluate_tree_with_limit, evaluate_with_options, parse, validate,
    validate_with,
};

/// `-(1 + 2)` with every column filled in by hand.
fn negated_sum() -> Expr {
    Expr::unary(UnaryOperator::Negate,
                Expr::binary(Expr::literal(1, 3), BinaryOperator::Add, Expr::literal(2, 7), 5),
                1)
}

/// A right-leaning chain of `height` nodes: `1 + (1 + (1 + ...))`.
fn chain(height: usize) -> Expr {
    let mut tree = Expr::literal(1, 1);
    for _ in 1..height {
        tree = Expr::binary(Expr::literal(1, 1), BinaryOperator::Add, tree, 1);
    }
    tree
}

#[test]
fn accepts_every_parsed_operator() {
    for source in ["1 + 2", "1 - 2", "2 * 3", "1 / 2", "7 // 2", "7 % 2", "2 ** 3", "-1", "+1"] {
        let tree = parse(source).unwrap();
        assert_eq!(validate(&tree), Ok(()), "{source:?} should validate");
    }
}

#[test]
fn accepts_hand_built_tree() {
    let tree = negated_sum();
    assert_eq!(validate(&tree), Ok(()));
    assert_eq!(evaluate_tree(&tree), Ok(Number::Integer(-3)));
}

#[test]
fn rejects_non_finite_literals() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let tree = Expr::binary(Expr::literal(1, 1),
                                BinaryOperator::Add,
                                Expr::literal(value, 5),
                                3);
        let Err(ValidationError::DisallowedConstruct { kind, column }) = validate(&tree) else {
            panic!("literal {value} should be rejected");
        };
        assert!(kind.starts_with("non-finite literal"), "unexpected kind {kind:?}");
        assert_eq!(column, 5);
    }
}

#[test]
fn rejects_operators_outside_allow_list() {
    let allow = AllowList::arithmetic().without_unary(UnaryOperator::Negate);
    assert_eq!(validate_with(&negated_sum(), &allow, 10),
               Err(ValidationError::DisallowedConstruct { kind:   "unary operator '-'".to_string(),
                                                          column: 1, }));

    let allow = AllowList::arithmetic().without_binary(BinaryOperator::Add);
    assert_eq!(validate_with(&negated_sum(), &allow, 10),
               Err(ValidationError::DisallowedConstruct { kind:   "binary operator '+'".to_string(),
                                                          column: 5, }));
}

#[test]
fn literals_only_allow_list() {
    let allow = AllowList::literals_only();
    assert_eq!(validate_with(&Expr::literal(4.5, 1), &allow, 1), Ok(()));
    assert!(validate_with(&negated_sum(), &allow, 10).is_err());

    let allow = allow.with_binary(BinaryOperator::Add)
                     .with_unary(UnaryOperator::Negate);
    assert_eq!(validate_with(&negated_sum(), &allow, 10), Ok(()));
}

#[test]
fn allow_list_edits_are_idempotent() {
    let allow = AllowList::arithmetic().with_binary(BinaryOperator::Pow)
                                       .with_unary(UnaryOperator::Identity);
    assert_eq!(allow, AllowList::arithmetic());

    let allow = allow.without_binary(BinaryOperator::Mod)
                     .without_binary(BinaryOperator::Mod);
    assert!(!allow.allows_binary(BinaryOperator::Mod));
    assert!(allow.with_binary(BinaryOperator::Mod)
                 .allows_binary(BinaryOperator::Mod));
}

#[test]
fn rejects_trees_deeper_than_limit() {
    let tree = chain(12);
    assert_eq!(validate_with(&tree, &AllowList::default(), 12), Ok(()));
    assert_eq!(validate_with(&tree, &AllowList::default(), 11),
               Err(ValidationError::TooDeep { max_depth: 11 }));
}

#[test]
fn evaluator_bounds_its_own_depth() {
    let tree = chain(12);
    assert_eq!(evaluate_tree_with_limit(&tree, 12), Ok(Number::Integer(12)));
    assert_eq!(evaluate_tree_with_limit(&tree, 11),
               Err(RuntimeError::DepthExceeded { max_depth: 11 }));
}

#[test]
fn disallowed_operator_never_runs() {
    // Division by zero would be reported if the tree reached the evaluator.
    let options = EvalOptions { allow: AllowList::arithmetic().without_binary(BinaryOperator::Div),
                                ..EvalOptions::default() };
    let err = evaluate_with_options("1 / 0", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisallowedConstruct);
    assert!(matches!(err, EvalError::Validation(_)));
}

#[test]
fn depth_limit_applies_to_whole_pipeline() {
    let options = EvalOptions { max_depth: 5,
                                ..EvalOptions::default() };
    assert_eq!(evaluate_with_options("((((1))))", &options), Ok(Number::Integer(1)));

    let err = evaluate_with_options("((((((1))))))", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceLimit);

    let err = evaluate_with_options("1 + 1 + 1 + 1 + 1 + 1", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceLimit);
}

#[test]
fn tree_limits_are_capped() {
    let tree = chain(MAX_DEPTH_LIMIT + 1);
    assert_eq!(validate_with(&tree, &AllowList::default(), usize::MAX),
               Err(ValidationError::TooDeep { max_depth: MAX_DEPTH_LIMIT }));
    assert_eq!(evaluate_tree_with_limit(&tree, usize::MAX),
               Err(RuntimeError::DepthExceeded { max_depth: MAX_DEPTH_LIMIT }));

    let tree = chain(MAX_DEPTH_LIMIT);
    assert_eq!(validate_with(&tree, &AllowList::default(), usize::MAX), Ok(()));
}
