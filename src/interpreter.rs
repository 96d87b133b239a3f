/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks the tree bottom-up, applies the exact semantics of
/// each operator, and reports runtime errors such as division by zero or
/// overflow instead of panicking.
///
/// # Responsibilities
/// - Evaluates every node kind with integer/real promotion.
/// - Bounds its own recursion depth.
/// - Reports runtime errors with the column of the offending operator.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source and produces numeric literals, operators
/// and parentheses, each tagged with its column. Any other character is a
/// lexical error. This is the first stage of evaluation.
pub mod lexer;
/// Limits and allow-lists shared by the parser, validator and evaluator.
pub mod options;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a tree that encodes precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Rejects malformed input with column information.
/// - Bounds nesting so later phases recurse a bounded number of times.
pub mod parser;
/// The validator module re-checks a tree before evaluation.
///
/// It walks every node and rejects anything outside an explicit allow-list,
/// whatever produced the tree. Trees built by hand or by another front end go
/// through the same gate as parsed ones.
pub mod validator;
/// The value module defines the numbers produced by evaluation.
pub mod value;
