/// Represents a tree rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A node, operator or literal kind outside the allow-list.
    #[error("Error at column {column}: Disallowed construct: {kind}.")]
    DisallowedConstruct {
        /// Human-readable name of the rejected kind, such as
        /// `binary operator '**'`.
        kind:   String,
        /// The column of the rejected node.
        column: usize,
    },
    /// The tree is deeper than the configured limit.
    #[error("Expression tree is deeper than the limit of {max_depth}.")]
    TooDeep {
        /// The configured limit.
        max_depth: usize,
    },
}
