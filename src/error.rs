//! 片段构造错误。
//!
//! 这些都是调用点写错时才会出现的错误，构造失败时不会返回部分片段。

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentError {
    #[error("fragment template has no literal segments")]
    EmptyTemplate,
    #[error("fragment expects {expected} values but got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
    #[error("join requires at least one value")]
    EmptyJoinInput,
    #[error("bulk requires at least one row with at least one column")]
    EmptyBulkInput,
    #[error("bulk row {row} has {actual} columns, expected {expected} like row 0")]
    RaggedBulkInput {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
