use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("unknown entity type tag: {0}")]
    UnknownTypeTag(i64),

    #[error("duplicate bucket for entity type tag {0}")]
    DuplicateBucket(u8),
}
