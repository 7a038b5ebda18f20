use thiserror::Error;

use crate::contacts::EntityKind;
use crate::ports::RecordField;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("field {field:?} is not available on {kind} rows")]
    UnsupportedField { kind: EntityKind, field: RecordField },

    #[error("storage error: {0}")]
    Storage(String),
}
