//! Port interfaces for the application layer
//!
//! Ports define the contract between the scope use cases and the
//! infrastructure that backs them: the contact record store, foreign
//! resource lookup, and the per-application scope state.
//!
//! 端口定义用例与基础设施之间的契约。

pub mod errors;
pub mod record_store;
pub mod resource_label;
pub mod scope_state;

pub use errors::RecordStoreError;
pub use record_store::{FieldValue, Record, RecordField, RecordStorePort, RowFilter};
pub use resource_label::{ResourceLabelPort, ResourceRef, ThemeHint};
pub use scope_state::{ScopeStateDecoderPort, ScopeStateSourcePort};
