//! Contact-store value objects used while resolving scope entries.

mod address;
pub mod collation;
mod common_data;
mod group;
mod reference;
pub mod subtype;

pub use address::{EntityAddress, EntityKind};
pub use common_data::{CommonDataRecord, DataKind, SubtypeField};
pub use group::GroupInfo;
pub use reference::{DetailReference, ReferenceParseError, CONTACTS_AUTHORITY};
