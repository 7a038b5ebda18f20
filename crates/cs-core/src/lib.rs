//! # cs-core
//!
//! Core domain models and port definitions for contact access scopes.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the scope state and its view model, the per-entity value objects, the
//! subtype label tables and the ports implemented by `cs-infra`.

pub mod config;
pub mod contacts;
pub mod ids;
pub mod ports;
pub mod scope;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use contacts::{
    CommonDataRecord, DataKind, DetailReference, EntityAddress, EntityKind, GroupInfo,
    SubtypeField,
};
pub use ids::AppId;
pub use scope::{EntityTypeTag, ScopeEntry, ScopeError, ScopeState, ScopesViewModel};
