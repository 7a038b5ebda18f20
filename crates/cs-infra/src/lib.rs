//! # cs-infra
//!
//! Infrastructure implementations of the `cs-core` ports.
//!
//! - [`db`]: SQLite contact database through diesel and an r2d2 pool
//! - [`scope_state`]: bincode scope blobs stored as files
//! - [`resources`]: resource labels read from a TOML table

pub mod db;
pub mod resources;
pub mod scope_state;

pub use db::repositories::DieselRecordStore;
pub use db::DieselSqliteExecutor;
pub use resources::TomlResourceLabels;
pub use scope_state::{BincodeScopeStateDecoder, FileScopeStateSource};
