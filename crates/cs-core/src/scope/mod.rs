//! Scope state and the view model built from it.
//! 作用域状态及其视图模型

mod entry;
mod error;
mod state;
mod type_tag;
mod view_model;

pub use entry::ScopeEntry;
pub use error::ScopeError;
pub use state::ScopeState;
pub use type_tag::EntityTypeTag;
pub use view_model::ScopesViewModel;
