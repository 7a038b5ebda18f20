//! Scope view model and scope construction helpers.

mod get_app_scopes_view_model;
mod resolve_reference_ids;
mod resolvers;

pub use get_app_scopes_view_model::{GetAppScopesViewModel, ScopesViewModelError};
pub use resolve_reference_ids::{ResolveReferenceIds, ResolveReferencesError};
pub use resolvers::EntityResolvers;
