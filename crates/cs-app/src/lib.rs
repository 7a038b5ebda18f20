//! Contact scopes application layer
//!
//! Use cases that turn a stored per-application scope into the view model
//! shown by the permission UI, plus the helpers used while a scope is being
//! edited (reference resolution, group picker).

pub mod deps;
pub mod usecase_factory;
pub mod usecases;

pub use deps::AppDeps;
pub use usecase_factory::UseCases;
