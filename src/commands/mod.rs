//! Subcommand handlers. Each returns a serializable result; printing is
//! done by the caller.

pub mod groups;
pub mod resolve;
pub mod view_model;
