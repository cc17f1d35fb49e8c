//! Application-shell context
//!
//! Aggregates the optional collaborator contracts handed over by the host at
//! mount time into one plain struct, per-field defaulted, with a single
//! mutable field (the current user) and one derived value.

pub mod contracts;
pub mod store;

pub use contracts::*;
pub use store::{mount_context, ContextStore, CreateHrefOptions};
