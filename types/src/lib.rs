//! Shared types for the Ember launcher.
//!
//! This crate contains the account model and error types shared between
//! the launcher UI and the account service client.

pub mod account;
pub mod error;

// Re-export commonly used types
pub use account::{Account, AccountKind};
pub use error::DisplayableError;
