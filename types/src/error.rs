//! User-facing error shape.

use serde::{Deserialize, Serialize};

/// A structured error carrying a user-facing title and description.
///
/// The account service returns these for failures the user can act on
/// (bad credentials, locked account). Anything that does not match this
/// shape is treated as an opaque internal error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayableError {
    /// Short headline shown as the dialog title.
    pub title: String,
    /// Longer description shown as the dialog body.
    pub desc: String,
}

impl std::fmt::Display for DisplayableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.desc)
    }
}
