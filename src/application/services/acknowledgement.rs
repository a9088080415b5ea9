//! Result of a display-only action.

use serde::Serialize;

/// Confirmation returned by actions that are acknowledged but not recorded,
/// such as applying for a slot or approving an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub message: &'static str,
    /// Identifier of the record the action targeted.
    pub target_id: String,
}

impl Acknowledgement {
    pub fn new(message: &'static str, target_id: impl Into<String>) -> Self {
        Self {
            message,
            target_id: target_id.into(),
        }
    }
}
