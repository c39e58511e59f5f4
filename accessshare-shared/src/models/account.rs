use serde::{Deserialize, Serialize};

/// Outcome of an account deletion request.
///
/// The backend always answers with a flag and a human-readable message;
/// callers must check `success` before treating the account as gone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteAccountResponse {
    /// Whether the account was deleted.
    #[serde(default)]
    pub success: bool,

    /// Human-readable outcome message, suitable for display.
    #[serde(default)]
    pub message: String,
}
