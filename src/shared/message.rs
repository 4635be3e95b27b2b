/**
 * Message Envelope
 *
 * Every error path and every plain notice (logout, dashboard greeting)
 * is rendered as a single-field JSON object:
 *
 * ```json
 * { "msg": "Logged out successfully" }
 * ```
 */
use serde::{Deserialize, Serialize};

/// `{ "msg": ... }` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable message
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
