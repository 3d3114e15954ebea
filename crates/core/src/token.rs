//! Opaque lookup tokens for client-facing links.
//!
//! Tokens are unauthenticated bearer-style keys: whoever holds one can reach
//! the resource. They carry no structure beyond being unguessable.

use uuid::Uuid;

/// Generate a fresh 32-character lowercase hex token.
pub fn new_token() -> String {
    Uuid::new_v4().simple().to_string()
}
