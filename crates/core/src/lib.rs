//! Domain logic shared by the Dealdesk backend crates.
//!
//! Holds the error taxonomy, shared type aliases, token generation, and the
//! deal-state derivation used by the snapshot endpoint. Everything here is
//! pure and synchronous; persistence lives in `dealdesk-db`.

pub mod error;
pub mod snapshot;
pub mod token;
pub mod types;
