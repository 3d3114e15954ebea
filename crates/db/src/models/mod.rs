//! Entity structs (database rows) and request DTOs.

pub mod deal;
pub mod invoice;
pub mod mou;
pub mod receipt;
