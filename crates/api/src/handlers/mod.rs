//! Request handlers, one module per resource.

pub mod deal;
pub mod health;
pub mod invoice;
pub mod mou;
