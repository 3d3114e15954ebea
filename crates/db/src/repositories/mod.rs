//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod deal_repo;
pub mod invoice_repo;
pub mod mou_repo;
pub mod receipt_repo;

pub use deal_repo::DealRepo;
pub use invoice_repo::InvoiceRepo;
pub use mou_repo::MouRepo;
pub use receipt_repo::ReceiptRepo;
