//! Record models persisted by the store.
//!
//! # Responsibility
//! - Define the shape of papers and newsletters independently of storage.
//! - Enforce construction-time checks; no other business logic lives here.
//!
//! # Invariants
//! - Records carry no identifier; the store assigns one on insert.
//! - Records are never updated or deleted once persisted.

pub mod date;
pub mod newsletter;
pub mod paper;
pub mod validation;
