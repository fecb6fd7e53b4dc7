//! # Domain Models
//!
//! Pure organization data contracts. Every record here is a passive shape exchanged
//! with a backend: no I/O, no persistence, no validation or business rules.
//! Keep it lean: data, serde wiring and small accessors only.

pub mod config;
mod number;
pub mod organization;
pub mod timestamp;

pub use timestamp::Timestamp;
