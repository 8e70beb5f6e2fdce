//! # Slotbook Core
//!
//! Domain types shared by the storage and booking crates: the time slot model,
//! the create DTOs accepted from callers, input validation and the error type
//! every layer reports through.

/// Error type and result alias
pub mod errors;
/// Time slot domain model and request types
pub mod models;
/// Date, time and day-of-week validation rules
pub mod validation;
