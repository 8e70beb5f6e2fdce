//! # Slotbook Booking
//!
//! The two layers callers talk to:
//!
//! - [`TimeSlotRepository`] validates create requests and turns store failures
//!   into [`SlotError::Storage`](slotbook_core::errors::SlotError::Storage).
//! - [`BookingService`] enforces the available/booked state machine on top.
//!
//! Both are generic over a [`SlotStore`](slotbook_db::SlotStore), so the same
//! code runs against PostgreSQL or the in-memory store.

pub mod repository;
pub mod seed;
pub mod service;

pub use repository::TimeSlotRepository;
pub use service::BookingService;
