//! Domain model for the appointment desk.
//!
//! # Responsibility
//! - Define the canonical appointment record used by core business logic.
//! - Keep the write-side field set separate from the persisted record shape.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `RecordId`.
//! - The six business fields are required and validated before persistence.

pub mod appointment;
