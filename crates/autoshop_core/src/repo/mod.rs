//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract for the appointment store.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `AppointmentFields::validate()` and the
//!   business-key uniqueness check before persistence.
//! - Repository APIs return semantic outcomes (`NotFound`, `Unchanged`) in
//!   addition to DB transport errors.

pub mod appointment_repo;
