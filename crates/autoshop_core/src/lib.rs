//! Core domain logic for the autoshop appointment desk.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appointment::{
    Appointment, AppointmentFields, AppointmentValidationError, RecordId,
};
pub use repo::appointment_repo::{
    AppointmentRepository, DeleteOutcome, RepoError, RepoResult, SqliteAppointmentRepository,
    UpdateOutcome,
};
pub use service::appointment_service::AppointmentService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
