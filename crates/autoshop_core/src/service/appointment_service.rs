//! Appointment gateway service.
//!
//! # Responsibility
//! - Provide the stable create/list/update/delete entry points called by
//!   presentation adapters.
//! - Delegate persistence and invariant enforcement to the repository.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - The service holds no state of its own between calls; all state lives in
//!   the store behind the injected repository.

use crate::model::appointment::{Appointment, AppointmentFields, RecordId};
use crate::repo::appointment_repo::{
    AppointmentRepository, DeleteOutcome, RepoResult, UpdateOutcome,
};
use log::{info, warn};

/// Use-case gateway over an injected appointment repository.
///
/// Calls are synchronous and blocking; callers issue one at a time and read
/// the outcome before proceeding.
pub struct AppointmentService<R: AppointmentRepository> {
    repo: R,
}

impl<R: AppointmentRepository> AppointmentService<R> {
    /// Creates a gateway using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new appointment and returns its store-assigned record ID.
    ///
    /// # Contract
    /// - All six fields must be non-empty.
    /// - The business key must not collide with any existing record.
    pub fn create_appointment(&self, fields: &AppointmentFields) -> RepoResult<RecordId> {
        match self.repo.create_appointment(fields) {
            Ok(record_id) => {
                info!("event=appointment_create module=service status=ok record_id={record_id}");
                Ok(record_id)
            }
            Err(err) => {
                warn!("event=appointment_create module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Returns a full snapshot of all current appointments.
    ///
    /// Read-only; callers re-render from this snapshot after every mutation.
    pub fn list_appointments(&self) -> RepoResult<Vec<Appointment>> {
        self.repo.list_appointments()
    }

    /// Gets one appointment by store-assigned record ID.
    pub fn get_appointment(&self, id: RecordId) -> RepoResult<Option<Appointment>> {
        self.repo.get_appointment(id)
    }

    /// Gets one appointment by its business key.
    pub fn find_by_appointment_id(
        &self,
        appointment_id: &str,
    ) -> RepoResult<Option<Appointment>> {
        self.repo.find_by_appointment_id(appointment_id)
    }

    /// Replaces all six business fields of the targeted record.
    ///
    /// Returns `NotFound`/`Unchanged`/`Updated` as informational outcomes;
    /// validation and duplicate-key failures are errors.
    pub fn update_appointment(
        &self,
        id: RecordId,
        fields: &AppointmentFields,
    ) -> RepoResult<UpdateOutcome> {
        match self.repo.update_appointment(id, fields) {
            Ok(outcome) => {
                info!(
                    "event=appointment_update module=service status=ok record_id={id} outcome={outcome:?}"
                );
                Ok(outcome)
            }
            Err(err) => {
                warn!(
                    "event=appointment_update module=service status=error record_id={id} error={err}"
                );
                Err(err)
            }
        }
    }

    /// Deletes the targeted record.
    ///
    /// # Contract
    /// - Deletion is unconditional and irreversible once called; obtaining
    ///   affirmative user confirmation is the caller's responsibility.
    pub fn delete_appointment(&self, id: RecordId) -> RepoResult<DeleteOutcome> {
        match self.repo.delete_appointment(id) {
            Ok(outcome) => {
                info!(
                    "event=appointment_delete module=service status=ok record_id={id} outcome={outcome:?}"
                );
                Ok(outcome)
            }
            Err(err) => {
                warn!(
                    "event=appointment_delete module=service status=error record_id={id} error={err}"
                );
                Err(err)
            }
        }
    }
}
