//! Appointment domain model.
//!
//! # Responsibility
//! - Define the canonical appointment record and its caller-supplied fields.
//! - Enforce the required-field invariant before any store access.
//!
//! # Invariants
//! - `record_id` is assigned by the store on create and never changes.
//! - All six business fields must be non-empty (whitespace-only is empty).
//! - `appointment_id` is the user-visible business key; its uniqueness is
//!   enforced at the repository layer, not here.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Store-assigned stable identifier for an appointment record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// The six caller-supplied business fields of an appointment.
///
/// This is the write model for both create and update: an update is always a
/// full six-field replacement, never a partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentFields {
    /// User-visible unique business key, distinct from `record_id`.
    pub appointment_id: String,
    pub customer_name: String,
    pub phone: String,
    pub service_type: String,
    /// Free-form date text; format is not enforced beyond non-empty.
    pub date: String,
    /// Free-form time text; format is not enforced beyond non-empty.
    pub time: String,
}

/// Canonical persisted appointment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Store-assigned stable ID used for update/delete targeting.
    pub record_id: RecordId,
    /// Business fields, serialized flat next to `record_id`.
    #[serde(flatten)]
    pub fields: AppointmentFields,
}

/// Required-field validation failure for appointment writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentValidationError {
    /// The named required field is empty or whitespace-only.
    EmptyField(&'static str),
}

impl Display for AppointmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for AppointmentValidationError {}

impl AppointmentFields {
    /// Builds a field set from the six required values.
    pub fn new(
        appointment_id: impl Into<String>,
        customer_name: impl Into<String>,
        phone: impl Into<String>,
        service_type: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            appointment_id: appointment_id.into(),
            customer_name: customer_name.into(),
            phone: phone.into(),
            service_type: service_type.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Checks the required-field invariant.
    ///
    /// Returns the first empty field in declaration order; callers surface it
    /// before touching the store.
    pub fn validate(&self) -> Result<(), AppointmentValidationError> {
        for (name, value) in self.named_values() {
            if value.trim().is_empty() {
                return Err(AppointmentValidationError::EmptyField(name));
            }
        }
        Ok(())
    }

    /// Field names paired with their values, in declaration order.
    pub fn named_values(&self) -> [(&'static str, &str); 6] {
        [
            ("appointment_id", self.appointment_id.as_str()),
            ("customer_name", self.customer_name.as_str()),
            ("phone", self.phone.as_str()),
            ("service_type", self.service_type.as_str()),
            ("date", self.date.as_str()),
            ("time", self.time.as_str()),
        ]
    }
}

impl Appointment {
    /// Assembles a record from a store-assigned ID and validated fields.
    ///
    /// # Invariants
    /// - The provided `record_id` must remain stable for this record lifetime.
    /// - This constructor does not re-run field validation.
    pub fn new(record_id: RecordId, fields: AppointmentFields) -> Self {
        Self { record_id, fields }
    }
}
