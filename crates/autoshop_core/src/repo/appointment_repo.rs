//! Appointment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `appointments` storage.
//! - Enforce required-field and business-key uniqueness invariants on every
//!   write path.
//!
//! # Invariants
//! - Write paths call `AppointmentFields::validate()` before SQL mutations.
//! - Duplicate business keys are rejected before commit via an explicit
//!   read; the check and the write are two store calls and are not atomic
//!   under concurrent writers. Known limitation, inherited from the store
//!   contract.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::{migrations, DbError};
use crate::model::appointment::{
    Appointment, AppointmentFields, AppointmentValidationError, RecordId,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const APPOINTMENTS_TABLE: &str = "appointments";

const REQUIRED_COLUMNS: &[&str] = &[
    "record_id",
    "appointment_id",
    "customer_name",
    "phone",
    "service_type",
    "service_date",
    "service_time",
];

const APPOINTMENT_SELECT_SQL: &str = "SELECT
    record_id,
    appointment_id,
    customer_name,
    phone,
    service_type,
    service_date,
    service_time
FROM appointments";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for appointment persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(AppointmentValidationError),
    DuplicateAppointmentId(String),
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateAppointmentId(id) => {
                write!(f, "appointment id `{id}` is already in use")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted appointment data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection has schema version {actual_version} but version {expected_version} is required; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AppointmentValidationError> for RepoError {
    fn from(value: AppointmentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Terminal states of an update call.
///
/// `NotFound` is an informational outcome, not an error: the target may have
/// been removed between listing and updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Record found, values differed, write applied.
    Updated,
    /// Record found, new values identical to stored values, no write issued.
    Unchanged,
    /// No record with the targeted `record_id`.
    NotFound,
}

/// Terminal states of a delete call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Repository interface for appointment CRUD operations.
pub trait AppointmentRepository {
    /// Inserts a new record and returns its store-assigned `record_id`.
    fn create_appointment(&self, fields: &AppointmentFields) -> RepoResult<RecordId>;
    /// Gets one record by store-assigned ID.
    fn get_appointment(&self, id: RecordId) -> RepoResult<Option<Appointment>>;
    /// Gets one record by business key.
    fn find_by_appointment_id(&self, appointment_id: &str) -> RepoResult<Option<Appointment>>;
    /// Returns a full snapshot of all current records.
    fn list_appointments(&self) -> RepoResult<Vec<Appointment>>;
    /// Replaces all six business fields of the targeted record.
    fn update_appointment(
        &self,
        id: RecordId,
        fields: &AppointmentFields,
    ) -> RepoResult<UpdateOutcome>;
    /// Removes the targeted record. Unconditional once called.
    fn delete_appointment(&self, id: RecordId) -> RepoResult<DeleteOutcome>;
}

/// SQLite-backed appointment repository.
pub struct SqliteAppointmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAppointmentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// Rejects connections that skipped `db::open_db` bootstrap: wrong schema
    /// version, missing table, or missing columns.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    /// Returns whether another record already holds the given business key.
    ///
    /// `exclude` carries the record being updated so it does not collide with
    /// itself.
    fn business_key_taken(
        &self,
        appointment_id: &str,
        exclude: Option<RecordId>,
    ) -> RepoResult<bool> {
        let taken: i64 = match exclude {
            Some(record_id) => self.conn.query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM appointments
                    WHERE appointment_id = ?1 AND record_id <> ?2
                );",
                params![appointment_id, record_id.to_string()],
                |row| row.get(0),
            )?,
            None => self.conn.query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM appointments
                    WHERE appointment_id = ?1
                );",
                [appointment_id],
                |row| row.get(0),
            )?,
        };
        Ok(taken != 0)
    }
}

impl AppointmentRepository for SqliteAppointmentRepository<'_> {
    fn create_appointment(&self, fields: &AppointmentFields) -> RepoResult<RecordId> {
        fields.validate()?;

        if self.business_key_taken(&fields.appointment_id, None)? {
            return Err(RepoError::DuplicateAppointmentId(
                fields.appointment_id.clone(),
            ));
        }

        let record_id: RecordId = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO appointments (
                record_id,
                appointment_id,
                customer_name,
                phone,
                service_type,
                service_date,
                service_time
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                record_id.to_string(),
                fields.appointment_id.as_str(),
                fields.customer_name.as_str(),
                fields.phone.as_str(),
                fields.service_type.as_str(),
                fields.date.as_str(),
                fields.time.as_str(),
            ],
        )?;

        Ok(record_id)
    }

    fn get_appointment(&self, id: RecordId) -> RepoResult<Option<Appointment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{APPOINTMENT_SELECT_SQL} WHERE record_id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_appointment_row(row)?));
        }

        Ok(None)
    }

    fn find_by_appointment_id(&self, appointment_id: &str) -> RepoResult<Option<Appointment>> {
        let mut stmt = self.conn.prepare(&format!(
            "{APPOINTMENT_SELECT_SQL} WHERE appointment_id = ?1 LIMIT 1;"
        ))?;

        let mut rows = stmt.query([appointment_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_appointment_row(row)?));
        }

        Ok(None)
    }

    fn list_appointments(&self) -> RepoResult<Vec<Appointment>> {
        // Deterministic store-natural order; callers must not rely on it.
        let mut stmt = self.conn.prepare(&format!(
            "{APPOINTMENT_SELECT_SQL} ORDER BY created_at ASC, record_id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut appointments = Vec::new();
        while let Some(row) = rows.next()? {
            appointments.push(parse_appointment_row(row)?);
        }

        Ok(appointments)
    }

    fn update_appointment(
        &self,
        id: RecordId,
        fields: &AppointmentFields,
    ) -> RepoResult<UpdateOutcome> {
        fields.validate()?;

        // Duplicate rejection comes before the existence read: a write whose
        // business key is held by another record is refused even when the
        // target itself is already gone.
        if self.business_key_taken(&fields.appointment_id, Some(id))? {
            return Err(RepoError::DuplicateAppointmentId(
                fields.appointment_id.clone(),
            ));
        }

        let Some(existing) = self.get_appointment(id)? else {
            return Ok(UpdateOutcome::NotFound);
        };

        if existing.fields == *fields {
            return Ok(UpdateOutcome::Unchanged);
        }

        let changed = self.conn.execute(
            "UPDATE appointments
             SET
                appointment_id = ?1,
                customer_name = ?2,
                phone = ?3,
                service_type = ?4,
                service_date = ?5,
                service_time = ?6,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE record_id = ?7;",
            params![
                fields.appointment_id.as_str(),
                fields.customer_name.as_str(),
                fields.phone.as_str(),
                fields.service_type.as_str(),
                fields.date.as_str(),
                fields.time.as_str(),
                id.to_string(),
            ],
        )?;

        // The record can vanish between the read above and this write.
        if changed == 0 {
            return Ok(UpdateOutcome::NotFound);
        }

        Ok(UpdateOutcome::Updated)
    }

    fn delete_appointment(&self, id: RecordId) -> RepoResult<DeleteOutcome> {
        let changed = self.conn.execute(
            "DELETE FROM appointments WHERE record_id = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Ok(DeleteOutcome::NotFound);
        }

        Ok(DeleteOutcome::Deleted)
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = migrations::latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, APPOINTMENTS_TABLE)? {
        return Err(RepoError::MissingRequiredTable(APPOINTMENTS_TABLE));
    }

    for column in REQUIRED_COLUMNS {
        if !column_exists(conn, APPOINTMENTS_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: APPOINTMENTS_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists != 0)
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2;",
            params![table, column],
            |_row| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn parse_appointment_row(row: &Row<'_>) -> RepoResult<Appointment> {
    let record_id_text: String = row.get("record_id")?;
    let record_id = Uuid::parse_str(&record_id_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{record_id_text}` in appointments.record_id"
        ))
    })?;

    let fields = AppointmentFields {
        appointment_id: row.get("appointment_id")?,
        customer_name: row.get("customer_name")?,
        phone: row.get("phone")?,
        service_type: row.get("service_type")?,
        date: row.get("service_date")?,
        time: row.get("service_time")?,
    };
    fields.validate()?;

    Ok(Appointment::new(record_id, fields))
}
