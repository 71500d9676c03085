//! [`SqliteStore`] — the SQLite implementation of [`DoctorStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use clinic_core::{Doctor, store::DoctorStore};

use crate::{
  Error, Result,
  encode::{DOCTOR_COLUMNS, doctor_params, row_to_doctor},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A doctor registry backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn insert(&self, doctor: Doctor) -> Result<Doctor> {
    let [name, surname, employer, speciality] = doctor_params(&doctor);

    let saved = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!(
            "INSERT INTO doctors (name, surname, employer, speciality)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {DOCTOR_COLUMNS}"
          ),
          rusqlite::params![name, surname, employer, speciality],
          row_to_doctor,
        )?)
      })
      .await?;
    Ok(saved)
  }

  /// Overwrite the row with `id`, or insert it under that id if absent.
  async fn upsert(&self, id: i64, doctor: Doctor) -> Result<Doctor> {
    let [name, surname, employer, speciality] = doctor_params(&doctor);

    let saved = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!(
            "INSERT INTO doctors (id, name, surname, employer, speciality)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
               name       = excluded.name,
               surname    = excluded.surname,
               employer   = excluded.employer,
               speciality = excluded.speciality
             RETURNING {DOCTOR_COLUMNS}"
          ),
          rusqlite::params![id, name, surname, employer, speciality],
          row_to_doctor,
        )?)
      })
      .await?;
    Ok(saved)
  }
}

// ─── DoctorStore impl ────────────────────────────────────────────────────────

impl DoctorStore for SqliteStore {
  type Error = Error;

  async fn find_all(&self) -> Result<Vec<Doctor>> {
    let doctors = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {DOCTOR_COLUMNS} FROM doctors ORDER BY id"))?;
        let rows = stmt
          .query_map([], row_to_doctor)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(doctors)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Doctor>> {
    let doctor = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {DOCTOR_COLUMNS} FROM doctors WHERE id = ?1"),
            rusqlite::params![id],
            row_to_doctor,
          )
          .optional()?)
      })
      .await?;
    Ok(doctor)
  }

  async fn save(&self, doctor: Doctor) -> Result<Doctor> {
    match doctor.id {
      None => self.insert(doctor).await,
      Some(id) => self.upsert(id, doctor).await,
    }
  }

  async fn delete_by_id(&self, id: i64) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM doctors WHERE id = ?1", rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
