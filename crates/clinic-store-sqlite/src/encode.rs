//! Mapping between [`Doctor`] and rows of the `doctors` table.
//!
//! Every query selects [`DOCTOR_COLUMNS`] in this order so that
//! [`row_to_doctor`] can read columns by position.

use clinic_core::Doctor;

/// Column list shared by every `SELECT` and `RETURNING` clause.
pub const DOCTOR_COLUMNS: &str = "id, name, surname, employer, speciality";

pub fn row_to_doctor(row: &rusqlite::Row<'_>) -> rusqlite::Result<Doctor> {
  Ok(Doctor {
    id:         Some(row.get(0)?),
    name:       row.get(1)?,
    surname:    row.get(2)?,
    employer:   row.get(3)?,
    speciality: row.get(4)?,
  })
}

/// Positional parameters for the four data columns, in table order.
pub fn doctor_params(d: &Doctor) -> [String; 4] {
  [
    d.name.clone(),
    d.surname.clone(),
    d.employer.clone(),
    d.speciality.clone(),
  ]
}
