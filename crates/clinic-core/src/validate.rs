//! Request-body validation for doctor records.
//!
//! All four data fields are mandatory. A field is violated when it is absent,
//! `null`, or empty once surrounding whitespace is trimmed. Every violated
//! field is reported, not only the first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Doctor;

// ─── Input ───────────────────────────────────────────────────────────────────

/// The JSON body accepted on create and update.
///
/// Every field is optional so that missing and `null` values reach
/// [`validate`] instead of failing deserialisation. A submitted `id` is
/// accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorInput {
  pub id:         Option<i64>,
  pub name:       Option<String>,
  pub surname:    Option<String>,
  pub employer:   Option<String>,
  pub speciality: Option<String>,
}

// ─── Fields ──────────────────────────────────────────────────────────────────

/// A mandatory field of [`Doctor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
  Name,
  Surname,
  Employer,
  Speciality,
}

impl Field {
  /// The JSON key of the field.
  pub fn key(self) -> &'static str {
    match self {
      Self::Name => "name",
      Self::Surname => "surname",
      Self::Employer => "employer",
      Self::Speciality => "speciality",
    }
  }

  /// The fixed message reported when the field is missing or blank.
  pub fn message(self) -> &'static str {
    match self {
      Self::Name => "Name is mandatory",
      Self::Surname => "Surname is mandatory",
      Self::Employer => "Employer is mandatory",
      Self::Speciality => "Speciality is mandatory",
    }
  }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Field key → message, one entry per violated field.
///
/// Serialises as a flat JSON object, e.g.
/// `{"name":"Name is mandatory","employer":"Employer is mandatory"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", describe(.0))]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
  pub fn insert(&mut self, field: Field) {
    self.0.insert(field.key(), field.message());
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

}

fn describe(errors: &BTreeMap<&'static str, &'static str>) -> String {
  errors.values().copied().collect::<Vec<_>>().join(", ")
}

// ─── Validation ──────────────────────────────────────────────────────────────

fn present(value: Option<String>, field: Field, errors: &mut FieldErrors) -> String {
  match value {
    Some(v) if !v.trim().is_empty() => v,
    _ => {
      errors.insert(field);
      String::new()
    }
  }
}

/// Check `input` and turn it into an unsaved [`Doctor`].
///
/// Values are kept exactly as submitted; trimming only decides blankness.
/// The submitted `id`, if any, is dropped.
pub fn validate(input: DoctorInput) -> Result<Doctor, FieldErrors> {
  let mut errors = FieldErrors::default();

  let name = present(input.name, Field::Name, &mut errors);
  let surname = present(input.surname, Field::Surname, &mut errors);
  let employer = present(input.employer, Field::Employer, &mut errors);
  let speciality = present(input.speciality, Field::Speciality, &mut errors);

  if !errors.is_empty() {
    return Err(errors);
  }
  Ok(Doctor::new(name, surname, employer, speciality))
}
