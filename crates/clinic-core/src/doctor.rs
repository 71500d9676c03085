//! The `Doctor` entity — the only record type in the registry.

use serde::Serialize;

/// A doctor record.
///
/// `id` is `None` until the record has been saved; the store assigns it on
/// insert and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
  pub id:         Option<i64>,
  pub name:       String,
  pub surname:    String,
  pub employer:   String,
  pub speciality: String,
}

impl Doctor {
  /// An unsaved record.
  pub fn new(
    name: impl Into<String>,
    surname: impl Into<String>,
    employer: impl Into<String>,
    speciality: impl Into<String>,
  ) -> Self {
    Self {
      id:         None,
      name:       name.into(),
      surname:    surname.into(),
      employer:   employer.into(),
      speciality: speciality.into(),
    }
  }

  /// Overwrite all four data fields with those of `other`, keeping `self.id`.
  pub fn overwrite_with(&mut self, other: Doctor) {
    self.name = other.name;
    self.surname = other.surname;
    self.employer = other.employer;
    self.speciality = other.speciality;
  }
}
