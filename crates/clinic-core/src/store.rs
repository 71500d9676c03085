//! The `DoctorStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `clinic-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::Doctor;

/// Abstraction over a doctor-record backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait DoctorStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every stored doctor, ordered by ascending id. Empty if there are none.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Doctor>, Self::Error>> + Send + '_;

  /// Retrieve a doctor by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Doctor>, Self::Error>> + Send + '_;

  /// Insert `doctor` if its `id` is `None`, assigning a fresh id; otherwise
  /// overwrite all fields of the row with that id.
  ///
  /// Returns the record as persisted, which callers should prefer over the
  /// value they passed in.
  fn save(
    &self,
    doctor: Doctor,
  ) -> impl Future<Output = Result<Doctor, Self::Error>> + Send + '_;

  /// Physically delete the doctor with `id`. Deleting an absent id is not an
  /// error; callers check existence first when they need to know.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
