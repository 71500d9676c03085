//! JSON REST API for the clinic doctor registry.
//!
//! Exposes an axum [`Router`] backed by any [`clinic_core::store::DoctorStore`].
//! CORS, tracing, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", clinic_api::api_router(store.clone()))
//! ```

pub mod doctors;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use clinic_core::store::DoctorStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DoctorStore + 'static,
{
  Router::new()
    .route("/doctors", get(doctors::list::<S>).post(doctors::create::<S>))
    .route(
      "/doctors/{id}",
      get(doctors::get_one::<S>)
        .put(doctors::update::<S>)
        .delete(doctors::delete_one::<S>),
    )
    .with_state(store)
}
