//! Core types and trait definitions for the clinic doctor registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod doctor;
pub mod store;
pub mod validate;

pub use doctor::Doctor;
pub use validate::{DoctorInput, Field, FieldErrors, validate};
