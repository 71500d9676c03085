//! HTTP server wiring for the clinic doctor registry.
//!
//! Mounts [`clinic_api::api_router`] under `/api`, adds request tracing and
//! CORS, and loads [`ServerConfig`] from file and environment.

pub mod error;

pub use error::Error;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  http::{HeaderValue, Method, header},
};
use clinic_core::store::DoctorStore;
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Environment variables with this prefix override file values,
/// e.g. `CLINIC_PORT=9000`.
pub const ENV_PREFIX: &str = "CLINIC";

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
  /// The single browser origin allowed to call the API cross-origin.
  pub cors_origin:   String,
}

impl ServerConfig {
  /// Layer built-in defaults, the TOML file at `path` (if it exists), and
  /// `CLINIC_*` environment variables, in increasing precedence.
  pub fn load(path: &Path) -> Result<Self, Error> {
    let settings = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("database_path", "doctors.db")?
      .set_default("cors_origin", "http://localhost:8081")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix(ENV_PREFIX))
      .build()?;
    Ok(settings.try_deserialize()?)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application [`Router`]: the doctors API under `/api`,
/// wrapped in CORS and HTTP tracing layers.
pub fn router<S>(store: Arc<S>, config: &ServerConfig) -> Result<Router, Error>
where
  S: DoctorStore + 'static,
{
  let origin = HeaderValue::from_str(&config.cors_origin)
    .map_err(|_| Error::CorsOrigin(config.cors_origin.clone()))?;

  // `list` only echoes the origin back when the request's `Origin` matches.
  let cors = CorsLayer::new()
    .allow_origin(AllowOrigin::list([origin]))
    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
    .allow_headers([header::CONTENT_TYPE]);

  Ok(
    Router::new()
      .nest("/api", clinic_api::api_router(store))
      .layer(TraceLayer::new_for_http())
      .layer(cors),
  )
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
