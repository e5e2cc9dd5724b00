//! Bookrack Book Catalog Service
//!
//! A small Rust REST JSON API over a single in-memory collection of book
//! records. The catalog lives for the lifetime of the process and is seeded
//! at startup; there is no persistence layer.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
