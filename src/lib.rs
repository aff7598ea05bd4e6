//! Property Service - A small real-estate listing API
//!
//! Serves property listings through a cache-aside reader and derives listing
//! statistics from the store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod statistics;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{PropertyError, Result};
pub use tasks::spawn_cleanup_task;
