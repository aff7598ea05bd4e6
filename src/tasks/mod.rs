//! Background Tasks Module
//!
//! # Tasks
//! - Cache sweep: drops expired entries from the in-process cache

mod cleanup;

pub use cleanup::spawn_cleanup_task;
