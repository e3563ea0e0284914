//! Infrastructure Services
//!
//! - **config**: editor settings and the lazily initialised global configuration
//! - **errors**: error types for store operations and photo uploads

pub mod config;
pub mod errors;
