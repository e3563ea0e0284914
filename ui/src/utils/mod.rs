//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **platform**: clock access that works both in the browser and in native tests
//! - **serialization**: JSON and display helpers for log output

pub mod console_macros;
pub mod platform;
pub mod serialization;

pub use platform::*;
pub use serialization::*;
