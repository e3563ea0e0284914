//! This crate contains the field store and all UI components of the form builder.

pub mod app;
pub use app::FormEditor;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
