//! User Interface Components
//!
//! Reusable Dioxus components for the form builder:
//!
//! - **sidebar**: field list and the "Add Field" palette picker
//! - **display**: canvas preview, per-field preview cards and small indicators
//! - **forms**: property editor and welcome-screen photo upload
//! - **inputs**: labelled text inputs bound to store values

pub mod display;
pub mod forms;
pub mod inputs;
pub mod sidebar;
