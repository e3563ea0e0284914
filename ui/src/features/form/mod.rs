//! Form Builder State
//!
//! The editor's whole model lives here, independent of Dioxus:
//!
//! - **types**: fields, field kinds and the closed kind-specific payload
//! - **palette**: seeded fields and the kinds offered by "Add Field"
//! - **store**: `FormState`, its operations and the `FormAction` reducer
//! - **preview**: pure mapping from a field to its canvas preview
//! - **photo**: welcome-screen photo reads guarded by upload tickets

pub mod palette;
pub mod photo;
pub mod preview;
pub mod store;
pub mod types;

pub use palette::*;
pub use photo::*;
pub use preview::*;
pub use store::*;
pub use types::*;
