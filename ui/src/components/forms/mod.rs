pub mod photo_upload_form;
pub mod property_editor;

pub use photo_upload_form::*;
pub use property_editor::*;
