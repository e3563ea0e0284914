pub mod form_editor;

pub use form_editor::FormEditor;
