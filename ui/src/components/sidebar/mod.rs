pub mod field_sidebar;
pub mod palette_picker;

pub use field_sidebar::*;
pub use palette_picker::*;
