pub mod camera_icon;
pub mod canvas_preview;
pub mod field_preview;
pub mod loading_indicator;

pub use camera_icon::*;
pub use canvas_preview::*;
pub use field_preview::*;
pub use loading_indicator::*;
