//! Platform helpers
//!
//! Thin wrappers over browser APIs that also work in native unit tests.

/// Milliseconds since the Unix epoch.
///
/// Uses `Date.now()` in the browser and the system clock elsewhere.
pub fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}
