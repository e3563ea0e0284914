/// Macros for properly formatted console logging.
///
/// In the browser these forward to gloo_console with a `Date.now()` prefix.
/// Everywhere else (unit tests, native builds) they forward to `tracing`, since
/// wasm-bindgen imports cannot be called off wasm32.
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Debug,
    Log,
    Info,
    Warn,
    Error,
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn emit(level: ConsoleLevel, message: String) {
    let line = format!("[{}] {}", js_sys::Date::now(), message);
    match level {
        ConsoleLevel::Debug => gloo_console::debug!(line),
        ConsoleLevel::Log => gloo_console::log!(line),
        ConsoleLevel::Info => gloo_console::info!(line),
        ConsoleLevel::Warn => gloo_console::warn!(line),
        ConsoleLevel::Error => gloo_console::error!(line),
    }
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: ConsoleLevel, message: String) {
    match level {
        ConsoleLevel::Debug => tracing::debug!("{}", message),
        ConsoleLevel::Log | ConsoleLevel::Info => tracing::info!("{}", message),
        ConsoleLevel::Warn => tracing::warn!("{}", message),
        ConsoleLevel::Error => tracing::error!("{}", message),
    }
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Info,
            format!("{}", $fmt),
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Info,
            format!($fmt, $($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_log {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Log,
            format!("{}", $fmt),
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Log,
            format!($fmt, $($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Warn,
            format!("{}", $fmt),
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Warn,
            format!($fmt, $($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Error,
            format!("{}", $fmt),
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Error,
            format!($fmt, $($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Debug,
            format!("{}", $fmt),
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Debug,
            format!($fmt, $($arg)*),
        )
    };
}
