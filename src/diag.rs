//! Console diagnostics.
//!
//! Everything here is developer-facing only. Nothing the upload form does is
//! ever surfaced to the end user through these channels.

pub(crate) fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Print an informational line to the browser console.
macro_rules! diag {
    ($($arg:tt)*) => {
        $crate::diag::log(&format!($($arg)*))
    };
}

/// Print a warning line to the browser console.
macro_rules! diag_warn {
    ($($arg:tt)*) => {
        $crate::diag::warn(&format!($($arg)*))
    };
}

pub(crate) use {diag, diag_warn};
