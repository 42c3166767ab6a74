//! Standardized logging utility for Tenaya
//!
//! This module provides the `tlog!` macro which ensures all Rust logs
//! follow the `YYYY-MM-DD HH:MM:SS [MODULE] Message` format.

#[macro_export]
macro_rules! tlog {
    ($module:expr, $($arg:tt)*) => {{
        let now = chrono::Local::now();
        eprintln!("{} [{}] {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            $module,
            format!($($arg)*)
        );
    }};
}

/// Standardized module identifiers
pub const MAIN: &str = "MAIN";
pub const CORE: &str = "CORE";
pub const STATE: &str = "STATE";
pub const WINDOW: &str = "WINDOW";
pub const VIEW: &str = "VIEW";
pub const INPUT: &str = "INPUT";
pub const FOCUS: &str = "FOCUS";
pub const CAPTURE: &str = "CAPTURE";
pub const ACTIVATION: &str = "ACTIVATION";
pub const DISPATCH: &str = "DISPATCH";
pub const PLATFORM: &str = "PLATFORM";
