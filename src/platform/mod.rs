//! Platform Integration Module
//!
//! The core is platform-neutral: a native window layer translates its
//! activation/enable notifications into `NativeSignal`s and its raw input
//! into `InputEvent`s, pumps them through the manager, and reacts to the
//! `ManagerEvent`s queued in response.

pub mod api;

pub use api::{HeadlessPlatform, Platform};
