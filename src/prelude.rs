//! Common imports and types used throughout Tenaya.

pub use std::cell::RefCell;
pub use std::collections::HashMap;
pub use std::rc::Rc;

// Add common internal types here
pub type Result<T> = std::result::Result<T, crate::core::errors::CoreError>;
