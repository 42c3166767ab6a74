pub mod window;
pub mod tree;
pub mod focus;

pub use window::{ModalType, Window, WindowParams};
