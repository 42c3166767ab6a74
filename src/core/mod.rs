pub mod errors;
pub mod state;
pub mod runtime;
pub mod input;
pub mod observer;
pub mod view;
pub mod window;

// Re-export key types
pub use input::{GestureEvent, GestureKind, InputEvent, MouseButtons, MouseEvent, NativeSignal};
pub use state::{ManagerEvent, WindowManagerConfig, WindowManagerState};
pub use view::{View, ViewBehavior};
pub use window::{ModalType, Window, WindowParams};
