//! Observer interfaces for activation, focus and capture transitions.
//!
//! Listeners are registered as shared handles and removed by pointer
//! identity. Callbacks receive the manager state and may re-enter it; they
//! fire in strict chronological order of the transitions.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::state::WindowManagerState;
use crate::core::window::ModalType;

pub trait ActivationObserver {
    /// Called after the active window changed from `old` to `new`.
    fn on_activation_changed(
        &mut self,
        state: &mut WindowManagerState,
        old: Option<u32>,
        new: Option<u32>,
    );
}

pub trait FocusObserver {
    /// Called when native keyboard focus moved between windows.
    fn on_native_focus_changed(
        &mut self,
        state: &mut WindowManagerState,
        old: Option<u32>,
        new: Option<u32>,
    );
}

pub trait CaptureObserver {
    /// Called on the transition that took capture away from `view_id` in
    /// `window_id`.
    fn on_capture_lost(&mut self, state: &mut WindowManagerState, window_id: u32, view_id: u32);
}

pub type ActivationObserverHandle = Rc<RefCell<dyn ActivationObserver>>;
pub type FocusObserverHandle = Rc<RefCell<dyn FocusObserver>>;
pub type CaptureObserverHandle = Rc<RefCell<dyn CaptureObserver>>;

/// Declares how a dialog created through the dialog factory behaves.
pub trait DialogDelegate {
    fn modal_type(&self) -> ModalType;

    fn title(&self) -> String {
        String::new()
    }
}
