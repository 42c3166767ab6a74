//! View tree nodes and input behavior.
//!
//! Views form a per-window tree; the parent owns its children, so removing a
//! view removes the whole subtree. Input handling is attached by composition:
//! a `ViewBehavior` trait object receives the callbacks and may re-enter the
//! manager (acquire capture, request focus, post tasks, run a nested loop).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::core::input::{GestureEvent, MouseEvent};
use crate::core::state::WindowManagerState;
use crate::util::geometry::Rect;


/// Shared handle to a view behavior.
pub type BehaviorHandle = Rc<RefCell<dyn ViewBehavior>>;

/// Input callbacks a view can implement.
///
/// Handlers receive the full manager state; the dispatcher re-validates ids
/// after every call, so a handler may close windows or move capture freely.
pub trait ViewBehavior {
    /// Return true to stop the press from propagating to the parent.
    fn on_mouse_pressed(
        &mut self,
        _state: &mut WindowManagerState,
        _view_id: u32,
        _event: &MouseEvent,
    ) -> bool {
        false
    }

    fn on_mouse_released(
        &mut self,
        _state: &mut WindowManagerState,
        _view_id: u32,
        _event: &MouseEvent,
    ) {
    }

    fn on_mouse_moved(
        &mut self,
        _state: &mut WindowManagerState,
        _view_id: u32,
        _event: &MouseEvent,
    ) {
    }

    fn on_mouse_entered(&mut self, _state: &mut WindowManagerState, _view_id: u32) {}

    fn on_mouse_exited(&mut self, _state: &mut WindowManagerState, _view_id: u32) {}

    /// Return true to stop the gesture from propagating to the parent.
    fn on_gesture(
        &mut self,
        _state: &mut WindowManagerState,
        _view_id: u32,
        _event: &GestureEvent,
    ) -> bool {
        false
    }
}

/// A node in a window's view tree.
#[derive(Clone)]
pub struct View {
    pub id: u32,
    /// Owning window.
    pub window_id: u32,
    /// Parent view; `None` for a window's root view.
    pub parent: Option<u32>,
    /// Children in insertion order; later entries are on top for hit-testing.
    pub children: Vec<u32>,
    /// Bounds in parent coordinates.
    pub bounds: Rect,
    pub enabled: bool,
    pub focusable: bool,
    /// Attached input behavior, if any.
    pub behavior: Option<BehaviorHandle>,
}

impl View {
    pub fn new(id: u32, window_id: u32, bounds: Rect) -> Self {
        Self {
            id,
            window_id,
            parent: None,
            children: Vec::new(),
            bounds,
            enabled: true,
            focusable: false,
            behavior: None,
        }
    }

    /// Whether the view can receive keyboard focus right now.
    pub fn can_focus(&self) -> bool {
        self.enabled && self.focusable
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("id", &self.id)
            .field("window_id", &self.window_id)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("bounds", &self.bounds)
            .field("enabled", &self.enabled)
            .field("focusable", &self.focusable)
            .field("behavior", &self.behavior.is_some())
            .finish()
    }
}
