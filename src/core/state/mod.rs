//! Global window-manager state.
//!
//! This module contains the `WindowManagerState` struct which holds all the
//! "business logic" state of input arbitration — windows, views, capture,
//! activation and focus bookkeeping — separate from any native windowing
//! mechanics or the platform UI.
//!
//! The state is explicitly owned by its creator and mutated synchronously on
//! one thread; handlers and observers re-enter it through `&mut` access.

use std::collections::HashMap;
use std::rc::Rc;

use crate::core::errors::{CoreError, Result};
use crate::core::observer::{
    ActivationObserverHandle, CaptureObserverHandle, DialogDelegate, FocusObserverHandle,
};
use crate::core::runtime::TaskQueue;
use crate::core::view::{BehaviorHandle, View};
use crate::core::window::focus::FocusHistory;
use crate::core::window::tree::WindowTree;
use crate::core::window::{ModalType, Window, WindowParams};
use crate::util::geometry::Rect;

// Sub-modules containing extracted WindowManagerState impl blocks
mod activation;
mod capture;
mod dispatch;
mod focus;


// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the window manager
#[derive(Debug, Clone)]
pub struct WindowManagerConfig {
    /// Size given to windows created with zero-sized bounds
    pub default_window_size: (u32, u32),
    /// Synthesize an exit on windows losing pointer ownership when capture
    /// is grabbed elsewhere
    pub exit_on_capture_grab: bool,
    /// Depth of the recently-active window history
    pub focus_history_limit: usize,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            default_window_size: (800, 600),
            exit_on_capture_grab: true,
            focus_history_limit: 10,
        }
    }
}

// ============================================================================
// Manager Events
// ============================================================================

/// Events emitted by the manager for the platform to handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerEvent {
    /// A window was registered
    WindowCreated { window_id: u32 },
    /// A window was destroyed
    WindowDestroyed { window_id: u32 },
    /// The active window changed
    ActivationChanged { old: Option<u32>, new: Option<u32> },
    /// Native keyboard focus moved between windows
    NativeFocusChanged { old: Option<u32>, new: Option<u32> },
    /// The focused view of a window changed
    FocusedViewChanged {
        window_id: u32,
        old: Option<u32>,
        new: Option<u32>,
    },
    /// A window lost pointer capture
    CaptureLost { window_id: u32, view_id: u32 },
    /// The pointer entered a view
    MouseEntered { window_id: u32, view_id: u32 },
    /// The pointer left a view
    MouseExited { window_id: u32, view_id: u32 },
}

// ============================================================================
// Capture / Activation State
// ============================================================================

/// Exclusive pointer-capture bookkeeping.
#[derive(Debug, Default)]
pub struct CaptureState {
    /// Current holder as (view, owning window). At most one per manager.
    pub holder: Option<(u32, u32)>,
}

/// Active-window bookkeeping. At most one window is active.
#[derive(Debug, Default)]
pub struct ActivationState {
    pub active_window: Option<u32>,
}

// ============================================================================
// Main State
// ============================================================================

/// The window-manager state object.
///
/// Owns every window and view plus the capture, activation and focus state.
/// Subsystem operations live in extracted impl blocks: `capture.rs`,
/// `focus.rs`, `activation.rs`, `dispatch.rs` and `runtime.rs`.
pub struct WindowManagerState {
    /// Configuration
    pub config: WindowManagerConfig,

    /// All windows by id
    pub windows: HashMap<u32, Window>,

    /// All views by id
    pub views: HashMap<u32, View>,

    /// Stacking order of windows
    pub window_tree: WindowTree,

    /// Pointer-capture holder
    pub capture: CaptureState,

    /// Active-window state
    pub activation: ActivationState,

    /// Recently-active window history
    pub focus_history: FocusHistory,

    /// Deferred tasks and nested dispatch bookkeeping
    pub(crate) tasks: TaskQueue,
    pub(crate) loop_depth: u32,

    /// Pending events for the platform
    events: Vec<ManagerEvent>,

    /// Registered observers
    activation_observers: Vec<ActivationObserverHandle>,
    focus_observers: Vec<FocusObserverHandle>,
    capture_observers: Vec<CaptureObserverHandle>,

    /// Id allocation
    next_window_id: u32,
    next_view_id: u32,
}

impl WindowManagerState {
    /// Create a new manager with the given configuration
    pub fn new(config: WindowManagerConfig) -> Self {
        let focus_history = FocusHistory::new(config.focus_history_limit);
        Self {
            config,
            windows: HashMap::new(),
            views: HashMap::new(),
            window_tree: WindowTree::new(),
            capture: CaptureState::default(),
            activation: ActivationState::default(),
            focus_history,
            tasks: TaskQueue::new(),
            loop_depth: 0,
            events: Vec::new(),
            activation_observers: Vec::new(),
            focus_observers: Vec::new(),
            capture_observers: Vec::new(),
            next_window_id: 1,
            next_view_id: 1,
        }
    }

    // =========================================================================
    // Window / View Lifecycle
    // =========================================================================

    /// Register a new window and its root view. The window starts hidden.
    ///
    /// Panics when `params.owner` names a window that does not exist.
    pub fn create_window(&mut self, mut params: WindowParams) -> u32 {
        if let Some(owner) = params.owner {
            assert!(
                self.windows.contains_key(&owner),
                "window owner {} does not exist",
                owner
            );
        }
        if params.bounds.width == 0 || params.bounds.height == 0 {
            let (width, height) = self.config.default_window_size;
            params.bounds.width = width;
            params.bounds.height = height;
        }

        let window_id = self.alloc_window_id();
        let root_view = self.alloc_view_id();
        let root_bounds = Rect::new(0, 0, params.bounds.width, params.bounds.height);
        self.views
            .insert(root_view, View::new(root_view, window_id, root_bounds));

        let window = Window::new(window_id, root_view, params);
        self.windows.insert(window_id, window);
        self.window_tree.insert(window_id);

        self.push_event(ManagerEvent::WindowCreated { window_id });
        tracing::info!("Registered window {} (root view {})", window_id, root_view);
        window_id
    }

    /// Dialog factory: build a window whose modal behavior and title come
    /// from the delegate. The owner is the activation hand-back target.
    pub fn create_dialog_window(
        &mut self,
        delegate: &dyn DialogDelegate,
        owner: Option<u32>,
    ) -> u32 {
        let params = WindowParams {
            title: delegate.title(),
            owner,
            modal: delegate.modal_type(),
            ..WindowParams::default()
        };
        self.create_window(params)
    }

    /// Add a child view under `parent_view`, in parent coordinates.
    ///
    /// Panics on an unknown parent; view setup is an administrative path.
    pub fn add_view(&mut self, parent_view: u32, bounds: Rect) -> u32 {
        let window_id = match self.views.get(&parent_view) {
            Some(parent) => parent.window_id,
            None => panic!("parent view {} does not exist", parent_view),
        };
        let view_id = self.alloc_view_id();
        let mut view = View::new(view_id, window_id, bounds);
        view.parent = Some(parent_view);
        self.views.insert(view_id, view);
        if let Some(parent) = self.views.get_mut(&parent_view) {
            parent.children.push(view_id);
        }
        view_id
    }

    /// Attach an input behavior to a view.
    ///
    /// Panics on an unknown view; behavior wiring is an administrative path.
    pub fn set_view_behavior(&mut self, view_id: u32, behavior: BehaviorHandle) {
        match self.views.get_mut(&view_id) {
            Some(view) => view.behavior = Some(behavior),
            None => panic!("view {} does not exist", view_id),
        }
    }

    pub fn set_view_focusable(&mut self, view_id: u32, focusable: bool) {
        if let Some(view) = self.views.get_mut(&view_id) {
            view.focusable = focusable;
        }
    }

    pub fn set_view_bounds(&mut self, view_id: u32, bounds: Rect) {
        if let Some(view) = self.views.get_mut(&view_id) {
            view.bounds = bounds;
        }
    }

    /// Remove a view and its subtree, unlinking it from the parent.
    pub fn remove_view(&mut self, view_id: u32) {
        let parent = match self.views.get(&view_id) {
            Some(view) => view.parent,
            None => return,
        };
        if let Some(parent_id) = parent {
            if let Some(parent) = self.views.get_mut(&parent_id) {
                parent.children.retain(|&child| child != view_id);
            }
        }
        self.remove_view_subtree(view_id);
    }

    /// Remove a subtree, scrubbing capture, focus and pointer tracking.
    pub(crate) fn remove_view_subtree(&mut self, view_id: u32) {
        let view = match self.views.remove(&view_id) {
            Some(view) => view,
            None => return,
        };
        if matches!(self.capture.holder, Some((holder, _)) if holder == view_id) {
            self.capture.holder = None;
        }
        if let Some(window) = self.windows.get_mut(&view.window_id) {
            window.focus.forget(view_id);
            if window.pointer_over == Some(view_id) {
                window.pointer_over = None;
            }
        }
        for child in view.children {
            self.remove_view_subtree(child);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get a window by ID
    pub fn get_window(&self, window_id: u32) -> Option<&Window> {
        self.windows.get(&window_id)
    }

    pub fn get_window_mut(&mut self, window_id: u32) -> Option<&mut Window> {
        self.windows.get_mut(&window_id)
    }

    /// Get a window by ID, failing on an unknown id
    pub fn window(&self, window_id: u32) -> Result<&Window> {
        self.windows
            .get(&window_id)
            .ok_or(CoreError::InvalidWindowId(window_id))
    }

    /// Get a view by ID
    pub fn get_view(&self, view_id: u32) -> Option<&View> {
        self.views.get(&view_id)
    }

    pub fn get_view_mut(&mut self, view_id: u32) -> Option<&mut View> {
        self.views.get_mut(&view_id)
    }

    /// Get a view by ID, failing on an unknown id
    pub fn view(&self, view_id: u32) -> Result<&View> {
        self.views
            .get(&view_id)
            .ok_or(CoreError::InvalidViewId(view_id))
    }

    /// Top-level capture root reached by following the owner chain.
    pub fn capture_root(&self, window_id: u32) -> u32 {
        let mut current = window_id;
        while let Some(window) = self.windows.get(&current) {
            match window.owner {
                Some(owner) if self.windows.contains_key(&owner) => current = owner,
                _ => break,
            }
        }
        current
    }

    /// The visible modal dialog blocking activation of `target`, if any.
    /// A system-modal dialog blocks every window; a window-modal dialog
    /// blocks only its owner.
    pub(crate) fn blocking_modal(&self, target: u32) -> Option<u32> {
        self.window_tree
            .stacking_order
            .iter()
            .rev()
            .find_map(|&id| {
                let window = self.windows.get(&id)?;
                if !window.visible || id == target {
                    return None;
                }
                match window.modal {
                    ModalType::System => Some(id),
                    ModalType::Window if window.owner == Some(target) => Some(id),
                    _ => None,
                }
            })
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Take all pending events (clears the internal queue)
    pub fn take_events(&mut self) -> Vec<ManagerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Push an event to the queue
    pub fn push_event(&mut self, event: ManagerEvent) {
        self.events.push(event);
    }

    /// Check if there are pending events
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    // =========================================================================
    // Observers
    // =========================================================================

    pub fn add_activation_observer(&mut self, observer: ActivationObserverHandle) {
        self.activation_observers.push(observer);
    }

    pub fn remove_activation_observer(&mut self, observer: &ActivationObserverHandle) {
        self.activation_observers
            .retain(|handle| !Rc::ptr_eq(handle, observer));
    }

    pub fn add_focus_observer(&mut self, observer: FocusObserverHandle) {
        self.focus_observers.push(observer);
    }

    pub fn remove_focus_observer(&mut self, observer: &FocusObserverHandle) {
        self.focus_observers
            .retain(|handle| !Rc::ptr_eq(handle, observer));
    }

    pub fn add_capture_observer(&mut self, observer: CaptureObserverHandle) {
        self.capture_observers.push(observer);
    }

    pub fn remove_capture_observer(&mut self, observer: &CaptureObserverHandle) {
        self.capture_observers
            .retain(|handle| !Rc::ptr_eq(handle, observer));
    }

    pub(crate) fn notify_activation_changed(&mut self, old: Option<u32>, new: Option<u32>) {
        let observers = self.activation_observers.clone();
        for observer in observers {
            observer.borrow_mut().on_activation_changed(self, old, new);
        }
    }

    pub(crate) fn notify_native_focus_changed(&mut self, old: Option<u32>, new: Option<u32>) {
        let observers = self.focus_observers.clone();
        for observer in observers {
            observer.borrow_mut().on_native_focus_changed(self, old, new);
        }
    }

    pub(crate) fn notify_capture_lost(&mut self, window_id: u32, view_id: u32) {
        let observers = self.capture_observers.clone();
        for observer in observers {
            observer.borrow_mut().on_capture_lost(self, window_id, view_id);
        }
    }

    // =========================================================================
    // Id Allocation
    // =========================================================================

    fn alloc_window_id(&mut self) -> u32 {
        let id = self.next_window_id;
        self.next_window_id += 1;
        id
    }

    fn alloc_view_id(&mut self) -> u32 {
        let id = self.next_view_id;
        self.next_view_id += 1;
        id
    }
}

impl Default for WindowManagerState {
    fn default() -> Self {
        Self::new(WindowManagerConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = WindowManagerConfig::default();
        assert_eq!(config.default_window_size, (800, 600));
        assert!(config.exit_on_capture_grab);
        assert_eq!(config.focus_history_limit, 10);
    }

    #[test]
    fn test_id_allocation() {
        let mut state = WindowManagerState::default();
        let first = state.create_window(WindowParams::default());
        let second = state.create_window(WindowParams::default());
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_ne!(
            state.get_window(first).unwrap().root_view,
            state.get_window(second).unwrap().root_view
        );
    }

    #[test]
    fn test_take_events_drains_queue() {
        let mut state = WindowManagerState::default();
        let window_id = state.create_window(WindowParams::default());
        assert!(state.has_events());
        let events = state.take_events();
        assert_eq!(events, vec![ManagerEvent::WindowCreated { window_id }]);
        assert!(!state.has_events());
    }

    #[test]
    fn test_zero_bounds_fall_back_to_config() {
        let mut state = WindowManagerState::default();
        let window_id = state.create_window(WindowParams::default());
        let window = state.get_window(window_id).unwrap();
        assert_eq!(window.bounds.width, 800);
        assert_eq!(window.bounds.height, 600);
    }

    #[test]
    fn test_capture_root_follows_owner_chain() {
        let mut state = WindowManagerState::default();
        let toplevel = state.create_window(WindowParams::default());
        let child = state.create_window(WindowParams {
            owner: Some(toplevel),
            ..WindowParams::default()
        });
        let grandchild = state.create_window(WindowParams {
            owner: Some(child),
            ..WindowParams::default()
        });
        assert_eq!(state.capture_root(grandchild), toplevel);
        assert_eq!(state.capture_root(toplevel), toplevel);
    }
}
