//! Activation arbitration.
//!
//! Window lifecycle (show/hide/close) and the activation state machine,
//! including modal hand-off and the filter rejecting display-only platform
//! activation signals.

use super::*;
use crate::core::input::NativeSignal;

impl WindowManagerState {
    /// Show a window.
    ///
    /// Activatable windows become active. A system-modal window forces any
    /// held capture out before it becomes visible.
    pub fn show_window(&mut self, window_id: u32) {
        let (modal, activatable) = match self.windows.get(&window_id) {
            Some(window) => (window.modal, window.activatable),
            None => return,
        };

        if modal == ModalType::System {
            // Capture must be gone before the dialog is on screen
            self.release_capture();
        }
        if let Some(window) = self.windows.get_mut(&window_id) {
            window.visible = true;
        }
        self.window_tree.bring_to_front(window_id);
        tracing::info!("Showing window {}", window_id);

        if activatable {
            self.set_active_window(Some(window_id));
        }
    }

    /// Hide a window: releases its capture and hands activation back.
    pub fn hide_window(&mut self, window_id: u32) {
        match self.windows.get_mut(&window_id) {
            Some(window) if window.visible => {
                window.visible = false;
                window.pointer_over = None;
            }
            _ => return,
        }
        tracing::info!("Hiding window {}", window_id);

        if self.has_capture(window_id) {
            self.release_capture();
        }
        if self.activation.active_window == Some(window_id) {
            let owner = self
                .windows
                .get(&window_id)
                .and_then(|window| window.owner)
                .filter(|owner| {
                    self.windows
                        .get(owner)
                        .map(|window| window.visible)
                        .unwrap_or(false)
                });
            self.set_active_window(owner);
        }
    }

    /// Explicitly activate a window, honoring its activatable flag. A
    /// visible blocking modal dialog receives the activation instead.
    pub fn activate_window(&mut self, window_id: u32) {
        let activatable = match self.windows.get(&window_id) {
            Some(window) => window.activatable,
            None => return,
        };
        if !activatable {
            tracing::debug!("Window {} is not activatable", window_id);
            return;
        }
        if let Some(blocker) = self.blocking_modal(window_id) {
            tracing::debug!(
                "Activation of window {} redirected to modal dialog {}",
                window_id,
                blocker
            );
            self.set_active_window(Some(blocker));
            return;
        }
        self.set_active_window(Some(window_id));
    }

    /// Close and destroy a window.
    ///
    /// An active window hands activation to its owner (the modal return
    /// path), else clears it. Closure mid-dispatch is safe: the capture it
    /// held is dropped without further callbacks and every later delivery
    /// re-validates ids.
    pub fn close_window(&mut self, window_id: u32) {
        if !self.windows.contains_key(&window_id) {
            return;
        }
        tracing::info!("Closing window {}", window_id);

        self.drop_capture_for_window(window_id);

        if self.activation.active_window == Some(window_id) {
            let owner = self
                .windows
                .get(&window_id)
                .and_then(|window| window.owner)
                .filter(|owner| self.windows.contains_key(owner));
            self.set_active_window(owner);
        }

        if let Some(root_view) = self.windows.get(&window_id).map(|window| window.root_view) {
            self.remove_view_subtree(root_view);
        }
        self.window_tree.remove(window_id);
        self.focus_history.remove(window_id);
        self.windows.remove(&window_id);
        self.push_event(ManagerEvent::WindowDestroyed { window_id });
    }

    /// The single activation transition routine.
    ///
    /// Suspends focus on the outgoing window, restores it on the incoming
    /// one, and fires the activation/native-focus notifications in
    /// chronological order.
    pub(crate) fn set_active_window(&mut self, new: Option<u32>) {
        let old = self.activation.active_window;
        if old == new {
            return;
        }

        if let Some(old_id) = old {
            if let Some(window) = self.windows.get_mut(&old_id) {
                window.focus.suspend();
            }
        }
        self.activation.active_window = new;
        if let Some(new_id) = new {
            if let Some(window) = self.windows.get_mut(&new_id) {
                window.focus.restore();
            }
            self.focus_history.push(new_id);
            self.window_tree.bring_to_front(new_id);
        }
        tracing::info!("Active window: {:?} -> {:?}", old, new);

        self.push_event(ManagerEvent::ActivationChanged { old, new });
        self.push_event(ManagerEvent::NativeFocusChanged { old, new });
        self.notify_activation_changed(old, new);
        self.notify_native_focus_changed(old, new);
    }

    /// Feed a raw platform notification through the genuine-signal filter.
    ///
    /// Display-only activation signals (caption flash and the like) never
    /// change activation state; platform enable/disable never moves
    /// activation or focus.
    pub fn handle_native_signal(&mut self, signal: NativeSignal) {
        match signal {
            NativeSignal::ActivationChanged {
                window_id,
                active,
                genuine,
            } => {
                if !genuine {
                    tracing::debug!(
                        "Ignoring display-only activation signal for window {}",
                        window_id
                    );
                    return;
                }
                if !self.windows.contains_key(&window_id) {
                    return;
                }
                if active {
                    self.activate_window(window_id);
                } else if self.activation.active_window == Some(window_id) {
                    self.set_active_window(None);
                }
            }
            NativeSignal::EnabledChanged { window_id, enabled } => {
                // Bookkeeping only: activation and focus stay put
                if let Some(window) = self.windows.get_mut(&window_id) {
                    window.native_enabled = enabled;
                    tracing::debug!("Window {} native enable -> {}", window_id, enabled);
                }
            }
        }
    }

    /// Whether `window_id` is the active window.
    pub fn is_active(&self, window_id: u32) -> bool {
        self.activation.active_window == Some(window_id)
    }

    /// Currently active window.
    pub fn active_window(&self) -> Option<u32> {
        self.activation.active_window
    }
}
