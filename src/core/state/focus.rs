//! Keyboard-focus operations.
//!
//! Contains the `WindowManagerState` methods granting, querying and revoking
//! view focus. Focus never moves activation; an inactive window reports no
//! focused view and restores the remembered one when it activates again.

use super::*;

impl WindowManagerState {
    /// Request keyboard focus for `view_id`.
    ///
    /// Silent no-op unless the view is focusable and enabled. On an inactive
    /// window the view is remembered and becomes focused on activation.
    pub fn request_focus(&mut self, view_id: u32) {
        let (window_id, can_focus) = match self.views.get(&view_id) {
            Some(view) => (view.window_id, view.can_focus()),
            None => return,
        };
        if !can_focus {
            tracing::debug!(
                "Denied focus request for view {} (disabled or not focusable)",
                view_id
            );
            return;
        }

        let active = self.activation.active_window == Some(window_id);
        let window = match self.windows.get_mut(&window_id) {
            Some(window) => window,
            None => return,
        };
        if active {
            let old = window.focus.focused_view.replace(view_id);
            if old != Some(view_id) {
                tracing::debug!("Window {} focused view: {:?} -> {}", window_id, old, view_id);
                self.push_event(ManagerEvent::FocusedViewChanged {
                    window_id,
                    old,
                    new: Some(view_id),
                });
            }
        } else {
            window.focus.stored_view = Some(view_id);
        }
    }

    /// Administrative direct-set used during window setup.
    ///
    /// Panics on an unknown view id; obeys the same focusable/enabled
    /// preconditions as `request_focus`.
    pub fn set_focused_view(&mut self, view_id: u32) {
        assert!(
            self.views.contains_key(&view_id),
            "view {} does not exist",
            view_id
        );
        self.request_focus(view_id);
    }

    /// Focused view of `window_id`; `None` while the window is inactive.
    pub fn focused_view(&self, window_id: u32) -> Option<u32> {
        self.windows
            .get(&window_id)
            .and_then(|window| window.focus.focused_view)
    }

    /// Enable or disable a view.
    ///
    /// Disabling the focused view clears its window's focus to none — the
    /// remembered view is dropped too, so a disabled view is never restored —
    /// without transferring focus or activating anything else.
    pub fn set_view_enabled(&mut self, view_id: u32, enabled: bool) {
        let window_id = match self.views.get_mut(&view_id) {
            Some(view) => {
                if view.enabled == enabled {
                    return;
                }
                view.enabled = enabled;
                view.window_id
            }
            None => return,
        };
        if enabled {
            return;
        }
        if let Some(window) = self.windows.get_mut(&window_id) {
            let old = window.focus.focused_view;
            window.focus.forget(view_id);
            if old == Some(view_id) {
                tracing::debug!("Window {} lost focused view {} (disabled)", window_id, view_id);
                self.push_event(ManagerEvent::FocusedViewChanged {
                    window_id,
                    old,
                    new: None,
                });
            }
        }
    }
}
