//! Pointer-capture registry.
//!
//! Contains all `WindowManagerState` methods implementing exclusive capture:
//! acquisition, release, queries, the auto-release policy and the synthetic
//! exits a capture grab produces on other windows.

use super::*;

impl WindowManagerState {
    /// Acquire capture for `view_id`.
    ///
    /// Silent no-op when the owning window is not visible. A previous holder
    /// is revoked and notified before this returns.
    pub fn set_capture(&mut self, view_id: u32) {
        let window_id = match self.views.get(&view_id) {
            Some(view) => view.window_id,
            None => return,
        };
        let visible = self
            .windows
            .get(&window_id)
            .map(|window| window.visible)
            .unwrap_or(false);
        if !visible {
            tracing::debug!(
                "Ignoring capture request for view {} on hidden window {}",
                view_id,
                window_id
            );
            return;
        }
        if self.capture.holder == Some((view_id, window_id)) {
            return;
        }

        let old = self.capture.holder.take();
        self.capture.holder = Some((view_id, window_id));
        tracing::debug!("Capture moved to view {} (window {})", view_id, window_id);

        if let Some((old_view, old_window)) = old {
            self.fire_capture_lost(old_window, old_view);
        }
        if self.config.exit_on_capture_grab {
            self.synthesize_capture_exits(window_id);
        }
    }

    /// Acquire capture for a window's root view.
    pub fn set_window_capture(&mut self, window_id: u32) {
        if let Some(root_view) = self.windows.get(&window_id).map(|window| window.root_view) {
            self.set_capture(root_view);
        }
    }

    /// Release capture if held. A bare no-op, with no notification, when
    /// nothing holds it.
    pub fn release_capture(&mut self) {
        if let Some((view_id, window_id)) = self.capture.holder.take() {
            tracing::debug!("Capture released from view {} (window {})", view_id, window_id);
            self.fire_capture_lost(window_id, view_id);
        }
    }

    /// Whether `window_id` owns the current capture holder.
    pub fn has_capture(&self, window_id: u32) -> bool {
        matches!(self.capture.holder, Some((_, holder)) if holder == window_id)
    }

    /// Whether `view_id` is the current capture holder.
    pub fn view_has_capture(&self, view_id: u32) -> bool {
        matches!(self.capture.holder, Some((holder, _)) if holder == view_id)
    }

    pub fn set_auto_release_capture(&mut self, window_id: u32, value: bool) {
        if let Some(window) = self.windows.get_mut(&window_id) {
            window.auto_release_capture = value;
        }
    }

    /// Clear capture without notifying — the holder's window is going away
    /// and must not receive further callbacks.
    pub(crate) fn drop_capture_for_window(&mut self, window_id: u32) {
        if matches!(self.capture.holder, Some((_, holder)) if holder == window_id) {
            self.capture.holder = None;
            crate::tlog!(
                crate::util::logging::CAPTURE,
                "Dropped capture held by closing window {}",
                window_id
            );
        }
    }

    pub(crate) fn fire_capture_lost(&mut self, window_id: u32, view_id: u32) {
        self.push_event(ManagerEvent::CaptureLost { window_id, view_id });
        self.notify_capture_lost(window_id, view_id);
    }

    /// A capture grab transfers pointer ownership: every other window still
    /// tracking a view under the pointer gets a synthetic exit.
    fn synthesize_capture_exits(&mut self, holder_window: u32) {
        let stale: Vec<(u32, u32)> = self
            .windows
            .iter()
            .filter(|(&id, _)| id != holder_window)
            .filter_map(|(&id, window)| window.pointer_over.map(|view| (id, view)))
            .collect();
        for (window_id, view_id) in stale {
            if let Some(window) = self.windows.get_mut(&window_id) {
                window.pointer_over = None;
            }
            self.send_mouse_exited(window_id, view_id);
        }
    }
}
