//! Input routing.
//!
//! Contains the `WindowManagerState` methods dispatching pointer and gesture
//! events: capture-holder override, hit-testing, parent-chain propagation and
//! enter/exit synthesis on pointer transitions.

use super::*;
use crate::core::input::{GestureEvent, GestureKind, InputEvent, MouseEvent, MouseEventKind};
use crate::util::geometry::Point;

impl WindowManagerState {
    /// Process a raw input event targeted at `window_id`'s root.
    pub fn process_input_event(&mut self, window_id: u32, event: InputEvent) {
        match event {
            InputEvent::Mouse(mouse) => self.dispatch_mouse_event(window_id, &mouse),
            InputEvent::Gesture(gesture) => self.dispatch_gesture_event(window_id, &gesture),
        }
    }

    /// Route a pointer event at screen coordinates to the window under it.
    pub fn process_pointer_at(&mut self, x: i32, y: i32, mut event: MouseEvent) {
        if let Some(window_id) = self.window_tree.window_under(x, y, &self.windows) {
            let bounds = self
                .windows
                .get(&window_id)
                .map(|window| window.bounds)
                .unwrap_or_default();
            event.location = Point::new(x - bounds.x, y - bounds.y);
            self.dispatch_mouse_event(window_id, &event);
        }
    }

    /// Dispatch a mouse event to `window_id`'s view tree.
    ///
    /// A capture holder sharing the event's capture root receives the event
    /// unconditionally, even outside its bounds; otherwise the deepest
    /// hit-tested view does.
    pub fn dispatch_mouse_event(&mut self, window_id: u32, event: &MouseEvent) {
        if !self.windows.contains_key(&window_id) {
            return;
        }
        let captured = self.capture_target_for(window_id);

        match event.kind {
            MouseEventKind::Pressed => match captured {
                Some((view_id, _)) => {
                    self.deliver_mouse_pressed(view_id, event, false);
                }
                None => {
                    if let Some(view_id) = self.hit_test(window_id, event.location) {
                        self.deliver_mouse_pressed(view_id, event, true);
                    }
                }
            },
            MouseEventKind::Released => match captured {
                Some((view_id, holder_window)) => {
                    self.deliver_mouse_released(view_id, event);
                    self.auto_release_after(holder_window);
                }
                None => {
                    if let Some(view_id) = self.hit_test(window_id, event.location) {
                        self.deliver_mouse_released(view_id, event);
                    }
                }
            },
            MouseEventKind::Moved => match captured {
                Some((view_id, _)) => {
                    self.deliver_mouse_moved(view_id, event);
                }
                None => {
                    self.update_pointer_over(window_id, event);
                }
            },
        }
    }

    /// Dispatch a gesture event.
    ///
    /// A gesture end reaching the capture holder releases capture after
    /// delivery, regardless of the window's auto-release flag.
    pub fn dispatch_gesture_event(&mut self, window_id: u32, event: &GestureEvent) {
        if !self.windows.contains_key(&window_id) {
            return;
        }
        match self.capture_target_for(window_id) {
            Some((view_id, _)) => {
                self.deliver_gesture(view_id, event, false);
                if event.kind == GestureKind::End {
                    self.release_capture();
                }
            }
            None => {
                if let Some(view_id) = self.hit_test(window_id, event.location) {
                    self.deliver_gesture(view_id, event, true);
                }
            }
        }
    }

    /// Deepest view under `point` (window coordinates), or none when the
    /// point lies in the non-client region outside the root view.
    pub fn hit_test(&self, window_id: u32, point: Point) -> Option<u32> {
        let window = self.windows.get(&window_id)?;
        self.hit_test_from(window.root_view, point)
    }

    fn hit_test_from(&self, view_id: u32, point: Point) -> Option<u32> {
        let view = self.views.get(&view_id)?;
        if !view.bounds.contains(point) {
            return None;
        }
        let local = Point::new(point.x - view.bounds.x, point.y - view.bounds.y);
        // Later children are on top
        for &child in view.children.iter().rev() {
            if let Some(hit) = self.hit_test_from(child, local) {
                return Some(hit);
            }
        }
        Some(view_id)
    }

    // =========================================================================
    // Delivery
    // =========================================================================

    /// The capture holder, if its capture root matches the event root.
    fn capture_target_for(&self, event_window: u32) -> Option<(u32, u32)> {
        let (view_id, holder_window) = self.capture.holder?;
        if self.capture_root(holder_window) == self.capture_root(event_window) {
            Some((view_id, holder_window))
        } else {
            None
        }
    }

    /// Default capture policy: a delivered release clears capture unless the
    /// holder window opted out.
    fn auto_release_after(&mut self, holder_window: u32) {
        if !matches!(self.capture.holder, Some((_, holder)) if holder == holder_window) {
            return;
        }
        let auto = self
            .windows
            .get(&holder_window)
            .map(|window| window.auto_release_capture)
            .unwrap_or(true);
        if auto {
            self.release_capture();
        }
    }

    fn deliver_mouse_pressed(&mut self, view_id: u32, event: &MouseEvent, propagate: bool) {
        let mut target = Some(view_id);
        while let Some(current) = target {
            let (parent, behavior) = match self.views.get(&current) {
                Some(view) => (view.parent, view.behavior.clone()),
                None => return,
            };
            let handled = match behavior {
                Some(behavior) => behavior.borrow_mut().on_mouse_pressed(self, current, event),
                None => false,
            };
            if handled || !propagate {
                return;
            }
            target = parent;
        }
    }

    fn deliver_mouse_released(&mut self, view_id: u32, event: &MouseEvent) {
        let behavior = match self.views.get(&view_id) {
            Some(view) => view.behavior.clone(),
            None => return,
        };
        if let Some(behavior) = behavior {
            behavior.borrow_mut().on_mouse_released(self, view_id, event);
        }
    }

    fn deliver_mouse_moved(&mut self, view_id: u32, event: &MouseEvent) {
        let behavior = match self.views.get(&view_id) {
            Some(view) => view.behavior.clone(),
            None => return,
        };
        if let Some(behavior) = behavior {
            behavior.borrow_mut().on_mouse_moved(self, view_id, event);
        }
    }

    fn deliver_gesture(&mut self, view_id: u32, event: &GestureEvent, propagate: bool) {
        let mut target = Some(view_id);
        while let Some(current) = target {
            let (parent, behavior) = match self.views.get(&current) {
                Some(view) => (view.parent, view.behavior.clone()),
                None => return,
            };
            let handled = match behavior {
                Some(behavior) => behavior.borrow_mut().on_gesture(self, current, event),
                None => false,
            };
            if handled || !propagate {
                return;
            }
            target = parent;
        }
    }

    pub(crate) fn send_mouse_entered(&mut self, window_id: u32, view_id: u32) {
        self.push_event(ManagerEvent::MouseEntered { window_id, view_id });
        let behavior = self
            .views
            .get(&view_id)
            .and_then(|view| view.behavior.clone());
        if let Some(behavior) = behavior {
            behavior.borrow_mut().on_mouse_entered(self, view_id);
        }
    }

    pub(crate) fn send_mouse_exited(&mut self, window_id: u32, view_id: u32) {
        self.push_event(ManagerEvent::MouseExited { window_id, view_id });
        let behavior = self
            .views
            .get(&view_id)
            .and_then(|view| view.behavior.clone());
        if let Some(behavior) = behavior {
            behavior.borrow_mut().on_mouse_exited(self, view_id);
        }
    }

    /// Maintain per-root pointer tracking and emit enter/exit transitions.
    /// Leaving the root view for the non-client border counts as an exit.
    fn update_pointer_over(&mut self, window_id: u32, event: &MouseEvent) {
        let hit = self.hit_test(window_id, event.location);
        let previous = match self.windows.get(&window_id) {
            Some(window) => window.pointer_over,
            None => return,
        };
        if previous != hit {
            if let Some(window) = self.windows.get_mut(&window_id) {
                window.pointer_over = hit;
            }
            if let Some(old_view) = previous {
                self.send_mouse_exited(window_id, old_view);
            }
            if let Some(new_view) = hit {
                self.send_mouse_entered(window_id, new_view);
            }
        }
        if let Some(view_id) = hit {
            self.deliver_mouse_moved(view_id, event);
        }
    }
}
