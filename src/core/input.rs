//! Input event types consumed by the dispatcher.

use crate::util::geometry::Point;

bitflags::bitflags! {
    /// Mouse button flag mask carried on pointer events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MouseButtons: u32 {
        const LEFT = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT = 1 << 2;
    }
}

/// Mouse event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Pressed,
    Released,
    Moved,
}

/// A pointer event in target-window coordinates.
#[derive(Debug, Clone, Copy)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub location: Point,
    pub buttons: MouseButtons,
}

impl MouseEvent {
    pub fn pressed(x: i32, y: i32) -> Self {
        Self {
            kind: MouseEventKind::Pressed,
            location: Point::new(x, y),
            buttons: MouseButtons::LEFT,
        }
    }

    pub fn released(x: i32, y: i32) -> Self {
        Self {
            kind: MouseEventKind::Released,
            location: Point::new(x, y),
            buttons: MouseButtons::LEFT,
        }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            kind: MouseEventKind::Moved,
            location: Point::new(x, y),
            buttons: MouseButtons::empty(),
        }
    }
}

/// Touch gesture sequence milestones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    TapDown,
    End,
}

/// A gesture event in target-window coordinates.
#[derive(Debug, Clone, Copy)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub location: Point,
}

impl GestureEvent {
    pub fn tap_down(x: i32, y: i32) -> Self {
        Self {
            kind: GestureKind::TapDown,
            location: Point::new(x, y),
        }
    }

    pub fn end(x: i32, y: i32) -> Self {
        Self {
            kind: GestureKind::End,
            location: Point::new(x, y),
        }
    }
}

/// Input event for internal core usage
#[derive(Debug, Clone)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Gesture(GestureEvent),
}

/// Raw notification from the platform window layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeSignal {
    /// Native activation changed. `genuine` is false for display-only
    /// signals (caption flash) that carry no real input-focus transfer.
    ActivationChanged {
        window_id: u32,
        active: bool,
        genuine: bool,
    },
    /// Native window enable/disable. Never moves activation or focus.
    EnabledChanged { window_id: u32, enabled: bool },
}
