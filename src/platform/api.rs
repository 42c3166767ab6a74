//! Platform API Trait
//!
//! This trait defines what a platform adapter must implement. Native
//! frontends own the real windows; the manager tracks the logical state and
//! arbitrates capture, focus and activation on their behalf.

use anyhow::Result;

use crate::core::input::{InputEvent, NativeSignal};
use crate::core::state::WindowManagerState;

/// Platform adapter interface.
///
/// ## Event Loop (in the native runloop)
/// 1. Translate native notifications → queue `NativeSignal`s
/// 2. Translate native input → queue `InputEvent`s per target window
/// 3. Call `pump()` to drive them through the manager
/// 4. Drain `state.take_events()` and mirror the transitions natively
pub trait Platform {
    /// Initialize the platform adapter.
    fn initialize(&mut self) -> Result<()>;

    /// Deliver everything the platform has pending into the manager.
    fn pump(&mut self, state: &mut WindowManagerState) -> Result<()>;
}

/// Headless implementation for tests and the demo binary: signals and input
/// are queued programmatically and delivered in order on `pump()`.
#[derive(Default)]
pub struct HeadlessPlatform {
    pending: Vec<PlatformItem>,
}

enum PlatformItem {
    Signal(NativeSignal),
    Input { window_id: u32, event: InputEvent },
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a native signal for the next pump.
    pub fn push_signal(&mut self, signal: NativeSignal) {
        self.pending.push(PlatformItem::Signal(signal));
    }

    /// Queue an input event for the next pump.
    pub fn push_input(&mut self, window_id: u32, event: InputEvent) {
        self.pending.push(PlatformItem::Input { window_id, event });
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Platform for HeadlessPlatform {
    fn initialize(&mut self) -> Result<()> {
        tracing::info!("HeadlessPlatform initialized");
        Ok(())
    }

    fn pump(&mut self, state: &mut WindowManagerState) -> Result<()> {
        for item in self.pending.drain(..) {
            match item {
                PlatformItem::Signal(signal) => state.handle_native_signal(signal),
                PlatformItem::Input { window_id, event } => {
                    state.process_input_event(window_id, event)
                }
            }
        }
        state.run_pending_tasks();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::MouseEvent;
    use crate::core::window::WindowParams;
    use crate::util::geometry::Rect;

    #[test]
    fn test_pump_delivers_in_order() {
        let mut state = WindowManagerState::default();
        let window_id = state.create_window(WindowParams {
            bounds: Rect::new(0, 0, 100, 100),
            ..WindowParams::default()
        });
        state.show_window(window_id);
        let other = state.create_window(WindowParams {
            bounds: Rect::new(0, 0, 100, 100),
            ..WindowParams::default()
        });
        state.show_window(other);
        assert!(state.is_active(other));

        let mut platform = HeadlessPlatform::new();
        platform.initialize().unwrap();
        platform.push_signal(NativeSignal::ActivationChanged {
            window_id,
            active: true,
            genuine: true,
        });
        platform.push_input(window_id, InputEvent::Mouse(MouseEvent::moved(10, 10)));
        assert!(platform.has_pending());

        platform.pump(&mut state).unwrap();
        assert!(!platform.has_pending());
        assert!(state.is_active(window_id));
        // The move landed after the activation and tracked the pointer
        assert!(state.get_window(window_id).unwrap().pointer_over.is_some());
    }
}
