use anyhow::Result;

use tenaya::core::input::{InputEvent, MouseEvent, NativeSignal};
use tenaya::core::state::{WindowManagerConfig, WindowManagerState};
use tenaya::core::window::WindowParams;
use tenaya::platform::{HeadlessPlatform, Platform};
use tenaya::util::geometry::Rect;

fn main() -> Result<()> {
    // Initialize logging
    // Set default log level to info
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,tenaya=debug");
    }
    // Initialize logging with standardized format
    tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S".to_string(),
        ))
        .with_ansi(false)
        .init();

    let mut state = WindowManagerState::new(WindowManagerConfig::default());
    let mut platform = HeadlessPlatform::new();
    platform.initialize()?;

    // A scripted headless session: two overlapping windows, a focusable
    // child each, and a short burst of platform traffic
    let first = state.create_window(WindowParams {
        title: "first".to_string(),
        bounds: Rect::new(0, 0, 400, 300),
        ..WindowParams::default()
    });
    let first_root = state.window(first)?.root_view;
    let first_child = state.add_view(first_root, Rect::new(10, 10, 120, 80));
    state.set_view_focusable(first_child, true);

    let second = state.create_window(WindowParams {
        title: "second".to_string(),
        bounds: Rect::new(200, 100, 400, 300),
        ..WindowParams::default()
    });

    state.show_window(first);
    state.request_focus(first_child);
    state.show_window(second);

    platform.push_input(first, InputEvent::Mouse(MouseEvent::moved(20, 20)));
    platform.push_signal(NativeSignal::ActivationChanged {
        window_id: first,
        active: true,
        genuine: true,
    });
    platform.pump(&mut state)?;

    // Screen-level routing lands in the topmost window under the point
    state.process_pointer_at(250, 150, MouseEvent::pressed(0, 0));

    tracing::info!(
        "Session: active={:?}, focused_view(first)={:?}, topmost={:?}",
        state.active_window(),
        state.focused_view(first),
        state.window_tree.topmost()
    );
    for event in state.take_events() {
        tracing::info!("event: {:?}", event);
    }

    Ok(())
}
