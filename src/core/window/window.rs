use crate::core::window::focus::FocusState;
use crate::util::geometry::Rect;

/// Modal behavior of a window while it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Blocks activation of the owner window.
    Window,
    /// Blocks activation of every other window and forces capture release.
    System,
}

/// Construction parameters for a window.
#[derive(Debug, Clone)]
pub struct WindowParams {
    pub title: String,
    /// Bounds in screen coordinates; zero size falls back to the manager's
    /// configured default window size.
    pub bounds: Rect,
    /// Owning window: the activation hand-back target, not a lifetime
    /// relation.
    pub owner: Option<u32>,
    pub activatable: bool,
    pub modal: ModalType,
    pub auto_release_capture: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            title: String::new(),
            bounds: Rect::default(),
            owner: None,
            activatable: true,
            modal: ModalType::None,
            auto_release_capture: true,
        }
    }
}

/// A top-level or owned window tracked by the manager.
#[derive(Debug)]
pub struct Window {
    pub id: u32,
    pub title: String,
    /// Bounds in screen coordinates.
    pub bounds: Rect,
    pub owner: Option<u32>,
    pub visible: bool,
    pub activatable: bool,
    pub modal: ModalType,
    /// When false, a delivered mouse release leaves capture in place.
    pub auto_release_capture: bool,
    /// Platform-level enable flag; independent of view enabling and never
    /// affects activation or focus.
    pub native_enabled: bool,
    /// Root of this window's view tree.
    pub root_view: u32,
    /// Keyboard-focus bookkeeping for this window.
    pub focus: FocusState,
    /// Deepest view currently under the pointer, for enter/exit synthesis.
    pub pointer_over: Option<u32>,
}

impl Window {
    pub fn new(id: u32, root_view: u32, params: WindowParams) -> Self {
        Self {
            id,
            title: params.title,
            bounds: params.bounds,
            owner: params.owner,
            visible: false,
            activatable: params.activatable,
            modal: params.modal,
            auto_release_capture: params.auto_release_capture,
            native_enabled: true,
            root_view,
            focus: FocusState::new(),
            pointer_over: None,
        }
    }
}
