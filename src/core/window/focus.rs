//! Keyboard-focus bookkeeping.

/// Per-window focus state.
///
/// The focused view is only visible while the owning window is active; across
/// a deactivation it is remembered and later restored verbatim, including
/// `None` when nothing was focused.
#[derive(Debug, Default)]
pub struct FocusState {
    /// View holding keyboard focus while the window is active.
    pub focused_view: Option<u32>,
    /// View remembered across an activation loss.
    pub stored_view: Option<u32>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park the current focus for later restoration (activation lost).
    pub fn suspend(&mut self) {
        self.stored_view = self.focused_view.take();
    }

    /// Bring the remembered focus back (activation regained).
    pub fn restore(&mut self) {
        self.focused_view = self.stored_view;
    }

    /// Drop every reference to `view_id` (view disabled or destroyed).
    pub fn forget(&mut self, view_id: u32) {
        if self.focused_view == Some(view_id) {
            self.focused_view = None;
        }
        if self.stored_view == Some(view_id) {
            self.stored_view = None;
        }
    }
}

/// Recently-active window history, most recent first.
#[derive(Debug, Default)]
pub struct FocusHistory {
    pub entries: Vec<u32>,
    limit: usize,
}

impl FocusHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Record `window_id` as most recently active.
    pub fn push(&mut self, window_id: u32) {
        self.entries.retain(|&id| id != window_id);
        self.entries.insert(0, window_id);
        self.entries.truncate(self.limit);
    }

    /// Remove a destroyed window from the history.
    pub fn remove(&mut self, window_id: u32) {
        self.entries.retain(|&id| id != window_id);
    }

    pub fn most_recent(&self) -> Option<u32> {
        self.entries.first().copied()
    }
}
