use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sl_core::ports::ScanPresenterPort;
use sl_core::scan::{ScanMessage, ScanScreenState};

/// Scan screen state plus the presenter that renders it.
///
/// Every mutation updates the local state first and then forwards to the
/// presenter, so [`ScanScreen::state`] always reflects what was last rendered.
pub(crate) struct ScanScreen {
    presenter: Arc<dyn ScanPresenterPort>,
    state: Mutex<ScanScreenState>,
}

impl ScanScreen {
    pub(crate) fn new(presenter: Arc<dyn ScanPresenterPort>) -> Self {
        Self {
            presenter,
            state: Mutex::new(ScanScreenState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScanScreenState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn state(&self) -> ScanScreenState {
        self.lock().clone()
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.lock().loading = loading;
        self.presenter.set_loading(loading);
    }

    pub(crate) fn show_message(&self, message: ScanMessage) {
        self.lock().message = Some(message);
        self.presenter.show_message(&message);
    }

    /// Clear the message if one is shown. Returns whether anything changed.
    pub(crate) fn clear_message(&self) -> bool {
        let had_message = self.lock().message.take().is_some();
        if had_message {
            self.presenter.clear_message();
        }
        had_message
    }

    pub(crate) fn set_intro_visible(&self, visible: bool) {
        let was_visible = std::mem::replace(&mut self.lock().show_intro, visible);
        if was_visible && !visible {
            self.presenter.hide_intro();
        }
    }
}
