use super::screen::ScanScreen;

/// Loading spinner held for the duration of one attempt.
///
/// Showing sets `loading` on the screen; dropping the guard clears it. The
/// clear happens exactly once per guard, on every exit path including unwind.
pub(crate) struct LoadingIndicator<'a> {
    screen: &'a ScanScreen,
}

impl<'a> LoadingIndicator<'a> {
    pub(crate) fn show(screen: &'a ScanScreen) -> Self {
        screen.set_loading(true);
        Self { screen }
    }
}

impl Drop for LoadingIndicator<'_> {
    fn drop(&mut self) {
        self.screen.set_loading(false);
    }
}
