//! Message presentation
//!
//! The settings dialog reports device-selection failures through a
//! [`MessagePresenter`]. Frontends show a blocking message box; headless
//! runs only log.

use tracing::warn;

/// Shows blocking error messages to the user
pub trait MessagePresenter {
    /// Show a critical error and return once it was acknowledged
    fn critical(&self, title: &str, message: &str);
}

/// Native message box via `rfd`
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdPresenter;

impl MessagePresenter for RfdPresenter {
    fn critical(&self, title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

/// Presenter for headless runs; messages go to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl MessagePresenter for LogPresenter {
    fn critical(&self, title: &str, message: &str) {
        warn!("{}: {}", title, message);
    }
}
