//! Error dialog - modal notification for load and launch failures
//!
//! Every failure is shown once and must be dismissed by the user; the
//! launcher then carries on from where it was.

use gtk4::glib;
use gtk4::prelude::*;
use tracing::debug;

const DISMISS_LABEL: &str = "Close";

/// Shows errors on top of the launcher window.
///
/// Holds only a weak reference, so buttons that own a notifier do not keep
/// the window alive.
#[derive(Clone)]
pub struct ErrorNotifier {
    window: glib::WeakRef<gtk4::Window>,
}

impl ErrorNotifier {
    pub fn new(window: &impl IsA<gtk4::Window>) -> Self {
        Self {
            window: window.upcast_ref::<gtk4::Window>().downgrade(),
        }
    }

    /// Show a modal dialog with a heading and a detail message
    pub fn show(&self, title: &str, message: &str) {
        let dialog = gtk4::AlertDialog::builder()
            .modal(true)
            .message(title)
            .detail(message)
            .build();
        dialog.set_buttons(&[DISMISS_LABEL]);
        dialog.set_default_button(0);
        dialog.set_cancel_button(0);

        let parent = self.window.upgrade();
        if parent.is_none() {
            debug!("Launcher window gone, showing unparented error dialog");
        }
        dialog.show(parent.as_ref());
    }

    pub fn show_error(&self, error: &shelf_core::Error) {
        self.show(error.title(), &error.to_string());
    }
}
