mod error_dialog;

pub use error_dialog::ErrorNotifier;
