//! Shelf GTK4 UI - category panels of application buttons
//!
//! Reads a JSON catalog, shows one panel per category and launches the
//! application behind a button when it is clicked.

mod styles;
mod view;
mod widgets;
mod window;

use gtk4::glib;
use gtk4::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::window::LauncherWindow;

const APP_ID: &str = "org.shelf.Launcher";

#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER: &str = "shelf=debug,shelf_core=debug";
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER: &str = "shelf=info,shelf_core=info";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn setup_logging() {
    #[cfg(debug_assertions)]
    {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let log_filename = format!("shelf-{timestamp}.log");
        let log_path = std::path::Path::new("/tmp").join(&log_filename);

        let symlink_path = std::path::Path::new("/tmp/shelf.log");
        let _ = std::fs::remove_file(symlink_path);
        #[cfg(unix)]
        let _ = std::os::unix::fs::symlink(&log_path, symlink_path);

        let file_appender = tracing_appender::rolling::never("/tmp", &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter(DEFAULT_LOG_FILTER))
            .init();

        // Keep the writer alive for the whole process
        std::mem::forget(guard);
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(env_filter(DEFAULT_LOG_FILTER))
            .init();
    }
}

fn main() -> glib::ExitCode {
    setup_logging();

    info!("Starting shelf");

    let app = gtk4::Application::builder().application_id(APP_ID).build();

    app.connect_startup(|_| styles::install());

    app.connect_activate(|app| {
        // A second activation (e.g. launching the binary again) reuses the window
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        let window = LauncherWindow::new(app);
        window.run();
    });

    app.run()
}
