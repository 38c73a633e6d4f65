//! Launcher window: search entry, category panels and the File menu

use crate::view::GtkCatalogView;
use crate::widgets::ErrorNotifier;
use anyhow::Context;
use gtk4::prelude::*;
use gtk4::{gio, glib};
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use shelf_core::{Directories, Shell};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, info, warn};

const WINDOW_TITLE: &str = "Application Launcher";
const WINDOW_WIDTH: i32 = 200;
const WINDOW_HEIGHT: i32 = 600;
const LAYER_NAMESPACE: &str = "shelf";

const ACTION_BROWSE: &str = "browse-config";
const ACTION_QUIT: &str = "quit";

type SharedShell = Rc<RefCell<Shell<GtkCatalogView>>>;

pub struct LauncherWindow {
    window: gtk4::ApplicationWindow,
    search_entry: gtk4::Entry,
    shell: SharedShell,
    notifier: ErrorNotifier,
}

impl LauncherWindow {
    pub fn new(app: &gtk4::Application) -> Self {
        let window = gtk4::ApplicationWindow::builder()
            .application(app)
            .title(WINDOW_TITLE)
            .default_width(WINDOW_WIDTH)
            .default_height(WINDOW_HEIGHT)
            .show_menubar(true)
            .css_classes(["shelf"])
            .build();

        Self::dock_left(&window);

        let notifier = ErrorNotifier::new(&window);
        let view = GtkCatalogView::new(notifier.clone());

        let search_entry = gtk4::Entry::builder()
            .placeholder_text("Search")
            .css_classes(["search-entry"])
            .build();

        let scroller = gtk4::ScrolledWindow::builder()
            .hscrollbar_policy(gtk4::PolicyType::Never)
            .vexpand(true)
            .child(view.widget())
            .build();

        let content = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Vertical)
            .build();
        content.append(&search_entry);
        content.append(&scroller);
        window.set_child(Some(&content));

        let launcher = Self {
            window,
            search_entry,
            shell: Rc::new(RefCell::new(Shell::new(view))),
            notifier,
        };

        launcher.setup_menu(app);
        launcher.setup_search_handler();
        launcher
    }

    /// Pin the window to the left screen edge when the compositor supports
    /// layer shell; otherwise it stays an ordinary toplevel.
    fn dock_left(window: &gtk4::ApplicationWindow) {
        if !gtk4_layer_shell::is_supported() {
            debug!("Layer shell unavailable, using a regular window");
            return;
        }

        window.init_layer_shell();
        window.set_layer(Layer::Top);
        window.set_namespace(Some(LAYER_NAMESPACE));
        window.set_keyboard_mode(KeyboardMode::OnDemand);
        window.set_anchor(Edge::Left, true);
        window.set_anchor(Edge::Top, true);
        window.set_anchor(Edge::Bottom, true);
        window.set_anchor(Edge::Right, false);
        window.auto_exclusive_zone_enable();
        info!("Docked to the left edge via layer shell");
    }

    fn setup_menu(&self, app: &gtk4::Application) {
        let browse = gio::SimpleAction::new(ACTION_BROWSE, None);
        let shell = self.shell.clone();
        let notifier = self.notifier.clone();
        let window = self.window.downgrade();
        browse.connect_activate(move |_, _| {
            if let Some(window) = window.upgrade() {
                browse_config(&window, shell.clone(), notifier.clone());
            }
        });
        self.window.add_action(&browse);

        let quit = gio::SimpleAction::new(ACTION_QUIT, None);
        let app_weak = app.downgrade();
        quit.connect_activate(move |_, _| {
            if let Some(app) = app_weak.upgrade() {
                info!("Exit requested");
                app.quit();
            }
        });
        app.add_action(&quit);

        let browse_detailed = format!("win.{ACTION_BROWSE}");
        let quit_detailed = format!("app.{ACTION_QUIT}");
        app.set_accels_for_action(&browse_detailed, &["<Control>o"]);
        app.set_accels_for_action(&quit_detailed, &["<Control>q"]);

        let browse_section = gio::Menu::new();
        browse_section.append(Some("Browse Config"), Some(browse_detailed.as_str()));

        // A second section renders as the separator above Exit
        let exit_section = gio::Menu::new();
        exit_section.append(Some("Exit"), Some(quit_detailed.as_str()));

        let file_menu = gio::Menu::new();
        file_menu.append_section(None, &browse_section);
        file_menu.append_section(None, &exit_section);

        let menubar = gio::Menu::new();
        menubar.append_submenu(Some("File"), &file_menu);
        app.set_menubar(Some(&menubar));
    }

    fn setup_search_handler(&self) {
        let shell = self.shell.clone();
        self.search_entry.connect_changed(move |entry| {
            let query = entry.text();
            let visible = shell.borrow_mut().search(&query);
            debug!("Query {:?}: {} visible", query.as_str(), visible);
        });
    }

    /// Show the window and load the default catalog, if there is one
    pub fn run(&self) {
        self.window.present();
        self.search_entry.grab_focus();

        let result = self.shell.borrow_mut().load_default(&Directories::new());
        match result {
            Ok(Some(count)) => info!("Showing {count} applications"),
            Ok(None) => {}
            Err(e) => {
                warn!("Failed to load default catalog: {e}");
                self.notifier.show_error(&e);
            }
        }
    }
}

/// Ask for a catalog file and rebuild the view from it.
///
/// A failed load leaves the current panels untouched.
fn browse_config(window: &gtk4::ApplicationWindow, shell: SharedShell, notifier: ErrorNotifier) {
    let json = gtk4::FileFilter::new();
    json.set_name(Some("JSON Files"));
    json.add_pattern("*.json");

    let all = gtk4::FileFilter::new();
    all.set_name(Some("All Files"));
    all.add_pattern("*.*");

    let filters = gio::ListStore::new::<gtk4::FileFilter>();
    filters.append(&json);
    filters.append(&all);

    let dialog = gtk4::FileDialog::builder()
        .title("Select Config File")
        .modal(true)
        .filters(&filters)
        .default_filter(&json)
        .build();

    if let Some(dir) = shell
        .borrow()
        .source()
        .and_then(std::path::Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
    {
        dialog.set_initial_folder(Some(&gio::File::for_path(dir)));
    }

    dialog.open(Some(window), gio::Cancellable::NONE, move |result| {
        let path = match selected_path(result) {
            Ok(Some(path)) => path,
            Ok(None) => return,
            Err(e) => {
                warn!("{e:#}");
                notifier.show("Browse Config", &format!("{e:#}"));
                return;
            }
        };

        info!("Loading catalog from {}", path.display());
        let result = shell.borrow_mut().load(&path);
        match result {
            Ok(count) => info!("Showing {count} applications"),
            Err(e) => notifier.show_error(&e),
        }
    });
}

/// Local path of the chosen file; `None` if the dialog was dismissed.
fn selected_path(result: Result<gio::File, glib::Error>) -> anyhow::Result<Option<PathBuf>> {
    let file = match result {
        Ok(file) => file,
        Err(e) if e.matches(gtk4::DialogError::Dismissed) => {
            debug!("File dialog dismissed");
            return Ok(None);
        }
        Err(e) => return Err(e).context("File dialog failed"),
    };

    file.path()
        .map(Some)
        .with_context(|| format!("'{}' is not a local file", file.uri()))
}
