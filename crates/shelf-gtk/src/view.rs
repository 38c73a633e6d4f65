//! GTK widgets behind the catalog view

use crate::widgets::ErrorNotifier;
use gtk4::prelude::*;
use shelf_core::{Application, CatalogView};
use tracing::{debug, warn};

/// Vertical stack of category panels inside the scrolled area.
///
/// Only the panels live in `container`; the search entry and menu bar sit
/// outside it and survive every rebuild.
pub struct GtkCatalogView {
    container: gtk4::Box,
    notifier: ErrorNotifier,
}

impl GtkCatalogView {
    pub fn new(notifier: ErrorNotifier) -> Self {
        let container = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Vertical)
            .css_classes(["category-list"])
            .build();

        Self {
            container,
            notifier,
        }
    }

    pub fn widget(&self) -> &gtk4::Box {
        &self.container
    }
}

impl CatalogView for GtkCatalogView {
    type Group = gtk4::Box;
    type Element = gtk4::Button;

    fn clear(&mut self) {
        while let Some(child) = self.container.first_child() {
            self.container.remove(&child);
        }
    }

    fn add_category(&mut self, name: &str) -> gtk4::Box {
        let panel = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Vertical)
            .css_classes(["category-panel"])
            .build();

        let label = gtk4::Label::builder()
            .label(name)
            .halign(gtk4::Align::Start)
            .css_classes(["category-label"])
            .build();

        panel.append(&label);
        self.container.append(&panel);
        panel
    }

    fn add_application(&mut self, group: &gtk4::Box, app: Application) -> gtk4::Button {
        let button = gtk4::Button::builder()
            .label(app.name.as_str())
            .css_classes(["app-button"])
            .build();

        let notifier = self.notifier.clone();
        button.connect_clicked(move |_| {
            debug!("Activated '{}'", app.name);
            if let Err(e) = shelf_core::launch(&app) {
                warn!("{e}");
                notifier.show_error(&e);
            }
        });

        group.append(&button);
        button
    }

    fn set_visible(&self, element: &gtk4::Button, visible: bool) {
        element.set_visible(visible);
    }
}
