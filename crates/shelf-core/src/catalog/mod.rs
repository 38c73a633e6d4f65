//! Catalog view construction and live filtering
//!
//! The launcher never talks to a widget toolkit directly. A frontend
//! implements [`CatalogView`]; [`build`] drives it from a [`Catalog`] and hands
//! back a [`Registry`] that [`filter`] later walks on every query change.

mod filter;
mod registry;

pub use filter::{filter, matches};
pub use registry::{Registry, RegistryEntry};

use crate::config::{Application, Catalog};
use tracing::debug;

/// The toolkit seam: something that can hold category panels and buttons.
pub trait CatalogView {
    /// Handle to a category panel
    type Group;

    /// Handle to one application button
    type Element;

    /// Remove every category panel and button, leaving persistent chrome alone
    fn clear(&mut self);

    /// Append a panel labeled `name` below the existing ones
    fn add_category(&mut self, name: &str) -> Self::Group;

    /// Append a button for `app` to `group`.
    ///
    /// The element takes ownership of its own `Application`; activating it must
    /// launch exactly this record.
    fn add_application(&mut self, group: &Self::Group, app: Application) -> Self::Element;

    /// Show or hide a button without destroying it
    fn set_visible(&self, element: &Self::Element, visible: bool);
}

/// Rebuild `view` from `catalog` and return the new registry.
///
/// Everything previously added to the view is destroyed first; the caller is
/// expected to drop its old registry in favour of the returned one.
pub fn build<V: CatalogView>(view: &mut V, catalog: &Catalog) -> Registry<V::Element> {
    view.clear();

    let mut registry = Registry::with_capacity(catalog.application_count());

    for (category_index, category) in catalog.categories.iter().enumerate() {
        let group = view.add_category(&category.name);

        for app in &category.applications {
            let element = view.add_application(&group, app.clone());
            registry.push(element, &app.name, category_index);
        }
    }

    debug!(
        "Built catalog view: {} categories, {} entries",
        catalog.categories.len(),
        registry.len()
    );

    registry
}
