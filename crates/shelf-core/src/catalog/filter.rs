use super::{CatalogView, Registry};
use tracing::trace;

/// Substring test against an already-lowercased name and query.
#[must_use]
pub fn matches(name: &str, query: &str) -> bool {
    name.contains(query)
}

/// Show the entries whose name contains `query` (ignoring case), hide the rest.
///
/// Elements are toggled, never destroyed or reordered. Returns how many
/// entries are left visible.
pub fn filter<V: CatalogView>(view: &V, registry: &Registry<V::Element>, query: &str) -> usize {
    let query = query.to_lowercase();
    let mut visible = 0;

    for entry in registry {
        let shown = matches(&entry.name, &query);
        view.set_visible(&entry.element, shown);
        if shown {
            visible += 1;
        }
    }

    trace!("Filter {query:?}: {visible}/{} visible", registry.len());
    visible
}
