/// One button together with the name it is searched by
#[derive(Debug, Clone)]
pub struct RegistryEntry<E> {
    pub element: E,
    /// Lowercased display name
    pub name: String,
    /// Position of the owning category in the catalog
    pub category: usize,
}

/// Every button built from the current catalog, in display order
#[derive(Debug, Clone)]
pub struct Registry<E> {
    entries: Vec<RegistryEntry<E>>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E> Registry<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, element: E, name: &str, category: usize) {
        self.entries.push(RegistryEntry {
            element,
            name: name.to_lowercase(),
            category,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RegistryEntry<E>> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegistryEntry<E>> {
        self.entries.iter()
    }
}

impl<'a, E> IntoIterator for &'a Registry<E> {
    type Item = &'a RegistryEntry<E>;
    type IntoIter = std::slice::Iter<'a, RegistryEntry<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
