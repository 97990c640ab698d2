use std::collections::BTreeMap;

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Id,
    Name,
    TestId,
    Label,
    FormField,
}

impl Category {
    /// All categories, in the order their files are written.
    pub const ALL: [Category; 5] = [
        Category::Id,
        Category::Name,
        Category::TestId,
        Category::Label,
        Category::FormField,
    ];

    /// Name of the generated module (and of the object it exports).
    pub fn module_name(self) -> &'static str {
        match self {
            Category::Id => "idSelectors",
            Category::Name => "nameSelectors",
            Category::TestId => "testIdSelectors",
            Category::Label => "labelSelectors",
            Category::FormField => "formFieldSelectors",
        }
    }
}

// ============================================================================
// SelectorMap
// ============================================================================

/// Key → selector table. Iteration is always sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorMap {
    entries: BTreeMap<String, String>,
}

impl SelectorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any selector already stored under `key`.
    pub fn insert(&mut self, key: String, selector: String) {
        self.entries.insert(key, selector);
    }

    /// Insert only when `key` is not taken yet. Returns whether it was stored.
    pub fn insert_if_absent(&mut self, key: String, selector: String) -> bool {
        match self.entries.entry(key) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(selector);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        self.entries.retain(|k, v| keep(k, v));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// SelectorTables
// ============================================================================

/// The five tables produced by one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorTables {
    pub ids: SelectorMap,
    pub names: SelectorMap,
    pub test_ids: SelectorMap,
    pub labels: SelectorMap,
    pub form_fields: SelectorMap,
}

impl SelectorTables {
    pub fn get(&self, category: Category) -> &SelectorMap {
        match category {
            Category::Id => &self.ids,
            Category::Name => &self.names,
            Category::TestId => &self.test_ids,
            Category::Label => &self.labels,
            Category::FormField => &self.form_fields,
        }
    }

    /// Tables paired with their category, in write order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &SelectorMap)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total_entries(&self) -> usize {
        self.iter().map(|(_, map)| map.len()).sum()
    }
}
