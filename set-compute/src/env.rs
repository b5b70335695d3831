use crate::{
    element::{self, Element, ElementSet},
    error::UndefinedSet,
};
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::trace;

/// The code of the first character of the default universe, `'!'`.
pub const ASCII_START: u32 = 33;

/// The code of the last character of the default universe, `'~'`.
pub const ASCII_END: u32 = 126;

/// The default universe: every printable ASCII character from `'!'` to `'~'`.
pub static DEFAULT_UNIVERSE: Lazy<ElementSet> = Lazy::new(|| {
    (ASCII_START..=ASCII_END)
        .filter_map(char::from_u32)
        .map(Element::from_char)
        .collect()
});

/// The state of a running program: the universe, the named sets, and counters used for reporting.
#[derive(Debug, Clone)]
pub struct Environment {
    /// The set that complements are computed against.
    universe: ElementSet,

    /// The named sets.
    sets: HashMap<String, ElementSet>,

    /// The number of set operations computed so far.
    operation_count: usize,

    /// The number of distinct names defined so far.
    total_sets: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            universe: DEFAULT_UNIVERSE.clone(),
            sets: HashMap::new(),
            operation_count: 0,
            total_sets: 0,
        }
    }
}

impl Environment {
    /// Creates a new environment with the default universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a copy of the given set under `name`, replacing any previous set with that name.
    /// Elements are stored in normalized form. Returns true if the name was not defined before.
    pub fn define(&mut self, name: &str, elements: ElementSet) -> bool {
        let elements = elements.into_iter().map(Element::normalized).collect();
        let new = self.sets.insert(name.to_string(), elements).is_none();
        if new {
            self.total_sets += 1;
        }
        trace!(name, new, "defined set");
        new
    }

    /// Returns a copy of the named set.
    pub fn lookup(&self, name: &str) -> Result<ElementSet, UndefinedSet> {
        self.sets.get(name).cloned().ok_or_else(|| UndefinedSet {
            name: name.to_string(),
            suggestions: self.similar_sets(name),
        })
    }

    /// Returns a reference to the named set, if it exists.
    pub fn get(&self, name: &str) -> Option<&ElementSet> {
        self.sets.get(name)
    }

    /// Returns true if a set with the given name exists.
    pub fn exists(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Returns the names of all defined sets with a name similar to the given name, sorted.
    pub fn similar_sets(&self, name: &str) -> Vec<String> {
        let mut similar = self.sets
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .cloned()
            .collect::<Vec<_>>();
        similar.sort();
        similar
    }

    /// Returns the union of the two sets.
    pub fn union(&mut self, a: &ElementSet, b: &ElementSet) -> ElementSet {
        self.operation_count += 1;
        a.union(b).cloned().collect()
    }

    /// Returns the intersection of the two sets.
    pub fn intersect(&mut self, a: &ElementSet, b: &ElementSet) -> ElementSet {
        self.operation_count += 1;
        a.intersection(b).cloned().collect()
    }

    /// Returns the elements of `a` that are not in `b`.
    pub fn difference(&mut self, a: &ElementSet, b: &ElementSet) -> ElementSet {
        self.operation_count += 1;
        a.difference(b).cloned().collect()
    }

    /// Returns the elements of the universe that are not in the set.
    pub fn complement(&mut self, set: &ElementSet) -> ElementSet {
        self.operation_count += 1;
        self.universe.difference(set).cloned().collect()
    }

    /// Returns true if the set contains the element, comparing normalized forms.
    pub fn contains(&self, set: &ElementSet, element: &Element) -> bool {
        set.contains(&element.clone().normalized())
    }

    /// Formats a set for display.
    pub fn format_set(&self, set: &ElementSet) -> String {
        element::format_set(set)
    }

    /// Returns the number of set operations computed so far.
    pub fn operation_count(&self) -> usize {
        self.operation_count
    }

    /// Returns the number of distinct set names defined so far.
    pub fn total_sets(&self) -> usize {
        self.total_sets
    }

    /// Returns the universe.
    pub fn universe(&self) -> &ElementSet {
        &self.universe
    }

    /// Adds the given elements to the universe.
    pub fn add_to_universe(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.universe.extend(elements.into_iter().map(Element::normalized));
    }

    /// Returns a description of the universe.
    pub fn universe_info(&self) -> String {
        format!(
            "Universo ASCII ({start}-{end}): De '!' ({start}) hasta '~' ({end})\nTotal de elementos: {}",
            self.universe.len(),
            start = ASCII_START,
            end = ASCII_END,
        )
    }

    /// Returns an iterator over the named sets, in no particular order.
    pub fn sets(&self) -> impl Iterator<Item = (&str, &ElementSet)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Clears every set and counter, and restores the default universe.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
