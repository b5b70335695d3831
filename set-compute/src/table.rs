use crate::{
    law::Law,
    signature::Signature,
    simplify::{simplify_with, Simplification, SimplifyOptions},
    step_collector::StepCollector,
};
use indexmap::IndexMap;
use tracing::debug;

/// Simplifies the signature, logging the result.
fn simplify_logged(
    name: &str,
    signature: &Signature,
    options: SimplifyOptions,
    step_collector: &mut dyn StepCollector<Law>,
) -> Simplification {
    let simplification = simplify_with(signature, options, step_collector);
    debug!(
        name,
        original = %simplification.original,
        simplified = %simplification.simplified,
        laws = simplification.laws.len(),
        "stored simplification",
    );
    simplification
}

/// The simplifications computed during a run, keyed by operation name, in the order they were
/// last computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimplificationTable {
    entries: IndexMap<String, Simplification>,
}

impl SimplificationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simplifies the signature of the named operation and stores the result, returning it along
    /// with whether it was recomputed.
    ///
    /// A cached simplification is only replaced if the new signature is written with strictly
    /// more characters than the cached original signature. Otherwise the cached result is kept and
    /// returned. A replaced simplification moves to the end of the table.
    pub fn simplify(
        &mut self,
        name: &str,
        signature: &Signature,
        options: SimplifyOptions,
        step_collector: &mut dyn StepCollector<Law>,
    ) -> (&Simplification, bool) {
        if let Some(index) = self.entries.get_index_of(name) {
            let cached_len = self.entries[index].original.to_string().len();
            if signature.to_string().len() <= cached_len {
                debug!(name, %signature, "kept cached simplification");
                return (&self.entries[index], false);
            }
            self.entries.shift_remove_index(index);
        }

        let simplification = simplify_logged(name, signature, options, step_collector);
        let (index, _) = self.entries.insert_full(name.to_string(), simplification);
        (&self.entries[index], true)
    }

    /// Returns the simplification stored for the named operation.
    pub fn get(&self, name: &str) -> Option<&Simplification> {
        self.entries.get(name)
    }

    /// Returns an iterator over the stored simplifications, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Simplification)> {
        self.entries.iter().map(|(name, simplification)| (name.as_str(), simplification))
    }

    /// Returns the number of stored simplifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no simplification is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every stored simplification.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn sig(s: &str) -> Signature {
        s.parse().unwrap()
    }

    #[test]
    fn resimplifying_shorter_keeps_cache() {
        let mut table = SimplificationTable::new();
        let options = SimplifyOptions::default();

        let (first, recomputed) = table.simplify("X", &sig("U {A} {B}"), options, &mut ());
        assert!(recomputed);
        assert_eq!(first.simplified, sig("U {B} {A}"));

        // the simplified form is the same length, so the swap is not applied again
        let (second, recomputed) = table.simplify("X", &sig("U {B} {A}"), options, &mut ());
        assert!(!recomputed);
        assert_eq!(second.simplified, sig("U {B} {A}"));
        assert_eq!(second.laws, vec![Law::Commutative]);
    }

    #[test]
    fn longer_signature_replaces() {
        let mut table = SimplificationTable::new();
        let options = SimplifyOptions::default();

        table.simplify("X", &sig("U {A} {B}"), options, &mut ());
        let (entry, recomputed) = table.simplify("X", &sig("U {A} & {B} {C}"), options, &mut ());
        assert!(recomputed);
        assert_eq!(entry.original, sig("U {A} & {B} {C}"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn replaced_entry_moves_to_end() {
        let mut table = SimplificationTable::new();
        let options = SimplifyOptions::default();

        table.simplify("Z", &sig("U {A} {A}"), options, &mut ());
        table.simplify("A", &sig("- {A} {A}"), options, &mut ());
        table.simplify("Z", &sig("U {A} & {B} {C}"), options, &mut ());

        let names = table.iter().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "Z"]);
        assert_eq!(table.get("Z").unwrap().original, sig("U {A} & {B} {C}"));
    }

    #[test]
    fn kept_entry_stays_in_place() {
        let mut table = SimplificationTable::new();
        let options = SimplifyOptions::default();

        table.simplify("Z", &sig("U {A} {B}"), options, &mut ());
        table.simplify("A", &sig("- {A} {A}"), options, &mut ());
        table.simplify("Z", &sig("U {B} {A}"), options, &mut ());

        let names = table.iter().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Z", "A"]);
    }
}
