//! Module to simplify operation signatures.
//!
//! This module provides the [`simplify`] function, which repeatedly detects the set law that
//! applies to a signature and rewrites the signature with it, until no law applies or the
//! rewrite stops making progress.
//!
//! Some laws undo each other (factoring a distributed signature gives back the original, and
//! swapping the operands of a union twice does too), so the loop also stops when it detects that
//! it is cycling:
//!
//! - a direct law ([`Law::is_direct`]) stops the loop if it fired on the previous pass as well,
//! - a commutative rewrite always stops the loop,
//! - any other law stops the loop if it fired on the previous pass and more than one law has been
//!   recorded.
//!
//! Every pass is bounded by [`SimplifyOptions::max_iterations`].

pub mod rules;

use crate::{
    law::{Law, NOT_SIMPLIFIABLE},
    matcher,
    signature::Signature,
    step_collector::StepCollector,
};
use tracing::{debug, trace};

/// The default maximum number of passes of the simplifier.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Options for the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// The maximum number of rewrite passes.
    pub max_iterations: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self { max_iterations: DEFAULT_MAX_ITERATIONS }
    }
}

impl SimplifyOptions {
    /// Wraps the given [`SimplifyOptions`] into a builder for further customization.
    pub fn into_builder(self) -> SimplifyOptionsBuilder {
        SimplifyOptionsBuilder(self)
    }
}

/// A builder for [`SimplifyOptions`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyOptionsBuilder(SimplifyOptions);

impl SimplifyOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of rewrite passes.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }

    /// Builds the options.
    pub fn build(self) -> SimplifyOptions {
        self.0
    }
}

/// The result of simplifying a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simplification {
    /// The signature before simplification.
    pub original: Signature,

    /// The signature after simplification.
    pub simplified: Signature,

    /// The laws applied, in order.
    pub laws: Vec<Law>,
}

impl Simplification {
    /// Returns true if no law could be applied.
    pub fn is_trivial(&self) -> bool {
        self.laws.is_empty()
    }

    /// Returns the titles of the laws applied, in order, or the single marker
    /// `"No simplificable"` if no law was applied.
    pub fn law_titles(&self) -> Vec<String> {
        if self.laws.is_empty() {
            return vec![NOT_SIMPLIFIABLE.to_string()];
        }

        self.laws.iter().map(|law| law.title().to_string()).collect()
    }
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with(
    signature: &Signature,
    options: SimplifyOptions,
    step_collector: &mut dyn StepCollector<Law>,
) -> (Signature, Vec<Law>) {
    let mut current = signature.clone();
    let mut laws = Vec::new();
    let mut previous = None;

    for _ in 0..options.max_iterations {
        let Some(law) = matcher::detect(&current) else {
            trace!(signature = %current, "no law applies");
            break;
        };

        let Some(rewritten) = rules::apply(law, &current, step_collector) else {
            trace!(signature = %current, ?law, "rewrite made no progress");
            break;
        };

        debug!(from = %current, to = %rewritten, ?law, "applied law");
        current = rewritten;
        laws.push(law);

        let cycling = if law.is_direct() {
            previous == Some(law)
        } else {
            law == Law::Commutative || (previous == Some(law) && laws.len() > 1)
        };
        if cycling {
            break;
        }

        previous = Some(law);
    }

    (current, laws)
}

/// Simplifies the given signature with the default options.
pub fn simplify(signature: &Signature) -> Simplification {
    simplify_with(signature, SimplifyOptions::default(), &mut ())
}

/// Simplifies the given signature with the given options. The laws applied are also pushed into
/// the given step collector as they are applied.
pub fn simplify_with(
    signature: &Signature,
    options: SimplifyOptions,
    step_collector: &mut dyn StepCollector<Law>,
) -> Simplification {
    let (simplified, laws) = inner_simplify_with(signature, options, step_collector);
    Simplification {
        original: signature.clone(),
        simplified,
        laws,
    }
}

/// Simplifies the given signature with the default options, returning the simplified signature
/// and the steps taken.
pub fn simplify_with_steps(signature: &Signature) -> (Signature, Vec<Law>) {
    let mut steps = Vec::new();
    let simplified = inner_simplify_with(signature, SimplifyOptions::default(), &mut steps).0;
    (simplified, steps)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplify_str(s: &str) -> (String, Vec<String>) {
        let simplification = simplify(&s.parse().unwrap());
        (simplification.simplified.to_string(), simplification.law_titles())
    }

    fn titles(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|title| title.to_string()).collect()
    }

    #[test]
    fn double_complement() {
        assert_eq!(simplify_str("^^{A}"), ("A".to_string(), titles(&["Ley del Doble Complemento"])));
    }

    #[test]
    fn self_difference() {
        assert_eq!(simplify_str("- {A} {A}"), ("VACIO".to_string(), titles(&["Ley de Diferencia Propia"])));
    }

    #[test]
    fn complement_identities() {
        assert_eq!(simplify_str("U {A} ^{A}"), ("UNIVERSO".to_string(), titles(&["Ley del Complemento Total"])));
        assert_eq!(simplify_str("& {A} ^{A}"), ("VACIO".to_string(), titles(&["Ley del Complemento Total"])));
    }

    #[test]
    fn idempotence() {
        assert_eq!(simplify_str("U {A} {A}"), ("A".to_string(), titles(&["Propiedades Idempotentes"])));
    }

    #[test]
    fn absorption() {
        assert_eq!(simplify_str("& U {A} {B} {A}"), ("A".to_string(), titles(&["Propiedades de Absorción"])));
    }

    #[test]
    fn commutative_swaps_once() {
        assert_eq!(simplify_str("U {A} {B}"), ("U {B} {A}".to_string(), titles(&["Propiedades Conmutativas"])));
    }

    #[test]
    fn de_morgan_applies_once() {
        assert_eq!(simplify_str("^ & {A} {B}"), ("U ^{A} ^{B}".to_string(), titles(&["Leyes de De Morgan"])));
    }

    #[test]
    fn distributive_cycle_stops() {
        assert_eq!(
            simplify_str("U {A} & {B} {C}"),
            ("U {A} & {B} {C}".to_string(), titles(&["Propiedades Distributivas", "Propiedades Distributivas"])),
        );
    }

    #[test]
    fn associative_cycle_stops() {
        assert_eq!(
            simplify_str("U {A} U {B} {C}"),
            ("U {A} U {B} {C}".to_string(), titles(&["Propiedades Asociativas", "Propiedades Asociativas"])),
        );
    }

    #[test]
    fn double_complement_then_commutative() {
        assert_eq!(
            simplify_str("U ^^{A} {B}"),
            ("U {B} {A}".to_string(), titles(&["Ley del Doble Complemento", "Propiedades Conmutativas"])),
        );
    }

    #[test]
    fn not_simplifiable() {
        assert_eq!(simplify_str("- {A} {B}"), ("- {A} {B}".to_string(), titles(&["No simplificable"])));
    }

    #[test]
    fn iteration_cap() {
        let options = SimplifyOptionsBuilder::new().max_iterations(1).build();
        let simplification = simplify_with(&"U {A} & {B} {C}".parse().unwrap(), options, &mut ());
        assert_eq!(simplification.simplified.to_string(), "& U {A} {B} U {A} {C}");
        assert_eq!(simplification.laws, vec![Law::Distributive]);

        let zero = SimplifyOptionsBuilder::new().max_iterations(0).build();
        assert!(simplify_with(&"U {A} {A}".parse().unwrap(), zero, &mut ()).is_trivial());
    }

    #[test]
    fn steps_are_collected() {
        let (simplified, steps) = simplify_with_steps(&"^^{A}".parse().unwrap());
        assert_eq!(simplified, Signature::set("A"));
        assert_eq!(steps, vec![Law::DoubleComplement]);
    }
}
