//! Implementation of the rewrite for each set law.
//!
//! Each rule in this module is a function that takes the signature to rewrite as an argument, and
//! returns `Some(signature)` with the rewritten signature, or `None` if the signature does not
//! have the shape the rule expects. Rules assume the matcher has already classified the
//! signature, so they only inspect as much of it as they need to.

pub mod complement;
pub mod identity;
pub mod regroup;

use crate::{law::Law, signature::Signature, step_collector::StepCollector};

/// Rewrites the signature with the rule for the given law, recording the law as a step if the rule
/// applied.
pub fn apply(law: Law, signature: &Signature, step_collector: &mut dyn StepCollector<Law>) -> Option<Signature> {
    let rewritten = match law {
        Law::DoubleComplement => complement::double_complement(signature),
        Law::EmptyComplement => complement::empty_complement(signature),
        Law::UniverseComplement => complement::universe_complement(signature),
        Law::Idempotence => identity::idempotence(signature),
        Law::SelfDifference => identity::self_difference(signature),
        Law::Absorption => identity::absorption(signature),
        Law::DeMorgan => complement::de_morgan(signature),
        Law::Distributive => regroup::distributive(signature),
        Law::Associative => regroup::associative(signature),
        Law::Commutative => regroup::commutative(signature),
    }?;

    if rewritten == *signature {
        return None;
    }

    step_collector.push(law);
    Some(rewritten)
}
