//! Classification of signatures by the set law that applies to them.
//!
//! Several laws can match the same signature (`U {A} ^{A}` is both a universe identity and a
//! commutative union), so the laws are tried in the fixed order given by [`Law::ALL`] and the
//! first match wins. Patterns are matched against named-set operands only; `X`, `Y` and `Z` below
//! stand for any set name.

use crate::{
    law::Law,
    signature::{BinaryOp, Signature},
};

/// Returns true if the signature is of the form `^^{X}`.
fn is_double_complemented_set(signature: &Signature) -> bool {
    signature
        .as_complement()
        .and_then(Signature::as_complemented_set)
        .is_some()
}

/// `^^{X}` anywhere in the signature.
fn double_complement(signature: &Signature) -> bool {
    let mut stack = vec![signature];
    while let Some(signature) = stack.pop() {
        if is_double_complemented_set(signature) {
            return true;
        }

        match signature {
            Signature::Set(_) | Signature::Empty | Signature::Universe => (),
            Signature::Complement(operand) => stack.push(operand),
            Signature::Binary(_, lhs, rhs) => {
                stack.push(rhs);
                stack.push(lhs);
            },
        }
    }
    false
}

/// `& {X} ^{X}`, `& ^^{X} ^{X}`
fn empty_complement(signature: &Signature) -> bool {
    let Some((lhs, rhs)) = signature.as_binary(BinaryOp::Intersection) else {
        return false;
    };
    let Some(complemented) = rhs.as_complemented_set() else {
        return false;
    };

    let lhs_name = lhs.as_set().or_else(|| {
        lhs.as_complement().and_then(Signature::as_complemented_set)
    });
    lhs_name == Some(complemented)
}

/// `U {X} ^{X}`
fn universe_complement(signature: &Signature) -> bool {
    signature
        .as_binary(BinaryOp::Union)
        .is_some_and(|(lhs, rhs)| lhs.as_set().is_some() && lhs.as_set() == rhs.as_complemented_set())
}

/// `U {X} {X}`, `& {X} {X}`, `U ^{X} ^{X}`, `& ^{X} ^{X}`
fn idempotence(signature: &Signature) -> bool {
    [BinaryOp::Union, BinaryOp::Intersection]
        .into_iter()
        .filter_map(|op| signature.as_binary(op))
        .any(|(lhs, rhs)| {
            let is_leaf = lhs.as_set().is_some() || lhs.as_complemented_set().is_some();
            is_leaf && lhs == rhs
        })
}

/// `- {X} {X}`
fn self_difference(signature: &Signature) -> bool {
    signature
        .as_binary(BinaryOp::Difference)
        .is_some_and(|(lhs, rhs)| lhs.as_set().is_some() && lhs == rhs)
}

/// Returns true if `outer` applied to `inner` forms an absorption: `outer inner {X} {Y} {X}` or
/// `outer {X} inner {X} {Y}`.
fn absorbs(signature: &Signature, outer: BinaryOp, inner: BinaryOp) -> bool {
    let Some((lhs, rhs)) = signature.as_binary(outer) else {
        return false;
    };

    let repeated = |group: &Signature, single: &Signature| {
        let Some(name) = single.as_set() else {
            return false;
        };
        group
            .as_binary(inner)
            .is_some_and(|(x, y)| x.as_set() == Some(name) && y.as_set().is_some())
    };

    repeated(lhs, rhs) || repeated(rhs, lhs)
}

/// `& U {X} {Y} {X}`, `& {X} U {X} {Y}`, `U & {X} {Y} {X}`, `U {X} & {X} {Y}`
fn absorption(signature: &Signature) -> bool {
    absorbs(signature, BinaryOp::Intersection, BinaryOp::Union)
        || absorbs(signature, BinaryOp::Union, BinaryOp::Intersection)
}

/// Returns true if the signature is a binary operation on two named sets.
fn is_simple_binary(signature: &Signature, op: BinaryOp) -> bool {
    signature
        .as_binary(op)
        .is_some_and(|(lhs, rhs)| lhs.as_set().is_some() && rhs.as_set().is_some())
}

/// `^ & {X} {Y}`, `^ U {X} {Y}`, and the already applied forms `U ^{X} ^{Y}`, `& ^{X} ^{Y}`
fn de_morgan(signature: &Signature) -> bool {
    let rewritable = signature.as_complement().is_some_and(|operand| {
        is_simple_binary(operand, BinaryOp::Intersection) || is_simple_binary(operand, BinaryOp::Union)
    });

    let applied = [BinaryOp::Union, BinaryOp::Intersection]
        .into_iter()
        .filter_map(|op| signature.as_binary(op))
        .any(|(lhs, rhs)| lhs.as_complemented_set().is_some() && rhs.as_complemented_set().is_some());

    rewritable || applied
}

/// `U {X} & {Y} {Z}`, `& U {X} {Y} U {X} {Z}`, `U & {X} {Y} {Z}`, `U & U {X} {Y} {Z} {X}`
fn distributive(signature: &Signature) -> bool {
    if let Some((lhs, rhs)) = signature.as_binary(BinaryOp::Union) {
        // U {X} & {Y} {Z}
        if lhs.as_set().is_some() && is_simple_binary(rhs, BinaryOp::Intersection) {
            return true;
        }

        // U & {X} {Y} {Z}
        if is_simple_binary(lhs, BinaryOp::Intersection) && rhs.as_set().is_some() {
            return true;
        }

        // U & U {X} {Y} {Z} {X}
        if let (Some((inner, z)), Some(x)) = (lhs.as_binary(BinaryOp::Intersection), rhs.as_set()) {
            if z.as_set().is_some() {
                if let Some((first, y)) = inner.as_binary(BinaryOp::Union) {
                    return first.as_set() == Some(x) && y.as_set().is_some();
                }
            }
        }
    }

    // & U {X} {Y} U {X} {Z}
    if let Some((lhs, rhs)) = signature.as_binary(BinaryOp::Intersection) {
        if is_simple_binary(lhs, BinaryOp::Union) && is_simple_binary(rhs, BinaryOp::Union) {
            return lhs.operands().first() == rhs.operands().first();
        }
    }

    false
}

/// `U {X} U {Y} {Z}`, `U U {X} {Y} {Z}`, `& {X} & {Y} {Z}`, `& & {X} {Y} {Z}`
fn associative(signature: &Signature) -> bool {
    [BinaryOp::Union, BinaryOp::Intersection]
        .into_iter()
        .any(|op| {
            signature.as_binary(op).is_some_and(|(lhs, rhs)| {
                (lhs.as_set().is_some() && is_simple_binary(rhs, op))
                    || (is_simple_binary(lhs, op) && rhs.as_set().is_some())
            })
        })
}

/// `U {X} {Y}`, `& {X} {Y}` with `X` different from `Y`
fn commutative(signature: &Signature) -> bool {
    [BinaryOp::Union, BinaryOp::Intersection]
        .into_iter()
        .filter_map(|op| signature.as_binary(op))
        .any(|(lhs, rhs)| {
            lhs.as_set().is_some() && rhs.as_set().is_some() && lhs != rhs
        })
}

/// Returns true if the signature has the shape of the given law.
pub fn matches(law: Law, signature: &Signature) -> bool {
    match law {
        Law::DoubleComplement => double_complement(signature),
        Law::EmptyComplement => empty_complement(signature),
        Law::UniverseComplement => universe_complement(signature),
        Law::Idempotence => idempotence(signature),
        Law::SelfDifference => self_difference(signature),
        Law::Absorption => absorption(signature),
        Law::DeMorgan => de_morgan(signature),
        Law::Distributive => distributive(signature),
        Law::Associative => associative(signature),
        Law::Commutative => commutative(signature),
    }
}

/// Returns the first law, in priority order, whose shape the signature has. Returns [`None`] if
/// the signature is not simplifiable.
pub fn detect(signature: &Signature) -> Option<Law> {
    Law::ALL.into_iter().find(|law| matches(*law, signature))
}
