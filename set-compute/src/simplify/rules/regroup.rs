//! Rewrites for the laws that rearrange operands without removing any: distributivity,
//! associativity and commutativity.

use crate::signature::{BinaryOp, Signature};

/// Distributes or factors a union over an intersection:
///
/// - `U {X} & {Y} {Z} = & U {X} {Y} U {X} {Z}`
/// - `& U {X} {Y} U {X} {Z} = U {X} & {Y} {Z}`
/// - `U & U {X} {Y} {Z} {X} = U & {Z} {Y} {X}`
///
/// `U & {X} {Y} {Z}` is already distributed and is returned unchanged.
pub fn distributive(signature: &Signature) -> Option<Signature> {
    if let Some((lhs, rhs)) = signature.as_binary(BinaryOp::Intersection) {
        let (x, y) = lhs.as_binary(BinaryOp::Union)?;
        let (_, z) = rhs.as_binary(BinaryOp::Union)?;
        return Some(Signature::union(
            x.clone(),
            Signature::intersection(y.clone(), z.clone()),
        ));
    }

    let (lhs, rhs) = signature.as_binary(BinaryOp::Union)?;

    if let Some((y, z)) = rhs.as_binary(BinaryOp::Intersection) {
        return Some(Signature::intersection(
            Signature::union(lhs.clone(), y.clone()),
            Signature::union(lhs.clone(), z.clone()),
        ));
    }

    let (inner, z) = lhs.as_binary(BinaryOp::Intersection)?;
    match inner.as_binary(BinaryOp::Union) {
        Some((x, y)) => Some(Signature::union(
            Signature::intersection(z.clone(), y.clone()),
            x.clone(),
        )),
        None => Some(signature.clone()),
    }
}

/// `U {X} U {Y} {Z} = U U {X} {Y} {Z}` and back, and the same for intersections.
pub fn associative(signature: &Signature) -> Option<Signature> {
    let Signature::Binary(op, lhs, rhs) = signature else {
        return None;
    };

    if let Some((y, z)) = rhs.as_binary(*op) {
        return Some(Signature::binary(
            *op,
            Signature::binary(*op, (**lhs).clone(), y.clone()),
            z.clone(),
        ));
    }

    let (x, y) = lhs.as_binary(*op)?;
    Some(Signature::binary(
        *op,
        x.clone(),
        Signature::binary(*op, y.clone(), (**rhs).clone()),
    ))
}

/// `U {X} {Y} = U {Y} {X}`, `& {X} {Y} = & {Y} {X}`
pub fn commutative(signature: &Signature) -> Option<Signature> {
    let Signature::Binary(op, lhs, rhs) = signature else {
        return None;
    };
    Some(Signature::binary(*op, (**rhs).clone(), (**lhs).clone()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn rewrite(rule: fn(&Signature) -> Option<Signature>, s: &str) -> String {
        rule(&s.parse().unwrap()).unwrap().to_string()
    }

    #[test]
    fn distribute_and_factor() {
        assert_eq!(rewrite(distributive, "U {A} & {B} {C}"), "& U {A} {B} U {A} {C}");
        assert_eq!(rewrite(distributive, "& U {A} {B} U {A} {C}"), "U {A} & {B} {C}");
        assert_eq!(rewrite(distributive, "U & U {A} {B} {C} {A}"), "U & {C} {B} {A}");
        assert_eq!(rewrite(distributive, "U & {A} {B} {C}"), "U & {A} {B} {C}");
    }

    #[test]
    fn regroup() {
        assert_eq!(rewrite(associative, "U {A} U {B} {C}"), "U U {A} {B} {C}");
        assert_eq!(rewrite(associative, "U U {A} {B} {C}"), "U {A} U {B} {C}");
        assert_eq!(rewrite(associative, "& {A} & {B} {C}"), "& & {A} {B} {C}");
    }

    #[test]
    fn swap() {
        assert_eq!(rewrite(commutative, "U {A} {B}"), "U {B} {A}");
        assert_eq!(rewrite(commutative, "& {X} {Y}"), "& {Y} {X}");
    }
}
