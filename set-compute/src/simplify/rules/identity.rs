//! Rewrites for the laws that collapse a repeated operand.

use crate::signature::{BinaryOp, Signature};

/// `U {X} {X} = X`, `& {X} {X} = X`, and the same for complemented operands.
pub fn idempotence(signature: &Signature) -> Option<Signature> {
    match signature {
        Signature::Binary(BinaryOp::Union | BinaryOp::Intersection, lhs, _) => Some((**lhs).clone()),
        _ => None,
    }
}

/// `- {X} {X} = VACIO`
pub fn self_difference(signature: &Signature) -> Option<Signature> {
    signature.as_binary(BinaryOp::Difference)?;
    Some(Signature::Empty)
}

/// `& U {X} {Y} {X} = X`
/// `U & {X} {Y} {X} = X`
///
/// The repeated operand is kept, whichever side the grouped operation is on.
pub fn absorption(signature: &Signature) -> Option<Signature> {
    let Signature::Binary(_, lhs, rhs) = signature else {
        return None;
    };

    if let Some(name) = lhs.as_set() {
        if rhs.operands().first() == Some(&name) {
            return Some(Signature::set(name));
        }
    }

    rhs.as_set().map(Signature::set)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn rewrite(rule: fn(&Signature) -> Option<Signature>, s: &str) -> String {
        rule(&s.parse().unwrap()).unwrap().to_string()
    }

    #[test]
    fn idempotent_operands() {
        assert_eq!(rewrite(idempotence, "U {A} {A}"), "A");
        assert_eq!(rewrite(idempotence, "& ^{A} ^{A}"), "^{A}");
    }

    #[test]
    fn self_difference_is_empty() {
        assert_eq!(rewrite(self_difference, "- {A} {A}"), "VACIO");
    }

    #[test]
    fn absorption_keeps_repeated_operand() {
        assert_eq!(rewrite(absorption, "& U {A} {B} {A}"), "A");
        assert_eq!(rewrite(absorption, "& {A} U {A} {B}"), "A");
        assert_eq!(rewrite(absorption, "U & {B} {C} {B}"), "B");
        assert_eq!(rewrite(absorption, "U {C} & {C} {D}"), "C");
    }
}
