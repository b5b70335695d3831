//! Rewrites for the laws involving complements.

use crate::signature::{BinaryOp, Signature};

/// `^^{X} = X`, applied to every occurrence in the signature.
pub fn double_complement(signature: &Signature) -> Option<Signature> {
    if let Some(name) = signature.as_complement().and_then(Signature::as_complemented_set) {
        return Some(Signature::set(name));
    }

    match signature {
        Signature::Set(_) | Signature::Empty | Signature::Universe => None,
        Signature::Complement(operand) => {
            double_complement(operand).map(Signature::complement)
        },
        Signature::Binary(op, lhs, rhs) => {
            let new_lhs = double_complement(lhs);
            let new_rhs = double_complement(rhs);
            if new_lhs.is_none() && new_rhs.is_none() {
                return None;
            }

            Some(Signature::binary(
                *op,
                new_lhs.unwrap_or_else(|| (**lhs).clone()),
                new_rhs.unwrap_or_else(|| (**rhs).clone()),
            ))
        },
    }
}

/// `& {X} ^{X} = VACIO`
pub fn empty_complement(signature: &Signature) -> Option<Signature> {
    signature.as_binary(BinaryOp::Intersection)?;
    Some(Signature::Empty)
}

/// `U {X} ^{X} = UNIVERSO`
pub fn universe_complement(signature: &Signature) -> Option<Signature> {
    signature.as_binary(BinaryOp::Union)?;
    Some(Signature::Universe)
}

/// `^ & {X} {Y} = U ^{X} ^{Y}`
/// `^ U {X} {Y} = & ^{X} ^{Y}`
///
/// The already applied forms `U ^{X} ^{Y}` and `& ^{X} ^{Y}` are returned unchanged.
pub fn de_morgan(signature: &Signature) -> Option<Signature> {
    let Some(operand) = signature.as_complement() else {
        return Some(signature.clone());
    };

    let (op, lhs, rhs) = match operand {
        Signature::Binary(BinaryOp::Intersection, lhs, rhs) => (BinaryOp::Union, lhs, rhs),
        Signature::Binary(BinaryOp::Union, lhs, rhs) => (BinaryOp::Intersection, lhs, rhs),
        _ => return None,
    };

    Some(Signature::binary(
        op,
        Signature::complement((**lhs).clone()),
        Signature::complement((**rhs).clone()),
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn rewrite(rule: fn(&Signature) -> Option<Signature>, s: &str) -> String {
        rule(&s.parse().unwrap()).unwrap().to_string()
    }

    #[test]
    fn double_complement_everywhere() {
        assert_eq!(rewrite(double_complement, "^^{A}"), "A");
        assert_eq!(rewrite(double_complement, "U ^^{A} & {B} ^^{C}"), "U {A} & {B} {C}");
        assert_eq!(rewrite(double_complement, "^^^^{A}"), "^^{A}");
    }

    #[test]
    fn identities() {
        assert_eq!(rewrite(empty_complement, "& {A} ^{A}"), "VACIO");
        assert_eq!(rewrite(universe_complement, "U {A} ^{A}"), "UNIVERSO");
    }

    #[test]
    fn de_morgan_pushes_complement_inward() {
        assert_eq!(rewrite(de_morgan, "^ & {A} {B}"), "U ^{A} ^{B}");
        assert_eq!(rewrite(de_morgan, "^ U {A} {B}"), "& ^{A} ^{B}");
        assert_eq!(rewrite(de_morgan, "U ^{A} ^{B}"), "U ^{A} ^{B}");
    }
}
