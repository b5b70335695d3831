use crate::{
    element::{format_set, Element, ElementSet},
    signature::Signature,
    simplify::Simplification,
};
use std::fmt;

/// Whether a tested element belongs to the result of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    /// The element that was tested.
    pub element: Element,

    /// True if the element belongs to the set.
    pub member: bool,
}

/// The result of successfully executing an instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A set was defined.
    Defined {
        /// The name of the set.
        name: String,

        /// The elements of the set.
        set: ElementSet,

        /// True if the name was not defined before.
        new: bool,
    },

    /// An operation was computed and its result stored.
    Operated {
        /// The name the result was stored under.
        name: String,

        /// The resulting set.
        set: ElementSet,

        /// The canonical signature of the operation.
        signature: Signature,

        /// The simplification of the operation, possibly cached from an earlier instruction. A
        /// bare reference to a set applies no operator, so it is not simplified.
        simplification: Option<Simplification>,
    },

    /// Elements were tested for membership in the result of an operation.
    Evaluated {
        /// The name of the operation.
        operation: String,

        /// One verdict per tested element, in order.
        memberships: Vec<Membership>,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Defined { name, set, .. } => write!(f, "{} = {}", name, format_set(set)),
            Outcome::Operated { name, set, simplification, .. } => {
                write!(f, "{} = {}", name, format_set(set))?;
                let Some(simplification) = simplification else {
                    return Ok(());
                };
                write!(
                    f,
                    "\n  {} => {} [{}]",
                    simplification.original,
                    simplification.simplified,
                    simplification.law_titles().join(", "),
                )
            },
            Outcome::Evaluated { operation, memberships } => {
                let verdicts = memberships.iter()
                    .map(|membership| {
                        let symbol = if membership.member { "∈" } else { "∉" };
                        format!("{} {} {}", membership.element, symbol, operation)
                    })
                    .collect::<Vec<_>>();
                write!(f, "{}", verdicts.join("\n"))
            },
        }
    }
}
