//! Error kinds reported while evaluating set expressions and instructions.

use ariadne::Fmt;
use crate::ast::{OperandPosition, Operator};
use set_attrs::ErrorKind;
use set_error::{ErrorKind, EXPR};

pub use set_error::Error;

/// The referenced set has not been defined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the set `{}` is not defined", self.name),
    labels = ["this set"],
    help = if self.suggestions.is_empty() {
        format!("to define it, type: {} = {}", (&self.name).fg(EXPR), "{1, 2, 3}".fg(EXPR))
    } else if self.suggestions.len() == 1 {
        format!("did you mean the set `{}`?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these sets? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UndefinedSet {
    /// The name of the set that was not found.
    pub name: String,

    /// Defined sets with a name similar to the missing one.
    pub suggestions: Vec<String>,
}

/// The operation to evaluate against has not been stored by a previous operation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the operation `{}` is not defined", self.name),
    labels = ["this operation"],
    help = format!("define the operation first, for example: {}", format!("OPERA : {} -> U {{A}} {{B}}", self.name).fg(EXPR)),
)]
pub struct UndefinedOperation {
    /// The name of the missing operation.
    pub name: String,
}

/// An operand of a set operator did not evaluate to a set.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply the `{}` operator to this operand", self.operator),
    labels = [format!("the {} operand has type `{}`", self.position, self.given)],
    help = format!("the operand must be a `{}`, such as a set reference or another operation", self.expected),
)]
pub struct TypeMismatch {
    /// The operator being applied.
    pub operator: Operator,

    /// The type the operator expected.
    pub expected: &'static str,

    /// The type the operand evaluated to.
    pub given: &'static str,

    /// Which side of the operator the operand was on.
    pub position: OperandPosition,
}

/// A range could not be built from its bounds.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid range",
    labels = [&self.reason],
    help = "range bounds must be characters or integer codes, with the start not greater than the end",
)]
pub struct InvalidRange {
    /// Why the range is invalid.
    pub reason: String,
}

/// The given text is not one of the set operators.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized operator `{}`", self.token),
    labels = ["this operator"],
    help = format!("the available operators are: {}, {}, {} and {}", "U".fg(EXPR), "&".fg(EXPR), "-".fg(EXPR), "^".fg(EXPR)),
)]
pub struct UnrecognizedOperator {
    /// The text that was found.
    pub token: String,
}

/// A binary operator was given only one operand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` operator requires two operands", self.operator),
    labels = ["this operation"],
    help = "only the complement operator `^` takes a single operand",
)]
pub struct MissingOperand {
    /// The operator missing its right operand.
    pub operator: Operator,
}

/// A textual signature could not be parsed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid operation signature",
    labels = [&self.reason],
    help = format!("signatures are written in prefix form, for example: {}", "U {A} & {B} {C}".fg(EXPR)),
)]
pub struct InvalidSignature {
    /// What was wrong with the signature.
    pub reason: String,
}

/// An operation instruction was given an expression that is not a set operation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a set operation",
    labels = [format!("this expression has type `{}`", self.given)],
    help = format!("write the operation in prefix form, for example: {}", "U {A} {B}".fg(EXPR)),
)]
pub struct ExpectedOperation {
    /// The type the expression evaluated to.
    pub given: &'static str,
}
