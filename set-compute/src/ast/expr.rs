use super::operator::Operator;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The declared type of a primitive literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveKind {
    /// An integer literal, such as `1` or `42`.
    Integer,

    /// A letter, such as `a`.
    Letter,

    /// A symbol, such as `#`.
    Symbol,

    /// Free text.
    Text,
}

/// A literal element, such as `1`, `a` or `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Primitive {
    /// The literal as written in the source.
    pub value: String,

    /// The declared type of the literal.
    pub kind: PrimitiveKind,

    /// The region of the source code that this literal was parsed from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Range<usize>,
}

/// A range of elements given by their ordinal codes, such as `a~z`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeExpr {
    /// The first element of the range.
    pub start: Box<Expr>,

    /// The last element of the range, inclusive.
    pub end: Box<Expr>,

    /// The region of the source code that this range was parsed from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Range<usize>,
}

/// A reference to a named set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reference {
    /// The name of the set.
    pub name: String,

    /// The region of the source code that this reference was parsed from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Range<usize>,
}

/// A list of elements, such as `{1, 2, a~c}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct List {
    /// The members of the list.
    pub elements: Vec<Expr>,

    /// The region of the source code that this list was parsed from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Range<usize>,
}

/// A set operation in prefix form, such as `U {A} {B}` or `^ {A}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operation {
    /// The operator to apply.
    pub op: Operator,

    /// The first operand.
    pub lhs: Box<Expr>,

    /// The second operand. Unused by the complement operator.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rhs: Option<Box<Expr>>,

    /// The region of the source code that this operation was parsed from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Range<usize>,
}

/// Represents any kind of expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Primitive(Primitive),
    Range(RangeExpr),
    Reference(Reference),
    List(List),
    Operation(Operation),
}

impl Expr {
    /// Creates an integer literal.
    pub fn int(value: i64) -> Self {
        Self::Primitive(Primitive {
            value: value.to_string(),
            kind: PrimitiveKind::Integer,
            span: 0..0,
        })
    }

    /// Creates a letter literal.
    pub fn letter(value: char) -> Self {
        Self::Primitive(Primitive {
            value: value.to_string(),
            kind: PrimitiveKind::Letter,
            span: 0..0,
        })
    }

    /// Creates a reference to the named set.
    pub fn reference(name: &str) -> Self {
        Self::Reference(Reference { name: name.to_string(), span: 0..0 })
    }

    /// Creates a list of the given expressions.
    pub fn list(elements: impl IntoIterator<Item = Expr>) -> Self {
        Self::List(List { elements: elements.into_iter().collect(), span: 0..0 })
    }

    /// Creates an inclusive range between the two expressions.
    pub fn range(start: Expr, end: Expr) -> Self {
        Self::Range(RangeExpr { start: Box::new(start), end: Box::new(end), span: 0..0 })
    }

    /// Creates a binary operation.
    pub fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
        Self::Operation(Operation {
            op,
            lhs: Box::new(lhs),
            rhs: Some(Box::new(rhs)),
            span: 0..0,
        })
    }

    /// Creates the complement of the expression.
    pub fn complement(operand: Expr) -> Self {
        Self::Operation(Operation {
            op: Operator::Complement,
            lhs: Box::new(operand),
            rhs: None,
            span: 0..0,
        })
    }

    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Primitive(primitive) => primitive.span.clone(),
            Self::Range(range) => range.span.clone(),
            Self::Reference(reference) => reference.span.clone(),
            Self::List(list) => list.span.clone(),
            Self::Operation(operation) => operation.span.clone(),
        }
    }

    /// Returns every set reference reachable from this expression, in source order.
    pub fn references(&self) -> Vec<&Reference> {
        let mut references = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Self::Primitive(_) => (),
                Self::Reference(reference) => references.push(reference),
                Self::Range(range) => {
                    stack.push(&range.end);
                    stack.push(&range.start);
                },
                Self::List(list) => stack.extend(list.elements.iter().rev()),
                Self::Operation(operation) => {
                    if let Some(rhs) = &operation.rhs {
                        stack.push(rhs);
                    }
                    stack.push(&operation.lhs);
                },
            }
        }
        references
    }
}
