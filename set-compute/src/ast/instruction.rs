use super::expr::Expr;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines a named set from an expression, such as `CONJ : A -> {1, 2, 3}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DefineSet {
    /// The name of the set to define.
    pub name: String,

    /// The expression whose elements make up the set.
    pub expr: Expr,

    /// The region of the source code that this instruction was parsed from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Range<usize>,
}

/// Computes a set operation, stores its result, and simplifies its signature, such as
/// `OPERA : X -> U {A} {B}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperateSet {
    /// The name the result is stored under.
    pub name: String,

    /// The operation to compute.
    pub expr: Expr,

    /// The region of the source code that this instruction was parsed from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Range<usize>,
}

/// Tests elements for membership in the result of a stored operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluateSet {
    /// The elements to test, in order.
    pub elements: Vec<Expr>,

    /// The name of the stored operation.
    pub operation: String,

    /// The region of the source code that this instruction was parsed from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Range<usize>,
}

/// A top-level instruction of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Instruction {
    DefineSet(DefineSet),
    OperateSet(OperateSet),
    EvaluateSet(EvaluateSet),
}

impl Instruction {
    /// Creates a [`DefineSet`] instruction.
    pub fn define(name: &str, expr: Expr) -> Self {
        Self::DefineSet(DefineSet { name: name.to_string(), expr, span: 0..0 })
    }

    /// Creates an [`OperateSet`] instruction.
    pub fn operate(name: &str, expr: Expr) -> Self {
        Self::OperateSet(OperateSet { name: name.to_string(), expr, span: 0..0 })
    }

    /// Creates an [`EvaluateSet`] instruction.
    pub fn evaluate(elements: impl IntoIterator<Item = Expr>, operation: &str) -> Self {
        Self::EvaluateSet(EvaluateSet {
            elements: elements.into_iter().collect(),
            operation: operation.to_string(),
            span: 0..0,
        })
    }

    /// Returns the span of the instruction.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::DefineSet(define) => define.span.clone(),
            Self::OperateSet(operate) => operate.span.clone(),
            Self::EvaluateSet(evaluate) => evaluate.span.clone(),
        }
    }
}
