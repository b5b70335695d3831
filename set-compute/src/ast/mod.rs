//! The expression and instruction tree handed over by the parser.
//!
//! Every node carries the span of source code it was parsed from, so that failures can be
//! rendered against the original text. Nodes built without source text use the span `0..0`.

pub mod expr;
pub mod instruction;
pub mod operator;

pub use expr::{Expr, List, Operation, Primitive, PrimitiveKind, RangeExpr, Reference};
pub use instruction::{DefineSet, EvaluateSet, Instruction, OperateSet};
pub use operator::{OperandPosition, Operator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A full program: the instructions to run, and optionally the source text they were parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Program {
    /// The source text, used to render error reports.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: Option<String>,

    /// The instructions, in execution order.
    pub instructions: Vec<Instruction>,
}
