use crate::error::UnrecognizedOperator;
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operators that can be applied to sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// Union, written `U`.
    #[cfg_attr(feature = "serde", serde(rename = "U"))]
    Union,

    /// Intersection, written `&`.
    #[cfg_attr(feature = "serde", serde(rename = "&"))]
    Intersection,

    /// Difference, written `-`.
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Difference,

    /// Complement against the universe, written `^`. This is the only unary operator.
    #[cfg_attr(feature = "serde", serde(rename = "^"))]
    Complement,
}

impl Operator {
    /// Returns true if the operator takes a single operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Complement)
    }

    /// Returns the symbol used to write the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Union => "U",
            Self::Intersection => "&",
            Self::Difference => "-",
            Self::Complement => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnrecognizedOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "U" => Ok(Self::Union),
            "&" => Ok(Self::Intersection),
            "-" => Ok(Self::Difference),
            "^" => Ok(Self::Complement),
            token => Err(UnrecognizedOperator { token: token.to_string() }),
        }
    }
}

/// The side of a binary operator that an operand is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandPosition {
    Left,
    Right,
}

impl fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}
