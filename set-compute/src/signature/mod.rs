//! Structural signatures of set operations.
//!
//! A [`Signature`] records the shape of an operation: which operators were applied, in which
//! order, to which named sets. It is what the law matcher inspects and what the simplifier
//! rewrites. Signatures are printed in prefix form, with set operands enclosed in braces:
//!
//! ```text
//! U {A} {B}
//! ^ & {A} {B}
//! U {A} & {B} {C}
//! ```
//!
//! A signature that consists of a single set prints as the bare name, such as `A`, unless the
//! name would read back as something else (`{VACIO}`, `{U}`). The result of
//! a simplification can also be one of the atoms `VACIO` (the empty set) or `UNIVERSO` (the
//! universe).

pub mod token;

use crate::{ast::Operator, error::InvalidSignature};
use std::{fmt, str::FromStr};
use token::{tokenize, tokenize_complete, Token, TokenKind};

/// The binary set operators that can appear in a [`Signature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Union,
    Intersection,
    Difference,
}

impl BinaryOp {
    /// Returns the symbol used to write the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Union => "U",
            Self::Intersection => "&",
            Self::Difference => "-",
        }
    }

    /// Returns the binary operator matching the given operator, or [`None`] for the complement.
    pub fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Union => Some(Self::Union),
            Operator::Intersection => Some(Self::Intersection),
            Operator::Difference => Some(Self::Difference),
            Operator::Complement => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The structure of a set operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Signature {
    /// A named set.
    Set(String),

    /// The empty set, written `VACIO`.
    Empty,

    /// The universe, written `UNIVERSO`.
    Universe,

    /// The complement of a signature, written `^` followed by the operand.
    Complement(Box<Signature>),

    /// A binary operation, written in prefix form.
    Binary(BinaryOp, Box<Signature>, Box<Signature>),
}

impl Signature {
    /// Creates a signature for the named set.
    pub fn set(name: &str) -> Self {
        Self::Set(name.to_string())
    }

    /// Creates the complement of the given signature.
    pub fn complement(operand: Signature) -> Self {
        Self::Complement(Box::new(operand))
    }

    /// Creates a binary operation on the given signatures.
    pub fn binary(op: BinaryOp, lhs: Signature, rhs: Signature) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Creates a union of the given signatures.
    pub fn union(lhs: Signature, rhs: Signature) -> Self {
        Self::binary(BinaryOp::Union, lhs, rhs)
    }

    /// Creates an intersection of the given signatures.
    pub fn intersection(lhs: Signature, rhs: Signature) -> Self {
        Self::binary(BinaryOp::Intersection, lhs, rhs)
    }

    /// Creates a difference of the given signatures.
    pub fn difference(lhs: Signature, rhs: Signature) -> Self {
        Self::binary(BinaryOp::Difference, lhs, rhs)
    }

    /// Returns the set name if this signature is a single named set.
    pub fn as_set(&self) -> Option<&str> {
        match self {
            Self::Set(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the operand of this signature if it is a complement.
    pub fn as_complement(&self) -> Option<&Signature> {
        match self {
            Self::Complement(operand) => Some(operand),
            _ => None,
        }
    }

    /// Returns the operands of this signature if it is a binary operation with the given
    /// operator.
    pub fn as_binary(&self, op: BinaryOp) -> Option<(&Signature, &Signature)> {
        match self {
            Self::Binary(actual, lhs, rhs) if *actual == op => Some((lhs, rhs)),
            _ => None,
        }
    }

    /// Returns the name of the set if this signature is the complement of a named set, `^{X}`.
    pub fn as_complemented_set(&self) -> Option<&str> {
        self.as_complement().and_then(Signature::as_set)
    }

    /// Returns the names of the sets in this signature, in the order they are written.
    pub fn operands(&self) -> Vec<&str> {
        let mut operands = Vec::new();
        let mut stack = vec![self];
        while let Some(signature) = stack.pop() {
            match signature {
                Self::Set(name) => operands.push(name.as_str()),
                Self::Empty | Self::Universe => (),
                Self::Complement(operand) => stack.push(operand),
                Self::Binary(_, lhs, rhs) => {
                    stack.push(rhs);
                    stack.push(lhs);
                },
            }
        }
        operands
    }

    /// Returns the number of tokens needed to write this signature: one per operator, set, and
    /// atom.
    pub fn token_count(&self) -> usize {
        match self {
            Self::Set(_) | Self::Empty | Self::Universe => 1,
            Self::Complement(operand) => 1 + operand.token_count(),
            Self::Binary(_, lhs, rhs) => 1 + lhs.token_count() + rhs.token_count(),
        }
    }

    /// Formats this signature in operand position, where named sets are enclosed in braces.
    fn fmt_operand(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Set(name) => write!(f, "{{{}}}", name),
            Self::Empty => write!(f, "VACIO"),
            Self::Universe => write!(f, "UNIVERSO"),
            Self::Complement(operand) => {
                write!(f, "^")?;
                if matches!(**operand, Self::Binary(..)) {
                    write!(f, " ")?;
                }
                operand.fmt_operand(f)
            },
            Self::Binary(op, lhs, rhs) => {
                write!(f, "{} ", op)?;
                lhs.fmt_operand(f)?;
                write!(f, " ")?;
                rhs.fmt_operand(f)
            },
        }
    }
}

/// Returns true if the name reads back as a single bare set name, and not as a keyword, an
/// operator, or several tokens.
fn is_bare_name(name: &str) -> bool {
    let mut lexer = tokenize(name);
    matches!(lexer.next(), Some(Ok(TokenKind::Name))) && lexer.span() == (0..name.len()) && lexer.next().is_none()
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Set(name) if is_bare_name(name) => write!(f, "{}", name),
            _ => self.fmt_operand(f),
        }
    }
}

/// Recursive-descent parser over the tokens of a textual signature.
struct SignatureParser<'source> {
    tokens: Vec<Token<'source>>,
    cursor: usize,
}

impl<'source> SignatureParser<'source> {
    fn new(input: &'source str) -> Self {
        Self { tokens: tokenize_complete(input), cursor: 0 }
    }

    fn next_token(&mut self) -> Option<&Token<'source>> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    fn parse(&mut self) -> Result<Signature, InvalidSignature> {
        let token = self.next_token()
            .cloned()
            .ok_or_else(|| InvalidSignature { reason: "unexpected end of signature".to_string() })?;

        match token.kind {
            TokenKind::Union => self.parse_binary(BinaryOp::Union),
            TokenKind::Intersection => self.parse_binary(BinaryOp::Intersection),
            TokenKind::Difference => self.parse_binary(BinaryOp::Difference),
            TokenKind::Complement => Ok(Signature::complement(self.parse()?)),
            TokenKind::Empty => Ok(Signature::Empty),
            TokenKind::Universe => Ok(Signature::Universe),
            TokenKind::Braced => {
                let name = token.lexeme[1..token.lexeme.len() - 1].trim();
                if name.is_empty() {
                    return Err(InvalidSignature {
                        reason: format!("empty set name at {}..{}", token.span.start, token.span.end),
                    });
                }
                Ok(Signature::set(name))
            },
            TokenKind::Name => Ok(Signature::set(token.lexeme)),
            TokenKind::Whitespace | TokenKind::Symbol => Err(InvalidSignature {
                reason: format!("unexpected `{}` at {}..{}", token.lexeme, token.span.start, token.span.end),
            }),
        }
    }

    fn parse_binary(&mut self, op: BinaryOp) -> Result<Signature, InvalidSignature> {
        let lhs = self.parse()?;
        let rhs = self.parse()?;
        Ok(Signature::binary(op, lhs, rhs))
    }

    fn finish(&self) -> Result<(), InvalidSignature> {
        match self.tokens.get(self.cursor) {
            Some(token) => Err(InvalidSignature {
                reason: format!("unexpected trailing `{}` at {}..{}", token.lexeme, token.span.start, token.span.end),
            }),
            None => Ok(()),
        }
    }
}

impl FromStr for Signature {
    type Err = InvalidSignature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = SignatureParser::new(s);
        let signature = parser.parse()?;
        parser.finish()?;
        Ok(signature)
    }
}
