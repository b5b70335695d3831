//! Evaluation of expressions against an [`Environment`].

pub mod trace;
pub mod value;

use crate::{
    ast::{Expr, List, OperandPosition, Operation, Primitive, PrimitiveKind, RangeExpr, Reference},
    element::{Element, ElementSet},
    env::Environment,
    error::{Error, InvalidRange, MissingOperand, TypeMismatch},
    signature::{BinaryOp, Signature},
};

pub use trace::{OperationRecord, OperationTrace};
pub use value::Value;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given environment.
    fn eval(&self, env: &mut Environment) -> Result<Value, Error>;
}

impl Eval for Primitive {
    fn eval(&self, _: &mut Environment) -> Result<Value, Error> {
        let element = match self.kind {
            PrimitiveKind::Integer => self.value
                .trim()
                .parse::<i64>()
                .map(Element::from_int)
                .unwrap_or_else(|_| Element::from_text(&self.value)),
            PrimitiveKind::Letter | PrimitiveKind::Symbol | PrimitiveKind::Text => {
                Element::from_text(&self.value)
            },
        };
        Ok(Value::Element(element))
    }
}

/// Evaluates a bound of a range to its ordinal code.
fn range_bound(expr: &Expr, env: &mut Environment) -> Result<i64, Error> {
    let invalid = |reason: String| Error::new(vec![expr.span()], InvalidRange { reason });

    match expr.eval(env)? {
        Value::Element(element) => element
            .ordinal()
            .ok_or_else(|| invalid(format!("`{}` cannot be converted to a character code", element))),
        other => Err(invalid(format!("a range bound must be a single element, found a `{}`", other.typename()))),
    }
}

impl Eval for RangeExpr {
    fn eval(&self, env: &mut Environment) -> Result<Value, Error> {
        let start = range_bound(&self.start, env)?;
        let end = range_bound(&self.end, env)?;

        if start > end {
            return Err(Error::new(
                vec![self.start.span(), self.end.span()],
                InvalidRange {
                    reason: format!("the start ({}) is greater than the end ({})", start, end),
                },
            ));
        }

        let elements = env.universe()
            .iter()
            .filter(|element| element.ordinal().is_some_and(|code| (start..=end).contains(&code)))
            .cloned()
            .collect();
        Ok(Value::Range(elements))
    }
}

impl Eval for Reference {
    fn eval(&self, env: &mut Environment) -> Result<Value, Error> {
        env.lookup(&self.name)
            .map(Value::Set)
            .map_err(|err| Error::new(vec![self.span.clone()], err))
    }
}

impl Eval for List {
    fn eval(&self, env: &mut Environment) -> Result<Value, Error> {
        let mut elements = Vec::new();
        for expr in &self.elements {
            elements.extend(expr.eval(env)?.into_elements());
        }
        Ok(Value::List(elements))
    }
}

/// Evaluates an operand of an operator, which must be a set: either a reference to a named set or
/// another operation.
fn eval_operand(
    expr: &Expr,
    operator: &Operation,
    position: OperandPosition,
    env: &mut Environment,
    trace: &mut OperationTrace,
) -> Result<(ElementSet, Signature), Error> {
    match expr {
        Expr::Operation(operation) => operation.eval_traced(env, trace),
        Expr::Reference(reference) => {
            let set = env.lookup(&reference.name)
                .map_err(|err| Error::new(vec![reference.span.clone()], err))?;
            Ok((set, Signature::set(&reference.name)))
        },
        other => {
            let value = other.eval(env)?;
            Err(Error::new(
                vec![other.span()],
                TypeMismatch {
                    operator: operator.op,
                    expected: "set",
                    given: value.typename(),
                    position,
                },
            ))
        },
    }
}

impl Operation {
    /// Evaluates the operation, returning the resulting set along with the operation's signature.
    ///
    /// Every operator application, including those of nested operations, is recorded into the
    /// given trace.
    pub fn eval_traced(
        &self,
        env: &mut Environment,
        trace: &mut OperationTrace,
    ) -> Result<(ElementSet, Signature), Error> {
        let (lhs, lhs_signature) = eval_operand(&self.lhs, self, OperandPosition::Left, env, trace)?;

        let (set, signature) = match BinaryOp::from_operator(self.op) {
            None => (env.complement(&lhs), Signature::complement(lhs_signature)),
            Some(op) => {
                let rhs_expr = self.rhs.as_ref().ok_or_else(|| {
                    Error::new(vec![self.span.clone()], MissingOperand { operator: self.op })
                })?;
                let (rhs, rhs_signature) = eval_operand(rhs_expr, self, OperandPosition::Right, env, trace)?;

                let set = match op {
                    BinaryOp::Union => env.union(&lhs, &rhs),
                    BinaryOp::Intersection => env.intersect(&lhs, &rhs),
                    BinaryOp::Difference => env.difference(&lhs, &rhs),
                };
                (set, Signature::binary(op, lhs_signature, rhs_signature))
            },
        };

        tracing::trace!(%signature, size = set.len(), "evaluated operation");
        trace.record(self.op, &signature);
        Ok((set, signature))
    }
}

impl Eval for Operation {
    fn eval(&self, env: &mut Environment) -> Result<Value, Error> {
        self.eval_traced(env, &mut OperationTrace::new())
            .map(|(set, _)| Value::Set(set))
    }
}

impl Eval for Expr {
    fn eval(&self, env: &mut Environment) -> Result<Value, Error> {
        match self {
            Expr::Primitive(primitive) => primitive.eval(env),
            Expr::Range(range) => range.eval(env),
            Expr::Reference(reference) => reference.eval(env),
            Expr::List(list) => list.eval(env),
            Expr::Operation(operation) => operation.eval(env),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ast::Operator, error::{UndefinedSet, UnrecognizedOperator}};
    use pretty_assertions::assert_eq;
    use super::*;

    fn env() -> Environment {
        let mut env = Environment::new();
        env.define("A", [1, 2, 3].map(Element::from_int).into());
        env.define("B", [2, 3, 4].map(Element::from_int).into());
        env
    }

    #[test]
    fn primitive_normalizes() {
        let mut env = Environment::new();
        assert_eq!(Expr::int(7).eval(&mut env).unwrap(), Value::Element(Element::from_char('7')));
        assert_eq!(Expr::int(70).eval(&mut env).unwrap(), Value::Element(Element::Int(70)));
        assert_eq!(Expr::letter('x').eval(&mut env).unwrap(), Value::Element(Element::Char('x')));
    }

    #[test]
    fn range_of_letters() {
        let mut env = Environment::new();
        let value = Expr::range(Expr::letter('a'), Expr::letter('e')).eval(&mut env).unwrap();
        assert_eq!(value.to_string(), "{'a', 'b', 'c', 'd', 'e'}");
        assert_eq!(value.typename(), "range");
    }

    #[test]
    fn range_of_digits() {
        let mut env = Environment::new();
        let value = Expr::range(Expr::letter('0'), Expr::letter('3')).eval(&mut env).unwrap();
        assert_eq!(value.to_string(), "{'0', '1', '2', '3'}");
    }

    #[test]
    fn reversed_range() {
        let mut env = Environment::new();
        let err = Expr::range(Expr::letter('z'), Expr::letter('a')).eval(&mut env).unwrap_err();
        assert!(err.is::<InvalidRange>());
    }

    #[test]
    fn range_bound_must_be_element() {
        let mut env = env();
        let err = Expr::range(Expr::reference("A"), Expr::letter('a')).eval(&mut env).unwrap_err();
        assert!(err.is::<InvalidRange>());
    }

    #[test]
    fn list_flattens() {
        let mut env = env();
        let value = Expr::list([
            Expr::letter('x'),
            Expr::reference("A"),
            Expr::range(Expr::letter('a'), Expr::letter('b')),
        ]).eval(&mut env).unwrap();
        assert_eq!(value.to_string(), "['x', '1', '2', '3', 'a', 'b']");
    }

    #[test]
    fn undefined_reference() {
        let mut env = env();
        let err = Expr::reference("C").eval(&mut env).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UndefinedSet>(),
            Some(&UndefinedSet { name: "C".to_string(), suggestions: vec!["A".to_string(), "B".to_string()] }),
        );
    }

    #[test]
    fn union_with_signature() {
        let mut env = env();
        let expr = Expr::binary(Operator::Union, Expr::reference("A"), Expr::reference("B"));
        let Expr::Operation(operation) = expr else { unreachable!() };

        let mut trace = OperationTrace::new();
        let (set, signature) = operation.eval_traced(&mut env, &mut trace).unwrap();
        assert_eq!(set, ElementSet::from([1, 2, 3, 4].map(Element::from_int)));
        assert_eq!(signature.to_string(), "U {A} {B}");
        assert_eq!(trace.records().len(), 1);
        assert_eq!(env.operation_count(), 1);
    }

    #[test]
    fn nested_signature_is_canonical() {
        let mut env = env();
        let expr = Expr::binary(
            Operator::Difference,
            Expr::complement(Expr::reference("A")),
            Expr::binary(Operator::Intersection, Expr::reference("A"), Expr::reference("B")),
        );
        let Expr::Operation(operation) = expr else { unreachable!() };

        let mut trace = OperationTrace::new();
        let (_, signature) = operation.eval_traced(&mut env, &mut trace).unwrap();
        assert_eq!(signature.to_string(), "- ^{A} & {A} {B}");
        assert_eq!(trace.records().len(), 3);
        // the outermost operation is recorded last and has the most tokens
        assert_eq!(trace.records().last().map(|record| &record.signature), Some(&signature));
        assert_eq!(trace.canonical().unwrap().signature, signature);
    }

    #[test]
    fn operand_type_mismatch() {
        let mut env = env();
        let expr = Expr::binary(
            Operator::Union,
            Expr::reference("A"),
            Expr::range(Expr::letter('a'), Expr::letter('c')),
        );
        let err = expr.eval(&mut env).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TypeMismatch>(),
            Some(&TypeMismatch {
                operator: Operator::Union,
                expected: "set",
                given: "range",
                position: OperandPosition::Right,
            }),
        );
    }

    #[test]
    fn missing_operand() {
        let mut env = env();
        let expr = Expr::Operation(Operation {
            op: Operator::Intersection,
            lhs: Box::new(Expr::reference("A")),
            rhs: None,
            span: 0..0,
        });
        let err = expr.eval(&mut env).unwrap_err();
        assert!(err.is::<MissingOperand>());
        assert!(!err.is::<UnrecognizedOperator>());
    }
}
