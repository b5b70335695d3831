//! Running programs.
//!
//! A [`Session`] owns everything a run needs: the [`Environment`], the [`SimplificationTable`],
//! the options, and the sink the simplification report is written to. Running a program resets
//! the session first, so nothing carries over from one run to the next.
//!
//! Each instruction either succeeds with an [`Outcome`], or fails with every error found while
//! checking it. A failing instruction leaves the named sets untouched, and the run continues with
//! the next instruction.

mod options;
mod outcome;

use crate::{
    ast::{DefineSet, EvaluateSet, Expr, Instruction, OperateSet},
    env::Environment,
    error::{Error, ExpectedOperation, UndefinedOperation, UndefinedSet},
    eval::{Eval, OperationTrace, Value},
    law::Law,
    report::{JsonFileSink, ReportSink},
    signature::Signature,
    step_collector::StepCollector,
    table::SimplificationTable,
};
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub use options::{SessionOptions, SessionOptionsBuilder};
pub use outcome::{Membership, Outcome};

/// The result of executing a single instruction.
pub type InstructionResult = Result<Outcome, Vec<Error>>;

/// The state of a program run.
#[derive(Debug)]
pub struct Session<R: ReportSink = ()> {
    env: Environment,
    table: SimplificationTable,
    options: SessionOptions,
    sink: R,
}

impl Default for Session<()> {
    fn default() -> Self {
        Self::with_sink(SessionOptions::default(), ())
    }
}

impl Session<()> {
    /// Creates a session with the default options that does not write a report.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Session<Box<dyn ReportSink>> {
    /// Creates a session from the given options, writing the report to
    /// [`SessionOptions::report_path`] if it is set.
    pub fn from_options(options: SessionOptions) -> Self {
        let sink: Box<dyn ReportSink> = match &options.report_path {
            Some(path) => Box::new(JsonFileSink::new(path)),
            None => Box::new(()),
        };
        Self::with_sink(options, sink)
    }
}

impl<R: ReportSink> Session<R> {
    /// Creates a session with the given options, writing the report to the given sink.
    pub fn with_sink(options: SessionOptions, sink: R) -> Self {
        Self {
            env: Environment::new(),
            table: SimplificationTable::new(),
            options,
            sink,
        }
    }

    /// Returns the environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Returns the environment mutably, for example to extend the universe.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Returns the simplifications computed so far.
    pub fn table(&self) -> &SimplificationTable {
        &self.table
    }

    /// Returns the options of the session.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the report sink.
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Clears every set, counter, and simplification.
    pub fn reset(&mut self) {
        self.env.reset();
        self.table.clear();
    }

    /// Resets the session, then executes every instruction in order. Returns the result of each
    /// instruction, in the same order.
    ///
    /// The report is rewritten empty before the first instruction, so no report from an earlier
    /// run is left behind.
    pub fn run(&mut self, instructions: &[Instruction]) -> Vec<InstructionResult> {
        self.reset();
        self.write_report();
        info!(instructions = instructions.len(), "running program");

        let results = instructions
            .iter()
            .map(|instruction| self.execute(instruction))
            .collect::<Vec<_>>();

        debug!(
            sets = self.env.total_sets(),
            operations = self.env.operation_count(),
            failed = results.iter().filter(|result| result.is_err()).count(),
            "program finished",
        );
        results
    }

    /// Executes a single instruction, without resetting the session.
    pub fn execute(&mut self, instruction: &Instruction) -> InstructionResult {
        self.execute_with_steps(instruction, &mut ())
    }

    /// Executes a single instruction, collecting the laws applied by the simplifier.
    pub fn execute_with_steps(
        &mut self,
        instruction: &Instruction,
        step_collector: &mut dyn StepCollector<Law>,
    ) -> InstructionResult {
        match instruction {
            Instruction::DefineSet(define) => self.define_set(define),
            Instruction::OperateSet(operate) => self.operate_set(operate, step_collector),
            Instruction::EvaluateSet(evaluate) => self.evaluate_set(evaluate),
        }
    }

    /// Writes the report of the current table to the sink. A failed write does not fail the
    /// instruction.
    fn write_report(&mut self) {
        if let Err(err) = self.sink.write(&self.table) {
            warn!(%err, "could not write the simplification report");
        }
    }

    /// Returns one [`UndefinedSet`] error per missing set referenced by the expressions, in
    /// source order.
    fn missing_references<'a>(&self, exprs: impl IntoIterator<Item = &'a Expr>) -> Vec<Error> {
        let mut seen = HashSet::new();
        exprs
            .into_iter()
            .flat_map(Expr::references)
            .filter(|reference| !self.env.exists(&reference.name))
            .filter(|reference| seen.insert(reference.name.as_str()))
            .map(|reference| {
                let kind = UndefinedSet {
                    name: reference.name.clone(),
                    suggestions: self.env.similar_sets(&reference.name),
                };
                Error::new(vec![reference.span.clone()], kind)
            })
            .collect()
    }

    fn define_set(&mut self, define: &DefineSet) -> InstructionResult {
        let missing = self.missing_references([&define.expr]);
        if !missing.is_empty() {
            return Err(missing);
        }

        let set = define.expr.eval(&mut self.env).map_err(|err| vec![err])?.into_set();
        let new = self.env.define(&define.name, set.clone());
        Ok(Outcome::Defined {
            name: define.name.clone(),
            set,
            new,
        })
    }

    fn operate_set(
        &mut self,
        operate: &OperateSet,
        step_collector: &mut dyn StepCollector<Law>,
    ) -> InstructionResult {
        let missing = self.missing_references([&operate.expr]);
        if !missing.is_empty() {
            return Err(missing);
        }

        // the trace lives only as long as this instruction, whether it succeeds or not
        let mut trace = OperationTrace::new();
        let (set, signature) = match &operate.expr {
            Expr::Operation(operation) => {
                let (set, own) = operation
                    .eval_traced(&mut self.env, &mut trace)
                    .map_err(|err| vec![err])?;
                let canonical = trace.canonical()
                    .map(|record| record.signature.clone())
                    .unwrap_or(own);
                (set, canonical)
            },
            Expr::Reference(reference) => {
                let set = reference.eval(&mut self.env).map_err(|err| vec![err])?.into_set();
                (set, Signature::set(&reference.name))
            },
            other => {
                let value = other.eval(&mut self.env).map_err(|err| vec![err])?;
                return Err(vec![Error::new(
                    vec![other.span()],
                    ExpectedOperation { given: value.typename() },
                )]);
            },
        };

        // only applied operators are simplified; a bare reference records nothing
        let simplification = if trace.is_empty() {
            None
        } else {
            let (simplification, recomputed) = self.table.simplify(
                &operate.name,
                &signature,
                self.options.simplify,
                step_collector,
            );
            let simplification = simplification.clone();
            if recomputed {
                self.write_report();
            }
            Some(simplification)
        };

        self.env.define(&operate.name, set.clone());
        Ok(Outcome::Operated {
            name: operate.name.clone(),
            set,
            signature,
            simplification,
        })
    }

    fn evaluate_set(&mut self, evaluate: &EvaluateSet) -> InstructionResult {
        let Some(target) = self.env.get(&evaluate.operation).cloned() else {
            return Err(vec![Error::new(
                vec![evaluate.span.clone()],
                UndefinedOperation { name: evaluate.operation.clone() },
            )]);
        };

        let mut errors = self.missing_references(&evaluate.elements);
        let mut values = Vec::new();
        if errors.is_empty() {
            for expr in &evaluate.elements {
                match expr.eval(&mut self.env) {
                    Ok(value) => values.push(value),
                    Err(err) => errors.push(err),
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let memberships = values
            .into_iter()
            .flat_map(Value::into_elements)
            .map(|element| Membership {
                member: self.env.contains(&target, &element),
                element,
            })
            .collect();
        Ok(Outcome::Evaluated {
            operation: evaluate.operation.clone(),
            memberships,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::Operator,
        element::{Element, ElementSet},
        simplify::Simplification,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    fn ints<const N: usize>(values: [i64; N]) -> Expr {
        Expr::list(values.map(Expr::int))
    }

    #[test]
    fn define_then_operate() {
        let mut session = Session::new();
        let results = session.run(&[
            Instruction::define("A", ints([1, 2, 3])),
            Instruction::define("B", ints([2, 3, 4])),
            Instruction::operate("X", Expr::binary(Operator::Union, Expr::reference("A"), Expr::reference("B"))),
        ]);

        let Ok(Outcome::Operated { set, signature, simplification, .. }) = &results[2] else {
            panic!("expected an operation outcome, got {:?}", results[2]);
        };
        assert_eq!(set, &ElementSet::from([1, 2, 3, 4].map(Element::from_int)));
        assert_eq!(signature.to_string(), "U {A} {B}");
        assert_eq!(
            simplification.as_ref().map(Simplification::law_titles),
            Some(vec!["Propiedades Conmutativas".to_string()]),
        );
        assert!(session.env().exists("X"));
    }

    #[test]
    fn operate_reports_all_missing_once() {
        let mut session = Session::new();
        let results = session.run(&[
            Instruction::define("A", ints([1])),
            Instruction::operate(
                "X",
                Expr::binary(
                    Operator::Union,
                    Expr::reference("M"),
                    Expr::binary(Operator::Intersection, Expr::reference("N"), Expr::reference("M")),
                ),
            ),
        ]);

        let errors = results[1].as_ref().unwrap_err();
        let names = errors.iter()
            .filter_map(|err| err.downcast_ref::<UndefinedSet>())
            .map(|err| err.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["M", "N"]);
        assert!(!session.env().exists("X"));
        assert_eq!(session.env().total_sets(), 1);
        assert!(session.table().is_empty());
    }

    #[test]
    fn operate_requires_operation() {
        let mut session = Session::new();
        let errors = session.execute(&Instruction::operate("X", ints([1]))).unwrap_err();
        assert_eq!(
            errors[0].downcast_ref::<ExpectedOperation>(),
            Some(&ExpectedOperation { given: "list" }),
        );
    }

    #[test]
    fn evaluate_undefined_operation() {
        let mut session = Session::new();
        let errors = session.execute(&Instruction::evaluate([Expr::int(1)], "X")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is::<UndefinedOperation>());
    }

    #[test]
    fn evaluate_validates_before_verdicts() {
        let mut session = Session::new();
        session.execute(&Instruction::define("A", ints([1]))).unwrap();

        let errors = session
            .execute(&Instruction::evaluate([Expr::int(1), Expr::reference("Q"), Expr::reference("R")], "A"))
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|err| err.is::<UndefinedSet>()));
    }

    #[test]
    fn evaluate_flattens_sets() {
        let mut session = Session::new();
        session.execute(&Instruction::define("A", ints([1, 2]))).unwrap();
        session.execute(&Instruction::define("T", ints([2, 9]))).unwrap();

        let outcome = session
            .execute(&Instruction::evaluate([Expr::int(1), Expr::reference("T")], "A"))
            .unwrap();
        let Outcome::Evaluated { memberships, .. } = outcome else {
            panic!("expected an evaluation outcome");
        };
        let verdicts = memberships.iter().map(|m| m.member).collect::<Vec<_>>();
        assert_eq!(verdicts, vec![true, true, false]);
    }

    #[test]
    fn run_resets_between_runs() {
        let mut session = Session::new();
        session.run(&[Instruction::define("A", ints([1]))]);
        session.run(&[]);
        assert!(!session.env().exists("A"));
        assert_eq!(session.env().total_sets(), 0);
    }

    #[test]
    fn report_written_only_when_recomputed() {
        let mut session = Session::with_sink(SessionOptions::default(), Vec::<serde_json::Value>::new());
        let union = || Expr::binary(Operator::Union, Expr::reference("A"), Expr::reference("B"));
        session.run(&[
            Instruction::define("A", ints([1])),
            Instruction::define("B", ints([2])),
            Instruction::operate("X", union()),
            Instruction::operate("X", union()),
        ]);

        // one empty report when the run starts, then one for the first simplification of X
        assert_eq!(session.sink().len(), 2);
        assert_eq!(session.sink()[0], serde_json::json!({}));
        assert_eq!(session.sink()[1]["X"]["leyes"], serde_json::json!(["Propiedades Conmutativas"]));
    }

    #[test]
    fn run_clears_previous_report() {
        let mut session = Session::with_sink(SessionOptions::default(), Vec::<serde_json::Value>::new());
        session.run(&[
            Instruction::define("A", ints([1])),
            Instruction::operate("X", Expr::complement(Expr::reference("A"))),
        ]);
        session.run(&[Instruction::define("A", ints([1]))]);

        assert_eq!(session.sink().last(), Some(&serde_json::json!({})));
    }

    #[test]
    fn reference_is_stored_without_simplifying() {
        let mut session = Session::with_sink(SessionOptions::default(), Vec::<serde_json::Value>::new());
        let results = session.run(&[
            Instruction::define("A", ints([1, 2])),
            Instruction::operate("X", Expr::reference("A")),
        ]);

        let Ok(Outcome::Operated { set, signature, simplification, .. }) = &results[1] else {
            panic!("expected an operation outcome, got {:?}", results[1]);
        };
        assert_eq!(set, &ElementSet::from([1, 2].map(Element::from_int)));
        assert_eq!(signature, &Signature::set("A"));
        assert_eq!(simplification, &None);
        assert_eq!(results[1].as_ref().unwrap().to_string(), "X = {'1', '2'}");

        assert!(session.table().is_empty());
        assert_eq!(session.sink().len(), 1);
        assert_eq!(session.env().get("X"), session.env().get("A"));
        assert_eq!(session.env().operation_count(), 0);
    }

    #[test]
    fn steps_are_collected() {
        let mut session = Session::new();
        session.execute(&Instruction::define("A", ints([1]))).unwrap();

        let mut steps = Vec::new();
        let double = Expr::complement(Expr::complement(Expr::reference("A")));
        session.execute_with_steps(&Instruction::operate("X", double), &mut steps).unwrap();
        assert_eq!(steps, vec![Law::DoubleComplement]);
    }
}
