use crate::{ast::Operator, signature::Signature};

/// A single operator application, recorded while an operation is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    /// The operator that was applied.
    pub operator: Operator,

    /// The names of the sets involved, in the order they are written.
    pub operands: Vec<String>,

    /// The signature of the operator application, including its nested operations.
    pub signature: Signature,
}

/// The records of every operator application in an operation, in evaluation order. Nested
/// operations are evaluated first, so they are recorded before the operations containing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationTrace {
    records: Vec<OperationRecord>,
}

impl OperationTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an operator application with the given signature.
    pub fn record(&mut self, operator: Operator, signature: &Signature) {
        self.records.push(OperationRecord {
            operator,
            operands: signature.operands().into_iter().map(str::to_string).collect(),
            signature: signature.clone(),
        });
    }

    /// Returns the records, in evaluation order.
    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    /// Returns the canonical record: the one whose signature has the most tokens. The earliest
    /// record wins a tie.
    ///
    /// The outermost operation is recorded last, but its signature contains every nested one, so
    /// it always has strictly more tokens and is the canonical record.
    pub fn canonical(&self) -> Option<&OperationRecord> {
        self.records
            .iter()
            .fold(None, |best: Option<&OperationRecord>, record| match best {
                Some(best) if best.signature.token_count() >= record.signature.token_count() => Some(best),
                _ => Some(record),
            })
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn canonical_is_longest() {
        let mut trace = OperationTrace::new();
        trace.record(Operator::Intersection, &"& {B} {C}".parse().unwrap());
        trace.record(Operator::Union, &"U {A} & {B} {C}".parse().unwrap());

        let canonical = trace.canonical().unwrap();
        assert_eq!(canonical.operator, Operator::Union);
        assert_eq!(canonical.operands, vec!["A", "B", "C"]);
    }

    #[test]
    fn canonical_tie_keeps_first() {
        let mut trace = OperationTrace::new();
        trace.record(Operator::Union, &"U {A} {B}".parse().unwrap());
        trace.record(Operator::Difference, &"- {C} {D}".parse().unwrap());
        assert_eq!(trace.canonical().unwrap().operator, Operator::Union);
    }

    #[test]
    fn empty_trace() {
        assert_eq!(OperationTrace::new().canonical(), None);
    }
}
