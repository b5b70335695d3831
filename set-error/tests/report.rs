use ariadne::Fmt;
use pretty_assertions::assert_eq;
use set_attrs::ErrorKind;
use set_error::{Error, ErrorKind, EXPR};

/// Stand-in for a real error kind with fields referenced from the attribute.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the set `{}` is empty", self.name),
    labels = ["this set"],
    help = format!("define it first: {}", "SET A ::= {1, 2}".fg(EXPR)),
)]
pub struct EmptySet {
    pub name: String,
}

/// Kind without labels, every span is highlighted without text.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "nothing to see here", note = "this is a note")]
pub struct Unlabeled;

/// Renders the report of the error against the given input, without colors.
fn render(error: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    error.write_report("input", input, &mut buf).unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn report_contains_message_label_and_help() {
    let input = "OPERA X: U {A} {B}";
    let error = Error::new(vec![12..13], EmptySet { name: "A".to_string() });
    let report = render(&error, input);

    assert!(report.contains("the set `A` is empty"));
    assert!(report.contains("this set"));
    assert!(report.contains("define it first: SET A ::= {1, 2}"));
}

#[test]
fn report_without_labels() {
    let input = "U {A} {B}";
    let error = Error::new(vec![0..1], Unlabeled);
    let report = render(&error, input);

    assert!(report.contains("nothing to see here"));
    assert!(report.contains("this is a note"));
}

#[test]
fn empty_spans_default_to_start() {
    let error = Error::new(Vec::new(), Unlabeled);
    assert_eq!(error.spans, vec![0..0]);
}

#[test]
fn downcast_to_concrete_kind() {
    let error = Error::new(vec![0..1], EmptySet { name: "B".to_string() });
    assert!(error.is::<EmptySet>());
    assert!(!error.is::<Unlabeled>());
    assert_eq!(
        error.downcast_ref::<EmptySet>(),
        Some(&EmptySet { name: "B".to_string() }),
    );
}
