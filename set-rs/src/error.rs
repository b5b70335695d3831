use ariadne::Fmt;
use set_attrs::ErrorKind;
use set_error::{Error, ErrorKind, EXPR};
use std::ops::Range;

/// The program file could not be read as a list of instructions.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid program file",
    labels = [&self.reason],
    help = format!("a program is a JSON object such as {}", r#"{"instructions": [...]}"#.fg(EXPR)),
)]
pub struct InvalidProgram {
    /// What the JSON parser complained about.
    pub reason: String,
}

impl InvalidProgram {
    /// Converts a JSON error into an [`Error`] pointing at the offending character of the input.
    pub fn from_json(err: &serde_json::Error, input: &str) -> Error {
        let span = json_span(input, err.line(), err.column());
        Error::new(vec![span], Self { reason: err.to_string() })
    }
}

/// Converts the 1-based line and column reported by `serde_json` into a byte span of the input.
fn json_span(input: &str, line: usize, column: usize) -> Range<usize> {
    let line_start = input
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>();
    let start = (line_start + column.saturating_sub(1)).min(input.len());
    start..(start + 1).min(input.len())
}

/// Utility enum to package one or multiple errors.
pub enum HostError {
    /// Every error found while checking a single instruction.
    Many(Vec<Error>),

    /// Single error that can occur while loading the program.
    One(Error),
}

impl HostError {
    /// Report the errors in this [`HostError`] to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        let errs = match self {
            Self::Many(errs) => errs.as_slice(),
            Self::One(err) => std::slice::from_ref(err),
        };

        for err in errs {
            if let Err(io_err) = err.report_to_stderr(src_id, input) {
                tracing::error!(%io_err, "could not print error report");
            }
        }
    }
}

impl From<Vec<Error>> for HostError {
    fn from(errs: Vec<Error>) -> Self {
        Self::Many(errs)
    }
}

impl From<Error> for HostError {
    fn from(err: Error) -> Self {
        Self::One(err)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn span_on_first_line() {
        assert_eq!(json_span("{\"a\": }", 1, 7), 6..7);
    }

    #[test]
    fn span_on_later_line() {
        let input = "{\n  \"instructions\": [\n    oops\n  ]\n}";
        let span = json_span(input, 3, 5);
        assert_eq!(&input[span], "o");
    }

    #[test]
    fn span_clamped_to_input() {
        assert_eq!(json_span("{", 4, 10), 1..1);
        assert_eq!(json_span("", 0, 0), 0..0);
    }

    #[test]
    fn from_json_keeps_kind() {
        let input = "{\"instructions\": 3}";
        let json_err = serde_json::from_str::<set_compute::ast::Program>(input).unwrap_err();
        let err = InvalidProgram::from_json(&json_err, input);
        assert!(err.is::<InvalidProgram>());
    }
}
