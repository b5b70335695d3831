use crate::simplify::SimplifyOptions;
use std::path::PathBuf;

/// Options for a [`Session`](super::Session).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Options passed to the simplifier.
    pub simplify: SimplifyOptions,

    /// Where to write the simplification report. If [`None`], no report is written.
    pub report_path: Option<PathBuf>,
}

impl SessionOptions {
    /// Wraps the given [`SessionOptions`] into a builder for further customization.
    pub fn into_builder(self) -> SessionOptionsBuilder {
        SessionOptionsBuilder(self)
    }
}

/// A builder for [`SessionOptions`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionOptionsBuilder(SessionOptions);

impl SessionOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simplifier options. See [`SimplifyOptions`] for more information.
    pub fn simplify(mut self, simplify: SimplifyOptions) -> Self {
        self.0.simplify = simplify;
        self
    }

    /// Sets the maximum number of passes of the simplifier.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.simplify.max_iterations = max_iterations;
        self
    }

    /// Sets the path of the simplification report.
    pub fn report_path(mut self, report_path: Option<PathBuf>) -> Self {
        self.0.report_path = report_path;
        self
    }

    /// Builds the options.
    pub fn build(self) -> SessionOptions {
        self.0
    }
}
