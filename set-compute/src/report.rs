//! The simplification report, written after every new simplification.
//!
//! The report is a JSON object with one member per simplified operation, in the order the
//! simplifications were last computed:
//!
//! ```json
//! {
//!   "X": {
//!     "conjunto Original": "U {A} {B}",
//!     "conjunto Simplificado": "U {B} {A}",
//!     "leyes": ["Propiedades Conmutativas"]
//!   }
//! }
//! ```

use crate::table::SimplificationTable;
use serde_json::{json, Map, Value};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

/// Builds the report for the given table.
pub fn build_report(table: &SimplificationTable) -> Value {
    let entries = table
        .iter()
        .map(|(name, simplification)| {
            let entry = json!({
                "conjunto Original": simplification.original.to_string(),
                "conjunto Simplificado": simplification.simplified.to_string(),
                "leyes": simplification.law_titles(),
            });
            (name.to_string(), entry)
        })
        .collect::<Map<_, _>>();
    Value::Object(entries)
}

/// Destination of the simplification report. The report is regenerated in full every time it is
/// written.
///
/// [`ReportSink`] is also implemented for the unit type `()`, which discards the report, and for
/// `Vec<serde_json::Value>`, which keeps every version of the report in memory.
pub trait ReportSink {
    /// Writes the report for the given table.
    fn write(&mut self, table: &SimplificationTable) -> io::Result<()>;
}

impl ReportSink for () {
    #[inline]
    fn write(&mut self, _: &SimplificationTable) -> io::Result<()> {
        Ok(())
    }
}

impl<R: ReportSink + ?Sized> ReportSink for Box<R> {
    fn write(&mut self, table: &SimplificationTable) -> io::Result<()> {
        (**self).write(table)
    }
}

impl ReportSink for Vec<Value> {
    fn write(&mut self, table: &SimplificationTable) -> io::Result<()> {
        self.push(build_report(table));
        Ok(())
    }
}

/// Writes the report as a pretty-printed JSON file, creating its parent directory if needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// The path the report is written to when none is given.
    pub const DEFAULT_PATH: &'static str = "JSON/simplificaciones.json";

    /// Creates a sink that writes to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path the report is written to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileSink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl ReportSink for JsonFileSink {
    fn write(&mut self, table: &SimplificationTable) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &build_report(table))?;
        writer.flush()?;

        debug!(path = %self.path.display(), entries = table.len(), "wrote simplification report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::simplify::SimplifyOptions;
    use pretty_assertions::assert_eq;
    use super::*;

    fn table() -> SimplificationTable {
        let mut table = SimplificationTable::new();
        let options = SimplifyOptions::default();
        table.simplify("X", &"U {A} {B}".parse().unwrap(), options, &mut ());
        table.simplify("Y", &"- {A} {B}".parse().unwrap(), options, &mut ());
        table
    }

    #[test]
    fn report_fields() {
        let json = build_report(&table()).to_string();
        assert_eq!(
            json,
            concat!(
                r#"{"X":{"conjunto Original":"U {A} {B}","conjunto Simplificado":"U {B} {A}","leyes":["Propiedades Conmutativas"]},"#,
                r#""Y":{"conjunto Original":"- {A} {B}","conjunto Simplificado":"- {A} {B}","leyes":["No simplificable"]}}"#,
            ),
        );
    }

    #[test]
    fn file_sink_creates_directory() {
        let dir = std::env::temp_dir().join(format!("set-compute-report-{}", std::process::id()));
        let path = dir.join("nested").join("simplificaciones.json");
        let mut sink = JsonFileSink::new(&path);

        sink.write(&table()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["X"]["leyes"][0], "Propiedades Conmutativas");

        fs::remove_dir_all(&dir).unwrap();
    }
}
