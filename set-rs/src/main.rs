mod error;

use clap::Parser;
use error::{HostError, InvalidProgram};
use set_compute::{
    ast::Program,
    report::JsonFileSink,
    session::{Session, SessionOptionsBuilder},
    simplify::DEFAULT_MAX_ITERATIONS,
};
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Runs a set algebra program and reports the laws that simplify each of its operations.
#[derive(Debug, Parser)]
#[command(name = "set-rs")]
#[command(version)]
struct Args {
    /// The program to run, as a JSON object with an `instructions` list. Read from stdin if
    /// omitted.
    program: Option<PathBuf>,

    /// Where to write the simplification report.
    #[arg(short, long, default_value = JsonFileSink::DEFAULT_PATH)]
    report: PathBuf,

    /// Do not write the simplification report.
    #[arg(long, conflicts_with = "report")]
    no_report: bool,

    /// The maximum number of passes of the simplifier for a single operation.
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Print the universe and the defined sets after the program finishes.
    #[arg(short, long)]
    verbose: bool,
}

/// Reads the program source from the given file, or from stdin.
fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    let mut input = String::new();
    match path {
        Some(path) => BufReader::new(File::open(path)?).read_to_string(&mut input)?,
        None => io::stdin().read_to_string(&mut input)?,
    };
    Ok(input)
}

/// Parses the program, pointing at the offending character of the input if it is malformed.
fn load_program(input: &str) -> Result<Program, HostError> {
    serde_json::from_str(input).map_err(|err| InvalidProgram::from_json(&err, input).into())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let src_id = args.program
        .as_ref()
        .map_or_else(|| "stdin".to_string(), |path| path.display().to_string());

    let input = match read_input(args.program.as_ref()) {
        Ok(input) => input,
        Err(err) => {
            tracing::error!(%err, program = %src_id, "could not read the program");
            return ExitCode::FAILURE;
        },
    };

    let program = match load_program(&input) {
        Ok(program) => program,
        Err(err) => {
            err.report_to_stderr(&src_id, &input);
            return ExitCode::FAILURE;
        },
    };
    // spans refer to the original source text when the program carries it
    let source = program.source.as_deref().unwrap_or(&input);

    let options = SessionOptionsBuilder::new()
        .max_iterations(args.max_iterations)
        .report_path((!args.no_report).then(|| args.report.clone()))
        .build();
    debug!(?options, "session options");

    let mut session = Session::from_options(options);
    let mut failed = 0;
    for result in session.run(&program.instructions) {
        match result {
            Ok(outcome) => println!("{}", outcome),
            Err(errs) => {
                failed += 1;
                HostError::from(errs).report_to_stderr(&src_id, source);
            },
        }
    }

    if args.verbose {
        println!("{}", session.env().universe_info());
        for (name, set) in session.env().sets() {
            println!("{} = {}", name, session.env().format_set(set));
        }
    }

    info!(
        instructions = program.instructions.len(),
        failed,
        simplified = session.table().len(),
        "done",
    );

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use set_compute::session::Outcome;
    use super::*;

    #[test]
    fn bundled_program_runs() {
        let program = load_program(include_str!("../programs/union.json")).unwrap_or_else(|_| panic!("invalid program"));
        let source = program.source.as_deref().unwrap();
        assert_eq!(&source[57..66], "U {A} {B}");

        let mut session = Session::new();
        let outcomes = session.run(&program.instructions)
            .into_iter()
            .map(|result| result.unwrap_or_else(|errs| panic!("{} errors", errs.len())))
            .collect::<Vec<_>>();

        assert_eq!(outcomes[2].to_string(), "X = {'1', '2', '3', '4'}\n  U {A} {B} => U {B} {A} [Propiedades Conmutativas]");
        let Outcome::Evaluated { memberships, .. } = &outcomes[3] else {
            panic!("expected an evaluation outcome");
        };
        assert_eq!(memberships.iter().map(|m| m.member).collect::<Vec<_>>(), vec![true, false]);
    }

    #[test]
    fn malformed_program() {
        let Err(HostError::One(err)) = load_program("{\"instructions\": [1]}") else {
            panic!("expected a single error");
        };
        assert!(err.is::<InvalidProgram>());
    }
}
