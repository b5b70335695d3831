//! Evaluation and simplification of finite set algebra.
//!
//! This crate runs programs made of three kinds of [`Instruction`]s: defining a named set,
//! computing a set operation, and testing elements for membership in the result of an operation.
//! While an operation is computed, its structure is captured as a [`Signature`], which is then
//! simplified by repeatedly applying the algebraic laws of sets (De Morgan, absorption,
//! distributivity, and so on). The laws applied are reported alongside the simplified signature.
//!
//! ```
//! use set_compute::{ast::{Expr, Instruction, Operator}, session::{Outcome, Session}};
//!
//! let mut session = Session::new();
//! let results = session.run(&[
//!     Instruction::define("A", Expr::list([Expr::int(1), Expr::int(2)])),
//!     Instruction::operate("X", Expr::complement(Expr::complement(Expr::reference("A")))),
//! ]);
//!
//! let Ok(Outcome::Operated { simplification: Some(simplification), .. }) = &results[1] else {
//!     panic!()
//! };
//! assert_eq!(simplification.simplified.to_string(), "A");
//! assert_eq!(simplification.law_titles(), vec!["Ley del Doble Complemento"]);
//! ```
//!
//! [`Instruction`]: ast::Instruction
//! [`Signature`]: signature::Signature

pub mod ast;
pub mod element;
pub mod env;
pub mod error;
pub mod eval;
pub mod law;
pub mod matcher;
pub mod report;
pub mod session;
pub mod signature;
pub mod simplify;
pub mod step_collector;
pub mod table;

pub use element::{format_set, Element, ElementSet};
pub use env::Environment;
pub use eval::{Eval, Value};
pub use law::Law;
pub use session::{Outcome, Session, SessionOptions};
pub use signature::Signature;
pub use simplify::{simplify, Simplification, SimplifyOptions};
