//! A library for determining whether a knowledge base of propositional clauses entails a query, by resolution refutation.
//!
//! otter_resolve negates a query, adds the negation to a knowledge base, and repeatedly resolves every pair of known clauses until either the empty clause is derived (and so the query is entailed) or nothing new can be derived (and so the query is not entailed).
//! Each pass over the known clauses is recorded, and the record of a refutation may be written out as a trace of derived clauses.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//!
//! Contexts are built with a [configuration](crate::config), and a knowledge base may be added to a context through [text](crate::builder) or [programatically](crate::context::Context::add_clause).
//!
//! Useful starting points, then, may be:
//! - The [structures] to familiarise yourself with atoms, literals, and clauses.
//! - The [resolution operator](crate::procedures::resolve).
//! - The [refutation procedure](crate::procedures::refute).
//! - The [trace](crate::reports::trace) of a refutation, and how it is [written](crate::io::writer).
//!
//! # Examples
//!
//! + Check a goal against a knowledge base.
//!
//! ```rust
//! # use otter_resolve::context::Context;
//! # use otter_resolve::config::Config;
//! # use otter_resolve::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let problem = b"B
//! 2
//! A OR B
//! -A
//! ";
//!
//! let goal = the_context.read_problem(problem.as_slice()).unwrap();
//! let refutation = the_context.refute(&goal).unwrap();
//!
//! assert_eq!(refutation.report, Report::Entailed);
//! ```
//!
//! + Build clauses directly.
//!
//! ```rust
//! # use otter_resolve::context::Context;
//! # use otter_resolve::reports::Report;
//! # use otter_resolve::structures::{clause::Clause, literal::{CLiteral, Literal}};
//! let mut the_context = Context::default();
//!
//! let p = CLiteral::new(1, true);
//! let q = CLiteral::new(2, true);
//!
//! the_context.add_clause(Clause::new([p, q]).unwrap());
//! the_context.add_clause(Clause::new([p.negate(), q]).unwrap());
//!
//! let refutation = the_context.refute(&Clause::unit(q).unwrap()).unwrap();
//! assert_eq!(refutation.report, Report::Entailed);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - A summary of each generation can be found with `RUST_LOG=saturation=info …`
//! - Each resolution can be found with `RUST_LOG=resolution=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod io;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
