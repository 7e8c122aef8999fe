//! Procedures of a refutation.
//!
//! - [resolve] derives a clause from a pair of clauses.
//! - [refute] repeatedly resolves every pair of known clauses until either the empty clause is derived or nothing new can be derived.

pub mod refute;
pub mod resolve;
