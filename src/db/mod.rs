//! Databases for holding information relevant to a refutation.
//!
//! - The [atom database](atom) holds the map between external symbols and atoms.
//! - The [clause database](clause) holds the clauses known during a refutation.

pub mod atom;
pub mod clause;
