//! Key structures: atoms, literals, and clauses.
//!
//! # Formulas
//!
//! A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! In particular, a knowledge base is a formula, and a query is a single clause whose negation is added to the knowledge base during a refutation.
//!
//! # Entailment
//!
//! A knowledge base 𝐊 entails a query 𝐪 just in case 𝐊 ∧ ¬𝐪 is unsatisfiable.
//! Unsatisfiability is witnessed by deriving the [empty clause](clause::Clause::empty) through repeated [resolution](crate::procedures::resolve).

pub mod atom;
pub mod clause;
pub mod literal;
