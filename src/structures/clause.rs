//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! A [Clause] is an ordered sequence of literals, with at most one literal of each atom.
//! Clauses are immutable once built, and validation happens at construction:
//! - A clause with both polarities of some atom is an error.
//! - [Clause::new] sorts literals by atom (and then polarity) and drops duplicates.
//! - [Clause::from_sequence] keeps the given order and only drops duplicates.
//!
//! ```rust
//! # use otter_resolve::structures::clause::Clause;
//! let clause = Clause::new([67, -65, 66, 67]).unwrap();
//!
//! assert_eq!(clause.as_slice(), &[-65, 66, 67]);
//! assert_eq!(clause.size(), 3);
//! assert!(clause.is_sorted());
//!
//! assert!(Clause::new([65, -65]).is_err());
//! ```
//!
//! - The empty clause is always false (never true), and deriving it is a proof of contradiction.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//!
//! Resolution assumes both clauses are sorted.
//! Unsorted clauses are supported only to reproduce the behaviour of reading literals in input order, see [LiteralOrder](crate::config::LiteralOrder).

use std::collections::HashSet;

use crate::{
    structures::{
        atom::ATOM_MAX,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A clause, as an ordered, duplicate-free sequence of literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<CLiteral>,
}

impl Clause {
    /// A clause of the given literals, sorted by atom with duplicates removed.
    pub fn new(literals: impl IntoIterator<Item = CLiteral>) -> Result<Self, err::ClauseError> {
        let mut literals = Self::checked(literals)?;
        literals.sort_by_key(|literal| literal.order_key());
        literals.dedup();
        Ok(Clause { literals })
    }

    /// A clause of the given literals in the given order, with any repeat of a literal removed.
    pub fn from_sequence(
        literals: impl IntoIterator<Item = CLiteral>,
    ) -> Result<Self, err::ClauseError> {
        let mut sequence: Vec<CLiteral> = Vec::default();
        for literal in Self::checked(literals)? {
            if !sequence.contains(&literal) {
                sequence.push(literal);
            }
        }
        Ok(Clause { literals: sequence })
    }

    /// The unit clause of a literal.
    pub fn unit(literal: CLiteral) -> Result<Self, err::ClauseError> {
        Self::new([literal])
    }

    /// The empty clause.
    pub fn empty() -> Self {
        Clause::default()
    }

    /// A clause from literals already known to be duplicate free and in the order required.
    pub(crate) fn from_merge(literals: Vec<CLiteral>) -> Self {
        Clause { literals }
    }

    fn checked(
        literals: impl IntoIterator<Item = CLiteral>,
    ) -> Result<Vec<CLiteral>, err::ClauseError> {
        let literals = literals.into_iter().collect::<Vec<_>>();
        if let Some(invalid) = literals
            .iter()
            .find(|literal| **literal == 0 || literal.atom() > ATOM_MAX)
        {
            return Err(err::ClauseError::InvalidLiteral(invalid.as_int()));
        }

        let present = literals.iter().copied().collect::<HashSet<_>>();
        match literals.iter().find(|literal| present.contains(&literal.negate())) {
            Some(literal) => Err(err::ClauseError::ComplementaryLiterals(literal.atom())),
            None => Ok(literals),
        }
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether the clause is a unit clause.
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// An iterator over the literals of the clause, in order.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.literals.iter().copied()
    }

    pub fn as_slice(&self) -> &[CLiteral] {
        &self.literals
    }

    pub fn contains(&self, literal: CLiteral) -> bool {
        self.literals.contains(&literal)
    }

    /// Whether the literals of the clause are in ascending order of atom (and then polarity).
    pub fn is_sorted(&self) -> bool {
        self.literals
            .windows(2)
            .all(|pair| pair[0].order_key() <= pair[1].order_key())
    }

    /// The negation of the clause, as a collection of unit clauses.
    ///
    /// ¬(l₁ ∨ … ∨ lₙ) is equivalent to ¬l₁ ∧ … ∧ ¬lₙ, and so the negation of a clause is a list of clauses, one for each literal.
    /// The negation of the empty clause is the empty list.
    pub fn negation(&self) -> Vec<Clause> {
        self.literals
            .iter()
            .map(|literal| Clause {
                literals: vec![literal.negate()],
            })
            .collect()
    }
}
