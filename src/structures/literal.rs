//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical literal is an [IntLiteral], with the sign of the integer indicating the polarity of the literal.
//!
//! ```rust
//! # use otter_resolve::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(66, false);
//!
//! assert_eq!(literal, -66);
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 66);
//! assert_eq!(literal.negate(), 66);
//! ```
//!
//! Literals are ordered within a [clause](crate::structures::clause) by atom.
//! A clause has at most one literal of each atom, though as a total order on literals ties are broken by polarity, with negative polarity first.
//! See [order_key](Literal::order_key).

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;

    /// The key by which literals are sorted within a clause.
    ///
    /// Literals of distinct atoms are ordered by atom, and the polarity only orders a literal against its negation.
    fn order_key(&self) -> (Atom, bool) {
        (self.atom(), self.polarity())
    }
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}
