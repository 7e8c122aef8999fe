//! Error types used in the library.
//!
//! - Parse errors are found before a refutation begins, and are returned to the caller once.
//! - A refutation itself has two outcomes, and neither is an error.
//!   Errors during a refutation are limited to the (optional) resource limits of a [Config](crate::config::Config) and failures of worker threads.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Clause(ClauseError),
    Config(ConfigError),
    Parse(ParseError),
    Resource(ResourceError),

    /// A worker thread panicked during a parallel pass.
    Worker,
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors when building a clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// Some integer which is not a literal, e.g. `0`.
    InvalidLiteral(isize),

    /// Both polarities of the (contained) atom, e.g. `A OR -A`.
    ComplementaryLiterals(Atom),
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors when setting a configuration option.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value requested for the named option is outside the bounds of the option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// A symbol which may not name an atom.
    UnsupportedSymbol(String),

    /// Two literals without a separator, or a separator without a literal on some side.
    Separator,

    /// A conjunction was found in a goal, which must be a single clause.
    ConjunctiveGoal,

    /// No goal was found.
    MissingGoal,

    /// The empty clause was read as part of the knowledge base or as the goal.
    EmptyClause,

    /// The count of knowledge base lines could not be read.
    ClauseCount(String),

    /// Fewer knowledge base lines were found than were expected.
    MissingClauses { expected: usize, found: usize },

    /// The (contained) path could not be opened.
    Open(String),

    /// Some issue reading the given line.
    Read(usize),

    /// Some error at a (1-indexed) line.
    Line(usize, Box<ParseError>),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Limits on a refutation, as set in the [config](crate::config::Config).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceError {
    /// The (contained) limit on generations was exceeded.
    GenerationLimit(usize),

    /// The (contained) limit on the count of clauses was exceeded.
    ClauseLimit(usize),
}

impl From<ResourceError> for ErrorKind {
    fn from(e: ResourceError) -> Self {
        ErrorKind::Resource(e)
    }
}
