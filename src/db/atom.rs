/*!
A database of 'atom related' things, specifically the map between external symbols and atoms.

# Symbols

A symbol is a non-empty string of alphanumeric characters or underscores.

- A symbol of a single character is the atom of the unicode scalar value of the character.
  So, `A` is `65` and `B` is `66`, and the order of atoms follows the order of characters.
- A symbol of multiple characters (if permitted) is interned in order of first appearance, starting from [MULTI_CHARACTER_BASE].
  Every multi-character atom is then greater than every single character atom.

```rust
# use otter_resolve::db::atom::{AtomDB, MULTI_CHARACTER_BASE};
let mut atom_db = AtomDB::new(true);

assert_eq!(atom_db.atom_of("A"), Ok(65));
assert_eq!(atom_db.atom_of("rain"), Ok(MULTI_CHARACTER_BASE));
assert_eq!(atom_db.atom_of("rain"), Ok(MULTI_CHARACTER_BASE));

assert_eq!(atom_db.literal_string(-65), "-A");
assert_eq!(atom_db.symbol_of(MULTI_CHARACTER_BASE).as_deref(), Some("rain"));
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The first atom used for symbols of multiple characters.
pub const MULTI_CHARACTER_BASE: Atom = char::MAX as Atom + 1;

/// The string used for the empty clause.
pub const EMPTY_CLAUSE: &str = "{}";

/// The string used to join the literals of a clause.
pub const DISJUNCTION: &str = "OR";

/// The string used to join the clauses of a formula.
pub const CONJUNCTION: &str = "AND";

/// The character which marks a literal as negative.
pub const NEGATION: char = '-';

/// The atom database.
#[derive(Clone, Debug, Default)]
pub struct AtomDB {
    /// Whether symbols of more than one character are permitted.
    multi_character: bool,

    /// A map from multi-character symbols to their atoms.
    interned: HashMap<String, Atom>,

    /// Multi-character symbols, indexed by atom less [MULTI_CHARACTER_BASE].
    symbols: Vec<String>,
}

impl AtomDB {
    pub fn new(multi_character: bool) -> Self {
        AtomDB {
            multi_character,
            ..Default::default()
        }
    }

    /// Whether a symbol may name an atom.
    pub fn is_symbol(symbol: &str) -> bool {
        !symbol.is_empty()
            && symbol
                .chars()
                .all(|character| character.is_alphanumeric() || character == '_')
    }

    /// The atom of a symbol, interning the symbol if required.
    pub fn atom_of(&mut self, symbol: &str) -> Result<Atom, err::ErrorKind> {
        if symbol.is_empty() {
            return Err(err::ErrorKind::from(err::ParseError::Empty));
        }
        if !Self::is_symbol(symbol) {
            return Err(err::ErrorKind::from(err::ParseError::UnsupportedSymbol(
                symbol.to_string(),
            )));
        }

        let mut characters = symbol.chars();
        if let (Some(character), None) = (characters.next(), characters.next()) {
            return Ok(character as Atom);
        }

        if !self.multi_character {
            return Err(err::ErrorKind::from(err::ParseError::UnsupportedSymbol(
                symbol.to_string(),
            )));
        }

        if let Some(atom) = self.interned.get(symbol) {
            return Ok(*atom);
        }

        let atom = match Atom::try_from(self.symbols.len()) {
            Ok(offset) if offset <= ATOM_MAX - MULTI_CHARACTER_BASE => MULTI_CHARACTER_BASE + offset,
            _ => return Err(err::ErrorKind::from(err::AtomDBError::AtomsExhausted)),
        };

        log::trace!(target: targets::SYMBOLS, "Interned {symbol} as {atom}");
        self.interned.insert(symbol.to_string(), atom);
        self.symbols.push(symbol.to_string());
        Ok(atom)
    }

    /// The symbol of an atom, if the atom has a symbol.
    pub fn symbol_of(&self, atom: Atom) -> Option<String> {
        match atom {
            0 => None,
            single if single < MULTI_CHARACTER_BASE => char::from_u32(single).map(String::from),
            multi => self
                .symbols
                .get((multi - MULTI_CHARACTER_BASE) as usize)
                .cloned(),
        }
    }

    /// A count of the multi-character symbols interned.
    pub fn interned_count(&self) -> usize {
        self.symbols.len()
    }

    /// The external representation of a literal.
    ///
    /// Atoms without a symbol are written as integers.
    pub fn literal_string(&self, literal: CLiteral) -> String {
        let symbol = self
            .symbol_of(literal.atom())
            .unwrap_or_else(|| literal.atom().to_string());
        match literal.polarity() {
            true => symbol,
            false => format!("{NEGATION}{symbol}"),
        }
    }

    /// The external representation of a clause, with the empty clause as [EMPTY_CLAUSE].
    pub fn clause_string(&self, clause: &Clause) -> String {
        if clause.is_empty() {
            return EMPTY_CLAUSE.to_string();
        }
        let separator = format!(" {DISJUNCTION} ");
        clause
            .literals()
            .map(|literal| self.literal_string(literal))
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters_are_scalar_values() {
        let mut atom_db = AtomDB::default();
        assert_eq!(atom_db.atom_of("A"), Ok(65));
        assert_eq!(atom_db.atom_of("z"), Ok(122));
        assert_eq!(atom_db.atom_of("7"), Ok(55));
        assert_eq!(atom_db.interned_count(), 0);
    }

    #[test]
    fn multi_character_requires_permission() {
        let mut atom_db = AtomDB::default();
        assert_eq!(
            atom_db.atom_of("rain"),
            Err(err::ErrorKind::Parse(err::ParseError::UnsupportedSymbol(
                "rain".to_string()
            )))
        );

        let mut atom_db = AtomDB::new(true);
        assert_eq!(atom_db.atom_of("rain"), Ok(MULTI_CHARACTER_BASE));
        assert_eq!(atom_db.atom_of("wet"), Ok(MULTI_CHARACTER_BASE + 1));
        assert_eq!(atom_db.atom_of("rain"), Ok(MULTI_CHARACTER_BASE));
        assert_eq!(atom_db.interned_count(), 2);
    }

    #[test]
    fn unsupported_symbols() {
        let mut atom_db = AtomDB::new(true);
        assert!(atom_db.atom_of("A-B").is_err());
        assert!(atom_db.atom_of("{}").is_err());
        assert_eq!(
            atom_db.atom_of(""),
            Err(err::ErrorKind::Parse(err::ParseError::Empty))
        );
    }

    #[test]
    fn clause_strings() {
        let atom_db = AtomDB::default();
        let clause = Clause::new([-66, 65]).unwrap();
        assert_eq!(atom_db.clause_string(&clause), "A OR -B");
        assert_eq!(atom_db.clause_string(&Clause::empty()), "{}");
    }

    #[test]
    fn unknown_atoms_as_integers() {
        let atom_db = AtomDB::default();
        assert_eq!(atom_db.literal_string(-(MULTI_CHARACTER_BASE as i32)), "-1114112");
    }
}
