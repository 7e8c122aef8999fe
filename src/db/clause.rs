/*!
A database of clauses, specifically the clauses known during a refutation.

The clause database is append-only, and holds at most one instance of any (structurally) distinct clause.
Clauses are kept in order of addition, and the order of the database determines the order in which pairs of clauses are resolved.

```rust
# use otter_resolve::db::clause::ClauseDB;
# use otter_resolve::structures::clause::Clause;
let mut clause_db = ClauseDB::default();

assert!(clause_db.insert(Clause::new([65, 66]).unwrap()));
assert!(!clause_db.insert(Clause::new([66, 65]).unwrap()));
assert_eq!(clause_db.len(), 1);
```
*/

use std::collections::HashSet;

use crate::{misc::log::targets::{self}, structures::clause::Clause};

/// The clause database.
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    /// Clauses, in order of addition.
    clauses: Vec<Clause>,

    /// The clauses of the database, for checking membership.
    index: HashSet<Clause>,
}

impl ClauseDB {
    /// Adds a clause to the database, returning whether the clause was added.
    ///
    /// A clause is not added if some structurally equal clause is already in the database.
    pub fn insert(&mut self, clause: Clause) -> bool {
        if self.index.contains(&clause) {
            log::trace!(target: targets::CLAUSE_DB, "Skipped duplicate: {clause:?}");
            return false;
        }
        self.index.insert(clause.clone());
        self.clauses.push(clause);
        true
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.index.contains(clause)
    }

    /// The count of clauses in the database.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clauses of the database, in order of addition.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn get(&self, index: usize) -> Option<&Clause> {
        self.clauses.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }
}

impl Extend<Clause> for ClauseDB {
    fn extend<T: IntoIterator<Item = Clause>>(&mut self, iter: T) {
        for clause in iter {
            self.insert(clause);
        }
    }
}

impl FromIterator<Clause> for ClauseDB {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        let mut clause_db = ClauseDB::default();
        clause_db.extend(iter);
        clause_db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_of_addition() {
        let clause_db: ClauseDB = [
            Clause::new([66]).unwrap(),
            Clause::new([65]).unwrap(),
            Clause::new([66]).unwrap(),
            Clause::empty(),
        ]
        .into_iter()
        .collect();

        assert_eq!(clause_db.len(), 3);
        assert_eq!(clause_db.get(0), Some(&Clause::new([66]).unwrap()));
        assert_eq!(clause_db.get(1), Some(&Clause::new([65]).unwrap()));
        assert!(clause_db.contains(&Clause::empty()));
    }

    #[test]
    fn structural_equality() {
        let mut clause_db = ClauseDB::default();
        assert!(clause_db.insert(Clause::new([65, -66]).unwrap()));
        assert!(!clause_db.insert(Clause::new([-66, 65, 65]).unwrap()));
        // Order is part of the structure of a clause.
        assert!(clause_db.insert(Clause::from_sequence([-66, 65]).unwrap()));
        assert_eq!(clause_db.len(), 2);
    }
}
