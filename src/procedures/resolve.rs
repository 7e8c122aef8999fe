/*!
The resolution operator.

Given clauses *C₁* and *C₂* such that for some atom *v* one clause contains *v* and the other contains -*v*, the resolvent of *C₁* and *C₂* on *v* is the clause of every literal of *C₁* or *C₂* other than *v* and -*v*.

Here, resolution is restricted to clauses with *exactly one* complementary pair:
- If no atom has complementary literals across the clauses, the clauses do not interact.
- If two or more atoms do, there is no resolvent, even though resolving on any one of the atoms would be sound.
  (Any such resolvent contains complementary literals, and so is a tautology.)

```rust
# use otter_resolve::procedures::resolve::{resolve, Resolution};
# use otter_resolve::structures::clause::Clause;
let a_or_b = Clause::new([65, 66]).unwrap();
let not_a = Clause::new([-65]).unwrap();

assert_eq!(resolve(&a_or_b, &not_a), Resolution::Resolvent(Clause::new([66]).unwrap()));

let not_a_or_not_b = Clause::new([-65, -66]).unwrap();
assert_eq!(resolve(&a_or_b, &not_a_or_not_b), Resolution::NoResolvent);
```

# Merging

The resolvent is built by an ascending merge of the literals of both clauses, skipping the literals of the resolved atom and any literal already taken.
So, for sorted clauses the resolvent is sorted and duplicate free, and the operator is commutative.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

/// The result of resolving a pair of clauses.
///
/// The resolvent may itself be the empty clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The clauses have no, or more than one, complementary pair of literals.
    NoResolvent,

    /// The clause obtained by resolution on the single complementary pair.
    Resolvent(Clause),
}

impl Resolution {
    /// The resolvent, if there is one.
    pub fn resolvent(self) -> Option<Clause> {
        match self {
            Self::NoResolvent => None,
            Self::Resolvent(clause) => Some(clause),
        }
    }
}

/// The atoms of literals in `second` whose negation is in `first`.
pub fn complementary_atoms(first: &Clause, second: &Clause) -> Vec<Atom> {
    second
        .literals()
        .filter(|literal| first.contains(literal.negate()))
        .map(|literal| literal.atom())
        .collect()
}

/// Resolves `first` and `second`, if the clauses have exactly one complementary pair of literals.
pub fn resolve(first: &Clause, second: &Clause) -> Resolution {
    let pivot = match complementary_atoms(first, second).as_slice() {
        [atom] => *atom,
        _ => return Resolution::NoResolvent,
    };

    let resolvent = merge_excluding(first.as_slice(), second.as_slice(), pivot);
    log::trace!(target: targets::RESOLUTION, "{first:?} and {second:?} on {pivot} gives {resolvent:?}");

    Resolution::Resolvent(resolvent)
}

/// An ascending merge of the literals of `first` and `second`, without any literal on the atom `pivot`.
fn merge_excluding(first: &[CLiteral], second: &[CLiteral], pivot: Atom) -> Clause {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let (mut i, mut j) = (0, 0);

    while i < first.len() && j < second.len() {
        if first[i].atom() < second[j].atom() {
            take(&mut merged, first[i], pivot);
            i += 1;
        } else {
            take(&mut merged, second[j], pivot);
            j += 1;
        }
    }

    for literal in first[i..].iter().chain(second[j..].iter()) {
        take(&mut merged, *literal, pivot);
    }

    Clause::from_merge(merged)
}

fn take(merged: &mut Vec<CLiteral>, literal: CLiteral, pivot: Atom) {
    if literal.atom() != pivot && !merged.contains(&literal) {
        merged.push(literal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(literals: &[CLiteral]) -> Clause {
        Clause::new(literals.iter().copied()).unwrap()
    }

    #[test]
    fn unit_and_complement() {
        let a = clause(&[65]);
        assert_eq!(resolve(&a, &clause(&[-65])), Resolution::Resolvent(Clause::empty()));
    }

    #[test]
    fn no_interaction() {
        assert_eq!(resolve(&clause(&[65]), &clause(&[-66])), Resolution::NoResolvent);
        assert_eq!(resolve(&clause(&[65, 66]), &clause(&[65])), Resolution::NoResolvent);
    }

    #[test]
    fn two_complementary_pairs() {
        let first = clause(&[65, -66, 67]);
        let second = clause(&[-65, 66]);
        assert_eq!(complementary_atoms(&first, &second), vec![65, 66]);
        assert_eq!(resolve(&first, &second), Resolution::NoResolvent);
    }

    #[test]
    fn merge_is_ordered_without_duplicates() {
        let first = clause(&[65, -66, 68]);
        let second = clause(&[66, 67, 68]);
        assert_eq!(
            resolve(&first, &second),
            Resolution::Resolvent(clause(&[65, 67, 68]))
        );
    }

    #[test]
    fn commutative() {
        let first = clause(&[-65, 67, 69]);
        let second = clause(&[65, 66, -68, 69]);
        assert_eq!(resolve(&first, &second), resolve(&second, &first));
        assert_eq!(
            resolve(&first, &second).resolvent(),
            Some(clause(&[66, 67, -68, 69]))
        );
    }

    #[test]
    fn unsorted_input_is_merged_as_read() {
        // B OR A, read in order, against -A.
        let first = Clause::from_sequence([66, 65]).unwrap();
        let second = Clause::from_sequence([-65]).unwrap();
        assert_eq!(
            resolve(&first, &second),
            Resolution::Resolvent(Clause::from_sequence([66]).unwrap())
        );

        // C OR A against -C OR B gives B OR A, as the merge only compares the heads of each sequence.
        let first = Clause::from_sequence([67, 65]).unwrap();
        let second = Clause::from_sequence([-67, 66]).unwrap();
        let resolvent = resolve(&first, &second).resolvent().unwrap();
        assert_eq!(resolvent.as_slice(), &[66, 65]);
        assert!(!resolvent.is_sorted());
    }
}
