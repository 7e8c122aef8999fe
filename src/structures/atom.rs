/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms are named by external symbols, e.g. `A` or `rain`, and the [atom database](crate::db::atom) holds the map between the two.

Each atom is a non-zero u32.
The sign of an [integer literal](crate::structures::literal::IntLiteral) records polarity, and so `0` is never an atom and atoms are bounded by [ATOM_MAX].

```rust
# use otter_resolve::structures::atom::{Atom, ATOM_MAX};
let a: Atom = 'A' as Atom;
assert_eq!(a, 65);
assert!(a <= ATOM_MAX);
```
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
