/*!
Writes a [Refutation] as text.

For each generation:
- If clauses were derived, the count of clauses and then each clause on a line of its own.
- If nothing was derived, `0`.

And, after every generation, the verdict: `YES` if the goal is entailed and `NO` otherwise.

```rust
# use otter_resolve::context::Context;
# use otter_resolve::io::writer::refutation_string;
let mut the_context = Context::default();
the_context.add_formula("A OR B").unwrap();
the_context.add_formula("-A").unwrap();

let goal = the_context.goal_from_str("B").unwrap();
let refutation = the_context.refute(&goal).unwrap();

assert_eq!(
    refutation_string(&refutation, &the_context.atom_db).unwrap(),
    "2\nB\nA\n1\n{}\nYES\n"
);
```
*/

use std::io::Write;

use crate::{
    db::atom::AtomDB,
    reports::trace::{Generation, Refutation},
};

/// Writes `refutation` to `writer`, with clauses written through `atom_db`.
pub fn write_refutation(
    mut writer: impl Write,
    refutation: &Refutation,
    atom_db: &AtomDB,
) -> std::io::Result<()> {
    for generation in &refutation.trace {
        match generation {
            Generation::Derived { clauses, .. } => {
                writeln!(writer, "{}", clauses.len())?;
                for clause in clauses {
                    writeln!(writer, "{}", atom_db.clause_string(clause))?;
                }
            }
            Generation::Saturated { .. } => writeln!(writer, "0")?,
        }
    }
    writeln!(writer, "{}", refutation.report)?;
    writer.flush()
}

/// The text written by [write_refutation].
pub fn refutation_string(refutation: &Refutation, atom_db: &AtomDB) -> std::io::Result<String> {
    let mut buffer = Vec::default();
    write_refutation(&mut buffer, refutation, atom_db)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
