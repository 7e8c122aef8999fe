/*!
The context --- to which a knowledge base is added and within which refutations take place.

A context holds:
- A [configuration](crate::config).
- An [atom database](crate::db::atom), mapping symbols to atoms.
- A knowledge base, as a list of clauses.

Refutations borrow the context, and all state of a refutation is local to the refutation.
So, a context may be used to check any number of goals against the same knowledge base.

# Example
```rust
# use otter_resolve::context::Context;
# use otter_resolve::config::Config;
# use otter_resolve::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_formula("A OR B").is_ok());
assert!(the_context.add_formula("-A").is_ok());

let goal = the_context.goal_from_str("B").unwrap();
let refutation = the_context.refute(&goal).unwrap();

assert_eq!(refutation.report, Report::Entailed);
assert_eq!(refutation.trace.len(), 2);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::clause::Clause,
};

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The knowledge base, in order of addition.
    knowledge_base: Vec<Clause>,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        let atom_db = AtomDB::new(config.multi_character_symbols.value);
        Context {
            config,
            atom_db,
            knowledge_base: Vec::default(),
        }
    }

    /// Adds a clause to the knowledge base.
    pub fn add_clause(&mut self, clause: Clause) {
        log::trace!(target: targets::CLAUSE_DB, "Knowledge base clause: {clause:?}");
        self.knowledge_base.push(clause);
    }

    /// The clauses of the knowledge base, in order of addition.
    pub fn knowledge_base(&self) -> &[Clause] {
        &self.knowledge_base
    }

    /// The external representation of a clause.
    pub fn clause_string(&self, clause: &Clause) -> String {
        self.atom_db.clause_string(clause)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
