/*!
A trace of the clauses derived during a refutation.

Each pass over the clauses of a refutation is a generation.
A generation is either:
- The (ordered) clauses derived and accepted during the pass, or
- A note that nothing new was derived, and so the clauses are saturated.

A [TraceRecorder] collects generations during a refutation, and is finished into a [Refutation] which is returned to the caller.
Nothing about the format of an output is known to the recorder, see [io::writer](crate::io::writer) for this.

```rust
# use otter_resolve::reports::{trace::{Generation, TraceRecorder}, Report};
# use otter_resolve::context::Counters;
# use otter_resolve::structures::clause::Clause;
let mut recorder = TraceRecorder::default();
recorder.record(vec![Clause::empty()]);

let refutation = recorder.finish(Report::Entailed, Counters::default());
assert_eq!(refutation.trace.len(), 1);
assert!(matches!(refutation.trace[0], Generation::Derived { index: 1, .. }));
```
*/

use crate::{context::Counters, reports::Report, structures::clause::Clause};

/// A generation of a refutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Generation {
    /// The clauses accepted during the pass with the given (1-indexed) index.
    Derived { index: usize, clauses: Vec<Clause> },

    /// Nothing new was derived during the pass with the given index.
    Saturated { index: usize },
}

impl Generation {
    /// The index of the generation.
    pub fn index(&self) -> usize {
        match self {
            Self::Derived { index, .. } | Self::Saturated { index } => *index,
        }
    }

    /// The clauses of the generation, which are none for a saturated generation.
    pub fn clauses(&self) -> &[Clause] {
        match self {
            Self::Derived { clauses, .. } => clauses,
            Self::Saturated { .. } => &[],
        }
    }
}

/// Collects generations in order.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    generations: Vec<Generation>,
}

impl TraceRecorder {
    /// Records the clauses accepted during the next generation.
    pub fn record(&mut self, clauses: Vec<Clause>) {
        let index = self.generations.len() + 1;
        self.generations.push(Generation::Derived { index, clauses });
    }

    /// Records that nothing new was derived during the next generation.
    pub fn record_saturation(&mut self) {
        let index = self.generations.len() + 1;
        self.generations.push(Generation::Saturated { index });
    }

    /// A count of the generations recorded.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// The refutation of the recorded generations, with the given report.
    pub fn finish(self, report: Report, counters: Counters) -> Refutation {
        Refutation {
            report,
            trace: self.generations,
            counters,
        }
    }
}

/// The result of a refutation.
#[derive(Clone, Debug)]
pub struct Refutation {
    /// The verdict.
    pub report: Report,

    /// Every generation, in order.
    pub trace: Vec<Generation>,

    /// Counts from the refutation.
    pub counters: Counters,
}

impl Refutation {
    /// Every clause derived during the refutation, in order of derivation.
    pub fn derived(&self) -> impl Iterator<Item = &Clause> {
        self.trace.iter().flat_map(|generation| generation.clauses())
    }
}
