use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// The count of generations, including the final generation.
    pub generations: usize,

    /// A count of every pair of clauses given to the resolution operator.
    pub resolution_attempts: usize,

    /// A count of every resolvent, including duplicates.
    pub resolvents: usize,

    /// A count of every clause accepted into some generation.
    pub accepted: usize,

    /// The time taken during a refutation.
    pub time: Duration,
}
