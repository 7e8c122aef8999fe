/*!
Refutation by saturation.

To determine whether a knowledge base 𝐊 entails a goal 𝐪, the goal is negated and added to 𝐊, and the resulting clauses are saturated under [resolution](crate::procedures::resolve).

# Overview

```rust,ignore
loop {
    for each pair of clauses (i, j), with i < j:
        resolve the clauses, and note any resolvent

    accept each resolvent not already known, in order

    if the empty clause was accepted:
        return entailed
    if nothing was accepted:
        return not entailed

    add the accepted clauses to the known clauses
}
```

Each pass is a generation, and the accepted clauses of each generation are recorded in a [trace](crate::reports::trace).
If the empty clause is among the clauses given, the goal is entailed with no generations.

As every clause is built from a finite set of literals, and no clause is accepted twice, a refutation always terminates.
Though, the number of generations and the count of clauses may be very large, and limits may be set through the [config](crate::config::Config).

# Workers

The resolution of each pair of clauses in a generation is independent of every other pair.
So, with more than one [worker](crate::config::Config::workers) the pairs of a generation are split between threads by first index.
All threads finish before any resolvent is examined, and resolvents are examined in the same order as in a sequential pass.
*/

use std::collections::HashSet;
use std::ops::Range;

use crate::{
    config::Config,
    context::{Context, Counters},
    db::clause::ClauseDB,
    misc::log::targets::{self},
    procedures::resolve::{resolve, Resolution},
    reports::{
        trace::{Refutation, TraceRecorder},
        Report,
    },
    structures::clause::Clause,
    types::err::{self},
};

impl Context {
    /// Determines whether the knowledge base of the context entails `goal`.
    ///
    /// ```rust
    /// # use otter_resolve::context::Context;
    /// # use otter_resolve::reports::Report;
    /// let mut the_context = Context::default();
    /// the_context.add_formula("A").unwrap();
    ///
    /// let goal = the_context.goal_from_str("B").unwrap();
    /// let refutation = the_context.refute(&goal).unwrap();
    ///
    /// assert_eq!(refutation.report, Report::NotEntailed);
    /// ```
    pub fn refute(&self, goal: &Clause) -> Result<Refutation, err::ErrorKind> {
        let clause_db: ClauseDB = self
            .knowledge_base()
            .iter()
            .cloned()
            .chain(goal.negation())
            .collect();

        log::info!(target: targets::SATURATION, "Refutation from {} clauses", clause_db.len());
        saturate(clause_db, &self.config)
    }
}

/// Saturates `clause_db` under resolution, stopping early on derivation of the empty clause.
pub fn saturate(mut clause_db: ClauseDB, config: &Config) -> Result<Refutation, err::ErrorKind> {
    let start = std::time::Instant::now();
    let generation_limit = config.generation_limit.value;
    let clause_limit = config.clause_limit.value;
    let workers = config.workers.value;

    let mut recorder = TraceRecorder::default();
    let mut counters = Counters::default();

    if clause_db.contains(&Clause::empty()) {
        log::info!(target: targets::SATURATION, "The empty clause is known before any generation");
        counters.time = start.elapsed();
        return Ok(recorder.finish(Report::Entailed, counters));
    }

    loop {
        if generation_limit != 0 && counters.generations >= generation_limit {
            log::info!(target: targets::SATURATION, "Generation limit of {generation_limit} reached");
            return Err(err::ErrorKind::from(err::ResourceError::GenerationLimit(
                generation_limit,
            )));
        }
        counters.generations += 1;

        let clause_count = clause_db.len();
        counters.resolution_attempts += clause_count * clause_count.saturating_sub(1) / 2;

        let candidates = pass_resolvents(clause_db.clauses(), workers)?;
        counters.resolvents += candidates.len();

        let mut fresh: HashSet<&Clause> = HashSet::default();
        let mut accepted = Vec::default();
        for candidate in &candidates {
            if !clause_db.contains(candidate) && fresh.insert(candidate) {
                accepted.push(candidate.clone());
            }
        }
        counters.accepted += accepted.len();

        log::info!(target: targets::SATURATION,
            "Generation {}: {} clauses, {} resolvents, {} accepted",
            counters.generations,
            clause_count,
            candidates.len(),
            accepted.len()
        );

        if accepted.iter().any(Clause::is_empty) {
            recorder.record(accepted);
            counters.time = start.elapsed();
            return Ok(recorder.finish(Report::Entailed, counters));
        }

        if accepted.is_empty() {
            recorder.record_saturation();
            counters.time = start.elapsed();
            return Ok(recorder.finish(Report::NotEntailed, counters));
        }

        if clause_limit != 0 && clause_count + accepted.len() > clause_limit {
            log::info!(target: targets::SATURATION, "Clause limit of {clause_limit} reached");
            return Err(err::ErrorKind::from(err::ResourceError::ClauseLimit(
                clause_limit,
            )));
        }

        clause_db.extend(accepted.iter().cloned());
        recorder.record(accepted);
    }
}

/// Every resolvent of a pair of `clauses`, ordered by the indices of the pair.
pub fn pass_resolvents(clauses: &[Clause], workers: usize) -> Result<Vec<Clause>, err::ErrorKind> {
    let rows = clauses.len().saturating_sub(1);
    if workers <= 1 || rows <= 1 {
        return Ok(row_resolvents(clauses, 0..rows));
    }

    let chunk = rows.div_ceil(workers);
    let ranges = (0..rows)
        .step_by(chunk)
        .map(|start| start..rows.min(start + chunk))
        .collect::<Vec<_>>();

    let joined = crossbeam::thread::scope(|scope| {
        let handles = ranges
            .into_iter()
            .map(|range| scope.spawn(move |_| row_resolvents(clauses, range)))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Result<Vec<_>, _>>()
    });

    match joined {
        Ok(Ok(chunks)) => Ok(chunks.into_iter().flatten().collect()),
        _ => Err(err::ErrorKind::Worker),
    }
}

/// The resolvents of each pair (i, j) with i in `rows` and i < j, in order.
fn row_resolvents(clauses: &[Clause], rows: Range<usize>) -> Vec<Clause> {
    let mut resolvents = Vec::default();
    for i in rows {
        for j in (i + 1)..clauses.len() {
            if let Resolution::Resolvent(clause) = resolve(&clauses[i], &clauses[j]) {
                resolvents.push(clause);
            }
        }
    }
    resolvents
}
