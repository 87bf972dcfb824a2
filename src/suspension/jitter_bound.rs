/*! A fast, sufficient suspension-aware RTA: suspensions modeled as
release jitter. */

use crate::fixed_point::{self, SearchFailure, SearchResult};
use crate::task::Task;
use crate::time::{Duration, Service};

/// Bound the worst-case response time of `task` under interference
/// from the higher-priority `interferers`, whose own response-time
/// bounds are given in `bounds` (same order).
///
/// The suspensions of each interferer are folded into its release
/// pattern: a job of interferer `j` may begin to interfere as late
/// after its period boundary as `bounds[j] - execution_j`, i.e., its
/// own response time less the part of it that is spent computing.
/// This over-approximates every actual suspension pattern, so a
/// successful bound is safe, while a [SearchFailure] only means the
/// test is inconclusive --- not that the task is infeasible.
///
/// The recurrence divides by each interferer's period; callers are
/// expected to have validated the task set (see
/// [check_taskset][crate::task::check_taskset]).
pub fn task_rta(task: &Task, interferers: &[Task], bounds: &[Duration]) -> SearchResult {
    debug_assert_eq!(interferers.len(), bounds.len());
    let cost = task.cost();
    fixed_point::search(cost, task.deadline, |t| {
        cost + interferers
            .iter()
            .zip(bounds)
            .map(|(hp, hp_wcrt)| hp.interference(hp_wcrt.saturating_sub(hp.execution), t))
            .sum::<Service>()
    })
}

/// Run the jitter-bound test over a whole task set in priority
/// order, short-circuiting on the first deadline miss.
///
/// On success, returns the per-task response-time bounds, in
/// priority order. An error verdict is *inconclusive*: the set may
/// still be schedulable and should be retried with the exact test
/// (see [exact][super::exact]).
pub fn taskset_rta(tasks: &[Task]) -> Result<Vec<Duration>, SearchFailure> {
    let mut bounds = Vec::with_capacity(tasks.len());
    for (idx, task) in tasks.iter().enumerate() {
        let wcrt = task_rta(task, &tasks[..idx], &bounds)?;
        bounds.push(wcrt);
    }
    Ok(bounds)
}
