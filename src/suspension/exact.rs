/*! An exact suspension-aware RTA: enumeration of interferer
completion orders. */

use itertools::Itertools;

use crate::fixed_point::{self, SearchResult};
use crate::task::Task;
use crate::time::{Duration, Service};

use super::{jitter_bound, TestParams};

/// Compute the exact worst-case response time of `task` under
/// interference from the higher-priority `interferers`, whose exact
/// response-time bounds are given in `bounds` (same order).
///
/// The effective release jitter each interferer contributes depends
/// on the order in which the interfering jobs complete: once an
/// interferer has executed, the remainder of its response time no
/// longer delays the task under analysis. The test therefore
/// examines every permutation of the interferers, derives the
/// induced jitter vector, solves the busy-period recurrence for that
/// ordering, and takes the maximum response time over all orderings.
/// The adversary is free to pick the worst ordering, so a deadline
/// miss in *any* ordering makes the task --- and hence the whole
/// task set --- infeasible, which is reported as a
/// [SearchFailure][crate::fixed_point::SearchFailure].
///
/// With no interferers there is exactly one (empty) ordering and the
/// response time is the task's isolated cost, `execution + sslength`.
///
/// The search space has `interferers.len()!` elements; see
/// [task_rta_with] for a way to cap it.
pub fn task_rta(task: &Task, interferers: &[Task], bounds: &[Duration]) -> SearchResult {
    task_rta_with(task, interferers, bounds, TestParams::default())
}

/// Same as [task_rta], with explicit [TestParams].
///
/// If the number of orderings exceeds `params.ordering_budget`, the
/// factorial search is not entered at all and the pessimistic
/// [jitter_bound] value is returned instead. That value
/// over-approximates the exact one, so callers lose precision but
/// never soundness.
pub fn task_rta_with(
    task: &Task,
    interferers: &[Task],
    bounds: &[Duration],
    params: TestParams,
) -> SearchResult {
    debug_assert_eq!(interferers.len(), bounds.len());

    if let Some(budget) = params.ordering_budget {
        let orderings = (1..=interferers.len()).try_fold(1usize, |n, k| n.checked_mul(k));
        if orderings.map_or(true, |n| n > budget) {
            return jitter_bound::task_rta(task, interferers, bounds);
        }
    }

    let cost = task.cost();
    let pairs: Vec<(&Task, Duration)> = interferers.iter().zip(bounds.iter().copied()).collect();

    let mut response_time = 0;
    for ordered in pairs.iter().permutations(pairs.len()) {
        // The ordering fixes how much of each interferer's response
        // time is already accounted for by the executions that
        // complete no later than its own; only the rest can still
        // show up as release jitter.
        let mut with_jitter = Vec::with_capacity(ordered.len());
        let mut completed: Service = 0;
        for &(hp, hp_wcrt) in ordered {
            completed += hp.execution;
            with_jitter.push((hp, hp_wcrt.saturating_sub(completed)));
        }

        let rt = fixed_point::search(0, task.deadline, |t| {
            cost + with_jitter
                .iter()
                .map(|&(hp, jitter)| hp.interference(jitter, t))
                .sum::<Service>()
        })?;
        response_time = response_time.max(rt);
    }
    Ok(response_time)
}
