/*! RTAs for *fixed-priority* scheduling of *self-suspending* tasks

This module collects response-time analyses for dynamically
self-suspending tasks under fixed-priority scheduling on a dedicated
uniprocessor, together with an orchestrating schedulability test
([sched_test]) over whole task sets:

- [jitter_bound] --- a fast, sufficient (but pessimistic) test that
  models each higher-priority task's suspensions as release jitter;
- [exact] --- an exact test that enumerates the completion orders of
  the higher-priority tasks, at factorial cost.

Tasks are analyzed strictly in priority order; the analysis of a task
consumes only the already-finalized response-time bounds of the
higher-priority tasks, which are threaded through as a plain vector
rather than stored in the tasks themselves.

## Citation

The provided analyses follow the treatment of dynamic self-suspension
in the review by

- J.-J. Chen et al., “[Many suspensions, many problems: a review of
  self-suspending tasks in real-time
  systems](https://link.springer.com/article/10.1007/s11241-018-9316-9)”,
  *Real-Time Systems*, vol.&nbsp;55, pp.&nbsp;144--207, 2019.

Please cite the review when using functionality from this module for
academic work.

 */

use derive_more::Display;

use crate::fixed_point::SearchFailure;
use crate::task::{check_taskset, InvalidTask, Task};
use crate::time::Duration;

pub mod exact;
pub mod jitter_bound;

/// Verdict of a schedulability test over an ordered task set.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every task provably meets its deadline. Carries one
    /// response-time bound per task, in priority order.
    #[display(fmt = "schedulable")]
    Schedulable(Vec<Duration>),
    /// Some task misses its deadline in the worst case.
    #[display(fmt = "unschedulable: task {} misses its deadline", failed_task)]
    Unschedulable {
        /// Priority index of the first task found to miss.
        failed_task: usize,
        /// Finalized bounds of the tasks preceding `failed_task`;
        /// tasks past the point of failure were not analyzed.
        bounds: Vec<Duration>,
    },
}

impl Verdict {
    pub fn is_schedulable(&self) -> bool {
        matches!(self, Verdict::Schedulable(_))
    }

    /// The per-task response-time bounds finalized before the test
    /// concluded (all of them on the schedulable path).
    pub fn bounds(&self) -> &[Duration] {
        match self {
            Verdict::Schedulable(bounds) => bounds,
            Verdict::Unschedulable { bounds, .. } => bounds,
        }
    }
}

/// Tuning knobs for [sched_test_with].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestParams {
    /// Maximum number of interferer orderings the exact test may
    /// examine for a single task. When a task's factorial search
    /// space exceeds the budget, the task's bound is taken from the
    /// pessimistic jitter-bound test instead, which keeps the overall
    /// verdict sound (it can only reject more). `None` examines every
    /// ordering.
    pub ordering_budget: Option<usize>,
}

/// Decide schedulability of an ordered task set (index 0 = highest
/// priority).
///
/// First runs the cheap [jitter_bound] test over the whole set and
/// accepts immediately if it succeeds. Only if that test is
/// inconclusive does the factorial [exact] test run, task by task in
/// priority order, until either every task is confirmed or a deadline
/// miss proves the set unschedulable.
///
/// Invalid input is rejected before any fixed-point iteration.
pub fn sched_test(tasks: &[Task]) -> Result<Verdict, InvalidTask> {
    sched_test_with(tasks, TestParams::default())
}

/// Same as [sched_test], with explicit [TestParams].
pub fn sched_test_with(tasks: &[Task], params: TestParams) -> Result<Verdict, InvalidTask> {
    check_taskset(tasks)?;

    if let Ok(bounds) = jitter_bound::taskset_rta(tasks) {
        // fast accept
        return Ok(Verdict::Schedulable(bounds));
    }

    // The fast path is inconclusive, not a proof of infeasibility:
    // retry with the exact test, threading exact bounds forward.
    let mut bounds = Vec::with_capacity(tasks.len());
    for (idx, task) in tasks.iter().enumerate() {
        match exact::task_rta_with(task, &tasks[..idx], &bounds, params) {
            Ok(wcrt) => bounds.push(wcrt),
            Err(SearchFailure::DivergenceLimitExceeded { .. }) => {
                // one infeasible task rejects the whole set
                return Ok(Verdict::Unschedulable {
                    failed_task: idx,
                    bounds,
                });
            }
        }
    }
    Ok(Verdict::Schedulable(bounds))
}
