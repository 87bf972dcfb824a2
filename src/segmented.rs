/*! Segment-aware task model and the interface to MILP-backed analyses

The analyses in [crate::suspension] treat suspension as a single
cumulative quantity per job. A finer family of analyses decomposes
each job into alternating computation and suspension segments and
bounds the response time with a mixed-integer linear program (see,
e.g., [this segment-aware interference
analysis](https://ieeexplore.ieee.org/document/7176028)). Solving such
programs is the business of an external solver, not of this crate:
here we define the segmented task model, the [SchedulabilityOracle]
contract such a backend implements, and the recurrence-based response
time ceilings an implementation needs to bound its decision
variables.
*/

use auto_impl::auto_impl;

use crate::fixed_point::{self, SearchFailure, SearchResult};
use crate::suspension::Verdict;
use crate::task::{InvalidTask, Task};
use crate::time::{Duration, Service};

/// A self-suspending task refined into an alternating sequence of
/// computation and suspension segments: `n` computation segments are
/// separated by exactly `n - 1` suspension segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedTask {
    /// Worst-case durations of the computation segments, in
    /// execution order.
    pub csegs: Vec<Service>,
    /// Worst-case durations of the suspension intervals separating
    /// consecutive computation segments.
    pub ssegs: Vec<Duration>,
    /// Minimum inter-arrival separation between consecutive jobs.
    pub period: Duration,
    /// Relative deadline, counted from a job's arrival.
    pub deadline: Duration,
}

impl SegmentedTask {
    /// Total worst-case computation demand of one job.
    pub fn execution(&self) -> Service {
        self.csegs.iter().sum()
    }

    /// Total worst-case self-suspension time of one job.
    pub fn sslength(&self) -> Duration {
        self.ssegs.iter().sum()
    }

    /// Collapse the segment structure into the flat model of
    /// [Task], as consumed by [crate::suspension].
    pub fn flatten(&self) -> Task {
        Task {
            execution: self.execution(),
            sslength: self.sslength(),
            period: self.period,
            deadline: self.deadline,
        }
    }

    /// Check the segment structure and the arithmetic constraints,
    /// with `index` identifying the task in any reported error.
    pub fn check(&self, index: usize) -> Result<(), InvalidTask> {
        if self.csegs.is_empty() || self.ssegs.len() + 1 != self.csegs.len() {
            Err(InvalidTask::MalformedDecomposition { index })
        } else if self.csegs.iter().any(|c| *c == 0) {
            Err(InvalidTask::EmptySegment { index })
        } else {
            self.flatten().check(index)
        }
    }
}

/// Validate an entire segmented task set, reporting the first
/// offending task.
pub fn check_taskset(tasks: &[SegmentedTask]) -> Result<(), InvalidTask> {
    tasks
        .iter()
        .enumerate()
        .try_for_each(|(index, task)| task.check(index))
}

/// The contract implemented by an external segment-aware
/// schedulability analysis, typically backed by a MILP solver.
///
/// An oracle receives the segmented task set in priority order and
/// decides schedulability; on the feasible path it reports each
/// task's worst-case response time as the solved objective value
/// plus the task's total suspension length. The correctness of the
/// verdict is delegated entirely to the implementation --- this
/// crate only consumes it as an alternative to
/// [sched_test][crate::suspension::sched_test].
#[auto_impl(&, Box, Rc)]
pub trait SchedulabilityOracle {
    /// Decide schedulability of an ordered segmented task set
    /// (index 0 = highest priority).
    fn sched_test(&self, tasks: &[SegmentedTask]) -> Result<Verdict, InvalidTask>;
}

/// Upper bound on the response time of a whole job of `task`,
/// obtained from the jitter-based recurrence over the flattened
/// task. Oracle implementations use this to cap the summed segment
/// response times.
///
/// `interferers` and `bounds` describe the higher-priority tasks and
/// their already-computed response-time bounds; `limit` caps the
/// search, since at this stage no deadline comparison is intended.
pub fn response_time_ceiling(
    task: &SegmentedTask,
    interferers: &[Task],
    bounds: &[Duration],
    limit: Duration,
) -> SearchResult {
    debug_assert_eq!(interferers.len(), bounds.len());
    let cost = task.execution() + task.sslength();
    fixed_point::search(0, limit, |t| {
        cost + jitter_interference(interferers, bounds, t)
    })
}

/// Upper bound on the response time of each computation segment of
/// `task` in isolation, i.e., the segment's duration plus the
/// jitter-bounded interference a busy window of that length can
/// suffer. One bound per computation segment, in execution order.
pub fn segment_ceilings(
    task: &SegmentedTask,
    interferers: &[Task],
    bounds: &[Duration],
    limit: Duration,
) -> Result<Vec<Duration>, SearchFailure> {
    debug_assert_eq!(interferers.len(), bounds.len());
    task.csegs
        .iter()
        .map(|&cseg| {
            fixed_point::search(0, limit, |t| {
                cseg + jitter_interference(interferers, bounds, t)
            })
        })
        .collect()
}

fn jitter_interference(interferers: &[Task], bounds: &[Duration], delta: Duration) -> Service {
    interferers
        .iter()
        .zip(bounds)
        .map(|(hp, hp_wcrt)| hp.interference(hp_wcrt.saturating_sub(hp.execution), delta))
        .sum()
}
