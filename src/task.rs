/*! The task model: periodic/sporadic tasks that may self-suspend.

This module provides the [Task] record consumed by the analyses in
[crate::suspension], input validation shared with the segment-aware
model in [crate::segmented], and utilization diagnostics.
*/

use thiserror::Error;

use crate::time::{Duration, Service};

/// A periodic or sporadic task under fixed-priority scheduling that
/// may self-suspend while executing (e.g., to wait for a coprocessor
/// or an I/O completion).
///
/// A task set is an ordered slice `&[Task]` in which the index *is*
/// the fixed priority: index 0 denotes the highest-priority task, and
/// ties are impossible by construction. The analyses never mutate a
/// task set; computed response-time bounds are returned separately,
/// in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    /// Worst-case pure computation demand of one job (WCET).
    pub execution: Service,
    /// Total worst-case self-suspension time of one job.
    pub sslength: Duration,
    /// Minimum inter-arrival separation between consecutive jobs.
    pub period: Duration,
    /// Relative deadline, counted from a job's arrival.
    pub deadline: Duration,
}

impl Task {
    /// The demand of one job in isolation: computation plus
    /// suspension. This is also the response time of the task if
    /// nothing ever preempts it.
    pub fn cost(&self) -> Duration {
        self.execution + self.sslength
    }

    /// Worst-case processor demand this task injects into an
    /// interval of length `delta` when each of its releases may lag
    /// its period boundary by up to `jitter`.
    pub fn interference(&self, jitter: Duration, delta: Duration) -> Service {
        divide_with_ceil(delta + jitter, self.period) * self.execution
    }

    /// The fraction of the processor consumed by this task's
    /// computation demand. Suspension time does not occupy the
    /// processor and hence does not count.
    pub fn utilization(&self) -> f64 {
        self.execution as f64 / self.period as f64
    }

    /// Check the arithmetic constraints the analyses rely on, with
    /// `index` identifying the task in any reported error.
    pub fn check(&self, index: usize) -> Result<(), InvalidTask> {
        if self.period == 0 {
            Err(InvalidTask::NonPositivePeriod { index })
        } else if self.execution == 0 {
            Err(InvalidTask::NonPositiveExecution { index })
        } else if self.deadline == 0 {
            Err(InvalidTask::NonPositiveDeadline { index })
        } else {
            Ok(())
        }
    }
}

/// Error type describing a task set that the analyses cannot accept.
///
/// Each variant carries the priority index of the offending task.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidTask {
    /// The interference recurrence divides by the period.
    #[error("task {index}: period must be positive")]
    NonPositivePeriod { index: usize },
    /// A task that demands no computation is not a task.
    #[error("task {index}: execution demand must be positive")]
    NonPositiveExecution { index: usize },
    /// A zero relative deadline can never be met.
    #[error("task {index}: relative deadline must be positive")]
    NonPositiveDeadline { index: usize },
    /// `n` computation segments must be separated by exactly `n - 1`
    /// suspension segments.
    #[error("task {index}: suspension segments must number one fewer than computation segments")]
    MalformedDecomposition { index: usize },
    /// Computation segments must be non-empty intervals.
    #[error("task {index}: computation segments must be positive")]
    EmptySegment { index: usize },
}

/// Validate an entire task set, reporting the first offending task.
pub fn check_taskset(tasks: &[Task]) -> Result<(), InvalidTask> {
    tasks
        .iter()
        .enumerate()
        .try_for_each(|(index, task)| task.check(index))
}

/// Total computation utilization of a task set. A value above 1.0
/// means the set cannot be schedulable on a uniprocessor regardless
/// of suspension behavior.
pub fn total_utilization(tasks: &[Task]) -> f64 {
    tasks.iter().map(Task::utilization).sum()
}

// common helper function
fn divide_with_ceil(a: Duration, b: Duration) -> u64 {
    a / b + (a % b > 0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn interference_counts_delayed_releases() {
        let t = Task {
            execution: 3,
            sslength: 0,
            period: 10,
            deadline: 10,
        };
        assert_eq!(t.interference(0, 0), 0);
        assert_eq!(t.interference(0, 1), 3);
        assert_eq!(t.interference(0, 10), 3);
        assert_eq!(t.interference(0, 11), 6);
        // jitter shifts the whole pattern left
        assert_eq!(t.interference(4, 6), 3);
        assert_eq!(t.interference(4, 7), 6);
    }

    #[test]
    fn rejects_degenerate_tasks() {
        let ok = Task {
            execution: 1,
            sslength: 0,
            period: 5,
            deadline: 5,
        };
        assert_eq!(ok.check(0), Ok(()));

        let no_period = Task { period: 0, ..ok };
        assert_eq!(
            no_period.check(3),
            Err(InvalidTask::NonPositivePeriod { index: 3 })
        );

        let no_execution = Task { execution: 0, ..ok };
        assert_eq!(
            no_execution.check(1),
            Err(InvalidTask::NonPositiveExecution { index: 1 })
        );

        let no_deadline = Task { deadline: 0, ..ok };
        assert_eq!(
            no_deadline.check(2),
            Err(InvalidTask::NonPositiveDeadline { index: 2 })
        );

        assert_eq!(
            check_taskset(&[ok, no_execution]),
            Err(InvalidTask::NonPositiveExecution { index: 1 })
        );
        assert_eq!(check_taskset(&[ok, ok]), Ok(()));
    }

    #[test]
    fn utilization_ignores_suspension() {
        let t = Task {
            execution: 2,
            sslength: 6,
            period: 8,
            deadline: 8,
        };
        assert_approx_eq!(t.utilization(), 0.25);

        let ts = [
            t,
            Task {
                execution: 3,
                sslength: 0,
                period: 12,
                deadline: 12,
            },
        ];
        assert_approx_eq!(total_utilization(&ts), 0.5);
    }
}
