/*! Schedulability analysis for self-suspending real-time tasks

This crate decides, offline, whether an ordered set of fixed-priority
periodic/sporadic tasks that may *self-suspend* during execution
meets all deadlines under worst-case conditions. It never executes
any task --- it only predicts response times.

The crate is organized as follows:

- [time] --- the discrete time model underlying all analyses.
- [task] --- the task model and input validation.
- [fixed_point] --- the iterative solver for the monotone busy-period
  recurrences that all response-time bounds reduce to.
- [suspension] --- the suspension-aware response-time analyses: a
  fast sufficient test, an exact (factorial) test, and the
  schedulability test orchestrating the two.
- [segmented] --- the segment-aware task model and the interface to
  external MILP-backed analyses.

Task-set generation is deliberately out of scope; tasks arrive here
fully formed, in priority order.
*/

pub mod fixed_point;
pub mod segmented;
pub mod suspension;
pub mod task;
pub mod time;
