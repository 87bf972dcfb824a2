/*! Iterative search for the least fixed point of a monotone
busy-period recurrence.

Every analysis in this crate boils down to solving an equation of the
shape `t = workload(t)` for the smallest non-negative `t`, where
`workload` is monotone non-decreasing (more time can only admit more
interfering demand). The [search] routine below solves such equations
by plain Kleene iteration and gives up as soon as an iterate crosses a
caller-supplied divergence limit, which for the response-time analyses
is the relative deadline of the task under analysis: by monotonicity
the iterates can never shrink back below the limit, so continuing
would be pointless.
*/

use thiserror::Error;

use crate::time::{Duration, Service};

/// Error type returned when a fixed-point search fails.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, PartialOrd)]
pub enum SearchFailure {
    /// No fixed point at or below the given divergence threshold
    /// exists. When the threshold is a deadline, this is the
    /// deadline-miss signal.
    #[error("no fixed point at or below {limit} found")]
    DivergenceLimitExceeded { limit: Duration },
}

pub type SearchResult = Result<Duration, SearchFailure>;

/// Conduct an iterative fixed-point search of the monotone
/// `workload` function, up to the given divergence threshold.
///
/// The caller must pick `origin` no larger than the least fixed
/// point (zero is always safe); the iteration then converges to
/// exactly the least fixed point at or above `origin`, or reports a
/// [SearchFailure] once an iterate exceeds `divergence_limit`.
pub fn search<RHS>(origin: Duration, divergence_limit: Duration, workload: RHS) -> SearchResult
where
    RHS: Fn(Duration) -> Service,
{
    let mut assumed_response_time = origin;
    loop {
        let response_time_bound = workload(assumed_response_time);
        if response_time_bound > divergence_limit {
            // monotone, so the iterates only grow from here
            return Err(SearchFailure::DivergenceLimitExceeded {
                limit: divergence_limit,
            });
        }
        if response_time_bound <= assumed_response_time {
            // we have converged
            let converged = response_time_bound;
            // In debug mode, compare against the brute-force solution.
            #[cfg(debug_assertions)]
            debug_assert_eq!(
                brute_force_search(origin, divergence_limit, &workload),
                Ok(converged)
            );
            return Ok(converged);
        }
        // continue iterating
        assumed_response_time = response_time_bound;
    }
}

/// Very slow, naive scan for the least fixed point at or above
/// `origin`. Do not use --- use [search] instead.
#[cfg(debug_assertions)]
fn brute_force_search<RHS>(
    origin: Duration,
    divergence_limit: Duration,
    workload: &RHS,
) -> SearchResult
where
    RHS: Fn(Duration) -> Service,
{
    for t in origin..=divergence_limit {
        if workload(t) == t {
            return Ok(t);
        }
    }
    Err(SearchFailure::DivergenceLimitExceeded {
        limit: divergence_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_least_fixed_point() {
        // t = 2 + 3 * ceil(t / 10) stabilizes at 5
        let rhs = |t: Duration| 2 + 3 * (t / 10 + (t % 10 > 0) as u64);
        assert_eq!(search(0, 100, rhs), Ok(5));
        assert_eq!(search(2, 100, rhs), Ok(5));
    }

    #[test]
    fn constant_workload_is_its_own_fixed_point() {
        assert_eq!(search(0, 10, |_| 7), Ok(7));
    }

    #[test]
    fn stops_at_divergence_limit() {
        // t = t + 1 has no fixed point at all
        let result = search(0, 25, |t| t + 1);
        assert_eq!(
            result,
            Err(SearchFailure::DivergenceLimitExceeded { limit: 25 })
        );
    }

    #[test]
    fn gives_up_without_iterating_past_the_limit() {
        // the very first iterate already exceeds the limit
        assert_eq!(
            search(11, 10, |t| t),
            Err(SearchFailure::DivergenceLimitExceeded { limit: 10 })
        );
    }
}
