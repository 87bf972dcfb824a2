/// This library uses a simple discrete time model: all quantities are
/// expressed as non-negative multiples of an arbitrary base unit
/// (e.g., nanoseconds or processor cycles), which callers choose and
/// quantize to.
pub type Time = u64;

/// Syntactic sugar to give a hint that a time value denotes an
/// interval length.
pub type Duration = Time;

/// Syntactic sugar to give a hint that a time value represents some
/// amount of processor demand or supply.
pub type Service = Time;
