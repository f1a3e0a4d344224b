use std::time::Duration;

/// Number of fractional digits kept by decimal division.
pub const DIVISION_PRECISION: usize = 50;

/// Maximum number of Newton iterations when computing roots.
pub const ROOT_ITERATIONS: usize = 100;

/// Extra digits of headroom on the root convergence limit.
pub const ROOT_GUARD_DIGITS: usize = 5;

/// Interval between successive `await` condition polls.
pub const AWAIT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Maximum number of parameters or arguments on a single function.
pub const MAX_PARAMS: usize = 255;

/// Maximum nesting depth accepted by the parser.
pub const MAX_PARSE_DEPTH: usize = 100;
