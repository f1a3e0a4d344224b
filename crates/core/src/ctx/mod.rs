pub mod reason;

pub use reason::Reason;

use crate::err::Error;
use std::time::{Duration, Instant};

/// The execution context of a single script run.
///
/// A context optionally carries a deadline. The evaluator consults it
/// between statements and on every `await` poll, so a script that overruns
/// its budget stops at the next statement boundary.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Context {
	// An optional deadline.
	deadline: Option<Instant>,
	// The configured time limit, for diagnostics.
	limit: Option<Duration>,
}

impl Context {
	/// Create an empty background context without a deadline.
	pub fn background() -> Self {
		Context {
			deadline: None,
			limit: None,
		}
	}

	/// Create a context which times out after the given duration.
	pub fn with_timeout(timeout: Duration) -> Self {
		Context {
			deadline: Instant::now().checked_add(timeout),
			limit: Some(timeout),
		}
	}

	/// Get the remaining time budget, if a deadline is armed.
	pub fn timeout(&self) -> Option<Duration> {
		self.deadline.map(|v| v.saturating_duration_since(Instant::now()))
	}

	/// Check if the context is done. If it returns `None` the operation may
	/// proceed, otherwise the operation should be stopped.
	pub fn done(&self) -> Option<Reason> {
		match self.deadline {
			Some(deadline) if deadline <= Instant::now() => Some(Reason::Timedout),
			_ => None,
		}
	}

	/// Check if the context is ok to continue.
	pub fn is_ok(&self) -> bool {
		self.done().is_none()
	}

	/// Check if the context is not ok to continue, because it timed out.
	pub fn is_timedout(&self) -> bool {
		matches!(self.done(), Some(Reason::Timedout))
	}

	/// Fail with a [`Error::Timeout`] on the given line if the deadline has
	/// passed.
	pub fn check(&self, line: u32) -> Result<(), Error> {
		match self.done() {
			Some(Reason::Timedout) => {
				let limit = self.limit.unwrap_or_default().as_millis() as u64;
				Err(Error::Timeout(limit).at_line(line))
			}
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn a_background_context_never_expires() {
		let ctx = Context::background();
		assert!(ctx.is_ok());
		assert!(ctx.done().is_none());
		assert!(ctx.timeout().is_none());
		assert!(ctx.check(1).is_ok());
	}

	#[test]
	fn an_expired_deadline_reports_a_timeout() {
		let ctx = Context::with_timeout(Duration::from_millis(0));
		assert!(ctx.is_timedout());
		assert_eq!(ctx.done(), Some(Reason::Timedout));
		let err = ctx.check(7).unwrap_err();
		assert!(err.is_timeout());
		assert!(matches!(err, Error::At { line: 7, .. }));
	}

	#[test]
	fn a_live_deadline_reports_remaining_time() {
		let ctx = Context::with_timeout(Duration::from_secs(60));
		assert!(ctx.is_ok());
		assert!(ctx.timeout().unwrap() <= Duration::from_secs(60));
		assert!(ctx.check(1).is_ok());
	}
}
