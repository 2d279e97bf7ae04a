//! Optional observability helpers for pool operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit `session_pool.op` spans tagged with the operation and the
//!   selection strategy.
//! - Enable `metrics` to increment the `session_pool_acquire_total` counter for every acquire,
//!   labeled by `strategy` + `outcome`.

// self
use crate::{_prelude::*, select::Strategy};

/// Outcome labels recorded for each acquire attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AcquireOutcome {
	/// A token was handed out.
	Hit,
	/// No eligible token existed.
	Empty,
}
impl AcquireOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AcquireOutcome::Hit => "hit",
			AcquireOutcome::Empty => "empty",
		}
	}
}
impl Display for AcquireOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records an acquire outcome via the global metrics recorder (when enabled).
pub fn record_acquire(strategy: Strategy, outcome: AcquireOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"session_pool_acquire_total",
			"strategy" => strategy.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (strategy, outcome);
	}
}

/// A span builder used by pool operations.
#[derive(Clone, Debug)]
pub struct PoolSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl PoolSpan {
	/// Creates a new span tagged with the provided operation + strategy.
	pub fn new(op: &'static str, strategy: Strategy) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("session_pool.op", op, strategy = strategy.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (op, strategy);

			Self {}
		}
	}

	/// Enters the span for the duration of a synchronous pool operation.
	pub fn entered(self) -> PoolSpanGuard {
		#[cfg(feature = "tracing")]
		{
			PoolSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			PoolSpanGuard {}
		}
	}
}

/// RAII guard returned by [`PoolSpan::entered`].
pub struct PoolSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for PoolSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("PoolSpanGuard(..)")
	}
}
