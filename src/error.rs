//! Pool-level error types shared across the roster, selection, and facade operations.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical pool error exposed by public APIs.
///
/// Every variant is local and recoverable; callers decide whether to retry later or fail the
/// inbound request. The pool never retries internally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
	/// No eligible token exists: the roster is empty or every member is cooling down.
	#[error("No eligible session token is available.")]
	EmptyPool,
	/// The token is not a current member of the roster or view.
	#[error("Session token is not a member of the pool.")]
	NotFound,
}
