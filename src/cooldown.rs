//! Cooldown registry tracking which tokens are rate-limited and until when.

// self
use crate::{_prelude::*, token::SessionToken};

/// Tracks per-token cooldown expirations with lazy expiry on read.
///
/// An entry whose expiration is at or before the query instant is logically absent even while
/// still stored; every read path treats it as expired. No background sweep is required for
/// correctness—[`CooldownRegistry::purge_expired_at`] only bounds memory.
///
/// Point lookups share one read lock; a quarantine insert takes the write lock for a single
/// O(1) map operation, so unrelated lookups block only for that bounded window. At the
/// expected tens-of-entries scale this stays well below contention that would warrant
/// sharding the map.
#[derive(Debug, Default)]
pub struct CooldownRegistry(RwLock<HashMap<SessionToken, OffsetDateTime>>);
impl CooldownRegistry {
	/// Quarantines the token until `now + duration`, overwriting any prior expiration.
	///
	/// Re-quarantining before the prior window elapses resets the window unconditionally, so a
	/// later call may extend or shorten it. This is a policy choice, not an error.
	pub fn quarantine(&self, token: SessionToken, duration: Duration) {
		self.quarantine_until(token, OffsetDateTime::now_utc() + duration);
	}

	/// Quarantines the token until the provided instant, overwriting any prior expiration.
	pub fn quarantine_until(&self, token: SessionToken, expires_at: OffsetDateTime) {
		self.0.write().insert(token, expires_at);
	}

	/// Returns whether the token is quarantined right now.
	pub fn is_quarantined(&self, token: &SessionToken) -> bool {
		self.is_quarantined_at(token, OffsetDateTime::now_utc())
	}

	/// Returns whether the token is quarantined at the provided instant.
	///
	/// An entry found expired is dropped as a side effect so the registry does not accumulate
	/// dead entries; the deletion is not observable beyond freed memory.
	pub fn is_quarantined_at(&self, token: &SessionToken, instant: OffsetDateTime) -> bool {
		match self.0.read().get(token) {
			Some(expires_at) if *expires_at > instant => return true,
			Some(_) => (),
			None => return false,
		}

		// An expired entry was observed under the read lock; re-check under the write lock in
		// case a concurrent quarantine refreshed it in between.
		let mut guard = self.0.write();

		match guard.get(token) {
			Some(expires_at) if *expires_at > instant => true,
			Some(_) => {
				guard.remove(token);

				false
			},
			None => false,
		}
	}

	/// Drops any entry for the token regardless of expiration.
	///
	/// Used when a token leaves the live roster so the registry carries no orphan entries.
	pub fn release(&self, token: &SessionToken) {
		self.0.write().remove(token);
	}

	/// Removes every entry expired as of the provided instant, returning how many were dropped.
	pub fn purge_expired_at(&self, instant: OffsetDateTime) -> usize {
		let mut guard = self.0.write();
		let before = guard.len();

		guard.retain(|_, expires_at| *expires_at > instant);

		before - guard.len()
	}

	/// Number of entries currently stored, expired-but-unpruned entries included.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Whether no entries are stored.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}
}
