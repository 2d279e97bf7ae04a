//! Authoritative roster of live session tokens.

// self
use crate::{_prelude::*, token::SessionToken};

/// Shared, mutable, ordered set of unique live tokens.
///
/// Populated once at process start and shrunk at runtime by explicit removal. All mutation and
/// iteration goes through one lock; readers take copies so later mutation never tears a
/// sequence a caller already holds.
#[derive(Debug, Default)]
pub struct TokenRoster(RwLock<Vec<SessionToken>>);
impl TokenRoster {
	/// Replaces the whole roster atomically, deduplicating while preserving first-seen order.
	///
	/// An empty iterator is valid and leaves the roster empty.
	pub fn initialize(&self, values: impl IntoIterator<Item = SessionToken>) {
		let mut next = Vec::new();

		for token in values {
			if !next.contains(&token) {
				next.push(token);
			}
		}

		*self.0.write() = next;
	}

	/// Returns an owned copy of the current members in roster order.
	pub fn snapshot(&self) -> Vec<SessionToken> {
		self.0.read().clone()
	}

	/// Removes the token if present, or reports [`Error::NotFound`].
	pub fn remove(&self, token: &SessionToken) -> Result<()> {
		let mut guard = self.0.write();
		let position = guard.iter().position(|member| member == token).ok_or(Error::NotFound)?;

		guard.remove(position);

		Ok(())
	}

	/// Current member count.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Whether the roster holds no tokens.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn token(value: &str) -> SessionToken {
		SessionToken::new(value).expect("Token fixture should be valid.")
	}

	fn values(roster: &TokenRoster) -> Vec<String> {
		roster.snapshot().iter().map(|member| member.expose().to_owned()).collect()
	}

	#[test]
	fn initialize_replaces_and_dedups_in_order() {
		let roster = TokenRoster::default();

		roster.initialize([token("a"), token("b"), token("a"), token("c"), token("b")]);

		assert_eq!(values(&roster), ["a", "b", "c"]);

		roster.initialize([token("x")]);

		assert_eq!(values(&roster), ["x"]);

		roster.initialize([]);

		assert!(roster.is_empty());
	}

	#[test]
	fn snapshots_are_stable_under_mutation() {
		let roster = TokenRoster::default();

		roster.initialize([token("a"), token("b")]);

		let copy = roster.snapshot();

		roster.remove(&token("a")).expect("Removing a member should succeed.");

		assert_eq!(copy.len(), 2, "An earlier snapshot must not observe later removals.");
		assert_eq!(roster.len(), 1);
	}

	#[test]
	fn remove_reports_not_found() {
		let roster = TokenRoster::default();

		roster.initialize([token("a")]);

		assert_eq!(roster.remove(&token("a")), Ok(()));
		assert_eq!(roster.remove(&token("a")), Err(Error::NotFound));
		assert_eq!(roster.remove(&token("never-seen")), Err(Error::NotFound));
	}
}
