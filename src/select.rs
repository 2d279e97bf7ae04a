//! Pool views and selection strategies over eligible tokens.

// crates.io
use rand::Rng;
// self
use crate::{_prelude::*, cooldown::CooldownRegistry, roster::TokenRoster, token::SessionToken};

/// Selection strategy for handing out the next token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
	/// Cycle deterministically through eligible tokens in roster order.
	RoundRobin,
	/// Draw a uniformly random eligible token.
	Random,
}
impl Strategy {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Strategy::RoundRobin => "round_robin",
			Strategy::Random => "random",
		}
	}
}
impl Display for Strategy {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Point-in-time snapshot of eligible tokens with a per-view rotation cursor.
///
/// A view is owned by the caller that built it and is never shared across threads; it goes
/// stale as soon as the roster or registry changes, which is acceptable for its
/// one-selection-round lifetime. The cursor is deliberately view-local state rather than a
/// process-wide rotating index.
#[derive(Clone, Debug)]
pub struct PoolView {
	members: Vec<SessionToken>,
	cursor: usize,
}
impl PoolView {
	/// Builds a view from one roster snapshot filtered by the registry at the given instant.
	///
	/// Relative roster order is preserved. The member set comes from a single snapshot, so it
	/// is never torn; a quarantine racing the filter pass may land on either side, which is
	/// fine for minutes-scale cooldown windows. An empty result is a valid view—emptiness
	/// surfaces at selection time.
	pub fn build_at(
		roster: &TokenRoster,
		cooldowns: &CooldownRegistry,
		instant: OffsetDateTime,
	) -> Self {
		let members = roster
			.snapshot()
			.into_iter()
			.filter(|token| !cooldowns.is_quarantined_at(token, instant))
			.collect();

		Self { members, cursor: 0 }
	}

	/// Builds a view evaluated against the current wall clock.
	pub fn build(roster: &TokenRoster, cooldowns: &CooldownRegistry) -> Self {
		Self::build_at(roster, cooldowns, OffsetDateTime::now_utc())
	}

	/// Advances the rotation cursor by one position modulo the view length and returns the
	/// token at the new position.
	pub fn advance(&mut self) -> Result<SessionToken> {
		if self.members.is_empty() {
			return Err(Error::EmptyPool);
		}

		self.cursor = (self.cursor + 1) % self.members.len();

		Ok(self.members[self.cursor].clone())
	}

	/// Returns a uniformly random member and repositions the cursor on it, so a following
	/// [`PoolView::advance`] continues rotation from the pick.
	pub fn random(&mut self) -> Result<SessionToken> {
		if self.members.is_empty() {
			return Err(Error::EmptyPool);
		}

		self.cursor = rand::rng().random_range(0..self.members.len());

		Ok(self.members[self.cursor].clone())
	}

	/// Picks one token using the provided strategy.
	pub fn select(&mut self, strategy: Strategy) -> Result<SessionToken> {
		match strategy {
			Strategy::RoundRobin => self.advance(),
			Strategy::Random => self.random(),
		}
	}

	/// Removes the token from this view instance, clamping the cursor back into range.
	///
	/// This is the one post-construction mutation a view supports. It covers the view-local
	/// half of a mid-round invalidation;
	/// [`SessionPool::report_invalid_in_view`](crate::pool::SessionPool::report_invalid_in_view)
	/// combines it with the roster removal.
	pub fn remove(&mut self, token: &SessionToken) -> Result<()> {
		let position = self.members.iter().position(|member| member == token).ok_or(Error::NotFound)?;

		self.members.remove(position);

		if self.cursor >= self.members.len() {
			self.cursor = 0;
		}

		Ok(())
	}

	/// Members in view order.
	pub fn members(&self) -> &[SessionToken] {
		&self.members
	}

	/// Number of eligible members.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Whether the view has no members.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashSet;
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	fn token(value: &str) -> SessionToken {
		SessionToken::new(value).expect("Token fixture should be valid.")
	}

	fn seeded_view(values: &[&str]) -> PoolView {
		let roster = TokenRoster::default();

		roster.initialize(values.iter().copied().map(token));

		PoolView::build_at(&roster, &CooldownRegistry::default(), datetime!(2026-01-01 00:00 UTC))
	}

	fn expose_all(view: &PoolView) -> Vec<String> {
		view.members().iter().map(|member| member.expose().to_owned()).collect()
	}

	#[test]
	fn build_filters_quarantined_members_in_order() {
		let roster = TokenRoster::default();
		let cooldowns = CooldownRegistry::default();
		let now = datetime!(2026-01-01 00:00 UTC);

		roster.initialize([token("a"), token("b"), token("c"), token("d")]);
		cooldowns.quarantine_until(token("b"), now + Duration::minutes(20));
		cooldowns.quarantine_until(token("d"), now + Duration::minutes(20));

		let view = PoolView::build_at(&roster, &cooldowns, now);

		assert_eq!(expose_all(&view), ["a", "c"]);

		let after = PoolView::build_at(&roster, &cooldowns, now + Duration::minutes(20));

		assert_eq!(expose_all(&after), ["a", "b", "c", "d"]);
	}

	#[test]
	fn empty_views_are_valid_until_selection() {
		let mut view = seeded_view(&[]);

		assert!(view.is_empty());
		assert_eq!(view.advance(), Err(Error::EmptyPool));
		assert_eq!(view.random(), Err(Error::EmptyPool));
	}

	#[test]
	fn rotation_visits_each_member_once_per_cycle() {
		let mut view = seeded_view(&["a", "b", "c"]);
		let picks: Vec<_> = (0..6)
			.map(|_| {
				view.advance().expect("Rotation over a non-empty view should succeed.").expose().to_owned()
			})
			.collect();

		// Advance-then-read starts the cycle at index 1 and wraps modulo the length.
		assert_eq!(picks, ["b", "c", "a", "b", "c", "a"]);
	}

	#[test]
	fn random_reaches_every_member_and_repositions_the_cursor() {
		let mut view = seeded_view(&["a", "b", "c"]);
		let mut seen = HashSet::new();

		for _ in 0..256 {
			let pick = view.random().expect("Random selection over a non-empty view should succeed.");
			let position = view
				.members()
				.iter()
				.position(|member| *member == pick)
				.expect("The pick should be a view member.");
			let follow_up = view.advance().expect("Rotation after a random pick should succeed.");

			assert_eq!(follow_up, view.members()[(position + 1) % 3].clone());
			seen.insert(pick.expose().to_owned());
		}

		assert_eq!(seen.len(), 3, "Every member should be reachable by random selection.");
	}

	#[test]
	fn select_dispatches_by_strategy() {
		let mut view = seeded_view(&["a", "b"]);

		assert_eq!(
			view.select(Strategy::RoundRobin).expect("Round-robin select should succeed."),
			token("b")
		);
		assert!(view.select(Strategy::Random).is_ok());
	}

	#[test]
	fn remove_clamps_the_cursor() {
		let mut view = seeded_view(&["a", "b", "c"]);

		view.advance().expect("First advance should succeed.");
		view.advance().expect("Second advance should succeed.");

		// Cursor sits on "c"; removing it leaves the cursor out of range, so it resets.
		view.remove(&token("c")).expect("Removing a view member should succeed.");

		assert_eq!(expose_all(&view), ["a", "b"]);
		assert_eq!(view.advance().expect("Advance after removal should succeed."), token("b"));
		assert_eq!(view.remove(&token("c")), Err(Error::NotFound));
	}

	#[test]
	fn remove_keeps_in_range_cursor() {
		let mut view = seeded_view(&["a", "b", "c"]);

		view.remove(&token("a")).expect("Removing the head member should succeed.");

		assert_eq!(expose_all(&view), ["b", "c"]);
		assert_eq!(view.advance().expect("Advance after removal should succeed."), token("c"));
	}

	#[test]
	fn strategy_labels_are_stable() {
		assert_eq!(Strategy::RoundRobin.as_str(), "round_robin");
		assert_eq!(Strategy::Random.as_str(), "random");
		assert_eq!(
			serde_json::to_string(&Strategy::RoundRobin).expect("Strategy should serialize."),
			"\"round_robin\""
		);
	}
}
