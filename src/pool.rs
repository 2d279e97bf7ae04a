//! Facade combining the roster and cooldown registry behind one request-facing API.

// self
use crate::{
	_prelude::*,
	cooldown::CooldownRegistry,
	obs::{self, AcquireOutcome, PoolSpan},
	roster::TokenRoster,
	select::{PoolView, Strategy},
	token::SessionToken,
};

/// Process-wide pool of session tokens with quarantine-aware selection.
///
/// The roster and the cooldown registry are synchronized independently; no pool operation
/// holds a lock on one component while taking the other's. They meet only at view
/// construction, where one roster snapshot is filtered by per-token cooldown lookups.
#[derive(Debug, Default)]
pub struct SessionPool {
	roster: TokenRoster,
	cooldowns: CooldownRegistry,
}
impl SessionPool {
	/// Creates an empty pool; every acquire fails with [`Error::EmptyPool`] until
	/// [`SessionPool::initialize`] seeds it.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the pool membership from externally sourced configuration.
	///
	/// Meant to run once at process startup; an empty iterator is tolerated and simply leaves
	/// the pool empty. Cooldown state for re-seeded tokens is preserved.
	pub fn initialize(&self, tokens: impl IntoIterator<Item = SessionToken>) {
		self.roster.initialize(tokens);
	}

	/// Builds a fresh eligibility view against the current wall clock.
	///
	/// The view is owned by the caller and intended for one selection round; re-derive it per
	/// round rather than holding it across roster or cooldown changes.
	pub fn view(&self) -> PoolView {
		PoolView::build(&self.roster, &self.cooldowns)
	}

	/// Builds a fresh eligibility view evaluated at the provided instant.
	pub fn view_at(&self, instant: OffsetDateTime) -> PoolView {
		PoolView::build_at(&self.roster, &self.cooldowns, instant)
	}

	/// Acquires one token for an outbound request using the provided strategy.
	///
	/// Combines view construction and a single selection; the per-request entry point for the
	/// request-handling layer.
	pub fn acquire(&self, strategy: Strategy) -> Result<SessionToken> {
		let _guard = PoolSpan::new("acquire", strategy).entered();
		let picked = self.view().select(strategy);

		match &picked {
			Ok(_) => obs::record_acquire(strategy, AcquireOutcome::Hit),
			Err(_) => obs::record_acquire(strategy, AcquireOutcome::Empty),
		}

		picked
	}

	/// Quarantines the token for the provided cooldown window after an upstream rate-limit
	/// signal. Unconditional; repeated reports overwrite the window.
	pub fn report_rate_limited(&self, token: SessionToken, cooldown: Duration) {
		self.cooldowns.quarantine(token, cooldown);
	}

	/// Permanently removes a token the upstream rejected, releasing any cooldown entry so the
	/// registry carries no orphans. Reports [`Error::NotFound`] for non-members.
	pub fn report_invalid(&self, token: &SessionToken) -> Result<()> {
		self.roster.remove(token)?;
		self.cooldowns.release(token);

		Ok(())
	}

	/// Permanently removes a token mid-round: drops it from the live roster (releasing any
	/// cooldown entry) and from the caller's current view, clamping the view cursor back into
	/// range so rotation continues over the shrunk view.
	///
	/// The token may legitimately be absent from the view while still live (it was cooling
	/// down at view build time); only absence from the roster reports [`Error::NotFound`].
	pub fn report_invalid_in_view(
		&self,
		view: &mut PoolView,
		token: &SessionToken,
	) -> Result<()> {
		self.report_invalid(token)?;

		let _ = view.remove(token);

		Ok(())
	}

	/// The live roster backing this pool.
	pub fn roster(&self) -> &TokenRoster {
		&self.roster
	}

	/// The cooldown registry backing this pool.
	pub fn cooldowns(&self) -> &CooldownRegistry {
		&self.cooldowns
	}
}
