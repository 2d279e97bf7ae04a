//! Environment-sourced pool configuration.

// std
use std::env;
// self
use crate::{_prelude::*, pool::SessionPool, token::SessionToken};

/// Environment variable holding the comma-separated session token list.
pub const TOKENS_ENV: &str = "SESSION_TOKENS";
/// Environment variable holding the cooldown window in seconds.
pub const COOLDOWN_SECS_ENV: &str = "SESSION_COOLDOWN_SECS";
/// Cooldown applied when [`COOLDOWN_SECS_ENV`] is unset or unparsable.
pub const DEFAULT_COOLDOWN: Duration = Duration::seconds(60);

/// Startup configuration for a [`SessionPool`].
///
/// Configuration never fails the process: missing or malformed values degrade to an empty
/// token list and [`DEFAULT_COOLDOWN`], and an empty pool simply reports
/// [`Error::EmptyPool`](crate::error::Error::EmptyPool) on every acquire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
	/// Tokens seeding the pool, in configured order.
	pub tokens: Vec<SessionToken>,
	/// Cooldown window applied when a token reports rate-limited.
	pub cooldown: Duration,
}
impl PoolConfig {
	/// Reads the configuration from the process environment.
	pub fn from_env() -> Self {
		Self::from_raw(
			env::var(TOKENS_ENV).ok().as_deref(),
			env::var(COOLDOWN_SECS_ENV).ok().as_deref(),
		)
	}

	fn from_raw(tokens: Option<&str>, cooldown_secs: Option<&str>) -> Self {
		let tokens = tokens.map(parse_token_list).unwrap_or_default();
		let cooldown = cooldown_secs
			.and_then(|raw| raw.trim().parse::<i64>().ok())
			.map(Duration::seconds)
			.unwrap_or(DEFAULT_COOLDOWN);

		Self { tokens, cooldown }
	}

	/// Builds a pool seeded with the configured tokens.
	pub fn build_pool(&self) -> SessionPool {
		let pool = SessionPool::new();

		pool.initialize(self.tokens.iter().cloned());

		pool
	}
}

/// Splits a comma-separated token list, trimming entries and skipping empty ones.
pub fn parse_token_list(raw: &str) -> Vec<SessionToken> {
	raw.split(',').filter_map(|entry| SessionToken::new(entry).ok()).collect()
}
