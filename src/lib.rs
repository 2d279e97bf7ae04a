//! Quarantine-aware session token pool—round-robin and random rotation with per-token
//! cooldowns for upstreams that rate-limit by credential.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod cooldown;
pub mod error;
pub mod obs;
pub mod pool;
pub mod roster;
pub mod select;
pub mod token;

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Error, Result};
}

pub use pool::SessionPool;
pub use select::Strategy;
pub use token::SessionToken;
