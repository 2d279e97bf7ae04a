//! Opaque session token type with redacted formatting.

// std
use std::borrow::Borrow;
// self
use crate::_prelude::*;

/// Error returned when session token validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum TokenError {
	/// The token was empty or all whitespace.
	#[error("Session token cannot be empty.")]
	Empty,
}

/// Opaque session token used once per upstream call.
///
/// The value is the identity; no internal structure is interpreted. Formatting is redacted so
/// tokens never leak through logs; call [`SessionToken::expose`] at the outbound call site.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionToken(String);
impl SessionToken {
	/// Parses a token, trimming surrounding whitespace and rejecting empty results.
	pub fn new(value: impl AsRef<str>) -> Result<Self, TokenError> {
		let view = value.as_ref().trim();

		if view.is_empty() {
			return Err(TokenError::Empty);
		}

		Ok(Self(view.to_owned()))
	}

	/// Returns the raw token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for SessionToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Borrow<str> for SessionToken {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<SessionToken> for String {
	fn from(value: SessionToken) -> Self {
		value.0
	}
}
impl TryFrom<String> for SessionToken {
	type Error = TokenError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(&value)
	}
}
impl FromStr for SessionToken {
	type Err = TokenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for SessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SessionToken").field(&"<redacted>").finish()
	}
}
impl Display for SessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
