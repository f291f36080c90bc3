use std::fmt;

use serde::{Deserialize, Serialize};

/// Username and password for a single login attempt. Never persisted.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

impl Credentials {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			password: password.into(),
		}
	}

	/// Both inputs are required before anything is sent.
	pub fn is_complete(&self) -> bool {
		!self.username.trim().is_empty() && !self.password.is_empty()
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginOutcome {
	pub success: bool,
	pub message: String,
	pub username: Option<String>,
}
