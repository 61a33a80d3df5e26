//! Router settings.
//!
//! Every field defaults to the behavior of a plain browser-history router:
//! served from `/`, trailing slash optional, case-insensitive matching.
//!
//! ```toml
//! [router]
//! base = "/yard"
//! strict = false
//! sensitive = false
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading [`RouterSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The TOML document could not be parsed.
	#[error("Failed to parse router settings: {0}")]
	Parse(#[from] toml::de::Error),
	/// The base path is not absolute.
	#[error("Router base must start with '/': {0}")]
	InvalidBase(String),
}

/// Matching and URL options shared by the router and its history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
	/// Path prefix the application is served under.
	pub base: String,
	/// When true, `/home/` no longer matches `/home`.
	pub strict: bool,
	/// When true, `/Home` no longer matches `/home`.
	pub sensitive: bool,
}

impl Default for RouterSettings {
	fn default() -> Self {
		Self {
			base: "/".to_string(),
			strict: false,
			sensitive: false,
		}
	}
}

#[derive(Deserialize)]
struct SettingsFile {
	#[serde(default)]
	router: RouterSettings,
}

impl RouterSettings {
	/// Parses settings from the `[router]` table of a TOML document.
	///
	/// A document without a `[router]` table yields the defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let file: SettingsFile = toml::from_str(source)?;
		file.router.validated()
	}

	/// Checks invariants and normalizes the base path.
	pub fn validated(mut self) -> Result<Self, SettingsError> {
		if !self.base.starts_with('/') {
			return Err(SettingsError::InvalidBase(self.base));
		}
		self.base = normalize_base(&self.base);
		Ok(self)
	}
}

/// Drops trailing slashes so `"/yard/"` and `"/yard"` are one base; `"/"` stays `"/"`.
pub(crate) fn normalize_base(base: &str) -> String {
	let trimmed = base.trim_end_matches('/');
	if trimmed.is_empty() {
		"/".to_string()
	} else {
		trimmed.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = RouterSettings::default();
		assert_eq!(settings.base, "/");
		assert!(!settings.strict);
		assert!(!settings.sensitive);
	}

	#[rstest]
	fn test_from_toml_full() {
		let settings = RouterSettings::from_toml_str(
			"[router]\nbase = \"/yard/\"\nstrict = true\nsensitive = true\n",
		)
		.unwrap();

		assert_eq!(settings.base, "/yard");
		assert!(settings.strict);
		assert!(settings.sensitive);
	}

	#[rstest]
	fn test_from_toml_missing_table_uses_defaults() {
		let settings = RouterSettings::from_toml_str("").unwrap();
		assert_eq!(settings, RouterSettings::default());
	}

	#[rstest]
	fn test_from_toml_partial() {
		let settings = RouterSettings::from_toml_str("[router]\nstrict = true\n").unwrap();
		assert_eq!(settings.base, "/");
		assert!(settings.strict);
	}

	#[rstest]
	fn test_rejects_relative_base() {
		let result = RouterSettings::from_toml_str("[router]\nbase = \"yard\"\n");
		assert!(matches!(result, Err(SettingsError::InvalidBase(_))));
	}

	#[rstest]
	fn test_rejects_malformed_toml() {
		let result = RouterSettings::from_toml_str("[router\nbase = ");
		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}

	#[rstest]
	#[case("/", "/")]
	#[case("///", "/")]
	#[case("/yard", "/yard")]
	#[case("/yard/", "/yard")]
	fn test_normalize_base(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(normalize_base(input), expected);
	}
}
