//! Path pattern matching for client-side routes.
//!
//! Patterns are literal paths such as `/quarry`, optionally with captures:
//! - `{name}` captures a single path segment (excludes `/`)
//! - `{name:*}` captures the rest of the path (includes `/`)
//!
//! Matching honours two options. Unless `strict` is set, a trailing slash
//! on either side is ignored. Unless `sensitive` is set, letters match
//! case-insensitively. Query strings and fragments never take part in
//! matching.

use super::error::RouterError;
use std::collections::HashMap;

/// Maximum allowed length for a client-side URL pattern string in bytes.
const MAX_CLIENT_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a client-side URL pattern.
const MAX_CLIENT_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for compiled regex in client-side patterns (in bytes).
const MAX_CLIENT_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// Options that change how a pattern matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOptions {
	/// Trailing slash is significant.
	pub strict: bool,
	/// Letter case is significant.
	pub sensitive: bool,
}

/// Returns the path portion of a location, without `?query` or `#hash`.
pub fn strip_query_and_hash(location: &str) -> &str {
	match location.find(['?', '#']) {
		Some(end) => &location[..end],
		None => location,
	}
}

/// A compiled path pattern.
#[derive(Debug, Clone)]
pub struct ClientPathPattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled regex pattern.
	regex: regex::Regex,
	/// Parameter names in order.
	param_names: Vec<String>,
	/// Whether this is an exact match pattern.
	is_exact: bool,
	options: PatternOptions,
}

impl ClientPathPattern {
	/// Compiles a pattern with default options (loose slash, any case).
	pub fn new(pattern: &str) -> Result<Self, RouterError> {
		Self::with_options(pattern, PatternOptions::default())
	}

	/// Compiles a pattern with explicit options.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidPattern`] if the pattern does not start
	/// with `/`, exceeds 1024 bytes or 32 segments, has an unclosed or empty
	/// capture, or compiles to an invalid regex.
	pub fn with_options(pattern: &str, options: PatternOptions) -> Result<Self, RouterError> {
		let invalid = |reason: String| RouterError::InvalidPattern {
			pattern: pattern.to_string(),
			reason,
		};

		if !pattern.starts_with('/') {
			return Err(invalid("pattern must start with '/'".to_string()));
		}

		// Reject patterns exceeding the maximum length to prevent ReDoS
		if pattern.len() > MAX_CLIENT_PATTERN_LENGTH {
			return Err(invalid(format!(
				"pattern length {} exceeds maximum allowed length of {} bytes",
				pattern.len(),
				MAX_CLIENT_PATTERN_LENGTH
			)));
		}

		let segment_count = pattern.split('/').count();
		if segment_count > MAX_CLIENT_PATH_SEGMENTS {
			return Err(invalid(format!(
				"pattern has {} path segments, exceeding maximum of {}",
				segment_count, MAX_CLIENT_PATH_SEGMENTS
			)));
		}

		let (regex_str, param_names) = Self::compile_pattern(pattern, options).map_err(invalid)?;

		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_CLIENT_REGEX_SIZE)
			.case_insensitive(!options.sensitive)
			.build()
			.map_err(|e| invalid(format!("failed to compile pattern regex: {}", e)))?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
			is_exact: !pattern.contains('{'),
			options,
		})
	}

	/// Compiles a pattern string into a regex and extracts parameter names.
	fn compile_pattern(
		pattern: &str,
		options: PatternOptions,
	) -> Result<(String, Vec<String>), String> {
		// Loose matching treats "/home/" and "/home" as the same route.
		let body = if !options.strict && pattern.len() > 1 {
			pattern.trim_end_matches('/')
		} else {
			pattern
		};

		let mut regex_str = String::from("^");
		let mut param_names = Vec::new();
		let mut chars = body.chars();

		while let Some(c) = chars.next() {
			match c {
				'{' => {
					let mut param = String::new();
					let mut is_wildcard = false;
					let mut closed = false;

					for next in chars.by_ref() {
						match next {
							'}' => {
								closed = true;
								break;
							}
							':' => is_wildcard = true,
							'*' if is_wildcard => {}
							other if is_wildcard => {
								return Err(format!("unsupported capture modifier '{}'", other));
							}
							other => param.push(other),
						}
					}

					if !closed {
						return Err(format!("unclosed parameter '{{{}'", param));
					}
					if param.is_empty() {
						return Err("empty parameter name".to_string());
					}

					if is_wildcard {
						regex_str.push_str(&format!("(?P<{}>.*)", param));
					} else {
						regex_str.push_str(&format!("(?P<{}>[^/]+)", param));
					}
					param_names.push(param);
				}
				'}' => return Err("unmatched '}'".to_string()),
				'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\' => {
					// Escape regex special characters
					regex_str.push('\\');
					regex_str.push(c);
				}
				_ => {
					regex_str.push(c);
				}
			}
		}

		if !options.strict && body.len() > 1 {
			regex_str.push_str("/?");
		}
		regex_str.push('$');
		Ok((regex_str, param_names))
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns the options the pattern was compiled with.
	pub fn options(&self) -> PatternOptions {
		self.options
	}

	/// Attempts to match a location against this pattern.
	///
	/// Any `?query` or `#hash` suffix is ignored. Returns the captured
	/// parameters on success.
	pub fn matches(&self, location: &str) -> Option<HashMap<String, String>> {
		let path = strip_query_and_hash(location);
		self.regex.captures(path).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name)
						.map(|m| (name.clone(), m.as_str().to_string()))
				})
				.collect()
		})
	}

	/// Generates a path from this pattern with the given parameters.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
		let mut result = self.pattern.clone();

		for name in &self.param_names {
			let value = params.get(name)?;
			let placeholder = format!("{{{}}}", name);
			let wildcard_placeholder = format!("{{{}:*}}", name);

			if result.contains(&placeholder) {
				result = result.replace(&placeholder, value);
			} else if result.contains(&wildcard_placeholder) {
				result = result.replace(&wildcard_placeholder, value);
			} else {
				return None;
			}
		}

		Some(result)
	}

	/// Checks if this pattern would match the given location.
	pub fn is_match(&self, location: &str) -> bool {
		self.regex.is_match(strip_query_and_hash(location))
	}

	/// Returns whether this is an exact match pattern (no parameters).
	pub fn is_exact(&self) -> bool {
		self.is_exact
	}

	/// Canonical form used to detect two patterns that match the same paths.
	///
	/// Parameter names do not affect matching, so `{id}` and `{slug}` both
	/// become `{}` and wildcards become `{*}`.
	pub(crate) fn canonical_key(&self) -> String {
		let mut shape = String::with_capacity(self.pattern.len());
		let mut chars = self.pattern.chars();
		while let Some(ch) = chars.next() {
			if ch == '{' {
				let inner: String = chars.by_ref().take_while(|&c| c != '}').collect();
				shape.push_str(if inner.ends_with(":*") { "{*}" } else { "{}" });
			} else {
				shape.push(ch);
			}
		}

		let mut key = if !self.options.strict && shape.len() > 1 {
			shape.trim_end_matches('/').to_string()
		} else {
			shape
		};
		if !self.options.sensitive {
			key = key.to_lowercase();
		}
		key
	}
}

impl PartialEq for ClientPathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern && self.options == other.options
	}
}

impl Eq for ClientPathPattern {}

impl std::fmt::Display for ClientPathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
