//! Error types for client-side routing.

use thiserror::Error;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// Route not found.
	#[error("Route not found: {0}")]
	NotFound(String),
	/// Invalid route name.
	#[error("Invalid route name: {0}")]
	InvalidRouteName(String),
	/// Missing parameter for reverse URL.
	#[error("Missing parameter: {0}")]
	MissingParameter(String),
	/// Navigation failed.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
	/// A route pattern could not be compiled.
	#[error("Invalid route pattern '{pattern}': {reason}")]
	InvalidPattern {
		/// The offending pattern.
		pattern: String,
		/// Why compilation failed.
		reason: String,
	},
	/// Two routes were registered with the same path.
	#[error("Duplicate route path: {0}")]
	DuplicatePath(String),
	/// Two routes were registered with the same name.
	#[error("Duplicate route name: {0}")]
	DuplicateName(String),
}
