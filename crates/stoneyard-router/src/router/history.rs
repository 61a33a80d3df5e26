//! History backends.
//!
//! The router writes every navigation to a [`History`] and listens to it
//! for back/forward moves. Two backends exist:
//!
//! - [`WebHistory`]: browser-native history (`pushState`/`popstate`). URLs
//!   are plain paths under the configured base, never `#` fragments. On
//!   native targets it keeps the same entry stack in memory so server
//!   rendering and tests observe identical behavior.
//! - [`MemoryHistory`]: an in-process entry stack, independent of any
//!   browser.

use super::error::RouterError;
use crate::settings::normalize_base;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// State stored alongside each history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
	/// The location navigated to, relative to the base.
	pub path: String,
	/// Path parameters of the matched route.
	pub params: HashMap<String, String>,
	/// Name of the matched route, if it has one.
	pub route_name: Option<String>,
}

impl HistoryState {
	/// Creates a state for `path` with no params and no route name.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			..Self::default()
		}
	}

	/// Sets the path parameters.
	pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
		self.params = params;
		self
	}

	/// Sets the route name.
	pub fn with_route_name(mut self, route_name: Option<String>) -> Self {
		self.route_name = route_name;
		self
	}

	/// Serializes the state for storage in a browser history entry.
	pub fn to_json(&self) -> Result<String, RouterError> {
		serde_json::to_string(self).map_err(|e| RouterError::NavigationFailed(e.to_string()))
	}

	/// Restores a state written by [`HistoryState::to_json`].
	pub fn from_json(raw: &str) -> Option<Self> {
		serde_json::from_str(raw).ok()
	}
}

/// How a navigation changed the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// A new entry was added.
	Push,
	/// The current entry was overwritten.
	Replace,
	/// The user moved back or forward.
	Pop,
}

/// Callback fired when the current entry changes through back/forward.
pub type HistoryListener = Rc<dyn Fn(String, Option<HistoryState>)>;

/// A navigation history the router reads from and writes to.
pub trait History {
	/// The base path the application is served under.
	fn base(&self) -> &str;

	/// The current location relative to the base, including query and hash.
	fn location(&self) -> String;

	/// State attached to the current entry, if any.
	fn state(&self) -> Option<HistoryState>;

	/// Adds a new entry for `state.path`.
	fn push(&self, state: &HistoryState) -> Result<(), RouterError>;

	/// Overwrites the current entry with `state.path`.
	fn replace(&self, state: &HistoryState) -> Result<(), RouterError>;

	/// Moves `delta` entries through the stack (`-1` is back).
	fn go(&self, delta: isize) -> Result<(), RouterError>;

	/// Registers a listener for back/forward moves.
	fn listen(&self, listener: HistoryListener) -> Result<(), RouterError>;

	/// The URL written to the address bar for `path`.
	fn href(&self, path: &str) -> String {
		join_base(self.base(), path)
	}
}

/// Prefixes `path` with `base`.
pub fn join_base(base: &str, path: &str) -> String {
	if base == "/" {
		return if path.starts_with('/') {
			path.to_string()
		} else {
			format!("/{}", path)
		};
	}
	if path.starts_with('/') {
		format!("{}{}", base, path)
	} else {
		format!("{}/{}", base, path)
	}
}

/// Removes `base` from the front of `full`, yielding a location the router can match.
pub fn strip_base(base: &str, full: &str) -> String {
	if base == "/" {
		return full.to_string();
	}
	match full.strip_prefix(base) {
		Some("") => "/".to_string(),
		Some(rest) if rest.starts_with('/') => rest.to_string(),
		Some(rest) if rest.starts_with('?') || rest.starts_with('#') => format!("/{}", rest),
		_ => full.to_string(),
	}
}

#[derive(Debug, Clone)]
struct Entry {
	location: String,
	state: Option<HistoryState>,
}

/// In-memory history stack.
pub struct MemoryHistory {
	base: String,
	entries: RefCell<Vec<Entry>>,
	index: Cell<usize>,
	listeners: RefCell<Vec<HistoryListener>>,
}

impl std::fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryHistory")
			.field("base", &self.base)
			.field("entries", &self.entries.borrow().len())
			.field("index", &self.index.get())
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryHistory {
	/// Creates a history whose single entry is `/`.
	pub fn new() -> Self {
		Self::with_initial("/", "/")
	}

	/// Creates a history under `base` whose single entry is `initial`.
	///
	/// `initial` may be given with or without the base prefix.
	pub fn with_initial(base: &str, initial: &str) -> Self {
		let base = normalize_base(base);
		let location = strip_base(&base, initial);
		Self {
			base,
			entries: RefCell::new(vec![Entry {
				location,
				state: None,
			}]),
			index: Cell::new(0),
			listeners: RefCell::new(Vec::new()),
		}
	}

	/// Number of entries in the stack.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// Returns whether the stack is empty. Never true: there is always a current entry.
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}

	/// Position of the current entry.
	pub fn index(&self) -> usize {
		self.index.get()
	}

	/// The full URL of the current entry, as shown in the address bar.
	pub fn url(&self) -> String {
		self.href(&self.location())
	}
}

impl History for MemoryHistory {
	fn base(&self) -> &str {
		&self.base
	}

	fn location(&self) -> String {
		self.entries.borrow()[self.index.get()].location.clone()
	}

	fn state(&self) -> Option<HistoryState> {
		self.entries.borrow()[self.index.get()].state.clone()
	}

	fn push(&self, state: &HistoryState) -> Result<(), RouterError> {
		let mut entries = self.entries.borrow_mut();
		let next = self.index.get() + 1;
		// Pushing discards any forward entries.
		entries.truncate(next);
		entries.push(Entry {
			location: state.path.clone(),
			state: Some(state.clone()),
		});
		self.index.set(next);
		Ok(())
	}

	fn replace(&self, state: &HistoryState) -> Result<(), RouterError> {
		let mut entries = self.entries.borrow_mut();
		entries[self.index.get()] = Entry {
			location: state.path.clone(),
			state: Some(state.clone()),
		};
		Ok(())
	}

	fn go(&self, delta: isize) -> Result<(), RouterError> {
		let last = self.len() - 1;
		let target = self
			.index
			.get()
			.saturating_add_signed(delta)
			.min(last);
		if target == self.index.get() {
			return Ok(());
		}
		self.index.set(target);

		let (location, state) = {
			let entries = self.entries.borrow();
			(entries[target].location.clone(), entries[target].state.clone())
		};
		let listeners: Vec<HistoryListener> = self.listeners.borrow().clone();
		for listener in listeners {
			listener(location.clone(), state.clone());
		}
		Ok(())
	}

	fn listen(&self, listener: HistoryListener) -> Result<(), RouterError> {
		self.listeners.borrow_mut().push(listener);
		Ok(())
	}
}

/// Browser-native history.
///
/// On `wasm32` every call goes through `window.history` and
/// `window.location`. Elsewhere an in-memory stack stands in for the
/// browser.
pub struct WebHistory {
	base: String,
	#[cfg(not(target_arch = "wasm32"))]
	fallback: MemoryHistory,
}

impl std::fmt::Debug for WebHistory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WebHistory")
			.field("base", &self.base)
			.finish()
	}
}

impl Default for WebHistory {
	fn default() -> Self {
		Self::new()
	}
}

impl WebHistory {
	/// Creates a history for an application served from `/`.
	pub fn new() -> Self {
		Self::with_base("/")
	}

	/// Creates a history for an application served under `base`.
	pub fn with_base(base: &str) -> Self {
		let base = normalize_base(base);
		Self {
			#[cfg(not(target_arch = "wasm32"))]
			fallback: MemoryHistory::with_initial(&base, "/"),
			base,
		}
	}

	/// The full URL currently shown in the address bar.
	pub fn url(&self) -> String {
		self.href(&self.location())
	}
}

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::{HistoryState, RouterError};
	use wasm_bindgen::JsValue;

	pub(super) fn js_error(err: JsValue) -> RouterError {
		RouterError::NavigationFailed(format!("{:?}", err))
	}

	pub(super) fn window() -> Result<web_sys::Window, RouterError> {
		web_sys::window()
			.ok_or_else(|| RouterError::NavigationFailed("window is not available".to_string()))
	}

	pub(super) fn history() -> Result<web_sys::History, RouterError> {
		window()?.history().map_err(js_error)
	}

	pub(super) fn full_location() -> Result<String, RouterError> {
		let location = window()?.location();
		let pathname = location.pathname().map_err(js_error)?;
		let search = location.search().map_err(js_error)?;
		let hash = location.hash().map_err(js_error)?;
		Ok(format!("{}{}{}", pathname, search, hash))
	}

	pub(super) fn state_from_js(value: JsValue) -> Option<HistoryState> {
		value.as_string().and_then(|raw| HistoryState::from_json(&raw))
	}
}

#[cfg(target_arch = "wasm32")]
impl History for WebHistory {
	fn base(&self) -> &str {
		&self.base
	}

	fn location(&self) -> String {
		browser::full_location()
			.map(|full| strip_base(&self.base, &full))
			.unwrap_or_else(|_| "/".to_string())
	}

	fn state(&self) -> Option<HistoryState> {
		browser::history()
			.ok()
			.and_then(|h| h.state().ok())
			.and_then(browser::state_from_js)
	}

	fn push(&self, state: &HistoryState) -> Result<(), RouterError> {
		let data = wasm_bindgen::JsValue::from_str(&state.to_json()?);
		browser::history()?
			.push_state_with_url(&data, "", Some(&self.href(&state.path)))
			.map_err(browser::js_error)
	}

	fn replace(&self, state: &HistoryState) -> Result<(), RouterError> {
		let data = wasm_bindgen::JsValue::from_str(&state.to_json()?);
		browser::history()?
			.replace_state_with_url(&data, "", Some(&self.href(&state.path)))
			.map_err(browser::js_error)
	}

	fn go(&self, delta: isize) -> Result<(), RouterError> {
		let delta = i32::try_from(delta)
			.map_err(|_| RouterError::NavigationFailed(format!("delta out of range: {}", delta)))?;
		browser::history()?
			.go_with_delta(delta)
			.map_err(browser::js_error)
	}

	fn listen(&self, listener: HistoryListener) -> Result<(), RouterError> {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		let base = self.base.clone();
		let closure = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(
			move |event: web_sys::PopStateEvent| {
				let location = browser::full_location()
					.map(|full| strip_base(&base, &full))
					.unwrap_or_else(|_| "/".to_string());
				listener(location, browser::state_from_js(event.state()));
			},
		);

		browser::window()?
			.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
			.map_err(browser::js_error)?;

		// The listener lives as long as the page.
		closure.forget();
		Ok(())
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl History for WebHistory {
	fn base(&self) -> &str {
		&self.base
	}

	fn location(&self) -> String {
		self.fallback.location()
	}

	fn state(&self) -> Option<HistoryState> {
		self.fallback.state()
	}

	fn push(&self, state: &HistoryState) -> Result<(), RouterError> {
		self.fallback.push(state)
	}

	fn replace(&self, state: &HistoryState) -> Result<(), RouterError> {
		self.fallback.replace(state)
	}

	fn go(&self, delta: isize) -> Result<(), RouterError> {
		self.fallback.go(delta)
	}

	fn listen(&self, listener: HistoryListener) -> Result<(), RouterError> {
		self.fallback.listen(listener)
	}
}
