//! Core ClientRouter Implementation.
//!
//! Routes are registered on a [`ClientRouterBuilder`], validated once in
//! [`ClientRouterBuilder::build`], and are immutable afterwards. Matching
//! walks the table in registration order and the first route whose
//! pattern matches (and whose guard allows it) wins.

use super::error::RouterError;
use super::history::{History, HistoryState, NavigationType};
use super::pattern::{ClientPathPattern, PatternOptions, strip_query_and_hash};
use crate::page::Page;
use crate::reactive::Signal;
use crate::settings::RouterSettings;
use crate::{debug_log, error_log, info_log, warn_log};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

/// Factory producing a route's page.
pub type RouteComponent = Arc<dyn Fn() -> Page + Send + Sync>;

/// Type alias for route guard functions.
pub(super) type RouteGuard = Arc<dyn Fn(&ClientRouteMatch) -> bool + Send + Sync>;

/// A matched route with extracted parameters.
#[derive(Debug, Clone)]
pub struct ClientRouteMatch {
	/// The matched route.
	pub route: ClientRoute,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
}

/// A single route definition.
#[derive(Clone)]
pub struct ClientRoute {
	/// The path pattern.
	pattern: ClientPathPattern,
	/// Optional route name for reverse lookups.
	name: Option<String>,
	/// The component factory.
	component: RouteComponent,
	/// Optional guard function.
	guard: Option<RouteGuard>,
}

impl std::fmt::Debug for ClientRoute {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ClientRoute")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.field("has_guard", &self.guard.is_some())
			.finish()
	}
}

impl ClientRoute {
	/// Creates a route, compiling `pattern` with `options`.
	pub fn try_new<F>(pattern: &str, options: PatternOptions, component: F) -> Result<Self, RouterError>
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		Ok(Self {
			pattern: ClientPathPattern::with_options(pattern, options)?,
			name: None,
			component: Arc::new(component),
			guard: None,
		})
	}

	/// Sets the route name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Adds a guard to this route.
	pub fn with_guard<G>(mut self, guard: G) -> Self
	where
		G: Fn(&ClientRouteMatch) -> bool + Send + Sync + 'static,
	{
		self.guard = Some(Arc::new(guard));
		self
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the pattern.
	pub fn pattern(&self) -> &ClientPathPattern {
		&self.pattern
	}

	/// Renders the route's component.
	pub fn render(&self) -> Page {
		(self.component)()
	}

	/// Checks if the guard allows access.
	pub fn check_guard(&self, route_match: &ClientRouteMatch) -> bool {
		self.guard.as_ref().map(|g| g(route_match)).unwrap_or(true)
	}
}

/// First-match-wins resolution over an ordered route table.
fn resolve(routes: &[ClientRoute], location: &str) -> Option<ClientRouteMatch> {
	for route in routes {
		if let Some(params) = route.pattern.matches(location) {
			let route_match = ClientRouteMatch {
				route: route.clone(),
				params,
			};

			if route.check_guard(&route_match) {
				return Some(route_match);
			}
		}
	}
	None
}

struct PendingRoute {
	pattern: String,
	name: Option<String>,
	component: RouteComponent,
	guard: Option<RouteGuard>,
}

/// Collects route definitions and validates them into a [`ClientRouter`].
pub struct ClientRouterBuilder {
	history: Rc<dyn History>,
	settings: RouterSettings,
	pending: Vec<PendingRoute>,
	not_found: Option<RouteComponent>,
}

impl std::fmt::Debug for ClientRouterBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ClientRouterBuilder")
			.field("settings", &self.settings)
			.field(
				"patterns",
				&self.pending.iter().map(|p| p.pattern.as_str()).collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl ClientRouterBuilder {
	fn new(history: Rc<dyn History>) -> Self {
		Self {
			history,
			settings: RouterSettings::default(),
			pending: Vec::new(),
			not_found: None,
		}
	}

	/// Applies matching options from `settings`.
	///
	/// `settings.base` is honoured by the history, not the router; a
	/// mismatch is logged at build time.
	pub fn settings(mut self, settings: RouterSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Adds a route to the router.
	pub fn route<F>(mut self, pattern: &str, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		self.pending.push(PendingRoute {
			pattern: pattern.to_string(),
			name: None,
			component: Arc::new(component),
			guard: None,
		});
		self
	}

	/// Adds a named route to the router.
	pub fn named_route<F>(mut self, name: &str, pattern: &str, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		self.pending.push(PendingRoute {
			pattern: pattern.to_string(),
			name: Some(name.to_string()),
			component: Arc::new(component),
			guard: None,
		});
		self
	}

	/// Adds a route with a guard.
	///
	/// When the guard rejects a match, resolution continues with the next
	/// route in the table.
	pub fn guarded_route<F, G>(mut self, pattern: &str, component: F, guard: G) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
		G: Fn(&ClientRouteMatch) -> bool + Send + Sync + 'static,
	{
		self.pending.push(PendingRoute {
			pattern: pattern.to_string(),
			name: None,
			component: Arc::new(component),
			guard: Some(Arc::new(guard)),
		});
		self
	}

	/// Sets the component rendered when no route matches.
	pub fn not_found<F>(mut self, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		self.not_found = Some(Arc::new(component));
		self
	}

	/// Validates the table and creates the router.
	///
	/// Registers one listener on the history so back/forward moves update
	/// the router's signals.
	///
	/// # Errors
	///
	/// - [`RouterError::InvalidPattern`] if a pattern does not compile
	/// - [`RouterError::DuplicatePath`] if two patterns match the same paths
	/// - [`RouterError::DuplicateName`] if two routes share a name
	/// - [`RouterError::NavigationFailed`] if the history listener cannot be installed
	pub fn build(self) -> Result<ClientRouter, RouterError> {
		let options = PatternOptions {
			strict: self.settings.strict,
			sensitive: self.settings.sensitive,
		};

		if crate::settings::normalize_base(&self.settings.base) != self.history.base() {
			warn_log!(
				"Router settings base '{}' differs from history base '{}'",
				self.settings.base,
				self.history.base()
			);
		}

		let mut routes = Vec::with_capacity(self.pending.len());
		let mut named_routes = HashMap::new();
		let mut seen_paths = HashSet::new();

		for pending in self.pending {
			let pattern = ClientPathPattern::with_options(&pending.pattern, options)?;
			if !seen_paths.insert(pattern.canonical_key()) {
				error_log!("Route path registered twice: {}", pending.pattern);
				return Err(RouterError::DuplicatePath(pending.pattern));
			}

			if let Some(name) = &pending.name {
				if named_routes.insert(name.clone(), routes.len()).is_some() {
					error_log!("Route name registered twice: {}", name);
					return Err(RouterError::DuplicateName(name.clone()));
				}
			}

			routes.push(ClientRoute {
				pattern,
				name: pending.name,
				component: pending.component,
				guard: pending.guard,
			});
		}

		let routes: Rc<[ClientRoute]> = routes.into();
		let initial_path = self.history.location();
		let initial_match = resolve(&routes, &initial_path);

		let router = ClientRouter {
			current_params: Signal::new(
				initial_match
					.as_ref()
					.map(|m| m.params.clone())
					.unwrap_or_default(),
			),
			current_route_name: Signal::new(
				initial_match
					.as_ref()
					.and_then(|m| m.route.name().map(|s| s.to_string())),
			),
			current_path: Signal::new(initial_path),
			routes,
			named_routes,
			history: self.history,
			not_found: self.not_found,
		};
		router.setup_history_listener()?;

		info_log!(
			"Router ready with {} routes at '{}'",
			router.route_count(),
			router.current_path.get()
		);
		Ok(router)
	}
}

/// The main client-side router.
pub struct ClientRouter {
	/// Registered routes, in registration order.
	routes: Rc<[ClientRoute]>,
	/// Named routes for reverse lookups.
	named_routes: HashMap<String, usize>,
	/// Where navigations are recorded.
	history: Rc<dyn History>,
	/// Current path signal.
	current_path: Signal<String>,
	/// Current params signal.
	current_params: Signal<HashMap<String, String>>,
	/// Current matched route name signal.
	current_route_name: Signal<Option<String>>,
	/// Not found handler.
	not_found: Option<RouteComponent>,
}

impl std::fmt::Debug for ClientRouter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ClientRouter")
			.field("routes_count", &self.routes.len())
			.field(
				"named_routes",
				&self.named_routes.keys().collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl ClientRouter {
	/// Starts a router definition backed by `history`.
	pub fn builder(history: impl History + 'static) -> ClientRouterBuilder {
		ClientRouterBuilder::new(Rc::new(history))
	}

	/// Starts a router definition over a history shared with the caller.
	pub fn builder_shared(history: Rc<dyn History>) -> ClientRouterBuilder {
		ClientRouterBuilder::new(history)
	}

	/// Returns the registered routes in registration order.
	pub fn routes(&self) -> &[ClientRoute] {
		&self.routes
	}

	/// Returns the history backing this router.
	pub fn history(&self) -> &dyn History {
		self.history.as_ref()
	}

	/// Returns the current path signal.
	pub fn current_path(&self) -> &Signal<String> {
		&self.current_path
	}

	/// Returns the current params signal.
	pub fn current_params(&self) -> &Signal<HashMap<String, String>> {
		&self.current_params
	}

	/// Returns the current route name signal.
	pub fn current_route_name(&self) -> &Signal<Option<String>> {
		&self.current_route_name
	}

	/// Matches a path against registered routes.
	pub fn match_path(&self, path: &str) -> Option<ClientRouteMatch> {
		resolve(&self.routes, path)
	}

	/// Navigates to a path, adding a history entry.
	///
	/// Navigating to the current location is a no-op.
	pub fn push(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Push)
	}

	/// Navigates to a path, overwriting the current history entry.
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Replace)
	}

	/// Navigates to a named route.
	pub fn push_named(&self, name: &str, params: &[(&str, &str)]) -> Result<(), RouterError> {
		let path = self.reverse(name, params)?;
		self.push(&path)
	}

	/// Goes one entry back.
	pub fn back(&self) -> Result<(), RouterError> {
		self.history.go(-1)
	}

	/// Goes one entry forward.
	pub fn forward(&self) -> Result<(), RouterError> {
		self.history.go(1)
	}

	fn navigate(&self, path: &str, nav_type: NavigationType) -> Result<(), RouterError> {
		// Relative paths resolve against the application root.
		let absolute;
		let path = if path.starts_with('/') {
			path
		} else {
			absolute = format!("/{}", path);
			absolute.as_str()
		};

		if nav_type == NavigationType::Push && path == self.current_path.get() {
			debug_log!("Skipping duplicate navigation to {}", path);
			return Ok(());
		}

		let route_match = self.match_path(path);
		if route_match.is_none() {
			warn_log!("No route matches {}", strip_query_and_hash(path));
		}

		let params = route_match
			.as_ref()
			.map(|m| m.params.clone())
			.unwrap_or_default();
		let route_name = route_match
			.as_ref()
			.and_then(|m| m.route.name().map(|s| s.to_string()));

		let state = HistoryState::new(path)
			.with_params(params.clone())
			.with_route_name(route_name.clone());

		let result = match nav_type {
			NavigationType::Push => self.history.push(&state),
			NavigationType::Replace => self.history.replace(&state),
			NavigationType::Pop => Ok(()),
		};
		if let Err(err) = result {
			error_log!("History update for {} failed: {}", path, err);
			return Err(err);
		}

		debug_log!("Navigated ({:?}) to {}", nav_type, path);
		// Params and name first so subscribers to the path see a consistent view.
		self.current_params.set(params);
		self.current_route_name.set(route_name);
		self.current_path.set(path.to_string());

		Ok(())
	}

	/// Generates a URL by route name with parameters.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
		let index = self
			.named_routes
			.get(name)
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))?;

		let pattern = &self.routes[*index].pattern;
		let params_map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		pattern.reverse(&params_map).ok_or_else(|| {
			let missing = pattern
				.param_names()
				.iter()
				.find(|p| !params_map.contains_key(*p))
				.cloned()
				.unwrap_or_default();
			RouterError::MissingParameter(missing)
		})
	}

	/// Renders the current route's component.
	///
	/// Falls back to the not-found component, and returns `None` when
	/// neither exists.
	pub fn render_current(&self) -> Option<Page> {
		let path = self.current_path.get();

		match self.match_path(&path) {
			Some(route_match) => Some(route_match.route.render()),
			None => self.not_found.as_ref().map(|f| f()),
		}
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}

	/// Keeps the signals in sync with back/forward moves.
	fn setup_history_listener(&self) -> Result<(), RouterError> {
		let routes = Rc::clone(&self.routes);
		let path_signal = self.current_path.clone();
		let params_signal = self.current_params.clone();
		let route_name_signal = self.current_route_name.clone();

		self.history.listen(Rc::new(move |path: String, state: Option<HistoryState>| {
			debug_log!("History moved to {}", path);
			let (params, route_name) = match state {
				Some(hist_state) if hist_state.path == path => {
					(hist_state.params, hist_state.route_name)
				}
				// Entries the router did not write carry no state; resolve again.
				_ => match resolve(&routes, &path) {
					Some(m) => (m.params, m.route.name().map(|s| s.to_string())),
					None => (HashMap::new(), None),
				},
			};
			params_signal.set(params);
			route_name_signal.set(route_name);
			path_signal.set(path);
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::history::MemoryHistory;
	use rstest::rstest;

	fn page_with_text(s: &'static str) -> Page {
		Page::text(s)
	}

	fn home_page() -> Page {
		page_with_text("Home")
	}

	fn quarry_page() -> Page {
		page_with_text("Quarry")
	}

	fn not_found_page() -> Page {
		page_with_text("NotFound")
	}

	fn router() -> ClientRouter {
		ClientRouter::builder(MemoryHistory::new())
			.named_route("home", "/", home_page)
			.route("/quarry", quarry_page)
			.named_route("order", "/orders/{id}", || page_with_text("Order"))
			.build()
			.unwrap()
	}

	#[rstest]
	fn test_route_named() {
		let route = ClientRoute::try_new("/", PatternOptions::default(), home_page)
			.unwrap()
			.with_name("home");
		assert_eq!(route.name(), Some("home"));
	}

	#[rstest]
	fn test_router_route_count() {
		assert_eq!(router().route_count(), 3);
	}

	#[rstest]
	fn test_router_named_route() {
		let router = router();
		assert!(router.has_route("home"));
		assert!(router.has_route("order"));
		assert!(!router.has_route("quarry"));
	}

	#[rstest]
	fn test_router_match_exact() {
		let router = router();
		assert!(router.match_path("/").is_some());
		assert!(router.match_path("/quarry").is_some());
		assert!(router.match_path("/nonexistent").is_none());
	}

	#[rstest]
	fn test_router_match_params() {
		let route_match = router().match_path("/orders/42").unwrap();
		assert_eq!(route_match.params.get("id"), Some(&"42".to_string()));
		assert_eq!(route_match.route.name(), Some("order"));
	}

	#[rstest]
	fn test_router_reverse() {
		let router = router();
		assert_eq!(router.reverse("home", &[]).unwrap(), "/");
		assert_eq!(router.reverse("order", &[("id", "42")]).unwrap(), "/orders/42");
	}

	#[rstest]
	fn test_router_reverse_errors() {
		let router = router();
		assert!(matches!(
			router.reverse("nonexistent", &[]),
			Err(RouterError::InvalidRouteName(_))
		));
		assert_eq!(
			router.reverse("order", &[]),
			Err(RouterError::MissingParameter("id".to_string()))
		);
	}

	#[rstest]
	fn test_router_not_found_component() {
		let router = ClientRouter::builder(MemoryHistory::with_initial("/", "/missing"))
			.route("/", home_page)
			.not_found(not_found_page)
			.build()
			.unwrap();

		assert_eq!(router.render_current(), Some(page_with_text("NotFound")));
	}

	#[rstest]
	fn test_router_unmatched_renders_nothing() {
		let router = router();
		router.push("/nonexistent").unwrap();

		assert_eq!(router.current_path().get(), "/nonexistent");
		assert_eq!(router.current_route_name().get(), None);
		assert!(router.render_current().is_none());
	}

	#[rstest]
	fn test_router_with_guard() {
		let router = ClientRouter::builder(MemoryHistory::new())
			.guarded_route("/admin", home_page, |_| false)
			.route("/public", home_page)
			.build()
			.unwrap();

		assert!(router.match_path("/admin").is_none());
		assert!(router.match_path("/public").is_some());
	}

	#[rstest]
	fn test_guard_rejection_falls_through() {
		let router = ClientRouter::builder(MemoryHistory::new())
			.guarded_route("/orders/{id}", home_page, |m| m.params["id"] != "0")
			.route("/orders/{slug:*}", quarry_page)
			.build()
			.unwrap();

		let route_match = router.match_path("/orders/0").unwrap();
		assert_eq!(route_match.route.pattern().pattern(), "/orders/{slug:*}");
	}

	#[rstest]
	fn test_push_updates_signals_and_history() {
		// Arrange
		let router = router();

		// Act
		router.push("/orders/7").unwrap();

		// Assert
		assert_eq!(router.current_path().get(), "/orders/7");
		assert_eq!(router.current_route_name().get(), Some("order".to_string()));
		assert_eq!(
			router.current_params().get().get("id"),
			Some(&"7".to_string())
		);
		assert_eq!(router.history().location(), "/orders/7");
	}

	#[rstest]
	fn test_push_same_location_is_noop() {
		let history = Rc::new(MemoryHistory::new());
		let router = ClientRouter::builder_shared(history.clone())
			.route("/", home_page)
			.route("/quarry", quarry_page)
			.build()
			.unwrap();

		router.push("/quarry").unwrap();
		router.push("/quarry").unwrap();

		assert_eq!(history.len(), 2);
	}

	#[rstest]
	fn test_replace_keeps_history_length() {
		let history = Rc::new(MemoryHistory::new());
		let router = ClientRouter::builder_shared(history.clone())
			.route("/", home_page)
			.route("/quarry", quarry_page)
			.build()
			.unwrap();

		router.replace("/quarry").unwrap();

		assert_eq!(history.len(), 1);
		assert_eq!(router.current_path().get(), "/quarry");
	}

	#[rstest]
	fn test_back_and_forward_restore_route() {
		// Arrange
		let router = router();
		router.push("/quarry").unwrap();
		router.push("/orders/3").unwrap();

		// Act
		router.back().unwrap();

		// Assert
		assert_eq!(router.current_path().get(), "/quarry");
		assert_eq!(router.render_current(), Some(page_with_text("Quarry")));

		router.back().unwrap();
		assert_eq!(router.current_route_name().get(), Some("home".to_string()));

		router.forward().unwrap();
		router.forward().unwrap();
		assert_eq!(
			router.current_params().get().get("id"),
			Some(&"3".to_string())
		);
	}

	#[rstest]
	fn test_push_named() {
		let router = router();
		router.push_named("order", &[("id", "11")]).unwrap();
		assert_eq!(router.current_path().get(), "/orders/11");
	}

	#[rstest]
	fn test_initial_location_is_resolved() {
		let router = ClientRouter::builder(MemoryHistory::with_initial("/", "/orders/5"))
			.named_route("order", "/orders/{id}", home_page)
			.build()
			.unwrap();

		assert_eq!(router.current_path().get(), "/orders/5");
		assert_eq!(router.current_route_name().get(), Some("order".to_string()));
	}

	#[rstest]
	#[case("/quarry", "/quarry")]
	#[case("/quarry", "/quarry/")]
	#[case("/quarry", "/Quarry")]
	#[case("/orders/{id}", "/orders/{slug}")]
	#[case("/files/{path:*}", "/files/{rest:*}")]
	#[case("/orders/{id}/", "/Orders/{order_id}")]
	fn test_build_rejects_duplicate_paths(#[case] first: &str, #[case] second: &str) {
		let result = ClientRouter::builder(MemoryHistory::new())
			.route(first, quarry_page)
			.route(second, home_page)
			.build();

		assert_eq!(
			result.unwrap_err(),
			RouterError::DuplicatePath(second.to_string())
		);
	}

	#[rstest]
	fn test_strict_sensitive_settings_allow_distinct_variants() {
		let settings = RouterSettings {
			strict: true,
			sensitive: true,
			..RouterSettings::default()
		};
		let router = ClientRouter::builder(MemoryHistory::new())
			.settings(settings)
			.route("/quarry", quarry_page)
			.route("/Quarry/", home_page)
			.build()
			.unwrap();

		assert_eq!(router.route_count(), 2);
	}

	#[rstest]
	fn test_build_rejects_duplicate_names() {
		let result = ClientRouter::builder(MemoryHistory::new())
			.named_route("Home", "/", home_page)
			.named_route("Home", "/home", home_page)
			.build();

		assert_eq!(result.unwrap_err(), RouterError::DuplicateName("Home".to_string()));
	}

	#[rstest]
	fn test_build_rejects_invalid_pattern() {
		let result = ClientRouter::builder(MemoryHistory::new())
			.route("factory", home_page)
			.build();

		assert!(matches!(result, Err(RouterError::InvalidPattern { .. })));
	}

	#[rstest]
	fn test_subscriber_can_redirect() {
		// Arrange
		let router = Rc::new(
			ClientRouter::builder(MemoryHistory::new())
				.named_route("home", "/home", home_page)
				.route("/old", quarry_page)
				.build()
				.unwrap(),
		);
		let weak = Rc::downgrade(&router);
		router.current_path().subscribe(move |path: &String| {
			if path == "/old" {
				if let Some(r) = weak.upgrade() {
					r.replace("/home").unwrap();
				}
			}
		});

		// Act
		router.push("/old").unwrap();

		// Assert
		assert_eq!(router.current_path().get(), "/home");
		assert_eq!(router.current_route_name().get(), Some("home".to_string()));
		assert_eq!(router.history().location(), "/home");
		assert_eq!(router.render_current(), Some(home_page()));
	}

	#[rstest]
	fn test_relative_path_navigates_from_root() {
		let router = router();

		router.push("quarry").unwrap();

		assert_eq!(router.current_path().get(), "/quarry");
		assert_eq!(router.history().location(), "/quarry");
		assert_eq!(router.render_current(), Some(quarry_page()));
	}
}
