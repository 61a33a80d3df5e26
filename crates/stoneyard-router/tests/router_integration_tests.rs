//! Integration tests for the client-side router
//!
//! These tests verify the routing system through its public API:
//! 1. Path pattern matching with parameters
//! 2. Named routes and reverse URL lookup
//! 3. Navigation, history and signal updates
//! 4. Router components (Link, RouterOutlet)

use rstest::rstest;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use stoneyard_router::page::Page;
use stoneyard_router::router::{
	ClientPathPattern, ClientRouter, History, Link, MemoryHistory, RouterError, RouterOutlet,
};
use stoneyard_router::{Component, RouterSettings};

fn quarry_page() -> Page {
	Page::text("Quarry")
}

fn order_page() -> Page {
	Page::text("Order")
}

fn not_found_page() -> Page {
	Page::text("404 Not Found")
}

/// Success Criterion 1: literal patterns
#[rstest]
fn test_path_pattern_exact_match() {
	let pattern = ClientPathPattern::new("/quarry").unwrap();

	assert!(pattern.matches("/quarry").is_some());
	assert!(pattern.matches("/quarry/").is_some());
	assert!(pattern.matches("/quarry/extra").is_none());
	assert!(pattern.is_exact());
}

/// Success Criterion 1: parameters and wildcards
#[rstest]
fn test_path_pattern_with_params() {
	let pattern = ClientPathPattern::new("/orders/{id}/lines/{line}").unwrap();

	let params = pattern.matches("/orders/7/lines/3").unwrap();

	assert_eq!(params.get("id"), Some(&"7".to_string()));
	assert_eq!(params.get("line"), Some(&"3".to_string()));
}

/// Success Criterion 1: reverse substitutes parameters
#[rstest]
fn test_path_pattern_reverse() {
	let pattern = ClientPathPattern::new("/orders/{id}").unwrap();
	let mut params = HashMap::new();
	params.insert("id".to_string(), "42".to_string());

	assert_eq!(pattern.reverse(&params), Some("/orders/42".to_string()));
}

/// Success Criterion 1: malformed patterns are rejected at build time
#[rstest]
#[case("quarry")]
#[case("/orders/{id")]
#[case("/orders/{}")]
fn test_invalid_pattern_fails_build(#[case] pattern: &str) {
	let result = ClientRouter::builder(MemoryHistory::new())
		.route(pattern, quarry_page)
		.build();

	assert!(matches!(result, Err(RouterError::InvalidPattern { .. })));
}

/// Success Criterion 2: named routes and reverse lookup
#[rstest]
fn test_named_route_reverse() {
	let router = ClientRouter::builder(MemoryHistory::new())
		.named_route("order", "/orders/{id}", order_page)
		.build()
		.unwrap();

	assert_eq!(router.reverse("order", &[("id", "9")]).unwrap(), "/orders/9");
	assert_eq!(
		router.reverse("order", &[]),
		Err(RouterError::MissingParameter("id".to_string()))
	);
	assert_eq!(
		router.reverse("missing", &[]),
		Err(RouterError::InvalidRouteName("missing".to_string()))
	);
}

/// Success Criterion 3: signals follow navigation
#[rstest]
fn test_navigation_updates_signals() {
	// Arrange
	let router = ClientRouter::builder(MemoryHistory::new())
		.route("/quarry", quarry_page)
		.named_route("order", "/orders/{id}", order_page)
		.build()
		.unwrap();
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	router
		.current_path()
		.subscribe(move |path: &String| sink.borrow_mut().push(path.clone()));

	// Act
	router.push("/quarry").unwrap();
	router.push_named("order", &[("id", "5")]).unwrap();

	// Assert
	assert_eq!(*seen.borrow(), vec!["/quarry".to_string(), "/orders/5".to_string()]);
	assert_eq!(router.current_params().get().get("id"), Some(&"5".to_string()));
	assert_eq!(router.current_route_name().get(), Some("order".to_string()));
}

/// Success Criterion 3: back/forward through a shared history
#[rstest]
fn test_history_back_forward() {
	// Arrange
	let history = Rc::new(MemoryHistory::new());
	let router = ClientRouter::builder_shared(history.clone())
		.route("/", not_found_page)
		.route("/quarry", quarry_page)
		.route("/orders", order_page)
		.build()
		.unwrap();
	router.push("/quarry").unwrap();
	router.push("/orders").unwrap();

	// Act
	router.back().unwrap();

	// Assert
	assert_eq!(history.location(), "/quarry");
	assert_eq!(router.render_current(), Some(quarry_page()));

	router.forward().unwrap();
	assert_eq!(router.render_current(), Some(order_page()));
	assert_eq!(history.len(), 3);
}

/// Success Criterion 3: replace overwrites the current entry
#[rstest]
fn test_replace_keeps_history_length() {
	let history = Rc::new(MemoryHistory::new());
	let router = ClientRouter::builder_shared(history.clone())
		.route("/quarry", quarry_page)
		.build()
		.unwrap();

	router.replace("/quarry").unwrap();

	assert_eq!(history.len(), 1);
	assert_eq!(history.url(), "/quarry");
}

/// Success Criterion 3: not-found component is opt-in
#[rstest]
fn test_not_found_fallback() {
	let router = ClientRouter::builder(MemoryHistory::new())
		.route("/quarry", quarry_page)
		.not_found(not_found_page)
		.build()
		.unwrap();

	router.push("/nowhere").unwrap();

	assert_eq!(router.render_current(), Some(not_found_page()));
}

/// Success Criterion 3: settings flow into matching
#[rstest]
fn test_settings_from_toml() {
	let settings =
		RouterSettings::from_toml_str("[router]\nstrict = true\nsensitive = true").unwrap();
	let router = ClientRouter::builder(MemoryHistory::new())
		.settings(settings)
		.route("/quarry", quarry_page)
		.build()
		.unwrap();

	assert!(router.match_path("/quarry").is_some());
	assert!(router.match_path("/quarry/").is_none());
	assert!(router.match_path("/Quarry").is_none());
}

/// Success Criterion 4: Link and RouterOutlet render together
#[rstest]
fn test_link_and_outlet() {
	// Arrange
	let router = Rc::new(
		ClientRouter::builder(MemoryHistory::new())
			.route("/quarry", quarry_page)
			.build()
			.unwrap(),
	);
	let outlet = RouterOutlet::new(Rc::clone(&router));
	let link = Link::new("/quarry", "Quarry");

	// Act
	router.push(link.to()).unwrap();

	// Assert
	assert_eq!(
		link.render().render_to_string(),
		"<a href=\"/quarry\" data-link=\"true\" data-to=\"/quarry\">Quarry</a>"
	);
	assert_eq!(
		outlet.render().render_to_string(),
		"<div data-router-outlet=\"true\">Quarry</div>"
	);
}
