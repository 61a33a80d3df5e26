//! Browser tests for `WebHistory`.
//!
//! Run with: wasm-pack test --headless --chrome crates/stoneyard-router

#![cfg(target_arch = "wasm32")]

use stoneyard_router::page::Page;
use stoneyard_router::router::{ClientRouter, History, HistoryState, WebHistory};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn pathname() -> String {
	web_sys::window()
		.and_then(|w| w.location().pathname().ok())
		.unwrap_or_default()
}

#[wasm_bindgen_test]
fn push_writes_plain_path_to_address_bar() {
	let history = WebHistory::new();
	history.push(&HistoryState::new("/quarry")).unwrap();

	assert_eq!(pathname(), "/quarry");
	let hash = web_sys::window()
		.and_then(|w| w.location().hash().ok())
		.unwrap_or_default();
	assert!(hash.is_empty());
}

#[wasm_bindgen_test]
fn state_round_trips_through_browser() {
	let history = WebHistory::new();
	let state = HistoryState::new("/home").with_route_name(Some("Home".to_string()));
	history.replace(&state).unwrap();

	assert_eq!(history.state(), Some(state));
	assert_eq!(history.location(), "/home");
}

#[wasm_bindgen_test]
fn router_push_updates_location() {
	let router = ClientRouter::builder(WebHistory::new())
		.route("/factory", || Page::text("Factory"))
		.route("/stone", || Page::text("Stone"))
		.build()
		.unwrap();

	router.push("/factory").unwrap();
	router.push("/stone").unwrap();

	assert_eq!(pathname(), "/stone");
	assert_eq!(router.render_current(), Some(Page::text("Stone")));
}
