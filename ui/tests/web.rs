//! Browser-only checks for the pieces that talk to JS APIs.
//! Run with `wasm-pack test --headless --firefox ui`.
#![cfg(target_arch = "wasm32")]

use ui::features::contact::{ContactFields, ContactSubmission, SimulatedGateway, SubmissionGateway};
use ui::utils::platform::{current_year, delay_ms};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn simulated_gateway_accepts_after_latency() {
    let fields = ContactFields {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        phone: "647-971-6235".to_string(),
        email: "jane@example.com".to_string(),
        message: "Hello, I would like to connect.".to_string(),
    };
    let submission = ContactSubmission::from(&fields);

    let gateway = SimulatedGateway::new(5);
    assert!(gateway.send(&submission).await.is_ok());
}

#[wasm_bindgen_test]
async fn zero_delay_returns_immediately() {
    delay_ms(0).await;
}

#[wasm_bindgen_test]
fn current_year_comes_from_browser_clock() {
    assert!(current_year() >= 2024);
}
