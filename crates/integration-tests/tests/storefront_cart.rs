//! Integration tests for cart fragments.
//!
//! Run with: cargo test -p fast-pizza-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

fn base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_empty_cart_shows_empty_view() {
    let resp = client()
        .get(format!("{}/cart", base_url()))
        .send()
        .await
        .expect("Failed to get cart page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Your cart is still empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and restaurant API"]
async fn test_add_update_remove_round_trip() {
    let client = client();

    // Add twice: one line, quantity 2
    for _ in 0..2 {
        let resp = client
            .post(format!("{}/cart/add", base_url()))
            .form(&[("pizza_id", "1")])
            .send()
            .await
            .expect("Failed to add pizza");
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers()
                .get("HX-Trigger")
                .and_then(|v| v.to_str().ok()),
            Some("cart-updated")
        );
    }

    let count = client
        .get(format!("{}/cart/count", base_url()))
        .send()
        .await
        .expect("Failed to get count")
        .text()
        .await
        .expect("Failed to read count");
    assert!(count.contains('2'), "unexpected count fragment: {count}");

    // Quantity zero removes the line
    let resp = client
        .post(format!("{}/cart/update", base_url()))
        .form(&[("pizza_id", "1"), ("quantity", "0")])
        .send()
        .await
        .expect("Failed to update cart");
    assert!(resp.status().is_success());

    let body = client
        .get(format!("{}/cart", base_url()))
        .send()
        .await
        .expect("Failed to get cart page")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Your cart is still empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_add_unknown_pizza_is_rejected() {
    let resp = client()
        .post(format!("{}/cart/add", base_url()))
        .form(&[("pizza_id", "999999")])
        .send()
        .await
        .expect("Failed to post add");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
