mod common;

use product_catalog::helpers::ValidationPolicy;
use product_catalog::models::PriceFilterMode;
use serde_json::{json, Value};

fn keyboard() -> Value {
    json!({
        "title": "Mechanical keyboard",
        "price": 120,
        "phone": "123-456-7890",
        "description": "Brown switches"
    })
}

async fn create(app: &common::TestApp, body: Value) -> Value {
    let response = app.post_product(&body).await;
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    body["item"].clone()
}

// test me: cargo t --test product -- --nocapture
#[tokio::test]
async fn add_product_returns_stored_record() {
    let app = common::spawn_app().await;

    let item = create(&app, keyboard()).await;

    assert_eq!(item["title"], "Mechanical keyboard");
    assert_eq!(item["price"], 120.0);
    assert_eq!(item["phone"], "123-456-7890");
    assert_eq!(item["description"], "Brown switches");
    assert!(item["id"].as_str().is_some());
    assert!(item["createdAt"].as_str().is_some());
}

#[tokio::test]
async fn add_product_accepts_urlencoded_form() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .post(&format!("{}/product", &app.address))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("title=Desk+lamp+40W&price=35&phone=555-123-4567")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["title"], "Desk lamp 40W");
    assert_eq!(body["item"]["price"], 35.0);
}

#[tokio::test]
async fn add_product_urlencoded_empty_price_is_absent() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .post(&format!("{}/product", &app.address))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("title=Desk+lamp+40W&price=")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["title"], "Desk lamp 40W");
    assert!(body["item"]["price"].is_null());
}

#[tokio::test]
async fn add_product_urlencoded_non_numeric_price_is_bad_request() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .post(&format!("{}/product", &app.address))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("title=Desk+lamp+40W&price=abc")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("price"), "{}", message);
    assert!(!message.contains("Content type"), "{}", message);
}

#[tokio::test]
async fn add_product_accepts_long_description() {
    let app = common::spawn_app().await;
    let description = "x".repeat(5000);

    let mut body = keyboard();
    body["description"] = json!(description);
    let item = create(&app, body).await;

    assert_eq!(item["description"].as_str().map(str::len), Some(5000));
}

#[tokio::test]
async fn add_product_rejects_invalid_fields() {
    let app = common::spawn_app().await;

    let cases = [
        (json!({ "price": 50 }), "title"),
        (json!({ "title": "" }), "title"),
        (json!({ "title": "Lamp" }), "title"),
        (json!({ "title": "Desk lamp 40W", "price": 9 }), "price"),
        (json!({ "title": "Desk lamp 40W", "price": 201 }), "price"),
        (json!({ "title": "Desk lamp 40W", "phone": "12-34-5678" }), "phone"),
        (json!({ "title": "Desk lamp 40W", "phone": "123-456-789" }), "phone"),
    ];

    for (body, field) in cases {
        let response = app.post_product(&body).await;
        assert_eq!(response.status().as_u16(), 400, "{}", body);
        let error: Value = response.json().await.unwrap();
        assert_eq!(error["field"], field, "{}", body);
    }

    // nothing was stored
    assert_eq!(app.list_products("").await.status().as_u16(), 404);
}

#[tokio::test]
async fn add_product_rejects_malformed_json() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .post(&format!("{}/product", &app.address))
        .header("Content-Type", "application/json")
        .body(r#"{"title": "Desk lamp 40W", "price": "#)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn lenient_policy_skips_title_length_and_price_bounds() {
    let app = common::spawn_app_with_configuration(common::test_settings(
        ValidationPolicy::Lenient,
        PriceFilterMode::ExcludeEqual,
    ))
    .await;

    let item = create(&app, json!({ "title": "Lamp", "price": 5000 })).await;
    assert_eq!(item["price"], 5000.0);

    let response = app
        .post_product(&json!({ "title": "Lamp", "phone": "5551234567" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn list_without_filter_returns_everything() {
    let app = common::spawn_app().await;
    create(&app, keyboard()).await;
    create(&app, json!({ "title": "Desk lamp 40W" })).await;

    let response = app.list_products("").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_excludes_exact_price_matches() {
    let app = common::spawn_app().await;
    for (title, price) in [("Budget lamp", 20), ("Standard lamp", 50), ("Premium lamp", 90)] {
        create(&app, json!({ "title": title, "price": price })).await;
    }

    let response = app.list_products("?price=50").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let titles: Vec<&str> = body["list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Budget lamp", "Premium lamp"]);
}

#[tokio::test]
async fn list_greater_than_mode() {
    let app = common::spawn_app_with_configuration(common::test_settings(
        ValidationPolicy::Strict,
        PriceFilterMode::GreaterThan,
    ))
    .await;
    for (title, price) in [("Budget lamp", 20), ("Standard lamp", 50), ("Premium lamp", 90)] {
        create(&app, json!({ "title": title, "price": price })).await;
    }

    let body: Value = app.list_products("?price=50").await.json().await.unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Premium lamp");

    assert_eq!(app.list_products("?price=90").await.status().as_u16(), 404);
}

#[tokio::test]
async fn list_with_non_numeric_price_is_bad_request() {
    let app = common::spawn_app().await;
    create(&app, keyboard()).await;

    let response = app.list_products("?price=cheap").await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn get_product_by_id() {
    let app = common::spawn_app().await;
    let item = create(&app, keyboard()).await;
    let id = item["id"].as_str().unwrap();

    let response = app
        .client
        .get(&format!("{}/product/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Result is found");
    assert_eq!(body["item"], item);

    let response = app
        .client
        .get(&format!("{}/product/{}", &app.address, uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn update_replaces_only_description() {
    let app = common::spawn_app().await;
    let item = create(&app, keyboard()).await;
    let id = item["id"].as_str().unwrap();

    let response = app
        .client
        .put(&format!("{}/update/product/{}", &app.address, id))
        .json(&json!({ "description": "Red switches", "title": "ignored", "price": 1 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["description"], "Red switches");
    assert_eq!(body["item"]["title"], item["title"]);
    assert_eq!(body["item"]["price"], item["price"]);
    assert_eq!(body["item"]["createdAt"], item["createdAt"]);

    let response = app
        .client
        .put(&format!("{}/update/product/{}", &app.address, uuid::Uuid::new_v4()))
        .json(&json!({ "description": "Red switches" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn update_accepts_urlencoded_form() {
    let app = common::spawn_app().await;
    let item = create(&app, keyboard()).await;
    let id = item["id"].as_str().unwrap();

    let response = app
        .client
        .put(&format!("{}/update/product/{}", &app.address, id))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("description=Warm+white")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["description"], "Warm white");
    assert_eq!(body["item"]["title"], item["title"]);
}

#[tokio::test]
async fn delete_product() {
    let app = common::spawn_app().await;
    let item = create(&app, keyboard()).await;
    let url = format!("{}/delete/product/{}", &app.address, item["id"].as_str().unwrap());

    let response = app.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "product deleted successfully.");

    let response = app.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
