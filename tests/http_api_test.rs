mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::TestApp;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::json;
use storefront_api::entities::{background_image, banner_picture, shipment, BackgroundSection};
use uuid::Uuid;

async fn create_category(app: &TestApp, name: &str) -> serde_json::Value {
    let (status, body) = app
        .post_json("/api/v1/categories", json!({ "name": name }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn create_product(app: &TestApp, category_id: &str, name: &str) -> serde_json::Value {
    let (status, body) = app
        .post_json(
            "/api/v1/products",
            json!({
                "category_id": category_id,
                "name": name,
                "description": "A test product",
                "price": "49.90"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn liveness_and_status_endpoints_respond() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::Value::String("storefront-api up".into()));

    let (status, body) = app.get("/api/v1/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["service"], "storefront-api");

    let (status, body) = app.get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["checks"]["database"], "healthy");
}

#[tokio::test]
async fn product_listing_paginates_and_filters() {
    let app = TestApp::new().await;
    let category = create_category(&app, "Shoes").await;
    let category_id = category["id"].as_str().unwrap().to_string();

    for i in 0..10 {
        create_product(&app, &category_id, &format!("Shoe {}", i)).await;
    }

    let (status, page1) = app.get("/api/v1/products?page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page1["data"].as_array().unwrap().len(), 9);
    assert_eq!(page1["pagination"]["total"], 10);
    assert_eq!(page1["pagination"]["total_pages"], 2);

    let (status, page2) = app.get("/api/v1/products?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page2["data"].as_array().unwrap().len(), 1);

    let (status, filtered) = app.get("/api/v1/products?category=shoes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered["current_category"]["slug"], "shoes");
    assert_eq!(filtered["pagination"]["total"], 10);

    let (status, _) = app.get("/api/v1/products?category=unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/v1/products?page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn product_detail_includes_gallery_related_and_links() {
    let app = TestApp::new().await;
    let category = create_category(&app, "Shoes").await;
    let category_id = category["id"].as_str().unwrap().to_string();

    let product = create_product(&app, &category_id, "Trail Runner").await;
    for i in 0..4 {
        create_product(&app, &category_id, &format!("Other Shoe {}", i)).await;
    }

    let slug = product["slug"].as_str().unwrap();
    let (status, _) = app
        .post_json(
            &format!("/api/v1/products/{}/images", slug),
            json!({
                "url": "https://cdn.example.com/trail-runner.jpg",
                "is_primary": true
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, detail) = app.get(&format!("/api/v1/products/{}", slug)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["product"]["slug"], "trail-runner");
    assert_eq!(detail["category"]["slug"], "shoes");
    assert_eq!(detail["images"].as_array().unwrap().len(), 1);
    assert!(detail["images"][0]["is_primary"].as_bool().unwrap());
    // Related products cap at 3 and exclude the product itself
    let related = detail["related_products"].as_array().unwrap();
    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|p| p["slug"] != "trail-runner"));
    // Inquiry links built from configuration
    let whatsapp = detail["whatsapp_url"].as_str().unwrap();
    assert!(whatsapp.starts_with("https://wa.me/15550107788?text="));
    assert_eq!(detail["email_inquiry"]["recipient"], "hello@example.com");
    assert_eq!(
        detail["email_inquiry"]["subject"],
        "Inquiry about Trail Runner"
    );

    let (status, _) = app.get("/api/v1/products/missing-slug").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_listing_uses_page_size_six() {
    let app = TestApp::new().await;
    for i in 0..7 {
        create_category(&app, &format!("Category {}", i)).await;
    }

    let (status, page1) = app.get("/api/v1/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page1["data"].as_array().unwrap().len(), 6);
    assert_eq!(page1["pagination"]["total_pages"], 2);

    let (status, page2) = app.get("/api/v1/categories?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page2["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn home_payload_contains_categories_featured_and_banners() {
    let app = TestApp::new().await;
    let category = create_category(&app, "Shoes").await;
    let category_id = category["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .post_json(
            "/api/v1/products",
            json!({
                "category_id": category_id,
                "name": "Featured Shoe",
                "description": "A featured product",
                "price": "99.00",
                "is_featured": true
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let now = Utc::now();
    banner_picture::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Summer sale".to_string()),
        image_url: Set("https://cdn.example.com/banner.jpg".to_string()),
        title: Set(Some("Summer Sale".to_string())),
        subtitle: Set(None),
        button_text: Set("Shop Now".to_string()),
        button_link: Set(None),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&*app.state.db)
    .await
    .expect("banner should insert");

    // Inactive banners are not served
    banner_picture::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Old sale".to_string()),
        image_url: Set("https://cdn.example.com/old.jpg".to_string()),
        title: Set(None),
        subtitle: Set(None),
        button_text: Set("Shop Now".to_string()),
        button_link: Set(None),
        is_active: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&*app.state.db)
    .await
    .expect("banner should insert");

    let (status, home) = app.get("/api/v1/home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(home["categories"].as_array().unwrap().len(), 1);
    assert_eq!(home["featured_products"].as_array().unwrap().len(), 1);
    assert_eq!(home["featured_products"][0]["name"], "Featured Shoe");
    assert_eq!(home["banners"].as_array().unwrap().len(), 1);
    assert_eq!(home["banners"][0]["title"], "Summer Sale");
}

#[tokio::test]
async fn shipment_methods_are_listed_newest_first() {
    let app = TestApp::new().await;

    let older = Utc::now() - chrono::Duration::minutes(5);
    let newer = Utc::now();

    shipment::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Standard".to_string()),
        icon_url: Set(None),
        description: Set("Tracked parcel".to_string()),
        delivery_time: Set("3-5 business days".to_string()),
        cost: Set("$4.90".to_string()),
        created_at: Set(older),
        updated_at: Set(older),
    }
    .insert(&*app.state.db)
    .await
    .expect("shipment should insert");

    shipment::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Express".to_string()),
        icon_url: Set(None),
        description: Set("Next-day courier".to_string()),
        delivery_time: Set("1 business day".to_string()),
        cost: Set("$12.00".to_string()),
        created_at: Set(newer),
        updated_at: Set(newer),
    }
    .insert(&*app.state.db)
    .await
    .expect("shipment should insert");

    let (status, methods) = app.get("/api/v1/shipment-methods").await;
    assert_eq!(status, StatusCode::OK);
    let methods = methods.as_array().unwrap().clone();
    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0]["name"], "Express");
    assert_eq!(methods[1]["name"], "Standard");
}

#[tokio::test]
async fn backgrounds_serve_the_newest_active_per_section() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/v1/backgrounds?section=home_hero").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let now = Utc::now();
    background_image::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Hero".to_string()),
        section: Set(BackgroundSection::HomeHero),
        image_url: Set("https://cdn.example.com/hero.jpg".to_string()),
        overlay_color: Set("#000000".to_string()),
        overlay_opacity: Set(0.5),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&*app.state.db)
    .await
    .expect("background should insert");

    let (status, background) = app.get("/api/v1/backgrounds?section=home_hero").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(background["section"], "home_hero");
    assert_eq!(background["overlay_color"], "#000000");

    // Other sections remain empty
    let (status, _) = app.get("/api/v1/backgrounds?section=contact_header").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn site_contacts_expose_clean_whatsapp_number() {
    let app = TestApp::new().await;

    let (status, contacts) = app.get("/api/v1/site-contacts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contacts["contact_email"], "hello@example.com");
    assert_eq!(contacts["whatsapp_number"], "+1 (555) 010-7788");
    assert_eq!(contacts["whatsapp_number_clean"], "15550107788");
}

#[tokio::test]
async fn honeypot_submissions_are_rejected_without_persisting() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post_json(
            "/api/v1/contact",
            json!({
                "name": "Bot",
                "email": "bot@example.com",
                "subject": "Totally legitimate",
                "message": "Click here",
                "website": "https://spam.example.com"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing persisted, no mail attempted
    let (status, listing) = app.get("/api/v1/contact/messages").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["pagination"]["total"], 0);
    assert!(app.mailer.attempts().is_empty());
}

#[tokio::test]
async fn contact_submission_and_reply_flow_over_http() {
    let app = TestApp::new().await;

    let (status, message) = app
        .post_json(
            "/api/v1/contact",
            json!({
                "name": "Ana Martins",
                "email": "ana@example.com",
                "subject": "Sizing question",
                "message": "Does the Trail Runner run small?"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(message["status"], "new");
    let message_id = message["id"].as_str().unwrap().to_string();

    app.mailer.clear();

    let (status, reply) = app
        .post_json(
            &format!("/api/v1/contact/messages/{}/replies", message_id),
            json!({
                "reply_subject": "About your sizing question",
                "reply_message": "It runs true to size.",
                "sent_by": "Sam"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(reply["email_sent"].as_bool().unwrap());

    let (status, detail) = app
        .get(&format!("/api/v1/contact/messages/{}", message_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["message"]["status"], "in_progress");
    assert!(detail["message"]["replied_at"].is_string());
    assert_eq!(detail["replies"].as_array().unwrap().len(), 1);

    let (status, updated) = app
        .put_json(
            &format!("/api/v1/contact/messages/{}/status", message_id),
            json!({ "status": "closed", "owner_notes": "resolved" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "closed");
    assert_eq!(updated["owner_notes"], "resolved");
}

#[tokio::test]
async fn invalid_contact_submissions_are_rejected() {
    let app = TestApp::new().await;

    // Bad email address
    let (status, _) = app
        .post_json(
            "/api/v1/contact",
            json!({
                "name": "Ana",
                "email": "not-an-email",
                "subject": "Hello",
                "message": "Hi"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Blank subject
    let (status, _) = app
        .post_json(
            "/api/v1/contact",
            json!({
                "name": "Ana",
                "email": "ana@example.com",
                "subject": "   ",
                "message": "Hi"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listing) = app.get("/api/v1/contact/messages").await;
    assert_eq!(listing["pagination"]["total"], 0);
}
