mod common;

use common::TestApp;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use storefront_api::services::catalog::{
    AddProductImageInput, CreateCategoryInput, CreateProductInput, ProductListQuery,
    UpdateProductInput,
};
use uuid::Uuid;

async fn setup_category(app: &TestApp, name: &str) -> Uuid {
    app.state
        .services
        .catalog
        .create_category(CreateCategoryInput {
            name: name.to_string(),
            image_url: None,
        })
        .await
        .expect("category should be created")
        .id
}

fn product_input(category_id: Uuid, name: &str, price: Decimal) -> CreateProductInput {
    CreateProductInput {
        category_id,
        name: name.to_string(),
        description: "A test product".to_string(),
        price,
        size: None,
        is_featured: false,
    }
}

#[tokio::test]
async fn same_name_products_get_incrementing_slugs() {
    let app = TestApp::new().await;
    let category_id = setup_category(&app, "Shoes").await;

    let mut slugs = Vec::new();
    for _ in 0..3 {
        let product = app
            .state
            .services
            .catalog
            .create_product(product_input(category_id, "Trail Runner", dec!(89.99)))
            .await
            .expect("product should be created");
        slugs.push(product.slug);
    }

    assert_eq!(slugs, vec!["trail-runner", "trail-runner-1", "trail-runner-2"]);
}

#[tokio::test]
async fn category_slugs_collide_and_increment() {
    let app = TestApp::new().await;

    let first = app
        .state
        .services
        .catalog
        .create_category(CreateCategoryInput {
            name: "Running".to_string(),
            image_url: None,
        })
        .await
        .expect("category should be created");

    // Different display name, same base slug
    let second = app
        .state
        .services
        .catalog
        .create_category(CreateCategoryInput {
            name: "Running!".to_string(),
            image_url: None,
        })
        .await
        .expect("category should be created");

    assert_eq!(first.slug, "running");
    assert_eq!(second.slug, "running-1");
}

#[tokio::test]
async fn renaming_a_product_keeps_its_slug() {
    let app = TestApp::new().await;
    let category_id = setup_category(&app, "Shoes").await;

    let product = app
        .state
        .services
        .catalog
        .create_product(product_input(category_id, "Trail Runner", dec!(89.99)))
        .await
        .expect("product should be created");
    assert_eq!(product.slug, "trail-runner");

    let renamed = app
        .state
        .services
        .catalog
        .update_product(
            product.id,
            UpdateProductInput {
                name: Some("Road Runner".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("product should update");

    assert_eq!(renamed.name, "Road Runner");
    assert_eq!(renamed.slug, "trail-runner");
}

#[tokio::test]
async fn duplicate_category_names_are_rejected() {
    let app = TestApp::new().await;
    setup_category(&app, "Shoes").await;

    let result = app
        .state
        .services
        .catalog
        .create_category(CreateCategoryInput {
            name: "Shoes".to_string(),
            image_url: None,
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn at_most_one_primary_image_per_product() {
    let app = TestApp::new().await;
    let category_id = setup_category(&app, "Shoes").await;
    let product = app
        .state
        .services
        .catalog
        .create_product(product_input(category_id, "Trail Runner", dec!(89.99)))
        .await
        .expect("product should be created");

    // Three images added as primary, one after another
    for i in 0..3 {
        app.state
            .services
            .catalog
            .add_product_image(AddProductImageInput {
                product_id: product.id,
                url: format!("https://cdn.example.com/trail-runner-{}.jpg", i),
                alt_text: None,
                is_primary: true,
            })
            .await
            .expect("image should be added");
    }

    let gallery = app
        .state
        .services
        .catalog
        .product_gallery(product.id)
        .await
        .expect("gallery should load");

    assert_eq!(gallery.len(), 3);
    let primaries: Vec<_> = gallery.iter().filter(|i| i.is_primary).collect();
    assert_eq!(primaries.len(), 1);
    // The most recently added primary wins
    assert!(primaries[0].url.ends_with("trail-runner-2.jpg"));
}

#[tokio::test]
async fn promoting_an_image_demotes_the_previous_primary() {
    let app = TestApp::new().await;
    let category_id = setup_category(&app, "Shoes").await;
    let product = app
        .state
        .services
        .catalog
        .create_product(product_input(category_id, "Trail Runner", dec!(89.99)))
        .await
        .expect("product should be created");

    let first = app
        .state
        .services
        .catalog
        .add_product_image(AddProductImageInput {
            product_id: product.id,
            url: "https://cdn.example.com/a.jpg".to_string(),
            alt_text: None,
            is_primary: true,
        })
        .await
        .expect("image should be added");

    let second = app
        .state
        .services
        .catalog
        .add_product_image(AddProductImageInput {
            product_id: product.id,
            url: "https://cdn.example.com/b.jpg".to_string(),
            alt_text: None,
            is_primary: false,
        })
        .await
        .expect("image should be added");

    let promoted = app
        .state
        .services
        .catalog
        .mark_primary_image(second.id)
        .await
        .expect("image should be promoted");
    assert!(promoted.is_primary);

    let gallery = app
        .state
        .services
        .catalog
        .product_gallery(product.id)
        .await
        .expect("gallery should load");

    let primaries: Vec<_> = gallery.iter().filter(|i| i.is_primary).collect();
    assert_eq!(primaries.len(), 1);
    assert_eq!(primaries[0].id, second.id);
    assert!(gallery.iter().any(|i| i.id == first.id && !i.is_primary));
}

#[tokio::test]
async fn category_filter_returns_only_that_category() {
    let app = TestApp::new().await;
    let shoes = setup_category(&app, "Shoes").await;
    let bags = setup_category(&app, "Bags").await;

    for i in 0..3 {
        app.state
            .services
            .catalog
            .create_product(product_input(shoes, &format!("Shoe {}", i), dec!(50.00)))
            .await
            .expect("product should be created");
    }
    for i in 0..2 {
        app.state
            .services
            .catalog
            .create_product(product_input(bags, &format!("Bag {}", i), dec!(30.00)))
            .await
            .expect("product should be created");
    }

    let result = app
        .state
        .services
        .catalog
        .list_products(ProductListQuery {
            category_slug: Some("shoes".to_string()),
            page: 1,
            per_page: 9,
        })
        .await
        .expect("listing should succeed");

    assert_eq!(result.total, 3);
    assert!(result
        .products
        .iter()
        .all(|p| p.category_id == shoes));
    assert_eq!(result.category.expect("category echoed").slug, "shoes");
}

#[tokio::test]
async fn unknown_category_slug_is_not_found() {
    let app = TestApp::new().await;

    let result = app
        .state
        .services
        .catalog
        .list_products(ProductListQuery {
            category_slug: Some("does-not-exist".to_string()),
            page: 1,
            per_page: 9,
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn ten_products_paginate_into_nine_plus_one() {
    let app = TestApp::new().await;
    let category_id = setup_category(&app, "Shoes").await;

    for i in 0..10 {
        app.state
            .services
            .catalog
            .create_product(product_input(category_id, &format!("Shoe {}", i), dec!(50.00)))
            .await
            .expect("product should be created");
    }

    let page1 = app
        .state
        .services
        .catalog
        .list_products(ProductListQuery {
            category_slug: None,
            page: 1,
            per_page: 9,
        })
        .await
        .expect("listing should succeed");

    let page2 = app
        .state
        .services
        .catalog
        .list_products(ProductListQuery {
            category_slug: None,
            page: 2,
            per_page: 9,
        })
        .await
        .expect("listing should succeed");

    assert_eq!(page1.total, 10);
    assert_eq!(page1.products.len(), 9);
    assert_eq!(page2.products.len(), 1);
}

#[tokio::test]
async fn related_products_exclude_self_and_cap_at_three() {
    let app = TestApp::new().await;
    let category_id = setup_category(&app, "Shoes").await;

    let mut products = Vec::new();
    for i in 0..5 {
        products.push(
            app.state
                .services
                .catalog
                .create_product(product_input(category_id, &format!("Shoe {}", i), dec!(50.00)))
                .await
                .expect("product should be created"),
        );
    }

    let subject = &products[0];
    let related = app
        .state
        .services
        .catalog
        .related_products(subject, 3)
        .await
        .expect("related products should load");

    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|p| p.id != subject.id));
    assert!(related.iter().all(|p| p.category_id == category_id));
}

#[tokio::test]
async fn featured_products_respect_flag_and_limit() {
    let app = TestApp::new().await;
    let category_id = setup_category(&app, "Shoes").await;

    for i in 0..8 {
        let mut input = product_input(category_id, &format!("Shoe {}", i), dec!(50.00));
        input.is_featured = i % 2 == 0;
        app.state
            .services
            .catalog
            .create_product(input)
            .await
            .expect("product should be created");
    }

    let featured = app
        .state
        .services
        .catalog
        .featured_products(6)
        .await
        .expect("featured products should load");

    assert_eq!(featured.len(), 4);
    assert!(featured.iter().all(|p| p.is_featured));
}
