use crate::handlers::common::{
    created_response, map_service_error, normalize_optional_string, normalize_string,
    success_response, validate_input, PageParam, PaginatedResponse, PaginationMeta,
};
use crate::links::{self, EmailInquiry};
use crate::{
    errors::ApiError,
    services::catalog::{
        AddProductImageInput, CreateCategoryInput, CreateProductInput, ProductListQuery,
        UpdateProductInput,
    },
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    routing::{get, post, put},
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Custom validator for Decimal minimum value
fn validate_decimal_min_zero(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("decimal_min_zero"));
    }
    Ok(())
}

/// Creates the router for product endpoints
pub fn products_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/images/:image_id/primary", put(mark_primary_image))
        .route("/:slug", get(get_product).put(update_product))
        .route("/:slug/images", post(add_product_image))
}

/// Creates the router for category endpoints
pub fn categories_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:slug", get(get_category))
}

/// Creates the router for the homepage payload
pub fn home_routes() -> Router<AppState> {
    Router::new().route("/home", get(home))
}

/// Homepage payload: main categories, featured products, active banners
#[utoipa::path(
    get,
    path = "/api/v1/home",
    responses(
        (status = 200, description = "Homepage payload", body = HomeResponse)
    ),
    tag = "Catalog"
)]
pub async fn home(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let categories = state
        .services
        .catalog
        .main_categories(3)
        .await
        .map_err(map_service_error)?;

    let featured = state
        .services
        .catalog
        .featured_products(state.config.home_featured_limit)
        .await
        .map_err(map_service_error)?;

    let banners = state
        .services
        .content
        .active_banners(state.config.home_banner_limit)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(HomeResponse {
        categories: categories.into_iter().map(CategoryResponse::from).collect(),
        featured_products: featured.into_iter().map(ProductResponse::from).collect(),
        banners: banners.into_iter().map(BannerResponse::from).collect(),
    }))
}

/// List products newest-first, optionally filtered by category slug
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Products retrieved"),
        (status = 404, description = "Unknown category slug", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let page = PageParam { page: params.page }.validated()?;
    let per_page = state.config.product_page_size;

    let result = state
        .services
        .catalog
        .list_products(ProductListQuery {
            category_slug: normalize_optional_string(params.category),
            page,
            per_page,
        })
        .await
        .map_err(map_service_error)?;

    let products: Vec<ProductResponse> = result
        .products
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    Ok(success_response(ProductListResponse {
        current_category: result.category.map(CategoryResponse::from),
        data: products,
        pagination: PaginationMeta::new(page, per_page, result.total),
    }))
}

/// Product detail: gallery, related products and inquiry links
#[utoipa::path(
    get,
    path = "/api/v1/products/:slug",
    params(
        ("slug" = String, Path, description = "Product slug")
    ),
    responses(
        (status = 200, description = "Product retrieved", body = ProductDetailResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let product = state
        .services
        .catalog
        .get_product_by_slug(&slug)
        .await
        .map_err(map_service_error)?;

    let category = state
        .services
        .catalog
        .get_category(product.category_id)
        .await
        .map_err(map_service_error)?;

    let images = state
        .services
        .catalog
        .product_gallery(product.id)
        .await
        .map_err(map_service_error)?;

    let related = state
        .services
        .catalog
        .related_products(&product, state.config.related_products_limit)
        .await
        .map_err(map_service_error)?;

    let whatsapp_url =
        links::whatsapp_inquiry_url(&state.config.whatsapp_number, &product.name, &product.price);
    let email_inquiry = links::email_inquiry(
        &state.config.contact_email,
        &product.name,
        &product.price,
        &product.description,
    );

    Ok(success_response(ProductDetailResponse {
        product: ProductResponse::from(product),
        category: CategoryResponse::from(category),
        images: images.into_iter().map(ProductImageResponse::from).collect(),
        related_products: related.into_iter().map(ProductResponse::from).collect(),
        whatsapp_url,
        email_inquiry,
    }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Unknown category", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let name = normalize_string(payload.name);
    if name.is_empty() {
        return Err(ApiError::ValidationError(
            "Product name cannot be blank".to_string(),
        ));
    }

    if payload.price < Decimal::ZERO {
        return Err(ApiError::ValidationError(
            "price cannot be negative".to_string(),
        ));
    }

    let input = CreateProductInput {
        category_id: payload.category_id,
        name,
        description: normalize_string(payload.description),
        price: payload.price,
        size: normalize_optional_string(payload.size),
        is_featured: payload.is_featured.unwrap_or(false),
    };

    let product = state
        .services
        .catalog
        .create_product(input)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(ProductResponse::from(product)))
}

/// Update a product. The slug never changes, so the path stays valid after
/// renames.
#[utoipa::path(
    put,
    path = "/api/v1/products/:slug",
    params(
        ("slug" = String, Path, description = "Product slug")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let product = state
        .services
        .catalog
        .get_product_by_slug(&slug)
        .await
        .map_err(map_service_error)?;

    let name = payload
        .name
        .map(normalize_string)
        .map(|value| {
            if value.is_empty() {
                Err(ApiError::ValidationError(
                    "Product name cannot be blank".to_string(),
                ))
            } else {
                Ok(value)
            }
        })
        .transpose()?;

    if let Some(price) = payload.price.as_ref() {
        if *price < Decimal::ZERO {
            return Err(ApiError::ValidationError(
                "price cannot be negative".to_string(),
            ));
        }
    }

    let input = UpdateProductInput {
        category_id: payload.category_id,
        name,
        description: payload.description.map(normalize_string),
        price: payload.price,
        size: normalize_optional_string(payload.size),
        is_featured: payload.is_featured,
    };

    let product = state
        .services
        .catalog
        .update_product(product.id, input)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ProductResponse::from(product)))
}

/// Add a gallery image to a product
#[utoipa::path(
    post,
    path = "/api/v1/products/:slug/images",
    params(
        ("slug" = String, Path, description = "Product slug")
    ),
    request_body = AddImageRequest,
    responses(
        (status = 201, description = "Image added", body = ProductImageResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn add_product_image(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<AddImageRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let product = state
        .services
        .catalog
        .get_product_by_slug(&slug)
        .await
        .map_err(map_service_error)?;

    let image = state
        .services
        .catalog
        .add_product_image(AddProductImageInput {
            product_id: product.id,
            url: normalize_string(payload.url),
            alt_text: normalize_optional_string(payload.alt_text),
            is_primary: payload.is_primary.unwrap_or(false),
        })
        .await
        .map_err(map_service_error)?;

    Ok(created_response(ProductImageResponse::from(image)))
}

/// Promote a gallery image to primary
#[utoipa::path(
    put,
    path = "/api/v1/products/images/:image_id/primary",
    params(
        ("image_id" = Uuid, Path, description = "Product image ID")
    ),
    responses(
        (status = 200, description = "Image promoted", body = ProductImageResponse),
        (status = 404, description = "Image not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn mark_primary_image(
    State(state): State<AppState>,
    Path(image_id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let image = state
        .services
        .catalog
        .mark_primary_image(image_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ProductImageResponse::from(image)))
}

/// List categories ordered by name
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(PageParam),
    responses(
        (status = 200, description = "Categories retrieved")
    ),
    tag = "Catalog"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<PageParam>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let page = params.validated()?;
    let per_page = state.config.category_page_size;

    let (categories, total) = state
        .services
        .catalog
        .list_categories(page, per_page)
        .await
        .map_err(map_service_error)?;

    let categories: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();

    Ok(success_response(PaginatedResponse::new(
        categories, page, per_page, total,
    )))
}

/// Category detail with its products
#[utoipa::path(
    get,
    path = "/api/v1/categories/:slug",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category retrieved", body = CategoryDetailResponse),
        (status = 404, description = "Category not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let category = state
        .services
        .catalog
        .get_category_by_slug(&slug)
        .await
        .map_err(map_service_error)?;

    let products = state
        .services
        .catalog
        .products_in_category(category.id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(CategoryDetailResponse {
        category: CategoryResponse::from(category),
        products: products.into_iter().map(ProductResponse::from).collect(),
    }))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let name = normalize_string(payload.name);
    if name.is_empty() {
        return Err(ApiError::ValidationError(
            "Category name cannot be blank".to_string(),
        ));
    }

    let category = state
        .services
        .catalog
        .create_category(CreateCategoryInput {
            name,
            image_url: normalize_optional_string(payload.image_url),
        })
        .await
        .map_err(map_service_error)?;

    Ok(created_response(CategoryResponse::from(category)))
}

// Request/Response DTOs

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Category slug to filter by
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
}

fn default_page() -> u64 {
    1
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "category_id": "550e8400-e29b-41d4-a716-446655440000",
    "name": "Trail Runner",
    "description": "Lightweight trail shoe with a grippy outsole.",
    "price": "89.99",
    "size": "42",
    "is_featured": true
}))]
pub struct CreateProductRequest {
    /// Category the product belongs to
    pub category_id: Uuid,
    /// Product display name
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Product description
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    /// Sale price
    #[validate(custom = "validate_decimal_min_zero")]
    pub price: Decimal,
    /// Free-text size label
    #[serde(default)]
    #[validate(length(max = 50))]
    pub size: Option<String>,
    /// Whether the product is highlighted on the homepage
    #[serde(default)]
    pub is_featured: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub size: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    /// Category display name, unique across the store
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(url)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddImageRequest {
    /// Image URL
    #[validate(url)]
    pub url: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub alt_text: Option<String>,
    /// Promote this image to the product's primary image
    #[serde(default)]
    pub is_primary: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub slug: String,
    #[schema(example = "89.99")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub is_featured: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::entities::ProductModel> for ProductResponse {
    fn from(model: crate::entities::ProductModel) -> Self {
        Self {
            id: model.id,
            category_id: model.category_id,
            name: model.name,
            description: model.description,
            slug: model.slug,
            price: model.price,
            size: model.size,
            is_featured: model.is_featured,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::entities::CategoryModel> for CategoryResponse {
    fn from(model: crate::entities::CategoryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            image_url: model.image_url,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductImageResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    pub is_primary: bool,
}

impl From<crate::entities::ProductImageModel> for ProductImageResponse {
    fn from(model: crate::entities::ProductImageModel) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            url: model.url,
            alt_text: model.alt_text,
            is_primary: model.is_primary,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BannerResponse {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub button_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
}

impl From<crate::entities::BannerPictureModel> for BannerResponse {
    fn from(model: crate::entities::BannerPictureModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
            title: model.title,
            subtitle: model.subtitle,
            button_text: model.button_text,
            button_link: model.button_link,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    pub categories: Vec<CategoryResponse>,
    pub featured_products: Vec<ProductResponse>,
    pub banners: Vec<BannerResponse>,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    /// Present when the listing was filtered by category slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_category: Option<CategoryResponse>,
    pub data: Vec<ProductResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDetailResponse {
    pub category: CategoryResponse,
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
    pub category: CategoryResponse,
    /// Gallery, primary image first
    pub images: Vec<ProductImageResponse>,
    /// Same-category siblings, capped by configuration
    pub related_products: Vec<ProductResponse>,
    /// WhatsApp deep link with a pre-filled inquiry, when a number is
    /// configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
    pub email_inquiry: EmailInquiry,
}
