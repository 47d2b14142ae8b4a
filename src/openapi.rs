use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = r#"
# Storefront API

Backend for a small storefront: product catalog browsing, category
navigation, shipment-method listing, site content, and a contact-message
workflow with email notification and staff reply.

## Features

- **Catalog**: categories and products with stable, auto-assigned slugs
- **Galleries**: product images with a single primary image per product
- **Shipping**: the store's shipment methods
- **Content**: homepage banners and section backgrounds
- **Contact**: form intake with notification mails and a staff reply workflow
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080/api/v1", description = "Local development")
    ),
    tags(
        (name = "Catalog", description = "Product and category endpoints"),
        (name = "Shipping", description = "Shipment method endpoints"),
        (name = "Content", description = "Site content endpoints"),
        (name = "Contact", description = "Contact workflow endpoints")
    ),
    paths(
        // Catalog
        crate::handlers::catalog::home,
        crate::handlers::catalog::list_products,
        crate::handlers::catalog::get_product,
        crate::handlers::catalog::create_product,
        crate::handlers::catalog::update_product,
        crate::handlers::catalog::add_product_image,
        crate::handlers::catalog::mark_primary_image,
        crate::handlers::catalog::list_categories,
        crate::handlers::catalog::get_category,
        crate::handlers::catalog::create_category,

        // Shipping
        crate::handlers::shipping::list_shipment_methods,
        crate::handlers::shipping::get_shipment_method,

        // Content
        crate::handlers::content::get_background,
        crate::handlers::content::get_site_contacts,

        // Contact
        crate::handlers::contact::submit_contact,
        crate::handlers::contact::list_messages,
        crate::handlers::contact::get_message,
        crate::handlers::contact::create_reply,
        crate::handlers::contact::update_status,
    ),
    components(
        schemas(
            // Catalog types
            crate::handlers::catalog::ProductResponse,
            crate::handlers::catalog::ProductDetailResponse,
            crate::handlers::catalog::CategoryResponse,
            crate::handlers::catalog::CategoryDetailResponse,
            crate::handlers::catalog::ProductImageResponse,
            crate::handlers::catalog::BannerResponse,
            crate::handlers::catalog::HomeResponse,
            crate::handlers::catalog::CreateProductRequest,
            crate::handlers::catalog::UpdateProductRequest,
            crate::handlers::catalog::CreateCategoryRequest,
            crate::handlers::catalog::AddImageRequest,

            // Shipping types
            crate::handlers::shipping::ShipmentResponse,

            // Content types
            crate::handlers::content::BackgroundResponse,
            crate::links::SiteContacts,
            crate::links::EmailInquiry,
            crate::entities::BackgroundSection,

            // Contact types
            crate::handlers::contact::SubmitContactRequest,
            crate::handlers::contact::CreateReplyRequest,
            crate::handlers::contact::UpdateStatusRequest,
            crate::handlers::contact::ContactMessageResponse,
            crate::handlers::contact::ContactReplyResponse,
            crate::handlers::contact::MessageDetailResponse,
            crate::entities::MessageStatus,

            // Error types
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
