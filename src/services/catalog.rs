use crate::{
    entities::{
        category, product, product_image, Category, CategoryModel, Product, ProductImage,
        ProductImageModel, ProductModel,
    },
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Base slug used when a name contains no usable characters
const FALLBACK_SLUG: &str = "untitled";

/// Derives a URL-safe base slug from a display name: ASCII lowercase,
/// alphanumeric runs joined by single dashes.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !slug.is_empty() {
            slug.push('-');
            last_dash = true;
        }
    }
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Catalog service for categories, products and their image galleries
#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
}

impl CatalogService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: Arc<EventSender>) -> Self {
        Self { db, event_sender }
    }

    // ==================== Categories ====================

    /// Create a new category. The slug is derived from the name and suffixed
    /// with `-1`, `-2`, … until unique.
    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> Result<CategoryModel, ServiceError> {
        self.ensure_unique_category_name(&input.name, None).await?;

        let slug = self.assign_category_slug(&input.name, None).await?;
        let now = Utc::now();

        let category = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.clone()),
            slug: Set(slug),
            image_url: Set(input.image_url.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let category = category.insert(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::CategoryCreated(category.id))
            .await;

        info!("Created category: {} ({})", category.name, category.slug);
        Ok(category)
    }

    /// Update an existing category. The slug is assigned once and never
    /// recomputed, so renaming keeps URLs stable.
    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        category_id: Uuid,
        input: UpdateCategoryInput,
    ) -> Result<CategoryModel, ServiceError> {
        let category = self.get_category(category_id).await?;
        let mut active: category::ActiveModel = category.into();

        if let Some(name) = input.name {
            self.ensure_unique_category_name(&name, Some(category_id))
                .await?;
            active.name = Set(name);
        }
        if let Some(image_url) = input.image_url {
            active.image_url = Set(Some(image_url));
        }

        active.updated_at = Set(Utc::now());

        let category = active.update(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::CategoryUpdated(category_id))
            .await;

        info!("Updated category: {}", category_id);
        Ok(category)
    }

    /// Get a category by ID
    #[instrument(skip(self))]
    pub async fn get_category(&self, category_id: Uuid) -> Result<CategoryModel, ServiceError> {
        Category::find_by_id(category_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category {} not found", category_id)))
    }

    /// Get a category by its slug
    #[instrument(skip(self))]
    pub async fn get_category_by_slug(&self, slug: &str) -> Result<CategoryModel, ServiceError> {
        Category::find()
            .filter(category::Column::Slug.eq(slug))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category {} not found", slug)))
    }

    /// List categories ordered by name, paginated
    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<CategoryModel>, u64), ServiceError> {
        let query = Category::find().order_by_asc(category::Column::Name);

        let total = query.clone().count(&*self.db).await?;

        let categories = query
            .limit(per_page)
            .offset(page.saturating_sub(1).saturating_mul(per_page))
            .all(&*self.db)
            .await?;

        Ok((categories, total))
    }

    /// First categories by name, used on the homepage
    #[instrument(skip(self))]
    pub async fn main_categories(&self, limit: u64) -> Result<Vec<CategoryModel>, ServiceError> {
        Category::find()
            .order_by_asc(category::Column::Name)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    // ==================== Products ====================

    /// Create a new product under an existing category
    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<ProductModel, ServiceError> {
        // The category must exist; FK errors would surface as opaque database
        // errors otherwise.
        self.get_category(input.category_id).await?;

        let slug = self.assign_product_slug(&input.name, None).await?;
        let now = Utc::now();

        let product = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            category_id: Set(input.category_id),
            name: Set(input.name.clone()),
            description: Set(input.description.clone()),
            slug: Set(slug),
            price: Set(input.price),
            size: Set(input.size.clone()),
            is_featured: Set(input.is_featured),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let product = product.insert(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::ProductCreated(product.id))
            .await;

        info!("Created product: {} ({})", product.name, product.slug);
        Ok(product)
    }

    /// Update an existing product. As with categories, the slug is never
    /// recomputed.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> Result<ProductModel, ServiceError> {
        let product = self.get_product(product_id).await?;
        let mut active: product::ActiveModel = product.into();

        if let Some(category_id) = input.category_id {
            self.get_category(category_id).await?;
            active.category_id = Set(category_id);
        }
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(price) = input.price {
            active.price = Set(price);
        }
        if let Some(size) = input.size {
            active.size = Set(Some(size));
        }
        if let Some(is_featured) = input.is_featured {
            active.is_featured = Set(is_featured);
        }

        active.updated_at = Set(Utc::now());

        let product = active.update(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::ProductUpdated(product_id))
            .await;

        info!("Updated product: {}", product_id);
        Ok(product)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: Uuid) -> Result<ProductModel, ServiceError> {
        Product::find_by_id(product_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", product_id)))
    }

    /// Get a product by its slug
    #[instrument(skip(self))]
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<ProductModel, ServiceError> {
        Product::find()
            .filter(product::Column::Slug.eq(slug))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", slug)))
    }

    /// List products newest-first, optionally filtered by category slug,
    /// paginated
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        query: ProductListQuery,
    ) -> Result<ProductListResult, ServiceError> {
        let mut db_query = Product::find();

        let category = match &query.category_slug {
            Some(slug) => {
                let category = self.get_category_by_slug(slug).await?;
                db_query = db_query.filter(product::Column::CategoryId.eq(category.id));
                Some(category)
            }
            None => None,
        };

        let total = db_query.clone().count(&*self.db).await?;

        let products = db_query
            .order_by_desc(product::Column::CreatedAt)
            .limit(query.per_page)
            .offset(query.page.saturating_sub(1).saturating_mul(query.per_page))
            .all(&*self.db)
            .await?;

        Ok(ProductListResult {
            products,
            category,
            total,
        })
    }

    /// All products of a category, newest first
    #[instrument(skip(self))]
    pub async fn products_in_category(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<ProductModel>, ServiceError> {
        Product::find()
            .filter(product::Column::CategoryId.eq(category_id))
            .order_by_desc(product::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    /// Featured products for the homepage
    #[instrument(skip(self))]
    pub async fn featured_products(&self, limit: u64) -> Result<Vec<ProductModel>, ServiceError> {
        Product::find()
            .filter(product::Column::IsFeatured.eq(true))
            .order_by_desc(product::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    /// Same-category siblings of a product, excluding the product itself
    #[instrument(skip(self))]
    pub async fn related_products(
        &self,
        product: &ProductModel,
        limit: u64,
    ) -> Result<Vec<ProductModel>, ServiceError> {
        Product::find()
            .filter(product::Column::CategoryId.eq(product.category_id))
            .filter(product::Column::Id.ne(product.id))
            .order_by_desc(product::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    // ==================== Product images ====================

    /// Add an image to a product's gallery. When the new image is primary,
    /// prior primaries of the same product are cleared first so at most one
    /// primary exists at any time.
    #[instrument(skip(self))]
    pub async fn add_product_image(
        &self,
        input: AddProductImageInput,
    ) -> Result<ProductImageModel, ServiceError> {
        self.get_product(input.product_id).await?;

        if input.is_primary {
            self.clear_primary_images(input.product_id).await?;
        }

        let image = product_image::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(input.product_id),
            url: Set(input.url.clone()),
            alt_text: Set(input.alt_text.clone()),
            is_primary: Set(input.is_primary),
            created_at: Set(Utc::now()),
        };

        let image = image.insert(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::ProductImageAdded {
                product_id: input.product_id,
                image_id: image.id,
            })
            .await;
        if image.is_primary {
            self.event_sender
                .send_or_log(Event::PrimaryImageChanged {
                    product_id: input.product_id,
                    image_id: image.id,
                })
                .await;
        }

        info!(
            "Added image {} to product {} (primary: {})",
            image.id, input.product_id, image.is_primary
        );
        Ok(image)
    }

    /// Promote an existing gallery image to primary, demoting any other
    /// primary of the same product.
    #[instrument(skip(self))]
    pub async fn mark_primary_image(
        &self,
        image_id: Uuid,
    ) -> Result<ProductImageModel, ServiceError> {
        let image = ProductImage::find_by_id(image_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product image {} not found", image_id)))?;

        self.clear_primary_images(image.product_id).await?;

        let mut active: product_image::ActiveModel = image.into();
        active.is_primary = Set(true);
        let image = active.update(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::PrimaryImageChanged {
                product_id: image.product_id,
                image_id: image.id,
            })
            .await;

        info!("Marked image {} primary for product {}", image.id, image.product_id);
        Ok(image)
    }

    /// A product's gallery, primary image first, then oldest-first
    #[instrument(skip(self))]
    pub async fn product_gallery(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductImageModel>, ServiceError> {
        ProductImage::find()
            .filter(product_image::Column::ProductId.eq(product_id))
            .order_by_desc(product_image::Column::IsPrimary)
            .order_by_asc(product_image::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    async fn clear_primary_images(&self, product_id: Uuid) -> Result<(), ServiceError> {
        ProductImage::update_many()
            .col_expr(product_image::Column::IsPrimary, Expr::value(false))
            .filter(product_image::Column::ProductId.eq(product_id))
            .filter(product_image::Column::IsPrimary.eq(true))
            .exec(&*self.db)
            .await?;
        Ok(())
    }

    // ==================== Slug assignment ====================

    async fn assign_category_slug(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<String, ServiceError> {
        let base = slugify(name);
        let mut candidate = base.clone();
        let mut counter = 1u32;

        loop {
            let mut query = Category::find().filter(category::Column::Slug.eq(candidate.as_str()));
            if let Some(id) = exclude_id {
                query = query.filter(category::Column::Id.ne(id));
            }
            if query.one(&*self.db).await?.is_none() {
                return Ok(candidate);
            }
            candidate = format!("{}-{}", base, counter);
            counter += 1;
        }
    }

    async fn assign_product_slug(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<String, ServiceError> {
        let base = slugify(name);
        let mut candidate = base.clone();
        let mut counter = 1u32;

        loop {
            let mut query = Product::find().filter(product::Column::Slug.eq(candidate.as_str()));
            if let Some(id) = exclude_id {
                query = query.filter(product::Column::Id.ne(id));
            }
            if query.one(&*self.db).await?.is_none() {
                return Ok(candidate);
            }
            candidate = format!("{}-{}", base, counter);
            counter += 1;
        }
    }

    async fn ensure_unique_category_name(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<(), ServiceError> {
        let mut query = Category::find().filter(category::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(category::Column::Id.ne(id));
        }

        if query.one(&*self.db).await?.is_some() {
            return Err(ServiceError::ValidationError(format!(
                "Category {} already exists",
                name
            )));
        }

        Ok(())
    }
}

/// Input for creating a category
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCategoryInput {
    pub name: String,
    pub image_url: Option<String>,
}

/// Input for updating a category
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateCategoryInput {
    pub name: Option<String>,
    pub image_url: Option<String>,
}

/// Input for creating a product
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateProductInput {
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub size: Option<String>,
    pub is_featured: bool,
}

/// Input for updating a product
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateProductInput {
    pub category_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub size: Option<String>,
    pub is_featured: Option<bool>,
}

/// Input for adding a gallery image
#[derive(Debug, Deserialize, Serialize)]
pub struct AddProductImageInput {
    pub product_id: Uuid,
    pub url: String,
    pub alt_text: Option<String>,
    pub is_primary: bool,
}

/// Product listing query
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListQuery {
    pub category_slug: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

/// Product listing result
#[derive(Debug)]
pub struct ProductListResult {
    pub products: Vec<ProductModel>,
    /// Present when the listing was filtered by category slug
    pub category: Option<CategoryModel>,
    pub total: u64,
}
