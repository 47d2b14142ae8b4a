use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Section background image with an adjustable color overlay
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "background_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    /// Page section this background is rendered behind
    pub section: BackgroundSection,

    pub image_url: String,

    /// Overlay color as a hex string (e.g. "#000000")
    pub overlay_color: String,

    /// Overlay opacity in the range 0.0..=1.0
    pub overlay_opacity: f32,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Page sections that accept a background image
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum BackgroundSection {
    #[sea_orm(string_value = "home_hero")]
    HomeHero,
    #[sea_orm(string_value = "products_header")]
    ProductsHeader,
    #[sea_orm(string_value = "categories_header")]
    CategoriesHeader,
    #[sea_orm(string_value = "shipment_header")]
    ShipmentHeader,
    #[sea_orm(string_value = "contact_header")]
    ContactHeader,
}
