use crate::{
    entities::{
        background_image, banner_picture, BackgroundImage, BackgroundImageModel, BackgroundSection,
        BannerPicture, BannerPictureModel,
    },
    errors::ServiceError,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use tracing::instrument;

/// Read-side service for site content: homepage banners and section
/// backgrounds. Content rows are maintained by staff tooling, not through
/// this API.
#[derive(Clone)]
pub struct ContentService {
    db: Arc<DatabaseConnection>,
}

impl ContentService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Active homepage banners, newest first
    #[instrument(skip(self))]
    pub async fn active_banners(&self, limit: u64) -> Result<Vec<BannerPictureModel>, ServiceError> {
        BannerPicture::find()
            .filter(banner_picture::Column::IsActive.eq(true))
            .order_by_desc(banner_picture::Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    /// The active background for a page section; the newest active row wins
    /// when staff left several enabled.
    #[instrument(skip(self))]
    pub async fn background_for(
        &self,
        section: BackgroundSection,
    ) -> Result<Option<BackgroundImageModel>, ServiceError> {
        BackgroundImage::find()
            .filter(background_image::Column::Section.eq(section))
            .filter(background_image::Column::IsActive.eq(true))
            .order_by_desc(background_image::Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(Into::into)
    }
}
