use crate::handlers::common::{map_service_error, success_response};
use crate::links;
use crate::{entities::BackgroundSection, errors::ApiError, AppState};
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Creates the router for site-content endpoints
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/backgrounds", get(get_background))
        .route("/site-contacts", get(get_site_contacts))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BackgroundParams {
    /// Page section, e.g. "home_hero"
    pub section: BackgroundSection,
}

/// The active background image for a page section
#[utoipa::path(
    get,
    path = "/api/v1/backgrounds",
    params(BackgroundParams),
    responses(
        (status = 200, description = "Background retrieved", body = BackgroundResponse),
        (status = 404, description = "No active background for this section", body = crate::errors::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn get_background(
    State(state): State<AppState>,
    Query(params): Query<BackgroundParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let background = state
        .services
        .content
        .background_for(params.section)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "No active background for section {:?}",
                params.section
            ))
        })?;

    Ok(success_response(BackgroundResponse::from(background)))
}

/// Contact details rendered into page footers
#[utoipa::path(
    get,
    path = "/api/v1/site-contacts",
    responses(
        (status = 200, description = "Site contacts retrieved", body = links::SiteContacts)
    ),
    tag = "Content"
)]
pub async fn get_site_contacts(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    Ok(success_response(links::site_contacts(
        &state.config.contact_email,
        &state.config.whatsapp_number,
    )))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BackgroundResponse {
    pub id: Uuid,
    pub name: String,
    pub section: BackgroundSection,
    pub image_url: String,
    /// Overlay color as a hex string
    pub overlay_color: String,
    /// Overlay opacity in the range 0.0..=1.0
    pub overlay_opacity: f32,
}

impl From<crate::entities::BackgroundImageModel> for BackgroundResponse {
    fn from(model: crate::entities::BackgroundImageModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            section: model.section,
            image_url: model.image_url,
            overlay_color: model.overlay_color,
            overlay_opacity: model.overlay_opacity,
        }
    }
}
