use crate::handlers::common::{map_service_error, success_response};
use crate::{errors::ApiError, AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Creates the router for shipment-method endpoints
pub fn shipment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shipment_methods))
        .route("/:id", get(get_shipment_method))
}

/// List all shipment methods offered by the store
#[utoipa::path(
    get,
    path = "/api/v1/shipment-methods",
    responses(
        (status = 200, description = "Shipment methods retrieved", body = [ShipmentResponse])
    ),
    tag = "Shipping"
)]
pub async fn list_shipment_methods(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let methods = state
        .services
        .shipping
        .list_shipment_methods()
        .await
        .map_err(map_service_error)?;

    let methods: Vec<ShipmentResponse> = methods.into_iter().map(ShipmentResponse::from).collect();

    Ok(success_response(methods))
}

/// Get a shipment method by ID
#[utoipa::path(
    get,
    path = "/api/v1/shipment-methods/:id",
    params(
        ("id" = Uuid, Path, description = "Shipment method ID")
    ),
    responses(
        (status = 200, description = "Shipment method retrieved", body = ShipmentResponse),
        (status = 404, description = "Shipment method not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Shipping"
)]
pub async fn get_shipment_method(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let method = state
        .services
        .shipping
        .get_shipment_method(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ShipmentResponse::from(method)))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShipmentResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub description: String,
    /// Display string, e.g. "2-4 business days"
    pub delivery_time: String,
    /// Display string, e.g. "Free over $50"
    pub cost: String,
}

impl From<crate::entities::ShipmentModel> for ShipmentResponse {
    fn from(model: crate::entities::ShipmentModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            icon_url: model.icon_url,
            description: model.description,
            delivery_time: model.delivery_time,
            cost: model.cost,
        }
    }
}
