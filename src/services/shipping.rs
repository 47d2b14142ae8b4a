use crate::{
    entities::{shipment, Shipment, ShipmentModel},
    errors::ServiceError,
};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Read-side service for the store's shipment methods
#[derive(Clone)]
pub struct ShippingService {
    db: Arc<DatabaseConnection>,
}

impl ShippingService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// All shipment methods, newest first
    #[instrument(skip(self))]
    pub async fn list_shipment_methods(&self) -> Result<Vec<ShipmentModel>, ServiceError> {
        Shipment::find()
            .order_by_desc(shipment::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    /// Get a shipment method by ID
    #[instrument(skip(self))]
    pub async fn get_shipment_method(
        &self,
        shipment_id: Uuid,
    ) -> Result<ShipmentModel, ServiceError> {
        Shipment::find_by_id(shipment_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Shipment method {} not found", shipment_id))
            })
    }
}
