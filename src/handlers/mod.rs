pub mod catalog;
pub mod common;
pub mod contact;
pub mod content;
pub mod shipping;

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::events::EventSender;
use crate::mailer::{templates::SiteContext, Mailer};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<crate::services::CatalogService>,
    pub content: Arc<crate::services::ContentService>,
    pub shipping: Arc<crate::services::ShippingService>,
    pub contact: Arc<crate::services::ContactService>,
}

impl AppServices {
    /// Build the services container shared by all HTTP handlers.
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Arc<EventSender>,
        mailer: Arc<dyn Mailer>,
        config: &AppConfig,
    ) -> Self {
        let site = SiteContext {
            site_name: config.site_name.clone(),
            contact_email: config.contact_email.clone(),
            whatsapp_number: config.whatsapp_number.clone(),
        };

        let catalog = Arc::new(crate::services::CatalogService::new(
            db_pool.clone(),
            event_sender.clone(),
        ));
        let content = Arc::new(crate::services::ContentService::new(db_pool.clone()));
        let shipping = Arc::new(crate::services::ShippingService::new(db_pool.clone()));
        let contact = Arc::new(crate::services::ContactService::new(
            db_pool,
            event_sender,
            mailer,
            site,
            config.owner_email.clone(),
        ));

        Self {
            catalog,
            content,
            shipping,
            contact,
        }
    }
}
