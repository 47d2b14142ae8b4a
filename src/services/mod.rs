pub mod catalog;
pub mod contact;
pub mod content;
pub mod shipping;

pub use catalog::CatalogService;
pub use contact::ContactService;
pub use content::ContentService;
pub use shipping::ShippingService;
