pub mod background_image;
pub mod banner_picture;
pub mod category;
pub mod contact_message;
pub mod contact_reply;
pub mod product;
pub mod product_image;
pub mod shipment;

pub use background_image::BackgroundSection;
pub use background_image::Entity as BackgroundImage;
pub use background_image::Model as BackgroundImageModel;
pub use banner_picture::Entity as BannerPicture;
pub use banner_picture::Model as BannerPictureModel;
pub use category::Entity as Category;
pub use category::Model as CategoryModel;
pub use contact_message::Entity as ContactMessage;
pub use contact_message::MessageStatus;
pub use contact_message::Model as ContactMessageModel;
pub use contact_reply::Entity as ContactReply;
pub use contact_reply::Model as ContactReplyModel;
pub use product::Entity as Product;
pub use product::Model as ProductModel;
pub use product_image::Entity as ProductImage;
pub use product_image::Model as ProductImageModel;
pub use shipment::Entity as Shipment;
pub use shipment::Model as ShipmentModel;
