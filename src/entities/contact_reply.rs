use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Staff reply to a contact message. Creating a reply triggers exactly one
/// outbound email attempt; `email_sent` is true only when the gateway
/// confirmed the send.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_replies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub contact_message_id: Uuid,

    pub reply_subject: String,
    pub reply_message: String,

    /// Staff member name, free text
    #[sea_orm(nullable)]
    pub sent_by: Option<String>,

    pub email_sent: bool,

    pub sent_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contact_message::Entity",
        from = "Column::ContactMessageId",
        to = "super::contact_message::Column::Id"
    )]
    ContactMessage,
}

impl Related<super::contact_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContactMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
