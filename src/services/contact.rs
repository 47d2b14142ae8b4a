use crate::{
    entities::{
        contact_message, contact_reply, ContactMessage, ContactMessageModel, ContactReply,
        ContactReplyModel, MessageStatus,
    },
    errors::ServiceError,
    events::{Event, EventSender},
    mailer::{
        templates::{self, SiteContext},
        Mailer, OutboundEmail,
    },
};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Contact-message workflow: intake with notification mails, staff replies
/// with a single outbound email attempt, and status management.
///
/// Email side effects are explicit method steps here, not persistence hooks:
/// `create_reply` performs the save, the send, and the parent update in
/// sequence so the invariants are readable in one place.
#[derive(Clone)]
pub struct ContactService {
    db: Arc<DatabaseConnection>,
    event_sender: Arc<EventSender>,
    mailer: Arc<dyn Mailer>,
    site: SiteContext,
    owner_email: String,
}

impl ContactService {
    pub fn new(
        db: Arc<DatabaseConnection>,
        event_sender: Arc<EventSender>,
        mailer: Arc<dyn Mailer>,
        site: SiteContext,
        owner_email: String,
    ) -> Self {
        Self {
            db,
            event_sender,
            mailer,
            site,
            owner_email,
        }
    }

    /// Persist a new contact message, then send the owner notification and
    /// the sender confirmation. Both mails are best-effort: failures are
    /// logged and never fail the submission.
    #[instrument(skip(self, input), fields(email = %input.email, subject = %input.subject))]
    pub async fn submit_message(
        &self,
        input: SubmitMessageInput,
    ) -> Result<ContactMessageModel, ServiceError> {
        let now = Utc::now();

        let message = contact_message::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.clone()),
            email: Set(input.email.clone()),
            phone: Set(input.phone.clone()),
            subject: Set(input.subject.clone()),
            message: Set(input.message.clone()),
            status: Set(MessageStatus::New),
            owner_notes: Set(None),
            replied_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let message = message.insert(&*self.db).await?;

        self.event_sender
            .send_or_log(Event::ContactMessageReceived(message.id))
            .await;

        info!("Contact message {} received", message.id);

        let notification = templates::contact_notification(&message, &self.site);
        if let Err(e) = self
            .mailer
            .send(OutboundEmail::new(self.owner_email.clone(), notification))
            .await
        {
            warn!(
                message_id = %message.id,
                "Failed to send contact notification email: {}",
                e
            );
        }

        let confirmation = templates::contact_confirmation(&message, &self.site);
        if let Err(e) = self
            .mailer
            .send(OutboundEmail::new(message.email.clone(), confirmation))
            .await
        {
            warn!(
                message_id = %message.id,
                "Failed to send contact confirmation email: {}",
                e
            );
        }

        Ok(message)
    }

    /// Get a contact message by ID
    #[instrument(skip(self))]
    pub async fn get_message(&self, message_id: Uuid) -> Result<ContactMessageModel, ServiceError> {
        ContactMessage::find_by_id(message_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Contact message {} not found", message_id))
            })
    }

    /// List contact messages newest-first, optionally filtered by status
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        status: Option<MessageStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ContactMessageModel>, u64), ServiceError> {
        let mut query = ContactMessage::find();

        if let Some(status) = status {
            query = query.filter(contact_message::Column::Status.eq(status));
        }

        let total = query.clone().count(&*self.db).await?;

        let messages = query
            .order_by_desc(contact_message::Column::CreatedAt)
            .limit(per_page)
            .offset(page.saturating_sub(1).saturating_mul(per_page))
            .all(&*self.db)
            .await?;

        Ok((messages, total))
    }

    /// Replies to a message, oldest first
    #[instrument(skip(self))]
    pub async fn list_replies(
        &self,
        message_id: Uuid,
    ) -> Result<Vec<ContactReplyModel>, ServiceError> {
        ContactReply::find()
            .filter(contact_reply::Column::ContactMessageId.eq(message_id))
            .order_by_asc(contact_reply::Column::SentAt)
            .all(&*self.db)
            .await
            .map_err(Into::into)
    }

    /// Set a message's status directly (staff action), optionally replacing
    /// the owner notes.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        message_id: Uuid,
        input: UpdateStatusInput,
    ) -> Result<ContactMessageModel, ServiceError> {
        let message = self.get_message(message_id).await?;
        let old_status = message.status;

        let mut active: contact_message::ActiveModel = message.into();
        active.status = Set(input.status);
        if let Some(notes) = input.owner_notes {
            active.owner_notes = Set(Some(notes));
        }
        active.updated_at = Set(Utc::now());

        let message = active.update(&*self.db).await?;

        if old_status != message.status {
            self.event_sender
                .send_or_log(Event::ContactMessageStatusChanged {
                    message_id,
                    old_status: format!("{:?}", old_status),
                    new_status: format!("{:?}", message.status),
                })
                .await;
        }

        info!("Contact message {} status set to {:?}", message_id, message.status);
        Ok(message)
    }

    /// Create a staff reply. The reply row is persisted first, then exactly
    /// one email attempt is made. On success the reply is marked sent and the
    /// parent message gets `replied_at` stamped and `new` promoted to
    /// `in_progress` through direct column updates. On failure the reply
    /// stays `email_sent = false` and the parent is untouched; there is no
    /// retry or queueing.
    #[instrument(skip(self, input), fields(message_id = %message_id))]
    pub async fn create_reply(
        &self,
        message_id: Uuid,
        input: CreateReplyInput,
    ) -> Result<ContactReplyModel, ServiceError> {
        let message = self.get_message(message_id).await?;

        let reply = contact_reply::ActiveModel {
            id: Set(Uuid::new_v4()),
            contact_message_id: Set(message.id),
            reply_subject: Set(input.reply_subject.clone()),
            reply_message: Set(input.reply_message.clone()),
            sent_by: Set(input.sent_by.clone()),
            email_sent: Set(false),
            sent_at: Set(Utc::now()),
        };

        let mut reply = reply.insert(&*self.db).await?;

        let rendered = templates::reply_email(&reply, &message, &self.site);
        match self
            .mailer
            .send(OutboundEmail::new(message.email.clone(), rendered))
            .await
        {
            Ok(()) => {
                let mut active: contact_reply::ActiveModel = reply.into();
                active.email_sent = Set(true);
                reply = active.update(&*self.db).await?;

                self.mark_replied(message.id).await?;

                info!("Reply email sent to {}", message.email);
            }
            Err(e) => {
                warn!(
                    reply_id = %reply.id,
                    "Failed to send reply email to {}: {}",
                    message.email,
                    e
                );
            }
        }

        self.event_sender
            .send_or_log(Event::ContactReplyCreated {
                message_id: message.id,
                reply_id: reply.id,
                email_sent: reply.email_sent,
            })
            .await;

        Ok(reply)
    }

    /// Stamp the parent message after a confirmed send. Plain column updates,
    /// deliberately not routed back through `create_reply`'s side effects.
    async fn mark_replied(&self, message_id: Uuid) -> Result<(), ServiceError> {
        let now = Utc::now();

        ContactMessage::update_many()
            .col_expr(contact_message::Column::RepliedAt, Expr::value(now))
            .col_expr(contact_message::Column::UpdatedAt, Expr::value(now))
            .filter(contact_message::Column::Id.eq(message_id))
            .exec(&*self.db)
            .await?;

        // Only the automatic new -> in_progress promotion; closed messages
        // stay closed even when staff send another reply.
        ContactMessage::update_many()
            .col_expr(
                contact_message::Column::Status,
                Expr::value(MessageStatus::InProgress),
            )
            .filter(contact_message::Column::Id.eq(message_id))
            .filter(contact_message::Column::Status.eq(MessageStatus::New))
            .exec(&*self.db)
            .await?;

        Ok(())
    }
}

/// Input for submitting a contact message
#[derive(Debug, Deserialize, Serialize)]
pub struct SubmitMessageInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Input for creating a staff reply
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateReplyInput {
    pub reply_subject: String,
    pub reply_message: String,
    pub sent_by: Option<String>,
}

/// Input for a staff status change
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateStatusInput {
    pub status: MessageStatus,
    pub owner_notes: Option<String>,
}
