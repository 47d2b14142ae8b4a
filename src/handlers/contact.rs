use crate::handlers::common::{
    created_response, map_service_error, normalize_optional_string, normalize_string,
    success_response, validate_input, PageParam, PaginatedResponse,
};
use crate::{
    entities::MessageStatus,
    errors::ApiError,
    services::contact::{CreateReplyInput, SubmitMessageInput, UpdateStatusInput},
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

const STAFF_PAGE_SIZE: u64 = 20;

/// Creates the router for contact endpoints. `POST /` is the public form
/// submission; everything under `/messages` is the staff review surface.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_contact))
        .route("/messages", get(list_messages))
        .route("/messages/:id", get(get_message))
        .route("/messages/:id/replies", post(create_reply))
        .route("/messages/:id/status", put(update_status))
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Message received", body = ContactMessageResponse),
        (status = 400, description = "Invalid submission", body = crate::errors::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<SubmitContactRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    // Honeypot: the hidden website field stays empty for humans. Bots filling
    // it get a generic rejection before anything is persisted.
    if payload
        .website
        .as_deref()
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
    {
        return Err(ApiError::ValidationError("Invalid submission.".to_string()));
    }

    validate_input(&payload)?;

    let name = normalize_string(payload.name);
    if name.is_empty() {
        return Err(ApiError::ValidationError(
            "Name cannot be blank".to_string(),
        ));
    }

    let subject = normalize_string(payload.subject);
    if subject.is_empty() {
        return Err(ApiError::ValidationError(
            "Subject cannot be blank".to_string(),
        ));
    }

    let message = state
        .services
        .contact
        .submit_message(SubmitMessageInput {
            name,
            email: normalize_string(payload.email),
            phone: normalize_optional_string(payload.phone),
            subject,
            message: normalize_string(payload.message),
        })
        .await
        .map_err(map_service_error)?;

    Ok(created_response(ContactMessageResponse::from(message)))
}

/// List contact messages for staff review
#[utoipa::path(
    get,
    path = "/api/v1/contact/messages",
    params(MessageListParams),
    responses(
        (status = 200, description = "Messages retrieved")
    ),
    tag = "Contact"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<MessageListParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let page = PageParam { page: params.page }.validated()?;

    let (messages, total) = state
        .services
        .contact
        .list_messages(params.status, page, STAFF_PAGE_SIZE)
        .await
        .map_err(map_service_error)?;

    let messages: Vec<ContactMessageResponse> = messages
        .into_iter()
        .map(ContactMessageResponse::from)
        .collect();

    Ok(success_response(PaginatedResponse::new(
        messages,
        page,
        STAFF_PAGE_SIZE,
        total,
    )))
}

/// A contact message with its reply history
#[utoipa::path(
    get,
    path = "/api/v1/contact/messages/:id",
    params(
        ("id" = Uuid, Path, description = "Contact message ID")
    ),
    responses(
        (status = 200, description = "Message retrieved", body = MessageDetailResponse),
        (status = 404, description = "Message not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let message = state
        .services
        .contact
        .get_message(id)
        .await
        .map_err(map_service_error)?;

    let replies = state
        .services
        .contact
        .list_replies(id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(MessageDetailResponse {
        message: ContactMessageResponse::from(message),
        replies: replies.into_iter().map(ContactReplyResponse::from).collect(),
    }))
}

/// Create a staff reply; triggers the reply email
#[utoipa::path(
    post,
    path = "/api/v1/contact/messages/:id/replies",
    params(
        ("id" = Uuid, Path, description = "Contact message ID")
    ),
    request_body = CreateReplyRequest,
    responses(
        (status = 201, description = "Reply created", body = ContactReplyResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Message not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn create_reply(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateReplyRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    validate_input(&payload)?;

    let reply = state
        .services
        .contact
        .create_reply(
            id,
            CreateReplyInput {
                reply_subject: normalize_string(payload.reply_subject),
                reply_message: normalize_string(payload.reply_message),
                sent_by: normalize_optional_string(payload.sent_by),
            },
        )
        .await
        .map_err(map_service_error)?;

    Ok(created_response(ContactReplyResponse::from(reply)))
}

/// Set a message's workflow status (staff action)
#[utoipa::path(
    put,
    path = "/api/v1/contact/messages/:id/status",
    params(
        ("id" = Uuid, Path, description = "Contact message ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ContactMessageResponse),
        (status = 404, description = "Message not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let message = state
        .services
        .contact
        .update_status(
            id,
            UpdateStatusInput {
                status: payload.status,
                owner_notes: normalize_optional_string(payload.owner_notes),
            },
        )
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ContactMessageResponse::from(message)))
}

// Request/Response DTOs

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "Ana Martins",
    "email": "ana@example.com",
    "phone": "+351 912 000 000",
    "subject": "Sizing question",
    "message": "Does the Trail Runner run small?"
}))]
pub struct SubmitContactRequest {
    /// Sender's full name
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Sender's email address
    #[validate(email)]
    pub email: String,
    /// Optional phone number
    #[serde(default)]
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    /// Message subject
    #[validate(length(min = 1, max = 200))]
    pub subject: String,
    /// Message body
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
    /// Honeypot field; must be left empty
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = 200))]
    pub reply_subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub reply_message: String,
    /// Staff member name
    #[serde(default)]
    #[validate(length(max = 120))]
    pub sent_by: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: MessageStatus,
    #[serde(default)]
    pub owner_notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessageListParams {
    /// Filter by workflow status
    #[serde(default)]
    pub status: Option<MessageStatus>,
    #[serde(default = "default_page")]
    pub page: u64,
}

fn default_page() -> u64 {
    1
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMessageResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::entities::ContactMessageModel> for ContactMessageResponse {
    fn from(model: crate::entities::ContactMessageModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            subject: model.subject,
            message: model.message,
            status: model.status,
            owner_notes: model.owner_notes,
            replied_at: model.replied_at,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactReplyResponse {
    pub id: Uuid,
    pub contact_message_id: Uuid,
    pub reply_subject: String,
    pub reply_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_by: Option<String>,
    /// True only when the gateway confirmed the send
    pub email_sent: bool,
    pub sent_at: chrono::DateTime<chrono::Utc>,
}

impl From<crate::entities::ContactReplyModel> for ContactReplyResponse {
    fn from(model: crate::entities::ContactReplyModel) -> Self {
        Self {
            id: model.id,
            contact_message_id: model.contact_message_id,
            reply_subject: model.reply_subject,
            reply_message: model.reply_message,
            sent_by: model.sent_by,
            email_sent: model.email_sent,
            sent_at: model.sent_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageDetailResponse {
    pub message: ContactMessageResponse,
    /// Replies oldest-first
    pub replies: Vec<ContactReplyResponse>,
}
