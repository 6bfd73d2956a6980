//! Ledger entry routes: search, create, update, status change, delete.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::AppState;
use crate::routes::error_response;
use fintrack_core::auth::UserRepository as _;
use fintrack_core::ledger::{
    EntryDraft, EntryFilter, EntryService, EntryStatus, EntryType, LedgerEntry, LedgerError,
};
use fintrack_db::{EntryRepository, UserRepository};
use fintrack_shared::types::{EntryId, UserId};

/// Creates the entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(search_entries))
        .route("/entries", post(create_entry))
        .route("/entries/{id}", get(get_entry))
        .route("/entries/{id}", put(update_entry))
        .route("/entries/{id}/status", patch(update_entry_status))
        .route("/entries/{id}", delete(delete_entry))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for searching entries.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Owner of the entries (required).
    pub user: Uuid,
    /// Exact description match.
    pub description: Option<String>,
    /// Exact month match.
    pub month: Option<i32>,
    /// Exact year match.
    pub year: Option<i32>,
}

/// Request body for creating or updating an entry.
///
/// Every field is optional; the validator reports the first missing or
/// invalid one. Type and status arrive as strings and are parsed explicitly
/// so an unknown variant is a business-rule error, not a deserialization
/// failure.
#[derive(Debug, Deserialize)]
pub struct EntryPayload {
    /// What the money was for.
    pub description: Option<String>,
    /// Calendar month, 1-12.
    pub month: Option<i32>,
    /// Calendar year.
    pub year: Option<i32>,
    /// Amount, strictly positive.
    pub amount: Option<Decimal>,
    /// "income" or "expense".
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    /// "pending", "settled", or "cancelled".
    pub status: Option<String>,
    /// Owner user ID.
    pub user: Option<Uuid>,
}

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// "pending", "settled", or "cancelled".
    pub status: String,
}

/// Response for a ledger entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    /// Entry ID.
    pub id: Uuid,
    /// Description.
    pub description: String,
    /// Calendar month.
    pub month: i32,
    /// Calendar year.
    pub year: i32,
    /// Amount.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Lifecycle state.
    pub status: EntryStatus,
    /// Owner user ID.
    pub user: Uuid,
    /// Date the entry was recorded.
    pub registered_on: NaiveDate,
}

impl From<LedgerEntry> for EntryResponse {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            id: entry.id.into_inner(),
            description: entry.description,
            month: entry.month,
            year: entry.year,
            amount: entry.amount,
            entry_type: entry.entry_type,
            status: entry.status,
            user: entry.owner.into_inner(),
            registered_on: entry.registered_on,
        }
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn entry_service(state: &AppState) -> EntryService<EntryRepository> {
    EntryService::new(EntryRepository::new((*state.db).clone()))
}

/// Resolves a referenced owner to a persisted user.
///
/// A missing user is a recoverable business-rule error, unlike the id
/// contract on update/delete.
async fn resolve_owner(state: &AppState, id: Uuid) -> Result<UserId, LedgerError> {
    let users = UserRepository::new((*state.db).clone());
    let user_id = UserId::from_uuid(id);
    users
        .find_by_id(user_id)
        .await?
        .map(|user| user.id)
        .ok_or(LedgerError::OwnerNotFound(user_id))
}

/// Builds a draft from the wire payload, parsing enum strings and resolving
/// the owner reference.
async fn to_draft(state: &AppState, payload: EntryPayload) -> Result<EntryDraft, LedgerError> {
    let entry_type = payload
        .entry_type
        .as_deref()
        .map(str::parse::<EntryType>)
        .transpose()?;
    let status = payload
        .status
        .as_deref()
        .map(str::parse::<EntryStatus>)
        .transpose()?;

    let owner = match payload.user {
        Some(id) => Some(resolve_owner(state, id).await?),
        None => None,
    };

    Ok(EntryDraft {
        id: None,
        description: payload.description,
        month: payload.month,
        year: payload.year,
        amount: payload.amount,
        entry_type,
        status,
        owner,
        registered_on: None,
    })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /entries - Search a user's entries with optional exact-match filters.
async fn search_entries(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let owner = match resolve_owner(&state, query.user).await {
        Ok(owner) => owner,
        Err(err) => return error_response(err),
    };

    let filter = EntryFilter {
        owner,
        description: query.description,
        month: query.month,
        year: query.year,
    };

    match entry_service(&state).search(&filter).await {
        Ok(entries) => {
            let entries: Vec<EntryResponse> = entries.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(entries)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// POST /entries - Validate and persist a new entry.
async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryPayload>,
) -> impl IntoResponse {
    let draft = match to_draft(&state, payload).await {
        Ok(draft) => draft,
        Err(err) => return error_response(err),
    };

    match entry_service(&state).create(draft).await {
        Ok(entry) => {
            info!(entry_id = %entry.id, user_id = %entry.owner, "Ledger entry created");
            (StatusCode::CREATED, Json(EntryResponse::from(entry))).into_response()
        }
        Err(err) => {
            warn!(error = %err, "Entry rejected");
            error_response(err)
        }
    }
}

/// GET /entries/{id} - Fetch one entry.
async fn get_entry(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let id = EntryId::from_uuid(id);

    match entry_service(&state).find_by_id(id).await {
        Ok(Some(entry)) => (StatusCode::OK, Json(EntryResponse::from(entry))).into_response(),
        Ok(None) => error_response(LedgerError::EntryNotFound(id)),
        Err(err) => error_response(err),
    }
}

/// PUT /entries/{id} - Replace a persisted entry.
///
/// The stored entry is loaded first, so the service's id contract always
/// holds; status and registration date fall back to the stored values when
/// the payload omits them.
async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EntryPayload>,
) -> impl IntoResponse {
    let id = EntryId::from_uuid(id);
    let service = entry_service(&state);

    let existing = match service.find_by_id(id).await {
        Ok(Some(entry)) => entry,
        Ok(None) => return error_response(LedgerError::EntryNotFound(id)),
        Err(err) => return error_response(err),
    };

    let mut draft = match to_draft(&state, payload).await {
        Ok(draft) => draft,
        Err(err) => return error_response(err),
    };
    draft.id = Some(existing.id);
    draft.status = draft.status.or(Some(existing.status));
    draft.registered_on = Some(existing.registered_on);

    match service.update(draft).await {
        Ok(entry) => (StatusCode::OK, Json(EntryResponse::from(entry))).into_response(),
        Err(err) => {
            warn!(entry_id = %id, error = %err, "Entry update rejected");
            error_response(err)
        }
    }
}

/// PATCH /entries/{id}/status - Move an entry to a new status.
async fn update_entry_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> impl IntoResponse {
    let id = EntryId::from_uuid(id);

    let status = match payload.status.parse::<EntryStatus>() {
        Ok(status) => status,
        Err(err) => return error_response(LedgerError::from(err)),
    };

    let service = entry_service(&state);
    let entry = match service.find_by_id(id).await {
        Ok(Some(entry)) => entry,
        Ok(None) => return error_response(LedgerError::EntryNotFound(id)),
        Err(err) => return error_response(err),
    };

    match service.update_status(entry, status).await {
        Ok(entry) => {
            info!(entry_id = %id, status = %entry.status, "Entry status updated");
            (StatusCode::OK, Json(EntryResponse::from(entry))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// DELETE /entries/{id} - Remove an entry.
async fn delete_entry(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let id = EntryId::from_uuid(id);
    let service = entry_service(&state);

    let entry = match service.find_by_id(id).await {
        Ok(Some(entry)) => entry,
        Ok(None) => return error_response(LedgerError::EntryNotFound(id)),
        Err(err) => return error_response(err),
    };

    match service.delete(&EntryDraft::from(entry)).await {
        Ok(()) => {
            info!(entry_id = %id, "Ledger entry deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => error_response(err),
    }
}
