//! Access key endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    AccessKeyFormResponse, AccessKeyResponse, ApiError, FormFields, ListAccessKeysResponse,
};
use crate::domain::access_key::AccessKeyId;
use crate::domain::region::RegionId;
use crate::domain::DomainError;

/// Query parameters for listing access keys
#[derive(Debug, Default, Deserialize)]
pub struct ListAccessKeysQuery {
    #[serde(rename = "regionUUID")]
    pub region_uuid: Option<String>,
}

/// POST /api/v1/access_keys
pub async fn create_access_key(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<(StatusCode, Json<AccessKeyResponse>), ApiError> {
    let form = fields.bind()?;

    let key = state.access_key_service.create(&form).await?;

    Ok((StatusCode::CREATED, Json(AccessKeyResponse::from(&key))))
}

/// POST /api/v1/access_keys/validate
pub async fn validate_access_key(
    fields: FormFields,
) -> Result<Json<AccessKeyFormResponse>, ApiError> {
    let form = fields.bind()?;

    debug!("Access key form valid: code={}", form.key_code());

    Ok(Json(AccessKeyFormResponse::from(&form)))
}

/// GET /api/v1/access_keys
pub async fn list_access_keys(
    State(state): State<AppState>,
    Query(query): Query<ListAccessKeysQuery>,
) -> Result<Json<ListAccessKeysResponse>, ApiError> {
    let region = match query.region_uuid.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(raw.parse::<RegionId>().map_err(|_| {
            ApiError::from(DomainError::validation(format!("Invalid regionUUID: '{}'", raw)))
                .with_param("regionUUID")
        })?),
        None => None,
    };

    let keys = state.access_key_service.list(region).await?;

    let access_keys: Vec<AccessKeyResponse> = keys.iter().map(AccessKeyResponse::from).collect();
    let total = access_keys.len();

    Ok(Json(ListAccessKeysResponse { access_keys, total }))
}

/// GET /api/v1/access_keys/{key_id}
pub async fn get_access_key(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
) -> Result<Json<AccessKeyResponse>, ApiError> {
    let id = parse_key_id(&key_id)?;

    let key = state
        .access_key_service
        .get(&id)
        .await?
        .ok_or_else(|| DomainError::not_found(format!("Access key '{}' not found", id)))?;

    Ok(Json(AccessKeyResponse::from(&key)))
}

/// DELETE /api/v1/access_keys/{key_id}
pub async fn delete_access_key(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_key_id(&key_id)?;

    state.access_key_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_key_id(raw: &str) -> Result<AccessKeyId, DomainError> {
    raw.parse::<AccessKeyId>()
        .map_err(|_| DomainError::invalid_id(format!("Invalid access key ID: '{}'", raw)))
}
