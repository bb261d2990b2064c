//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use minierp_core::error::CoreError;
use minierp_core::types::DbId;
use minierp_core::validation::{normalize_text, require, validate_name};
use minierp_db::models::client::{Client, CreateClient};
use minierp_db::repositories::ClientRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// Request body for `POST /clients`. Only `name` is required.
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CreateClientRequest {
    fn validate(self) -> Result<CreateClient, CoreError> {
        let name = validate_name(&require(self.name, "name")?, "name")?;
        Ok(CreateClient {
            name,
            email: normalize_text(self.email, "email")?,
            phone: normalize_text(self.phone, "phone")?,
            address: normalize_text(self.address, "address")?,
        })
    }
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateClientRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let input = input.validate()?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(client_id = client.id, "Client created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: client.id,
            message: "Client created".to_string(),
        }),
    ))
}

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Client>>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    tracing::debug!(count = clients.len(), "Listed clients");
    Ok(Json(DataResponse { data: clients }))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Client>>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(DataResponse { data: client }))
}
