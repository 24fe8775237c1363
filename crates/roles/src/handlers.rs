//! Axum REST handlers for role and permission management.

use adboard_core::ApiError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::models::{
    PermissionsResponse, Role, RoleCreatedResponse, RoleDeletedResponse, RoleRequest,
};
use crate::store::{RoleStore, AVAILABLE_PERMISSIONS};

/// Shared role state.
#[derive(Clone)]
pub struct RoleState {
    pub store: Arc<RoleStore>,
}

pub async fn list_roles(State(state): State<RoleState>) -> Json<Vec<Role>> {
    Json(state.store.list())
}

pub async fn get_role(
    State(state): State<RoleState>,
    Path(id): Path<i32>,
) -> Result<Json<Role>, ApiError> {
    state.store.get(id).map(Json)
}

pub async fn create_role(
    State(state): State<RoleState>,
    Json(req): Json<RoleRequest>,
) -> Result<(StatusCode, Json<RoleCreatedResponse>), ApiError> {
    let role = state.store.create(req)?;
    metrics::counter!("roles.created").increment(1);
    Ok((
        StatusCode::CREATED,
        Json(RoleCreatedResponse {
            id: role.id,
            message: "Role created successfully".to_string(),
        }),
    ))
}

pub async fn update_role(
    State(state): State<RoleState>,
    Path(id): Path<i32>,
    Json(req): Json<RoleRequest>,
) -> Result<Json<Role>, ApiError> {
    state.store.update(id, req).map(Json)
}

pub async fn delete_role(
    State(state): State<RoleState>,
    Path(id): Path<i32>,
) -> Result<Json<RoleDeletedResponse>, ApiError> {
    state.store.delete(id)?;
    metrics::counter!("roles.deleted").increment(1);
    Ok(Json(RoleDeletedResponse {
        id,
        message: "Role deleted successfully".to_string(),
    }))
}

pub async fn list_permissions() -> Json<PermissionsResponse> {
    Json(PermissionsResponse {
        permissions: AVAILABLE_PERMISSIONS.iter().map(|p| p.to_string()).collect(),
    })
}
