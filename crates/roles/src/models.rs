use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleRequest {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleCreatedResponse {
    pub id: i32,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RoleDeletedResponse {
    pub id: i32,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PermissionsResponse {
    pub permissions: Vec<String>,
}
