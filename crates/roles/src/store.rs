//! In-memory role repository. Role names are unique, compared trimmed and
//! case-insensitive; identifiers are sequential.

use adboard_core::{ApiError, ApiResult};
use parking_lot::RwLock;
use tracing::info;

use crate::models::{Role, RoleRequest};

/// Catalog of permissions a role may carry.
pub const AVAILABLE_PERMISSIONS: [&str; 5] = ["create", "read", "update", "delete", "export"];

pub struct RoleStore {
    roles: RwLock<Vec<Role>>,
}

impl RoleStore {
    pub fn new() -> Self {
        let store = Self {
            roles: RwLock::new(Vec::new()),
        };
        store.seed_demo_data();
        info!("role store initialized (in-memory, development mode)");
        store
    }

    pub fn list(&self) -> Vec<Role> {
        self.roles.read().clone()
    }

    pub fn get(&self, id: i32) -> ApiResult<Role> {
        self.roles
            .read()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("role {} not found", id)))
    }

    pub fn create(&self, req: RoleRequest) -> ApiResult<Role> {
        let name = req.name.trim().to_string();
        let normalized = name.to_lowercase();

        let mut roles = self.roles.write();
        if roles.iter().any(|r| r.name.trim().to_lowercase() == normalized) {
            return Err(ApiError::Conflict(format!("role name '{}' already exists", name)));
        }
        let next_id = roles.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let role = Role {
            id: next_id,
            name,
            description: req.description.trim().to_string(),
            permissions: req.permissions,
        };
        roles.push(role.clone());
        info!(role_id = role.id, name = %role.name, "role created");
        Ok(role)
    }

    pub fn update(&self, id: i32, req: RoleRequest) -> ApiResult<Role> {
        let name = req.name.trim().to_string();
        let normalized = name.to_lowercase();

        let mut roles = self.roles.write();
        if roles
            .iter()
            .any(|r| r.id != id && r.name.trim().to_lowercase() == normalized)
        {
            return Err(ApiError::Conflict(format!("role name '{}' is already in use", name)));
        }
        let role = roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("role {} not found", id)))?;
        role.name = name;
        role.description = req.description.trim().to_string();
        role.permissions = req.permissions;
        Ok(role.clone())
    }

    pub fn delete(&self, id: i32) -> ApiResult<()> {
        let mut roles = self.roles.write();
        let index = roles
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("role {} not found", id)))?;
        roles.remove(index);
        info!(role_id = id, "role deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.roles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.read().is_empty()
    }

    fn seed_demo_data(&self) {
        let mut roles = self.roles.write();
        roles.push(Role {
            id: 1,
            name: "Admin".to_string(),
            description: "System administrator".to_string(),
            permissions: vec!["create".into(), "read".into(), "update".into(), "delete".into()],
        });
        roles.push(Role {
            id: 2,
            name: "Editor".to_string(),
            description: "Content editor".to_string(),
            permissions: vec!["read".into(), "update".into()],
        });
        roles.push(Role {
            id: 3,
            name: "User".to_string(),
            description: "Basic user".to_string(),
            permissions: vec!["read".into()],
        });
    }
}

impl Default for RoleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> RoleRequest {
        RoleRequest {
            name: name.to_string(),
            description: "desc".to_string(),
            permissions: vec!["read".to_string()],
        }
    }

    #[test]
    fn test_create_assigns_next_id() {
        let store = RoleStore::new();
        let role = store.create(request("Auditor")).unwrap();
        assert_eq!(role.id, 4);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_create_duplicate_name_conflicts_case_insensitive() {
        let store = RoleStore::new();
        let err = store.create(request("  admin ")).unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_rejects_name_owned_by_another_role() {
        let store = RoleStore::new();
        let err = store.update(2, request("Admin")).unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
        // Keeping its own name is fine.
        store.update(2, request("Editor")).unwrap();
    }

    #[test]
    fn test_update_unknown_role_is_not_found() {
        let store = RoleStore::new();
        let err = store.update(42, request("Ghost")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = RoleStore::new();
        store.delete(3).unwrap();
        assert_eq!(store.len(), 2);
        assert!(matches!(store.delete(3), Err(ApiError::NotFound(_))));
    }
}
