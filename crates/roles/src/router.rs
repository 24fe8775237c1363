//! Role router — role CRUD plus the permission catalog, all behind the
//! bearer-token middleware.

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::handlers::{self, RoleState};
use crate::middleware::require_bearer;
use crate::store::RoleStore;

pub fn role_router() -> Router {
    let state = RoleState {
        store: Arc::new(RoleStore::new()),
    };

    Router::new()
        .route("/roles", get(handlers::list_roles).post(handlers::create_role))
        .route("/roles/permissions", get(handlers::list_permissions))
        .route(
            "/roles/{id}",
            get(handlers::get_role)
                .put(handlers::update_role)
                .delete(handlers::delete_role),
        )
        .layer(from_fn(require_bearer))
        .with_state(state)
}
