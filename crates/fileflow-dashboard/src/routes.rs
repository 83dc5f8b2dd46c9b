//! Route definitions for the dashboard.

use axum::{
    Router, middleware,
    routing::{MethodRouter, get},
};
use tower_http::trace::TraceLayer;

use fileflow_core::{
    ApprovalListItem, DepartmentItem, DocumentListItem, FileItem, MasterTemplateItem, RoleItem,
    UserItem,
};

use crate::auth;
use crate::handlers::{self, Resource};
use crate::state::AppState;

/// Create the dashboard router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/login", get(auth::login_page).post(auth::login_submit))
        .route("/logout", get(auth::logout))
        .route("/healthz", get(handlers::healthz))
        .merge(resource::<FileItem>(get(handlers::resource_page::<FileItem>)))
        .merge(resource::<UserItem>(get(handlers::resource_page::<UserItem>)))
        .merge(resource::<RoleItem>(get(handlers::resource_page::<RoleItem>)))
        .merge(resource::<DepartmentItem>(get(handlers::resource_page::<DepartmentItem>)))
        .merge(resource::<MasterTemplateItem>(
            get(handlers::resource_page::<MasterTemplateItem>).post(handlers::add_master_template),
        ))
        .merge(resource::<DocumentListItem>(
            get(handlers::resource_page::<DocumentListItem>).post(handlers::add_document),
        ))
        .merge(resource::<ApprovalListItem>(get(handlers::resource_page::<ApprovalListItem>)))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), auth::auth_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A resource page plus its table fragment.
fn resource<T: Resource>(page: MethodRouter<AppState>) -> Router<AppState> {
    let meta = T::PAGE;
    Router::new()
        .route(meta.path, page)
        .route(&meta.fragment_path(), get(handlers::resource_table::<T>))
}
