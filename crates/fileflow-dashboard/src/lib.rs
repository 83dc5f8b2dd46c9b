//! # fileflow-dashboard
//!
//! Admin web dashboard for FileFlow.
//!
//! Server-rendered pages for:
//! - Dashboard home (quick stats, module overview)
//! - File manager (type and modified-date filters)
//! - User management: users, roles, departments
//! - Template management: master templates, documents, approval list
//!
//! Every list page is a `fileflow-table` view; its sort, filter, visibility,
//! selection and page state travel in the query string.
//!
//! ## Tech Stack
//!
//! - Axum for HTTP server
//! - HTMX + Alpine.js for interactivity (minimal JS)
//! - Tailwind CSS for styling

pub mod api_types;
pub mod auth;
pub mod columns;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use error::DashboardError;
pub use routes::create_router;
pub use server::DashboardServer;
pub use state::AppState;
