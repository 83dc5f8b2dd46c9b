//! Shared types for the FileFlow dashboard: configuration, the record types
//! shown in each resource table, and the in-memory mock data.

// Configuration loaded from fileflow.yaml
pub mod config;

pub mod format;
pub mod mock;
pub mod model;

pub use config::{AuthConfig, BasicAuthUser, ConfigError, DashboardConfig, FileFlowConfig};
pub use mock::{MockData, QuickStats};
pub use model::{
    ApprovalListItem, ApprovalStatus, DepartmentItem, DepartmentStatus, DocumentListItem,
    DocumentStatus, FileItem, FileType, MasterTemplateItem, RoleItem, TemplateStatus, UserItem,
};
