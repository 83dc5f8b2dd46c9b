//! Request handlers for the dashboard.
//!
//! Every resource page goes through the same two generic handlers. A page
//! owns its records and its categorical filter; the table engine gets the
//! already-filtered records plus the table state parsed from the query
//! string.

use axum::{
    Form, Json,
    extract::{Query, State},
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use serde_json::json;

use fileflow_core::{
    ApprovalListItem, ApprovalStatus, DepartmentItem, DepartmentStatus, DocumentListItem,
    DocumentStatus, FileItem, FileType, MasterTemplateItem, MockData, RoleItem, TemplateStatus,
    UserItem,
};
use fileflow_table::{
    DeferredLoad, Record, SelectFilter, Table, TableProps, TableQuery, TableState, TableView,
    render_table,
};

use crate::api_types::{DocumentForm, FilterQuery, MasterTemplateForm};
use crate::columns::Tables;
use crate::error::DashboardError;
use crate::pages::{self, Dialog, PageMeta};
use crate::state::AppState;

// =============================================================================
// Resources
// =============================================================================

/// A record type with its own list page.
pub trait Resource: Record + Clone + Send + Sync + 'static {
    const PAGE: PageMeta;

    fn records(data: &MockData) -> &[Self];

    fn table(tables: &Tables) -> &Table<Self>;

    /// The page's categorical filter, without a value.
    fn category_filter() -> SelectFilter;

    /// This record's value for the categorical filter.
    fn category(&self) -> &'static str;

    /// Day the record was last modified, for pages with a date filter.
    fn modified_on(&self) -> Option<NaiveDate> {
        None
    }

    /// Add dialog in its initial state.
    fn add_dialog() -> Option<Dialog> {
        None
    }
}

fn status_filter<'a>(labels: impl Iterator<Item = &'a str>) -> SelectFilter {
    labels.fold(
        SelectFilter::new("status", "Filter by status")
            .all_option("All Statuses")
            .clearable("Clear Status Filter"),
        |filter, label| filter.option(label, label),
    )
}

fn active_filter() -> SelectFilter {
    SelectFilter::new("status", "Filter by status")
        .all_option("All Statuses")
        .option("active", "Active")
        .option("inactive", "Inactive")
        .clearable("Clear Status Filter")
}

fn active_category(is_active: bool) -> &'static str {
    if is_active { "active" } else { "inactive" }
}

impl Resource for FileItem {
    const PAGE: PageMeta = PageMeta {
        path: "/file-manager",
        title: "File Manager",
        description: "Browse, search, and manage your files efficiently.",
        filter_param: "type",
        action: Some(("Upload File", "cloud-arrow-up")),
        deferred: false,
        date_filter: true,
    };

    fn records(data: &MockData) -> &[Self] {
        &data.files
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.files
    }

    fn category_filter() -> SelectFilter {
        FileType::ALL
            .iter()
            .fold(
                SelectFilter::new("type", "Select file type")
                    .label("Filter by type")
                    .all_option("All Types"),
                |filter, t| filter.option(t.as_str(), t.as_str()),
            )
    }

    fn category(&self) -> &'static str {
        self.file_type.as_str()
    }

    fn modified_on(&self) -> Option<NaiveDate> {
        Some(self.last_modified.date_naive())
    }
}

impl Resource for UserItem {
    const PAGE: PageMeta = PageMeta {
        path: "/user-management/users",
        title: "User Management",
        description: "Manage all users in the system.",
        filter_param: "status",
        action: Some(("Add User", "user-plus")),
        deferred: false,
        date_filter: false,
    };

    fn records(data: &MockData) -> &[Self] {
        &data.users
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.users
    }

    fn category_filter() -> SelectFilter {
        active_filter()
    }

    fn category(&self) -> &'static str {
        active_category(self.is_active)
    }
}

impl Resource for RoleItem {
    const PAGE: PageMeta = PageMeta {
        path: "/user-management/roles",
        title: "Role Management",
        description: "Manage all roles in the system.",
        filter_param: "status",
        action: Some(("Add Role", "shield-halved")),
        deferred: false,
        date_filter: false,
    };

    fn records(data: &MockData) -> &[Self] {
        &data.roles
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.roles
    }

    fn category_filter() -> SelectFilter {
        active_filter()
    }

    fn category(&self) -> &'static str {
        active_category(self.is_active)
    }
}

impl Resource for DepartmentItem {
    const PAGE: PageMeta = PageMeta {
        path: "/user-management/departments",
        title: "Department Management",
        description: "Manage all departments in the system.",
        filter_param: "status",
        action: Some(("Add Department", "building")),
        deferred: false,
        date_filter: false,
    };

    fn records(data: &MockData) -> &[Self] {
        &data.departments
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.departments
    }

    fn category_filter() -> SelectFilter {
        status_filter(DepartmentStatus::ALL.iter().map(|s| s.as_str()))
    }

    fn category(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Resource for MasterTemplateItem {
    const PAGE: PageMeta = PageMeta {
        path: "/template-management/master-templates",
        title: "Master Template Management",
        description: "Manage all master document templates.",
        filter_param: "status",
        action: Some(("Add Master Template", "file-circle-plus")),
        deferred: true,
        date_filter: false,
    };

    fn records(data: &MockData) -> &[Self] {
        &data.master_templates
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.master_templates
    }

    fn category_filter() -> SelectFilter {
        status_filter(TemplateStatus::ALL.iter().map(|s| s.as_str()))
    }

    fn category(&self) -> &'static str {
        self.status.as_str()
    }

    fn add_dialog() -> Option<Dialog> {
        Some(pages::master_template_dialog(&MasterTemplateForm::initial(), None))
    }
}

impl Resource for DocumentListItem {
    const PAGE: PageMeta = PageMeta {
        path: "/template-management/documents",
        title: "Document List",
        description: "Manage all documents created from templates.",
        filter_param: "status",
        action: Some(("Create Document", "file-circle-plus")),
        deferred: false,
        date_filter: false,
    };

    fn records(data: &MockData) -> &[Self] {
        &data.documents
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.documents
    }

    fn category_filter() -> SelectFilter {
        status_filter(DocumentStatus::ALL.iter().map(|s| s.as_str()))
    }

    fn category(&self) -> &'static str {
        self.status.as_str()
    }

    fn add_dialog() -> Option<Dialog> {
        Some(pages::document_dialog(&DocumentForm::initial(), None))
    }
}

impl Resource for ApprovalListItem {
    const PAGE: PageMeta = PageMeta {
        path: "/template-management/approval-list",
        title: "Approval & Pending List",
        description: "Review documents pending approval and view approval history.",
        filter_param: "status",
        action: None,
        deferred: false,
        date_filter: false,
    };

    fn records(data: &MockData) -> &[Self] {
        &data.approvals
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.approvals
    }

    fn category_filter() -> SelectFilter {
        status_filter(ApprovalStatus::ALL.iter().map(|s| s.as_str()))
    }

    fn category(&self) -> &'static str {
        self.status.as_str()
    }
}

// =============================================================================
// Page Handlers (HTML responses)
// =============================================================================

/// Handler for the dashboard home page.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(pages::home_page(&state.data().stats()))
}

/// Full resource page.
pub async fn resource_page<T: Resource>(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
    Query(filters): Query<FilterQuery>,
) -> Html<String> {
    let dialog = T::add_dialog();
    Html(render_resource_page::<T>(&state, &query, &filters, dialog.as_ref()))
}

/// Just the table block, fetched by pages that load with a skeleton.
pub async fn resource_table<T: Resource>(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
    Query(filters): Query<FilterQuery>,
) -> Html<String> {
    let page = T::PAGE;
    let select = category_select::<T>(&filters);
    let records = page_records::<T>(state.data(), &select, &filters);
    let table = T::table(state.tables());
    let view = TableView::compute(table, &records, &TableState::from_query(&query));
    let props = table_props(&page, &filters, &select);
    Html(render_table(table, &view, &props))
}

/// The page's categorical filter set from the request.
fn category_select<T: Resource>(filters: &FilterQuery) -> SelectFilter {
    T::category_filter().with_value(filters.category(T::PAGE.filter_param))
}

/// Records after the page-owned filters, categorical first.
fn page_records<T: Resource>(
    data: &MockData,
    select: &SelectFilter,
    filters: &FilterQuery,
) -> Vec<T> {
    let mut records = select.apply(T::records(data), |r, value| {
        r.category().eq_ignore_ascii_case(value)
    });
    if T::PAGE.date_filter
        && let Some(date) = filters.date()
    {
        records.retain(|r| r.modified_on() == Some(date));
    }
    records
}

fn table_props<'a>(
    page: &'a PageMeta,
    filters: &FilterQuery,
    select: &'a SelectFilter,
) -> TableProps<'a> {
    let date = page.date_filter.then(|| filters.date()).flatten().map(|d| d.to_string());
    TableProps::new(page.path)
        .param("date", date.as_deref())
        .select_filter(select)
}

fn render_resource_page<T: Resource>(
    state: &AppState,
    query: &TableQuery,
    filters: &FilterQuery,
    dialog: Option<&Dialog>,
) -> String {
    let page = T::PAGE;
    let select = category_select::<T>(filters);
    let records = page_records::<T>(state.data(), &select, filters);
    let table = T::table(state.tables());
    let view = TableView::compute(table, &records, &TableState::from_query(query));
    let mut props = table_props(&page, filters, &select);

    if page.deferred {
        let fragment_path = page.fragment_path();
        let fragment = TableProps {
            path: &fragment_path,
            ..props.clone()
        };
        let deferred = DeferredLoad {
            url: fragment.href(&view.state),
            delay_ms: state.config().mock.loading_delay_ms,
        };
        props = props.loading(Some(deferred));
    }

    tracing::debug!(
        page = page.path,
        total = records.len(),
        filtered = view.filtered_count,
        page_index = view.state.page,
        "Rendering resource page"
    );

    let table_html = render_table(table, &view, &props);
    let date_filter = page.date_filter.then(|| {
        // The date form keeps the type filter; the clear link drops both.
        let mut reset = view.state.clone();
        reset.page = 0;
        let mut hidden: Vec<(String, String)> = props
            .params
            .iter()
            .filter(|(k, _)| k != "date")
            .cloned()
            .collect();
        hidden.extend(reset.to_pairs().into_iter().map(|(k, v)| (k.to_string(), v)));
        let clear = TableProps::new(page.path).href(&reset);
        let date = filters.date().map(|d| d.to_string());
        pages::date_filter(page.path, &hidden, date.as_deref(), &clear)
    });

    pages::resource_page(&page, &table_html, dialog, date_filter.as_deref())
}

// =============================================================================
// Form Handlers
// =============================================================================

/// Handler for the Add Master Template dialog.
pub async fn add_master_template(
    State(state): State<AppState>,
    Form(form): Form<MasterTemplateForm>,
) -> Response {
    let page = MasterTemplateItem::PAGE;
    match form.validate() {
        Ok(template) => {
            tracing::info!(
                name = %template.name,
                version = %template.version,
                status = %template.status,
                "Master template submitted"
            );
            Redirect::to(page.path).into_response()
        }
        Err(errors) => {
            let err =
                DashboardError::InvalidRequest(format!("invalid fields: {}", errors.fields()));
            tracing::warn!(error = %err, "Rejected master template submission");
            let dialog = pages::master_template_dialog(&form, Some(&errors));
            let html = render_resource_page::<MasterTemplateItem>(
                &state,
                &TableQuery::default(),
                &FilterQuery::default(),
                Some(&dialog),
            );
            (err.status(), Html(html)).into_response()
        }
    }
}

/// Handler for the Create Document dialog.
pub async fn add_document(
    State(state): State<AppState>,
    Form(form): Form<DocumentForm>,
) -> Response {
    let page = DocumentListItem::PAGE;
    match form.validate() {
        Ok(document) => {
            tracing::info!(
                name = %document.name,
                template = %document.template_used,
                status = %document.status,
                "Document submitted"
            );
            Redirect::to(page.path).into_response()
        }
        Err(errors) => {
            let err =
                DashboardError::InvalidRequest(format!("invalid fields: {}", errors.fields()));
            tracing::warn!(error = %err, "Rejected document submission");
            let dialog = pages::document_dialog(&form, Some(&errors));
            let html = render_resource_page::<DocumentListItem>(
                &state,
                &TableQuery::default(),
                &FilterQuery::default(),
                Some(&dialog),
            );
            (err.status(), Html(html)).into_response()
        }
    }
}

// =============================================================================
// Misc
// =============================================================================

/// Liveness check.
pub async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "fileflow-dashboard" }))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> Response {
    let err = DashboardError::NotFound(uri.path().to_string());
    tracing::debug!(error = %err, "No route");
    (err.status(), Html(pages::not_found_page(uri.path()))).into_response()
}
