//! Column definitions for every resource table.

use fileflow_core::format::{format_bytes, format_date, format_date_time};
use fileflow_core::{
    ApprovalListItem, ApprovalStatus, DepartmentItem, DepartmentStatus, DocumentListItem,
    DocumentStatus, FileItem, MasterTemplateItem, RoleItem, TemplateStatus, UserItem,
};
use fileflow_table::render::html_escape;
use fileflow_table::{Column, HeaderContext, SortDirection, Table, TableError, Value};

use crate::templates::{badge, outline_badge};

/// The table definition of every resource page, built once at startup.
#[derive(Debug, Clone)]
pub struct Tables {
    pub files: Table<FileItem>,
    pub users: Table<UserItem>,
    pub roles: Table<RoleItem>,
    pub departments: Table<DepartmentItem>,
    pub master_templates: Table<MasterTemplateItem>,
    pub documents: Table<DocumentListItem>,
    pub approvals: Table<ApprovalListItem>,
}

impl Tables {
    pub fn build(page_size: usize) -> Result<Self, TableError> {
        Ok(Self {
            files: files()?.with_page_size(page_size),
            users: users()?.with_page_size(page_size),
            roles: roles()?.with_page_size(page_size),
            departments: departments()?.with_page_size(page_size),
            master_templates: master_templates()?.with_page_size(page_size),
            documents: documents()?.with_page_size(page_size),
            approvals: approvals()?.with_page_size(page_size),
        })
    }
}

fn files() -> Result<Table<FileItem>, TableError> {
    Table::new(vec![
        Column::new("name", "Name", |f: &FileItem| Value::from(&f.name))
            .sortable()
            .fixed()
            .cell(|f| {
                let star = if f.is_favorite {
                    r#"<i class="fas fa-star text-yellow-400" title="Favorite"></i>"#
                } else {
                    ""
                };
                format!(
                    r#"<div class="flex items-center gap-2"><i class="{icon} text-primary-500 w-4"></i><span class="font-medium">{name}</span>{star}</div>"#,
                    icon = f.file_type.icon(),
                    name = html_escape(&f.name),
                )
            }),
        Column::new("size", "Size", |f: &FileItem| Value::from(f.size))
            .sortable()
            .header(right_aligned_header)
            .cell(|f| format!(r#"<div class="text-right">{}</div>"#, format_bytes(f.size))),
        Column::new("type", "Type", |f: &FileItem| Value::from(f.file_type.as_str()))
            .sortable()
            .cell(|f| outline_badge(f.file_type.as_str())),
        Column::new("lastModified", "Last Modified", |f: &FileItem| Value::from(f.last_modified))
            .sortable()
            .cell(|f| format_date_time(&f.last_modified)),
        Column::new("owner", "Owner", |f: &FileItem| Value::from(f.owner.clone()))
            .cell(|f| html_escape(f.owner.as_deref().unwrap_or("N/A"))),
        actions(&["Open", "Download", "Share", "Rename", "Delete"]),
    ])?
    .with_filter("name", "Search by name...")
}

fn users() -> Result<Table<UserItem>, TableError> {
    Table::new(vec![
        sr_no(|u: &UserItem| u.sr_no),
        Column::new("firstName", "First Name", |u: &UserItem| {
            Value::from(&u.first_name)
        })
        .sortable(),
        Column::new("lastName", "Last Name", |u: &UserItem| Value::from(&u.last_name)).sortable(),
        Column::new("email", "Email", |u: &UserItem| Value::from(&u.email)).sortable(),
        active_column(|u: &UserItem| u.is_active, "Status"),
        actions(&["Edit User", "Reset Password", "Delete User"]),
    ])?
    .with_filter("firstName", "Search by first name...")
}

fn roles() -> Result<Table<RoleItem>, TableError> {
    Table::new(vec![
        sr_no(|r: &RoleItem| r.sr_no),
        Column::new("role", "Role", |r: &RoleItem| Value::from(&r.role)).sortable(),
        Column::new("description", "Description", |r: &RoleItem| Value::from(&r.description))
            .cell(|r| description_cell(&r.description)),
        active_column(|r: &RoleItem| r.is_active, "Status"),
        actions(&["Edit Role", "Permissions", "Delete Role"]),
    ])?
    .with_filter("role", "Search by role name...")
}

fn departments() -> Result<Table<DepartmentItem>, TableError> {
    Table::new(vec![
        sr_no(|d: &DepartmentItem| d.sr_no),
        Column::new("name", "Name", |d: &DepartmentItem| Value::from(&d.name)).sortable(),
        Column::new("description", "Description", |d: &DepartmentItem| Value::from(&d.description))
            .cell(|d| description_cell(&d.description)),
        active_column(|d: &DepartmentItem| d.is_active, "Active"),
        Column::new("status", "Status", |d: &DepartmentItem| Value::from(d.status.as_str()))
            .cell(|d| badge(d.status.as_str(), department_color(d.status))),
        actions(&["Edit Department", "View Members", "Delete Department"]),
    ])?
    .with_filter("name", "Search by department name...")
}

fn master_templates() -> Result<Table<MasterTemplateItem>, TableError> {
    Table::new(vec![
        sr_no(|t: &MasterTemplateItem| t.sr_no),
        Column::new("name", "Name", |t: &MasterTemplateItem| Value::from(&t.name)).sortable(),
        Column::new("version", "Version", |t: &MasterTemplateItem| Value::from(&t.version)),
        Column::new("status", "Status", |t: &MasterTemplateItem| Value::from(t.status.as_str()))
            .cell(|t| badge(t.status.as_str(), template_color(t.status))),
        Column::new("lastModified", "Last Modified", |t: &MasterTemplateItem| {
            Value::from(t.last_modified)
        })
        .sortable()
        .cell(|t| format_date_time(&t.last_modified)),
        actions(&["Edit Template", "Duplicate", "Archive"]),
    ])?
    .with_filter("name", "Search by template name...")
}

fn documents() -> Result<Table<DocumentListItem>, TableError> {
    Table::new(vec![
        sr_no(|d: &DocumentListItem| d.sr_no),
        Column::new("name", "Name", |d: &DocumentListItem| Value::from(&d.name)).sortable(),
        Column::new("templateUsed", "Template Used", |d: &DocumentListItem| {
            Value::from(&d.template_used)
        }),
        Column::new("status", "Status", |d: &DocumentListItem| Value::from(d.status.as_str()))
            .cell(|d| badge(d.status.as_str(), document_color(d.status))),
        Column::new("createdBy", "Created By", |d: &DocumentListItem| Value::from(&d.created_by)),
        Column::new("lastModified", "Last Modified", |d: &DocumentListItem| {
            Value::from(d.last_modified)
        })
        .sortable()
        .cell(|d| format_date_time(&d.last_modified)),
        actions(&["View Document", "Edit", "Submit for Approval"]),
    ])?
    .with_filter("name", "Search by document name...")
}

fn approvals() -> Result<Table<ApprovalListItem>, TableError> {
    Table::new(vec![
        sr_no(|a: &ApprovalListItem| a.sr_no),
        Column::new("documentName", "Document Name", |a: &ApprovalListItem| {
            Value::from(&a.document_name)
        })
        .sortable(),
        Column::new("submittedBy", "Submitted By", |a: &ApprovalListItem| {
            Value::from(&a.submitted_by)
        }),
        Column::new("submissionDate", "Submission Date", |a: &ApprovalListItem| {
            Value::from(a.submission_date)
        })
        .sortable_tristate()
        .cell(|a| format_date(&a.submission_date)),
        Column::new("status", "Status", |a: &ApprovalListItem| Value::from(a.status.as_str()))
            .cell(|a| badge(a.status.as_str(), approval_color(a.status))),
        Column::new("approver", "Approver", |a: &ApprovalListItem| Value::from(a.approver.clone()))
            .cell(|a| html_escape(a.approver.as_deref().unwrap_or("N/A"))),
        actions(&["View Details", "Approve", "Reject"]),
    ])?
    .with_filter("documentName", "Search by document name...")
}

fn sr_no<T: 'static, F>(read: F) -> Column<T>
where
    F: Fn(&T) -> u32 + Send + Sync + 'static,
{
    Column::new("srNo", "Sr.No.", move |r: &T| Value::from(read(r)))
}

fn active_column<T: 'static, F>(read: F, label: &'static str) -> Column<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let read = std::sync::Arc::new(read);
    let cell_read = std::sync::Arc::clone(&read);
    Column::new("isActive", label, move |r: &T| Value::from(read(r))).cell(move |r| {
        if cell_read(r) {
            badge("Active", "green")
        } else {
            badge("Inactive", "gray")
        }
    })
}

fn actions<T: 'static>(items: &'static [&'static str]) -> Column<T> {
    Column::new("actions", "Actions", |_: &T| Value::Empty)
        .fixed()
        .header(|_| r#"<span class="sr-only">Actions</span>"#.to_string())
        .cell(move |_| {
            let entries: String = items
                .iter()
                .map(|label| {
                    let danger = if label.starts_with("Delete") || *label == "Reject" {
                        "text-red-600 dark:text-red-400"
                    } else {
                        "text-gray-700 dark:text-gray-200"
                    };
                    format!(
                        r#"<button type="button" class="block w-full text-left px-4 py-2 text-sm {danger} hover:bg-gray-50 dark:hover:bg-gray-700">{label}</button>"#
                    )
                })
                .collect();
            format!(
                r##"<div class="relative text-right" x-data="{{ open: false }}">
                    <button type="button" @click="open = !open" class="h-8 w-8 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700" aria-label="Open menu">
                        <i class="fas fa-ellipsis"></i>
                    </button>
                    <div x-show="open" @click.outside="open = false" x-cloak
                         class="absolute right-0 mt-1 w-48 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg shadow-lg z-20 py-1">
                        {entries}
                    </div>
                </div>"##
            )
        })
}

fn description_cell(text: &str) -> String {
    format!(
        r#"<div class="max-w-md truncate" title="{text}">{text}</div>"#,
        text = html_escape(text)
    )
}

fn sort_icon(sorted: Option<SortDirection>) -> &'static str {
    match sorted {
        Some(SortDirection::Asc) => "fas fa-sort-up",
        Some(SortDirection::Desc) => "fas fa-sort-down",
        None => "fas fa-sort opacity-30",
    }
}

fn right_aligned_header(ctx: &HeaderContext<'_>) -> String {
    let label = html_escape(ctx.label);
    match ctx.toggle_href {
        Some(href) => format!(
            r#"<div class="text-right"><a href="{}" class="inline-flex items-center gap-1 hover:text-gray-700 dark:hover:text-gray-200">{label}<i class="{} ml-1"></i></a></div>"#,
            html_escape(href),
            sort_icon(ctx.sorted),
        ),
        None => format!(r#"<div class="text-right">{label}</div>"#),
    }
}

fn department_color(status: DepartmentStatus) -> &'static str {
    match status {
        DepartmentStatus::Active => "green",
        DepartmentStatus::Inactive => "gray",
        DepartmentStatus::Archived => "red",
    }
}

fn template_color(status: TemplateStatus) -> &'static str {
    match status {
        TemplateStatus::Published => "green",
        TemplateStatus::Draft => "gray",
        TemplateStatus::Archived => "red",
    }
}

fn document_color(status: DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Approved => "green",
        DocumentStatus::PendingApproval => "yellow",
        DocumentStatus::Draft => "gray",
        DocumentStatus::Rejected => "red",
    }
}

fn approval_color(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Approved => "green",
        ApprovalStatus::Pending => "yellow",
        ApprovalStatus::Rejected => "red",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fileflow_core::MockData;
    use fileflow_table::SortCycle;

    #[test]
    fn all_tables_build() {
        let tables = Tables::build(10).unwrap();
        assert_eq!(tables.users.filter_column(), Some("firstName"));
        assert_eq!(tables.approvals.filter_column(), Some("documentName"));
        assert_eq!(tables.files.page_size(), 10);
    }

    #[test]
    fn file_cells_format_size_and_favourite() {
        let data = MockData::generate(1);
        let tables = Tables::build(10).unwrap();
        let proposal = &data.files[0];
        let size = tables.files.column("size").unwrap().render_cell(proposal).unwrap();
        assert!(size.contains("1.14 MB"));
        let name = tables.files.column("name").unwrap().render_cell(proposal).unwrap();
        assert!(name.contains("fa-star"));
    }

    #[test]
    fn fixed_columns_stay_out_of_visibility_menu() {
        let tables = Tables::build(10).unwrap();
        assert!(!tables.files.column("name").unwrap().is_hideable());
        assert!(!tables.users.column("actions").unwrap().is_hideable());
        assert!(tables.users.column("email").unwrap().is_hideable());
    }

    #[test]
    fn submission_date_can_return_to_unsorted() {
        let tables = Tables::build(10).unwrap();
        let column = tables.approvals.column("submissionDate").unwrap();
        assert!(column.is_sortable());
        assert_eq!(column.sort_cycle(), SortCycle::Tristate);
        let name = tables.approvals.column("documentName").unwrap();
        assert_eq!(name.sort_cycle(), SortCycle::Toggle);
    }
}
