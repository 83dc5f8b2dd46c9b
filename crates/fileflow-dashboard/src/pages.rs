//! Page templates for dashboard views.

use fileflow_core::format::format_bytes;
use fileflow_core::{DocumentStatus, QuickStats, TemplateStatus};
use fileflow_table::render::html_escape;

use crate::api_types::{DocumentForm, FormErrors, MasterTemplateForm};
use crate::templates::{card, empty_state, input, layout, select, stats_card, textarea};

/// Static description of a resource page.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    /// Route of the page; the table fragment lives at `{path}/table`.
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Query parameter carrying the categorical filter.
    pub filter_param: &'static str,
    /// Header button label and Font Awesome icon name.
    pub action: Option<(&'static str, &'static str)>,
    /// Render a skeleton first and fetch the table after the mock delay.
    pub deferred: bool,
    /// Show the modified-on date filter.
    pub date_filter: bool,
}

impl PageMeta {
    pub fn fragment_path(&self) -> String {
        format!("{}/table", self.path)
    }
}

/// The add dialog of a page, closed unless a submission failed.
#[derive(Debug, Clone)]
pub struct Dialog {
    pub open: bool,
    pub title: &'static str,
    pub description: &'static str,
    pub submit_label: &'static str,
    pub fields: String,
}

// =============================================================================
// Home Page
// =============================================================================

pub fn home_page(stats: &QuickStats) -> String {
    let stats_html = format!(
        r##"<div class="grid grid-cols-2 md:grid-cols-4 gap-6">
            {files}
            {users}
            {approvals}
            {storage}
        </div>"##,
        files = stats_card("Total Files", &stats.total_files.to_string(), "file", "blue"),
        users = stats_card("Active Users", &stats.active_users.to_string(), "users", "green"),
        approvals = stats_card(
            "Pending Approvals",
            &stats.pending_approvals.to_string(),
            "clock",
            "yellow"
        ),
        storage = stats_card(
            "Storage Used",
            &format_bytes(stats.storage_bytes),
            "hard-drive",
            "purple"
        ),
    );

    let modules: String = [
        (
            "folder-open",
            "File Management",
            "Organize, upload, and share your documents and media.",
            "/file-manager",
        ),
        (
            "users",
            "User & Role Management",
            "Administer users, assign roles, and manage department structures.",
            "/user-management/users",
        ),
        (
            "chart-bar",
            "Template Management",
            "Create and manage master templates for documents and approvals.",
            "/template-management/master-templates",
        ),
    ]
    .iter()
    .map(|(icon, title, description, href)| {
        format!(
            r##"<div class="bg-gray-50 dark:bg-gray-700/50 rounded-lg p-5 hover:shadow-lg transition-shadow">
                <div class="flex items-center gap-3 mb-3">
                    <i class="fas fa-{icon} text-2xl text-primary-500"></i>
                    <h4 class="text-lg font-medium text-gray-900 dark:text-white">{title}</h4>
                </div>
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">{description}</p>
                <a href="{href}" class="text-sm font-semibold text-primary-600 dark:text-primary-400 hover:underline">Go to {title} &rarr;</a>
            </div>"##
        )
    })
    .collect();

    let content = format!(
        r##"<div class="space-y-6">
            {quick_stats}
            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6">
                <h1 class="text-3xl font-bold text-primary-600 dark:text-primary-400">Welcome to FileFlow Dashboard!</h1>
                <p class="mt-2 text-lg text-gray-600 dark:text-gray-400">Your central hub for managing files, users, and system settings.</p>
                <p class="mt-4 mb-6 text-gray-500 dark:text-gray-400">Navigate through different modules using the sidebar. Here's a quick overview of what you can do:</p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {modules}
                </div>
            </div>
        </div>"##,
        quick_stats = card("Quick Stats", &stats_html),
    );

    layout("Dashboard", "/", &content)
}

// =============================================================================
// Resource Pages
// =============================================================================

/// Full resource page: header card, optional filters and dialog, then the table.
pub fn resource_page(
    meta: &PageMeta,
    table_html: &str,
    dialog: Option<&Dialog>,
    filters: Option<&str>,
) -> String {
    let open = dialog.is_some_and(|d| d.open);

    let action = meta
        .action
        .map(|(label, icon)| {
            let click = if dialog.is_some() { r#" @click="addOpen = true""# } else { "" };
            format!(
                r##"<button type="button"{click} class="inline-flex items-center gap-2 bg-primary-600 hover:bg-primary-700 text-white px-3 py-2 rounded-lg text-sm font-medium transition-colors">
                    <i class="fas fa-{icon}"></i> {label}
                </button>"##
            )
        })
        .unwrap_or_default();

    let content = format!(
        r##"<div class="flex flex-col gap-6" x-data="{{ addOpen: {open} }}">
            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6">
                <div class="flex justify-between items-center gap-4">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{title}</h1>
                        <p class="mt-1 text-gray-500 dark:text-gray-400">{description}</p>
                    </div>
                    {action}
                </div>
                {filters}
            </div>
            {dialog}
            {table_html}
        </div>"##,
        title = html_escape(meta.title),
        description = html_escape(meta.description),
        filters = filters.unwrap_or_default(),
        dialog = dialog.map(dialog_html).unwrap_or_default(),
    );

    layout(meta.title, meta.path, &content)
}

fn dialog_html(dialog: &Dialog) -> String {
    format!(
        r##"<div x-show="addOpen" x-cloak class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4" role="dialog" aria-modal="true">
            <div @click.outside="addOpen = false" class="w-full max-w-md bg-white dark:bg-gray-800 rounded-xl shadow-xl p-6">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
                <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{description}</p>
                <form method="post" class="space-y-4 py-4">
                    {fields}
                    <div class="flex justify-end gap-2 pt-2">
                        <button type="button" @click="addOpen = false" class="px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700">Cancel</button>
                        <button type="submit" class="px-4 py-2 bg-primary-600 hover:bg-primary-700 text-white rounded-lg text-sm font-medium">{submit}</button>
                    </div>
                </form>
            </div>
        </div>"##,
        title = dialog.title,
        description = dialog.description,
        fields = dialog.fields,
        submit = dialog.submit_label,
    )
}

pub fn master_template_dialog(form: &MasterTemplateForm, errors: Option<&FormErrors>) -> Dialog {
    let error = |field: &str| errors.and_then(|e| e.get(field));
    let status = status_options(
        TemplateStatus::ALL.iter().map(|s| s.as_str()),
        &form.status,
        TemplateStatus::Draft.as_str(),
    );
    Dialog {
        open: errors.is_some(),
        title: "Add New Master Template",
        description: "Create a new master template. Click save when you're done.",
        submit_label: "Save Template",
        fields: [
            input("name", "Template Name", &form.name, "Contract Template", error("name")),
            textarea(
                "description",
                "Description (Optional)",
                &form.description,
                "Standard contract for client engagements.",
            ),
            input("version", "Version", &form.version, "1.0", error("version")),
            select("status", "Status", &status),
        ]
        .concat(),
    }
}

pub fn document_dialog(form: &DocumentForm, errors: Option<&FormErrors>) -> Dialog {
    let error = |field: &str| errors.and_then(|e| e.get(field));
    // New documents start out as drafts or go straight to approval.
    let status = status_options(
        [DocumentStatus::Draft, DocumentStatus::PendingApproval].iter().map(|s| s.as_str()),
        &form.status,
        DocumentStatus::Draft.as_str(),
    );
    Dialog {
        open: errors.is_some(),
        title: "Create New Document",
        description: "Fill in the details to create a new document. Click save when you're done.",
        submit_label: "Save Document",
        fields: [
            input("name", "Document Name", &form.name, "Client Agreement XYZ", error("name")),
            input(
                "templateUsed",
                "Template Used",
                &form.template_used,
                "Master Contract Template v1.2",
                error("templateUsed"),
            ),
            select("status", "Initial Status", &status),
        ]
        .concat(),
    }
}

fn status_options<'a>(
    labels: impl Iterator<Item = &'a str>,
    current: &str,
    default: &str,
) -> Vec<(String, String, bool)> {
    let current = if current.trim().is_empty() { default } else { current };
    labels
        .map(|label| (label.to_string(), label.to_string(), label.eq_ignore_ascii_case(current)))
        .collect()
}

/// Modified-on date picker with a link clearing both file filters.
///
/// `hidden` are the parameters the date form must carry along.
pub fn date_filter(
    path: &str,
    hidden: &[(String, String)],
    date: Option<&str>,
    clear_href: &str,
) -> String {
    let inputs: String = hidden
        .iter()
        .map(|(k, v)| {
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                html_escape(k),
                html_escape(v)
            )
        })
        .collect();

    format!(
        r##"<div class="mt-6 flex flex-col sm:flex-row sm:items-end gap-4">
            <form method="get" action="{path}" class="flex flex-col gap-1">
                {inputs}
                <label for="date-filter" class="text-sm font-medium text-gray-500 dark:text-gray-400">Filter by date</label>
                <input type="date" id="date-filter" name="date" value="{date}" onchange="this.form.submit()"
                       class="h-10 px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white">
            </form>
            <a href="{clear_href}" class="h-10 inline-flex items-center gap-2 px-3 border border-gray-300 dark:border-gray-600 rounded-lg text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700 sm:ml-auto">
                <i class="fas fa-filter"></i>
                <span class="hidden sm:inline">Clear Type/Date Filters</span><span class="sm:hidden">Clear Filters</span>
            </a>
        </div>"##,
        path = html_escape(path),
        date = html_escape(date.unwrap_or("")),
        clear_href = html_escape(clear_href),
    )
}

pub fn not_found_page(path: &str) -> String {
    let content = empty_state(
        "compass",
        "Page not found",
        &format!("Nothing lives at {path}."),
        Some(("Back to dashboard", "/")),
    );
    layout("Not Found", path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_shows_storage_in_bytes_format() {
        let stats = QuickStats {
            total_files: 11,
            active_users: 17,
            pending_approvals: 4,
            storage_bytes: 1_048_576,
        };
        let html = home_page(&stats);
        assert!(html.contains(r#"data-stat="Storage Used""#));
        assert!(html.contains("1 MB"));
        assert!(html.contains("Go to Template Management"));
    }

    #[test]
    fn failed_dialog_is_open_with_messages() {
        let form = MasterTemplateForm::default();
        let errors = form.validate().unwrap_err();
        let dialog = master_template_dialog(&form, Some(&errors));
        assert!(dialog.open);
        assert!(dialog.fields.contains("Template name is required."));
        // blank status falls back to Draft in the select
        assert!(dialog.fields.contains(r#"<option value="Draft" selected>"#));
    }

    #[test]
    fn fresh_dialog_is_closed() {
        let dialog = document_dialog(&DocumentForm::initial(), None);
        assert!(!dialog.open);
        assert!(!dialog.fields.contains("data-field-error"));
        assert!(dialog.fields.contains("Pending Approval"));
    }
}
