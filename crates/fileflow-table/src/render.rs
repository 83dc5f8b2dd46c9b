//! HTML rendering for a computed [`TableView`].
//!
//! Output uses the dashboard's Tailwind classes. Every control is a plain
//! link or GET form that carries the next table state in its query string.

use crate::column::{HeaderContext, humanize_id};
use crate::filter::SelectFilter;
use crate::state::{TableState, encode_pairs};
use crate::view::{Table, TableView};
use crate::Record;

/// Element id of the rendered table container.
pub const CONTAINER_ID: &str = "data-table";

/// Fetch the real table after a delay while the skeleton is showing.
#[derive(Debug, Clone)]
pub struct DeferredLoad {
    /// Fragment URL, including the current query string.
    pub url: String,
    pub delay_ms: u64,
}

/// Per-request rendering options supplied by the page.
#[derive(Debug, Clone)]
pub struct TableProps<'a> {
    /// Path every control links back to.
    pub path: &'a str,
    /// Caller-owned query parameters to carry through every link.
    pub params: Vec<(String, String)>,
    pub select_filter: Option<&'a SelectFilter>,
    pub loading: bool,
    pub deferred: Option<DeferredLoad>,
}

impl<'a> TableProps<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            params: Vec::new(),
            select_filter: None,
            loading: false,
            deferred: None,
        }
    }

    /// Carry a caller-owned parameter. Empty values are skipped.
    pub fn param(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.params.push((key.into(), value.to_string()));
        }
        self
    }

    pub fn select_filter(mut self, filter: &'a SelectFilter) -> Self {
        if let Some(value) = &filter.value {
            self.params.retain(|(k, _)| k != &filter.param);
            self.params.push((filter.param.clone(), value.clone()));
        }
        self.select_filter = Some(filter);
        self
    }

    /// Render skeleton rows, optionally swapping in the real table later.
    pub fn loading(mut self, deferred: Option<DeferredLoad>) -> Self {
        self.loading = true;
        self.deferred = deferred;
        self
    }

    /// Link to `path` with the caller's params and `state`.
    pub fn href(&self, state: &TableState) -> String {
        self.href_without(state, None)
    }

    fn href_without(&self, state: &TableState, skip_param: Option<&str>) -> String {
        let state_pairs = state.to_pairs();
        let query = encode_pairs(
            self.params
                .iter()
                .filter(|(k, _)| Some(k.as_str()) != skip_param)
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .chain(state_pairs.iter().map(|(k, v)| (*k, v.as_str()))),
        );
        if query.is_empty() {
            self.path.to_string()
        } else {
            format!("{}?{}", self.path, query)
        }
    }
}

/// Render the whole table block: toolbar, table and footer.
pub fn render_table<T: Record>(
    table: &Table<T>,
    view: &TableView<'_, T>,
    props: &TableProps<'_>,
) -> String {
    let deferred_attrs = match (&props.deferred, props.loading) {
        (Some(d), true) => format!(
            r#" hx-get="{url}" hx-trigger="load delay:{delay}ms" hx-swap="outerHTML""#,
            url = html_escape(&d.url),
            delay = d.delay_ms
        ),
        _ => String::new(),
    };

    format!(
        r##"<div id="{CONTAINER_ID}" class="w-full space-y-4"{deferred_attrs}>
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div class="flex flex-col sm:flex-row sm:items-center gap-2 flex-wrap">
                    {text_filter}
                    {select_filter}
                </div>
                {column_menu}
            </div>
            <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-800">
                        <tr>{header}</tr>
                    </thead>
                    <tbody class="bg-white dark:bg-gray-900 divide-y divide-gray-200 dark:divide-gray-700">
                        {body}
                    </tbody>
                </table>
            </div>
            {footer}
        </div>"##,
        text_filter = text_filter(table, view, props),
        select_filter = props
            .select_filter
            .map(|f| select_filter(f, view, props))
            .unwrap_or_default(),
        column_menu = column_menu(table, view, props),
        header = header_row(table, view, props),
        body = body_rows(table, view, props),
        footer = footer(view, props),
    )
}

fn text_filter<T>(table: &Table<T>, view: &TableView<'_, T>, props: &TableProps<'_>) -> String {
    let Some(placeholder) = table.filter_placeholder() else {
        return String::new();
    };
    let mut carried = view.state.clone();
    carried.filter = None;
    carried.page = 0;
    let params = props.params.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    let inputs = hidden_inputs(params, &carried);

    format!(
        r##"<form method="get" action="{path}" class="flex items-center gap-2">
            {inputs}
            <input type="search" name="q" value="{value}" placeholder="{placeholder}"
                   class="h-10 max-w-xs px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500">
        </form>"##,
        path = html_escape(props.path),
        value = html_escape(view.state.filter.as_deref().unwrap_or("")),
        placeholder = html_escape(placeholder),
    )
}

fn select_filter<T>(
    filter: &SelectFilter,
    view: &TableView<'_, T>,
    props: &TableProps<'_>,
) -> String {
    let mut carried = view.state.clone();
    carried.page = 0;
    let others = props
        .params
        .iter()
        .filter(|(k, _)| k != &filter.param)
        .map(|(k, v)| (k.as_str(), v.as_str()));
    let inputs = hidden_inputs(others, &carried);

    let selected = filter.selected_value();
    let has_match = filter.options.iter().any(|o| o.value == selected);
    let placeholder_option = if has_match {
        String::new()
    } else {
        format!(
            r#"<option value="" disabled selected>{}</option>"#,
            html_escape(&filter.placeholder)
        )
    };
    let options: String = filter
        .options
        .iter()
        .map(|o| {
            let sel = if o.value == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{sel}>{}</option>"#,
                html_escape(&o.value),
                html_escape(&o.label)
            )
        })
        .collect();

    let id = format!("filter-{}", html_escape(&filter.param));
    let label = filter
        .label
        .as_ref()
        .map(|l| {
            format!(
                r#"<label for="{id}" class="text-sm font-medium text-gray-500 dark:text-gray-400 whitespace-nowrap">{}</label>"#,
                html_escape(l)
            )
        })
        .unwrap_or_default();

    let clear = filter
        .clear_label
        .as_ref()
        .map(|l| {
            format!(
                r##"<a href="{href}" aria-label="{label}" class="h-10 inline-flex items-center px-3 border border-gray-300 dark:border-gray-600 rounded-lg text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700">
                    <i class="fas fa-rotate-left"></i><span class="ml-2 hidden sm:inline">{label}</span>
                </a>"##,
                href = html_escape(&props.href_without(&carried, Some(&filter.param))),
                label = html_escape(l),
            )
        })
        .unwrap_or_default();

    format!(
        r##"<form method="get" action="{path}" class="flex items-center gap-2">
            {inputs}
            {label}
            <select id="{id}" name="{param}" title="{placeholder}" onchange="this.form.submit()"
                    class="h-10 min-w-[180px] px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white">
                {placeholder_option}{options}
            </select>
            {clear}
        </form>"##,
        path = html_escape(props.path),
        param = html_escape(&filter.param),
        placeholder = html_escape(&filter.placeholder),
    )
}

fn column_menu<T>(table: &Table<T>, view: &TableView<'_, T>, props: &TableProps<'_>) -> String {
    let items: String = table
        .columns()
        .iter()
        .filter(|c| c.is_hideable())
        .map(|c| {
            let mut next = view.state.clone();
            next.toggle_visibility(c.id());
            let icon = if view.state.is_visible(c.id()) {
                "fas fa-square-check text-primary-600"
            } else {
                "far fa-square text-gray-400"
            };
            format!(
                r##"<a href="{href}" class="flex items-center gap-2 px-4 py-2 text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700">
                    <i class="{icon}"></i><span>{label}</span>
                </a>"##,
                href = html_escape(&props.href(&next)),
                label = html_escape(&humanize_id(c.id())),
            )
        })
        .collect();

    format!(
        r##"<div class="relative" x-data="{{ open: false }}">
            <button type="button" @click="open = !open" class="h-10 inline-flex items-center px-4 border border-gray-300 dark:border-gray-600 rounded-lg text-sm font-medium text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700">
                Columns <i class="fas fa-chevron-down ml-2"></i>
            </button>
            <div x-show="open" @click.outside="open = false" x-cloak
                 class="absolute right-0 mt-2 w-48 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg shadow-lg z-20 py-1">
                {items}
            </div>
        </div>"##
    )
}

const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider whitespace-nowrap";

fn header_row<T: Record>(
    table: &Table<T>,
    view: &TableView<'_, T>,
    props: &TableProps<'_>,
) -> String {
    let mut cells = String::new();

    let mut next = view.state.clone();
    next.toggle_all(&view.page_ids());
    let icon = if view.all_page_selected() {
        "fas fa-square-check text-primary-600"
    } else if view.some_page_selected() {
        "fas fa-square-minus text-primary-600"
    } else {
        "far fa-square text-gray-400"
    };
    let control = if props.loading {
        format!(r#"<i class="{icon}"></i>"#)
    } else {
        format!(
            r#"<a href="{}" aria-label="Select all"><i class="{icon}"></i></a>"#,
            html_escape(&props.href(&next))
        )
    };
    cells.push_str(&format!(r#"<th class="{TH_CLASS} w-10">{control}</th>"#));

    for column in table.visible_columns(&view.state) {
        let sorted = view.state.sort_direction(column.id());
        let toggle_href = column.is_sortable().then(|| {
            let mut next = view.state.clone();
            next.toggle_sort(column.id(), column.sort_cycle());
            props.href(&next)
        });
        let ctx = HeaderContext {
            column_id: column.id(),
            label: column.label(),
            sorted,
            toggle_href: toggle_href.as_deref(),
        };

        let content = column.render_header(&ctx).unwrap_or_else(|| match &toggle_href {
            Some(href) => {
                let icon = match sorted {
                    Some(crate::SortDirection::Asc) => "fas fa-sort-up",
                    Some(crate::SortDirection::Desc) => "fas fa-sort-down",
                    None => "fas fa-sort opacity-30",
                };
                format!(
                    r#"<a href="{}" class="inline-flex items-center gap-1 hover:text-gray-700 dark:hover:text-gray-200">{}<i class="{icon} ml-1"></i></a>"#,
                    html_escape(href),
                    html_escape(column.label())
                )
            }
            None => html_escape(column.label()),
        });

        let aria = match sorted {
            Some(crate::SortDirection::Asc) => r#" aria-sort="ascending""#,
            Some(crate::SortDirection::Desc) => r#" aria-sort="descending""#,
            None => "",
        };
        cells.push_str(&format!(
            r#"<th class="{TH_CLASS}" data-column="{id}"{aria}>{content}</th>"#,
            id = html_escape(column.id())
        ));
    }

    cells
}

fn body_rows<T: Record>(
    table: &Table<T>,
    view: &TableView<'_, T>,
    props: &TableProps<'_>,
) -> String {
    let visible = table.visible_columns(&view.state);
    let span = visible.len() + 1;

    if props.loading {
        let cell = r#"<td class="px-6 py-3"><div class="h-6 w-full rounded bg-gray-200 dark:bg-gray-700 animate-pulse"></div></td>"#;
        let row = format!("<tr data-skeleton>{}</tr>", cell.repeat(span));
        return row.repeat(view.page_size);
    }

    if view.rows.is_empty() {
        return format!(
            r#"<tr><td colspan="{span}" class="h-24 text-center text-sm text-gray-500 dark:text-gray-400">No results.</td></tr>"#
        );
    }

    view.rows
        .iter()
        .map(|&record| {
            let id = record.record_id();
            let selected = view.state.is_selected(id);
            let mut cells = String::new();

            let mut next = view.state.clone();
            next.toggle_selected(id);
            let icon = if selected {
                "fas fa-square-check text-primary-600"
            } else {
                "far fa-square text-gray-400"
            };
            cells.push_str(&format!(
                r#"<td class="px-6 py-3 w-10"><a href="{}" aria-label="Select row"><i class="{icon}"></i></a></td>"#,
                html_escape(&props.href(&next))
            ));

            for column in &visible {
                let content = column
                    .render_cell(record)
                    .unwrap_or_else(|| html_escape(&column.value(record).to_string()));
                cells.push_str(&format!(
                    r#"<td class="px-6 py-3 text-sm text-gray-900 dark:text-gray-100">{content}</td>"#
                ));
            }

            let state_attr = if selected { r#" data-state="selected""# } else { "" };
            let bg = if selected { " bg-primary-50 dark:bg-primary-900/30" } else { "" };
            format!(
                r#"<tr data-row-id="{}"{state_attr} class="hover:bg-gray-50 dark:hover:bg-gray-700/50{bg}">{cells}</tr>"#,
                html_escape(id)
            )
        })
        .collect()
}

fn footer<T: Record>(view: &TableView<'_, T>, props: &TableProps<'_>) -> String {
    let page_link = |enabled: bool, state: TableState, label: &str| {
        if enabled && !props.loading {
            format!(
                r#"<a href="{}" class="px-3 py-1.5 text-sm font-medium border border-gray-300 dark:border-gray-600 rounded-lg text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700">{label}</a>"#,
                html_escape(&props.href(&state))
            )
        } else {
            format!(
                r#"<span aria-disabled="true" class="px-3 py-1.5 text-sm font-medium border border-gray-300 dark:border-gray-600 rounded-lg text-gray-400 dark:text-gray-600 opacity-50 cursor-not-allowed">{label}</span>"#
            )
        }
    };

    let mut prev = view.state.clone();
    prev.previous_page();
    let mut next = view.state.clone();
    next.next_page();

    format!(
        r##"<div class="flex items-center justify-end gap-2 py-4">
            <div class="flex-1 text-sm text-gray-500 dark:text-gray-400" data-selection-summary>
                {selected} of {filtered} row(s) selected.
            </div>
            <div class="flex items-center gap-2">
                {prev}
                {next}
            </div>
        </div>"##,
        selected = view.selected_count,
        filtered = view.filtered_count,
        prev = page_link(view.can_previous(), prev, "Previous"),
        next = page_link(view.can_next(), next, "Next"),
    )
}

fn hidden_inputs<'a, I>(params: I, state: &TableState) -> String
where
    I: Iterator<Item = (&'a str, &'a str)>,
{
    let mut out: String = params.map(|(k, v)| hidden_input(k, v)).collect();
    for (k, v) in state.to_pairs() {
        out.push_str(&hidden_input(k, &v));
    }
    out
}

fn hidden_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        html_escape(name),
        html_escape(value)
    )
}

/// Escape text for HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Column, SortCycle};
    use crate::value::Value;

    #[derive(Debug, Clone)]
    struct Row {
        id: String,
        name: String,
    }

    impl Record for Row {
        fn record_id(&self) -> &str {
            &self.id
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                id: format!("r{i}"),
                name: format!("Row <{i}>"),
            })
            .collect()
    }

    fn table() -> Table<Row> {
        Table::new(vec![
            Column::new("name", "Name", |r: &Row| Value::from(&r.name)).sortable(),
            Column::new("id", "Identifier", |r: &Row| Value::from(&r.id)).sortable_tristate(),
        ])
        .and_then(|t| t.with_filter("name", "Search by name..."))
        .expect("valid table")
    }

    #[test]
    fn cell_values_are_escaped() {
        let data = rows(1);
        let state = TableState::new();
        let view = TableView::compute(&table(), &data, &state);
        let html = render_table(&table(), &view, &TableProps::new("/rows"));
        assert!(html.contains("Row &lt;1&gt;"));
        assert!(!html.contains("Row <1>"));
    }

    #[test]
    fn links_carry_caller_params() {
        let data = rows(15);
        let view = TableView::compute(&table(), &data, &TableState::new());
        let props = TableProps::new("/rows").param("status", Some("inactive"));
        let html = render_table(&table(), &view, &props);
        assert!(html.contains("/rows?status=inactive&amp;page=2"));
    }

    #[test]
    fn search_form_keeps_params_and_sort() {
        let data = rows(3);
        let mut state = TableState::new();
        state.toggle_sort("name", SortCycle::Toggle);
        let view = TableView::compute(&table(), &data, &state);
        let props = TableProps::new("/rows").param("status", Some("inactive"));
        let html = render_table(&table(), &view, &props);
        assert!(html.contains(r#"<input type="hidden" name="status" value="inactive">"#));
        assert!(html.contains(r#"<input type="hidden" name="sort" value="name">"#));
        assert!(html.contains(r#"<input type="hidden" name="dir" value="asc">"#));
    }

    #[test]
    fn hidden_column_is_not_rendered() {
        let data = rows(3);
        let mut state = TableState::new();
        state.toggle_visibility("id");
        let view = TableView::compute(&table(), &data, &state);
        let html = render_table(&table(), &view, &TableProps::new("/rows"));
        assert!(!html.contains(r#"data-column="id""#));
        assert!(html.contains(r#"data-column="name""#));
        // still listed in the column menu
        assert!(html.contains("<span>Id</span>"));
    }

    #[test]
    fn deferred_load_attributes_only_while_loading() {
        let data = rows(3);
        let view = TableView::compute(&table(), &data, &TableState::new());
        let deferred = DeferredLoad {
            url: "/rows/table".into(),
            delay_ms: 1500,
        };
        let html = render_table(
            &table(),
            &view,
            &TableProps::new("/rows").loading(Some(deferred)),
        );
        assert!(html.contains(r#"hx-trigger="load delay:1500ms""#));
        assert_eq!(html.matches("data-skeleton").count(), 10);
        assert_eq!(html.matches("data-row-id=").count(), 0);
    }

    #[test]
    fn tristate_header_returns_to_unsorted() {
        let data = rows(3);
        let link = |state: &TableState| {
            let view = TableView::compute(&table(), &data, state);
            let html = render_table(&table(), &view, &TableProps::new("/rows"));
            let start = html.find(r#"data-column="id""#).expect("id header");
            let href = &html[start..];
            let href = &href[href.find("href=\"").expect("sort link") + 6..];
            href[..href.find('"').expect("closing quote")].to_string()
        };

        let mut state = TableState::new();
        assert_eq!(link(&state), "/rows?sort=id&amp;dir=asc");
        state.toggle_sort("id", SortCycle::Tristate);
        assert_eq!(link(&state), "/rows?sort=id&amp;dir=desc");
        state.toggle_sort("id", SortCycle::Tristate);
        // third click drops the sort entirely
        assert_eq!(link(&state), "/rows");
        state.toggle_sort("id", SortCycle::Tristate);
        assert!(state.sort.is_empty());
    }
}
