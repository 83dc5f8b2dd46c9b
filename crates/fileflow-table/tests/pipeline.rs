//! End-to-end checks of the filter → sort → paginate → render pipeline.

use fileflow_table::{
    Column, Record, SelectFilter, SortCycle, Table, TableProps, TableState, TableView, Value,
    render_table,
};

#[derive(Debug, Clone)]
struct Doc {
    id: String,
    name: String,
    group: i64,
    active: bool,
}

impl Record for Doc {
    fn record_id(&self) -> &str {
        &self.id
    }
}

fn doc(id: usize, name: &str, group: i64, active: bool) -> Doc {
    Doc {
        id: format!("doc-{id}"),
        name: name.to_string(),
        group,
        active,
    }
}

fn docs(n: usize) -> Vec<Doc> {
    (1..=n)
        .map(|i| doc(i, &format!("Doc {i:02}"), (i % 4) as i64, i % 3 != 0))
        .collect()
}

fn table() -> Table<Doc> {
    Table::new(vec![
        Column::new("name", "Name", |d: &Doc| Value::from(&d.name)).sortable(),
        Column::new("group", "Group", |d: &Doc| Value::from(d.group)).sortable(),
        Column::new("active", "Active", |d: &Doc| Value::from(d.active)),
    ])
    .and_then(|t| t.with_filter("name", "Search by name..."))
    .expect("valid table")
}

fn body_rows(html: &str) -> usize {
    html.matches("data-row-id=").count()
}

#[test]
fn rendered_rows_follow_page_window() {
    let records = docs(23);
    let table = table();
    for page in 0..4 {
        let state = TableState {
            page,
            ..Default::default()
        };
        let view = TableView::compute(&table, &records, &state);
        let html = render_table(&table, &view, &TableProps::new("/docs"));
        let expected = if page < 3 { 10.min(23 - page * 10) } else { 3 };
        assert_eq!(body_rows(&html), expected, "page {page}");
    }
}

#[test]
fn descending_reverses_ascending_and_keeps_ties_stable() {
    let records = docs(12);
    let table = table();

    let mut state = TableState::new();
    state.toggle_sort("name", SortCycle::Toggle);
    let asc: Vec<_> = table
        .filter_and_sort(&records, &state)
        .iter()
        .map(|d| d.id.clone())
        .collect();
    state.toggle_sort("name", SortCycle::Toggle);
    let desc: Vec<_> = table
        .filter_and_sort(&records, &state)
        .iter()
        .map(|d| d.id.clone())
        .collect();
    let mut reversed = asc.clone();
    reversed.reverse();
    assert_eq!(desc, reversed);

    // group has duplicates: ties keep input order in both directions
    let mut state = TableState::new();
    state.toggle_sort("group", SortCycle::Toggle);
    let asc = table.filter_and_sort(&records, &state);
    let zeros: Vec<_> = asc.iter().filter(|d| d.group == 0).map(|d| d.id.as_str()).collect();
    assert_eq!(zeros, vec!["doc-4", "doc-8", "doc-12"]);

    state.toggle_sort("group", SortCycle::Toggle);
    let desc = table.filter_and_sort(&records, &state);
    let zeros: Vec<_> = desc.iter().filter(|d| d.group == 0).map(|d| d.id.as_str()).collect();
    assert_eq!(zeros, vec!["doc-4", "doc-8", "doc-12"]);
}

#[test]
fn free_text_filter_is_case_insensitive_substring() {
    let records = vec![
        doc(1, "Quarterly Sales Report.xlsx", 0, true),
        doc(2, "Product Demo.mp4", 0, true),
    ];
    let table = table();

    for needle in ["sales", "SALES"] {
        let mut state = TableState::new();
        state.set_filter(needle);
        let view = TableView::compute(&table, &records, &state);
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.rows[0].name, "Quarterly Sales Report.xlsx");
    }

    let mut state = TableState::new();
    state.set_filter("zzz");
    let view = TableView::compute(&table, &records, &state);
    assert_eq!(view.filtered_count, 0);
    let html = render_table(&table, &view, &TableProps::new("/docs"));
    assert!(html.contains("No results."));
}

#[test]
fn select_all_selects_only_the_current_page() {
    let table = table();
    for total in [4usize, 25] {
        let records = docs(total);
        let view = TableView::compute(&table, &records, &TableState::new());
        let mut state = view.state.clone();
        state.toggle_all(&view.page_ids());
        let view = TableView::compute(&table, &records, &state);
        assert_eq!(view.selected_count, total.min(10));
        assert!(view.all_page_selected());
        let html = render_table(&table, &view, &TableProps::new("/docs"));
        assert!(html.contains(&format!("{} of {} row(s) selected.", total.min(10), total)));
    }
}

#[test]
fn hiding_a_column_keeps_selection_and_order() {
    let records = docs(15);
    let table = table();
    let mut state = TableState::new();
    state.toggle_sort("group", SortCycle::Toggle);
    state.toggle_selected("doc-1");
    let before = TableView::compute(&table, &records, &state);
    let before_ids = before.page_ids();

    state.toggle_visibility("group");
    let after = TableView::compute(&table, &records, &state);
    assert_eq!(after.page_ids(), before_ids);
    assert_eq!(after.selected_count, 1);
    assert_eq!(after.state.sort_direction("group"), before.state.sort_direction("group"));

    let html = render_table(&table, &after, &TableProps::new("/docs"));
    assert!(!html.contains(r#"data-column="group""#));
    assert!(html.contains(r#"data-row-id="doc-1" data-state="selected""#));
}

#[test]
fn clearing_categorical_filter_restores_full_set() {
    let records = docs(20);
    let table = table();
    let active_only = SelectFilter::new("status", "Filter by status")
        .all_option("All")
        .option("active", "Active")
        .option("inactive", "Inactive");
    let matches = |d: &Doc, v: &str| d.active == (v == "active");

    let filtered = active_only.clone().with_value(Some("inactive")).apply(&records, matches);
    let view = TableView::compute(&table, &filtered, &TableState::new());
    assert_eq!(view.filtered_count, records.iter().filter(|d| !d.active).count());

    let cleared = active_only.with_value(None).apply(&records, matches);
    let view = TableView::compute(&table, &cleared, &TableState::new());
    assert_eq!(view.filtered_count, 20);
}

#[test]
fn loading_renders_page_size_skeleton_rows() {
    let records = docs(3);
    let table = table();
    let view = TableView::compute(&table, &records, &TableState::new());
    let html = render_table(&table, &view, &TableProps::new("/docs").loading(None));
    assert_eq!(html.matches("data-skeleton").count(), 10);
    assert_eq!(body_rows(&html), 0);
    assert!(!html.contains(r#"<a href="/docs?page=2""#));
    assert!(html.contains(r#"aria-disabled="true""#));
}

#[test]
fn next_page_of_filtered_subset() {
    let records = docs(45);
    let table = table();
    let status = SelectFilter::new("status", "Filter by status")
        .all_option("All")
        .option("active", "Active")
        .option("inactive", "Inactive")
        .with_value(Some("inactive"));
    let inactive = status.apply(&records, |d: &Doc, v: &str| d.active == (v == "active"));
    assert_eq!(inactive.len(), 15);

    let props = TableProps::new("/docs").select_filter(&status);
    let first = TableView::compute(&table, &inactive, &TableState::new());
    let html = render_table(&table, &first, &props);
    assert!(html.contains(r#"href="/docs?status=inactive&amp;page=2""#));

    let mut state = first.state.clone();
    state.next_page();
    let second = TableView::compute(&table, &inactive, &state);
    assert_eq!(second.row_range(), Some((11, 15)));
    let expected: Vec<&str> = inactive[10..].iter().map(|d| d.id.as_str()).collect();
    assert_eq!(second.page_ids(), expected);
    assert!(second.rows.iter().all(|d| !d.active));
    assert!(!second.can_next());
}

#[test]
fn page_past_the_end_is_clamped() {
    let records = docs(30);
    let table = table();
    let inactive: Vec<Doc> = records.iter().filter(|d| !d.active).cloned().collect();
    assert_eq!(inactive.len(), 10);
    let mut state = TableState::new();
    state.next_page();
    // only one page exists, so the index is clamped back
    let view = TableView::compute(&table, &inactive, &state);
    assert_eq!(view.state.page, 0);
    assert_eq!(view.row_range(), Some((1, 10)));
}
