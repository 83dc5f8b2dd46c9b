//! Table definition and the filter → sort → paginate pipeline.

use std::collections::HashSet;

use crate::column::Column;
use crate::error::TableError;
use crate::state::TableState;
use crate::Record;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A set of columns plus the engine options a page picks.
#[derive(Debug, Clone)]
pub struct Table<T> {
    columns: Vec<Column<T>>,
    filter_column: Option<String>,
    filter_placeholder: Option<String>,
    page_size: usize,
}

impl<T> Table<T> {
    /// Create a table. Column ids must be unique.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id()) {
                return Err(TableError::DuplicateColumn(column.id().to_string()));
            }
        }
        Ok(Self {
            columns,
            filter_column: None,
            filter_placeholder: None,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Enable the free-text filter on `column`.
    pub fn with_filter(
        mut self,
        column: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Result<Self, TableError> {
        let column = column.into();
        if self.column(&column).is_none() {
            return Err(TableError::UnknownFilterColumn(column));
        }
        self.filter_column = Some(column);
        self.filter_placeholder = Some(placeholder.into());
        Ok(self)
    }

    /// Set the page size. Zero is bumped to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    pub fn filter_column(&self) -> Option<&str> {
        self.filter_column.as_deref()
    }

    pub fn filter_placeholder(&self) -> Option<&str> {
        self.filter_placeholder.as_deref()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Columns the state leaves visible, in declaration order.
    pub fn visible_columns<'t>(&'t self, state: &TableState) -> Vec<&'t Column<T>> {
        self.columns
            .iter()
            .filter(|c| state.is_visible(c.id()))
            .collect()
    }

    /// Drop anything in `state` that does not fit these columns.
    ///
    /// Sort keys must name a sortable column and hidden ids a hideable one.
    pub fn sanitize(&self, state: &TableState) -> TableState {
        let mut state = state.clone();
        state.sort.retain(|key| {
            let ok = self.column(&key.column).is_some_and(|c| c.is_sortable());
            if !ok {
                tracing::debug!(
                    column = %key.column,
                    "Ignoring sort on unknown or unsortable column"
                );
            }
            ok
        });
        state.sort.truncate(1);
        state.hidden.retain(|id| {
            let ok = self.column(id).is_some_and(|c| c.is_hideable());
            if !ok {
                tracing::debug!(column = %id, "Ignoring hide request for unknown or fixed column");
            }
            ok
        });
        if self.filter_column.is_none() {
            state.filter = None;
        }
        state
    }

    /// Apply the free-text filter, then the sort.
    ///
    /// Filtering is a case-insensitive substring match on the filter
    /// column's displayed value. Sorting is stable; equal keys keep their
    /// input order in both directions.
    pub fn filter_and_sort<'a>(&self, records: &'a [T], state: &TableState) -> Vec<&'a T> {
        let mut rows: Vec<&'a T> = match (self.filter_column(), state.filter.as_deref()) {
            (Some(column_id), Some(needle)) => match self.column(column_id) {
                Some(column) => {
                    let needle = needle.to_lowercase();
                    records
                        .iter()
                        .filter(|r| column.value(r).to_string().to_lowercase().contains(&needle))
                        .collect()
                }
                None => records.iter().collect(),
            },
            _ => records.iter().collect(),
        };

        if let Some(key) = state.sort.first()
            && let Some(column) = self.column(&key.column)
        {
            let descending = key.direction == crate::SortDirection::Desc;
            rows.sort_by(|a, b| {
                let ord = column.value(a).compare(&column.value(b));
                if descending { ord.reverse() } else { ord }
            });
        }

        rows
    }
}

/// The result of running the pipeline for one request.
#[derive(Debug)]
pub struct TableView<'a, T> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a T>,
    /// Rows left after the free-text filter (the "M" in "N of M").
    pub filtered_count: usize,
    /// Selected records among the filtered rows.
    pub selected_count: usize,
    /// Sanitized state with the page index clamped into range.
    pub state: TableState,
    pub page_count: usize,
    pub page_size: usize,
}

impl<'a, T: Record> TableView<'a, T> {
    /// Run filter → sort → paginate.
    ///
    /// The page index is clamped to the last page, so shrinking the filtered
    /// set never strands the user on an empty page.
    pub fn compute(table: &Table<T>, records: &'a [T], state: &TableState) -> Self {
        let mut state = table.sanitize(state);
        let ordered = table.filter_and_sort(records, &state);

        let page_size = table.page_size();
        let filtered_count = ordered.len();
        let page_count = filtered_count.div_ceil(page_size).max(1);
        if state.page >= page_count {
            tracing::debug!(requested = state.page, last = page_count - 1, "Clamping page index");
            state.page = page_count - 1;
        }

        let selected_count = ordered
            .iter()
            .filter(|r| state.is_selected(r.record_id()))
            .count();

        let rows = ordered
            .into_iter()
            .skip(state.page * page_size)
            .take(page_size)
            .collect();

        Self {
            rows,
            filtered_count,
            selected_count,
            state,
            page_count,
            page_size,
        }
    }

    pub fn can_previous(&self) -> bool {
        self.state.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.state.page + 1 < self.page_count
    }

    /// Ids of the rows on the current page.
    pub fn page_ids(&self) -> Vec<&'a str> {
        self.rows.iter().map(|&r| r.record_id()).collect()
    }

    pub fn all_page_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| self.state.is_selected(r.record_id()))
    }

    pub fn some_page_selected(&self) -> bool {
        self.rows.iter().any(|r| self.state.is_selected(r.record_id()))
    }

    /// 1-based inclusive range of rows shown, or `None` when empty.
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let start = self.state.page * self.page_size + 1;
        Some((start, start + self.rows.len() - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortDirection;
    use crate::value::Value;
    use crate::SortKey;

    #[derive(Debug, Clone)]
    struct Item {
        id: String,
        name: String,
        rank: i64,
    }

    impl Record for Item {
        fn record_id(&self) -> &str {
            &self.id
        }
    }

    fn items(n: usize) -> Vec<Item> {
        (1..=n)
            .map(|i| Item {
                id: format!("item-{i}"),
                name: format!("Item {i}"),
                rank: (i % 3) as i64,
            })
            .collect()
    }

    fn table() -> Table<Item> {
        Table::new(vec![
            Column::new("name", "Name", |i: &Item| Value::from(&i.name)).sortable(),
            Column::new("rank", "Rank", |i: &Item| Value::from(i.rank)).sortable(),
            Column::new("id", "Id", |i: &Item| Value::from(&i.id)).fixed(),
        ])
        .and_then(|t| t.with_filter("name", "Search..."))
        .expect("valid table")
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Table::new(vec![
            Column::new("a", "A", |_: &Item| Value::Empty),
            Column::new("a", "A again", |_: &Item| Value::Empty),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateColumn("a".into()));
    }

    #[test]
    fn unknown_filter_column_is_rejected() {
        let err = Table::new(vec![Column::new("a", "A", |_: &Item| Value::Empty)])
            .and_then(|t| t.with_filter("b", ""))
            .unwrap_err();
        assert_eq!(err, TableError::UnknownFilterColumn("b".into()));
        assert_eq!(Table::<Item>::new(vec![]).unwrap_err(), TableError::NoColumns);
    }

    #[test]
    fn page_is_clamped_when_filter_shrinks_rows() {
        let records = items(25);
        let mut state = TableState::new();
        state.page = 2;
        state.filter = Some("item 1".into()); // item 1, 10..19 -> 11 rows
        let view = TableView::compute(&table(), &records, &state);
        assert_eq!(view.filtered_count, 11);
        assert_eq!(view.page_count, 2);
        assert_eq!(view.state.page, 1);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn empty_result_has_one_page_and_no_rows() {
        let records = items(5);
        let mut state = TableState::new();
        state.filter = Some("zzz".into());
        let view = TableView::compute(&table(), &records, &state);
        assert_eq!(view.page_count, 1);
        assert!(view.rows.is_empty());
        assert_eq!(view.row_range(), None);
        assert!(!view.can_next());
        assert!(!view.can_previous());
    }

    #[test]
    fn sanitize_drops_unknown_and_fixed_ids() {
        let mut state = TableState::new();
        state.sort.push(SortKey {
            column: "missing".into(),
            direction: SortDirection::Asc,
        });
        state.hidden.insert("id".into());
        state.hidden.insert("rank".into());
        let clean = table().sanitize(&state);
        assert!(clean.sort.is_empty());
        assert_eq!(clean.hidden.len(), 1);
        assert!(clean.hidden.contains("rank"));
    }

    #[test]
    fn selection_counts_only_filtered_rows() {
        let records = items(12);
        let mut state = TableState::new();
        state.toggle_selected("item-2");
        state.toggle_selected("item-11");
        state.filter = Some("item 1".into());
        let view = TableView::compute(&table(), &records, &state);
        // item 1, 10, 11, 12
        assert_eq!(view.filtered_count, 4);
        assert_eq!(view.selected_count, 1);
        assert!(view.some_page_selected());
        assert!(!view.all_page_selected());
    }

    #[test]
    fn row_range_is_one_based() {
        let records = items(25);
        let mut state = TableState::new();
        state.next_page();
        let view = TableView::compute(&table(), &records, &state);
        assert_eq!(view.row_range(), Some((11, 20)));
        assert_eq!(view.page_ids().first().copied(), Some("item-11"));
    }
}
