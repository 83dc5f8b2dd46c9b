//! View-local table state and its query-string form.
//!
//! The dashboard is server-rendered, so the state a client-side table would
//! keep in memory travels in the URL instead. Every control link encodes the
//! state that results from clicking it.

use serde::Deserialize;
use std::collections::BTreeSet;

use crate::column::SortCycle;

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// One entry of the sort state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// Raw table parameters as they arrive in a request query string.
///
/// Every field is optional; missing fields mean the default state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableQuery {
    /// Sort column id.
    #[serde(default)]
    pub sort: Option<String>,
    /// `asc` or `desc`; defaults to `asc` when `sort` is set.
    #[serde(default)]
    pub dir: Option<String>,
    /// Free-text filter.
    #[serde(default)]
    pub q: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<usize>,
    /// Comma-separated hidden column ids.
    #[serde(default)]
    pub hidden: Option<String>,
    /// Comma-separated selected record ids.
    #[serde(default)]
    pub selected: Option<String>,
}

/// State owned by the table engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    /// Ordered sort keys. The UI only ever drives a single entry.
    pub sort: Vec<SortKey>,
    /// Free-text filter applied to the table's filter column.
    pub filter: Option<String>,
    /// Column ids the user has hidden.
    pub hidden: BTreeSet<String>,
    /// Selected record ids.
    pub selected: BTreeSet<String>,
    /// 0-based page index.
    pub page: usize,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build state from request parameters. Nothing here is validated against
    /// the columns; [`TableView::compute`](crate::TableView::compute) drops
    /// ids it does not know.
    pub fn from_query(query: &TableQuery) -> Self {
        let sort = query
            .sort
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|column| SortKey {
                column: column.to_string(),
                direction: query
                    .dir
                    .as_deref()
                    .and_then(SortDirection::parse)
                    .unwrap_or(SortDirection::Asc),
            })
            .into_iter()
            .collect();

        Self {
            sort,
            filter: normalize_filter(query.q.as_deref()),
            hidden: split_ids(query.hidden.as_deref()),
            selected: split_ids(query.selected.as_deref()),
            page: query.page.unwrap_or(1).saturating_sub(1),
        }
    }

    /// Direction of `column` if it is the active sort column.
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .first()
            .filter(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// Advance the sort for `column` and make it the only sort key.
    pub fn toggle_sort(&mut self, column: &str, cycle: SortCycle) {
        let next = cycle.next(self.sort_direction(column));
        self.sort = next
            .map(|direction| SortKey {
                column: column.to_string(),
                direction,
            })
            .into_iter()
            .collect();
        self.page = 0;
    }

    /// Set the free-text filter. Blank text clears it.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = normalize_filter(Some(text));
        self.page = 0;
    }

    pub fn is_visible(&self, column: &str) -> bool {
        !self.hidden.contains(column)
    }

    pub fn toggle_visibility(&mut self, column: &str) {
        if !self.hidden.remove(column) {
            self.hidden.insert(column.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select every id in `ids`, or deselect them all if they are all selected.
    pub fn toggle_all<S: AsRef<str>>(&mut self, ids: &[S]) {
        let all = !ids.is_empty() && ids.iter().all(|id| self.is_selected(id.as_ref()));
        for id in ids {
            if all {
                self.selected.remove(id.as_ref());
            } else {
                self.selected.insert(id.as_ref().to_string());
            }
        }
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Encode as query-string pairs. Defaults are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(key) = self.sort.first() {
            pairs.push(("sort", key.column.clone()));
            pairs.push(("dir", key.direction.as_str().to_string()));
        }
        if let Some(q) = &self.filter {
            pairs.push(("q", q.clone()));
        }
        if self.page > 0 {
            pairs.push(("page", (self.page + 1).to_string()));
        }
        if !self.hidden.is_empty() {
            pairs.push(("hidden", join_ids(&self.hidden)));
        }
        if !self.selected.is_empty() {
            pairs.push(("selected", join_ids(&self.selected)));
        }
        pairs
    }

    /// Encode as a URL query string (without the leading `?`).
    pub fn to_query(&self) -> String {
        encode_pairs(self.to_pairs().iter().map(|(k, v)| (*k, v.as_str())))
    }
}

/// Join `key=value` pairs with `&`, percent-encoding both sides.
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn normalize_filter(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn split_ids(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn join_ids(ids: &BTreeSet<String>) -> String {
    ids.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}
