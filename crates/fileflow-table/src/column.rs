//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use crate::state::SortDirection;
use crate::value::Value;

/// Reads a value out of a record.
pub type Accessor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Renders a cell as HTML.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Renders a header as HTML.
pub type HeaderRenderer = Arc<dyn Fn(&HeaderContext<'_>) -> String + Send + Sync>;

/// How clicking a sortable header moves through sort directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortCycle {
    /// Unsorted goes to ascending, then ascending and descending alternate.
    #[default]
    Toggle,
    /// Unsorted, ascending, descending, back to unsorted.
    Tristate,
}

impl SortCycle {
    /// Direction that follows `current` when the header is clicked.
    pub fn next(self, current: Option<SortDirection>) -> Option<SortDirection> {
        match (self, current) {
            (_, None) => Some(SortDirection::Asc),
            (_, Some(SortDirection::Asc)) => Some(SortDirection::Desc),
            (SortCycle::Toggle, Some(SortDirection::Desc)) => Some(SortDirection::Asc),
            (SortCycle::Tristate, Some(SortDirection::Desc)) => None,
        }
    }
}

/// Everything a custom header renderer gets to see.
#[derive(Debug, Clone)]
pub struct HeaderContext<'a> {
    pub column_id: &'a str,
    pub label: &'a str,
    pub sorted: Option<SortDirection>,
    /// Link that applies the next sort direction; `None` for unsortable columns.
    pub toggle_href: Option<&'a str>,
}

/// A table column over records of type `T`.
pub struct Column<T> {
    id: String,
    label: String,
    accessor: Accessor<T>,
    header: Option<HeaderRenderer>,
    cell: Option<CellRenderer<T>>,
    sortable: bool,
    hideable: bool,
    sort_cycle: SortCycle,
}

impl<T> Column<T> {
    /// Create a column. Columns start unsortable and hideable.
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            accessor: Arc::new(accessor),
            header: None,
            cell: None,
            sortable: false,
            hideable: true,
            sort_cycle: SortCycle::default(),
        }
    }

    /// Allow sorting by clicking the header.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sortable, cycling back to unsorted after descending.
    pub fn sortable_tristate(mut self) -> Self {
        self.sortable = true;
        self.sort_cycle = SortCycle::Tristate;
        self
    }

    /// Keep the column out of the visibility menu.
    pub fn fixed(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    pub fn header<F>(mut self, render: F) -> Self
    where
        F: Fn(&HeaderContext<'_>) -> String + Send + Sync + 'static,
    {
        self.header = Some(Arc::new(render));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_hideable(&self) -> bool {
        self.hideable
    }

    pub fn sort_cycle(&self) -> SortCycle {
        self.sort_cycle
    }

    pub fn value(&self, record: &T) -> Value {
        (self.accessor)(record)
    }

    /// Custom cell HTML, if the column has a renderer.
    pub fn render_cell(&self, record: &T) -> Option<String> {
        self.cell.as_ref().map(|render| render(record))
    }

    /// Custom header HTML, if the column has a renderer.
    pub fn render_header(&self, ctx: &HeaderContext<'_>) -> Option<String> {
        self.header.as_ref().map(|render| render(ctx))
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            accessor: Arc::clone(&self.accessor),
            header: self.header.clone(),
            cell: self.cell.clone(),
            sortable: self.sortable,
            hideable: self.hideable,
            sort_cycle: self.sort_cycle,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("sort_cycle", &self.sort_cycle)
            .finish_non_exhaustive()
    }
}

/// Turn a camelCase column id into a menu label: `lastModified` → `Last Modified`.
pub fn humanize_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 4);
    for (i, c) in id.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_ascii_uppercase() {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}
