//! # fileflow-table
//!
//! Generic table engine shared by every FileFlow resource list.
//!
//! A caller owns the record collection (and any categorical filter it applies
//! before handing records over). The engine owns view-local state only:
//! - sort order (single active column)
//! - free-text filter on one nominated column
//! - column visibility
//! - row selection, keyed by record id
//! - current page
//!
//! The view pipeline (filter, sort, paginate) is a pure function of the
//! records, the column descriptors and a [`TableState`]; see
//! [`TableView::compute`]. [`render`] turns a computed view into HTML.

pub mod column;
pub mod error;
pub mod filter;
pub mod render;
pub mod state;
pub mod value;
pub mod view;

pub use column::{Column, HeaderContext, SortCycle};
pub use error::TableError;
pub use filter::{FilterOption, SelectFilter};
pub use render::{DeferredLoad, TableProps, render_table};
pub use state::{SortDirection, SortKey, TableQuery, TableState};
pub use value::Value;
pub use view::{DEFAULT_PAGE_SIZE, Table, TableView};

/// A row of domain data that can be shown by the engine.
///
/// The id must be stable across requests; selection is keyed by it.
pub trait Record {
    fn record_id(&self) -> &str;
}
