//! Dashboard application state.

use std::sync::Arc;

use fileflow_core::{FileFlowConfig, MockData};

use crate::columns::Tables;
use crate::error::DashboardError;

/// Shared application state for the dashboard.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: FileFlowConfig,
    data: MockData,
    tables: Tables,
}

impl AppState {
    /// Generate the mock data and build every table definition.
    pub fn new(config: FileFlowConfig) -> Result<Self, DashboardError> {
        let data = MockData::generate(config.mock.seed);
        let tables = Tables::build(config.table.page_size)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                data,
                tables,
            }),
        })
    }

    pub fn config(&self) -> &FileFlowConfig {
        &self.inner.config
    }

    pub fn data(&self) -> &MockData {
        &self.inner.data
    }

    pub fn tables(&self) -> &Tables {
        &self.inner.tables
    }
}
