//! The externally owned categorical filter.
//!
//! The page that owns the records also owns this filter: it reads the value
//! from its own query parameter and filters the collection before the engine
//! sees it. The engine only renders the control and keeps the parameter
//! alive in its own links. Submitting the control is the change callback;
//! the clear link (which drops the parameter) is the clear callback.

/// Value used by the "show everything" option.
pub const ALL: &str = "all";

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// Descriptor of a caller-owned select filter.
#[derive(Debug, Clone)]
pub struct SelectFilter {
    /// Query parameter carrying the value.
    pub param: String,
    /// Current value; `None` means all.
    pub value: Option<String>,
    pub options: Vec<FilterOption>,
    pub placeholder: String,
    pub label: Option<String>,
    /// Label for the clear button; no clear button when `None`.
    pub clear_label: Option<String>,
}

impl SelectFilter {
    pub fn new(param: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            value: None,
            options: Vec::new(),
            placeholder: placeholder.into(),
            label: None,
            clear_label: None,
        }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(FilterOption {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Add the catch-all option.
    pub fn all_option(self, label: impl Into<String>) -> Self {
        self.option(ALL, label)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn clearable(mut self, label: impl Into<String>) -> Self {
        self.clear_label = Some(label.into());
        self
    }

    /// Set the current value from a raw request parameter.
    ///
    /// Blank, `all` and values that match no option all mean "no filter".
    pub fn with_value(mut self, raw: Option<&str>) -> Self {
        self.value = raw
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
            .and_then(|v| {
                let known = self.options.iter().find(|o| o.value.eq_ignore_ascii_case(v));
                if known.is_none() {
                    tracing::debug!(
                        param = %self.param,
                        value = %v,
                        "Ignoring unknown filter value"
                    );
                }
                known.map(|o| o.value.clone())
            });
        self
    }

    /// Value shown as selected in the control.
    pub fn selected_value(&self) -> &str {
        self.value.as_deref().unwrap_or(ALL)
    }

    pub fn is_active(&self) -> bool {
        self.value.is_some()
    }

    /// Keep the records whose category matches the current value.
    ///
    /// `matches` receives a record and the active value. With no active value
    /// every record is kept.
    pub fn apply<T, F>(&self, records: &[T], matches: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &str) -> bool,
    {
        match &self.value {
            Some(value) => records
                .iter()
                .filter(|r| matches(*r, value.as_str()))
                .cloned()
                .collect(),
            None => records.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_filter() -> SelectFilter {
        SelectFilter::new("status", "Filter by status")
            .all_option("All Statuses")
            .option("active", "Active")
            .option("inactive", "Inactive")
    }

    #[test]
    fn all_and_blank_mean_no_filter() {
        assert!(!status_filter().with_value(Some("all")).is_active());
        assert!(!status_filter().with_value(Some("")).is_active());
        assert!(!status_filter().with_value(None).is_active());
        assert_eq!(status_filter().with_value(None).selected_value(), ALL);
    }

    #[test]
    fn unknown_value_is_ignored() {
        assert!(!status_filter().with_value(Some("deleted")).is_active());
    }

    #[test]
    fn known_value_is_normalized() {
        let filter = status_filter().with_value(Some("Inactive"));
        assert_eq!(filter.value.as_deref(), Some("inactive"));
    }

    #[test]
    fn apply_filters_by_predicate() {
        let records = vec![(1, true), (2, false), (3, false)];
        let filter = status_filter().with_value(Some("inactive"));
        let kept = filter.apply(&records, |r, v| (v == "active") == r.1);
        assert_eq!(kept, vec![(2, false), (3, false)]);

        let cleared = status_filter().with_value(None);
        assert_eq!(cleared.apply(&records, |_, _| false).len(), 3);
    }
}
