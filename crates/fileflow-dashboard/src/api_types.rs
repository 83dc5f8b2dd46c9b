//! Request types: page-owned query parameters and the add-record forms.

use chrono::NaiveDate;
use serde::Deserialize;

use fileflow_core::{DocumentStatus, TemplateStatus};

/// Query parameters owned by the page rather than the table engine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    /// Status filter on user, role, department and template pages.
    #[serde(default)]
    pub status: Option<String>,
    /// File type filter on the file manager.
    #[serde(default, rename = "type")]
    pub file_type: Option<String>,
    /// Modified-on filter on the file manager, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
}

impl FilterQuery {
    /// Raw value of the categorical parameter named `param`.
    pub fn category(&self, param: &str) -> Option<&str> {
        match param {
            "type" => self.file_type.as_deref(),
            _ => self.status.as_deref(),
        }
    }

    /// Parsed date filter. Malformed dates are ignored.
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref().map(str::trim).filter(|d| !d.is_empty())?;
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                tracing::debug!(date = %raw, "Ignoring malformed date filter");
                None
            }
        }
    }
}

/// Validation failures keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<(&'static str, &'static str)>);

impl FormErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push((field, message));
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names, comma separated, for logs and error text.
    pub fn fields(&self) -> String {
        self.0.iter().map(|(f, _)| *f).collect::<Vec<_>>().join(", ")
    }
}

/// Add Master Template form body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MasterTemplateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub status: String,
}

/// A master template submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMasterTemplate {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub status: TemplateStatus,
}

impl MasterTemplateForm {
    /// Blank form with the dialog's defaults filled in.
    pub fn initial() -> Self {
        Self {
            version: "1.0".to_string(),
            status: TemplateStatus::Draft.as_str().to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<NewMasterTemplate, FormErrors> {
        let mut errors = FormErrors::default();
        let name = self.name.trim();
        let version = self.version.trim();
        if name.is_empty() {
            errors.push("name", "Template name is required.");
        }
        if version.is_empty() {
            errors.push("version", "Version is required (e.g., 1.0).");
        }
        let status = parse_or_default(&self.status, TemplateStatus::parse, TemplateStatus::Draft);
        if !errors.is_empty() {
            return Err(errors);
        }
        let description = self.description.trim();
        Ok(NewMasterTemplate {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            version: version.to_string(),
            status,
        })
    }
}

/// Add Document form body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub template_used: String,
    #[serde(default)]
    pub status: String,
}

/// A document submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub name: String,
    pub template_used: String,
    pub status: DocumentStatus,
}

impl DocumentForm {
    pub fn initial() -> Self {
        Self {
            status: DocumentStatus::Draft.as_str().to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<NewDocument, FormErrors> {
        let mut errors = FormErrors::default();
        let name = self.name.trim();
        let template_used = self.template_used.trim();
        if name.is_empty() {
            errors.push("name", "Document name is required.");
        }
        if template_used.is_empty() {
            errors.push("templateUsed", "Template used is required.");
        }
        let status = parse_or_default(&self.status, DocumentStatus::parse, DocumentStatus::Draft);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewDocument {
            name: name.to_string(),
            template_used: template_used.to_string(),
            status,
        })
    }
}

/// Blank or unknown status values fall back to the default.
fn parse_or_default<S: Copy>(raw: &str, parse: fn(&str) -> Option<S>, default: S) -> S {
    if raw.trim().is_empty() {
        return default;
    }
    parse(raw).unwrap_or_else(|| {
        tracing::debug!(status = %raw, "Unknown status in form submission, using default");
        default
    })
}
