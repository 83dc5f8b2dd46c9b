//! Record types shown by the dashboard.
//!
//! Field names serialize in camelCase so they line up with the column ids
//! the dashboard uses (`lastModified`, `firstName`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use fileflow_table::Record;

/// Declares a closed set of labelled variants.
///
/// Each enum gets `ALL`, `as_str` (the display label, also used as the
/// filter value), case-insensitive `parse`, and `Display`.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                let s = s.trim();
                Self::ALL.iter().copied().find(|v| v.as_str().eq_ignore_ascii_case(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum! {
    /// Kind of a file-manager entry.
    pub enum FileType {
        Folder => "Folder",
        Document => "Document",
        Image => "Image",
        Video => "Video",
        Audio => "Audio",
        Archive => "Archive",
        Spreadsheet => "Spreadsheet",
        Presentation => "Presentation",
        Pdf => "PDF",
        Code => "Code",
        Other => "Other",
    }
}

impl FileType {
    /// Font Awesome icon class for the file type.
    pub fn icon(&self) -> &'static str {
        match self {
            FileType::Folder => "fas fa-folder",
            FileType::Document | FileType::Pdf => "fas fa-file-lines",
            FileType::Image => "fas fa-file-image",
            FileType::Video => "fas fa-file-video",
            FileType::Audio => "fas fa-file-audio",
            FileType::Archive => "fas fa-file-zipper",
            FileType::Spreadsheet => "fas fa-file-excel",
            FileType::Presentation => "fas fa-file-powerpoint",
            FileType::Code => "fas fa-file-code",
            FileType::Other => "fas fa-file-circle-question",
        }
    }
}

labelled_enum! {
    pub enum DepartmentStatus {
        Active => "Active",
        Inactive => "Inactive",
        Archived => "Archived",
    }
}

labelled_enum! {
    pub enum TemplateStatus {
        Draft => "Draft",
        Published => "Published",
        Archived => "Archived",
    }
}

labelled_enum! {
    pub enum DocumentStatus {
        Draft => "Draft",
        PendingApproval => "Pending Approval",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

labelled_enum! {
    pub enum ApprovalStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

/// A file or folder in the file manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Size in bytes; folders report 0.
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub path: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub shared_with: Vec<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub id: String,
    pub sr_no: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleItem {
    pub id: String,
    pub sr_no: u32,
    pub role: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentItem {
    pub id: String,
    pub sr_no: u32,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub status: DepartmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterTemplateItem {
    pub id: String,
    pub sr_no: u32,
    pub name: String,
    pub description: String,
    pub version: String,
    pub status: TemplateStatus,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListItem {
    pub id: String,
    pub sr_no: u32,
    pub name: String,
    /// Name of the master template the document was created from.
    pub template_used: String,
    pub status: DocumentStatus,
    pub created_by: String,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalListItem {
    pub id: String,
    pub sr_no: u32,
    pub document_name: String,
    pub submitted_by: String,
    pub submission_date: DateTime<Utc>,
    pub status: ApprovalStatus,
    /// Who approved or rejected; `None` while pending.
    #[serde(default)]
    pub approver: Option<String>,
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(impl Record for $ty {
            fn record_id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_record!(
    FileItem,
    UserItem,
    RoleItem,
    DepartmentItem,
    MasterTemplateItem,
    DocumentListItem,
    ApprovalListItem,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(FileType::parse("pdf"), Some(FileType::Pdf));
        assert_eq!(
            DocumentStatus::parse("pending approval"),
            Some(DocumentStatus::PendingApproval)
        );
        assert_eq!(ApprovalStatus::parse("unknown"), None);
    }

    #[test]
    fn labels_serialize_as_display_text() {
        let json = serde_yaml::to_string(&DocumentStatus::PendingApproval).unwrap();
        assert_eq!(json.trim(), "Pending Approval");
        assert_eq!(FileType::ALL.len(), 11);
        assert_eq!(TemplateStatus::Draft.to_string(), "Draft");
    }
}
