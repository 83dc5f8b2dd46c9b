//! In-memory mock data.
//!
//! Fixed lists are built from constants. Users and departments have random
//! activity flags (and departments a random status) drawn from a seeded RNG,
//! so a given `mock.seed` always produces the same data.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    ApprovalListItem, ApprovalStatus, DepartmentItem, DepartmentStatus, DocumentListItem,
    DocumentStatus, FileItem, FileType, MasterTemplateItem, RoleItem, TemplateStatus, UserItem,
};

pub const USER_COUNT: usize = 25;
pub const DEPARTMENT_COUNT: usize = 15;

const USER_ACTIVE_PROBABILITY: f64 = 0.7;
const DEPARTMENT_ACTIVE_PROBABILITY: f64 = 0.8;

/// Every collection the dashboard shows.
#[derive(Debug, Clone)]
pub struct MockData {
    pub files: Vec<FileItem>,
    pub users: Vec<UserItem>,
    pub roles: Vec<RoleItem>,
    pub departments: Vec<DepartmentItem>,
    pub master_templates: Vec<MasterTemplateItem>,
    pub documents: Vec<DocumentListItem>,
    pub approvals: Vec<ApprovalListItem>,
}

/// Figures for the home page quick stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStats {
    pub total_files: usize,
    pub active_users: usize,
    pub pending_approvals: usize,
    pub storage_bytes: u64,
}

impl MockData {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = Self {
            files: files(),
            users: users(&mut rng),
            roles: roles(),
            departments: departments(&mut rng),
            master_templates: master_templates(),
            documents: documents(),
            approvals: approvals(),
        };
        tracing::debug!(
            seed,
            files = data.files.len(),
            users = data.users.len(),
            departments = data.departments.len(),
            "Generated mock data"
        );
        data
    }

    pub fn stats(&self) -> QuickStats {
        QuickStats {
            total_files: self.files.iter().filter(|f| f.file_type != FileType::Folder).count(),
            active_users: self.users.iter().filter(|u| u.is_active).count(),
            pending_approvals: self
                .approvals
                .iter()
                .filter(|a| a.status == ApprovalStatus::Pending)
                .count(),
            storage_bytes: self.files.iter().map(|f| f.size).sum(),
        }
    }
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn file(
    id: &str,
    name: &str,
    file_type: FileType,
    size: u64,
    last_modified: DateTime<Utc>,
    path: &str,
    owner: &str,
    is_favorite: bool,
    shared_with: &[&str],
) -> FileItem {
    FileItem {
        id: id.to_string(),
        name: name.to_string(),
        file_type,
        size,
        last_modified,
        path: path.to_string(),
        is_favorite,
        shared_with: shared_with.iter().map(|s| s.to_string()).collect(),
        owner: Some(owner.to_string()),
    }
}

fn files() -> Vec<FileItem> {
    use FileType::*;
    vec![
        file(
            "1",
            "Project Alpha Proposal.pdf",
            Pdf,
            1_200_000,
            at(2023, 10, 26, 10, 0),
            "/documents/",
            "Alice",
            true,
            &[],
        ),
        file(
            "2",
            "Team Meeting Notes.docx",
            Document,
            50_000,
            at(2023, 11, 15, 14, 30),
            "/documents/",
            "Alice",
            false,
            &["Bob", "Charlie"],
        ),
        file(
            "3",
            "Company Logos",
            Folder,
            0,
            at(2023, 9, 1, 9, 0),
            "/images/",
            "System",
            false,
            &[],
        ),
        file(
            "4",
            "Vacation Photos Summer 2023",
            Folder,
            0,
            at(2023, 8, 20, 17, 0),
            "/images/",
            "Bob",
            true,
            &[],
        ),
        file(
            "5",
            "logo-final.png",
            Image,
            850_000,
            at(2023, 9, 5, 11, 20),
            "/images/Company Logos/",
            "Alice",
            false,
            &[],
        ),
        file(
            "6",
            "Product Demo.mp4",
            Video,
            250_000_000,
            at(2023, 11, 1, 16, 45),
            "/videos/",
            "Charlie",
            false,
            &[],
        ),
        file(
            "7",
            "Website Backup.zip",
            Archive,
            52_428_800,
            at(2023, 11, 20, 8, 15),
            "/backups/",
            "System",
            false,
            &[],
        ),
        file(
            "8",
            "Soundtrack Ep1.mp3",
            Audio,
            5_200_000,
            at(2023, 7, 10, 12, 0),
            "/audio/",
            "Eve",
            false,
            &["David"],
        ),
        file(
            "9",
            "Quarterly Sales Report.xlsx",
            Spreadsheet,
            780_000,
            at(2024, 1, 15, 9, 30),
            "/reports/",
            "FinanceBot",
            false,
            &[],
        ),
        file(
            "10",
            "Investor Pitch Deck.pptx",
            Presentation,
            3_200_000,
            at(2024, 2, 1, 14, 0),
            "/presentations/",
            "Alice",
            true,
            &[],
        ),
        file(
            "11",
            "API Configuration.json",
            Code,
            15_000,
            at(2023, 12, 5, 10, 10),
            "/config/",
            "DevTeam",
            false,
            &[],
        ),
        file(
            "12",
            "main_script.py",
            Code,
            8_000,
            at(2024, 2, 10, 11, 55),
            "/scripts/",
            "Charlie",
            false,
            &[],
        ),
        file(
            "13",
            "unknown_file.dat",
            Other,
            102_400,
            at(2023, 5, 3, 0, 0),
            "/archive/legacy/",
            "System",
            false,
            &[],
        ),
    ]
}

fn users(rng: &mut StdRng) -> Vec<UserItem> {
    (1..=USER_COUNT as u32)
        .map(|i| UserItem {
            id: format!("user-{i}"),
            sr_no: i,
            first_name: format!("UserFirst{i}"),
            last_name: format!("UserLast{i}"),
            email: format!("user{i}@example.com"),
            is_active: rng.random_bool(USER_ACTIVE_PROBABILITY),
        })
        .collect()
}

fn roles() -> Vec<RoleItem> {
    [
        ("Administrator", "Full access to all system features.", true),
        ("Editor", "Can create and modify content.", true),
        ("Viewer", "Can only view content.", true),
        ("Contributor", "Can submit content for review.", false),
        ("Moderator", "Manages user-generated content.", true),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((role, description, is_active), i)| RoleItem {
        id: format!("role-{i}"),
        sr_no: i,
        role: role.to_string(),
        description: description.to_string(),
        is_active,
    })
    .collect()
}

fn departments(rng: &mut StdRng) -> Vec<DepartmentItem> {
    (0..DEPARTMENT_COUNT as u32)
        .map(|i| {
            let letter = char::from(b'A' + i as u8);
            let is_active = rng.random_bool(DEPARTMENT_ACTIVE_PROBABILITY);
            let status = DepartmentStatus::ALL[rng.random_range(0..DepartmentStatus::ALL.len())];
            DepartmentItem {
                id: format!("dept-{}", i + 1),
                sr_no: i + 1,
                name: format!("Department {letter}"),
                description: format!(
                    "This is department {letter}. It handles various important tasks related to its specialized area of operations."
                ),
                is_active,
                status,
            }
        })
        .collect()
}

fn master_templates() -> Vec<MasterTemplateItem> {
    use TemplateStatus::*;
    [
        (
            "Client Service Agreement",
            "Standard agreement for client engagements.",
            "2.1",
            Published,
            at(2024, 1, 12, 9, 15),
        ),
        (
            "Non-Disclosure Agreement",
            "Mutual NDA for partners and vendors.",
            "1.4",
            Published,
            at(2023, 11, 3, 13, 40),
        ),
        (
            "Employee Onboarding Checklist",
            "Tasks for a new hire's first week.",
            "1.0",
            Draft,
            at(2024, 2, 6, 10, 5),
        ),
        (
            "Vendor Contract",
            "Terms for third-party suppliers.",
            "3.0",
            Published,
            at(2023, 9, 18, 16, 20),
        ),
        (
            "Expense Reimbursement Form",
            "Claim form for business expenses.",
            "1.2",
            Archived,
            at(2023, 4, 27, 8, 50),
        ),
        (
            "Purchase Order",
            "Order form for procurement.",
            "2.0",
            Published,
            at(2023, 12, 14, 11, 0),
        ),
        (
            "Project Proposal",
            "Outline for new project pitches.",
            "1.1",
            Draft,
            at(2024, 2, 20, 15, 30),
        ),
        (
            "Performance Review",
            "Annual employee review form.",
            "2.3",
            Published,
            at(2023, 10, 30, 9, 45),
        ),
        (
            "Leave Request Form",
            "Request for paid or unpaid leave.",
            "1.0",
            Published,
            at(2023, 8, 8, 14, 10),
        ),
        (
            "Statement of Work",
            "Scope and deliverables for a contract.",
            "1.5",
            Draft,
            at(2024, 1, 29, 12, 25),
        ),
        (
            "Incident Report",
            "Record of a workplace incident.",
            "1.0",
            Archived,
            at(2023, 3, 15, 17, 5),
        ),
        (
            "Travel Authorization",
            "Approval request for business travel.",
            "1.3",
            Published,
            at(2023, 12, 1, 10, 35),
        ),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((name, description, version, status, last_modified), i)| MasterTemplateItem {
        id: format!("mt-{i}"),
        sr_no: i,
        name: name.to_string(),
        description: description.to_string(),
        version: version.to_string(),
        status,
        last_modified,
    })
    .collect()
}

fn documents() -> Vec<DocumentListItem> {
    use DocumentStatus::*;
    [
        (
            "Acme Corp Service Agreement",
            "Client Service Agreement",
            Approved,
            "Alice",
            at(2024, 1, 20, 10, 0),
        ),
        ("Globex NDA", "Non-Disclosure Agreement", Approved, "Bob", at(2023, 11, 10, 9, 30)),
        (
            "Initech Vendor Contract",
            "Vendor Contract",
            PendingApproval,
            "Charlie",
            at(2024, 2, 2, 14, 15),
        ),
        ("Q1 Office Supplies PO", "Purchase Order", Approved, "Eve", at(2024, 1, 8, 11, 45)),
        (
            "Mobile App Redesign Proposal",
            "Project Proposal",
            Draft,
            "David",
            at(2024, 2, 22, 16, 0),
        ),
        ("2023 Review - Bob", "Performance Review", Approved, "Alice", at(2023, 12, 18, 13, 20)),
        (
            "2023 Review - Charlie",
            "Performance Review",
            PendingApproval,
            "Alice",
            at(2023, 12, 19, 13, 25),
        ),
        ("Leave Request - Eve", "Leave Request Form", Rejected, "Eve", at(2023, 8, 14, 8, 55)),
        (
            "Data Migration SOW",
            "Statement of Work",
            PendingApproval,
            "Charlie",
            at(2024, 2, 12, 10, 40),
        ),
        (
            "Berlin Conference Travel",
            "Travel Authorization",
            Approved,
            "Bob",
            at(2023, 12, 5, 15, 10),
        ),
        (
            "Hooli Service Agreement",
            "Client Service Agreement",
            Draft,
            "Alice",
            at(2024, 2, 25, 9, 0),
        ),
        ("Warehouse Incident 0315", "Incident Report", Rejected, "David", at(2023, 3, 16, 7, 30)),
        (
            "Leave Request - David",
            "Leave Request Form",
            PendingApproval,
            "David",
            at(2024, 2, 18, 12, 5),
        ),
        ("Umbrella Corp NDA", "Non-Disclosure Agreement", Draft, "Bob", at(2024, 2, 27, 17, 50)),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((name, template_used, status, created_by, last_modified), i)| DocumentListItem {
        id: format!("doc-{i}"),
        sr_no: i,
        name: name.to_string(),
        template_used: template_used.to_string(),
        status,
        created_by: created_by.to_string(),
        last_modified,
    })
    .collect()
}

fn approvals() -> Vec<ApprovalListItem> {
    use ApprovalStatus::*;
    [
        ("Initech Vendor Contract", "Charlie", at(2024, 2, 2, 14, 20), Pending, None),
        ("2023 Review - Charlie", "Alice", at(2023, 12, 19, 13, 30), Pending, None),
        ("Data Migration SOW", "Charlie", at(2024, 2, 12, 10, 45), Pending, None),
        ("Leave Request - David", "David", at(2024, 2, 18, 12, 10), Pending, None),
        ("Acme Corp Service Agreement", "Alice", at(2024, 1, 20, 10, 5), Approved, Some("Frank")),
        ("Globex NDA", "Bob", at(2023, 11, 10, 9, 35), Approved, Some("Grace")),
        ("Q1 Office Supplies PO", "Eve", at(2024, 1, 8, 11, 50), Approved, Some("Frank")),
        ("2023 Review - Bob", "Alice", at(2023, 12, 18, 13, 25), Approved, Some("Grace")),
        ("Leave Request - Eve", "Eve", at(2023, 8, 14, 9, 0), Rejected, Some("Frank")),
        ("Berlin Conference Travel", "Bob", at(2023, 12, 5, 15, 15), Approved, Some("Heidi")),
        ("Warehouse Incident 0315", "David", at(2023, 3, 16, 7, 35), Rejected, Some("Heidi")),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((document_name, submitted_by, submission_date, status, approver), i)| ApprovalListItem {
        id: format!("apr-{i}"),
        sr_no: i,
        document_name: document_name.to_string(),
        submitted_by: submitted_by.to_string(),
        submission_date,
        status,
        approver: approver.map(str::to_string),
    })
    .collect()
}
