//! Task model consumed by the report composer.
//!
//! Tasks are owned by the task-storage side of the tool; this crate only
//! reads them. They can be loaded from JSON (the camelCase layout used by
//! `tasks.json`) or from YAML with the same field names:
//!
//! ```text
//! id: T-42
//! name: Add login form
//! description: Build the login form component.
//! status: in_progress
//! updatedAt: 2026-01-13T10:00:00Z
//! relatedFiles:
//!   - path: src/login.rs
//!     type: TO_MODIFY
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

mod io;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl TaskStatus {
    /// The status as stored and rendered (`pending`, `in_progress`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a related file participates in a task.
///
/// Stored as `TO_MODIFY`, `REFERENCE`, ...; lowercase spellings are accepted
/// on input. Displayed as a human label ("to modify", "reference", ...),
/// which is also the grouping key used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelatedFileType {
    #[serde(alias = "to_modify", alias = "to modify")]
    ToModify,
    #[serde(alias = "reference")]
    Reference,
    #[serde(alias = "create")]
    Create,
    #[serde(alias = "dependency")]
    Dependency,
    #[serde(alias = "other")]
    Other,
}

impl RelatedFileType {
    /// Human-readable label used as the group tag in reports.
    pub fn label(&self) -> &'static str {
        match self {
            RelatedFileType::ToModify => "to modify",
            RelatedFileType::Reference => "reference",
            RelatedFileType::Create => "create",
            RelatedFileType::Dependency => "dependency",
            RelatedFileType::Other => "other",
        }
    }
}

impl fmt::Display for RelatedFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A file associated with a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedFile {
    /// File path, usually relative to the project root.
    pub path: String,

    /// Role of the file in the task.
    #[serde(rename = "type")]
    pub file_type: RelatedFileType,

    /// Free-text note about the file. Not rendered in reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// First relevant line (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_start: Option<u32>,

    /// Last relevant line (1-based, inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_end: Option<u32>,
}

impl RelatedFile {
    /// Create a related file with only a path and type.
    pub fn new(path: impl Into<String>, file_type: RelatedFileType) -> Self {
        Self {
            path: path.into(),
            file_type,
            description: None,
            line_start: None,
            line_end: None,
        }
    }
}

/// A task as seen by the report composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    // =========================================================================
    // Identity
    // =========================================================================
    /// Task identifier.
    pub id: String,

    /// Short task name.
    pub name: String,

    // =========================================================================
    // Content
    // =========================================================================
    /// Full task description.
    #[serde(default)]
    pub description: String,

    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    // =========================================================================
    // State
    // =========================================================================
    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification time.
    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    // =========================================================================
    // Relations
    // =========================================================================
    /// Files associated with the task, in their stored order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_files: Vec<RelatedFile>,

    // =========================================================================
    // Unknown fields (forward compatibility)
    // =========================================================================
    /// Any fields not explicitly defined above (dependencies, summary,
    /// implementation guide, ...). Kept so a load/save cycle is lossless.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Task {
    /// Create a pending task with the given identity, updated now.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            notes: None,
            status: TaskStatus::default(),
            created_at: None,
            updated_at: Utc::now(),
            completed_at: None,
            related_files: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}
