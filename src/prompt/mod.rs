//! Report composition for task-tracking operations.
//!
//! This module provides:
//!
//! - **Template**: `{placeholder}` substitution
//! - **Store**: layered lookup of template bodies by key
//! - **Outcome**: classification of an update result into one report variant
//! - **Files**: grouping of related files into summary lines
//! - **Truncate**: length limits for free-text fields
//! - **Overrides**: operator replace/append rules applied last
//!
//! [`render_update_task_content`] ties these together for the
//! update-task-content report.

mod files;
mod outcome;
mod overrides;
mod store;
mod template;
mod truncate;
mod update_task_content;


pub use files::{FileGroup, group_related_files, summarize_related_files};
pub use outcome::{UpdateOutcome, UpdateSignals};
pub use overrides::{
    EnvOverrides, NoOverrides, OverrideChain, OverrideMode, OverrideResolver, OverrideRule,
    UPDATE_TASK_CONTENT, apply_override, unescape_env_value,
};
pub use store::{
    BuiltinTemplates, FALLBACK_TEMPLATE_SET, LayeredTemplateStore, MemoryTemplateStore,
    TemplateSource, TemplateStore, TemplateVariant,
};
pub use template::{render_template, vars};
pub use truncate::{ELLIPSIS, MAX_FIELD_LENGTH, NOTES_PREFIX, notes_line, truncate_field};
pub use update_task_content::render_update_task_content;
