//! The update-task-content report.

use super::files::summarize_related_files;
use super::outcome::{UpdateOutcome, UpdateSignals};
use super::overrides::{OverrideResolver, UPDATE_TASK_CONTENT, apply_override};
use super::store::{TemplateStore, TemplateVariant};
use super::template::{render_template, vars};
use super::truncate::{MAX_FIELD_LENGTH, notes_line, truncate_field};
use crate::error::Result;
use crate::task::Task;
use chrono::SecondsFormat;
use std::collections::HashMap;
use tracing::debug;

/// Render the report for one update-task-content operation.
///
/// The early-exit outcomes (not found, validation error, empty update)
/// return their variant verbatim. A completed update is wrapped in the index
/// template and then passed through the `UPDATE_TASK_CONTENT` override.
///
/// Only template loading can fail.
pub fn render_update_task_content(
    signals: UpdateSignals,
    store: &dyn TemplateStore,
    overrides: &dyn OverrideResolver,
) -> Result<String> {
    let outcome = UpdateOutcome::classify(signals);

    match outcome {
        UpdateOutcome::NotFound { task_id } => {
            debug!(task_id = %task_id, "rendering not-found report");
            let body = store.load_variant(TemplateVariant::NotFound)?;
            Ok(render_template(&body, &vars([("taskId", task_id)])))
        }
        UpdateOutcome::ValidationFailed { error } => {
            debug!("rendering validation-error report");
            let body = store.load_variant(TemplateVariant::Validation)?;
            Ok(render_template(&body, &vars([("error", error)])))
        }
        UpdateOutcome::EmptyUpdate => {
            debug!("rendering empty-update report");
            let body = store.load_variant(TemplateVariant::EmptyUpdate)?;
            Ok(render_template(&body, &HashMap::new()))
        }
        UpdateOutcome::Completed {
            success,
            message,
            updated_task,
        } => {
            debug!(success, has_details = updated_task.is_some(), "rendering update report");
            let mut content = message;
            if let Some(task) = &updated_task {
                content.push_str(&render_success_details(task, store)?);
            }

            let index = store.load_variant(TemplateVariant::Index)?;
            let composed = render_template(
                &index,
                &vars([
                    ("responseTitle", UpdateOutcome::response_title(success).to_string()),
                    ("message", content),
                ]),
            );

            Ok(apply_override(UPDATE_TASK_CONTENT, composed, overrides))
        }
    }
}

/// The success block: task fields plus the related-file summary.
fn render_success_details(task: &Task, store: &dyn TemplateStore) -> Result<String> {
    let files_content = if task.related_files.is_empty() {
        String::new()
    } else {
        let fragment = store.load_variant(TemplateVariant::FileDetails)?;
        summarize_related_files(&task.related_files, &fragment)
    };

    let body = store.load_variant(TemplateVariant::Success)?;
    let vars = vars([
        ("taskName", task.name.clone()),
        (
            "taskDescription",
            truncate_field(&task.description, MAX_FIELD_LENGTH),
        ),
        ("taskNotes", notes_line(task.notes.as_deref())),
        ("taskStatus", task.status.to_string()),
        (
            "taskUpdatedAt",
            task.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        ("filesContent", files_content),
    ]);

    Ok(render_template(&body, &vars))
}
