//! Classification of an update-task-content result.

use crate::task::Task;

/// Raw signals reported by the task-storage layer for one update.
///
/// Several of these can be set at once; [`UpdateOutcome::classify`] decides
/// which one the report is about.
#[derive(Debug, Clone, Default)]
pub struct UpdateSignals {
    /// Identifier the caller asked to update.
    pub task_id: String,
    /// The task as found before the update; `None` means it does not exist.
    pub task: Option<Task>,
    /// Validation failure message, if the requested fields were rejected.
    pub validation_error: Option<String>,
    /// Set when the request contained no fields to change.
    pub empty_update: bool,
    /// Whether the update was applied.
    pub success: bool,
    /// Free-text message from the storage layer.
    pub message: Option<String>,
    /// The task after a successful update.
    pub updated_task: Option<Task>,
}

impl UpdateSignals {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            ..Self::default()
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.task = Some(task);
        self
    }

    pub fn with_validation_error(mut self, error: impl Into<String>) -> Self {
        self.validation_error = Some(error.into());
        self
    }

    pub fn with_empty_update(mut self) -> Self {
        self.empty_update = true;
        self
    }

    pub fn succeeded(mut self, updated_task: Option<Task>) -> Self {
        self.success = true;
        self.updated_task = updated_task;
        self
    }

    pub fn failed(mut self) -> Self {
        self.success = false;
        self.updated_task = None;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// The single rendering path chosen for an update.
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// The task does not exist.
    NotFound { task_id: String },
    /// The requested fields failed validation.
    ValidationFailed { error: String },
    /// Nothing to update.
    EmptyUpdate,
    /// The update ran. `updated_task` is only kept when it succeeded.
    Completed {
        success: bool,
        message: String,
        updated_task: Option<Task>,
    },
}

impl UpdateOutcome {
    /// Pick the outcome by precedence: not found, validation error, empty
    /// update, then completed. An empty validation message counts as absent.
    pub fn classify(signals: UpdateSignals) -> Self {
        if signals.task.is_none() {
            return Self::NotFound {
                task_id: signals.task_id,
            };
        }

        if let Some(error) = signals.validation_error.filter(|e| !e.is_empty()) {
            return Self::ValidationFailed { error };
        }

        if signals.empty_update {
            return Self::EmptyUpdate;
        }

        Self::Completed {
            success: signals.success,
            message: signals.message.unwrap_or_default(),
            updated_task: signals.updated_task.filter(|_| signals.success),
        }
    }

    /// Title shown in the outer wrapper of a completed update.
    pub fn response_title(success: bool) -> &'static str {
        if success { "Success" } else { "Failure" }
    }
}

impl From<UpdateSignals> for UpdateOutcome {
    fn from(signals: UpdateSignals) -> Self {
        Self::classify(signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task::new("T-1", "Task one")
    }

    #[test]
    fn missing_task_wins_over_everything() {
        let signals = UpdateSignals::new("T-42")
            .with_validation_error("bad")
            .with_empty_update()
            .succeeded(Some(task()))
            .with_message("ok");

        match UpdateOutcome::classify(signals) {
            UpdateOutcome::NotFound { task_id } => assert_eq!(task_id, "T-42"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn validation_error_wins_over_empty_update() {
        let signals = UpdateSignals::new("T-1")
            .with_task(task())
            .with_validation_error("name is required")
            .with_empty_update()
            .succeeded(Some(task()));

        match UpdateOutcome::classify(signals) {
            UpdateOutcome::ValidationFailed { error } => assert_eq!(error, "name is required"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn empty_validation_error_is_ignored() {
        let signals = UpdateSignals::new("T-1")
            .with_task(task())
            .with_validation_error("")
            .with_empty_update();

        assert!(matches!(
            UpdateOutcome::classify(signals),
            UpdateOutcome::EmptyUpdate
        ));
    }

    #[test]
    fn empty_update_wins_over_success() {
        let signals = UpdateSignals::new("T-1")
            .with_task(task())
            .with_empty_update()
            .succeeded(Some(task()));

        assert!(matches!(
            UpdateOutcome::classify(signals),
            UpdateOutcome::EmptyUpdate
        ));
    }

    #[test]
    fn success_keeps_updated_task() {
        let signals = UpdateSignals::new("T-1")
            .with_task(task())
            .succeeded(Some(task()))
            .with_message("Updated");

        match UpdateOutcome::classify(signals) {
            UpdateOutcome::Completed {
                success,
                message,
                updated_task,
            } => {
                assert!(success);
                assert_eq!(message, "Updated");
                assert_eq!(updated_task.map(|t| t.id), Some("T-1".to_string()));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn failure_drops_updated_task() {
        let mut signals = UpdateSignals::new("T-1").with_task(task());
        signals.updated_task = Some(task());

        match UpdateOutcome::classify(signals) {
            UpdateOutcome::Completed {
                success,
                message,
                updated_task,
            } => {
                assert!(!success);
                assert_eq!(message, "");
                assert!(updated_task.is_none());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn response_titles() {
        assert_eq!(UpdateOutcome::response_title(true), "Success");
        assert_eq!(UpdateOutcome::response_title(false), "Failure");
    }
}
