use lp_core::enums::{AiTask, TaskStage};
use lp_core::errors::CoreError;

/// Stage machine for one orchestrator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTracker {
    task: AiTask,
    stage: TaskStage,
}

impl StageTracker {
    #[must_use]
    pub const fn start(task: AiTask) -> Self {
        Self {
            task,
            stage: TaskStage::Pending,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> TaskStage {
        self.stage
    }

    /// Move to `next`, rejecting transitions the stage machine does not allow.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when `next` is not reachable
    /// from the current stage.
    pub fn advance(&mut self, next: TaskStage) -> Result<(), CoreError> {
        if !self.stage.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "ai_task".to_string(),
                id: self.task.to_string(),
                from: self.stage.to_string(),
                to: next.to_string(),
            });
        }
        tracing::debug!(task = %self.task, from = %self.stage, to = %next, "stage transition");
        self.stage = next;
        Ok(())
    }

    /// Record a failure. A tracker that already finished is left alone.
    pub fn fail(&mut self, reason: &dyn std::fmt::Display) {
        if self.stage.is_terminal() {
            return;
        }
        tracing::debug!(task = %self.task, from = %self.stage, %reason, "stage transition to failed");
        self.stage = TaskStage::Failed;
    }
}
