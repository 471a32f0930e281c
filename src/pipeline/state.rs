//! Pipeline lifecycle states.

use serde::Serialize;
use std::fmt;

/// States of a pipeline run.
///
/// A run moves `Idle → Loading → Normalizing → Filtering → Aggregating →
/// Writing → Done`. Loading may go straight to `Done` when the source holds
/// no records, and any working state may end in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    Loading,
    Normalizing,
    Filtering,
    Aggregating,
    Writing,
    Done,
    Failed,
}

impl PipelineState {
    /// The states that perform work, in execution order.
    pub const STAGES: [PipelineState; 5] = [
        PipelineState::Loading,
        PipelineState::Normalizing,
        PipelineState::Filtering,
        PipelineState::Aggregating,
        PipelineState::Writing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::Loading => "loading",
            PipelineState::Normalizing => "normalizing",
            PipelineState::Filtering => "filtering",
            PipelineState::Aggregating => "aggregating",
            PipelineState::Writing => "writing",
            PipelineState::Done => "done",
            PipelineState::Failed => "failed",
        }
    }

    /// Position in `STAGES`, for working states only.
    pub fn stage_index(&self) -> Option<usize> {
        Self::STAGES.iter().position(|stage| stage == self)
    }

    /// Whether the run has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: PipelineState) -> bool {
        use PipelineState::*;

        match (*self, next) {
            (Idle, Loading)
            | (Loading, Normalizing)
            | (Loading, Done)
            | (Normalizing, Filtering)
            | (Filtering, Aggregating)
            | (Aggregating, Writing)
            | (Writing, Done) => true,
            (from, Failed) => from.stage_index().is_some(),
            _ => false,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
