use crate::error::LaneError;
use crate::lane::LaneModel;
use serde::Serialize;

/// Memory carried from one frame to the next.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TrackerState {
    /// No accepted model; the next frame runs a blind search.
    #[default]
    Uninitialized,
    /// Guided search around the last accepted model.
    Tracking { model: LaneModel },
}

impl TrackerState {
    pub fn needs_blind_search(&self) -> bool {
        matches!(self, TrackerState::Uninitialized)
    }

    pub fn model(&self) -> Option<&LaneModel> {
        match self {
            TrackerState::Uninitialized => None,
            TrackerState::Tracking { model } => Some(model),
        }
    }

    pub fn phase(&self) -> TrackerPhase {
        match self {
            TrackerState::Uninitialized => TrackerPhase::Uninitialized,
            TrackerState::Tracking { .. } => TrackerPhase::Tracking,
        }
    }
}

/// Data-free label of a [`TrackerState`], for reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackerPhase {
    Uninitialized,
    Tracking,
}

/// Transition taken while processing one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FrameStep {
    /// `Uninitialized` → blind search succeeded → `Tracking`.
    Initialized,
    /// `Uninitialized` → blind search failed → `Uninitialized`.
    InitializationFailed { error: LaneError },
    /// `Tracking` → guided search accepted by the gate → `Tracking`.
    Tracked,
    /// `Tracking` → guided search failed or was rejected, blind fallback
    /// succeeded on the same frame → `Tracking`.
    Recovered { reason: LaneError },
    /// `Tracking` → guided search and blind fallback both failed →
    /// `Uninitialized`.
    Lost { reason: LaneError, error: LaneError },
}

impl FrameStep {
    /// Whether the frame ended with an accepted model.
    pub fn has_model(&self) -> bool {
        matches!(
            self,
            FrameStep::Initialized | FrameStep::Tracked | FrameStep::Recovered { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrameStep::Initialized => "initialized",
            FrameStep::InitializationFailed { .. } => "initializationFailed",
            FrameStep::Tracked => "tracked",
            FrameStep::Recovered { .. } => "recovered",
            FrameStep::Lost { .. } => "lost",
        }
    }
}
