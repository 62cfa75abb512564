use super::frame::FrameReport;
use crate::tracker::FrameStep;
use serde::Serialize;

/// Number of frames per transition kind over a stream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepCounts {
    pub initialized: usize,
    pub initialization_failed: usize,
    pub tracked: usize,
    pub recovered: usize,
    pub lost: usize,
}

impl StepCounts {
    pub fn record(&mut self, step: &FrameStep) {
        match step {
            FrameStep::Initialized => self.initialized += 1,
            FrameStep::InitializationFailed { .. } => self.initialization_failed += 1,
            FrameStep::Tracked => self.tracked += 1,
            FrameStep::Recovered { .. } => self.recovered += 1,
            FrameStep::Lost { .. } => self.lost += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.initialized + self.initialization_failed + self.tracked + self.recovered + self.lost
    }
}

/// Report over a whole stream of frames.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceReport {
    pub counts: StepCounts,
    pub frames_with_overlay: usize,
    pub frames: Vec<FrameReport>,
}

impl SequenceReport {
    pub fn push(&mut self, report: FrameReport) {
        self.counts.record(&report.step);
        if report.overlay {
            self.frames_with_overlay += 1;
        }
        self.frames.push(report);
    }
}
