//! Frame-to-frame lane tracking state machine.
//!
//! States and transitions, one per processed bird's-eye mask:
//!
//! ```text
//! Uninitialized --blind ok-------------------------------> Tracking   (Initialized)
//! Uninitialized --blind fails----------------------------> Uninitialized (InitializationFailed)
//! Tracking      --guided ok, gate accepts----------------> Tracking   (Tracked)
//! Tracking      --guided fails / gate rejects, blind ok--> Tracking   (Recovered)
//! Tracking      --guided fails / gate rejects, blind fails> Uninitialized (Lost)
//! ```
//!
//! The gate only judges guided results; a blind search on an uninitialised
//! tracker is accepted as soon as both boundaries fit. There is no terminal
//! state. [`LaneTracker::reset`] returns to `Uninitialized` at a stream
//! restart.
//!
//! The tracker is owned by a single caller and mutated through `&mut self`
//! once per frame, so guided search always reads a fully committed prior.

mod params;
mod state;

pub use params::TrackerParams;
pub use state::{FrameStep, TrackerPhase, TrackerState};

use crate::error::LaneError;
use crate::gate::ConsistencyGate;
use crate::image::BinaryMask;
use crate::lane::{LaneLocator, LaneModel};
use log::{debug, warn};

pub struct LaneTracker {
    locator: LaneLocator,
    gate: ConsistencyGate,
    state: TrackerState,
    frames_seen: u64,
}

impl LaneTracker {
    pub fn new(params: TrackerParams) -> Self {
        Self {
            locator: LaneLocator::new(params.blind, params.guided),
            gate: ConsistencyGate::new(params.envelope),
            state: TrackerState::Uninitialized,
            frames_seen: 0,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Last accepted model, `None` while uninitialised.
    pub fn model(&self) -> Option<&LaneModel> {
        self.state.model()
    }

    pub fn gate(&self) -> &ConsistencyGate {
        &self.gate
    }

    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    /// Forget the current model; the next frame starts with a blind search.
    pub fn reset(&mut self) {
        debug!("LaneTracker::reset after {} frames", self.frames_seen);
        self.state = TrackerState::Uninitialized;
        self.frames_seen = 0;
    }

    /// Guided search around the stored model, without touching the state.
    pub fn guided_search(&self, mask: &BinaryMask) -> Result<LaneModel, LaneError> {
        let prior = self.state.model().ok_or(LaneError::NoPriorModel)?;
        self.locator.guided_search(mask, prior)
    }

    /// Advance the state machine by one bird's-eye mask.
    pub fn update(&mut self, mask: &BinaryMask) -> FrameStep {
        self.frames_seen += 1;
        let (next, step) = match std::mem::take(&mut self.state) {
            TrackerState::Uninitialized => match self.blind(mask) {
                Ok(model) => (TrackerState::Tracking { model }, FrameStep::Initialized),
                Err(error) => {
                    debug!("LaneTracker: initialization failed: {error}");
                    (TrackerState::Uninitialized, FrameStep::InitializationFailed { error })
                }
            },
            TrackerState::Tracking { model: prior } => match self.track(mask, &prior) {
                Ok(model) => (TrackerState::Tracking { model }, FrameStep::Tracked),
                Err(reason) => {
                    debug!("LaneTracker: guided result dropped ({reason}), running blind search");
                    match self.blind(mask) {
                        Ok(model) => (TrackerState::Tracking { model }, FrameStep::Recovered { reason }),
                        Err(error) => {
                            warn!("LaneTracker: lane lost at frame {}: {error}", self.frames_seen);
                            (TrackerState::Uninitialized, FrameStep::Lost { reason, error })
                        }
                    }
                }
            },
        };
        self.state = next;
        step
    }

    fn blind(&self, mask: &BinaryMask) -> Result<LaneModel, LaneError> {
        self.locator.blind_search(mask).map(|found| found.model)
    }

    fn track(&self, mask: &BinaryMask, prior: &LaneModel) -> Result<LaneModel, LaneError> {
        let model = self.locator.guided_search(mask, prior)?;
        self.gate.check(&model)?;
        Ok(model)
    }
}

impl Default for LaneTracker {
    fn default() -> Self {
        Self::new(TrackerParams::default())
    }
}
