//! Serializable reports produced by the frame pipeline and the demo tool.
//!
//! [`FrameReport`] describes a single frame: the tracker transition, the
//! accepted model with its measured widths and metrics, and per-stage
//! timings. [`SequenceReport`] aggregates them over a stream.

pub mod frame;
pub mod sequence;
pub mod timing;

pub use frame::{FrameReport, InputDescriptor};
pub use sequence::{SequenceReport, StepCounts};
pub use timing::{StageTiming, TimingBreakdown};
