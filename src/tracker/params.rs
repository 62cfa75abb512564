//! Parameter types configuring the tracker stages.
//!
//! Defaults reproduce the tuning for 1280×720 bird's-eye frames: nine
//! 100-px-wide windows, a 50 px guided margin and a 2.0–3.2 m lane envelope.

use crate::gate::PlausibilityEnvelope;
use crate::lane::{BlindSearchOptions, GuidedSearchOptions};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerParams {
    /// Sliding-window search used on (re)initialisation.
    pub blind: BlindSearchOptions,
    /// Prior-guided search used while tracking.
    pub guided: GuidedSearchOptions,
    /// Lane-width envelope applied to guided results.
    pub envelope: PlausibilityEnvelope,
}
