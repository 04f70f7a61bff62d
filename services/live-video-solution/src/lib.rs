//! Live audio-video moderation client: callback polling, human-review
//! monitor queries, and windowed audio slice queries.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::LiveVideoSolutionClient;

mod types;
pub use types::{
    AudioTaskQueryRequest, AudioTaskQueryResponse, AudioTaskSlice, FrameEvidence,
    LiveAudioEvidence, LiveSolutionCallbackResponse, LiveSolutionEvidences, LiveSolutionRecord,
    LiveVideoEvidence, MonitorQueryResponse, MonitorQueryResult, MonitorRecord, ReviewEvidence,
};

mod constants;
