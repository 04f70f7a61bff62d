//! On-demand audio-video moderation client: async submit, per-task verdict
//! queries, and callback polling.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::VideoSolutionClient;

mod types;
pub use types::{
    SolutionAudioEvidence, SolutionCallbackResponse, SolutionCallbackResult, SolutionEvidences,
    SolutionImageEvidence, SolutionQueryResponse, SolutionQueryResult, SolutionSubmitReceipt,
    SolutionSubmitRequest, SolutionSubmitResponse, SolutionTextEvidence, SolutionVideoEvidence,
    SubmitImage,
};

mod constants;
