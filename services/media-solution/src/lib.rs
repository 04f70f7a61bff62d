//! Mixed-media moderation client: callback polling for submissions that mix
//! text, images, audio, video, and documents.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::MediaSolutionClient;

mod types;
pub use types::{
    MediaAudioEvidence, MediaAvEvidence, MediaCallbackResponse, MediaCallbackResult,
    MediaEvidences, MediaFileEvidence, MediaImageEvidence, MediaTextEvidence, MediaVideoEvidence,
};

mod constants;
