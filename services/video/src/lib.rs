//! Video moderation clients: on-demand screenshot queries, live-video and
//! live wall callback polling, and live stream feedback.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::VideoClient;

mod types;
pub use types::{
    LiveVideoAntispam, LiveVideoCallbackResponse, LiveVideoCallbackResult, LiveWallCallbackResponse,
    LiveWallRecord, RealTimeInfo, VideoFeedbackReceipt, VideoFeedbackResponse, VideoImagePage,
    VideoImageQueryRequest, VideoImageQueryResponse, VideoImageQueryResult, VideoImageRow,
};

mod constants;
