//! Audio moderation clients: online check, offline task query, live-audio
//! callback polling, and live stream feedback.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::AudioClient;

mod types;
pub use types::{
    AudioAntispam, AudioAsr, AudioCheckRequest, AudioCheckResponse, AudioCheckResult,
    AudioLanguage, AudioQueryAntispam, AudioQueryAsr, AudioQueryLanguage, AudioQueryResponse,
    AudioVoice, FeedbackItem, FeedbackReceipt, FeedbackResponse, LanguageDetail,
    LiveAudioAntispam, LiveAudioAsr, LiveAudioCallbackResponse, LiveAudioCallbackResult,
};

mod constants;
