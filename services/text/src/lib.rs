//! Text moderation clients: online check, batch check, async submit.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::TextClient;

mod types;
pub use types::{
    SubmitReceipt, TextBatchAntispam, TextBatchCheckResponse, TextBatchCheckResult,
    TextCheckRequest, TextCheckResponse, TextCheckResult, TextItem, TextSubmitResponse,
};

mod constants;
