//! Complaint/report moderation client: async submit and per-task verdict
//! queries.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::ReportClient;

mod types;
pub use types::{
    ReportAntispam, ReportItem, ReportQueryResponse, ReportQueryResult, ReportReceipt,
    ReportSubmitRequest, ReportSubmitResponse,
};

mod constants;
