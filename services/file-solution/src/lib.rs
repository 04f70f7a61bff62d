//! Document-check client: per-task verdict queries.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::FileSolutionClient;

mod types;
pub use types::{FileQueryResponse, FileQueryResult};

mod constants;
