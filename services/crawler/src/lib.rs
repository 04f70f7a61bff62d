//! Site-check (crawler) client: callback polling for crawled-page verdicts.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::CrawlerClient;

mod types;
pub use types::{CrawlerAntispam, CrawlerCallbackResponse, CrawlerCallbackResult};

mod constants;
