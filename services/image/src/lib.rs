//! Image moderation clients: online check, async submit, review callback,
//! and list management queries.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod api;
pub use api::ImageClient;

mod types;
pub use types::{
    image_type, FaceDetail, ImageAntispamResult, ImageCallbackResponse, ImageCheckRequest,
    ImageCheckResponse, ImageFaceResult, ImageItem, ImageListPage, ImageListQueryRequest,
    ImageListQueryResponse, ImageListRow, ImageOcrResult, ImageSubmitReceipt,
    ImageSubmitResponse, OcrDetail,
};

mod constants;
