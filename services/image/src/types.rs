use serde::{Deserialize, Serialize};
use yidun_core::types::{Label, Suggestion};
use yidun_core::{Params, Result};

/// How an [`ImageItem`]'s `data` field is to be read.
pub mod image_type {
    /// `data` is a URL.
    pub const URL: i32 = 1;
    /// `data` is base64-encoded image bytes.
    pub const BASE64: i32 = 2;
}

/// One image entry, serialized into the `images` JSON list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    /// Caller-chosen name; also used to correlate results.
    pub name: String,
    /// URL or base64 payload, per `type`.
    pub data: String,
    /// See [`image_type`]. The submit endpoint infers it and takes none.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<i32>,
    /// Priority level on submit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Callback URL for push delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl ImageItem {
    /// An image referenced by URL.
    pub fn url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: url.into(),
            image_type: Some(image_type::URL),
            ..Default::default()
        }
    }

    /// An image carried inline as base64.
    pub fn base64(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            image_type: Some(image_type::BASE64),
            ..Default::default()
        }
    }
}

/// Parameters for the online image check.
#[derive(Debug, Clone, Default)]
pub struct ImageCheckRequest {
    /// The images to moderate.
    pub images: Vec<ImageItem>,
    /// Account of the uploader.
    pub account: Option<String>,
    /// Client IP of the uploader.
    pub ip: Option<String>,
}

impl ImageCheckRequest {
    /// A request for the given images.
    pub fn new(images: Vec<ImageItem>) -> Self {
        Self {
            images,
            ..Default::default()
        }
    }

    pub(crate) fn into_params(self) -> Result<Params> {
        let mut params = Params::new();
        params.insert_json("images", &self.images)?;
        if let Some(account) = self.account {
            params.insert("account", account);
        }
        if let Some(ip) = self.ip {
            params.insert("ip", ip);
        }
        Ok(params)
    }
}

/// Envelope of the online image check.
#[derive(Debug, Deserialize)]
pub struct ImageCheckResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Per-image moderation verdicts.
    #[serde(default)]
    pub antispam: Vec<ImageAntispamResult>,
    /// Per-image OCR extractions.
    #[serde(default)]
    pub ocr: Vec<ImageOcrResult>,
    /// Per-image face detections.
    #[serde(default)]
    pub face: Vec<ImageFaceResult>,
}

/// Moderation verdict for one image.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageAntispamResult {
    /// The name given on submission.
    pub name: String,
    /// Server-assigned task id.
    pub task_id: String,
    /// Per-image processing status: 0 ok, 610 download failed,
    /// 620 bad format, 630 other.
    pub status: i32,
    /// Machine verdict, meaningful when `status == 0`.
    pub action: Suggestion,
    /// Violation classifications.
    pub labels: Vec<Label>,
}

/// OCR result for one image.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageOcrResult {
    /// The name given on submission.
    pub name: String,
    /// Server-assigned task id.
    pub task_id: String,
    /// Extracted text fragments.
    pub details: Vec<OcrDetail>,
}

/// One OCR extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OcrDetail {
    /// Full recognized text.
    pub content: String,
    /// Per-line fragments with coordinates.
    pub line_contents: Vec<serde_json::Value>,
}

/// Face detection result for one image.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageFaceResult {
    /// The name given on submission.
    pub name: String,
    /// Server-assigned task id.
    pub task_id: String,
    /// Detected faces.
    pub details: Vec<FaceDetail>,
}

/// One face detection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaceDetail {
    /// Number of faces found.
    pub face_number: i32,
    /// Identity and coordinate info per face.
    pub face_contents: Vec<serde_json::Value>,
}

/// Envelope of the async image submit.
#[derive(Debug, Deserialize)]
pub struct ImageSubmitResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// One receipt per submitted image.
    #[serde(default)]
    pub result: Vec<ImageSubmitReceipt>,
}

/// Receipt for one submitted image.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSubmitReceipt {
    /// The name given on submission.
    pub name: String,
    /// Server-assigned task id.
    pub task_id: String,
}

/// Envelope of the human-review callback poll.
#[derive(Debug, Deserialize)]
pub struct ImageCallbackResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// Finished human-review verdicts; empty when nothing is pending.
    #[serde(default)]
    pub antispam: Vec<ImageAntispamResult>,
}

/// Parameters for the image list page query.
#[derive(Debug, Clone, Default)]
pub struct ImageListQueryRequest {
    /// 1-based page number.
    pub page_num: u32,
    /// Page size.
    pub page_size: u32,
    /// Window start, milliseconds.
    pub start_time: Option<i64>,
    /// Window end, milliseconds.
    pub end_time: Option<i64>,
    /// Image source type filter.
    pub image_type: Option<i32>,
    /// List type filter (black/white lists).
    pub list_type: Option<i32>,
    /// Entry status filter.
    pub status: Option<i32>,
}

impl ImageListQueryRequest {
    /// Query one page.
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
            ..Default::default()
        }
    }

    pub(crate) fn into_params(self) -> Params {
        let mut params = Params::new();
        params.insert("pageNum", self.page_num.to_string());
        params.insert("pageSize", self.page_size.to_string());
        let optional = [
            ("startTime", self.start_time.map(|v| v.to_string())),
            ("endTime", self.end_time.map(|v| v.to_string())),
            ("type", self.image_type.map(|v| v.to_string())),
            ("listType", self.list_type.map(|v| v.to_string())),
            ("status", self.status.map(|v| v.to_string())),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                params.insert(key, value);
            }
        }
        params
    }
}

/// Envelope of the image list page query.
#[derive(Debug, Deserialize)]
pub struct ImageListQueryResponse {
    /// API status code, 200 on success.
    pub code: i32,
    /// Human-readable status message.
    pub msg: String,
    /// The requested page, present on success.
    #[serde(default)]
    pub result: Option<ImageListPage>,
}

/// One page of list entries.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageListPage {
    /// Total entry count across all pages.
    pub count: i64,
    /// Entries on this page.
    pub rows: Vec<ImageListRow>,
}

/// One black/white-list entry.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageListRow {
    /// Owning business.
    pub business_id: Option<i64>,
    /// Owning product.
    pub product_id: Option<i64>,
    /// Entry uuid.
    pub uuid: String,
    /// Image URL.
    pub url: String,
    /// How often the entry matched.
    pub hit_count: i64,
    /// Label the entry carries.
    pub image_label: Option<i32>,
    /// Entry status.
    pub status: Option<i32>,
    /// List type (black/white).
    pub list_type: Option<i32>,
    /// Storage path.
    pub nos_path: Option<String>,
}
