use log::debug;
use yidun_core::{Client, Context, Credential, Params, Result, SignatureMethod};

use crate::constants::{
    LIVE_VIDEO_CALLBACK, LIVE_VIDEO_FEEDBACK, LIVE_WALL_CALLBACK, VIDEO_IMAGE_QUERY,
};
use crate::types::{
    LiveVideoCallbackResponse, LiveWallCallbackResponse, RealTimeInfo, VideoFeedbackResponse,
    VideoImageQueryRequest, VideoImageQueryResponse,
};

/// Client for the video and live-video moderation endpoints.
#[derive(Debug, Clone)]
pub struct VideoClient {
    client: Client,
}

impl VideoClient {
    /// Create a video client. The credential must carry a business id.
    pub fn new(ctx: Context, credential: Credential) -> Self {
        Self {
            client: Client::new(ctx, credential),
        }
    }

    /// Sign requests with SM3 instead of the default MD5.
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.client = self.client.with_signature_method(method);
        self
    }

    /// Page through flagged screenshots of an on-demand video task (v1).
    pub async fn image_query(
        &self,
        request: VideoImageQueryRequest,
    ) -> Result<VideoImageQueryResponse> {
        debug!("querying screenshots for task {}", request.task_id);
        self.client
            .call(&VIDEO_IMAGE_QUERY, request.into_params()?)
            .await
    }

    /// Poll finished live-video verdicts (v4). An empty batch means nothing
    /// is pending.
    pub async fn live_callback(&self) -> Result<LiveVideoCallbackResponse> {
        self.client.call(&LIVE_VIDEO_CALLBACK, Params::new()).await
    }

    /// Poll finished live wall records (v2), including human-review actions.
    pub async fn wall_callback(&self) -> Result<LiveWallCallbackResponse> {
        self.client.call(&LIVE_WALL_CALLBACK, Params::new()).await
    }

    /// Update live stream statuses, e.g. mark a stream as finished (v1.0).
    pub async fn feedback(&self, infos: &[RealTimeInfo]) -> Result<VideoFeedbackResponse> {
        debug!("sending {} stream updates", infos.len());
        let mut params = Params::new();
        params.insert_json("realTimeInfoList", &infos)?;
        self.client.call(&LIVE_VIDEO_FEEDBACK, params).await
    }
}
