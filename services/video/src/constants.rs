use yidun_core::Endpoint;

pub(crate) const VIDEO_IMAGE_QUERY: Endpoint =
    Endpoint::new("http://as.dun.163.com/v1/video/query/image", "v1", 10);

pub(crate) const LIVE_VIDEO_CALLBACK: Endpoint =
    Endpoint::new("http://as.dun.163.com/v4/livevideo/callback/results", "v4", 10);

pub(crate) const LIVE_WALL_CALLBACK: Endpoint =
    Endpoint::new("http://as.dun.163.com/v2/livewall/callback/results", "v2", 10);

pub(crate) const LIVE_VIDEO_FEEDBACK: Endpoint =
    Endpoint::new("http://as.dun.163.com/v1/livevideo/feedback", "v1.0", 1);
