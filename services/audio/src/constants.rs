use yidun_core::Endpoint;

pub(crate) const AUDIO_CHECK: Endpoint =
    Endpoint::new("http://as.dun.163.com/v2/audio/check", "v2.1", 1);

pub(crate) const AUDIO_QUERY: Endpoint =
    Endpoint::new("http://as.dun.163.com/v1/audio/query/task", "v1", 10);

pub(crate) const LIVE_AUDIO_CALLBACK: Endpoint =
    Endpoint::new("http://as.dun.163.com/v3/liveaudio/callback/results", "v3", 10);

pub(crate) const LIVE_AUDIO_FEEDBACK: Endpoint =
    Endpoint::new("http://as.dun.163.com/v1/liveaudio/feedback", "v1.0", 10);
