use yidun_core::Endpoint;

pub(crate) const LIVE_SOLUTION_CALLBACK: Endpoint = Endpoint::without_business_id(
    "http://as.dun.163.com/v2/livewallsolution/callback/results",
    "v2.1",
    10,
);

pub(crate) const MONITOR_QUERY: Endpoint = Endpoint::without_business_id(
    "http://as.dun.163.com/v1/livewallsolution/query/monitor",
    "v1.0",
    1,
);

pub(crate) const AUDIO_TASK_QUERY: Endpoint = Endpoint::without_business_id(
    "http://as.dun.163yun.com/v1/livewallsolution/query/audio/task",
    "v1.0",
    1,
);
