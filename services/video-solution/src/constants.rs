use yidun_core::Endpoint;

pub(crate) const SOLUTION_SUBMIT: Endpoint =
    Endpoint::without_business_id("http://as.dun.163.com/v1/videosolution/submit", "v1.1", 1);

pub(crate) const SOLUTION_QUERY: Endpoint =
    Endpoint::without_business_id("http://as.dun.163.com/v1/videosolution/query/task", "v1", 10);

pub(crate) const SOLUTION_CALLBACK: Endpoint = Endpoint::without_business_id(
    "http://as.dun.163.com/v1/videosolution/callback/results",
    "v1.1",
    10,
);
