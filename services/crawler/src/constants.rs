use yidun_core::Endpoint;

pub(crate) const CRAWLER_CALLBACK: Endpoint = Endpoint::without_business_id(
    "http://as.dun.163.com/v3/crawler/callback/results",
    "v3.0",
    10,
);
