use yidun_core::Endpoint;

pub(crate) const MEDIA_CALLBACK: Endpoint = Endpoint::without_business_id(
    "http://as.dun.163.com/v1/mediasolution/callback/results",
    "v1",
    10,
);
