use yidun_core::Endpoint;

pub(crate) const IMAGE_CHECK: Endpoint =
    Endpoint::new("http://as.dun.163yun.com/v4/image/check", "v4", 10);

pub(crate) const IMAGE_SUBMIT: Endpoint =
    Endpoint::new("http://as.dun.163.com/v1/image/submit", "v1", 10);

pub(crate) const IMAGE_CALLBACK: Endpoint =
    Endpoint::new("https://as.dun.163yun.com/v4/image/callback/results", "v4", 10);

pub(crate) const IMAGE_LIST_QUERY: Endpoint =
    Endpoint::new("http://as.dun.163.com/v1/image/list/pageQuery", "v1.0", 10);
