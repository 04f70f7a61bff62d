use yidun_core::Endpoint;

pub(crate) const REPORT_SUBMIT: Endpoint =
    Endpoint::without_business_id("http://as.dun.163.com/v1/report/submit", "v1", 1);

pub(crate) const REPORT_QUERY: Endpoint =
    Endpoint::new("http://as.dun.163.com/v1/report/callback/query", "v1", 10);
