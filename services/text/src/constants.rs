use yidun_core::Endpoint;

pub(crate) const TEXT_CHECK: Endpoint =
    Endpoint::new("http://as.dun.163.com/v3/text/check", "v3.1", 1);

pub(crate) const TEXT_BATCH_CHECK: Endpoint =
    Endpoint::new("http://as.dun.163.com/v5/text/batch-check", "v5.2", 1);

pub(crate) const TEXT_SUBMIT: Endpoint =
    Endpoint::new("http://as.dun.163.com/v1/text/submit", "v1", 1);
