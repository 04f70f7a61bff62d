use yidun_core::Endpoint;

pub(crate) const FILE_QUERY: Endpoint =
    Endpoint::without_business_id("http://as-file.dun.163.com/v1/file/query", "v1.1", 10);
