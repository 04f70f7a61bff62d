use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use yidun_core::{Context, Credential, HttpSend};
use yidun_crawler::CrawlerClient;

#[derive(Debug)]
struct MockHttpSend {
    body: &'static str,
    seen: Arc<Mutex<Option<http::Request<Bytes>>>>,
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
    ) -> yidun_core::Result<http::Response<Bytes>> {
        *self.seen.lock().unwrap() = Some(req);
        Ok(http::Response::builder()
            .status(200)
            .body(Bytes::from_static(self.body.as_bytes()))
            .expect("response must build"))
    }
}

#[tokio::test]
async fn test_callback_without_business_id() {
    let seen = Arc::new(Mutex::new(None));
    let ctx = Context::new().with_http_send(MockHttpSend {
        body: r#"{"code":200,"msg":"ok","result":[{"antispam":{"taskId":"t-1","suggestion":0}}]}"#,
        seen: seen.clone(),
    });
    let client = CrawlerClient::new(ctx, Credential::without_business_id("sid", "skey"));

    let resp = client.callback().await.unwrap();
    assert_eq!(resp.result[0].antispam.as_ref().unwrap().task_id, "t-1");

    let req = seen.lock().unwrap().take().unwrap();
    assert_eq!(req.uri(), "http://as.dun.163.com/v3/crawler/callback/results");
    let body = String::from_utf8(req.body().to_vec()).unwrap();
    assert!(body.contains("version=v3.0"));
    assert!(!body.contains("businessId"));
}
