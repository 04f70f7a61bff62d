use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use yidun_core::{Context, Credential, HttpSend};
use yidun_report::{ReportClient, ReportItem, ReportSubmitRequest};

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

fn report_client(
    body: &'static str,
    seen: Arc<Mutex<Option<http::Request<Bytes>>>>,
) -> ReportClient {
    let ctx = Context::new().with_http_send(MockHttpSend { body, seen });
    ReportClient::new(ctx, Credential::new("sid", "skey", "bid"))
}

#[tokio::test]
async fn test_submit_has_no_business_id() {
    let seen = Arc::new(Mutex::new(None));
    let client = report_client(
        r#"{"code":200,"msg":"ok","antispam":{"taskId":"t-1"}}"#,
        seen.clone(),
    );

    let resp = client
        .submit(ReportSubmitRequest::new(
            "user-7",
            vec![ReportItem::text("spam", "02")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.antispam.unwrap().task_id, "t-1");

    let req = seen.lock().unwrap().take().unwrap();
    assert_eq!(req.uri(), "http://as.dun.163.com/v1/report/submit");
    let body = String::from_utf8(req.body().to_vec()).unwrap();
    // Submit signs without businessId even when the credential carries one.
    assert!(!body.contains("businessId"));
    assert!(body.contains("reportedId=user-7"));
}

#[tokio::test]
async fn test_query_sends_business_id() {
    let seen = Arc::new(Mutex::new(None));
    let client = report_client(r#"{"code":200,"msg":"ok","result":[]}"#, seen.clone());

    let resp = client.query(&["t-1"]).await.unwrap();
    assert!(resp.result.is_empty());

    let req = seen.lock().unwrap().take().unwrap();
    assert_eq!(req.uri(), "http://as.dun.163.com/v1/report/callback/query");
    let body = String::from_utf8(req.body().to_vec()).unwrap();
    assert!(body.contains("businessId=bid"));
}
