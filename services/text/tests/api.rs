use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use yidun_core::types::Suggestion;
use yidun_core::{Context, Credential, HttpSend};
use yidun_text::{TextCheckRequest, TextClient, TextItem};

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

fn text_client(body: &'static str, seen: Arc<Mutex<Option<http::Request<Bytes>>>>) -> TextClient {
    let ctx = Context::new().with_http_send(MockHttpSend { body, seen });
    TextClient::new(ctx, Credential::new("sid", "skey", "bid"))
}

#[tokio::test]
async fn test_check_round_trip() {
    let seen = Arc::new(Mutex::new(None));
    let client = text_client(
        r#"{"code":200,"msg":"ok","result":{"action":1,"taskId":"task-42","labels":[{"label":200,"level":1}]}}"#,
        seen.clone(),
    );

    let resp = client
        .check(TextCheckRequest::new("d-1", "hello"))
        .await
        .unwrap();
    assert_eq!(resp.code, 200);
    let result = resp.result.unwrap();
    assert_eq!(result.action, Suggestion::Review);
    assert_eq!(result.task_id, "task-42");

    let req = seen.lock().unwrap().take().unwrap();
    assert_eq!(req.uri(), "http://as.dun.163.com/v3/text/check");
    let body = String::from_utf8(req.body().to_vec()).unwrap();
    assert!(body.contains("dataId=d-1"));
    assert!(body.contains("version=v3.1"));
}

#[tokio::test]
async fn test_submit_returns_receipts() {
    let seen = Arc::new(Mutex::new(None));
    let client = text_client(
        r#"{"code":200,"msg":"ok","result":[{"dataId":"d-1","taskId":"t-1"},{"dataId":"d-2","taskId":"t-2"}]}"#,
        seen.clone(),
    );

    let resp = client
        .submit(&[TextItem::new("d-1", "a"), TextItem::new("d-2", "b")])
        .await
        .unwrap();
    assert_eq!(resp.result.len(), 2);
    assert_eq!(resp.result[1].task_id, "t-2");

    let req = seen.lock().unwrap().take().unwrap();
    assert_eq!(req.uri(), "http://as.dun.163.com/v1/text/submit");
}

#[tokio::test]
async fn test_batch_check_error_envelope() {
    let client = text_client(
        r#"{"code":419,"msg":"qps limit"}"#,
        Arc::new(Mutex::new(None)),
    );

    let resp = client
        .batch_check(&[TextItem::new("d-1", "a")], None)
        .await
        .unwrap();
    assert_eq!(resp.code, 419);
    assert_eq!(resp.msg, "qps limit");
    assert!(resp.result.is_empty());
}
