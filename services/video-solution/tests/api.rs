use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use yidun_core::{Context, Credential, HttpSend};
use yidun_video_solution::{SolutionSubmitRequest, VideoSolutionClient};

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

fn solution_client(
    body: &'static str,
    seen: Arc<Mutex<Option<http::Request<Bytes>>>>,
) -> VideoSolutionClient {
    let ctx = Context::new().with_http_send(MockHttpSend { body, seen });
    VideoSolutionClient::new(ctx, Credential::without_business_id("sid", "skey"))
}

#[tokio::test]
async fn test_submit_returns_receipt() {
    let seen = Arc::new(Mutex::new(None));
    let client = solution_client(
        r#"{"code":200,"msg":"ok","result":{"taskId":"t-9","dataId":"d-1"}}"#,
        seen.clone(),
    );

    let resp = client
        .submit(SolutionSubmitRequest::new("d-1", "https://example.com/v.mp4"))
        .await
        .unwrap();
    assert_eq!(resp.result.unwrap().task_id, "t-9");

    let req = seen.lock().unwrap().take().unwrap();
    assert_eq!(req.uri(), "http://as.dun.163.com/v1/videosolution/submit");
    let body = String::from_utf8(req.body().to_vec()).unwrap();
    assert!(body.contains("dataId=d-1"));
    assert!(body.contains("version=v1.1"));
    assert!(!body.contains("businessId"));
}

#[tokio::test]
async fn test_query_decodes_review_evidence() {
    let client = solution_client(
        r#"{"code":200,"msg":"ok","result":[{"taskId":"t-1","status":0,"result":1,
            "reviewEvidences":{"reason":"manual","detail":{}}}]}"#,
        Arc::new(Mutex::new(None)),
    );

    let resp = client.query(&["t-1"]).await.unwrap();
    assert!(resp.result[0].review_evidences.is_some());
    assert!(resp.result[0].evidences.is_none());
}

#[tokio::test]
async fn test_callback_empty_batch() {
    let client = solution_client(
        r#"{"code":200,"msg":"ok","result":[]}"#,
        Arc::new(Mutex::new(None)),
    );

    let resp = client.callback().await.unwrap();
    assert!(resp.result.is_empty());
}
