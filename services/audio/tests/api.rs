use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use yidun_audio::{AudioCheckRequest, AudioClient, FeedbackItem};
use yidun_core::{Context, Credential, HttpSend};

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

fn audio_client(
    body: &'static str,
    seen: Arc<Mutex<Option<http::Request<Bytes>>>>,
) -> AudioClient {
    let ctx = Context::new().with_http_send(MockHttpSend { body, seen });
    AudioClient::new(ctx, Credential::new("sid", "skey", "bid"))
}

#[tokio::test]
async fn test_check_decodes_detection_blocks() {
    let seen = Arc::new(Mutex::new(None));
    let client = audio_client(
        r#"{"code":200,"msg":"ok","result":{
            "antispam":{"taskId":"t-1","status":2,"suggestion":0,"segments":[]}}}"#,
        seen.clone(),
    );

    let resp = client
        .check(AudioCheckRequest::new("https://example.com/a.mp3"))
        .await
        .unwrap();
    assert_eq!(resp.code, 200);
    let antispam = resp.result.unwrap().antispam.unwrap();
    assert_eq!(antispam.task_id, "t-1");

    let req = seen.lock().unwrap().take().unwrap();
    assert_eq!(req.uri(), "http://as.dun.163.com/v2/audio/check");
    let body = String::from_utf8(req.body().to_vec()).unwrap();
    assert!(body.contains("url=https%3A%2F%2Fexample.com%2Fa.mp3"));
    assert!(body.contains("version=v2.1"));
}

#[tokio::test]
async fn test_query_sends_task_ids_as_json_list() {
    let seen = Arc::new(Mutex::new(None));
    let client = audio_client(
        r#"{"code":200,"msg":"ok","antispam":[{"taskId":"t-1","status":30}]}"#,
        seen.clone(),
    );

    let resp = client.query(&["t-1", "t-2"]).await.unwrap();
    assert_eq!(resp.antispam[0].status, 30);

    let req = seen.lock().unwrap().take().unwrap();
    let body = String::from_utf8(req.body().to_vec()).unwrap();
    // taskIds goes over the wire form-encoded as one JSON string.
    assert!(body.contains("taskIds=%5B%22t-1%22%2C%22t-2%22%5D"));
}

#[tokio::test]
async fn test_feedback_receipts() {
    let seen = Arc::new(Mutex::new(None));
    let client = audio_client(
        r#"{"code":200,"msg":"ok","result":[{"taskId":"t-1","result":0}]}"#,
        seen.clone(),
    );

    let resp = client
        .feedback(&[FeedbackItem::new("t-1", "100")])
        .await
        .unwrap();
    assert_eq!(resp.result[0].result, 0);

    let req = seen.lock().unwrap().take().unwrap();
    assert_eq!(req.uri(), "http://as.dun.163.com/v1/liveaudio/feedback");
}
