use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use yidun_core::{Context, Credential, HttpSend};
use yidun_video::{RealTimeInfo, VideoClient, VideoImageQueryRequest};

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

fn video_client(
    body: &'static str,
    seen: Arc<Mutex<Option<http::Request<Bytes>>>>,
) -> VideoClient {
    let ctx = Context::new().with_http_send(MockHttpSend { body, seen });
    VideoClient::new(ctx, Credential::new("sid", "skey", "bid"))
}

#[tokio::test]
async fn test_image_query_paging_params() {
    let seen = Arc::new(Mutex::new(None));
    let client = video_client(
        r#"{"code":200,"msg":"ok","result":{"status":0,"images":{"count":0,"rows":[]}}}"#,
        seen.clone(),
    );

    let mut request = VideoImageQueryRequest::new("t-1", vec![1, 2]);
    request.page_size = Some(20);
    let resp = client.image_query(request).await.unwrap();
    assert_eq!(resp.result.unwrap().status, 0);

    let req = seen.lock().unwrap().take().unwrap();
    assert_eq!(req.uri(), "http://as.dun.163.com/v1/video/query/image");
    let body = String::from_utf8(req.body().to_vec()).unwrap();
    assert!(body.contains("taskId=t-1"));
    assert!(body.contains("levels=%5B1%2C2%5D"));
    assert!(body.contains("pageSize=20"));
}

#[tokio::test]
async fn test_live_callback_empty_batch() {
    let client = video_client(
        r#"{"code":200,"msg":"ok","result":[]}"#,
        Arc::new(Mutex::new(None)),
    );

    let resp = client.live_callback().await.unwrap();
    assert_eq!(resp.code, 200);
    assert!(resp.result.is_empty());
}

#[tokio::test]
async fn test_feedback_sends_real_time_info_list() {
    let seen = Arc::new(Mutex::new(None));
    let client = video_client(
        r#"{"code":200,"msg":"ok","result":[{"taskId":"t-1","result":2}]}"#,
        seen.clone(),
    );

    let resp = client
        .feedback(&[RealTimeInfo::new("t-1", "100")])
        .await
        .unwrap();
    assert_eq!(resp.result[0].result, 2);

    let req = seen.lock().unwrap().take().unwrap();
    let body = String::from_utf8(req.body().to_vec()).unwrap();
    assert!(body.contains("realTimeInfoList=%5B%7B%22taskId%22%3A%22t-1%22"));
}
